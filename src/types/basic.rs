// Copyright (c) 2019-2022  Equipo rebtcalc

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Enumeraciones básicas de la instalación eléctrica

use std::fmt;
use std::str;

use serde::{Deserialize, Serialize};

use crate::error::RebtError;

/// Tipo de circuito derivado.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CircuitKind {
    /// Circuito de iluminación
    ILU,
    /// Circuito de tomas de corriente y cargas fijas
    TOM,
}

impl str::FromStr for CircuitKind {
    type Err = RebtError;

    fn from_str(s: &str) -> Result<CircuitKind, Self::Err> {
        match s {
            "ILU" => Ok(CircuitKind::ILU),
            "TOM" => Ok(CircuitKind::TOM),
            _ => Err(RebtError::CircuitKindUnknown(s.into())),
        }
    }
}

impl fmt::Display for CircuitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Categoría de un consumo itemizado.
///
/// La asignación categoría -> factor de demanda es una decisión explícita del
/// llamador: las tomas generales usan `FACTOR_DEMANDA_TOMA` y las cargas
/// fijas `FACTOR_DEMANDA_CARGAS_FIJAS`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsumptionKind {
    /// Toma de corriente de uso general
    TOMA,
    /// Carga fija (aparato de instalación permanente)
    FIJA,
}

impl Default for ConsumptionKind {
    fn default() -> ConsumptionKind {
        ConsumptionKind::TOMA
    }
}

impl str::FromStr for ConsumptionKind {
    type Err = RebtError;

    fn from_str(s: &str) -> Result<ConsumptionKind, Self::Err> {
        match s {
            "TOMA" => Ok(ConsumptionKind::TOMA),
            "FIJA" => Ok(ConsumptionKind::FIJA),
            "" => Ok(ConsumptionKind::default()),
            _ => Err(RebtError::ConsumptionKindUnknown(s.into())),
        }
    }
}

impl fmt::Display for ConsumptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Material del conductor.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConductorMaterial {
    /// Cobre
    CU,
    /// Aluminio
    AL,
}

impl Default for ConductorMaterial {
    fn default() -> ConductorMaterial {
        ConductorMaterial::CU
    }
}

impl str::FromStr for ConductorMaterial {
    type Err = RebtError;

    fn from_str(s: &str) -> Result<ConductorMaterial, Self::Err> {
        match s {
            "CU" => Ok(ConductorMaterial::CU),
            "AL" => Ok(ConductorMaterial::AL),
            _ => Err(RebtError::MaterialUnknown(s.into())),
        }
    }
}

impl fmt::Display for ConductorMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Curva de disparo de un interruptor automático.
///
/// El orden derivado es el lexicográfico (B < C < D); la preferencia de
/// selección en empates de calibre se define en el selector de protecciones.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BreakerCurve {
    /// Curva B (disparo 3-5 In)
    B,
    /// Curva C (disparo 5-10 In)
    C,
    /// Curva D (disparo 10-20 In)
    D,
}

impl str::FromStr for BreakerCurve {
    type Err = RebtError;

    fn from_str(s: &str) -> Result<BreakerCurve, Self::Err> {
        match s {
            "B" => Ok(BreakerCurve::B),
            "C" => Ok(BreakerCurve::C),
            "D" => Ok(BreakerCurve::D),
            _ => Err(RebtError::CurveUnknown(s.into())),
        }
    }
}

impl fmt::Display for BreakerCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn basic_enums_roundtrip() {
        assert_eq!(CircuitKind::from_str("ILU").unwrap(), CircuitKind::ILU);
        assert_eq!(CircuitKind::TOM.to_string(), "TOM");
        assert_eq!(
            ConsumptionKind::from_str("").unwrap(),
            ConsumptionKind::TOMA
        );
        assert_eq!(BreakerCurve::from_str("C").unwrap(), BreakerCurve::C);
        assert!(ConductorMaterial::from_str("FE").is_err());
    }

    #[test]
    fn curve_order_is_lexicographic() {
        assert!(BreakerCurve::B < BreakerCurve::C);
        assert!(BreakerCurve::C < BreakerCurve::D);
    }
}
