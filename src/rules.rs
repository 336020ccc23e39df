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

/*!
Reglas normativas
=================

Resolución de constantes normativas por código de regla.

El núcleo de cálculo consulta todas sus constantes (VA por m2, factores de
demanda, techos de circuito) a través del trait [`RuleProvider`]. La
implementación [`InMemoryRules`] cubre el uso en pruebas y en la CLI; un
servidor puede implementar el trait sobre su propia tabla de reglas.

Una regla ausente sin valor de reserva es un error fatal del cálculo en
curso: el núcleo nunca sustituye un valor por defecto de forma silenciosa.
*/

use std::collections::HashMap;
use std::fmt;
use std::str;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::{RebtError, Result};

/// Carga de iluminación por superficie [VA/m2]
pub const LUZ_VA_POR_M2: &str = "LUZ_VA_POR_M2";
/// Factor de demanda de iluminación
pub const FACTOR_DEMANDA_LUZ: &str = "FACTOR_DEMANDA_LUZ";
/// Factor de demanda de tomas generales
pub const FACTOR_DEMANDA_TOMA: &str = "FACTOR_DEMANDA_TOMA";
/// Factor de demanda de cargas fijas
pub const FACTOR_DEMANDA_CARGAS_FIJAS: &str = "FACTOR_DEMANDA_CARGAS_FIJAS";
/// Carga máxima por circuito de iluminación [VA]
pub const ILU_VA_MAX_POR_CIRCUITO: &str = "ILU_VA_MAX_POR_CIRCUITO";
/// Carga máxima por circuito de tomas [VA]
pub const TOMA_VA_MAX_POR_CIRCUITO: &str = "TOMA_VA_MAX_POR_CIRCUITO";

/// Proveedor de constantes normativas
///
/// Única dependencia hacia el exterior del núcleo de cálculo. Las búsquedas
/// son de solo lectura y pueden ejecutarse en paralelo para proyectos
/// distintos sin bloqueo.
pub trait RuleProvider {
    /// Resuelve el valor numérico de un código de regla
    ///
    /// Devuelve el valor de reserva si el código no está definido y se aportó
    /// uno; en caso contrario falla con `RuleNotFound`.
    fn get_number(&self, code: &str, fallback: Option<f32>) -> Result<f32>;
}

/// Tabla de reglas en memoria, clave -> valor
///
/// #META REGLAS
/// LUZ_VA_POR_M2: 100
/// FACTOR_DEMANDA_LUZ: 0.66
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InMemoryRules {
    /// Valores por código de regla
    pub rules: HashMap<String, f32>,
}

impl RuleProvider for InMemoryRules {
    fn get_number(&self, code: &str, fallback: Option<f32>) -> Result<f32> {
        match self.rules.get(code) {
            Some(value) => Ok(*value),
            None => fallback.ok_or_else(|| RebtError::RuleNotFound(code.into())),
        }
    }
}

impl InMemoryRules {
    /// Tabla con los valores reglamentarios por defecto
    ///
    /// - 100 VA/m2 de iluminación
    /// - factores de demanda 0.66 (luz), 0.8 (tomas), 1.0 (cargas fijas)
    /// - techos de circuito de 1500 VA (iluminación) y 2000 VA (tomas)
    pub fn regulation_defaults() -> Self {
        let mut rules = InMemoryRules::default();
        rules.set(LUZ_VA_POR_M2, 100.0);
        rules.set(FACTOR_DEMANDA_LUZ, 0.66);
        rules.set(FACTOR_DEMANDA_TOMA, 0.8);
        rules.set(FACTOR_DEMANDA_CARGAS_FIJAS, 1.0);
        rules.set(ILU_VA_MAX_POR_CIRCUITO, 1500.0);
        rules.set(TOMA_VA_MAX_POR_CIRCUITO, 2000.0);
        rules
    }

    /// Establece o actualiza el valor de un código de regla
    pub fn set(&mut self, code: &str, value: f32) {
        self.rules.insert(code.into(), value);
    }

    /// Incorpora los valores de otra tabla, con prioridad para los nuevos
    pub fn merge(&mut self, other: &InMemoryRules) {
        for (code, value) in &other.rules {
            self.rules.insert(code.clone(), *value);
        }
    }
}

impl fmt::Display for InMemoryRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .rules
            .iter()
            .sorted_by(|a, b| Ord::cmp(a.0, b.0))
            .map(|(code, value)| format!("{}: {}", code, value))
            .join("\n");
        write!(f, "{}", lines)
    }
}

impl str::FromStr for InMemoryRules {
    type Err = RebtError;

    /// Interpreta una tabla de reglas en formato de líneas `CODIGO: valor`
    ///
    /// Se ignoran las líneas vacías y las que empiezan por `#`.
    fn from_str(s: &str) -> Result<InMemoryRules> {
        let mut rules = InMemoryRules::default();
        for line in s.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut parts = line.splitn(2, ':');
            let code = parts.next().map(str::trim).unwrap_or("");
            let value = parts.next().map(str::trim);
            match (code, value) {
                ("", _) | (_, None) => return Err(RebtError::RuleParseError(line.into())),
                (code, Some(value)) => {
                    let value: f32 = value
                        .parse()
                        .map_err(|_| RebtError::RuleParseError(line.into()))?;
                    rules.set(code, value);
                }
            }
        }
        Ok(rules)
    }
}
