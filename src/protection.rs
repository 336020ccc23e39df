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
Protecciones y conductores
==========================

Selección de interruptor automático y de sección de conductor por búsqueda en
tablas de tamaños normalizados, y cálculo de la corriente de circuito.

Criterio de selección: el menor tamaño normalizado cuya intensidad admisible
es mayor o igual que la corriente de cálculo. En empates de calibre de
interruptor se prefiere la curva C (la de uso más común) y, entre las
restantes, el orden lexicográfico de la etiqueta de curva.
*/

use crate::error::{RebtError, Result};
use crate::types::{BreakerChoice, BreakerCurve, ConductorChoice, ConductorMaterial, Options};

/// Interruptores automáticos disponibles: (calibre [A], curva)
///
/// Tabla ordenada por calibre creciente; un mismo calibre puede ofrecerse en
/// varias curvas.
const BREAKERS: [(f32, BreakerCurve); 12] = [
    (6.0, BreakerCurve::C),
    (10.0, BreakerCurve::B),
    (10.0, BreakerCurve::C),
    (16.0, BreakerCurve::B),
    (16.0, BreakerCurve::C),
    (20.0, BreakerCurve::C),
    (25.0, BreakerCurve::C),
    (32.0, BreakerCurve::C),
    (40.0, BreakerCurve::C),
    (50.0, BreakerCurve::C),
    (50.0, BreakerCurve::D),
    (63.0, BreakerCurve::D),
];

/// Secciones de cobre: (sección [mm2], intensidad admisible [A])
const AMPACITY_CU: [(f32, f32); 7] = [
    (1.5, 15.0),
    (2.5, 21.0),
    (4.0, 28.0),
    (6.0, 36.0),
    (10.0, 50.0),
    (16.0, 66.0),
    (25.0, 88.0),
];

/// Secciones de aluminio: (sección [mm2], intensidad admisible [A])
const AMPACITY_AL: [(f32, f32); 6] = [
    (2.5, 16.5),
    (4.0, 22.0),
    (6.0, 28.0),
    (10.0, 39.0),
    (16.0, 53.0),
    (25.0, 70.0),
];

/// Corriente de cálculo de un circuito [A]
///
/// `VA / U` en sistemas monofásicos, `VA / (√3 · U)` en trifásicos.
pub fn circuit_current(load_va: f32, opciones: &Options) -> f32 {
    if opciones.monofasico {
        load_va / opciones.tension_v
    } else {
        load_va / (3.0f32.sqrt() * opciones.tension_v)
    }
}

/// Selecciona el interruptor automático para una corriente de cálculo
///
/// Menor calibre normalizado con intensidad >= corriente; en empate de
/// calibre se prefiere la curva C y después el orden lexicográfico.
///
/// # Errors
///
/// * `NoDeviceFound` si la corriente supera el mayor calibre de la tabla
pub fn select_protection(current_a: f32) -> Result<BreakerChoice> {
    let candidates = BREAKERS.iter().filter(|(amps, _)| *amps >= current_a);
    candidates
        .min_by(|(amps_a, curve_a), (amps_b, curve_b)| {
            amps_a
                .partial_cmp(amps_b)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| curve_preference(*curve_a).cmp(&curve_preference(*curve_b)))
        })
        .map(|&(amps, curve)| BreakerChoice { amps, curve })
        .ok_or_else(|| RebtError::NoDeviceFound(format!("{:.2} A", current_a)))
}

/// Orden de preferencia de curvas en empates de calibre: C, luego B, D
fn curve_preference(curve: BreakerCurve) -> u8 {
    match curve {
        BreakerCurve::C => 0,
        BreakerCurve::B => 1,
        BreakerCurve::D => 2,
    }
}

/// Selecciona la sección de conductor para una corriente de cálculo
///
/// Menor sección cuya intensidad admisible es >= corriente, según la tabla
/// del material.
///
/// # Errors
///
/// * `NoDeviceFound` si la corriente supera la mayor sección de la tabla
pub fn select_conductor(current_a: f32, material: ConductorMaterial) -> Result<ConductorChoice> {
    let table: &[(f32, f32)] = match material {
        ConductorMaterial::CU => &AMPACITY_CU,
        ConductorMaterial::AL => &AMPACITY_AL,
    };
    table
        .iter()
        .find(|(_, ampacity)| *ampacity >= current_a)
        .map(|&(gauge_mm2, ampacity_a)| ConductorChoice {
            gauge_mm2,
            ampacity_a,
        })
        .ok_or_else(|| RebtError::NoDeviceFound(format!("{:.2} A ({})", current_a, material)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_phase_current() {
        let opciones = Options {
            tension_v: 230.0,
            monofasico: true,
            ..Default::default()
        };
        assert_eq!(circuit_current(2300.0, &opciones), 10.0);
    }

    #[test]
    fn three_phase_current_uses_sqrt3() {
        let opciones = Options {
            tension_v: 400.0,
            monofasico: false,
            ..Default::default()
        };
        let current = circuit_current(6900.0, &opciones);
        assert!((current - 9.96).abs() < 0.01);
    }

    #[test]
    fn selects_smallest_sufficient_breaker() {
        let choice = select_protection(8.05).unwrap();
        assert_eq!(choice.amps, 10.0);
        let choice = select_protection(21.0).unwrap();
        assert_eq!(choice.amps, 25.0);
    }

    #[test]
    fn ampacity_tie_prefers_curve_c() {
        // 10 A existe en curvas B y C; debe elegirse C de forma determinista
        let choice = select_protection(8.05).unwrap();
        assert_eq!(choice.curve, BreakerCurve::C);
        let choice = select_protection(12.0).unwrap();
        assert_eq!(choice.amps, 16.0);
        assert_eq!(choice.curve, BreakerCurve::C);
    }

    #[test]
    fn exact_rating_match_is_accepted() {
        let choice = select_protection(20.0).unwrap();
        assert_eq!(choice.amps, 20.0);
        assert_eq!(choice.curve, BreakerCurve::C);
    }

    #[test]
    fn current_above_table_has_no_device() {
        match select_protection(80.0) {
            Err(RebtError::NoDeviceFound(desc)) => assert!(desc.contains("80.00")),
            other => panic!("se esperaba NoDeviceFound, se obtuvo {:?}", other),
        }
    }

    #[test]
    fn conductor_tables_differ_by_material() {
        let cu = select_conductor(20.0, ConductorMaterial::CU).unwrap();
        assert_eq!(cu.gauge_mm2, 2.5);
        assert_eq!(cu.ampacity_a, 21.0);
        let al = select_conductor(20.0, ConductorMaterial::AL).unwrap();
        assert_eq!(al.gauge_mm2, 4.0);
    }

    #[test]
    fn conductor_above_table_has_no_device() {
        assert!(select_conductor(120.0, ConductorMaterial::CU).is_err());
    }
}
