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
Estimación de demanda
=====================

Totales del proyecto: carga conectada sin ponderar y demanda estimada con
cada categoría de carga ponderada por su propio factor de demanda.
*/

use crate::error::Result;
use crate::rules::{
    RuleProvider, FACTOR_DEMANDA_CARGAS_FIJAS, FACTOR_DEMANDA_LUZ, FACTOR_DEMANDA_TOMA,
};
use crate::types::{RoomLoad, Totals};

/// Calcula los totales del proyecto a partir de las cargas por ambiente
///
/// `total_conectada_va` suma las cargas de todos los ambientes sin ponderar;
/// `demanda_estimada_va` pondera cada categoría (iluminación, tomas, cargas
/// fijas) por su factor de demanda antes de sumar.
///
/// # Errors
///
/// * `RuleNotFound` si falta alguno de los tres factores de demanda
pub fn estimate_totals(room_loads: &[RoomLoad], rules: &dyn RuleProvider) -> Result<Totals> {
    let factor_luz = rules.get_number(FACTOR_DEMANDA_LUZ, None)?;
    let factor_toma = rules.get_number(FACTOR_DEMANDA_TOMA, None)?;
    let factor_fijas = rules.get_number(FACTOR_DEMANDA_CARGAS_FIJAS, None)?;

    let totals = room_loads.iter().fold(Totals::default(), |mut acc, load| {
        acc.total_conectada_va += load.total_va();
        acc.demanda_estimada_va += load.iluminacion_va * factor_luz
            + load.tomas_va * factor_toma
            + load.cargas_fijas_va * factor_fijas;
        acc
    });

    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::InMemoryRules;

    fn room_loads() -> Vec<RoomLoad> {
        vec![
            RoomLoad {
                environment: "Sala".into(),
                iluminacion_va: 1850.0,
                tomas_va: 120.0,
                cargas_fijas_va: 0.0,
            },
            RoomLoad {
                environment: "Dormitorio 1".into(),
                iluminacion_va: 1200.0,
                tomas_va: 60.0,
                cargas_fijas_va: 500.0,
            },
        ]
    }

    fn rules_with_factors(luz: f32, toma: f32, fijas: f32) -> InMemoryRules {
        let mut rules = InMemoryRules::default();
        rules.set(FACTOR_DEMANDA_LUZ, luz);
        rules.set(FACTOR_DEMANDA_TOMA, toma);
        rules.set(FACTOR_DEMANDA_CARGAS_FIJAS, fijas);
        rules
    }

    #[test]
    fn unit_factors_keep_demand_equal_to_connected() {
        let totals = estimate_totals(&room_loads(), &rules_with_factors(1.0, 1.0, 1.0)).unwrap();
        assert_eq!(totals.total_conectada_va, 3730.0);
        assert_eq!(totals.demanda_estimada_va, 3730.0);
    }

    #[test]
    fn each_category_uses_its_own_factor() {
        let totals = estimate_totals(&room_loads(), &rules_with_factors(0.5, 0.8, 1.0)).unwrap();
        assert_eq!(totals.total_conectada_va, 3730.0);
        // 3050 * 0.5 + 180 * 0.8 + 500 * 1.0
        assert_eq!(totals.demanda_estimada_va, 2169.0);
    }

    #[test]
    fn demand_never_exceeds_connected_with_factors_below_one() {
        let totals = estimate_totals(&room_loads(), &rules_with_factors(0.66, 0.8, 1.0)).unwrap();
        assert!(totals.total_conectada_va >= totals.demanda_estimada_va);
    }

    #[test]
    fn empty_room_list_gives_zero_totals() {
        let totals = estimate_totals(&[], &rules_with_factors(0.66, 0.8, 1.0)).unwrap();
        assert_eq!(totals, Totals::default());
    }

    #[test]
    fn missing_factor_is_fatal() {
        let mut rules = InMemoryRules::default();
        rules.set(FACTOR_DEMANDA_LUZ, 1.0);
        assert!(estimate_totals(&room_loads(), &rules).is_err());
    }
}
