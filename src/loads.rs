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
Agregación de cargas
====================

Cálculo de la carga conectada por ambiente a partir de superficies y
consumos itemizados.

Por ambiente:

- `iluminacion_va = area_m2 * LUZ_VA_POR_M2`, en precisión completa de coma
  flotante, sin redondeo explícito
- `tomas_va` y `cargas_fijas_va` suman `watts * factor_uso` de los consumos
  de cada categoría asignados al ambiente
*/

use std::collections::HashMap;

use crate::error::{RebtError, Result};
use crate::rules::{RuleProvider, LUZ_VA_POR_M2};
use crate::types::{Consumption, ConsumptionKind, RoomLoad, Surface};

/// Agrega las cargas conectadas por ambiente
///
/// Función pura de las entradas y de las reglas consultadas. El orden de los
/// ambientes del resultado es el orden de declaración de las superficies.
///
/// # Errors
///
/// * `DuplicateEnvironment` si dos superficies comparten nombre de ambiente
///   (comparación exacta, sensible a mayúsculas)
/// * `UnknownEnvironment` si un consumo referencia un ambiente sin superficie
/// * `RuleNotFound` si `LUZ_VA_POR_M2` no está definida
pub fn aggregate(
    surfaces: &[Surface],
    consumptions: &[Consumption],
    rules: &dyn RuleProvider,
) -> Result<Vec<RoomLoad>> {
    let luz_va_por_m2 = rules.get_number(LUZ_VA_POR_M2, None)?;

    // Índice ambiente -> posición, detectando duplicados
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(surfaces.len());
    for (i, surface) in surfaces.iter().enumerate() {
        if index.insert(&surface.environment, i).is_some() {
            return Err(RebtError::DuplicateEnvironment(surface.environment.clone()));
        }
    }

    let mut room_loads: Vec<RoomLoad> = surfaces
        .iter()
        .map(|surface| RoomLoad {
            environment: surface.environment.clone(),
            iluminacion_va: surface.area_m2 * luz_va_por_m2,
            tomas_va: 0.0,
            cargas_fijas_va: 0.0,
        })
        .collect();

    for consumption in consumptions {
        let i = *index.get(consumption.environment.as_str()).ok_or_else(|| {
            RebtError::UnknownEnvironment {
                consumption: consumption.name.clone(),
                environment: consumption.environment.clone(),
            }
        })?;
        match consumption.kind {
            ConsumptionKind::TOMA => room_loads[i].tomas_va += consumption.va(),
            ConsumptionKind::FIJA => room_loads[i].cargas_fijas_va += consumption.va(),
        }
    }

    Ok(room_loads)
}
