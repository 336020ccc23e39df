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
Propuesta de circuitos
======================

Partición de las cargas por ambiente en circuitos derivados candidatos, bajo
techos de carga por circuito y por tipo (iluminación / tomas).

Política de empaquetado: voraz, en orden de declaración de los ambientes. La
carga de un ambiente es atómica y no se reparte entre circuitos; un ambiente
cuya carga supera por sí sola el techo ocupa un circuito sobredimensionado y
genera un aviso.
*/

use crate::error::Result;
use crate::rules::{RuleProvider, ILU_VA_MAX_POR_CIRCUITO, TOMA_VA_MAX_POR_CIRCUITO};
use crate::types::{CircuitGroup, CircuitKind, RoomLoad};

/// Propone la partición en circuitos derivados
///
/// Produce primero los circuitos de iluminación y después los de tomas (la
/// carga de aparatos fijos se agrupa con las tomas a efectos de circuito).
/// Las condiciones blandas se añaden a la lista de avisos del llamador; no
/// abortan el cálculo.
///
/// # Errors
///
/// * `RuleNotFound` si falta alguno de los techos de circuito
pub fn propose_circuits(
    room_loads: &[RoomLoad],
    rules: &dyn RuleProvider,
    warnings: &mut Vec<String>,
) -> Result<Vec<CircuitGroup>> {
    let ilu_max = rules.get_number(ILU_VA_MAX_POR_CIRCUITO, None)?;
    let toma_max = rules.get_number(TOMA_VA_MAX_POR_CIRCUITO, None)?;

    let mut circuits = pack(room_loads, CircuitKind::ILU, ilu_max, warnings);
    circuits.extend(pack(room_loads, CircuitKind::TOM, toma_max, warnings));
    Ok(circuits)
}

/// Empaqueta las cargas de un tipo en circuitos bajo el techo dado
fn pack(
    room_loads: &[RoomLoad],
    kind: CircuitKind,
    max_va: f32,
    warnings: &mut Vec<String>,
) -> Vec<CircuitGroup> {
    let mut circuits: Vec<CircuitGroup> = Vec::new();
    let mut current: Option<CircuitGroup> = None;

    for load in room_loads {
        let load_va = match kind {
            CircuitKind::ILU => load.iluminacion_va,
            CircuitKind::TOM => load.tomas_va + load.cargas_fijas_va,
        };
        if load_va <= 0.0 {
            continue;
        }
        if load_va > max_va {
            warnings.push(format!(
                "La carga {} del ambiente \"{}\" ({:.2} VA) supera el techo por circuito ({:.2} VA): circuito sobredimensionado",
                kind, load.environment, load_va, max_va
            ));
        }
        let fits = current
            .as_ref()
            .map_or(false, |circuit| circuit.load_va + load_va <= max_va);
        if fits {
            if let Some(circuit) = current.as_mut() {
                circuit.load_va += load_va;
                circuit.members.push(load.environment.clone());
            }
        } else {
            if let Some(circuit) = current.take() {
                circuits.push(circuit);
            }
            current = Some(CircuitGroup {
                kind,
                load_va,
                members: vec![load.environment.clone()],
            });
        }
    }
    if let Some(circuit) = current.take() {
        circuits.push(circuit);
    }
    circuits
}
