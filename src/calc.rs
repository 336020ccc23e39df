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
Cálculo completo del proyecto
=============================

Encadena las etapas del cálculo: validación de frontera, agregación de
cargas, estimación de demanda, propuesta de circuitos y dimensionado de
protección y conductor de cada circuito.

El resultado se materializa completo en cada invocación; no hay estado
compartido entre llamadas y dos invocaciones con las mismas entradas y las
mismas reglas producen el mismo resultado.
*/

use itertools::Itertools;

use crate::circuits::propose_circuits;
use crate::demand::estimate_totals;
use crate::error::{RebtError, Result};
use crate::loads::aggregate;
use crate::protection::{circuit_current, select_conductor, select_protection};
use crate::rules::RuleProvider;
use crate::types::{CircuitProposal, Project, ProjectResult};
use crate::validate::validate_project;

/// Calcula cargas, demanda y propuesta de circuitos de un proyecto
///
/// * `project` - carga de entrada (superficies + consumos + opciones)
/// * `rules` - proveedor de constantes normativas
/// * `trace_id` - identificador de correlación; si es `None` se genera uno
///
/// # Errors
///
/// * `WrongInput` si la validación de frontera rechaza la entrada
/// * `DuplicateEnvironment` / `UnknownEnvironment` en la agregación
/// * `RuleNotFound` si falta una regla requerida
/// * `NoDeviceFound` si un circuito excede las tablas de dimensionado
pub fn compute_project(
    project: &Project,
    rules: &dyn RuleProvider,
    trace_id: Option<&str>,
) -> Result<ProjectResult> {
    let field_errors = validate_project(project);
    if !field_errors.is_empty() {
        return Err(RebtError::WrongInput(
            field_errors.iter().map(ToString::to_string).join("; "),
        ));
    }

    let mut warnings: Vec<String> = Vec::new();
    if project.surfaces.is_empty() {
        warnings.push("El proyecto no declara superficies: resultado vacío".into());
    }

    let cargas_por_ambiente = aggregate(&project.surfaces, &project.consumptions, rules)?;
    let totales = estimate_totals(&cargas_por_ambiente, rules)?;
    let groups = propose_circuits(&cargas_por_ambiente, rules, &mut warnings)?;

    let mut propuesta_circuitos = Vec::with_capacity(groups.len());
    for group in groups {
        let corriente_a = circuit_current(group.load_va, &project.opciones);
        let proteccion = select_protection(corriente_a)?;
        let conductor = select_conductor(corriente_a, project.opciones.material)?;
        propuesta_circuitos.push(CircuitProposal {
            kind: group.kind,
            load_va: group.load_va,
            members: group.members,
            corriente_a,
            proteccion,
            conductor,
        });
    }

    Ok(ProjectResult {
        cargas_por_ambiente,
        totales,
        propuesta_circuitos,
        warnings,
        trace_id: trace_id.map_or_else(new_trace_id, str::to_string),
    })
}

/// Genera un identificador de correlación opaco
fn new_trace_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
