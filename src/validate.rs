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
Validación de frontera
======================

Validación explícita de la carga de entrada, ejecutada una sola vez antes de
invocar el núcleo de cálculo. Devuelve la lista completa de errores de campo
en lugar de abortar en el primero, para que la capa llamadora (HTTP o CLI)
pueda presentarlos todos juntos.
*/

use std::fmt;

use crate::types::Project;

/// Error de validación de un campo de la entrada
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    /// Ruta del campo afectado (p. ej. `surfaces[0].area_m2`)
    pub field: String,
    /// Descripción del problema
    pub message: String,
}

impl FieldError {
    fn new(field: String, message: &str) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Valida la carga de entrada de un proyecto
///
/// Comprueba los invariantes de campo declarativos (nombres no vacíos,
/// magnitudes positivas, factor de uso en [0, 1]). La unicidad de ambientes y
/// las referencias consumo -> ambiente se comprueban en la agregación, donde
/// son errores fatales con nombre propio.
pub fn validate_project(project: &Project) -> Vec<FieldError> {
    let mut errors = Vec::new();

    for (i, surface) in project.surfaces.iter().enumerate() {
        if surface.environment.trim().is_empty() {
            errors.push(FieldError::new(
                format!("surfaces[{}].environment", i),
                "el nombre de ambiente no puede estar vacío",
            ));
        }
        if !(surface.area_m2 > 0.0) {
            errors.push(FieldError::new(
                format!("surfaces[{}].area_m2", i),
                "la superficie debe ser mayor que cero",
            ));
        }
    }

    for (i, consumption) in project.consumptions.iter().enumerate() {
        if consumption.name.trim().is_empty() {
            errors.push(FieldError::new(
                format!("consumptions[{}].name", i),
                "el nombre del consumo no puede estar vacío",
            ));
        }
        if consumption.environment.trim().is_empty() {
            errors.push(FieldError::new(
                format!("consumptions[{}].environment", i),
                "el ambiente del consumo no puede estar vacío",
            ));
        }
        if !(consumption.watts > 0.0) {
            errors.push(FieldError::new(
                format!("consumptions[{}].watts", i),
                "la potencia debe ser mayor que cero",
            ));
        }
        if let Some(factor_uso) = consumption.factor_uso {
            if !(0.0..=1.0).contains(&factor_uso) {
                errors.push(FieldError::new(
                    format!("consumptions[{}].factor_uso", i),
                    "el factor de uso debe estar entre 0.0 y 1.0",
                ));
            }
        }
    }

    if !(project.opciones.tension_v > 0.0) {
        errors.push(FieldError::new(
            "opciones.tension_v".into(),
            "la tensión nominal debe ser mayor que cero",
        ));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Consumption, Project, Surface};

    fn valid_project() -> Project {
        Project {
            surfaces: vec![Surface {
                environment: "Sala".into(),
                area_m2: 18.5,
            }],
            consumptions: vec![Consumption::new("Televisor", "Sala", 120.0)],
            opciones: Default::default(),
        }
    }

    #[test]
    fn valid_project_has_no_errors() {
        assert_eq!(validate_project(&valid_project()), vec![]);
    }

    #[test]
    fn reports_all_field_errors_at_once() {
        let mut project = valid_project();
        project.surfaces[0].area_m2 = 0.0;
        project.consumptions[0].watts = -5.0;
        project.consumptions[0].factor_uso = Some(1.5);
        project.opciones.tension_v = 0.0;

        let errors = validate_project(&project);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "surfaces[0].area_m2",
                "consumptions[0].watts",
                "consumptions[0].factor_uso",
                "opciones.tension_v"
            ]
        );
    }

    #[test]
    fn nan_area_is_rejected() {
        let mut project = valid_project();
        project.surfaces[0].area_m2 = std::f32::NAN;
        assert_eq!(validate_project(&project).len(), 1);
    }
}
