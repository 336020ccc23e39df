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
Errores del cálculo
===================

Tipo de error de la librería y alias de `Result`.

Todos los errores del núcleo de cálculo son fatales para la invocación en
curso y se propagan síncronamente al llamador, sin recuperación local ni
valores por defecto silenciosos.
*/

use std::fmt;

/// Error del cálculo de la instalación
#[derive(Debug, Clone, PartialEq)]
pub enum RebtError {
    /// Dos superficies comparten el mismo nombre de ambiente
    DuplicateEnvironment(String),
    /// Un consumo referencia un ambiente que no existe en el proyecto
    UnknownEnvironment {
        /// Nombre del consumo que hace la referencia
        consumption: String,
        /// Ambiente referenciado e inexistente
        environment: String,
    },
    /// Código de regla sin valor definido y sin valor de reserva
    RuleNotFound(String),
    /// Entrada rechazada por la validación de frontera
    WrongInput(String),
    /// La corriente de cálculo supera la mayor entrada de la tabla
    NoDeviceFound(String),
    /// Tipo de circuito desconocido
    CircuitKindUnknown(String),
    /// Categoría de consumo desconocida
    ConsumptionKindUnknown(String),
    /// Material de conductor desconocido
    MaterialUnknown(String),
    /// Curva de disparo desconocida
    CurveUnknown(String),
    /// Error al interpretar una línea de reglas
    RuleParseError(String),
}

impl fmt::Display for RebtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use RebtError::*;
        match self {
            DuplicateEnvironment(environment) => {
                write!(f, "Ambiente duplicado en superficies: \"{}\"", environment)
            }
            UnknownEnvironment {
                consumption,
                environment,
            } => write!(
                f,
                "El consumo \"{}\" referencia un ambiente inexistente: \"{}\"",
                consumption, environment
            ),
            RuleNotFound(code) => write!(f, "Regla sin valor definido: \"{}\"", code),
            WrongInput(desc) => write!(f, "Entrada inválida: {}", desc),
            NoDeviceFound(desc) => write!(
                f,
                "Sin dispositivo normalizado para la corriente de cálculo: {}",
                desc
            ),
            CircuitKindUnknown(s) => write!(f, "Tipo de circuito desconocido: \"{}\"", s),
            ConsumptionKindUnknown(s) => write!(f, "Categoría de consumo desconocida: \"{}\"", s),
            MaterialUnknown(s) => write!(f, "Material de conductor desconocido: \"{}\"", s),
            CurveUnknown(s) => write!(f, "Curva de disparo desconocida: \"{}\"", s),
            RuleParseError(s) => write!(f, "Línea de reglas con formato incorrecto: \"{}\"", s),
        }
    }
}

impl std::error::Error for RebtError {}

/// Alias de Result con error de la librería
pub type Result<T> = std::result::Result<T, RebtError>;
