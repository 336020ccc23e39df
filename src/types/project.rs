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

//! Tipos de entrada del proyecto (superficies, consumos y opciones)

use serde::{Deserialize, Serialize};

use super::{ConductorMaterial, ConsumptionKind};

/// Ambiente físico del proyecto (habitación)
///
/// El nombre de ambiente es único dentro de un proyecto, con comparación
/// exacta sensible a mayúsculas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    /// Nombre del ambiente
    pub environment: String,
    /// Superficie útil [m2] (> 0)
    pub area_m2: f32,
}

/// Consumo itemizado asignado a un ambiente
///
/// Modela una carga individual (aparato fijo o carga de toma de corriente).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consumption {
    /// Nombre descriptivo del consumo
    pub name: String,
    /// Ambiente al que se asigna (debe existir una superficie con ese nombre)
    pub environment: String,
    /// Potencia nominal [W] (> 0)
    pub watts: f32,
    /// Factor de uso en [0, 1]; si se omite se toma 1.0
    #[serde(default)]
    pub factor_uso: Option<f32>,
    /// Categoría del consumo (toma general o carga fija)
    #[serde(default)]
    pub kind: ConsumptionKind,
}

impl Consumption {
    /// Consumo de toma general con factor de uso 1.0
    pub fn new(name: &str, environment: &str, watts: f32) -> Self {
        Self {
            name: name.into(),
            environment: environment.into(),
            watts,
            factor_uso: None,
            kind: ConsumptionKind::TOMA,
        }
    }

    /// Factor de uso efectivo (1.0 cuando no se declara)
    pub fn factor_uso(&self) -> f32 {
        self.factor_uso.unwrap_or(1.0)
    }

    /// Potencia aparente aportada [VA]: watts * factor de uso
    pub fn va(&self) -> f32 {
        self.watts * self.factor_uso()
    }
}

/// Parámetros eléctricos globales de la instalación
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// Tensión nominal [V] (> 0)
    pub tension_v: f32,
    /// Sistema monofásico (true) o trifásico (false)
    pub monofasico: bool,
    /// Material de los conductores de los circuitos derivados
    #[serde(default)]
    pub material: ConductorMaterial,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            tension_v: 230.0,
            monofasico: true,
            material: ConductorMaterial::CU,
        }
    }
}

/// Carga de entrada completa de un cálculo (proyecto)
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Ambientes del proyecto
    pub surfaces: Vec<Surface>,
    /// Consumos itemizados
    #[serde(default)]
    pub consumptions: Vec<Consumption>,
    /// Parámetros eléctricos globales
    #[serde(default)]
    pub opciones: Options,
}
