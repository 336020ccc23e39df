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

//! Tipos derivados del cálculo (cargas por ambiente, totales, circuitos)

use serde::{Deserialize, Serialize};

use super::{BreakerCurve, CircuitKind};

/// Cargas conectadas de un ambiente [VA], derivadas de la agregación
///
/// Se recalculan en cada invocación; el núcleo no conserva estado entre
/// llamadas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomLoad {
    /// Nombre del ambiente
    pub environment: String,
    /// Carga de iluminación [VA]: area_m2 * LUZ_VA_POR_M2
    pub iluminacion_va: f32,
    /// Carga de tomas generales [VA]: suma de watts * factor de uso
    pub tomas_va: f32,
    /// Carga de aparatos fijos [VA]: suma de watts * factor de uso
    pub cargas_fijas_va: f32,
}

impl RoomLoad {
    /// Carga conectada total del ambiente [VA]
    pub fn total_va(&self) -> f32 {
        self.iluminacion_va + self.tomas_va + self.cargas_fijas_va
    }
}

/// Totales del proyecto [VA]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// Carga conectada total, sin ponderar
    pub total_conectada_va: f32,
    /// Demanda estimada, con cada categoría ponderada por su factor de demanda
    pub demanda_estimada_va: f32,
}

/// Interruptor automático seleccionado para un circuito
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakerChoice {
    /// Calibre normalizado [A]
    pub amps: f32,
    /// Curva de disparo
    pub curve: BreakerCurve,
}

/// Conductor seleccionado para un circuito
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConductorChoice {
    /// Sección normalizada [mm2]
    pub gauge_mm2: f32,
    /// Intensidad admisible de la sección [A]
    pub ampacity_a: f32,
}

/// Agrupación de cargas en un circuito candidato
///
/// Resultado intermedio del proponedor de circuitos, previo al dimensionado
/// de protección y conductor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitGroup {
    /// Tipo de circuito
    pub kind: CircuitKind,
    /// Carga asignada [VA]
    pub load_va: f32,
    /// Ambientes cuyas cargas integran el circuito, en orden de declaración
    pub members: Vec<String>,
}

/// Circuito derivado propuesto, con corriente, protección y conductor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitProposal {
    /// Tipo de circuito
    pub kind: CircuitKind,
    /// Carga asignada [VA]
    pub load_va: f32,
    /// Ambientes cuyas cargas integran el circuito
    pub members: Vec<String>,
    /// Corriente de cálculo [A]
    pub corriente_a: f32,
    /// Interruptor automático seleccionado
    pub proteccion: BreakerChoice,
    /// Conductor seleccionado
    pub conductor: ConductorChoice,
}

/// Resultado completo del cálculo de un proyecto
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectResult {
    /// Cargas conectadas por ambiente
    pub cargas_por_ambiente: Vec<RoomLoad>,
    /// Totales del proyecto
    pub totales: Totals,
    /// Propuesta de circuitos derivados
    pub propuesta_circuitos: Vec<CircuitProposal>,
    /// Avisos no fatales generados durante el cálculo
    pub warnings: Vec<String>,
    /// Identificador de correlación, suministrado por el llamador o generado
    pub trace_id: String,
}
