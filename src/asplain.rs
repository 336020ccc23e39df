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
Salida en formato simple
========================

Representación compacta en texto plano del resultado de un cálculo, para
visualización en la CLI.
*/

use itertools::Itertools;

use crate::types::ProjectResult;

/// Muestra el resultado del cálculo de forma simplificada.
pub fn result_to_plain(result: &ProjectResult) -> String {
    let cargas = result
        .cargas_por_ambiente
        .iter()
        .map(|load| {
            format!(
                "{}: iluminación {:.2} VA, tomas {:.2} VA, cargas fijas {:.2} VA",
                load.environment, load.iluminacion_va, load.tomas_va, load.cargas_fijas_va
            )
        })
        .join("\n");

    let circuitos = result
        .propuesta_circuitos
        .iter()
        .enumerate()
        .map(|(i, c)| {
            format!(
                "C{} {}: {:.2} VA, {:.2} A -> {:.0} A curva {}, {} mm2 [{}]",
                i + 1,
                c.kind,
                c.load_va,
                c.corriente_a,
                c.proteccion.amps,
                c.proteccion.curve,
                c.conductor.gauge_mm2,
                c.members.iter().join(", ")
            )
        })
        .join("\n");

    let avisos = if result.warnings.is_empty() {
        String::new()
    } else {
        format!("\n** Avisos:\n{}\n", result.warnings.iter().join("\n"))
    };

    format!(
        "trace_id = {}

** Cargas por ambiente:
{}

Potencia conectada total: {:.2} VA
Demanda estimada: {:.2} VA

** Propuesta de circuitos:
{}
{}",
        result.trace_id,
        cargas,
        result.totales.total_conectada_va,
        result.totales.demanda_estimada_va,
        circuitos,
        avisos
    )
}
