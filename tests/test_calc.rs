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

//! Tests de integración del cálculo completo sobre archivos de proyecto

use std::fs::read_to_string;

use rebtcalc::*;

fn project_from_file(path: &str) -> Project {
    let projectstring = read_to_string(path).unwrap();
    serde_json::from_str(&projectstring).unwrap()
}

fn rules_from_file(path: &str) -> rules::InMemoryRules {
    let rulestring = read_to_string(path).unwrap();
    serde_json::from_str(&rulestring).unwrap()
}

#[test]
fn proyecto_de_referencia() {
    let project = project_from_file("test_data/proyecto_test.json");
    let rules = rules_from_file("test_data/reglas_test.json");
    let result = compute_project(&project, &rules, Some("test-ref")).unwrap();

    assert_eq!(result.cargas_por_ambiente.len(), 2);
    assert_eq!(result.cargas_por_ambiente[0].environment, "Sala");
    assert_eq!(result.cargas_por_ambiente[0].iluminacion_va, 1850.0);
    assert_eq!(result.cargas_por_ambiente[0].tomas_va, 120.0);
    assert_eq!(result.cargas_por_ambiente[1].environment, "Dormitorio 1");
    assert_eq!(result.cargas_por_ambiente[1].iluminacion_va, 1200.0);
    assert_eq!(result.cargas_por_ambiente[1].tomas_va, 60.0);

    assert_eq!(result.totales.total_conectada_va, 3230.0);
    assert_eq!(result.totales.demanda_estimada_va, 3230.0);

    // Iluminación de Sala (1850 VA) supera el techo de 1500 VA
    assert_eq!(result.propuesta_circuitos.len(), 3);
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("Sala"));
    assert_eq!(result.trace_id, "test-ref");
}

#[test]
fn demanda_no_supera_conectada_con_reglas_reglamentarias() {
    let project = project_from_file("test_data/proyecto_test.json");
    let rules = rules::InMemoryRules::regulation_defaults();
    let result = compute_project(&project, &rules, None).unwrap();
    assert!(result.totales.demanda_estimada_va <= result.totales.total_conectada_va);
}

#[test]
fn reglas_en_formato_de_lineas() {
    let project = project_from_file("test_data/proyecto_test.json");
    let rulestring = read_to_string("test_data/reglas_test.txt").unwrap();
    let mut rules = rules::InMemoryRules::regulation_defaults();
    rules.merge(&rulestring.parse().unwrap());
    let result = compute_project(&project, &rules, None).unwrap();
    // 125 VA/m2: 18.5 * 125 = 2312.5
    assert_eq!(result.cargas_por_ambiente[0].iluminacion_va, 2312.5);
}

#[test]
fn ambiente_duplicado_aborta_con_nombre() {
    let mut project = project_from_file("test_data/proyecto_test.json");
    project.surfaces.push(Surface {
        environment: "Sala".into(),
        area_m2: 9.0,
    });
    let rules = rules::InMemoryRules::regulation_defaults();
    let error = compute_project(&project, &rules, None).unwrap_err();
    assert_eq!(error, RebtError::DuplicateEnvironment("Sala".into()));
    assert!(error.to_string().contains("Sala"));
}

#[test]
fn consumo_sin_ambiente_aborta_con_ambos_nombres() {
    let mut project = project_from_file("test_data/proyecto_test.json");
    project
        .consumptions
        .push(Consumption::new("Horno", "Cocina", 2000.0));
    let rules = rules::InMemoryRules::regulation_defaults();
    let error = compute_project(&project, &rules, None).unwrap_err();
    assert!(error.to_string().contains("Cocina"));
    assert!(error.to_string().contains("Horno"));
}

#[test]
fn resultado_serializa_a_json() {
    let project = project_from_file("test_data/proyecto_test.json");
    let rules = rules_from_file("test_data/reglas_test.json");
    let result = compute_project(&project, &rules, Some("test-json")).unwrap();

    let json = serde_json::to_string_pretty(&result).unwrap();
    let parsed: ProjectResult = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, result);
    assert!(json.contains("\"trace_id\": \"test-json\""));
}

#[test]
fn trifasico_reduce_la_corriente() {
    let mut project = project_from_file("test_data/proyecto_test.json");
    let rules = rules_from_file("test_data/reglas_test.json");
    let mono = compute_project(&project, &rules, None).unwrap();

    project.opciones.monofasico = false;
    project.opciones.tension_v = 400.0;
    let tri = compute_project(&project, &rules, None).unwrap();

    assert!(tri.propuesta_circuitos[0].corriente_a < mono.propuesta_circuitos[0].corriente_a);
}
