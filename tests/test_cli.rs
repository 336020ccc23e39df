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

//! Tests de integración de la interfaz de línea de comandos

#[test]
fn proyecto_con_reglas_de_archivo() {
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-p",
            "test_data/proyecto_test.json",
            "-r",
            "test_data/reglas_test.json",
            "-t",
            "test-cli",
        ])
        .stdout()
        .contains("Potencia conectada total: 3230.00 VA")
        .stdout()
        .contains("Demanda estimada: 3230.00 VA")
        .stdout()
        .contains("trace_id = test-cli")
        .unwrap();
}

#[test]
fn proyecto_con_reglas_reglamentarias() {
    assert_cli::Assert::main_binary()
        .with_args(&["-p", "test_data/proyecto_test.json"])
        .stdout()
        .contains("Reglas (reglamentarias por defecto)")
        .stdout()
        .contains("Potencia conectada total: 3230.00 VA")
        .stdout()
        .contains("Demanda estimada: 2157.00 VA")
        .unwrap();
}

#[test]
fn circuito_sobredimensionado_avisa() {
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-p",
            "test_data/proyecto_test.json",
            "-r",
            "test_data/reglas_test.json",
        ])
        .stdout()
        .contains("** Avisos:")
        .stdout()
        .contains("Sala")
        .stdout()
        .contains("sobredimensionado")
        .unwrap();
}

#[test]
fn seleccion_de_proteccion_y_conductor() {
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-p",
            "test_data/proyecto_test.json",
            "-r",
            "test_data/reglas_test.json",
        ])
        .stdout()
        .contains("C1 ILU: 1850.00 VA, 8.04 A -> 10 A curva C, 1.5 mm2 [Sala]")
        .unwrap();
}

#[test]
fn archivo_de_proyecto_inexistente_falla() {
    assert_cli::Assert::main_binary()
        .with_args(&["-p", "test_data/no_existe.json"])
        .fails()
        .unwrap();
}
