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

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::process::exit;

use clap::{App, AppSettings, Arg};
use failure::Error;
use failure::Fail;
use failure::ResultExt;

use rebtcalc::*;

// Funciones auxiliares -----------------------------------------------------------------------

fn readfile(path: &Path) -> Result<String, Error> {
    let mut f = File::open(path).context(format!("Archivo {} no encontrado", path.display()))?;
    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .context("Error al leer el archivo")?;
    Ok(contents)
}

fn writefile(path: &Path, content: &[u8]) {
    let mut file = match File::create(&path) {
        Err(err) => panic!(
            "ERROR: no se ha podido escribir en \"{}\": {:?}",
            path.display(),
            err.cause()
        ),
        Ok(file) => file,
    };
    if let Err(err) = file.write_all(content) {
        panic!(
            "No se ha podido escribir en {}: {:?}",
            path.display(),
            err.cause()
        )
    }
}

/// Carga el proyecto desde el archivo JSON indicado
fn get_project(archivo_proyecto: &str) -> Project {
    let path = Path::new(archivo_proyecto);
    let projectstring = match readfile(path) {
        Ok(projectstring) => {
            println!("Proyecto: \"{}\"", path.display());
            projectstring
        }
        Err(err) => {
            eprintln!(
                "ERROR: No se ha podido leer el archivo de proyecto \"{}\" -> {}",
                path.display(),
                err.as_fail()
            );
            exit(exitcode::IOERR);
        }
    };
    serde_json::from_str(&projectstring).unwrap_or_else(|error| {
        eprintln!(
            "ERROR: Formato incorrecto del archivo de proyecto \"{}\" ({})",
            path.display(),
            error
        );
        exit(exitcode::DATAERR);
    })
}

/// Reglas normativas: valores reglamentarios, redefinibles desde archivo
///
/// El archivo puede ser JSON (objeto código -> valor) o líneas `CODIGO: valor`.
fn get_rules(archivo_reglas: Option<&str>, verbosity: u64) -> rules::InMemoryRules {
    let mut ruledata = rules::InMemoryRules::regulation_defaults();
    if let Some(archivo_reglas) = archivo_reglas {
        let path = Path::new(archivo_reglas);
        let rulestring = match readfile(path) {
            Ok(rulestring) => {
                println!("Reglas (archivo): \"{}\"", path.display());
                rulestring
            }
            Err(err) => {
                eprintln!(
                    "ERROR: No se ha podido leer el archivo de reglas \"{}\" -> {}",
                    path.display(),
                    err.as_fail()
                );
                exit(exitcode::IOERR);
            }
        };
        let overrides: rules::InMemoryRules = serde_json::from_str(&rulestring)
            .or_else(|_| rulestring.parse())
            .unwrap_or_else(|error: RebtError| {
                eprintln!(
                    "ERROR: No se ha podido interpretar el archivo de reglas \"{}\" -> {}",
                    path.display(),
                    error
                );
                exit(exitcode::DATAERR);
            });
        ruledata.merge(&overrides);
    } else {
        println!("Reglas (reglamentarias por defecto)");
    }
    if verbosity > 1 {
        println!("Reglas activas:\n{}", ruledata);
    }
    ruledata
}

// Función principal ------------------------------------------------------------------------------

fn main() {
    let matches = App::new("RebtCalc")
        .bin_name("rebtcalc")
        .version(env!("CARGO_PKG_VERSION"))
        .author("
Copyright (c) 2019-2022 Equipo rebtcalc

Licencia: Publicado bajo licencia MIT.

")
        .about("RebtCalc - Cargas, demanda y circuitos de instalaciones eléctricas de baja tensión.")
        .setting(AppSettings::NextLineHelp)
        .arg(Arg::with_name("archivo_proyecto")
            .short("p")
            .long("archivo_proyecto")
            .value_name("ARCHIVO_PROYECTO")
            .required_unless("showlicense")
            .help("Archivo de definición del proyecto (superficies, consumos y opciones) en JSON")
            .takes_value(true)
            .display_order(1))
        .arg(Arg::with_name("archivo_reglas")
            .short("r")
            .long("archivo_reglas")
            .value_name("ARCHIVO_REGLAS")
            .help("Archivo de reglas normativas que redefine los valores reglamentarios\n")
            .takes_value(true)
            .display_order(2))
        .arg(Arg::with_name("trace_id")
            .short("t")
            .long("trace_id")
            .value_name("TRACE_ID")
            .help("Identificador de correlación del cálculo (se genera uno si se omite)")
            .takes_value(true)
            .display_order(3))
        .arg(Arg::with_name("archivo_salida_json")
            .long("json")
            .value_name("ARCHIVO_SALIDA_JSON")
            .help("Archivo de salida de resultados detallados en formato JSON")
            .takes_value(true))
        .arg(Arg::with_name("showlicense")
            .short("L")
            .long("licencia")
            .help("Muestra la licencia del programa (MIT)"))
        .arg(Arg::with_name("v")
            .short("v")
            .multiple(true)
            .help("Sets the level of verbosity"))
        .get_matches();

    if matches.is_present("showlicense") {
        println!(
            "
Copyright (c) 2019-2022 Equipo rebtcalc

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the 'Software'), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED 'AS IS', WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE."
        );
        exit(exitcode::OK);
    }

    // Prólogo ------------------------------------------------------------------------------------

    let verbosity = matches.occurrences_of("v");

    if verbosity > 2 {
        println!("Opciones indicadas: ----------");
        println!("{:#?}", matches);
        println!("------------------------------");
    }

    println!("** Datos de entrada");

    // Proyecto -----------------------------------------------------------------------------------
    let project = get_project(matches.value_of("archivo_proyecto").unwrap());

    if verbosity > 1 {
        println!(
            "Superficies: {}, consumos: {}, tensión: {:.0} V, {}",
            project.surfaces.len(),
            project.consumptions.len(),
            project.opciones.tension_v,
            if project.opciones.monofasico {
                "monofásico"
            } else {
                "trifásico"
            }
        );
    }

    // Reglas normativas --------------------------------------------------------------------------
    let ruledata = get_rules(matches.value_of("archivo_reglas"), verbosity);

    // Cálculo del proyecto -----------------------------------------------------------------------
    let result = compute_project(&project, &ruledata, matches.value_of("trace_id"))
        .unwrap_or_else(|error| {
            eprintln!("ERROR: No se ha podido calcular el proyecto -> {}", error);
            exit(exitcode::DATAERR);
        });

    // Salida de resultados -----------------------------------------------------------------------

    // Guardar resultado en formato json
    if matches.is_present("archivo_salida_json") {
        let path = Path::new(matches.value_of_os("archivo_salida_json").unwrap());
        if verbosity > 0 {
            println!("Resultados en formato JSON: {:?}", path.display());
        }
        let json = serde_json::to_string_pretty(&result).unwrap_or_else(|error| {
            eprintln!("ERROR: No se ha podido convertir el resultado al formato JSON");
            if verbosity > 2 {
                println!("{:?}", error)
            };
            exit(exitcode::DATAERR);
        });
        writefile(&path, json.as_bytes());
    }

    // Mostrar siempre en formato plain
    println!("** Resultado del cálculo");
    println!("{}", asplain::result_to_plain(&result));
}
