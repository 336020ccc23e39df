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
RebtCalc
========

This crate provides a library and binary that **compute connected loads,
estimated demand and branch circuit proposals** for residential and small
commercial low voltage electrical installations, following the rule driven
sizing procedure of the spanish low voltage code (REBT) family of norms.

The computation pipeline is a pure function of its inputs:

1. load aggregation per room (lighting VA from area, socket and fixed load VA
   from itemized consumptions)
2. demand estimation (per category demand factors)
3. branch circuit proposal (greedy packing under per circuit VA ceilings)
4. protective device and conductor selection (standard size table lookups)

Normative constants (VA per m2, demand factors, circuit ceilings) are resolved
through a [`RuleProvider`](rules::RuleProvider), so the same pipeline can run
against regulation defaults, a project specific rule set or a hand built map
in a unit test.

Este *crate* proporciona una biblioteca y un programa que **calculan la carga
conectada, la demanda estimada y una propuesta de circuitos derivados** para
instalaciones eléctricas de baja tensión residenciales y de pequeño terciario,
según el procedimiento de dimensionado por reglas de la familia normativa del
REBT.

El cálculo es una función pura de sus entradas: cada llamada recibe el
proyecto completo (superficies + consumos + opciones) y un proveedor de
reglas, y devuelve un resultado completamente materializado, sin estado
compartido entre invocaciones.

# Ejemplo

```rust
use rebtcalc::*;

// Proyecto: dos ambientes y dos consumos
let project = Project {
    surfaces: vec![
        Surface { environment: "Sala".into(), area_m2: 18.5 },
        Surface { environment: "Dormitorio 1".into(), area_m2: 12.0 },
    ],
    consumptions: vec![
        Consumption::new("Televisor", "Sala", 120.0),
        Consumption::new("Lámpara", "Dormitorio 1", 60.0),
    ],
    opciones: Default::default(),
};

// Reglas reglamentarias por defecto
let rules = rules::InMemoryRules::regulation_defaults();

// Cálculo completo del proyecto
let result = compute_project(&project, &rules, None).unwrap();
println!("{}", asplain::result_to_plain(&result));
```

*/

#![deny(missing_docs)]

#[cfg(test)] // <-- not needed in examples + integration tests
#[macro_use]
extern crate pretty_assertions;

mod calc;
mod circuits;
mod demand;
mod loads;
mod protection;

pub mod asplain;
pub mod error;
pub mod rules;
pub mod types;
pub mod validate;

pub use calc::*;
pub use circuits::*;
pub use demand::*;
pub use error::RebtError;
pub use loads::*;
pub use protection::*;
pub use rules::RuleProvider;
pub use types::*;

/// Número de versión de la librería
///
/// Version number
pub static VERSION: &str = env!("CARGO_PKG_VERSION");
