// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate serde_json;
#[macro_use]
extern crate log;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate prettytable;
extern crate fnv;
extern crate semgraph;

pub mod errors;
pub mod converter;
pub mod settings;
pub mod evaluation_metrics;
pub mod prelude;
