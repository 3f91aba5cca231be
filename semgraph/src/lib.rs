// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

extern crate serde;
#[macro_use]
extern crate serde_json;
#[macro_use]
extern crate error_chain;
extern crate regex;

pub mod errors;
pub mod graph;
pub mod prelude;
