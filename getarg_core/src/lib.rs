//! Core module for `getarg`.
//! See [documentation root](https://docs.rs/getarg/latest/getarg/index.html) for full details.
#![deny(missing_docs)]
mod api;
pub mod coerce;
mod constant;
mod model;
mod table;
mod tokens;

pub use api::*;
pub use table::ArgTable;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
