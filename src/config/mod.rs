// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for msgcheck.
//!
//! Configuration comes from a msgcheck.toml file (if any) with command-line
//! values layered on top, and is validated once into a [`Config`].

pub mod default;
mod loader;
mod schema;

pub use loader::{
    find_config_file, find_config_file_from, load_config, load_config_from, merge_rules,
    parse_config,
};
pub use schema::*;
