// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for ccheck.
//!
//! Handles discovering, loading and parsing `ccheck.toml`, and turning its
//! `[[rules]]` entries into a compiled rule set.

pub mod default;
mod loader;
mod rules;
mod schema;

pub use default::{default_config, example_config};
pub use loader::{
    find_config_file, find_config_file_from, load_config, load_config_from, load_config_in,
    parse_config,
};
pub use schema::*;
