//! # breakgen
//!
//! CLI for generating packed Unicode break-property tables.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

pub mod handler;
pub mod opts;
pub mod utils;

pub use opts::Breakgen;
