//! # breakgen-core
//!
//! Converts Unicode break-property listings (the word-break and line-break
//! tables published by the Unicode Consortium) into a compact packed text
//! encoding embedded in a generated Rust source file.
//!
//! The pipeline is strictly linear: raw lines are parsed into codepoint
//! ranges against a [`PropertyRegistry`](enums::PropertyRegistry), the ranges
//! are sorted, validated and merged into their minimal form, and the result
//! is packed into a delimiter-free string together with the counts a decoder
//! needs. [`generate`] runs the whole pipeline for one property family.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

pub mod codegen;
pub mod encode;
pub mod enums;
pub mod family;
pub mod fs;
pub mod parse;
pub mod ranges;

pub use family::{Family, FamilyConfig, generate};
