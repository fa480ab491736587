//! Photex CLI library.
//!
//! This crate provides the functionality behind the `photex` binary:
//! input image decoding and the generate/info commands.

pub mod commands;
pub mod decode;
