//! # Clean Code Rust
//!
//! This crate carries the Clean Code Rust guide: software engineering
//! principles from Robert C. Martin's *Clean Code*, adapted for Rust.
//!
//! This is a documentation-only crate with no runtime code. The guide lives
//! in `README.md` at the crate root and is embedded below, so every fenced
//! Rust block in it is compiled (and unless tagged otherwise, executed) by
//! `cargo test`.

#![no_std]
#![doc = include_str!("../README.md")]
