#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

pub mod core;
pub mod input;
pub mod prelude;
pub mod quantity;
pub mod tables;
