#![doc = include_str!("../README.md")]

mod fmt;
mod ops;
pub mod quantity;
pub mod vehicle;
