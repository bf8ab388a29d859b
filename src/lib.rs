// src/lib.rs
pub mod domain;
pub mod money;

pub use domain::*;
pub use money::*;
