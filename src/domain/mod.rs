// src/domain/mod.rs
pub mod core;
pub mod factory;
pub mod manager;
pub mod states;
pub mod validation;
pub mod vehicles;

pub use self::core::*;
pub use self::factory::*;
pub use self::manager::*;
pub use self::states::*;
pub use self::vehicles::*;
