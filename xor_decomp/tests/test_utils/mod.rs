#![allow(dead_code)]

mod debug;
mod decomposition_properties;
mod ring_modifiers;

pub use debug::*;
pub use decomposition_properties::*;
pub use ring_modifiers::*;
