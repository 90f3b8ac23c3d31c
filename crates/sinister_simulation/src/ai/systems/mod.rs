//! AI systems (behavior bridge + navigation)

pub mod bridge;
pub mod navigation;

pub use bridge::*;
pub use navigation::*;
