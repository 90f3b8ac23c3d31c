//! AI components

pub mod navigation;


pub use navigation::*;
