//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - actor: маркеры (Enemy, Player, CorruptedVisual)
//! - movement: MoveRequest (locomotion sink)
//! - presentation: Presentation (gizmo color, stasis/noise, dissolve)
//! - world: Occluder (сферы для headless occlusion)
//!
//! Компоненты с логикой живут в своих доменах:
//! PerceptionSensor → perception, NavigationController → ai, CorruptionGauge → corruption.

pub mod actor;
pub mod movement;
pub mod presentation;
pub mod world;

pub use actor::*;
pub use movement::*;
pub use presentation::*;
pub use world::*;
