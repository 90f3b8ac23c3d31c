//! Perception — Perception Sensor врага
//!
//! Поток: ProximityEvent (trigger) → PerceptionSensor (fov + range + LOS) → PerceptionEvent
//! Архитектура: сенсор ничего не знает про навигацию, только пишет события.

use bevy::prelude::*;

pub mod events;
pub mod proximity;
pub mod sensor;
pub mod systems;


pub use events::{PerceptionEvent, ProximityEvent};
pub use proximity::{track_proximity, ProximityTracker};
pub use sensor::{
    PerceptionSensor, ProximityPhase, SensorConfig, Sight, SightLine, SightTransition,
};
pub use systems::process_proximity_events;

use crate::SimulationSet;

/// Perception Plugin
///
/// - Sense: track_proximity (headless triggers)
/// - Perceive: process_proximity_events
pub struct PerceptionPlugin;

impl Plugin for PerceptionPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ProximityEvent>()
            .add_event::<PerceptionEvent>();

        app.add_systems(
            FixedUpdate,
            (
                track_proximity.in_set(SimulationSet::Sense),
                process_proximity_events.in_set(SimulationSet::Perceive),
            ),
        );
    }
}
