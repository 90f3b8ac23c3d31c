//! Corruption — гауге corruption врага
//!
//! Независим от perception/navigation. Вход — DrainInput, выход — Purified
//! и dissolve значения в Presentation визуала.

use bevy::prelude::*;

pub mod events;
pub mod gauge;
pub mod systems;

#[cfg(test)]
mod gauge_tests;

pub use events::{DrainInput, Purified};
pub use gauge::{CorruptionGauge, GaugeConfig, GaugeTick};

use crate::SimulationSet;

/// Corruption Plugin
///
/// - Decide: apply_drain_input
/// - Act: tick_corruption
pub struct CorruptionPlugin;

impl Plugin for CorruptionPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<DrainInput>()
            .add_event::<Purified>();

        app.add_systems(
            FixedUpdate,
            (
                systems::apply_drain_input.in_set(SimulationSet::Decide),
                systems::tick_corruption.in_set(SimulationSet::Act),
            ),
        );
    }
}
