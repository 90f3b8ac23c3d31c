//! AI — навигация врага и Behavior Bridge
//!
//! NavigationController: Wander ⇄ Chase, Bound перебивает оба.
//! Bridge: PerceptionEvent → enter/exit chase.

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod systems;

// Re-export основных типов
pub use components::{
    random_in_unit_sphere, NavigationConfig, NavigationContext, NavigationController,
    NavigationMode,
};
pub use events::BindRequest;

use crate::SimulationSet;

/// AI Plugin
///
/// Регистрирует AI системы в FixedUpdate. Порядок выполнения:
/// 1. Decide: relay_perception_to_navigation → apply_bind_requests
/// 2. Act: tick_navigation (MoveRequest для locomotion)
///
/// Bind после bridge: в одном тике Bind всегда побеждает Acquired.
pub struct AIPlugin;

impl Plugin for AIPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<BindRequest>();

        app.add_systems(
            FixedUpdate,
            (
                (
                    systems::relay_perception_to_navigation,
                    systems::apply_bind_requests,
                )
                    .chain()
                    .in_set(SimulationSet::Decide),
                systems::tick_navigation.in_set(SimulationSet::Act),
            ),
        );
    }
}
