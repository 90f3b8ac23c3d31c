//! Locomotion — headless исполнение MoveRequest + headless мир сервисов
//!
//! Host с анимацией/физикой читает MoveRequest сам и этот модуль не подключает
//! (кроме HeadlessWorldPlugin, если ему нужны заглушки navmesh/occlusion).

use bevy::prelude::*;

pub mod systems;

pub use systems::{apply_move_requests, sync_sphere_occluders};

use crate::services::{NavigationService, OcclusionService, OpenGroundNavigation, SphereOcclusion};
use crate::SimulationSet;

/// Headless locomotion: MoveRequest → Transform (Apply)
pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            apply_move_requests.in_set(SimulationSet::Apply),
        );
    }
}

/// Headless мир: плоская площадка + сферы-окклюдеры
///
/// Вставляет NavigationService/OcclusionService (если host их ещё не вставил)
/// и каждый тик пересобирает SphereOcclusion из Occluder компонентов.
pub struct HeadlessWorldPlugin {
    /// Половина стороны площадки (метры)
    pub half_extent: f32,
}

impl Default for HeadlessWorldPlugin {
    fn default() -> Self {
        Self { half_extent: 50.0 }
    }
}

impl Plugin for HeadlessWorldPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<NavigationService>() {
            app.insert_resource(NavigationService::new(OpenGroundNavigation::square(
                self.half_extent,
            )));
        }
        if !app.world().contains_resource::<OcclusionService>() {
            app.insert_resource(OcclusionService::new(SphereOcclusion::new()));
        }

        app.add_systems(
            FixedUpdate,
            sync_sphere_occluders.in_set(SimulationSet::Sense),
        );
    }
}
