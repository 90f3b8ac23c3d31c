//! World компоненты: Occluder

use bevy::prelude::*;

/// Сфера, блокирующая лучи в headless occlusion мире
///
/// `SphereOcclusion` пересобирается из всех Occluder каждый тик.
/// Host с собственной физикой этот компонент игнорирует.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Occluder {
    pub radius: f32,
}

impl Default for Occluder {
    fn default() -> Self {
        Self { radius: 0.5 } // Капсула персонажа ≈ 0.5м
    }
}
