//! Lifecycle: отложенный despawn entities (визуал после dissolve)

use bevy::prelude::*;

use crate::SimulationSet;

/// Удалить entity после указанного времени
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct DespawnAfter {
    /// Время деспавна (в секундах от старта симуляции)
    pub despawn_time: f32,
}

/// Система: деспавн entities с истёкшим DespawnAfter timeout
///
/// Удаляет entity (вместе с children) если текущее время >= despawn_time.
pub fn despawn_after_timeout(
    mut commands: Commands,
    query: Query<(Entity, &DespawnAfter)>,
    time: Res<Time>,
) {
    let current_time = time.elapsed_secs();

    for (entity, despawn_after) in query.iter() {
        if current_time >= despawn_after.despawn_time {
            crate::log(&format!("⚰️ Despawning entity {:?} (timeout)", entity));
            commands.entity(entity).despawn();
        }
    }
}

pub struct LifecyclePlugin;

impl Plugin for LifecyclePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            despawn_after_timeout.in_set(SimulationSet::Cleanup),
        );
    }
}
