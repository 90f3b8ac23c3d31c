//! Locomotion systems

use bevy::prelude::*;

use crate::components::{MoveRequest, Occluder};
use crate::services::{OcclusionService, SphereOcclusion};

/// Система интеграции MoveRequest → Transform (headless режим)
///
/// position += velocity * dt, поворот лицом по горизонтальной скорости
/// (forward сенсора = forward transform'а).
pub fn apply_move_requests(
    mut query: Query<(&MoveRequest, &mut Transform)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (request, mut transform) in query.iter_mut() {
        if request.is_idle() {
            continue;
        }

        transform.translation += request.velocity * delta;

        let heading = Vec3::new(request.velocity.x, 0.0, request.velocity.z);
        if heading.length_squared() > 1e-6 {
            transform.look_to(heading, Vec3::Y);
        }
    }
}

/// Система: пересборка SphereOcclusion из Occluder + Transform
pub fn sync_sphere_occluders(
    occluders: Query<(Entity, &Transform, &Occluder)>,
    mut occlusion: ResMut<OcclusionService>,
) {
    let world: SphereOcclusion = occluders
        .iter()
        .map(|(entity, transform, occluder)| (entity, transform.translation, occluder.radius))
        .collect();

    *occlusion = OcclusionService::new(world);
}
