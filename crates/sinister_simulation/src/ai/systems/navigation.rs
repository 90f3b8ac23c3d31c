//! Navigation systems (bind requests, per-tick movement).

use bevy::prelude::*;

use crate::ai::{BindRequest, NavigationContext, NavigationController};
use crate::components::{MoveRequest, Presentation};
use crate::services::NavigationService;
use crate::DeterministicRng;

/// Система: BindRequest → NavigationController::bind
///
/// Stasis markers пишем в Presentation сразу (визуал реагирует в тот же тик).
pub fn apply_bind_requests(
    mut bind_requests: EventReader<BindRequest>,
    mut controllers: Query<(&mut NavigationController, &mut Presentation)>,
) {
    for request in bind_requests.read() {
        let Ok((mut controller, mut presentation)) = controllers.get_mut(request.entity) else {
            crate::log(&format!("AI: BindRequest for {:?} without NavigationController", request.entity));
            continue;
        };

        let previous = controller.mode();
        controller.bind(request.duration);
        presentation.stasis = controller.markers();

        crate::log(&format!(
            "🧊 AI: {:?} {:?} → Bound ({:.2}s)",
            request.entity, previous, request.duration
        ));
    }
}

/// Система: тик навигации всех врагов
///
/// 1. Chase destination = текущая позиция target (если target жив)
/// 2. NavigationController::tick → MoveRequest (locomotion sink)
/// 3. Stasis markers → Presentation
pub fn tick_navigation(
    time: Res<Time<Fixed>>,
    mut rng: ResMut<DeterministicRng>,
    mut navigation: ResMut<NavigationService>,
    mut agents: Query<(
        Entity,
        &Transform,
        &mut NavigationController,
        &mut MoveRequest,
        &mut Presentation,
    )>,
    positions: Query<&Transform>,
) {
    let delta = time.delta_secs();

    for (entity, transform, mut controller, mut request, mut presentation) in agents.iter_mut() {
        let chase_destination = controller
            .target()
            .and_then(|target| positions.get(target).ok())
            .map(|target_transform| target_transform.translation);

        let mut ctx = NavigationContext {
            agent: entity,
            position: transform.translation,
            chase_destination,
            service: navigation.0.as_mut(),
            rng: &mut rng.rng,
        };
        let move_request = controller.tick(delta, &mut ctx);

        // Проверяем что значения изменились — иначе Changed<..> спамит host
        if *request != move_request {
            *request = move_request;
        }
        if presentation.stasis != controller.markers() {
            presentation.stasis = controller.markers();
        }
    }
}
