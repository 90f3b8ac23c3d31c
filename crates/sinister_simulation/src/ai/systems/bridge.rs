//! Behavior Bridge: PerceptionEvent → NavigationController chase flag.
//!
//! Без состояния. Сенсор и контроллер не знают типов друг друга.

use bevy::prelude::*;

use crate::ai::NavigationController;
use crate::perception::PerceptionEvent;

/// Система: Acquired → enter_chase, Lost → exit_chase
///
/// Повторные события безопасны (enter/exit идемпотентны).
pub fn relay_perception_to_navigation(
    mut perception_events: EventReader<PerceptionEvent>,
    mut controllers: Query<&mut NavigationController>,
) {
    for event in perception_events.read() {
        let Ok(mut controller) = controllers.get_mut(event.observer()) else {
            continue;
        };

        match event {
            PerceptionEvent::Acquired { observer, target } => {
                if controller.enter_chase() {
                    crate::log(&format!("⚔️ AI: {:?} Wander → Chase (target {:?})", observer, target));
                }
            }
            PerceptionEvent::Lost { observer, target } => {
                if controller.exit_chase() {
                    crate::log(&format!("🚶 AI: {:?} Chase → Wander (lost {:?})", observer, target));
                }
            }
        }
    }
}
