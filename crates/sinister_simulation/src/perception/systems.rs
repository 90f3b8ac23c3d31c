//! Perception systems (ProximityEvent → PerceptionEvent).

use bevy::prelude::*;

use super::events::{PerceptionEvent, ProximityEvent};
use super::sensor::{PerceptionSensor, ProximityPhase, SightLine, SightTransition};
use crate::components::Presentation;
use crate::services::OcclusionService;

/// Система: обработка proximity triggers сенсорами
///
/// Для каждого ProximityEvent:
/// 1. Собираем SightLine (позиция + forward сенсора, позиция target)
/// 2. PerceptionSensor решает есть ли фронт (hysteresis внутри сенсора)
/// 3. Фронт → PerceptionEvent + gizmo color в Presentation
pub fn process_proximity_events(
    mut proximity_events: EventReader<ProximityEvent>,
    mut sensors: Query<(&Transform, &mut PerceptionSensor, &mut Presentation)>,
    positions: Query<&Transform>,
    occlusion: Res<OcclusionService>,
    mut perception_events: EventWriter<PerceptionEvent>,
) {
    for event in proximity_events.read() {
        let Ok((transform, mut sensor, mut presentation)) = sensors.get_mut(event.sensor) else {
            continue;
        };

        // Exit не смотрит на геометрию — target мог уже исчезнуть
        let target_position = match positions.get(event.other) {
            Ok(target_transform) => target_transform.translation,
            Err(_) if event.phase == ProximityPhase::Exit => transform.translation,
            Err(_) => {
                crate::log(&format!(
                    "Perception: {:?} trigger from {:?} without Transform, skipped",
                    event.sensor, event.other
                ));
                continue;
            }
        };

        let sight = SightLine {
            observer: event.sensor,
            position: transform.translation,
            forward: transform.forward().as_vec3(),
            target_position,
        };

        let Some(transition) =
            sensor.handle_proximity(event.phase, event.other, sight, occlusion.0.as_ref())
        else {
            continue;
        };

        presentation.gizmo = sensor.gizmo_color();

        let perception_event = match transition {
            SightTransition::Acquired => {
                crate::log(&format!("👁️ {:?} acquired target {:?}", event.sensor, event.other));
                PerceptionEvent::Acquired {
                    observer: event.sensor,
                    target: event.other,
                }
            }
            SightTransition::Lost => {
                crate::log(&format!("👻 {:?} lost target {:?}", event.sensor, event.other));
                PerceptionEvent::Lost {
                    observer: event.sensor,
                    target: event.other,
                }
            }
        };
        perception_events.write(perception_event);
    }
}
