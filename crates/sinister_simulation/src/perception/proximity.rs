//! Headless proximity trigger: сфера радиусом detection_radius вокруг сенсора
//!
//! Poll-based: каждый тик сравниваем "внутри/снаружи" с прошлым тиком → Enter/Stay/Exit.
//! Host с физическими trigger volume пишет ProximityEvent сам и ProximityTracker не вешает.

use bevy::prelude::*;

use super::events::ProximityEvent;
use super::sensor::{PerceptionSensor, ProximityPhase};

#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct ProximityTracker {
    inside: bool,
}

impl ProximityTracker {
    pub fn is_inside(&self) -> bool {
        self.inside
    }

    /// Новое состояние "внутри" → фаза trigger (None если снаружи и был снаружи)
    pub fn update(&mut self, within: bool) -> Option<ProximityPhase> {
        let phase = match (self.inside, within) {
            (false, true) => Some(ProximityPhase::Enter),
            (true, true) => Some(ProximityPhase::Stay),
            (true, false) => Some(ProximityPhase::Exit),
            (false, false) => None,
        };
        self.inside = within;
        phase
    }
}

/// Система: ProximityTracker → ProximityEvent
///
/// Target despawned пока был внутри → Exit (сенсор должен потерять его).
pub fn track_proximity(
    mut sensors: Query<(Entity, &Transform, &PerceptionSensor, &mut ProximityTracker)>,
    positions: Query<&Transform>,
    mut proximity_events: EventWriter<ProximityEvent>,
) {
    for (entity, transform, sensor, mut tracker) in sensors.iter_mut() {
        let Some(target) = sensor.target() else {
            continue;
        };

        let within = positions
            .get(target)
            .map(|target_transform| {
                transform.translation.distance(target_transform.translation)
                    <= sensor.config().detection_radius
            })
            .unwrap_or(false);

        if let Some(phase) = tracker.update(within) {
            proximity_events.write(ProximityEvent {
                sensor: entity,
                other: target,
                phase,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_phases() {
        let mut tracker = ProximityTracker::default();

        assert_eq!(tracker.update(false), None);
        assert_eq!(tracker.update(true), Some(ProximityPhase::Enter));
        assert_eq!(tracker.update(true), Some(ProximityPhase::Stay));
        assert_eq!(tracker.update(true), Some(ProximityPhase::Stay));
        assert_eq!(tracker.update(false), Some(ProximityPhase::Exit));
        assert!(!tracker.is_inside());
        assert_eq!(tracker.update(false), None);
    }
}
