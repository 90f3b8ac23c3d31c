//! Corruption systems (drain input, gauge tick, dissolve presentation).

use bevy::prelude::*;

use super::events::{DrainInput, Purified};
use super::gauge::CorruptionGauge;
use crate::components::Presentation;
use crate::lifecycle::DespawnAfter;

/// Система: DrainInput → CorruptionGauge::set_being_drained
pub fn apply_drain_input(
    mut drain_events: EventReader<DrainInput>,
    mut gauges: Query<&mut CorruptionGauge>,
) {
    for event in drain_events.read() {
        let Ok(mut gauge) = gauges.get_mut(event.entity) else {
            continue;
        };

        if gauge.is_being_drained() != event.draining {
            gauge.set_being_drained(event.draining);
            crate::log(&format!(
                "Corruption: {:?} draining = {} (level {:.2})",
                event.entity, event.draining, gauge.level()
            ));
        }
    }
}

/// Система: тик всех CorruptionGauge
///
/// - purified → Purified event + Presentation.purified на визуале
/// - dissolve amount → Presentation визуала
/// - destroy_after → DespawnAfter на визуале (grace delay)
pub fn tick_corruption(
    mut commands: Commands,
    time: Res<Time<Fixed>>,
    mut gauges: Query<(Entity, &mut CorruptionGauge)>,
    mut presentations: Query<&mut Presentation>,
    mut purified_events: EventWriter<Purified>,
) {
    let delta = time.delta_secs();
    let now = time.elapsed_secs();

    for (entity, mut gauge) in gauges.iter_mut() {
        let tick = gauge.tick(delta);
        let visual = gauge.visual();

        if tick.purified {
            crate::log_info(&format!("✨ Corruption: {:?} purified", entity));
            purified_events.write(Purified {
                enemy: entity,
                visual,
            });
        }

        let Some(visual) = visual else {
            continue;
        };

        if let Ok(mut presentation) = presentations.get_mut(visual) {
            if tick.purified {
                presentation.purified = true;
            }
            if let Some(amount) = tick.dissolve_amount {
                presentation.dissolve_amount = amount;
            }
        }

        if let Some(grace) = tick.destroy_after {
            if let Ok(mut visual_commands) = commands.get_entity(visual) {
                visual_commands.insert(DespawnAfter {
                    despawn_time: now + grace,
                });
                crate::log(&format!(
                    "Corruption: {:?} dissolved, visual {:?} despawns in {:.2}s",
                    entity, visual, grace
                ));
            }
        }
    }
}
