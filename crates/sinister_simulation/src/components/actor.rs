//! Маркеры акторов: Enemy, Player, CorruptedVisual

use bevy::prelude::*;

/// Враг (perception + navigation + corruption)
///
/// Автоматически добавляет MoveRequest и Presentation через Required Components.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
#[require(Transform, crate::components::MoveRequest, crate::components::Presentation)]
pub struct Enemy;

/// Игрок — цель для PerceptionSensor и chase
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
#[require(Transform)]
pub struct Player;

/// Визуал "corrupted" формы врага (child entity)
///
/// Спавнится вместе с врагом, handle хранится в CorruptionGauge.
/// Получает dissolve amount и удаляется после очищения.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
#[require(Transform, crate::components::Presentation)]
pub struct CorruptedVisual;
