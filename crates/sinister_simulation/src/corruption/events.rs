//! Corruption events

use bevy::prelude::*;

/// Вход: начать/остановить drain врага (способность игрока)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrainInput {
    pub entity: Entity,
    pub draining: bool,
}

/// Выход: враг очищен (level пересёк 0). Отправляется ровно один раз.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Purified {
    pub enemy: Entity,
    /// Визуал corrupted формы (если был)
    pub visual: Option<Entity>,
}
