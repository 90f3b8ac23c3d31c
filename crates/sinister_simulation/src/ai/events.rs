//! AI Events — запросы от gameplay к навигации
//!
//! Architecture: gameplay (способности игрока, ловушки) не трогает NavigationController
//! напрямую — пишет BindRequest, AI plugin применяет перед тиком навигации.

use bevy::prelude::*;

/// Обездвижить врага на `duration` секунд
///
/// Перебивает Wander/Chase и текущий Bound (таймер начинается заново).
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct BindRequest {
    pub entity: Entity,
    pub duration: f32,
}
