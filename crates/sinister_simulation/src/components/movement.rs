//! Movement компоненты: locomotion sink

use bevy::prelude::*;

/// Запрос движения на текущий тик (locomotion sink)
///
/// Архитектура:
/// - NavigationController пишет MoveRequest каждый тик (даже нулевой)
/// - Locomotion layer (анимация/физика host'а или headless integrator) читает и применяет
/// - Обратного канала нет
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Reflect)]
#[reflect(Component)]
pub struct MoveRequest {
    /// Желаемая скорость (м/с, world space)
    pub velocity: Vec3,
    pub strafe: bool,
    pub jump: bool,
}

impl MoveRequest {
    /// Стоять на месте
    pub const IDLE: Self = Self {
        velocity: Vec3::ZERO,
        strafe: false,
        jump: false,
    };

    /// Обычная ходьба (без strafe/jump — AI их не использует)
    pub fn walk(velocity: Vec3) -> Self {
        Self {
            velocity,
            ..Self::IDLE
        }
    }

    pub fn is_idle(&self) -> bool {
        self.velocity == Vec3::ZERO
    }
}
