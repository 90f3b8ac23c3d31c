//! Presentation sink: значения для рендера (fire-and-forget)
//!
//! Core только пишет сюда. Рендер/шейдеры host'а читают.
//! Ничего из Presentation не влияет на логику perception/navigation/corruption.

use bevy::prelude::*;

/// Цвет gizmo сенсора (debug)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum GizmoColor {
    /// Ещё не было ни одной проверки
    #[default]
    Neutral,
    /// Target в поле зрения
    Seen,
    /// Target потерян / не виден
    Lost,
}

/// Параметры материала "стазис" (bind)
#[derive(Debug, Clone, Copy, PartialEq, Default, Reflect)]
pub struct StasisMarkers {
    pub stasis: f32,
    pub noise: f32,
}

impl StasisMarkers {
    pub const NEUTRAL: Self = Self {
        stasis: 0.0,
        noise: 0.0,
    };

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

#[derive(Component, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Presentation {
    pub gizmo: GizmoColor,
    pub stasis: StasisMarkers,
    /// Dissolve после очищения (lerp между границами GaugeConfig)
    pub dissolve_amount: f32,
    /// Визуал переключён в "очищенную" форму
    pub purified: bool,
}
