//! PerceptionSensor — field of view + range + line-of-sight с hysteresis.
//!
//! Проверка видимости (`evaluate`):
//! 1. near-field: `distance < range * near_field_fraction` И `angle < fov / 2`
//! 2. только если near-field прошёл — raycast до `range * 2`
//! 3. InView только если первый hit == target (свой collider наблюдателя не считается)
//!
//! Политика переходов (`handle_proximity`):
//! - Enter: InView → Acquired, иначе Lost (даже если ещё ни разу не видели)
//! - Stay (только search mode): события только на фронтах (no chatter)
//! - Exit: Lost если target_seen

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::GizmoColor;
use crate::error::{ensure_positive, ensure_unit_range, ConfigError};
use crate::services::OcclusionQuery;

/// Дистанция ниже которой target считается совпадающим с сенсором
const COINCIDENT_DISTANCE: f32 = 1e-4;

/// Параметры сенсора
#[derive(Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorConfig {
    /// Угол обзора (градусы, (0, 360])
    pub field_of_view_degrees: f32,
    /// Радиус обнаружения (метры)
    pub detection_radius: f32,
    /// Stay события перепроверяют видимость каждый тик
    pub search_mode: bool,
    /// Доля радиуса для near-field проверки
    pub near_field_fraction: f32,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            field_of_view_degrees: 110.0,
            detection_radius: 10.0,
            search_mode: true,
            near_field_fraction: 0.75,
        }
    }
}

impl SensorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fov = self.field_of_view_degrees;
        if !(fov > 0.0 && fov <= 360.0) {
            return Err(ConfigError::FieldOfView(fov));
        }
        ensure_positive("detection_radius", self.detection_radius)?;
        ensure_unit_range("near_field_fraction", self.near_field_fraction)?;
        Ok(())
    }
}

/// Результат проверки видимости
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sight {
    InView,
    OutOfView,
}

/// Фаза proximity trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum ProximityPhase {
    Enter,
    Stay,
    Exit,
}

/// Переход видимости (фронт)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SightTransition {
    Acquired,
    Lost,
}

/// Геометрия проверки на текущий тик
#[derive(Debug, Clone, Copy)]
pub struct SightLine {
    /// Сам сенсор (его collider не блокирует луч)
    pub observer: Entity,
    pub position: Vec3,
    pub forward: Vec3,
    pub target_position: Vec3,
}

/// Сенсор врага
///
/// Инвариант: нет target → target_seen == false и событий нет.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct PerceptionSensor {
    config: SensorConfig,
    target: Option<Entity>,
    target_seen: bool,
    gizmo: GizmoColor,
}

impl PerceptionSensor {
    pub fn new(config: SensorConfig) -> Self {
        Self {
            config,
            target: None,
            target_seen: false,
            gizmo: GizmoColor::Neutral,
        }
    }

    pub fn with_target(mut self, target: Entity) -> Self {
        self.set_target(Some(target));
        self
    }

    /// Перенастроить fov/range/search mode (near-field fraction не меняется).
    /// При ошибке состояние не трогаем.
    pub fn configure(
        &mut self,
        field_of_view_degrees: f32,
        detection_radius: f32,
        search_mode: bool,
    ) -> Result<(), ConfigError> {
        let config = SensorConfig {
            field_of_view_degrees,
            detection_radius,
            search_mode,
            ..self.config.clone()
        };
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// `None` — no-op, текущий target сохраняется
    pub fn set_target(&mut self, candidate: Option<Entity>) {
        if let Some(target) = candidate {
            self.target = Some(target);
        }
    }

    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    pub fn target(&self) -> Option<Entity> {
        self.target
    }

    pub fn target_seen(&self) -> bool {
        self.target_seen
    }

    pub fn gizmo_color(&self) -> GizmoColor {
        self.gizmo
    }

    /// Near-field (угол + доля радиуса) → raycast
    pub fn evaluate(&self, sight: SightLine, occlusion: &dyn OcclusionQuery) -> Sight {
        let Some(target) = self.target else {
            return Sight::OutOfView;
        };

        let to_target = sight.target_position - sight.position;
        let distance = to_target.length();

        // Target в той же точке: угол не определён, луч пускать некуда
        if distance < COINCIDENT_DISTANCE {
            return Sight::InView;
        }

        let half_fov = self.config.field_of_view_degrees * 0.5;
        let angle = to_target.angle_between(sight.forward).to_degrees();
        let near_field = distance < self.config.detection_radius * self.config.near_field_fraction
            && angle < half_fov;

        if !near_field {
            return Sight::OutOfView;
        }

        let direction = to_target / distance;
        let max_distance = self.config.detection_radius * 2.0;
        match occlusion.raycast(sight.position, direction, max_distance, Some(sight.observer)) {
            Some(hit) if hit.entity == target => Sight::InView,
            _ => Sight::OutOfView,
        }
    }

    /// Обработка proximity trigger от `other`.
    ///
    /// Возвращает переход, если его нужно отправить наружу.
    /// `other` != target (или target нет) → ничего.
    pub fn handle_proximity(
        &mut self,
        phase: ProximityPhase,
        other: Entity,
        sight: SightLine,
        occlusion: &dyn OcclusionQuery,
    ) -> Option<SightTransition> {
        if self.target != Some(other) {
            return None;
        }

        let transition = match phase {
            ProximityPhase::Enter => match self.evaluate(sight, occlusion) {
                Sight::InView => Some(SightTransition::Acquired),
                Sight::OutOfView => Some(SightTransition::Lost),
            },
            ProximityPhase::Stay => {
                if !self.config.search_mode {
                    return None;
                }
                match (self.evaluate(sight, occlusion), self.target_seen) {
                    (Sight::InView, false) => Some(SightTransition::Acquired),
                    (Sight::OutOfView, true) => Some(SightTransition::Lost),
                    _ => None,
                }
            }
            ProximityPhase::Exit => self.target_seen.then_some(SightTransition::Lost),
        };

        if let Some(transition) = transition {
            self.apply(transition);
        }
        transition
    }

    fn apply(&mut self, transition: SightTransition) {
        match transition {
            SightTransition::Acquired => {
                self.target_seen = true;
                self.gizmo = GizmoColor::Seen;
            }
            SightTransition::Lost => {
                self.target_seen = false;
                self.gizmo = GizmoColor::Lost;
            }
        }
    }
}
