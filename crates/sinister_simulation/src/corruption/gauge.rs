//! CorruptionGauge — уровень corruption врага и dissolve после очищения.
//!
//! Corrupted фаза:
//! - не drained: level → 1 (rate * dt, кламп на 1)
//! - drained: level → вниз на rate * dt; level < 0 (строго) → очищен (один раз)
//!
//! Purified фаза:
//! - dissolve_alpha растёт на dissolve_rate * dt
//! - presentation = lerp(dissolve_from, dissolve_to, alpha)
//! - alpha > 1 → запрос удаления визуала (ровно один раз), дальше гауге стоит

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, ensure_positive, ConfigError};

#[derive(Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct GaugeConfig {
    /// Скорость изменения level (единиц/сек)
    pub rate: f32,
    /// Скорость dissolve после очищения (единиц/сек)
    pub dissolve_rate: f32,
    /// Значение presentation при alpha = 0
    pub dissolve_from: f32,
    /// Значение presentation при alpha = 1
    pub dissolve_to: f32,
    /// Задержка удаления визуала после полного dissolve (секунды)
    pub destroy_grace_secs: f32,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            rate: 0.03,
            dissolve_rate: 0.01,
            dissolve_from: 0.0,
            dissolve_to: 1.0,
            destroy_grace_secs: 0.5,
        }
    }
}

impl GaugeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("rate", self.rate)?;
        ensure_positive("dissolve_rate", self.dissolve_rate)?;
        ensure_non_negative("destroy_grace_secs", self.destroy_grace_secs)?;
        Ok(())
    }
}

/// Что произошло за тик (для систем: события, presentation, despawn)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GaugeTick {
    /// Очищение произошло в этом тике
    pub purified: bool,
    /// Новое значение dissolve для presentation
    pub dissolve_amount: Option<f32>,
    /// Запланировать удаление визуала через N секунд
    pub destroy_after: Option<f32>,
}

#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct CorruptionGauge {
    config: GaugeConfig,
    level: f32,
    being_drained: bool,
    corrupted: bool,
    dissolve_alpha: f32,
    destruction_requested: bool,
    /// Визуал corrupted формы (child entity, резолвится при спавне)
    visual: Option<Entity>,
}

impl CorruptionGauge {
    pub fn new(config: GaugeConfig) -> Self {
        Self {
            config,
            level: 1.0,
            being_drained: false,
            corrupted: true,
            dissolve_alpha: 0.0,
            destruction_requested: false,
            visual: None,
        }
    }

    pub fn with_visual(mut self, visual: Entity) -> Self {
        self.visual = Some(visual);
        self
    }

    pub fn config(&self) -> &GaugeConfig {
        &self.config
    }

    /// Сырой level (в момент очищения может быть < 0)
    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn level_clamped(&self) -> f32 {
        self.level.clamp(0.0, 1.0)
    }

    pub fn is_corrupted(&self) -> bool {
        self.corrupted
    }

    pub fn is_being_drained(&self) -> bool {
        self.being_drained
    }

    pub fn set_being_drained(&mut self, draining: bool) {
        self.being_drained = draining;
    }

    pub fn dissolve_alpha(&self) -> f32 {
        self.dissolve_alpha
    }

    pub fn destruction_requested(&self) -> bool {
        self.destruction_requested
    }

    pub fn visual(&self) -> Option<Entity> {
        self.visual
    }

    pub fn tick(&mut self, dt: f32) -> GaugeTick {
        if self.corrupted {
            return self.tick_corrupted(dt);
        }
        self.tick_dissolve(dt)
    }

    fn tick_corrupted(&mut self, dt: f32) -> GaugeTick {
        let step = self.config.rate * dt;

        if self.being_drained {
            self.level -= step;
            if self.level < 0.0 {
                self.corrupted = false;
                return GaugeTick {
                    purified: true,
                    ..default()
                };
            }
        } else {
            self.level = (self.level + step).min(1.0);
        }

        GaugeTick::default()
    }

    fn tick_dissolve(&mut self, dt: f32) -> GaugeTick {
        if self.destruction_requested {
            return GaugeTick::default();
        }

        self.dissolve_alpha += self.config.dissolve_rate * dt;

        let t = self.dissolve_alpha.min(1.0);
        let amount = self.config.dissolve_from + (self.config.dissolve_to - self.config.dissolve_from) * t;

        let destroy_after = if self.dissolve_alpha > 1.0 {
            self.destruction_requested = true;
            Some(self.config.destroy_grace_secs)
        } else {
            None
        };

        GaugeTick {
            purified: false,
            dissolve_amount: Some(amount),
            destroy_after,
        }
    }
}
