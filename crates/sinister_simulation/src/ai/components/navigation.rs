//! Navigation controller (wander / chase / bound).

use bevy::prelude::*;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::components::{MoveRequest, StasisMarkers};
use crate::error::{ensure_positive, ConfigError};
use crate::services::PathfindingService;

/// Режим навигации врага
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum NavigationMode {
    /// Wander — случайные точки в wander_radius каждые wander_interval секунд
    #[default]
    Wander,
    /// Chase — идём к target (destination обновляется каждый тик)
    Chase,
    /// Bound — обездвижен на bound_duration, потом всегда Wander
    Bound,
}

/// Параметры навигации
#[derive(Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Радиус выбора wander точки (метры)
    pub wander_radius: f32,
    /// Время между сменой wander точки (секунды)
    pub wander_interval: f32,
    /// Stasis/noise материала пока Bound
    pub bound_stasis_amount: f32,
    pub bound_noise_amount: f32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            wander_radius: 10.0,
            wander_interval: 5.0,
            bound_stasis_amount: 1.0,
            bound_noise_amount: 1.0,
        }
    }
}

impl NavigationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("wander_radius", self.wander_radius)?;
        ensure_positive("wander_interval", self.wander_interval)?;
        Ok(())
    }

    fn bound_markers(&self) -> StasisMarkers {
        StasisMarkers {
            stasis: self.bound_stasis_amount,
            noise: self.bound_noise_amount,
        }
    }
}

/// Всё что нужно контроллеру от мира на один тик
pub struct NavigationContext<'a> {
    pub agent: Entity,
    pub position: Vec3,
    /// Позиция target (для Chase). None — target нет или он despawned
    pub chase_destination: Option<Vec3>,
    pub service: &'a mut dyn PathfindingService,
    pub rng: &'a mut dyn RngCore,
}

/// Navigation controller врага
///
/// Инварианты:
/// - Bound подавляет и wander re-roll, и движение
/// - Выход из Bound всегда в Wander, stasis markers → NEUTRAL
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct NavigationController {
    config: NavigationConfig,
    mode: NavigationMode,
    wander_timer: f32,
    bound_timer: f32,
    bound_duration: f32,
    destination: Option<Vec3>,
    markers: StasisMarkers,
    target: Option<Entity>,
}

impl NavigationController {
    pub fn new(config: NavigationConfig) -> Self {
        Self {
            // Первый тик сразу выбирает wander точку
            wander_timer: config.wander_interval,
            config,
            mode: NavigationMode::Wander,
            bound_timer: 0.0,
            bound_duration: 0.0,
            destination: None,
            markers: StasisMarkers::NEUTRAL,
            target: None,
        }
    }

    pub fn with_target(mut self, target: Entity) -> Self {
        self.set_target(Some(target));
        self
    }

    /// Target для chase (None — no-op)
    pub fn set_target(&mut self, target: Option<Entity>) {
        if let Some(target) = target {
            self.target = Some(target);
        }
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    pub fn mode(&self) -> NavigationMode {
        self.mode
    }

    pub fn target(&self) -> Option<Entity> {
        self.target
    }

    pub fn destination(&self) -> Option<Vec3> {
        self.destination
    }

    pub fn markers(&self) -> StasisMarkers {
        self.markers
    }

    pub fn wander_timer(&self) -> f32 {
        self.wander_timer
    }

    pub fn bound_timer(&self) -> f32 {
        self.bound_timer
    }

    pub fn bound_duration(&self) -> f32 {
        self.bound_duration
    }

    /// Wander → Chase. Уже Chase или Bound — no-op.
    ///
    /// Возвращает true если режим сменился.
    pub fn enter_chase(&mut self) -> bool {
        if self.mode != NavigationMode::Wander {
            return false;
        }
        self.mode = NavigationMode::Chase;
        true
    }

    /// Chase → Wander. Иначе no-op.
    pub fn exit_chase(&mut self) -> bool {
        if self.mode != NavigationMode::Chase {
            return false;
        }
        self.mode = NavigationMode::Wander;
        true
    }

    /// Обездвижить на `duration` секунд (перебивает Wander/Chase и предыдущий Bound)
    pub fn bind(&mut self, duration: f32) {
        self.mode = NavigationMode::Bound;
        self.bound_timer = 0.0;
        self.bound_duration = duration.max(0.0);
        self.markers = self.config.bound_markers();
    }

    /// Один тик навигации → запрос движения для locomotion
    pub fn tick(&mut self, dt: f32, ctx: &mut NavigationContext) -> MoveRequest {
        if self.mode == NavigationMode::Bound {
            self.bound_timer += dt;
            if self.bound_timer >= self.bound_duration {
                self.mode = NavigationMode::Wander;
                self.bound_timer = 0.0;
                self.markers = StasisMarkers::NEUTRAL;
                crate::log(&format!("AI: {:?} Bound → Wander", ctx.agent));
            }
        }

        match self.mode {
            NavigationMode::Wander => {
                self.wander_timer += dt;
                if self.wander_timer >= self.config.wander_interval {
                    self.reroll_destination(ctx);
                    self.wander_timer = 0.0;
                }
            }
            NavigationMode::Chase => {
                if let Some(destination) = ctx.chase_destination {
                    ctx.service.set_destination(ctx.agent, destination);
                    self.destination = Some(destination);
                }
            }
            NavigationMode::Bound => return MoveRequest::IDLE,
        }

        let steering = ctx.service.steering(ctx.agent, ctx.position);
        if steering.remaining_distance > steering.stopping_distance {
            MoveRequest::walk(steering.desired_velocity)
        } else {
            MoveRequest::IDLE
        }
    }

    /// Случайная точка в сфере wander_radius → navmesh sample.
    /// Sample не удался — старая destination остаётся.
    fn reroll_destination(&mut self, ctx: &mut NavigationContext) {
        let radius = self.config.wander_radius;
        let candidate = ctx.position + random_in_unit_sphere(ctx.rng) * radius;

        match ctx.service.sample_point(candidate, radius) {
            Some(point) => {
                ctx.service.set_destination(ctx.agent, point);
                self.destination = Some(point);
                crate::log(&format!("AI: {:?} wander destination → {:?}", ctx.agent, point));
            }
            None => {
                crate::log(&format!(
                    "AI: {:?} no navmesh point near {:?}, keeping previous destination",
                    ctx.agent, candidate
                ));
            }
        }
    }
}

/// Равномерная точка внутри единичной сферы (rejection sampling)
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let point = Vec3::new(
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
        );
        if point.length_squared() <= 1.0 {
            return point;
        }
    }
}
