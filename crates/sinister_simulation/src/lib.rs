//! Sinister Simulation Core
//!
//! ECS-ядро врага на Bevy 0.16: perception, навигация, corruption.
//!
//! HOST BOUNDARY:
//! - ECS = логика (сенсор, режимы навигации, гауге)
//! - Host = физика/navmesh/рендер (через `services` traits и sink компоненты)
//!
//! Поток одного тика (FixedUpdate, 60Hz):
//! Sense → Perceive → Decide → Act → Apply → Cleanup

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod ai;
pub mod components;
pub mod corruption;
pub mod error;
pub mod lifecycle;
pub mod locomotion;
pub mod logger;
pub mod perception;
pub mod services;
pub mod spawn;

// Re-export базовых типов для удобства
pub use ai::{AIPlugin, BindRequest, NavigationConfig, NavigationController, NavigationMode};
pub use components::*;
pub use corruption::{CorruptionGauge, CorruptionPlugin, DrainInput, GaugeConfig, Purified};
pub use error::ConfigError;
pub use lifecycle::{DespawnAfter, LifecyclePlugin};
pub use locomotion::{HeadlessWorldPlugin, LocomotionPlugin};
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger, LogLevel,
    LogPrinter,
};
pub use perception::{
    PerceptionEvent, PerceptionPlugin, PerceptionSensor, ProximityEvent, ProximityPhase,
    SensorConfig,
};
pub use services::{NavigationService, OcclusionService};
pub use spawn::{spawn_enemy, spawn_player, EnemyConfig};

/// Фазы тика симуляции (FixedUpdate, строго по порядку)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Сбор входов из мира: proximity triggers, headless occlusion
    Sense,
    /// ProximityEvent → PerceptionEvent
    Perceive,
    /// Bridge, bind requests, drain input
    Decide,
    /// Тики NavigationController и CorruptionGauge
    Act,
    /// MoveRequest → Transform (headless locomotion)
    Apply,
    /// Отложенный despawn
    Cleanup,
}

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// Сервисы (`OcclusionService`, `NavigationService`) вставляет host
/// или `HeadlessWorldPlugin`.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            // Детерминистичный RNG (seed по умолчанию)
            .insert_resource(DeterministicRng::new(42))
            .configure_sets(
                FixedUpdate,
                (
                    SimulationSet::Sense,
                    SimulationSet::Perceive,
                    SimulationSet::Decide,
                    SimulationSet::Act,
                    SimulationSet::Apply,
                    SimulationSet::Cleanup,
                )
                    .chain(),
            )
            // Подсистемы
            .add_plugins((PerceptionPlugin, AIPlugin, CorruptionPlugin, LifecyclePlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// SimulationPlugin + headless locomotion + плоская площадка со сферами-окклюдерами.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .add_plugins((SimulationPlugin, LocomotionPlugin, HeadlessWorldPlugin::default()))
        .insert_resource(DeterministicRng::new(seed));

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
