//! Spawn helpers: враг (сенсор + навигация + гауге + визуал) и игрок

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ai::{NavigationConfig, NavigationController};
use crate::components::{CorruptedVisual, Enemy, Occluder, Player};
use crate::corruption::{CorruptionGauge, GaugeConfig};
use crate::error::ConfigError;
use crate::perception::{PerceptionSensor, ProximityTracker, SensorConfig};

/// Полный конфиг врага (все секции опциональны в JSON)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub sensor: SensorConfig,
    pub navigation: NavigationConfig,
    pub gauge: GaugeConfig,
}

impl EnemyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sensor.validate()?;
        self.navigation.validate()?;
        self.gauge.validate()?;
        Ok(())
    }
}

/// Spawn врага
///
/// Создаёт:
/// - Enemy + PerceptionSensor + ProximityTracker + NavigationController + CorruptionGauge
/// - Occluder (враг блокирует лучи других сенсоров)
/// - child CorruptedVisual (handle резолвится сразу и хранится в гауге)
///
/// Невалидный конфиг → ничего не спавним.
pub fn spawn_enemy(
    commands: &mut Commands,
    config: &EnemyConfig,
    transform: Transform,
    target: Option<Entity>,
) -> Result<Entity, ConfigError> {
    config.validate()?;

    let mut sensor = PerceptionSensor::new(config.sensor.clone());
    sensor.set_target(target);
    let mut controller = NavigationController::new(config.navigation.clone());
    controller.set_target(target);

    let visual = commands
        .spawn((CorruptedVisual, Name::new("CorruptedVisual")))
        .id();

    let enemy = commands
        .spawn((
            Enemy,
            Name::new("Enemy"),
            transform,
            sensor,
            ProximityTracker::default(),
            controller,
            CorruptionGauge::new(config.gauge.clone()).with_visual(visual),
            Occluder::default(),
        ))
        .add_child(visual)
        .id();

    crate::log(&format!(
        "Spawned enemy {:?} at {:?} (target {:?}, visual {:?})",
        enemy, transform.translation, target, visual
    ));

    Ok(enemy)
}

/// Spawn игрока (target для сенсоров)
pub fn spawn_player(commands: &mut Commands, position: Vec3) -> Entity {
    commands
        .spawn((
            Player,
            Name::new("Player"),
            Transform::from_translation(position),
            Occluder::default(),
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{MoveRequest, Presentation};

    #[test]
    fn test_enemy_config_from_partial_json() {
        let config: EnemyConfig = serde_json::from_str(
            r#"{ "sensor": { "detection_radius": 15.0 }, "gauge": { "rate": 0.1 } }"#,
        )
        .unwrap();

        assert_eq!(config.sensor.detection_radius, 15.0);
        assert_eq!(config.sensor.field_of_view_degrees, 110.0);
        assert_eq!(config.navigation, NavigationConfig::default());
        assert_eq!(config.gauge.rate, 0.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_spawn_enemy_wires_visual_and_target() {
        let mut world = World::new();
        let mut commands = world.commands();
        let player = spawn_player(&mut commands, Vec3::new(0.0, 0.0, -5.0));
        let enemy = spawn_enemy(
            &mut commands,
            &EnemyConfig::default(),
            Transform::default(),
            Some(player),
        )
        .unwrap();
        world.flush();

        let sensor = world.get::<PerceptionSensor>(enemy).unwrap();
        assert_eq!(sensor.target(), Some(player));
        let controller = world.get::<NavigationController>(enemy).unwrap();
        assert_eq!(controller.target(), Some(player));

        // Required components
        assert!(world.get::<MoveRequest>(enemy).is_some());
        assert!(world.get::<Presentation>(enemy).is_some());

        let visual = world.get::<CorruptionGauge>(enemy).unwrap().visual().unwrap();
        assert!(world.get::<CorruptedVisual>(visual).is_some());
        assert_eq!(world.get::<ChildOf>(visual).map(|c| c.parent()), Some(enemy));
    }

    #[test]
    fn test_spawn_enemy_rejects_invalid_config() {
        let mut world = World::new();
        let mut commands = world.commands();
        let config = EnemyConfig {
            sensor: SensorConfig {
                field_of_view_degrees: 0.0,
                ..default()
            },
            ..default()
        };

        let result = spawn_enemy(&mut commands, &config, Transform::default(), None);
        world.flush();

        assert_eq!(result, Err(ConfigError::FieldOfView(0.0)));
        assert_eq!(world.query::<&Enemy>().iter(&world).count(), 0);
        assert_eq!(world.query::<&CorruptedVisual>().iter(&world).count(), 0);
    }
}
