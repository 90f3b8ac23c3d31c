//! Headless демо: один враг, игрок проходит мимо, bind, drain до очищения
//!
//! Запускает Bevy App без рендера, лог в консоль.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use sinister_simulation::{
    create_headless_app, log_info, spawn_enemy, spawn_player, BindRequest, CorruptionGauge,
    DrainInput, EnemyConfig, GaugeConfig, NavigationController,
};

const TICKS: usize = 3600;

fn main() {
    let seed = 42;
    println!("Starting Sinister headless simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);
    // Один update = один fixed тик (не зависим от wall clock)
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        1.0 / 60.0,
    )));

    // Ускоренный гауге чтобы очищение уложилось в демо
    let config = EnemyConfig {
        gauge: GaugeConfig {
            rate: 0.25,
            dissolve_rate: 0.5,
            ..default()
        },
        ..default()
    };

    let (player, enemy) = {
        let mut commands = app.world_mut().commands();
        let player = spawn_player(&mut commands, Vec3::new(0.0, 0.0, -20.0));
        let enemy = match spawn_enemy(&mut commands, &config, Transform::default(), Some(player)) {
            Ok(enemy) => enemy,
            Err(err) => {
                eprintln!("Invalid enemy config: {}", err);
                return;
            }
        };
        (player, enemy)
    };
    app.world_mut().flush();

    for tick in 0..TICKS {
        // Игрок идёт к врагу первые 10 секунд
        if tick < 600 {
            if let Some(mut transform) = app.world_mut().get_mut::<Transform>(player) {
                transform.translation.z += 2.5 / 60.0;
            }
        }

        match tick {
            900 => {
                app.world_mut().send_event(BindRequest {
                    entity: enemy,
                    duration: 3.0,
                });
            }
            1200 => {
                app.world_mut().send_event(DrainInput {
                    entity: enemy,
                    draining: true,
                });
            }
            _ => {}
        }

        app.update();

        if tick % 300 == 0 {
            let world = app.world();
            let mode = world.get::<NavigationController>(enemy).map(|c| c.mode());
            let level = world.get::<CorruptionGauge>(enemy).map(|g| g.level_clamped());
            log_info(&format!(
                "Tick {}: {} entities, mode {:?}, corruption {:?}",
                tick,
                world.entities().len(),
                mode,
                level
            ));
        }
    }

    println!("Simulation complete!");
}
