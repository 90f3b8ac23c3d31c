//! Headless navigation: плоская прямоугольная площадка без препятствий
//!
//! Путь = прямая до destination. sample_point проецирует точку на землю
//! и клампит в границы площадки; если клампинг увёл дальше radius — точки нет.

use std::collections::HashMap;

use bevy::prelude::*;

use super::{AgentSteering, PathfindingService};

#[derive(Debug, Clone)]
pub struct OpenGroundNavigation {
    /// Границы площадки (XZ)
    pub min: Vec2,
    pub max: Vec2,
    pub ground_y: f32,
    /// Скорость агентов (м/с)
    pub speed: f32,
    pub stopping_distance: f32,
    destinations: HashMap<Entity, Vec3>,
}

impl OpenGroundNavigation {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self {
            min,
            max,
            ground_y: 0.0,
            speed: 2.0,
            stopping_distance: 0.5,
            destinations: HashMap::new(),
        }
    }

    /// Квадратная площадка `[-half_extent, half_extent]²`
    pub fn square(half_extent: f32) -> Self {
        Self::new(Vec2::splat(-half_extent), Vec2::splat(half_extent))
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_stopping_distance(mut self, stopping_distance: f32) -> Self {
        self.stopping_distance = stopping_distance;
        self
    }

    pub fn destination(&self, agent: Entity) -> Option<Vec3> {
        self.destinations.get(&agent).copied()
    }
}

impl PathfindingService for OpenGroundNavigation {
    fn sample_point(&self, center: Vec3, radius: f32) -> Option<Vec3> {
        let clamped = Vec2::new(center.x, center.z).clamp(self.min, self.max);
        let point = Vec3::new(clamped.x, self.ground_y, clamped.y);

        (point.distance(center) <= radius).then_some(point)
    }

    fn set_destination(&mut self, agent: Entity, destination: Vec3) {
        self.destinations.insert(agent, destination);
    }

    fn steering(&self, agent: Entity, position: Vec3) -> AgentSteering {
        let Some(destination) = self.destinations.get(&agent) else {
            return AgentSteering {
                stopping_distance: self.stopping_distance,
                ..default()
            };
        };

        let mut to_destination = *destination - position;
        to_destination.y = 0.0;

        AgentSteering {
            remaining_distance: to_destination.length(),
            stopping_distance: self.stopping_distance,
            desired_velocity: to_destination.normalize_or_zero() * self.speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_point_inside_bounds() {
        let nav = OpenGroundNavigation::square(20.0);
        let point = nav.sample_point(Vec3::new(3.0, 1.0, -4.0), 5.0).unwrap();
        assert_eq!(point, Vec3::new(3.0, 0.0, -4.0));
    }

    #[test]
    fn test_sample_point_fails_when_clamp_exceeds_radius() {
        let nav = OpenGroundNavigation::square(10.0);
        // 30м за границей, radius 5 — ближайшая валидная точка слишком далеко
        assert!(nav.sample_point(Vec3::new(40.0, 0.0, 0.0), 5.0).is_none());
        // 2м за границей — клампим
        let point = nav.sample_point(Vec3::new(12.0, 0.0, 0.0), 5.0).unwrap();
        assert_eq!(point, Vec3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn test_steering_without_destination_is_stationary() {
        let mut world = World::new();
        let agent = world.spawn_empty().id();
        let nav = OpenGroundNavigation::square(10.0);

        let steering = nav.steering(agent, Vec3::ZERO);
        assert_eq!(steering.remaining_distance, 0.0);
        assert_eq!(steering.desired_velocity, Vec3::ZERO);
    }

    #[test]
    fn test_steering_points_at_destination() {
        let mut world = World::new();
        let agent = world.spawn_empty().id();
        let mut nav = OpenGroundNavigation::square(10.0).with_speed(3.0);
        nav.set_destination(agent, Vec3::new(4.0, 0.0, 0.0));

        let steering = nav.steering(agent, Vec3::ZERO);
        assert!((steering.remaining_distance - 4.0).abs() < 1e-5);
        assert!((steering.desired_velocity - Vec3::new(3.0, 0.0, 0.0)).length() < 1e-5);
    }
}
