//! Headless occlusion: мир из сфер
//!
//! Каждый Occluder (враги, игрок, стены-колонны) — сфера.
//! Raycast возвращает ближайшую сферу на луче.

use bevy::prelude::*;

use super::{OcclusionQuery, RayHit};

#[derive(Debug, Clone, Copy)]
struct Sphere {
    entity: Entity,
    center: Vec3,
    radius: f32,
}

#[derive(Debug, Clone, Default)]
pub struct SphereOcclusion {
    spheres: Vec<Sphere>,
}

impl SphereOcclusion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sphere(mut self, entity: Entity, center: Vec3, radius: f32) -> Self {
        self.insert(entity, center, radius);
        self
    }

    pub fn insert(&mut self, entity: Entity, center: Vec3, radius: f32) {
        self.spheres.push(Sphere {
            entity,
            center,
            radius,
        });
    }

    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }
}

impl FromIterator<(Entity, Vec3, f32)> for SphereOcclusion {
    fn from_iter<I: IntoIterator<Item = (Entity, Vec3, f32)>>(iter: I) -> Self {
        let mut world = Self::new();
        for (entity, center, radius) in iter {
            world.insert(entity, center, radius);
        }
        world
    }
}

impl OcclusionQuery for SphereOcclusion {
    fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        ignore: Option<Entity>,
    ) -> Option<RayHit> {
        let mut nearest: Option<(f32, &Sphere)> = None;

        for sphere in &self.spheres {
            if ignore == Some(sphere.entity) {
                continue;
            }

            let offset = origin - sphere.center;
            let c = offset.length_squared() - sphere.radius * sphere.radius;

            // Луч стартует внутри чужой сферы — она и есть первый hit
            let t = if c <= 0.0 {
                0.0
            } else {
                let b = offset.dot(direction);
                let discriminant = b * b - c;
                if discriminant < 0.0 {
                    continue;
                }

                let t = -b - discriminant.sqrt();
                if t < 0.0 || t > max_distance {
                    continue;
                }
                t
            };

            if nearest.map_or(true, |(best, _)| t < best) {
                nearest = Some((t, sphere));
            }
        }

        nearest.map(|(t, sphere)| RayHit {
            entity: sphere.entity,
            point: origin + direction * t,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entities(count: usize) -> Vec<Entity> {
        let mut world = World::new();
        (0..count).map(|_| world.spawn_empty().id()).collect()
    }

    #[test]
    fn test_raycast_returns_nearest_sphere() {
        let e = entities(2);
        let world = SphereOcclusion::new()
            .with_sphere(e[0], Vec3::new(0.0, 0.0, 8.0), 0.5)
            .with_sphere(e[1], Vec3::new(0.0, 0.0, 4.0), 0.5);

        let hit = world.raycast(Vec3::ZERO, Vec3::Z, 20.0, None).unwrap();
        assert_eq!(hit.entity, e[1]);
        assert!((hit.point.z - 3.5).abs() < 1e-4);
    }

    #[test]
    fn test_raycast_skips_ignored_observer_sphere() {
        let e = entities(2);
        let world = SphereOcclusion::new()
            .with_sphere(e[0], Vec3::ZERO, 0.5) // сам наблюдатель
            .with_sphere(e[1], Vec3::new(0.0, 0.0, 5.0), 0.5);

        let hit = world.raycast(Vec3::ZERO, Vec3::Z, 20.0, Some(e[0])).unwrap();
        assert_eq!(hit.entity, e[1]);
    }

    #[test]
    fn test_raycast_starting_inside_other_sphere_hits_it_at_origin() {
        let e = entities(3);
        // Наблюдатель вплотную к target: origin внутри сферы target
        let origin = Vec3::new(0.0, 0.0, 4.6);
        let world = SphereOcclusion::new()
            .with_sphere(e[0], origin, 0.5)
            .with_sphere(e[1], Vec3::new(0.0, 0.0, 5.0), 0.5)
            .with_sphere(e[2], Vec3::new(0.0, 0.0, 8.0), 0.5);

        let hit = world.raycast(origin, Vec3::Z, 20.0, Some(e[0])).unwrap();
        assert_eq!(hit.entity, e[1]);
        assert_eq!(hit.point, origin);

        // Без ignore своя сфера тоже содержит origin — первый hit она
        let hit = world.raycast(origin, Vec3::Z, 20.0, None).unwrap();
        assert_eq!(hit.point, origin);
    }

    #[test]
    fn test_raycast_respects_max_distance_and_direction() {
        let e = entities(1);
        let world = SphereOcclusion::new().with_sphere(e[0], Vec3::new(0.0, 0.0, 5.0), 0.5);

        assert!(world.raycast(Vec3::ZERO, Vec3::Z, 4.0, None).is_none());
        assert!(world.raycast(Vec3::ZERO, Vec3::NEG_Z, 20.0, None).is_none());
        assert!(world.raycast(Vec3::ZERO, Vec3::X, 20.0, None).is_none());
    }
}
