//! External collaborators — capability traits
//!
//! Core не знает про физику и navmesh. Host вставляет реализации как Resources:
//! - `OcclusionService` — raycast для line-of-sight (PerceptionSensor)
//! - `NavigationService` — sampling точек + steering агентов (NavigationController)
//!
//! Headless реализации (open_ground, sphere_world) используются demo binary и тестами.

use bevy::prelude::*;

pub mod open_ground;
pub mod sphere_world;

pub use open_ground::OpenGroundNavigation;
pub use sphere_world::SphereOcclusion;

/// Результат raycast: первая поверхность на луче
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub entity: Entity,
    pub point: Vec3,
}

/// Spatial/occlusion query
pub trait OcclusionQuery: Send + Sync {
    /// Первый hit на луче `origin + direction * t`, `t ∈ [0, max_distance]`.
    /// `direction` нормализован вызывающим.
    ///
    /// `ignore` — collider самого наблюдателя (луч стартует внутри него).
    /// Любой другой collider, содержащий `origin`, — hit при `t = 0`.
    fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        ignore: Option<Entity>,
    ) -> Option<RayHit>;
}

/// Steering агента на текущий тик (аналог NavMeshAgent полей)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AgentSteering {
    pub remaining_distance: f32,
    pub stopping_distance: f32,
    pub desired_velocity: Vec3,
}

/// Pathfinding/navigation service
pub trait PathfindingService: Send + Sync {
    /// Ближайшая валидная точка navmesh в радиусе `radius` от `center`
    fn sample_point(&self, center: Vec3, radius: f32) -> Option<Vec3>;

    fn set_destination(&mut self, agent: Entity, destination: Vec3);

    /// `position` — текущая позиция агента (сервис без собственного transform ownership)
    fn steering(&self, agent: Entity, position: Vec3) -> AgentSteering;
}

#[derive(Resource)]
pub struct OcclusionService(pub Box<dyn OcclusionQuery>);

impl OcclusionService {
    pub fn new(query: impl OcclusionQuery + 'static) -> Self {
        Self(Box::new(query))
    }
}

#[derive(Resource)]
pub struct NavigationService(pub Box<dyn PathfindingService>);

impl NavigationService {
    pub fn new(service: impl PathfindingService + 'static) -> Self {
        Self(Box::new(service))
    }
}
