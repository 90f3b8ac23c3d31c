//! Perception events
//!
//! ProximityEvent — вход: trigger volume host'а (или headless ProximityTracker)
//! PerceptionEvent — выход: фронты видимости для Behavior Bridge

use bevy::prelude::*;

use super::sensor::ProximityPhase;

/// Proximity trigger сенсора (аналог OnTriggerEnter/Stay/Exit)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ProximityEvent {
    /// Entity с PerceptionSensor
    pub sensor: Entity,
    /// Кто вошёл/находится/вышел из trigger volume
    pub other: Entity,
    pub phase: ProximityPhase,
}

/// Фронт видимости target
///
/// Порядок внутри тика сохраняется (EventWriter → EventReader).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerceptionEvent {
    /// Target стал виден
    Acquired { observer: Entity, target: Entity },
    /// Target потерян (или при первом входе оказался вне поля зрения)
    Lost { observer: Entity, target: Entity },
}

impl PerceptionEvent {
    pub fn observer(&self) -> Entity {
        match self {
            Self::Acquired { observer, .. } | Self::Lost { observer, .. } => *observer,
        }
    }

    pub fn target(&self) -> Entity {
        match self {
            Self::Acquired { target, .. } | Self::Lost { target, .. } => *target,
        }
    }
}
