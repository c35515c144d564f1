//! Core types shared by the drone task environments.
//!
//! Defines the 3D vector used for positions, velocities, and Euler
//! orientations, the engine-supplied body state, and the zone taxonomy
//! reported by the host collision system.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Id;

/// A 3D vector in the engine's coordinate convention: `x`/`z` span the
/// horizontal plane, `y` is altitude. Also used for Euler angles in degrees
/// (`x` = forward tilt, `y` = yaw, `z` = sideways tilt).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// Creates a new vector.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The zero vector.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Vec3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

/// Read-only physics state supplied by the engine collaborator each step.
///
/// The agents never integrate this themselves; the host simulation owns the
/// rigid body and hands the current snapshot to [`step`] and
/// [`collect_observations`].
///
/// [`step`]: crate::agent::EpisodicAgent::step
/// [`collect_observations`]: crate::agent::EpisodicAgent::collect_observations
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BodyState {
    /// Position in field-local coordinates.
    pub position: Vec3,
    /// Linear velocity.
    pub velocity: Vec3,
    /// Orientation as Euler angles in degrees.
    pub orientation: Vec3,
}

impl BodyState {
    /// A body at rest at the given position.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }
}

/// A region of space whose entry/exit the collision system reports as a
/// discrete event.
///
/// Checkpoint zones carry the id of the checkpoint object so that one-time
/// collection can be enforced without deactivating scene objects.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Zone {
    /// Fatal collision volume; entering one ends the episode.
    Obstacle,
    /// Pickup range around the warehouse.
    Warehouse,
    /// Drop-off range around the shelter.
    Shelter,
    /// One-time-collectible waypoint, identified by the colliding object.
    Checkpoint(Id),
}

impl Zone {
    /// Maps an engine collider tag to a zone.
    ///
    /// `object` identifies the colliding object and is only consulted for
    /// checkpoint tags. Unknown tags yield `None` and are ignored by the
    /// agents.
    pub fn from_tag(tag: &str, object: &str) -> Option<Zone> {
        match tag {
            "obstacle" => Some(Zone::Obstacle),
            "warehouserange" => Some(Zone::Warehouse),
            "shelterrange" => Some(Zone::Shelter),
            "checkpoint" => Some(Zone::Checkpoint(object.to_string())),
            _ => None,
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Obstacle => write!(f, "obstacle"),
            Zone::Warehouse => write!(f, "warehouse"),
            Zone::Shelter => write!(f, "shelter"),
            Zone::Checkpoint(id) => write!(f, "checkpoint:{}", id),
        }
    }
}

/// Axis-aligned extent of the playable field, derived once from the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldBounds {
    pub x: [f64; 2],
    pub y: [f64; 2],
    pub z: [f64; 2],
}

impl FieldBounds {
    /// Builds bounds from the field's center and size, the way the scene
    /// transform exposes them.
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        Self {
            x: [center.x - size.x / 2.0, center.x + size.x / 2.0],
            y: [center.y - size.y / 2.0, center.y + size.y / 2.0],
            z: [center.z - size.z / 2.0, center.z + size.z / 2.0],
        }
    }

    /// Whether a point lies inside the horizontal extent of the field.
    pub fn contains_horizontal(&self, p: &Vec3) -> bool {
        p.x >= self.x[0] && p.x <= self.x[1] && p.z >= self.z[0] && p.z <= self.z[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec3_distance() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(3.0, 4.0, 0.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn zone_from_known_tags() {
        assert_eq!(Zone::from_tag("obstacle", "rock_1"), Some(Zone::Obstacle));
        assert_eq!(Zone::from_tag("warehouserange", "wh"), Some(Zone::Warehouse));
        assert_eq!(Zone::from_tag("shelterrange", "sh"), Some(Zone::Shelter));
        assert_eq!(
            Zone::from_tag("checkpoint", "cp_3"),
            Some(Zone::Checkpoint("cp_3".into()))
        );
    }

    #[test]
    fn zone_from_unknown_tag() {
        assert_eq!(Zone::from_tag("terrain", "ground"), None);
    }

    #[test]
    fn field_bounds_from_center_size() {
        let b = FieldBounds::from_center_size(Vec3::new(0.0, 25.0, 0.0), Vec3::new(100.0, 50.0, 80.0));
        assert_eq!(b.x, [-50.0, 50.0]);
        assert_eq!(b.y, [0.0, 50.0]);
        assert_eq!(b.z, [-40.0, 40.0]);
        assert!(b.contains_horizontal(&Vec3::new(49.0, 10.0, -39.0)));
        assert!(!b.contains_horizontal(&Vec3::new(51.0, 10.0, 0.0)));
    }
}
