//! Configuration for the drone task environments.
//!
//! Controls flight translation parameters, reward shaping magnitudes, and the
//! immutable scene layout the agents are constructed with. Defaults mirror
//! the reference training scene. All configuration is validated once at agent
//! construction; nothing here is re-checked at step time.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{FieldBounds, Vec3};
use crate::Id;

/// Parameters of the action-to-movement translation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlightConfig {
    /// Horizontal force per unit of stick deflection.
    pub move_speed: f64,
    /// Yaw rate in degrees per second at full rotation input.
    pub rot_speed: f64,
    /// Vertical force per unit of thrust input.
    pub vertical_force: f64,
    /// Low-pass rate at which tilt approaches its target, per second.
    pub tilt_rate: f64,
    /// Maximum tilt angle in degrees at full stick deflection.
    pub tilt_angle: f64,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            move_speed: 2.0,
            rot_speed: 100.0,
            vertical_force: 10.0,
            tilt_rate: 2.0,
            tilt_angle: 45.0,
        }
    }
}

impl FlightConfig {
    /// Checks that all translation parameters are strictly positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.move_speed <= 0.0 {
            return Err(ConfigError::NonPositive("move_speed"));
        }
        if self.rot_speed <= 0.0 {
            return Err(ConfigError::NonPositive("rot_speed"));
        }
        if self.vertical_force <= 0.0 {
            return Err(ConfigError::NonPositive("vertical_force"));
        }
        if self.tilt_rate <= 0.0 {
            return Err(ConfigError::NonPositive("tilt_rate"));
        }
        if self.tilt_angle <= 0.0 {
            return Err(ConfigError::NonPositive("tilt_angle"));
        }
        Ok(())
    }
}

/// Reward magnitudes for the delivery task. All values are stored as
/// positive magnitudes; penalties are negated where they are applied.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RewardTable {
    /// Terminal penalty for colliding with an obstacle.
    pub obstacle_penalty: f64,
    /// Shaping bonus for reaching the warehouse range while empty-handed.
    pub warehouse_approach: f64,
    /// Shaping bonus for reaching the shelter range while carrying cargo.
    pub shelter_approach: f64,
    /// Bonus per newly collected checkpoint.
    pub checkpoint_bonus: f64,
    /// Terminal bonus for collecting every checkpoint.
    pub all_checkpoints_bonus: f64,
    /// Bonus for picking cargo up at the warehouse.
    pub pickup_bonus: f64,
    /// Terminal bonus for releasing cargo over the shelter.
    pub delivery_bonus: f64,
    /// Terminal penalty for releasing held cargo anywhere else.
    pub wrong_release_penalty: f64,
    /// Terminal penalty for leaving the altitude envelope.
    pub out_of_bounds_penalty: f64,
}

impl Default for RewardTable {
    fn default() -> Self {
        Self {
            obstacle_penalty: 5.0,
            warehouse_approach: 5.0,
            shelter_approach: 8.0,
            checkpoint_bonus: 2.0,
            all_checkpoints_bonus: 10.0,
            pickup_bonus: 8.0,
            delivery_bonus: 10.0,
            wrong_release_penalty: 10.0,
            out_of_bounds_penalty: 10.0,
        }
    }
}

impl RewardTable {
    /// Checks that every magnitude is strictly positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields: [(&'static str, f64); 9] = [
            ("obstacle_penalty", self.obstacle_penalty),
            ("warehouse_approach", self.warehouse_approach),
            ("shelter_approach", self.shelter_approach),
            ("checkpoint_bonus", self.checkpoint_bonus),
            ("all_checkpoints_bonus", self.all_checkpoints_bonus),
            ("pickup_bonus", self.pickup_bonus),
            ("delivery_bonus", self.delivery_bonus),
            ("wrong_release_penalty", self.wrong_release_penalty),
            ("out_of_bounds_penalty", self.out_of_bounds_penalty),
        ];
        for (name, value) in fields {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive(name));
            }
        }
        Ok(())
    }
}

/// Immutable scene geometry, populated once at session start.
///
/// Replaces runtime scene-graph queries: the checkpoint registry in
/// particular is the full set of collectible checkpoints, known up front, so
/// episode completion is `collected == registry` rather than a scene scan.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SceneLayout {
    /// Take-off/landing platform position.
    pub platform: Vec3,
    /// Warehouse position (cargo home).
    pub warehouse: Vec3,
    /// Shelter position (delivery target).
    pub shelter: Vec3,
    /// Extent of the playable field.
    pub field: FieldBounds,
    /// Ids of every collectible checkpoint in the scene.
    pub checkpoints: Vec<Id>,
}

impl SceneLayout {
    /// Checks the registry for duplicate checkpoint ids.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, id) in self.checkpoints.iter().enumerate() {
            if self.checkpoints[..i].contains(id) {
                return Err(ConfigError::DuplicateCheckpoint(id.clone()));
            }
        }
        Ok(())
    }

    /// Resting position of the cargo on top of the warehouse.
    pub fn cargo_home(&self) -> Vec3 {
        Vec3::new(self.warehouse.x, self.warehouse.y + 0.5, self.warehouse.z)
    }
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self {
            platform: Vec3::new(0.0, 0.0, 0.0),
            warehouse: Vec3::new(20.0, 0.0, 0.0),
            shelter: Vec3::new(-20.0, 0.0, 30.0),
            field: FieldBounds::from_center_size(
                Vec3::new(0.0, 25.0, 0.0),
                Vec3::new(100.0, 50.0, 100.0),
            ),
            checkpoints: Vec::new(),
        }
    }
}

/// Configuration of the supply-delivery task.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeliveryConfig {
    /// Flight translation parameters.
    pub flight: FlightConfig,
    /// Reward magnitudes.
    pub rewards: RewardTable,
    /// Duration of one simulation step in seconds.
    pub delta_t: f64,
    /// Altitude ceiling; flying above it (or below zero) ends the episode.
    pub max_altitude: f64,
    /// Altitude at which the drone is respawned above the platform.
    pub spawn_height: f64,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            flight: FlightConfig::default(),
            rewards: RewardTable::default(),
            delta_t: 0.02,
            max_altitude: 50.0,
            spawn_height: 10.0,
        }
    }
}

impl DeliveryConfig {
    /// Validates the full configuration.
    ///
    /// A zero or negative altitude ceiling is rejected up front rather than
    /// silently producing an episode that can never go out of bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_altitude <= 0.0 {
            return Err(ConfigError::MissingAltitudeLimit);
        }
        if self.delta_t <= 0.0 {
            return Err(ConfigError::NonPositive("delta_t"));
        }
        if self.spawn_height <= 0.0 {
            return Err(ConfigError::NonPositive("spawn_height"));
        }
        self.flight.validate()?;
        self.rewards.validate()
    }
}

/// Configuration of the reconnaissance task.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReconConfig {
    /// Flight translation parameters.
    pub flight: FlightConfig,
    /// Duration of one simulation step in seconds.
    pub delta_t: f64,
    /// Reward granted per find, multiplied by the running find count.
    pub find_reward: f64,
    /// Position the scout is respawned at.
    pub start_position: Vec3,
}

impl Default for ReconConfig {
    fn default() -> Self {
        Self {
            flight: FlightConfig::default(),
            delta_t: 0.02,
            find_reward: 0.1,
            start_position: Vec3::new(0.0, 10.0, 0.0),
        }
    }
}

impl ReconConfig {
    /// Validates the full configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.delta_t <= 0.0 {
            return Err(ConfigError::NonPositive("delta_t"));
        }
        if self.find_reward <= 0.0 {
            return Err(ConfigError::NonPositive("find_reward"));
        }
        self.flight.validate()
    }
}
