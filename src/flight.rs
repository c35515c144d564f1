//! Translation of continuous control input into engine movement commands.
//!
//! The tilt channels do not jump to their targets: each step they are pulled
//! toward `input × tilt_angle` by a first-order low-pass filter whose rate is
//! bounded by the configured tilt velocity. Yaw accumulates at the configured
//! rotation speed. The resulting orientation is absolute; the force vector is
//! body-frame and applied by the engine.

use crate::action::{ActionCommand, MovementCommand};
use crate::config::FlightConfig;
use crate::types::Vec3;

/// Smoothed tilt/yaw state carried across steps within an episode.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlightControl {
    forward_tilt: f64,
    sideways_tilt: f64,
    yaw: f64,
}

impl FlightControl {
    /// Creates a level, unrotated control state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets tilt and yaw to level at an episode boundary.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Current yaw angle in degrees.
    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    /// Translates one action into a movement command, advancing the smoothed
    /// tilt state by `delta_t` seconds.
    pub fn apply(
        &mut self,
        action: &ActionCommand,
        config: &FlightConfig,
        delta_t: f64,
    ) -> MovementCommand {
        let mut force = Vec3::new(
            action.move_x() * config.move_speed,
            0.0,
            action.move_z() * config.move_speed,
        );
        if action.thrust_up() > 0.0 {
            force.y += config.vertical_force * action.thrust_up();
        }
        if action.thrust_down() > 0.0 {
            force.y -= config.vertical_force * action.thrust_down();
        }

        // Leaning into the direction of travel; sideways tilt is opposite
        // the stick so the drone banks toward +x on a +x input.
        let t = config.tilt_rate * delta_t;
        self.sideways_tilt = lerp(self.sideways_tilt, -action.move_x() * config.tilt_angle, t);
        self.forward_tilt = lerp(self.forward_tilt, action.move_z() * config.tilt_angle, t);
        self.yaw += (action.rotate_right() - action.rotate_left()) * config.rot_speed * delta_t;

        MovementCommand {
            force,
            orientation: Vec3::new(self.forward_tilt, self.yaw, self.sideways_tilt),
        }
    }
}

/// Linear interpolation with the factor clamped to `[0, 1]`.
fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t.clamp(0.0, 1.0)
}
