//! Action and movement commands exchanged with the policy and the engine.
//!
//! The policy collaborator produces one [`ActionCommand`] per step in a fixed
//! encoding: six continuous channels plus one discrete mode selector. The
//! engine collaborator consumes one [`MovementCommand`] per step.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::Vec3;

/// Discrete cargo mode selected once per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ModeAction {
    /// No cargo interaction.
    #[default]
    None,
    /// Attempt to pick cargo up.
    Pickup,
    /// Release held cargo.
    Release,
}

impl ModeAction {
    /// Decodes the discrete action branch (`0 = None, 1 = Pickup,
    /// 2 = Release`). Out-of-range indices decode to `None`.
    pub fn from_index(index: u32) -> Self {
        match index {
            1 => ModeAction::Pickup,
            2 => ModeAction::Release,
            _ => ModeAction::None,
        }
    }

    /// Encodes this mode as the discrete action index.
    pub fn index(&self) -> u32 {
        match self {
            ModeAction::None => 0,
            ModeAction::Pickup => 1,
            ModeAction::Release => 2,
        }
    }
}

impl fmt::Display for ModeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeAction::None => write!(f, "none"),
            ModeAction::Pickup => write!(f, "pickup"),
            ModeAction::Release => write!(f, "release"),
        }
    }
}

/// One step's worth of control input, immutable after creation.
///
/// Stick channels (`move_x`, `move_z`) are clamped to `[-1, 1]`; thrust and
/// rotation strengths to `[0, 1]`. Clamping happens once in the constructor
/// so downstream code can rely on the ranges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActionCommand {
    move_x: f64,
    move_z: f64,
    thrust_up: f64,
    thrust_down: f64,
    rotate_left: f64,
    rotate_right: f64,
    mode: ModeAction,
}

impl ActionCommand {
    /// Creates a command, clamping every channel into its valid range.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        move_x: f64,
        move_z: f64,
        thrust_up: f64,
        thrust_down: f64,
        rotate_left: f64,
        rotate_right: f64,
        mode: ModeAction,
    ) -> Self {
        Self {
            move_x: move_x.clamp(-1.0, 1.0),
            move_z: move_z.clamp(-1.0, 1.0),
            thrust_up: thrust_up.clamp(0.0, 1.0),
            thrust_down: thrust_down.clamp(0.0, 1.0),
            rotate_left: rotate_left.clamp(0.0, 1.0),
            rotate_right: rotate_right.clamp(0.0, 1.0),
            mode,
        }
    }

    /// Decodes a command from raw policy buffers: six continuous values in
    /// the order `[move_x, move_z, thrust_up, thrust_down, rotate_left,
    /// rotate_right]` and one discrete mode index.
    pub fn from_buffers(continuous: &[f64; 6], mode_index: u32) -> Self {
        Self::new(
            continuous[0],
            continuous[1],
            continuous[2],
            continuous[3],
            continuous[4],
            continuous[5],
            ModeAction::from_index(mode_index),
        )
    }

    /// A command with all channels at rest and no cargo mode.
    pub fn idle() -> Self {
        Self::default()
    }

    /// An idle command carrying only a cargo mode.
    pub fn with_mode(mode: ModeAction) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn move_x(&self) -> f64 {
        self.move_x
    }

    pub fn move_z(&self) -> f64 {
        self.move_z
    }

    pub fn thrust_up(&self) -> f64 {
        self.thrust_up
    }

    pub fn thrust_down(&self) -> f64 {
        self.thrust_down
    }

    pub fn rotate_left(&self) -> f64 {
        self.rotate_left
    }

    pub fn rotate_right(&self) -> f64 {
        self.rotate_right
    }

    pub fn mode(&self) -> ModeAction {
        self.mode
    }
}

/// Per-step movement output consumed by the engine collaborator.
///
/// The force vector is expressed in the drone's body frame; the engine
/// transforms it into world space before applying it to the rigid body. The
/// orientation is the absolute target Euler rotation for this step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MovementCommand {
    /// Body-frame linear force.
    pub force: Vec3,
    /// Target Euler orientation in degrees (forward tilt, yaw, sideways tilt).
    pub orientation: Vec3,
}

/// Raw human-input snapshot for manual piloting.
///
/// Mirrors the keyboard scheme of the training scene: WASD for horizontal
/// movement, Q/E for vertical thrust, arrow keys for yaw, G/R for cargo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeuristicInput {
    pub forward: bool,
    pub back: bool,
    pub right: bool,
    pub left: bool,
    pub ascend: bool,
    pub descend: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub pickup: bool,
    pub release: bool,
}

impl HeuristicInput {
    /// Maps key states to an [`ActionCommand`].
    ///
    /// Horizontal axes are damped to half deflection so keyboard taps do not
    /// slam the drone to full tilt. Release takes precedence over pickup when
    /// both keys are held.
    pub fn to_action(&self) -> ActionCommand {
        let mode = if self.release {
            ModeAction::Release
        } else if self.pickup {
            ModeAction::Pickup
        } else {
            ModeAction::None
        };
        ActionCommand::new(
            0.5 * axis(self.right, self.left),
            0.5 * axis(self.forward, self.back),
            if self.ascend { 1.0 } else { 0.0 },
            if self.descend { 1.0 } else { 0.0 },
            if self.rotate_left { 1.0 } else { 0.0 },
            if self.rotate_right { 1.0 } else { 0.0 },
            mode,
        )
    }
}

fn axis(positive: bool, negative: bool) -> f64 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_round_trips_through_index() {
        for mode in [ModeAction::None, ModeAction::Pickup, ModeAction::Release] {
            assert_eq!(ModeAction::from_index(mode.index()), mode);
        }
    }

    #[test]
    fn out_of_range_mode_index_is_none() {
        assert_eq!(ModeAction::from_index(7), ModeAction::None);
    }

    #[test]
    fn constructor_clamps_channels() {
        let a = ActionCommand::new(3.0, -2.0, 1.5, -0.5, 2.0, -1.0, ModeAction::None);
        assert_eq!(a.move_x(), 1.0);
        assert_eq!(a.move_z(), -1.0);
        assert_eq!(a.thrust_up(), 1.0);
        assert_eq!(a.thrust_down(), 0.0);
        assert_eq!(a.rotate_left(), 1.0);
        assert_eq!(a.rotate_right(), 0.0);
    }

    #[test]
    fn from_buffers_decodes_mode() {
        let a = ActionCommand::from_buffers(&[0.2, -0.4, 0.0, 0.0, 0.0, 1.0], 2);
        assert_eq!(a.mode(), ModeAction::Release);
        assert!((a.move_x() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn heuristic_axes_are_damped() {
        let input = HeuristicInput {
            forward: true,
            right: true,
            ..HeuristicInput::default()
        };
        let a = input.to_action();
        assert!((a.move_x() - 0.5).abs() < 1e-12);
        assert!((a.move_z() - 0.5).abs() < 1e-12);
        assert_eq!(a.mode(), ModeAction::None);
    }

    #[test]
    fn heuristic_release_wins_over_pickup() {
        let input = HeuristicInput {
            pickup: true,
            release: true,
            ..HeuristicInput::default()
        };
        assert_eq!(input.to_action().mode(), ModeAction::Release);
    }

    #[test]
    fn opposing_keys_cancel() {
        let input = HeuristicInput {
            left: true,
            right: true,
            ..HeuristicInput::default()
        };
        assert_eq!(input.to_action().move_x(), 0.0);
    }
}
