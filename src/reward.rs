//! Reward events and per-step accumulation.
//!
//! Sub-steps and pre-step zone events each contribute individual reward
//! entries; [`StepRewards`] folds them into the single net [`RewardEvent`]
//! the training collaborator consumes once per step.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a reward delta was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RewardReason {
    /// Nothing happened this step.
    #[default]
    None,
    /// Reached the warehouse range while empty-handed.
    WarehouseApproach,
    /// Reached the shelter range while carrying cargo.
    ShelterApproach,
    /// Collected a checkpoint for the first time.
    Checkpoint,
    /// Collected the last outstanding checkpoint.
    AllCheckpoints,
    /// Picked cargo up at the warehouse.
    Pickup,
    /// Released cargo over the shelter.
    Delivery,
    /// Released cargo while not holding any.
    DegenerateRelease,
    /// Released held cargo away from the shelter.
    WrongRelease,
    /// Collided with an obstacle.
    Obstacle,
    /// Left the altitude envelope.
    OutOfBounds,
    /// Detected a new reconnaissance target.
    TargetFound,
    /// External crash signal.
    Crash,
}

impl fmt::Display for RewardReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RewardReason::None => "none",
            RewardReason::WarehouseApproach => "warehouse_approach",
            RewardReason::ShelterApproach => "shelter_approach",
            RewardReason::Checkpoint => "checkpoint",
            RewardReason::AllCheckpoints => "all_checkpoints",
            RewardReason::Pickup => "pickup",
            RewardReason::Delivery => "delivery",
            RewardReason::DegenerateRelease => "degenerate_release",
            RewardReason::WrongRelease => "wrong_release",
            RewardReason::Obstacle => "obstacle",
            RewardReason::OutOfBounds => "out_of_bounds",
            RewardReason::TargetFound => "target_found",
            RewardReason::Crash => "crash",
        };
        write!(f, "{}", s)
    }
}

/// The scalar output of one step: a reward delta and a termination flag.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RewardEvent {
    /// Reward delta for this step.
    pub delta: f64,
    /// Whether this event ends the episode.
    pub terminal: bool,
    /// Cause of the delta. When several causes contributed, the terminal one
    /// wins; otherwise the most recent.
    pub reason: RewardReason,
}

impl RewardEvent {
    /// A zero, non-terminal event.
    pub fn none() -> Self {
        Self::default()
    }
}

/// Accumulates the reward entries produced within a single step.
#[derive(Debug, Clone, Default)]
pub struct StepRewards {
    entries: Vec<RewardEvent>,
}

impl StepRewards {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one contribution.
    pub fn push(&mut self, delta: f64, reason: RewardReason, terminal: bool) {
        self.entries.push(RewardEvent {
            delta,
            terminal,
            reason,
        });
    }

    /// True when no contribution has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Folds all contributions into the net per-step event.
    pub fn into_event(self) -> RewardEvent {
        let mut net = RewardEvent::none();
        for entry in &self.entries {
            net.delta += entry.delta;
            if entry.terminal && !net.terminal {
                net.terminal = true;
                net.reason = entry.reason;
            } else if !net.terminal {
                net.reason = entry.reason;
            }
        }
        net
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_accumulator_is_zero() {
        let rewards = StepRewards::new();
        assert!(rewards.is_empty());
        assert_eq!(rewards.into_event(), RewardEvent::none());
    }

    #[test]
    fn deltas_sum() {
        let mut rewards = StepRewards::new();
        rewards.push(5.0, RewardReason::WarehouseApproach, false);
        rewards.push(8.0, RewardReason::Pickup, false);
        let net = rewards.into_event();
        assert!((net.delta - 13.0).abs() < 1e-12);
        assert!(!net.terminal);
        assert_eq!(net.reason, RewardReason::Pickup);
    }

    #[test]
    fn terminal_reason_wins() {
        let mut rewards = StepRewards::new();
        rewards.push(2.0, RewardReason::Checkpoint, false);
        rewards.push(10.0, RewardReason::AllCheckpoints, true);
        let net = rewards.into_event();
        assert!(net.terminal);
        assert_eq!(net.reason, RewardReason::AllCheckpoints);
        assert!((net.delta - 12.0).abs() < 1e-12);
    }

    #[test]
    fn later_non_terminal_does_not_displace_terminal() {
        let mut rewards = StepRewards::new();
        rewards.push(-5.0, RewardReason::Obstacle, true);
        rewards.push(2.0, RewardReason::Checkpoint, false);
        let net = rewards.into_event();
        assert!(net.terminal);
        assert_eq!(net.reason, RewardReason::Obstacle);
    }
}
