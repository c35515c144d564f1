//! The episodic agent contract shared by both task environments.
//!
//! The host simulation loop drives an agent through a fixed cycle each tick:
//! deliver any zone/sensor events, collect observations, obtain an action
//! from the policy collaborator, then call [`EpisodicAgent::step`]. Event
//! delivery is synchronous and strictly precedes the corresponding step.

use crate::action::{ActionCommand, HeuristicInput, MovementCommand};
use crate::reward::RewardEvent;
use crate::types::BodyState;

/// Output of one environment step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepResult {
    /// Movement to apply to the rigid body, absent once the episode is over.
    pub movement: Option<MovementCommand>,
    /// Net reward for this step.
    pub reward: RewardEvent,
}

impl StepResult {
    /// The no-op result returned when stepping a finished episode.
    pub fn noop() -> Self {
        Self::default()
    }
}

/// A plain state-holding task agent with an explicit lifecycle, no framework
/// base class.
///
/// # Contract
///
/// - [`begin_episode`] resets all episodic state and is idempotent before the
///   first step.
/// - Once a step or pre-step event ends the episode, further calls to
///   [`step`] are no-ops (zero reward, no movement) until the next
///   [`begin_episode`].
///
/// [`begin_episode`]: EpisodicAgent::begin_episode
/// [`step`]: EpisodicAgent::step
pub trait EpisodicAgent {
    /// Resets episodic state to its initial configuration.
    fn begin_episode(&mut self);

    /// Builds the observation vector for the policy collaborator.
    fn collect_observations(&self, body: &BodyState) -> Vec<f64>;

    /// Advances one tick: translates the action into movement and produces
    /// the net reward event.
    fn step(&mut self, body: &BodyState, action: &ActionCommand) -> StepResult;

    /// Maps manual input to an action, for human piloting.
    fn heuristic_action(&self, input: &HeuristicInput) -> ActionCommand {
        input.to_action()
    }

    /// Whether the current episode has reached a terminal state.
    fn episode_ended(&self) -> bool;
}
