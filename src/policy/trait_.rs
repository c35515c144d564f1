//! Policy trait for the task environments.

use crate::action::ActionCommand;

/// A policy that selects an action from an observation.
pub trait Policy: Send + Sync {
    /// Selects the action for the current step.
    ///
    /// # Arguments
    ///
    /// * `observation` - The agent's observation vector for this step.
    fn select_action(&mut self, observation: &[f64]) -> ActionCommand;

    /// Returns a human-readable name for this policy.
    fn name(&self) -> &str;
}
