//! Random policy for testing and baselines.

use rand::Rng;

use super::trait_::Policy;
use crate::action::{ActionCommand, ModeAction};

/// Uniformly random control input.
///
/// Stick channels are drawn from `[-1, 1]`, thrust and rotation strengths
/// from `[0, 1]`, and the cargo mode uniformly from its three values. Used
/// for sanity checks and as a lower-bound baseline.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPolicy;

impl RandomPolicy {
    /// Creates a new random policy.
    pub fn new() -> Self {
        Self
    }
}

impl Policy for RandomPolicy {
    fn select_action(&mut self, _observation: &[f64]) -> ActionCommand {
        let mut rng = rand::thread_rng();
        ActionCommand::new(
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(0.0..=1.0),
            rng.gen_range(0.0..=1.0),
            rng.gen_range(0.0..=1.0),
            rng.gen_range(0.0..=1.0),
            ModeAction::from_index(rng.gen_range(0..3u32)),
        )
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_actions_are_in_range() {
        let mut policy = RandomPolicy::new();
        for _ in 0..100 {
            let a = policy.select_action(&[0.0; 6]);
            assert!((-1.0..=1.0).contains(&a.move_x()));
            assert!((-1.0..=1.0).contains(&a.move_z()));
            assert!((0.0..=1.0).contains(&a.thrust_up()));
            assert!((0.0..=1.0).contains(&a.rotate_left()));
        }
    }

    #[test]
    fn random_policy_has_a_name() {
        assert_eq!(RandomPolicy::new().name(), "random");
    }
}
