//! Policies that drive the task agents.
//!
//! A policy consumes the observation vector of one agent and produces one
//! [`ActionCommand`](crate::action::ActionCommand) per step. Trained neural
//! policies live outside this crate; here are the trait and the random
//! baseline used for sanity checks.

mod random;
mod trait_;

pub use random::RandomPolicy;
pub use trait_::Policy;
