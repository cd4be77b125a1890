//! First-class invariants for the frame chain.
//!
//! Invariants are logical properties that must hold after every recorded
//! throw. They are testable independently and serve as documentation of
//! the chain's guarantees.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

pub mod finished_prefix;
pub mod frame_kind;
pub mod rack_limit;

pub use finished_prefix::FinishedPrefixInvariant;
pub use frame_kind::FrameKindInvariant;
pub use rack_limit::RackLimitInvariant;

/// All frame chain invariants as a composable set.
pub type BowlingInvariants = (
    FinishedPrefixInvariant,
    FrameKindInvariant,
    RackLimitInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::FrameChain;

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let chain = FrameChain::new();
        assert!(BowlingInvariants::check_all(&chain).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_for_perfect_game() {
        let chain = FrameChain::replay(&[10; 12]).unwrap();
        assert!(BowlingInvariants::check_all(&chain).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut chain = FrameChain::replay(&[3, 4, 10]).unwrap();
        chain.cursor = 0;

        let violations = BowlingInvariants::check_all(&chain).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation::new(FinishedPrefixInvariant::description())]
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        let chain = FrameChain::replay(&[5, 5, 5]).unwrap();

        type TwoInvariants = (FrameKindInvariant, RackLimitInvariant);
        assert!(TwoInvariants::check_all(&chain).is_ok());
    }
}
