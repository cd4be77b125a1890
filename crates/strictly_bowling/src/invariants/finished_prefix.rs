//! Finished prefix invariant: frames fill in order behind the cursor.

use super::Invariant;
use crate::chain::FrameChain;

/// Invariant: every frame before the cursor is finished, the cursor frame
/// exists, and no frame after it has been created.
///
/// The only finished frame allowed at the cursor is frame 10, once the
/// game is over.
pub struct FinishedPrefixInvariant;

impl Invariant<FrameChain> for FinishedPrefixInvariant {
    fn holds(chain: &FrameChain) -> bool {
        let cursor = chain.cursor();
        let slots = chain.slots();

        let prefix_finished = slots[..cursor]
            .iter()
            .all(|slot| slot.as_ref().is_some_and(|frame| frame.is_finished()));

        let current_ok = match slots.get(cursor) {
            Some(Some(frame)) => !frame.is_finished() || frame.number().is_final(),
            _ => false,
        };

        let suffix_empty = slots
            .get(cursor + 1..)
            .is_none_or(|rest| rest.iter().all(Option::is_none));

        prefix_finished && current_ok && suffix_empty
    }

    fn description() -> &'static str {
        "Frames before the cursor are finished and frames after it are not created"
    }
}
