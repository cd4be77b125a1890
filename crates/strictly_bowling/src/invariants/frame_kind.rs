//! Frame kind invariant: slots hold the right frame with the right rules.

use super::Invariant;
use crate::chain::FrameChain;
use crate::frame::FrameKind;

/// Invariant: slot `k` holds frame `k + 1`, frames 1-9 play normal rules
/// and frame 10 plays final-frame rules.
pub struct FrameKindInvariant;

impl Invariant<FrameChain> for FrameKindInvariant {
    fn holds(chain: &FrameChain) -> bool {
        chain
            .slots()
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|frame| (index, frame)))
            .all(|(index, frame)| {
                let final_rules = frame.state().is_final();
                frame.number().index() == index
                    && match frame.kind() {
                        FrameKind::Normal => !final_rules,
                        FrameKind::Final => final_rules,
                    }
            })
    }

    fn description() -> &'static str {
        "Frames 1-9 follow normal rules and frame 10 follows final-frame rules"
    }
}
