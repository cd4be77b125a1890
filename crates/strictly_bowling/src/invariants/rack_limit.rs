//! Rack limit invariant: every frame's throws fit the racks they were bowled at.

use super::Invariant;
use crate::chain::FrameChain;
use crate::final_frame::FinalThrows;
use crate::frame::{Frame, FrameKind};
use crate::state::check_rack;

/// Invariant: a normal frame takes at most two throws from a single rack;
/// the tenth frame's throws replay cleanly through the tenth-frame rules,
/// so every pair sharing a rack knocks down at most 10 pins.
pub struct RackLimitInvariant;

fn racks_fit(frame: &Frame) -> bool {
    let throws = frame.throws();
    match frame.kind() {
        FrameKind::Normal => match throws.as_slice() {
            [] | [_] => true,
            [first, second] => check_rack(*first, *second).is_ok(),
            _ => false,
        },
        FrameKind::Final => FinalThrows::from_throws(frame.number(), &throws).is_ok(),
    }
}

impl Invariant<FrameChain> for RackLimitInvariant {
    fn holds(chain: &FrameChain) -> bool {
        chain.frames().all(racks_fit)
    }

    fn description() -> &'static str {
        "No frame knocks down more pins than its racks hold"
    }
}
