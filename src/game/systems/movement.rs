//! Block movement system.
//!
//! One table drives everything a tip of the block does: the resulting state,
//! the distance the center travels and the resting height. The three public
//! views of it cannot drift apart.

use crate::game::entities::Block;
use crate::game::types::{BlockState, Direction, MoveProfile};

/// The tipping table. Returns the new state and the center displacement in
/// half-tile units (3 = tipping over an edge, 2 = rolling along the crouch
/// axis).
fn resolve(state: BlockState, direction: Direction) -> (BlockState, i32) {
    use BlockState::*;
    match (state, direction.is_lateral()) {
        // Upright: tips onto one edge, two cells sideways or lengthwise.
        (Standing, true) => (CrouchedWidth, 3),
        (Standing, false) => (CrouchedHeight, 3),
        // Lying sideways: stands back up, or rolls edge-over-edge.
        (CrouchedWidth, true) => (Standing, 3),
        (CrouchedWidth, false) => (CrouchedWidth, 2),
        // Lying lengthwise: mirror of the above.
        (CrouchedHeight, true) => (CrouchedHeight, 2),
        (CrouchedHeight, false) => (Standing, 3),
    }
}

/// The state the block ends up in after tipping in `direction`.
pub fn transition(state: BlockState, direction: Direction) -> BlockState {
    resolve(state, direction).0
}

/// Advisory travel distance and resting height for one tip, in world units.
pub fn move_profile(state: BlockState, direction: Direction) -> MoveProfile {
    let (next, half_steps) = resolve(state, direction);
    MoveProfile {
        distance: half_steps as f32 * 0.5,
        height: match next {
            BlockState::Standing => 1.0,
            _ => 0.5,
        },
    }
}

/// Apply one tip to the block: new state, new center, busy flag set.
/// Returns `None` (input dropped) while a move or fall is in flight.
pub fn begin_move(block: &mut Block, direction: Direction) -> Option<MoveProfile> {
    if block.is_busy() {
        return None;
    }
    let profile = move_profile(block.state, direction);
    let (next, half_steps) = resolve(block.state, direction);
    let (di, dj) = direction.delta();
    block.pos.hi += di * half_steps;
    block.pos.hj += dj * half_steps;
    block.state = next;
    block.is_moving = true;
    Some(profile)
}
