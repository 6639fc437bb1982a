/// Game configuration constants.
///
/// Pacing parameters for the surrounding application; the rules core itself
/// takes no timing input.
/// Pause (in milliseconds) before the level restarts after the block falls.
pub const FALL_RESTART_DELAY_MS: u64 = 1200;
