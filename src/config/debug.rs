//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet even when compiled with `--features debug_assertions`.

pub struct DebugFlags {
    /// Emit every decoded round-state poll.
    pub print_round_polls: bool,
    /// Emit bet requests and their responses.
    pub print_bets: bool,
    /// Emit a line whenever the frame loop has to drop catch-up steps.
    pub print_frame_catch_up: bool,
    /// Emit demo feed phase changes.
    pub print_demo_rounds: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_round_polls: false,
    print_bets: true,
    print_frame_catch_up: false,
    print_demo_rounds: false,
    print_shutdown: false,
};
