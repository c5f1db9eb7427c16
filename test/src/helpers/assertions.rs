/// Assert that a player's command is applied over the given window, in ms
#[macro_export]
macro_rules! assert_command_window {
    ($player:expr, $start:expr, $end:expr, $chain_end:expr) => {
        let state = &$player.command_state;
        assert_eq!(
            (state.start_time_ms, state.end_time_ms, state.chain_end_time_ms),
            ($start, $end, $chain_end),
            "unexpected command window"
        );
    };
}

/// Assert that a player is bound to the named command, or to nothing
#[macro_export]
macro_rules! assert_target {
    ($library:expr, $player:expr, None) => {
        assert_eq!($player.executing.command_target, None, "expected no command");
    };
    ($library:expr, $player:expr, $name:expr) => {
        assert_eq!(
            $player.executing.command_target,
            $library.find_by_name($name),
            "expected command '{}'",
            $name
        );
    };
}
