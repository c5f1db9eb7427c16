//! Inputs to applied commands, on a single peer

use cadence_shared::{
    get_next_command, process_player, ApplyOutcome, CommandPhase, RhythmConfig,
    RhythmEngineSettings, RhythmEvent, RhythmPlayer,
};
use cadence_test::{
    assert_command_window, assert_target, init_logging, test_library, TestClient, ADVANCE,
    CHAKA, DON, MARCH, PATA, PON,
};

fn player() -> RhythmPlayer {
    RhythmPlayer::new(RhythmEngineSettings::new(500))
}

#[test]
fn two_action_command_end_to_end() {
    init_logging();

    let library = test_library();
    let config = RhythmConfig::default();
    let mut player = player();
    let duration = library
        .get(library.find_by_name(ADVANCE).unwrap())
        .unwrap()
        .duration();

    player.press(DON, 0);
    player.press(CHAKA, 1000);
    player.set_elapsed(1000);

    let outcome = process_player(&mut player, &library, &config, 1);
    assert_eq!(outcome.selected, library.find_by_name(ADVANCE));
    assert_eq!(outcome.applied, ApplyOutcome::Waiting);
    assert_eq!(player.executing.activation_beat_start, 3);
    assert_eq!(player.executing.activation_beat_end, 3 + duration);
    assert!(player.progression.is_empty());

    // nothing happens until the simulation reaches beat 3
    player.set_elapsed(1250);
    assert_eq!(process_player(&mut player, &library, &config, 2).applied, ApplyOutcome::Waiting);
    assert!(player.command_state.is_empty());

    player.set_elapsed(1500);
    assert_eq!(process_player(&mut player, &library, &config, 3).applied, ApplyOutcome::Applied);
    assert_command_window!(
        player,
        1500,
        (3 + duration as i64) * 500,
        (3 + duration as i64 + 4) * 500
    );
    assert!(player.command_state.is_active(2000));
    assert!(player.command_state.can_chain(5000));
}

#[test]
fn power_reflects_timing_quality() {
    let library = test_library();
    let config = RhythmConfig::default();
    let mut player = player();

    // 0.1 beat late, then 0.3 beat late
    player.press(DON, 50);
    player.press(CHAKA, 1150);

    get_next_command(&mut player, &library, &config, 1);
    assert_target!(library, player, ADVANCE);
    assert!((player.executing.power() - 0.665).abs() < 1e-6);
}

#[test]
fn four_beat_command_through_client() {
    let library = test_library();
    let mut client = TestClient::new(cadence_shared::PlayerKey::new(0));
    let player_key = client.player_key();

    client.press_at(PATA, 0, 0.0);
    client.press_at(PATA, 1, -0.1);
    client.press_at(PATA, 2, 0.05);
    let events = client.tick(1100);
    assert!(events.is_empty());
    assert_eq!(client.local_player(&player_key).unwrap().predicted.len(), 1);

    client.press_at(PON, 3, 0.0);
    let mut events = client.tick(1500);
    let march = library.find_by_name(MARCH).unwrap();
    assert_eq!(
        events.read().collect::<Vec<_>>(),
        vec![RhythmEvent::Selected {
            player: player_key,
            command: march
        }]
    );

    let player = client.local_player(&player_key).unwrap();
    assert_eq!(player.executing.activation_beat_start, 4);
    assert_eq!(player.executing.phase(), CommandPhase::WaitingForApply);

    let mut events = client.tick(2000);
    assert_eq!(
        events.read().collect::<Vec<_>>(),
        vec![RhythmEvent::Applied {
            player: player_key,
            command: march
        }]
    );
    let player = client.local_player(&player_key).unwrap();
    assert_command_window!(player, 2000, 4000, 6000);
}

#[test]
fn chained_command_replaces_running_one() {
    let library = test_library();
    let config = RhythmConfig::default();
    let mut player = player();
    let mut tick = 0;
    let mut step = |player: &mut RhythmPlayer, elapsed| {
        tick += 1;
        player.set_elapsed(elapsed);
        process_player(player, &library, &config, tick)
    };

    for beat in 0..3 {
        player.press(PATA, beat * 500);
    }
    player.press(PON, 1500);
    step(&mut player, 1500);
    assert_eq!(step(&mut player, 2000).applied, ApplyOutcome::Applied);

    // attack, played while march runs
    player.press(PON, 2000);
    assert_eq!(step(&mut player, 2000).applied, ApplyOutcome::Running);
    player.press(PON, 2500);
    player.press(PATA, 3000);
    step(&mut player, 3000);
    player.press(PON, 3500);
    let outcome = step(&mut player, 3500);

    assert_eq!(outcome.selected, library.find_by_name("attack"));
    assert_eq!(player.executing.previous, library.find_by_name(MARCH));
    assert_eq!(step(&mut player, 4000).applied, ApplyOutcome::Applied);
    assert_command_window!(player, 4000, 6000, 8000);
}

#[test]
fn unbound_key_breaks_the_sequence() {
    let library = test_library();
    let config = RhythmConfig::default();
    let mut player = player();

    player.press(PATA, 0);
    player.press(PATA, 500);
    player.set_elapsed(500);
    assert_eq!(process_player(&mut player, &library, &config, 1).applied, ApplyOutcome::Idle);
    assert!(!player.predicted.is_empty());

    // bound to no command
    player.press(9, 1000);
    player.set_elapsed(1000);
    let outcome = process_player(&mut player, &library, &config, 2);
    assert_eq!(outcome.selected, None);
    assert_eq!(outcome.applied, ApplyOutcome::Idle);
    assert!(player.predicted.is_empty());
    assert!(player.progression.is_empty());
    assert_target!(library, player, None);
}
