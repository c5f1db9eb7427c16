//! Server and client run the same stages with different mercy

use cadence_shared::{CommandPhase, MercyProfile, ResetReason, RhythmEvent};
use cadence_test::{assert_command_window, tick_and_exchange, TestClient, TestServer, CHAKA, DON};

fn resets(events: &cadence_shared::RhythmEvents) -> Vec<ResetReason> {
    events
        .iter()
        .filter_map(|event| match event {
            RhythmEvent::Reset { reason, .. } => Some(*reason),
            _ => None,
        })
        .collect()
}

#[test]
fn profiles_follow_host_type() {
    let server = TestServer::new();
    let client = TestClient::new(cadence_shared::PlayerKey::new(0));

    assert_eq!(server.config().rhythm.mercy, MercyProfile::authoritative());
    assert_eq!(client.config().rhythm.mercy, MercyProfile::predictive());
    assert!(server.config().rhythm.mercy.input_mercy > client.config().rhythm.mercy.input_mercy);
    assert!(server.config().rhythm.mercy.command_mercy > client.config().rhythm.mercy.command_mercy);
}

#[test]
fn server_keeps_command_longer_than_client() {
    let mut server = TestServer::new();
    let (user_key, player_key) = server.connect_player();
    let mut client = TestClient::new(player_key);

    client.press_at(DON, 0, 0.0);
    client.press_at(CHAKA, 2, 0.0);
    tick_and_exchange(&mut server, &user_key, &mut client, 1000);
    tick_and_exchange(&mut server, &user_key, &mut client, 1500);

    // command over beats 3..7
    let (server_events, client_events) = tick_and_exchange(&mut server, &user_key, &mut client, 3999);
    assert!(server_events.is_empty());
    assert!(client_events.is_empty());

    // predictive mercy: dropped once beat 8 starts
    let (server_events, client_events) = tick_and_exchange(&mut server, &user_key, &mut client, 4000);
    assert!(server_events.is_empty());
    assert_eq!(resets(&client_events), vec![ResetReason::Expired]);

    // authoritative mercy: three more beats
    let (server_events, _) = tick_and_exchange(&mut server, &user_key, &mut client, 5499);
    assert!(server_events.is_empty());
    let (server_events, _) = tick_and_exchange(&mut server, &user_key, &mut client, 5500);
    assert_eq!(resets(&server_events), vec![ResetReason::Expired]);

    let player = server.player(&player_key).unwrap();
    assert!(player.command_state.is_empty());
}

#[test]
fn late_input_tolerated_by_server_only() {
    let mut server = TestServer::new();
    let (user_key, player_key) = server.connect_player();
    let mut client = TestClient::new(player_key);

    client.press_at(DON, 0, 0.0);
    client.press_at(CHAKA, 2, 0.0);
    tick_and_exchange(&mut server, &user_key, &mut client, 1000);

    // no tick ran while the command waited, the next one lands on beat 4
    let (server_events, client_events) = tick_and_exchange(&mut server, &user_key, &mut client, 2000);
    assert_eq!(resets(&client_events), vec![ResetReason::Expired]);
    assert!(resets(&server_events).is_empty());
    assert!(server_events.iter().any(|event| matches!(event, RhythmEvent::Applied { .. })));

    let phase = server.player(&player_key).map(|player| player.executing.phase());
    assert_eq!(phase, Some(CommandPhase::Applied));
    assert_command_window!(server.player(&player_key).unwrap(), 1500, 3500, 5500);
}
