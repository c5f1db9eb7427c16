//! Command bindings travel from the server to every connected user

use std::sync::Arc;

use cadence_client::{Client, ClientConfig};
use cadence_shared::{CommandAction, CommandDefinition, CommandLibrary};
use cadence_test::{
    exchange_snapshot, init_logging, send_inputs, test_library, tick_and_exchange, TestClient,
    TestServer, ADVANCE, CHAKA, DON, PATA, PON,
};

#[test]
fn selected_command_reaches_client() {
    init_logging();

    let library = test_library();
    let mut server = TestServer::new();
    let (user_key, player_key) = server.connect_player();
    let mut client = TestClient::new(player_key);

    tick_and_exchange(&mut server, &user_key, &mut client, 0);
    assert_eq!(client.remote_command(&player_key), None);
    assert_eq!(client.last_snapshot_tick(), Some(server.current_tick()));

    client.press_at(DON, 0, 0.0);
    client.press_at(CHAKA, 2, 0.0);
    tick_and_exchange(&mut server, &user_key, &mut client, 1000);
    assert_eq!(client.remote_command(&player_key), library.find_by_name(ADVANCE));
    assert_eq!(server.user(&user_key).unwrap().last_acked_tick(), Some(server.current_tick()));

    // expires on the server at beat 11
    tick_and_exchange(&mut server, &user_key, &mut client, 1500);
    tick_and_exchange(&mut server, &user_key, &mut client, 5500);
    assert_eq!(client.remote_command(&player_key), None);
}

#[test]
fn unchanged_bindings_cost_one_bit_each() {
    let mut server = TestServer::new();
    let (user_key, player_key) = server.connect_player();
    let mut client = TestClient::new(player_key);

    for beat in 0..3 {
        client.press_at(PATA, beat, 0.0);
    }
    client.press_at(PON, 3, 0.0);
    tick_and_exchange(&mut server, &user_key, &mut client, 1500);

    // tick, baseline tick, count, then key and one bit for the single player
    let steady_bits = 16 + 17 + 8 + 8 + 1;
    for elapsed in [1600, 1700, 1800] {
        server.tick(elapsed);
        let size = exchange_snapshot(&mut server, &user_key, &mut client);
        assert_eq!(size, (steady_bits + 7) / 8);
    }
}

#[test]
fn every_user_follows_every_player() {
    let library = test_library();
    let mut server = TestServer::new();
    let (first_user, first_player) = server.connect_player();
    let (second_user, second_player) = server.connect_player();
    let mut first = TestClient::new(first_player);
    let mut second = TestClient::new(second_player);

    first.press_at(DON, 0, 0.0);
    first.press_at(CHAKA, 2, 0.0);
    second.press_at(PON, 0, 0.0);
    send_inputs(&mut first, &mut server);
    send_inputs(&mut second, &mut server);
    server.tick(1000);

    exchange_snapshot(&mut server, &first_user, &mut first);
    exchange_snapshot(&mut server, &second_user, &mut second);

    for client in [&first, &second] {
        assert_eq!(client.remote_command(&first_player), library.find_by_name(ADVANCE));
        assert_eq!(client.remote_command(&second_player), None);
        assert_eq!(client.remote_players().count(), 2);
    }
}

#[test]
fn unacked_frames_still_decode() {
    let library = test_library();
    let mut server = TestServer::new();
    let (user_key, player_key) = server.connect_player();
    let mut client = TestClient::new(player_key);

    client.press_at(DON, 0, 0.0);
    client.press_at(CHAKA, 2, 0.0);
    send_inputs(&mut client, &mut server);
    server.tick(1000);

    // acknowledgements are lost
    for _ in 0..3 {
        let bytes = server.write_snapshot(&user_key).unwrap();
        client.receive_snapshot(&bytes).unwrap();
        client.take_acks();
        server.tick(1200);
    }
    assert_eq!(server.user(&user_key).unwrap().last_acked_tick(), None);
    assert_eq!(client.remote_command(&player_key), library.find_by_name(ADVANCE));
}

#[test]
fn unknown_command_resolves_to_nothing() {
    let mut server = TestServer::new();
    let (user_key, player_key) = server.connect_player();
    let mut client = TestClient::new(player_key);

    client.press_at(DON, 0, 0.0);
    client.press_at(CHAKA, 2, 0.0);
    send_inputs(&mut client, &mut server);
    server.tick(1000);

    // an observer whose library lacks the command
    let mut library = CommandLibrary::new();
    library.add_command(CommandDefinition::new("retreat", &[CommandAction::with(0, PATA)]));
    let mut observer = Client::new(ClientConfig::default(), Arc::new(library));

    let bytes = server.write_snapshot(&user_key).unwrap();
    let tick = observer.receive_snapshot(&bytes).unwrap();
    assert_eq!(tick, server.current_tick());
    assert_eq!(observer.remote_command(&player_key), None);
    assert_eq!(observer.remote_players().count(), 1);
}

#[test]
fn despawned_player_is_unbound_on_clients() {
    let library = test_library();
    let mut server = TestServer::new();
    let (first_user, first_player) = server.connect_player();
    let (second_user, second_player) = server.connect_player();
    let mut first = TestClient::new(first_player);
    let mut observer = TestClient::new(second_player);

    first.press_at(DON, 0, 0.0);
    first.press_at(CHAKA, 2, 0.0);
    send_inputs(&mut first, &mut server);
    server.tick(1000);
    exchange_snapshot(&mut server, &second_user, &mut observer);
    assert_eq!(observer.remote_command(&first_player), library.find_by_name(ADVANCE));

    server.despawn_player(&first_player).unwrap();
    server.tick(1200);
    exchange_snapshot(&mut server, &second_user, &mut observer);

    assert_eq!(observer.remote_command(&first_player), None);
    assert_eq!(observer.remote_players().collect::<Vec<_>>(), vec![&second_player]);
    assert!(server.user_exists(&first_user));
}

#[test]
fn sync_recovers_after_a_long_ack_outage() {
    let library = test_library();
    let mut server = TestServer::new();
    let (user_key, player_key) = server.connect_player();
    let mut client = TestClient::new(player_key);

    client.press_at(DON, 0, 0.0);
    client.press_at(CHAKA, 2, 0.0);
    tick_and_exchange(&mut server, &user_key, &mut client, 1000);
    assert!(server.user(&user_key).unwrap().last_acked_tick().is_some());

    // acknowledgements are lost for longer than either side keeps history
    for _ in 0..200 {
        server.tick(1200);
        let bytes = server.write_snapshot(&user_key).unwrap();
        client.receive_snapshot(&bytes).unwrap();
        client.take_acks();
    }
    assert_eq!(client.remote_command(&player_key), library.find_by_name(ADVANCE));

    server.tick(1200);
    exchange_snapshot(&mut server, &user_key, &mut client);
    assert_eq!(server.user(&user_key).unwrap().last_acked_tick(), Some(server.current_tick()));
}
