use cadence_server::UserKey;
use cadence_shared::{BitReader, BitWriter, PressureInput, RhythmEvents, Serde, TimeMs};

use super::{TestClient, TestServer};

/// Serializes the client's pending inputs and feeds them to the server
pub fn send_inputs(client: &mut TestClient, server: &mut TestServer) {
    let player = client.player_key();
    let inputs = client.take_inputs();

    let mut writer = BitWriter::new();
    for input in &inputs {
        input.ser(&mut writer);
    }
    let bytes = writer.to_bytes();

    let mut reader = BitReader::new(&bytes);
    for _ in 0..inputs.len() {
        let input = PressureInput::de(&mut reader).expect("input decodes");
        server
            .receive_input(&player, &input)
            .expect("player exists on the server");
    }
}

/// Sends one snapshot frame from the server to the client, and the client's
/// acknowledgement back. Returns the size of the frame in bytes.
pub fn exchange_snapshot(server: &mut TestServer, user_key: &UserKey, client: &mut TestClient) -> usize {
    let bytes = server.write_snapshot(user_key).expect("user is connected");
    client
        .receive_snapshot(&bytes)
        .expect("snapshot frame decodes");
    for tick in client.take_acks() {
        server
            .ack_snapshot(user_key, tick)
            .expect("user is connected");
    }
    bytes.len()
}

/// Delivers pending inputs, ticks both peers at `elapsed`, then syncs the
/// command bindings
pub fn tick_and_exchange(
    server: &mut TestServer,
    user_key: &UserKey,
    client: &mut TestClient,
    elapsed: TimeMs,
) -> (RhythmEvents, RhythmEvents) {
    send_inputs(client, server);
    let server_events = server.tick(elapsed);
    let client_events = client.tick(elapsed);
    exchange_snapshot(server, user_key, client);
    (server_events, client_events)
}
