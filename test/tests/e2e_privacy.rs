//! End-to-end replication between one Server and several Clients, checking
//! which users each field change reaches.

use tickdiff_client::{Client, ClientConfig};
use tickdiff_server::{Server, ServerConfig};
use tickdiff_shared::{GroupId, NetworkId, Ownership, Quat, UserKey, Vec3};
use tickdiff_test::{deliver, protocol, Avatar, LoopbackTransport, TestWorld};

const OWNER: UserKey = UserKey::new(1);
const TEAMMATE: UserKey = UserKey::new(2);
const STRANGER: UserKey = UserKey::new(3);
const RED: GroupId = GroupId::new(7);
const AVATAR: NetworkId = NetworkId::new(1);

struct Harness {
    server: Server,
    world: TestWorld,
    transport: LoopbackTransport,
    clients: Vec<(UserKey, Client, TestWorld)>,
}

impl Harness {
    fn new() -> Self {
        env_logger::builder()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init()
            .ok();

        let mut world = TestWorld::new();
        world.insert(AVATAR, Avatar::default());
        world.set_owner(AVATAR, Ownership::new(OWNER, Some(RED)));

        let mut server = Server::new(ServerConfig::default(), protocol());
        server.connect_user(OWNER, Some(RED)).unwrap();
        server.connect_user(TEAMMATE, Some(RED)).unwrap();
        server.connect_user(STRANGER, None).unwrap();
        assert_eq!(server.register_entity(&world, &AVATAR).unwrap(), 6);

        let clients = [OWNER, TEAMMATE, STRANGER]
            .into_iter()
            .map(|user_key| {
                let mut client_world = TestWorld::new();
                client_world.insert(AVATAR, Avatar::default());
                let client = Client::new(ClientConfig::default(), protocol());
                (user_key, client, client_world)
            })
            .collect();

        Self {
            server,
            world,
            transport: LoopbackTransport::new(),
            clients,
        }
    }

    fn avatar_mut(&mut self) -> &mut Avatar {
        self.world.get_mut::<Avatar>(AVATAR).unwrap()
    }

    /// Ticks once and delivers every buffer. Returns how many records each user applied.
    fn tick(&mut self) -> Vec<usize> {
        self.server.tick(&self.world, &mut self.transport);
        self.clients
            .iter_mut()
            .map(|(user_key, client, world)| {
                let report = deliver(&mut self.transport, user_key, client, world);
                assert!(report.skipped.is_empty(), "{:?}", report.skipped);
                report.applied
            })
            .collect()
    }

    fn seen_by(&self, index: usize) -> &Avatar {
        self.clients[index].2.get::<Avatar>(AVATAR).unwrap()
    }
}

#[test]
fn public_field_reaches_everyone_private_field_only_the_owner() {
    let mut harness = Harness::new();

    harness.avatar_mut().score = 7;
    harness.avatar_mut().secret = 99;

    assert_eq!(harness.tick(), vec![2, 1, 1]);

    assert_eq!(harness.seen_by(0).score, 7);
    assert_eq!(harness.seen_by(0).secret, 99);
    for index in 1..3 {
        assert_eq!(harness.seen_by(index).score, 7);
        assert_eq!(harness.seen_by(index).secret, 0);
    }
}

#[test]
fn team_only_field_reaches_the_owners_group() {
    let mut harness = Harness::new();

    harness.avatar_mut().transform.scale = 2.5;

    assert_eq!(harness.tick(), vec![1, 1, 0]);
    assert_eq!(harness.seen_by(0).transform.scale, 2.5);
    assert_eq!(harness.seen_by(1).transform.scale, 2.5);
    assert_eq!(harness.seen_by(2).transform.scale, 0.0);
}

#[test]
fn private_field_nested_in_team_only_struct_stays_private() {
    let mut harness = Harness::new();

    let rotation = Quat::new(0.0, 0.7071068, 0.0, 0.7071068);
    harness.avatar_mut().transform.rotation = rotation;

    assert_eq!(harness.tick(), vec![1, 0, 0]);
    assert_eq!(harness.seen_by(0).transform.rotation, rotation);
    assert_eq!(harness.seen_by(1).transform.rotation, Quat::IDENTITY);
}

#[test]
fn group_change_takes_effect_next_tick() {
    let mut harness = Harness::new();

    harness
        .server
        .set_user_group(&TEAMMATE, Some(GroupId::new(8)))
        .unwrap();
    harness.avatar_mut().transform.scale = 4.0;

    assert_eq!(harness.tick(), vec![1, 0, 0]);
}

#[test]
fn unchanged_world_sends_nothing() {
    let mut harness = Harness::new();

    let report = harness.server.tick(&harness.world, &mut harness.transport);

    assert_eq!(report.changed, 0);
    assert_eq!(report.sent, 0);
    assert!(harness.transport.is_empty());
}

#[test]
fn a_change_is_sent_once() {
    let mut harness = Harness::new();

    harness.avatar_mut().position = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(harness.tick(), vec![1, 1, 1]);
    assert_eq!(harness.tick(), vec![0, 0, 0]);

    harness.avatar_mut().position = Vec3::new(1.0, 2.0, 4.0);
    assert_eq!(harness.tick(), vec![1, 1, 1]);
    assert_eq!(harness.seen_by(2).position, Vec3::new(1.0, 2.0, 4.0));
}

#[test]
fn local_field_never_replicates() {
    let mut harness = Harness::new();

    harness.avatar_mut().frames = 1000;

    let report = harness.server.tick(&harness.world, &mut harness.transport);
    assert_eq!(report.changed, 0);
    assert!(harness.transport.is_empty());
}

#[test]
fn nickname_is_watched_through_its_accessor() {
    let mut harness = Harness::new();

    harness.avatar_mut().set_nickname("Ferris");

    assert_eq!(harness.tick(), vec![1, 1, 1]);
    assert_eq!(harness.seen_by(2).nickname(), "Ferris");
}

#[test]
fn record_bytes_on_the_wire() {
    let mut harness = Harness::new();

    harness.avatar_mut().score = 7;
    harness.server.tick(&harness.world, &mut harness.transport);

    let buffers = harness.transport.take(&STRANGER);
    assert_eq!(buffers.len(), 1);

    let mut expected = vec![
        19, 1, 0, 0, 0, // target: NetworkId tag and id
        5, 0, 0, // component: U16 tag and net id of Avatar
        0, 0, // no ancestors
        20, 10, // leaf key: Name tag and length
    ];
    expected.extend_from_slice(b"score");
    expected.extend_from_slice(&[7, 7, 0, 0, 0]);
    assert_eq!(buffers[0], expected);
}

#[test]
fn disconnected_user_receives_nothing() {
    let mut harness = Harness::new();

    harness.server.disconnect_user(&STRANGER).unwrap();
    harness.avatar_mut().score = 3;

    let report = harness.server.tick(&harness.world, &mut harness.transport);
    assert_eq!(report.sent, 2);
    assert_eq!(harness.transport.queued(&STRANGER), 0);
}

#[test]
fn refused_send_does_not_stop_other_users() {
    let mut harness = Harness::new();

    harness.transport.refuse(TEAMMATE);
    harness.avatar_mut().score = 5;

    let report = harness.server.tick(&harness.world, &mut harness.transport);
    assert_eq!(report.records, 3);
    assert_eq!(report.sent, 2);
    assert_eq!(harness.transport.queued(&OWNER), 1);
    assert_eq!(harness.transport.queued(&STRANGER), 1);
}
