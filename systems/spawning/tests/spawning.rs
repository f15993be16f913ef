use std::time::Duration;

use crown_rush_core::{Command, Event, GameStatus, SpriteVariant};
use crown_rush_system_spawning::{Config, Spawning};
use crown_rush_world::{self as world, query, World};

const PLAYFIELD_WIDTH: f32 = 400.0;

fn time_advanced(millis: u64) -> Vec<Event> {
    vec![Event::TimeAdvanced {
        dt: Duration::from_millis(millis),
    }]
}

#[test]
fn obstacle_timer_fires_after_its_interval() {
    let mut spawning = Spawning::new(Config::new(0x1234_5678));
    let mut commands = Vec::new();

    spawning.handle(
        &time_advanced(999),
        GameStatus::Running,
        PLAYFIELD_WIDTH,
        false,
        &mut commands,
    );
    assert!(commands.is_empty(), "no spawn before the interval elapses");

    spawning.handle(
        &time_advanced(2),
        GameStatus::Running,
        PLAYFIELD_WIDTH,
        false,
        &mut commands,
    );
    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], Command::SpawnObstacle { .. }));
}

#[test]
fn each_class_fires_on_its_own_cadence() {
    let mut spawning = Spawning::new(Config::new(0xdead_beef));
    let mut commands = Vec::new();

    spawning.handle(
        &time_advanced(10_001),
        GameStatus::Running,
        PLAYFIELD_WIDTH,
        false,
        &mut commands,
    );

    assert_eq!(commands.len(), 3, "all three timers elapsed: {commands:?}");
    assert!(matches!(commands[0], Command::SpawnObstacle { .. }));
    assert!(matches!(commands[1], Command::SpawnPowerUp { .. }));
    assert!(matches!(commands[2], Command::SpawnCrown { .. }));
}

#[test]
fn crown_proposal_is_suppressed_while_one_exists_and_timer_still_resets() {
    let mut spawning = Spawning::new(Config::new(0xc0ffee));
    let mut commands = Vec::new();

    spawning.handle(
        &time_advanced(10_001),
        GameStatus::Running,
        PLAYFIELD_WIDTH,
        true,
        &mut commands,
    );
    assert!(
        !commands
            .iter()
            .any(|command| matches!(command, Command::SpawnCrown { .. })),
        "crown must not spawn while present"
    );

    commands.clear();
    spawning.handle(
        &time_advanced(1),
        GameStatus::Running,
        PLAYFIELD_WIDTH,
        false,
        &mut commands,
    );
    assert!(
        !commands
            .iter()
            .any(|command| matches!(command, Command::SpawnCrown { .. })),
        "suppressed firing still resets the crown timer"
    );
}

#[test]
fn non_running_status_emits_nothing() {
    let mut spawning = Spawning::new(Config::new(1));
    let mut commands = Vec::new();

    spawning.handle(
        &time_advanced(60_000),
        GameStatus::Ready,
        PLAYFIELD_WIDTH,
        false,
        &mut commands,
    );
    spawning.handle(
        &time_advanced(60_000),
        GameStatus::Over,
        PLAYFIELD_WIDTH,
        false,
        &mut commands,
    );

    assert!(commands.is_empty());
}

#[test]
fn game_reset_clears_the_session_clock() {
    let mut spawning = Spawning::new(Config::new(42));
    let mut commands = Vec::new();

    spawning.handle(
        &time_advanced(900),
        GameStatus::Running,
        PLAYFIELD_WIDTH,
        false,
        &mut commands,
    );
    spawning.handle(
        &[Event::GameReset],
        GameStatus::Running,
        PLAYFIELD_WIDTH,
        false,
        &mut commands,
    );
    spawning.handle(
        &time_advanced(900),
        GameStatus::Running,
        PLAYFIELD_WIDTH,
        false,
        &mut commands,
    );

    assert!(commands.is_empty(), "reset discards accumulated time");
}

#[test]
fn identically_seeded_systems_replay_identical_commands() {
    let script = [16_u64, 500, 700, 1200, 3000, 250, 5000, 100];

    let run = |seed: u64| {
        let mut spawning = Spawning::new(Config::new(seed));
        let mut commands = Vec::new();
        for millis in script {
            spawning.handle(
                &time_advanced(millis),
                GameStatus::Running,
                PLAYFIELD_WIDTH,
                false,
                &mut commands,
            );
        }
        commands
    };

    assert_eq!(run(0x4d59_5df4), run(0x4d59_5df4));
    assert_ne!(run(0x4d59_5df4), run(0x0bad_5eed));
}

#[test]
fn proposed_variants_stay_below_the_variant_count() {
    let mut spawning = Spawning::new(Config::new(0x77));
    let mut commands = Vec::new();

    for _ in 0..50 {
        spawning.handle(
            &time_advanced(1001),
            GameStatus::Running,
            PLAYFIELD_WIDTH,
            false,
            &mut commands,
        );
    }

    for command in &commands {
        let variant = match command {
            Command::SpawnObstacle { variant, .. } => *variant,
            Command::SpawnPowerUp { variant, .. } => *variant,
            _ => SpriteVariant::new(0),
        };
        assert!(variant.get() < SpriteVariant::COUNT);
    }
}

#[test]
fn spawn_commands_populate_the_world_until_rejected() {
    let mut world = World::new();
    let mut events = Vec::new();
    world::apply(&mut world, Command::Start, &mut events);

    let mut spawning = Spawning::new(Config::new(0x1cebe4));
    for _ in 0..20 {
        let mut commands = Vec::new();
        let mut frame_events = Vec::new();
        world::apply(
            &mut world,
            Command::Tick {
                dt: Duration::from_millis(600),
            },
            &mut frame_events,
        );
        spawning.handle(
            &frame_events,
            query::status(&world),
            query::playfield(&world).width(),
            query::crown(&world).is_some(),
            &mut commands,
        );
        for command in commands {
            world::apply(&mut world, command, &mut frame_events);
        }
    }

    // 12 seconds of session time at a 1-second cadence, minus any
    // placement rejections near the top of the playfield.
    assert!(!query::obstacles(&world).is_empty());
    let spawned = query::obstacles(&world).len() + query::power_ups(&world).len();
    assert!(spawned <= 18, "placement validation bounds the population");
}
