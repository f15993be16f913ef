#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic spawning system that emits entity placement commands.
//!
//! Three independent timers (obstacle, power-up, crown) are compared against
//! the elapsed session clock. When a timer fires, the system proposes a
//! candidate at a random horizontal position; the world validates placement
//! and may reject it. The timer resets to the firing instant regardless of
//! acceptance, so a rejected tick is silently skipped with no retry.

use std::time::Duration;

use crown_rush_core::{Command, EntityKind, Event, GameStatus, SpriteVariant};

const RNG_MULTIPLIER: u64 = 6_364_136_223_846_793_005;
const RNG_INCREMENT: u64 = 1;

const DEFAULT_OBSTACLE_INTERVAL: Duration = Duration::from_millis(1000);
const DEFAULT_POWER_UP_INTERVAL: Duration = Duration::from_millis(2000);
const DEFAULT_CROWN_INTERVAL: Duration = Duration::from_millis(10_000);

/// Configuration parameters required to construct the spawning system.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    obstacle_interval: Duration,
    power_up_interval: Duration,
    crown_interval: Duration,
    rng_seed: u64,
}

impl Config {
    /// Creates a configuration with the standard spawn cadences and the
    /// provided seed.
    #[must_use]
    pub const fn new(rng_seed: u64) -> Self {
        Self {
            obstacle_interval: DEFAULT_OBSTACLE_INTERVAL,
            power_up_interval: DEFAULT_POWER_UP_INTERVAL,
            crown_interval: DEFAULT_CROWN_INTERVAL,
            rng_seed,
        }
    }

    /// Creates a configuration with explicit per-class spawn cadences.
    #[must_use]
    pub const fn with_intervals(
        obstacle_interval: Duration,
        power_up_interval: Duration,
        crown_interval: Duration,
        rng_seed: u64,
    ) -> Self {
        Self {
            obstacle_interval,
            power_up_interval,
            crown_interval,
            rng_seed,
        }
    }
}

/// Pure system that deterministically emits spawn commands while running.
#[derive(Debug)]
pub struct Spawning {
    clock: Duration,
    last_obstacle: Duration,
    last_power_up: Duration,
    last_crown: Duration,
    obstacle_interval: Duration,
    power_up_interval: Duration,
    crown_interval: Duration,
    rng_state: u64,
}

impl Spawning {
    /// Creates a new spawning system using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            clock: Duration::ZERO,
            last_obstacle: Duration::ZERO,
            last_power_up: Duration::ZERO,
            last_crown: Duration::ZERO,
            obstacle_interval: config.obstacle_interval,
            power_up_interval: config.power_up_interval,
            crown_interval: config.crown_interval,
            rng_state: config.rng_seed,
        }
    }

    /// Consumes events and the current world status to emit spawn commands.
    ///
    /// `playfield_width` bounds the proposed horizontal positions and
    /// `crown_present` suppresses crown proposals while one already exists.
    pub fn handle(
        &mut self,
        events: &[Event],
        status: GameStatus,
        playfield_width: f32,
        crown_present: bool,
        out: &mut Vec<Command>,
    ) {
        let mut accumulated = Duration::ZERO;
        for event in events {
            match event {
                Event::TimeAdvanced { dt } => {
                    accumulated = accumulated.saturating_add(*dt);
                }
                Event::GameReset => {
                    self.reset_timers();
                    accumulated = Duration::ZERO;
                }
                _ => {}
            }
        }

        if status != GameStatus::Running {
            return;
        }

        self.clock = self.clock.saturating_add(accumulated);

        if self.clock.saturating_sub(self.last_obstacle) > self.obstacle_interval {
            self.last_obstacle = self.clock;
            let x = self.random_x(EntityKind::Obstacle, playfield_width);
            let variant = self.random_variant();
            out.push(Command::SpawnObstacle { x, variant });
        }

        if self.clock.saturating_sub(self.last_power_up) > self.power_up_interval {
            self.last_power_up = self.clock;
            let x = self.random_x(EntityKind::PowerUp, playfield_width);
            let variant = self.random_variant();
            out.push(Command::SpawnPowerUp { x, variant });
        }

        if self.clock.saturating_sub(self.last_crown) > self.crown_interval {
            // The mark resets even when a crown is already in play.
            self.last_crown = self.clock;
            if !crown_present {
                let x = self.random_x(EntityKind::Crown, playfield_width);
                out.push(Command::SpawnCrown { x });
            }
        }
    }

    fn reset_timers(&mut self) {
        self.clock = Duration::ZERO;
        self.last_obstacle = Duration::ZERO;
        self.last_power_up = Duration::ZERO;
        self.last_crown = Duration::ZERO;
    }

    fn random_x(&mut self, kind: EntityKind, playfield_width: f32) -> f32 {
        let (width, _) = kind.footprint();
        let range = (playfield_width - width).max(0.0);
        self.next_f32() * range
    }

    fn random_variant(&mut self) -> SpriteVariant {
        SpriteVariant::new((self.advance_rng() % u64::from(SpriteVariant::COUNT)) as u8)
    }

    fn advance_rng(&mut self) -> u64 {
        self.rng_state = self
            .rng_state
            .wrapping_mul(RNG_MULTIPLIER)
            .wrapping_add(RNG_INCREMENT);
        self.rng_state
    }

    fn next_f32(&mut self) -> f32 {
        (self.advance_rng() >> 32) as f32 / u32::MAX as f32
    }
}
