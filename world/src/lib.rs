#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Crown Rush.
//!
//! The world owns every piece of mutable session state: the player, the
//! falling entity collections, score, lives, and the life-cycle status. All
//! mutation flows through [`apply`], which broadcasts [`Event`] values for
//! systems to react to. Timed effects (boost and invincibility) are
//! tick-based countdowns decremented by `Command::Tick`, so a reset cancels
//! them trivially and every effect is deterministic per tick.

mod placement;

use std::time::Duration;

use crown_rush_core::{
    Command, EntityKind, Event, GameOutcome, GameStatus, Rect, SpriteVariant,
    WELCOME_BANNER,
};

const DEFAULT_PLAYFIELD_WIDTH: f32 = 400.0;
const DEFAULT_PLAYFIELD_HEIGHT: f32 = 600.0;

const PLAYER_WIDTH: f32 = 50.0;
const PLAYER_HEIGHT: f32 = 100.0;
const PLAYER_BOTTOM_MARGIN: f32 = 10.0;
const PLAYER_BASE_SPEED: f32 = 3.0;
const PLAYER_BOOST_SPEED: f32 = 5.0;

/// Fixed horizontal distance covered by a swipe-triggered slide.
const SLIDE_STEP: f32 = 30.0;

/// Downward speed factor shared by every falling entity.
const GAME_SPEED: f32 = 2.0;
/// Scale applied to `GAME_SPEED * dt` so a speed of 2 feels like ~200 px/sec.
const DESCENT_SCALE: f32 = 100.0;

/// Minimum axis-wise separation demanded from newly placed entities.
const MIN_SPAWN_GAP: f32 = 80.0;

const BOOST_DURATION: Duration = Duration::from_millis(1000);
const INVINCIBILITY_DURATION: Duration = Duration::from_millis(1000);

const STARTING_LIVES: u8 = 3;
const POWER_UP_SCORE: u32 = 10;

/// Describes the rectangular play area entities fall through.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Playfield {
    width: f32,
    height: f32,
}

impl Playfield {
    /// Creates a new playfield description.
    #[must_use]
    pub(crate) const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width of the playfield in playfield units.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Height of the playfield in playfield units.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }
}

#[derive(Clone, Copy, Debug)]
struct Player {
    rect: Rect,
}

impl Player {
    fn centered_in(playfield: &Playfield) -> Self {
        Self {
            rect: Rect::new(
                (playfield.width() - PLAYER_WIDTH) / 2.0,
                playfield.height() - PLAYER_HEIGHT - PLAYER_BOTTOM_MARGIN,
                PLAYER_WIDTH,
                PLAYER_HEIGHT,
            ),
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct FallingEntity {
    rect: Rect,
    variant: SpriteVariant,
}

/// Represents the authoritative Crown Rush world state.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    playfield: Playfield,
    player: Player,
    obstacles: Vec<FallingEntity>,
    power_ups: Vec<FallingEntity>,
    crown: Option<Rect>,
    score: u32,
    lives: u8,
    distance: f32,
    status: GameStatus,
    boost_remaining: Duration,
    invincibility_remaining: Duration,
}

impl World {
    /// Creates a new Crown Rush world in the pre-start state.
    #[must_use]
    pub fn new() -> Self {
        let playfield = Playfield::new(DEFAULT_PLAYFIELD_WIDTH, DEFAULT_PLAYFIELD_HEIGHT);
        Self {
            banner: WELCOME_BANNER,
            player: Player::centered_in(&playfield),
            playfield,
            obstacles: Vec::new(),
            power_ups: Vec::new(),
            crown: None,
            score: 0,
            lives: STARTING_LIVES,
            distance: 0.0,
            status: GameStatus::Ready,
            boost_remaining: Duration::ZERO,
            invincibility_remaining: Duration::ZERO,
        }
    }

    fn restore_defaults(&mut self) {
        self.obstacles.clear();
        self.power_ups.clear();
        self.crown = None;
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.distance = 0.0;
        self.boost_remaining = Duration::ZERO;
        self.invincibility_remaining = Duration::ZERO;
        self.player = Player::centered_in(&self.playfield);
    }

    fn current_speed(&self) -> f32 {
        if self.boost_remaining.is_zero() {
            PLAYER_BASE_SPEED
        } else {
            PLAYER_BOOST_SPEED
        }
    }

    fn move_player(&mut self, dx: f32, out_events: &mut Vec<Event>) {
        if self.status != GameStatus::Running {
            return;
        }

        let bound = self.playfield.width() - self.player.rect.width();
        let x = (self.player.rect.x() + dx).clamp(0.0, bound);
        self.player.rect = self.player.rect.at_x(x);
        out_events.push(Event::PlayerMoved { x });
    }

    fn advance(&mut self, dt: Duration, out_events: &mut Vec<Event>) {
        if self.status != GameStatus::Running {
            return;
        }

        out_events.push(Event::TimeAdvanced { dt });

        self.boost_remaining = self.boost_remaining.saturating_sub(dt);
        self.invincibility_remaining = self.invincibility_remaining.saturating_sub(dt);

        // No explicit dt clamp exists: a very large delta (after a pause)
        // causes an equally large positional jump.
        let dy = GAME_SPEED * dt.as_secs_f32() * DESCENT_SCALE;
        self.distance += dy;

        for entity in self.obstacles.iter_mut() {
            entity.rect = entity.rect.dropped_by(dy);
        }
        for entity in self.power_ups.iter_mut() {
            entity.rect = entity.rect.dropped_by(dy);
        }
        if let Some(crown) = self.crown.as_mut() {
            *crown = crown.dropped_by(dy);
        }

        let floor = self.playfield.height();
        self.obstacles.retain(|entity| entity.rect.y() < floor);
        self.power_ups.retain(|entity| entity.rect.y() < floor);
        // The crown is exempt from off-screen filtering: it keeps falling
        // until collected or the session ends.

        self.resolve_collisions(out_events);
    }

    fn resolve_collisions(&mut self, out_events: &mut Vec<Event>) {
        let player_rect = self.player.rect;

        let mut index = 0;
        while index < self.obstacles.len() {
            if !player_rect.overlaps(&self.obstacles[index].rect) {
                index += 1;
                continue;
            }

            // Collided obstacles are consumed even while shielded; the
            // invincibility window protects lives, not obstacle persistence.
            let _ = self.obstacles.remove(index);

            if !self.invincibility_remaining.is_zero() {
                out_events.push(Event::ObstacleHit {
                    lives_remaining: self.lives,
                    shielded: true,
                });
                continue;
            }

            self.lives = self.lives.saturating_sub(1);
            if self.lives == 0 {
                out_events.push(Event::ObstacleHit {
                    lives_remaining: 0,
                    shielded: false,
                });
                self.finish(GameOutcome::Lost, out_events);
                return;
            }

            self.invincibility_remaining = INVINCIBILITY_DURATION;
            out_events.push(Event::ObstacleHit {
                lives_remaining: self.lives,
                shielded: false,
            });
        }

        let mut index = 0;
        while index < self.power_ups.len() {
            if !player_rect.overlaps(&self.power_ups[index].rect) {
                index += 1;
                continue;
            }

            let _ = self.power_ups.remove(index);
            self.boost_remaining = BOOST_DURATION;
            self.score += POWER_UP_SCORE;
            out_events.push(Event::PowerUpCollected { score: self.score });
        }

        if let Some(crown) = self.crown {
            if player_rect.overlaps(&crown) {
                self.crown = None;
                self.finish(GameOutcome::Won, out_events);
            }
        }
    }

    fn finish(&mut self, outcome: GameOutcome, out_events: &mut Vec<Event>) {
        self.status = match outcome {
            GameOutcome::Won => GameStatus::Won,
            GameOutcome::Lost => GameStatus::Over,
        };
        out_events.push(Event::GameEnded {
            outcome,
            score: self.score,
        });
    }

    fn spawn_obstacle(&mut self, x: f32, variant: SpriteVariant, out_events: &mut Vec<Event>) {
        if self.status != GameStatus::Running {
            return;
        }

        let candidate = spawn_candidate(EntityKind::Obstacle, x, &self.playfield);
        if placement::placement_clear(
            &candidate,
            &self.obstacles,
            &self.power_ups,
            self.crown.as_ref(),
            MIN_SPAWN_GAP,
        ) {
            self.obstacles.push(FallingEntity {
                rect: candidate,
                variant,
            });
            out_events.push(Event::ObstacleSpawned {
                rect: candidate,
                variant,
            });
        } else {
            out_events.push(Event::SpawnRejected {
                kind: EntityKind::Obstacle,
            });
        }
    }

    fn spawn_power_up(&mut self, x: f32, variant: SpriteVariant, out_events: &mut Vec<Event>) {
        if self.status != GameStatus::Running {
            return;
        }

        // Item placement only avoids obstacles and other items; the crown
        // does not constrain it.
        let candidate = spawn_candidate(EntityKind::PowerUp, x, &self.playfield);
        if placement::placement_clear(&candidate, &self.obstacles, &self.power_ups, None, MIN_SPAWN_GAP)
        {
            self.power_ups.push(FallingEntity {
                rect: candidate,
                variant,
            });
            out_events.push(Event::PowerUpSpawned {
                rect: candidate,
                variant,
            });
        } else {
            out_events.push(Event::SpawnRejected {
                kind: EntityKind::PowerUp,
            });
        }
    }

    fn spawn_crown(&mut self, x: f32, out_events: &mut Vec<Event>) {
        if self.status != GameStatus::Running {
            return;
        }

        if self.crown.is_some() {
            out_events.push(Event::SpawnRejected {
                kind: EntityKind::Crown,
            });
            return;
        }

        let candidate = spawn_candidate(EntityKind::Crown, x, &self.playfield);
        if placement::placement_clear(&candidate, &self.obstacles, &self.power_ups, None, MIN_SPAWN_GAP)
        {
            self.crown = Some(candidate);
            out_events.push(Event::CrownSpawned { rect: candidate });
        } else {
            out_events.push(Event::SpawnRejected {
                kind: EntityKind::Crown,
            });
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

fn spawn_candidate(kind: EntityKind, x: f32, playfield: &Playfield) -> Rect {
    let (width, height) = kind.footprint();
    let x = x.clamp(0.0, (playfield.width() - width).max(0.0));
    Rect::new(x, -height, width, height)
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::ConfigurePlayfield { width, height } => {
            world.playfield = Playfield::new(width, height);
            world.restore_defaults();
            world.status = GameStatus::Ready;
        }
        Command::Start => {
            if world.status == GameStatus::Ready {
                world.status = GameStatus::Running;
                out_events.push(Event::GameStarted);
            }
        }
        Command::Reset => {
            world.restore_defaults();
            world.status = GameStatus::Running;
            out_events.push(Event::GameReset);
        }
        Command::Tick { dt } => world.advance(dt, out_events),
        Command::StepPlayer { direction } => {
            let dx = direction.sign() * world.current_speed();
            world.move_player(dx, out_events);
        }
        Command::SlidePlayer { direction } => {
            world.move_player(direction.sign() * SLIDE_STEP, out_events);
        }
        Command::BoostPlayer => {
            if world.status == GameStatus::Running {
                world.boost_remaining = BOOST_DURATION;
            }
        }
        Command::SpawnObstacle { x, variant } => world.spawn_obstacle(x, variant, out_events),
        Command::SpawnPowerUp { x, variant } => world.spawn_power_up(x, variant, out_events),
        Command::SpawnCrown { x } => world.spawn_crown(x, out_events),
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use crown_rush_core::{GameStatus, Rect, SpriteVariant};

    use super::{Playfield, World};

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Provides the playfield dimensions entities fall through.
    #[must_use]
    pub fn playfield(world: &World) -> Playfield {
        world.playfield
    }

    /// Current life-cycle status of the session.
    #[must_use]
    pub fn status(world: &World) -> GameStatus {
        world.status
    }

    /// Score accumulated during the current session.
    #[must_use]
    pub fn score(world: &World) -> u32 {
        world.score
    }

    /// Lives remaining in the current session.
    #[must_use]
    pub fn lives(world: &World) -> u8 {
        world.lives
    }

    /// Distance scrolled since the session began. Tracked but drives no
    /// gameplay logic.
    #[must_use]
    pub fn distance(world: &World) -> f32 {
        world.distance
    }

    /// Captures a read-only snapshot of the player.
    #[must_use]
    pub fn player(world: &World) -> PlayerSnapshot {
        PlayerSnapshot {
            rect: world.player.rect,
            boosted: !world.boost_remaining.is_zero(),
            invincible: !world.invincibility_remaining.is_zero(),
        }
    }

    /// Captures a read-only view of the obstacles currently falling.
    #[must_use]
    pub fn obstacles(world: &World) -> EntityView {
        EntityView::from_entities(&world.obstacles)
    }

    /// Captures a read-only view of the power-ups currently falling.
    #[must_use]
    pub fn power_ups(world: &World) -> EntityView {
        EntityView::from_entities(&world.power_ups)
    }

    /// Region occupied by the crown, if one exists.
    #[must_use]
    pub fn crown(world: &World) -> Option<Rect> {
        world.crown
    }

    /// Immutable representation of the player's state used for queries.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct PlayerSnapshot {
        /// Region occupied by the player.
        pub rect: Rect,
        /// Whether a speed boost is currently active.
        pub boosted: bool,
        /// Whether the invincibility window is currently active.
        pub invincible: bool,
    }

    /// Immutable representation of a single falling entity.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct EntitySnapshot {
        /// Region occupied by the entity.
        pub rect: Rect,
        /// Visual variant assigned to the entity.
        pub variant: SpriteVariant,
    }

    /// Read-only view over one falling entity collection.
    #[derive(Clone, Debug, Default)]
    pub struct EntityView {
        snapshots: Vec<EntitySnapshot>,
    }

    impl EntityView {
        fn from_entities(entities: &[super::FallingEntity]) -> Self {
            Self {
                snapshots: entities
                    .iter()
                    .map(|entity| EntitySnapshot {
                        rect: entity.rect,
                        variant: entity.variant,
                    })
                    .collect(),
            }
        }

        /// Iterator over the captured snapshots in spawn order.
        pub fn iter(&self) -> impl Iterator<Item = &EntitySnapshot> {
            self.snapshots.iter()
        }

        /// Number of entities captured by the view.
        #[must_use]
        pub fn len(&self) -> usize {
            self.snapshots.len()
        }

        /// Reports whether the view captured no entities.
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.snapshots.is_empty()
        }

        /// Consumes the view, yielding the underlying snapshots.
        #[must_use]
        pub fn into_vec(self) -> Vec<EntitySnapshot> {
            self.snapshots
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crown_rush_core::Direction;

    fn running_world() -> World {
        let mut world = World::new();
        let mut events = Vec::new();
        apply(&mut world, Command::Start, &mut events);
        assert_eq!(events, vec![Event::GameStarted]);
        world
    }

    fn player_overlapping_rect(world: &World, kind: EntityKind) -> Rect {
        let (width, height) = kind.footprint();
        let player = world.player.rect;
        Rect::new(player.x(), player.y(), width, height)
    }

    fn tick(world: &mut World, dt: Duration) -> Vec<Event> {
        let mut events = Vec::new();
        apply(world, Command::Tick { dt }, &mut events);
        events
    }

    #[test]
    fn tick_is_ignored_before_start() {
        let mut world = World::new();
        let events = tick(&mut world, Duration::from_millis(16));
        assert!(events.is_empty());
        assert_eq!(query::status(&world), GameStatus::Ready);
    }

    #[test]
    fn entities_past_the_floor_are_removed_by_the_step() {
        let mut world = running_world();
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::SpawnObstacle {
                x: 100.0,
                variant: SpriteVariant::new(0),
            },
            &mut events,
        );
        assert_eq!(query::obstacles(&world).len(), 1);

        // 4 seconds at speed 2 covers 800 units, past the 600-unit floor.
        let _ = tick(&mut world, Duration::from_secs(4));
        assert!(query::obstacles(&world).is_empty());
    }

    #[test]
    fn crown_is_exempt_from_off_screen_filtering() {
        let mut world = running_world();
        let mut events = Vec::new();
        apply(&mut world, Command::SpawnCrown { x: 10.0 }, &mut events);
        assert!(query::crown(&world).is_some());

        let _ = tick(&mut world, Duration::from_secs(4));
        let crown = query::crown(&world).expect("crown persists off-screen");
        assert!(crown.y() > query::playfield(&world).height());
    }

    #[test]
    fn placement_rejects_zero_offset_candidate() {
        let mut world = running_world();
        let variant = SpriteVariant::new(1);
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::SpawnObstacle { x: 100.0, variant },
            &mut events,
        );
        apply(
            &mut world,
            Command::SpawnObstacle { x: 100.0, variant },
            &mut events,
        );

        assert_eq!(query::obstacles(&world).len(), 1);
        assert!(events.contains(&Event::SpawnRejected {
            kind: EntityKind::Obstacle,
        }));
    }

    #[test]
    fn crown_spawn_noops_while_a_crown_exists() {
        let mut world = running_world();
        let mut events = Vec::new();
        apply(&mut world, Command::SpawnCrown { x: 10.0 }, &mut events);
        let first = query::crown(&world).expect("first crown accepted");

        events.clear();
        apply(&mut world, Command::SpawnCrown { x: 300.0 }, &mut events);
        assert_eq!(query::crown(&world), Some(first));
        assert_eq!(
            events,
            vec![Event::SpawnRejected {
                kind: EntityKind::Crown,
            }]
        );
    }

    #[test]
    fn lives_never_go_negative_and_over_fires_once() {
        let mut world = running_world();
        let variant = SpriteVariant::new(0);
        let mut endings = 0;

        for _ in 0..10 {
            world.invincibility_remaining = Duration::ZERO;
            world.obstacles.push(FallingEntity {
                rect: player_overlapping_rect(&world, EntityKind::Obstacle),
                variant,
            });
            let events = tick(&mut world, Duration::from_millis(1));
            endings += events
                .iter()
                .filter(|event| matches!(event, Event::GameEnded { .. }))
                .count();
        }

        assert_eq!(query::lives(&world), 0);
        assert_eq!(query::status(&world), GameStatus::Over);
        assert_eq!(endings, 1);
    }

    #[test]
    fn shielded_hit_consumes_obstacle_without_costing_a_life() {
        let mut world = running_world();
        world.invincibility_remaining = Duration::from_millis(500);
        world.obstacles.push(FallingEntity {
            rect: player_overlapping_rect(&world, EntityKind::Obstacle),
            variant: SpriteVariant::new(2),
        });

        let events = tick(&mut world, Duration::from_millis(1));

        assert!(query::obstacles(&world).is_empty());
        assert_eq!(query::lives(&world), STARTING_LIVES);
        assert!(events.contains(&Event::ObstacleHit {
            lives_remaining: STARTING_LIVES,
            shielded: true,
        }));
    }

    #[test]
    fn obstacle_hit_opens_invincibility_window() {
        let mut world = running_world();
        world.obstacles.push(FallingEntity {
            rect: player_overlapping_rect(&world, EntityKind::Obstacle),
            variant: SpriteVariant::new(0),
        });

        let _ = tick(&mut world, Duration::from_millis(1));

        assert_eq!(query::lives(&world), STARTING_LIVES - 1);
        assert!(query::player(&world).invincible);
    }

    #[test]
    fn power_up_grants_score_and_boost() {
        let mut world = running_world();
        world.power_ups.push(FallingEntity {
            rect: player_overlapping_rect(&world, EntityKind::PowerUp),
            variant: SpriteVariant::new(3),
        });

        let events = tick(&mut world, Duration::from_millis(1));

        assert_eq!(query::score(&world), POWER_UP_SCORE);
        assert!(query::player(&world).boosted);
        assert!(events.contains(&Event::PowerUpCollected {
            score: POWER_UP_SCORE,
        }));
    }

    #[test]
    fn boost_expires_after_its_countdown() {
        let mut world = running_world();
        let mut events = Vec::new();
        apply(&mut world, Command::BoostPlayer, &mut events);
        assert!(query::player(&world).boosted);

        let _ = tick(&mut world, Duration::from_millis(1000));
        assert!(!query::player(&world).boosted);
    }

    #[test]
    fn boosted_steps_cover_more_ground_and_revert_to_base() {
        let mut world = running_world();
        let start_x = query::player(&world).rect.x();
        let mut events = Vec::new();

        apply(&mut world, Command::BoostPlayer, &mut events);
        apply(
            &mut world,
            Command::StepPlayer {
                direction: Direction::Right,
            },
            &mut events,
        );
        let boosted_x = query::player(&world).rect.x();
        assert_eq!(boosted_x, start_x + PLAYER_BOOST_SPEED);

        let _ = tick(&mut world, Duration::from_millis(1000));
        apply(
            &mut world,
            Command::StepPlayer {
                direction: Direction::Right,
            },
            &mut events,
        );
        assert_eq!(
            query::player(&world).rect.x(),
            boosted_x + PLAYER_BASE_SPEED
        );
    }

    #[test]
    fn crown_collision_wins_without_touching_lives() {
        let mut world = running_world();
        world.crown = Some(player_overlapping_rect(&world, EntityKind::Crown));

        let events = tick(&mut world, Duration::from_millis(1));

        assert_eq!(query::status(&world), GameStatus::Won);
        assert_eq!(query::lives(&world), STARTING_LIVES);
        assert!(events.contains(&Event::GameEnded {
            outcome: GameOutcome::Won,
            score: 0,
        }));
    }

    #[test]
    fn player_movement_clamps_at_playfield_bounds() {
        let mut world = running_world();
        let mut events = Vec::new();

        for _ in 0..200 {
            apply(
                &mut world,
                Command::SlidePlayer {
                    direction: Direction::Left,
                },
                &mut events,
            );
        }
        assert_eq!(query::player(&world).rect.x(), 0.0);

        for _ in 0..200 {
            apply(
                &mut world,
                Command::SlidePlayer {
                    direction: Direction::Right,
                },
                &mut events,
            );
        }
        let playfield = query::playfield(&world);
        assert_eq!(
            query::player(&world).rect.x(),
            playfield.width() - PLAYER_WIDTH
        );
    }

    #[test]
    fn reset_restores_defaults_and_resumes_running() {
        let mut world = running_world();
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::SpawnObstacle {
                x: 50.0,
                variant: SpriteVariant::new(4),
            },
            &mut events,
        );
        apply(&mut world, Command::SpawnCrown { x: 300.0 }, &mut events);
        world.score = 70;
        world.lives = 1;
        world.distance = 420.0;

        events.clear();
        apply(&mut world, Command::Reset, &mut events);

        assert_eq!(events, vec![Event::GameReset]);
        assert_eq!(query::status(&world), GameStatus::Running);
        assert_eq!(query::score(&world), 0);
        assert_eq!(query::lives(&world), STARTING_LIVES);
        assert_eq!(query::distance(&world), 0.0);
        assert!(query::obstacles(&world).is_empty());
        assert!(query::power_ups(&world).is_empty());
        assert!(query::crown(&world).is_none());

        let playfield = query::playfield(&world);
        assert_eq!(
            query::player(&world).rect.x(),
            (playfield.width() - PLAYER_WIDTH) / 2.0
        );
    }

    #[test]
    fn configure_playfield_returns_to_ready() {
        let mut world = running_world();
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::ConfigurePlayfield {
                width: 800.0,
                height: 900.0,
            },
            &mut events,
        );

        assert_eq!(query::status(&world), GameStatus::Ready);
        let playfield = query::playfield(&world);
        assert_eq!(playfield.width(), 800.0);
        assert_eq!(playfield.height(), 900.0);
    }

    #[test]
    fn spawn_candidates_clamp_into_horizontal_bounds() {
        let mut world = running_world();
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::SpawnObstacle {
                x: 10_000.0,
                variant: SpriteVariant::new(0),
            },
            &mut events,
        );

        let snapshots = query::obstacles(&world).into_vec();
        assert_eq!(snapshots.len(), 1);
        let playfield = query::playfield(&world);
        let (width, _) = EntityKind::Obstacle.footprint();
        assert_eq!(snapshots[0].rect.x(), playfield.width() - width);
    }
}
