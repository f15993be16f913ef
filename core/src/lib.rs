#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Crown Rush engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values for systems to
//! react to deterministically. Systems consume event streams, query immutable
//! snapshots, and respond exclusively with new command batches.

use std::time::Duration;

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Crown Rush.";

/// Tolerance subtracted from the axis separation test in [`Rect::overlaps`].
///
/// Rectangles within this many playfield units of touching count as
/// colliding, so grazing contact still registers as a hit.
pub const COLLISION_TOLERANCE: f32 = 5.0;

/// Axis-aligned rectangle expressed in playfield units.
///
/// The origin sits at the top-left of the playfield; `y` grows downward so
/// falling entities move toward increasing `y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Rect {
    /// Creates a new rectangle from its top-left corner and dimensions.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Horizontal position of the rectangle's left edge.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Vertical position of the rectangle's top edge.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// Width of the rectangle in playfield units.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Height of the rectangle in playfield units.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Returns a copy of the rectangle repositioned to the provided x.
    #[must_use]
    pub const fn at_x(&self, x: f32) -> Self {
        Self {
            x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }

    /// Returns a copy of the rectangle shifted down by the provided amount.
    #[must_use]
    pub fn dropped_by(&self, dy: f32) -> Self {
        Self {
            x: self.x,
            y: self.y + dy,
            width: self.width,
            height: self.height,
        }
    }

    /// Reports whether two rectangles overlap within [`COLLISION_TOLERANCE`].
    ///
    /// The rectangles overlap when neither is fully separated along x or y
    /// once the tolerance is subtracted from the separation test. The test is
    /// symmetric: `a.overlaps(&b) == b.overlaps(&a)`.
    #[must_use]
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.x > other.x + other.width + COLLISION_TOLERANCE
            || self.x + self.width + COLLISION_TOLERANCE < other.x
            || self.y > other.y + other.height + COLLISION_TOLERANCE
            || self.y + self.height + COLLISION_TOLERANCE < other.y)
    }
}

/// Horizontal movement directions available to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Movement toward decreasing x.
    Left,
    /// Movement toward increasing x.
    Right,
}

impl Direction {
    /// Sign applied to a movement magnitude along the x axis.
    #[must_use]
    pub const fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Lifecycle phase of a game session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Pre-start state with empty entity collections.
    Ready,
    /// Simulation is active and ticking.
    Running,
    /// Terminal state reached by losing the last life.
    Over,
    /// Terminal state reached by collecting the crown.
    Won,
}

impl GameStatus {
    /// Reports whether the session has ended and awaits an explicit reset.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Over | Self::Won)
    }
}

/// Final result of a completed game session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    /// The player collected the crown.
    Won,
    /// The player ran out of lives.
    Lost,
}

/// Classes of falling entities managed by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Costs a life on contact.
    Obstacle,
    /// Grants a speed boost and score on contact.
    PowerUp,
    /// Singleton item whose collection wins the game.
    Crown,
}

impl EntityKind {
    /// Fixed footprint of the entity class as `(width, height)`.
    #[must_use]
    pub const fn footprint(self) -> (f32, f32) {
        match self {
            Self::Obstacle => (50.0, 100.0),
            Self::PowerUp => (30.0, 30.0),
            Self::Crown => (40.0, 40.0),
        }
    }
}

/// Index selecting one of the visual variants for obstacles and power-ups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpriteVariant(u8);

impl SpriteVariant {
    /// Number of distinct visual variants per entity class.
    pub const COUNT: u8 = 5;

    /// Creates a variant index, wrapping values beyond [`Self::COUNT`].
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value % Self::COUNT)
    }

    /// Retrieves the numeric representation of the variant.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Variant expressed as a zero-based index usable for array lookups.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Input snapshot gathered by an adapter over a single frame.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct InputFrame {
    /// Whether a discrete step-left command was issued this frame.
    pub step_left: bool,
    /// Whether a discrete step-right command was issued this frame.
    pub step_right: bool,
    /// Horizontal drag distance accumulated since the previous frame.
    pub swipe_delta: f32,
    /// Whether a touch release requested a speed boost this frame.
    pub boost_tap: bool,
    /// Whether the start affordance was activated this frame.
    pub start: bool,
    /// Whether the restart affordance was activated this frame.
    pub restart: bool,
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Configures the playfield dimensions and resets the session.
    ConfigurePlayfield {
        /// Width of the playfield in playfield units.
        width: f32,
        /// Height of the playfield in playfield units.
        height: f32,
    },
    /// Begins the simulation from the pre-start state.
    Start,
    /// Restores defaults and returns the session to the running state.
    Reset,
    /// Advances the simulation clock by the provided delta time.
    Tick {
        /// Duration of simulated time that elapsed since the previous tick.
        dt: Duration,
    },
    /// Moves the player one speed-scaled step in the given direction.
    StepPlayer {
        /// Direction of travel for the step.
        direction: Direction,
    },
    /// Moves the player one fixed-width slide in the given direction.
    SlidePlayer {
        /// Direction of travel for the slide.
        direction: Direction,
    },
    /// Starts a timed speed boost for the player.
    BoostPlayer,
    /// Requests placement of a new obstacle above the visible area.
    SpawnObstacle {
        /// Horizontal position proposed for the obstacle.
        x: f32,
        /// Visual variant assigned to the obstacle.
        variant: SpriteVariant,
    },
    /// Requests placement of a new power-up above the visible area.
    SpawnPowerUp {
        /// Horizontal position proposed for the power-up.
        x: f32,
        /// Visual variant assigned to the power-up.
        variant: SpriteVariant,
    },
    /// Requests placement of the crown above the visible area.
    SpawnCrown {
        /// Horizontal position proposed for the crown.
        x: f32,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Indicates that the simulation clock advanced.
    TimeAdvanced {
        /// Duration of simulated time that elapsed in the tick.
        dt: Duration,
    },
    /// Confirms that the session left the pre-start state.
    GameStarted,
    /// Confirms that the session was restored to defaults.
    GameReset,
    /// Reports the player's position after a step or slide.
    PlayerMoved {
        /// Horizontal position of the player's left edge after moving.
        x: f32,
    },
    /// Confirms that an obstacle was placed into the world.
    ObstacleSpawned {
        /// Region occupied by the new obstacle.
        rect: Rect,
        /// Visual variant assigned to the obstacle.
        variant: SpriteVariant,
    },
    /// Confirms that a power-up was placed into the world.
    PowerUpSpawned {
        /// Region occupied by the new power-up.
        rect: Rect,
        /// Visual variant assigned to the power-up.
        variant: SpriteVariant,
    },
    /// Confirms that the crown was placed into the world.
    CrownSpawned {
        /// Region occupied by the crown.
        rect: Rect,
    },
    /// Reports that a spawn request was rejected by placement validation.
    SpawnRejected {
        /// Class of entity whose placement failed.
        kind: EntityKind,
    },
    /// Reports that the player collided with an obstacle.
    ObstacleHit {
        /// Lives remaining after resolving the collision.
        lives_remaining: u8,
        /// Whether the invincibility window absorbed the hit.
        shielded: bool,
    },
    /// Reports that the player collected a power-up.
    PowerUpCollected {
        /// Total score after the pickup bonus.
        score: u32,
    },
    /// Announces that the session reached a terminal state.
    GameEnded {
        /// Final result of the session.
        outcome: GameOutcome,
        /// Final score recorded for the session.
        score: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::{Direction, EntityKind, GameStatus, Rect, SpriteVariant};

    #[test]
    fn overlap_is_symmetric() {
        let cases = [
            (Rect::new(0.0, 0.0, 50.0, 100.0), Rect::new(30.0, 80.0, 50.0, 100.0)),
            (Rect::new(0.0, 0.0, 50.0, 100.0), Rect::new(200.0, 0.0, 30.0, 30.0)),
            (Rect::new(10.0, 10.0, 40.0, 40.0), Rect::new(54.0, 10.0, 40.0, 40.0)),
        ];

        for (a, b) in cases {
            assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }
    }

    #[test]
    fn overlap_tolerance_counts_near_touches_as_hits() {
        let player = Rect::new(0.0, 0.0, 50.0, 100.0);
        let near = Rect::new(54.0, 0.0, 50.0, 100.0);
        let far = Rect::new(56.0, 0.0, 50.0, 100.0);

        assert!(player.overlaps(&near));
        assert!(!player.overlaps(&far));
    }

    #[test]
    fn overlap_separates_along_y() {
        let a = Rect::new(0.0, 0.0, 50.0, 100.0);
        let b = Rect::new(0.0, 110.0, 50.0, 100.0);

        assert!(!a.overlaps(&b));
    }

    #[test]
    fn sprite_variant_wraps_past_count() {
        assert_eq!(SpriteVariant::new(3).get(), 3);
        assert_eq!(SpriteVariant::new(SpriteVariant::COUNT).get(), 0);
        assert_eq!(SpriteVariant::new(7).index(), 2);
    }

    #[test]
    fn footprints_match_entity_classes() {
        assert_eq!(EntityKind::Obstacle.footprint(), (50.0, 100.0));
        assert_eq!(EntityKind::PowerUp.footprint(), (30.0, 30.0));
        assert_eq!(EntityKind::Crown.footprint(), (40.0, 40.0));
    }

    #[test]
    fn terminal_states_cover_over_and_won() {
        assert!(GameStatus::Over.is_terminal());
        assert!(GameStatus::Won.is_terminal());
        assert!(!GameStatus::Ready.is_terminal());
        assert!(!GameStatus::Running.is_terminal());
    }

    #[test]
    fn direction_signs_oppose() {
        assert_eq!(Direction::Left.sign(), -1.0);
        assert_eq!(Direction::Right.sign(), 1.0);
    }
}
