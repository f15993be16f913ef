#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Crown Rush adapters.
//!
//! Backends receive a [`Presentation`] built from world snapshots and drive
//! the frame loop themselves, handing per-frame input back to the caller
//! through the `update_scene` closure of [`RenderingBackend::run`].

use anyhow::Result as AnyResult;
use crown_rush_core::{GameStatus, InputFrame, Rect, SpriteVariant};
use glam::Vec2;
use std::time::Duration;

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }

    /// Returns a new color lightened towards white by the provided amount.
    #[must_use]
    pub fn lighten(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);

        Self {
            red: lighten_channel(self.red, amount),
            green: lighten_channel(self.green, amount),
            blue: lighten_channel(self.blue, amount),
            alpha: self.alpha,
        }
    }
}

fn lighten_channel(channel: f32, amount: f32) -> f32 {
    channel + (1.0 - channel) * amount
}

/// Identifier naming one of the textures a backend must load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteKey {
    /// The player's car.
    Player,
    /// One of the falling obstacle skins.
    Obstacle(SpriteVariant),
    /// One of the collectible power-up skins.
    Item(SpriteVariant),
    /// The crown that ends the run.
    Crown,
}

impl SpriteKey {
    /// Enumerates every sprite the game can ask a backend to draw.
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut keys = vec![Self::Player, Self::Crown];
        for index in 0..SpriteVariant::COUNT {
            keys.push(Self::Obstacle(SpriteVariant::new(index)));
            keys.push(Self::Item(SpriteVariant::new(index)));
        }
        keys
    }
}

/// Capability that reports which textures have finished loading.
///
/// Backends skip sprites whose assets are still pending and hold the first
/// simulated frame until [`AssetCatalog::all_ready`] turns true.
pub trait AssetCatalog {
    /// Whether the texture behind the given key is ready to draw.
    fn is_ready(&self, key: SpriteKey) -> bool;

    /// Whether every registered texture is ready to draw.
    fn all_ready(&self) -> bool {
        SpriteKey::all().into_iter().all(|key| self.is_ready(key))
    }
}

/// Single textured quad positioned in playfield units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteInstance {
    /// Texture to sample when drawing the quad.
    pub key: SpriteKey,
    /// Top-left corner of the quad in playfield units.
    pub position: Vec2,
    /// Width and height of the quad in playfield units.
    pub size: Vec2,
    /// Multiplicative tint applied to the texture.
    pub tint: Color,
}

impl SpriteInstance {
    /// Creates an untinted sprite covering the given playfield rectangle.
    #[must_use]
    pub fn from_rect(key: SpriteKey, rect: Rect) -> Self {
        Self {
            key,
            position: Vec2::new(rect.x(), rect.y()),
            size: Vec2::new(rect.width(), rect.height()),
            tint: Color::new(1.0, 1.0, 1.0, 1.0),
        }
    }

    /// Returns the same sprite with a replacement tint.
    #[must_use]
    pub fn with_tint(self, tint: Color) -> Self {
        Self { tint, ..self }
    }
}

/// Playfield backdrop shown behind every sprite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayfieldPresentation {
    /// Width of the playfield in playfield units.
    pub width: f32,
    /// Height of the playfield in playfield units.
    pub height: f32,
    /// Fill color of the backdrop.
    pub color: Color,
}

impl PlayfieldPresentation {
    /// Creates a new playfield descriptor.
    #[must_use]
    pub const fn new(width: f32, height: f32, color: Color) -> Self {
        Self {
            width,
            height,
            color,
        }
    }
}

/// Text overlay summarising the session for the player.
#[derive(Clone, Debug, PartialEq)]
pub struct HudModel {
    /// Current score of the active session.
    pub score: u32,
    /// Lives remaining in the active session.
    pub lives: u8,
    /// Highest score ever recorded.
    pub high_score: u32,
    /// Final scores of recent sessions, oldest first.
    pub recent_scores: Vec<u32>,
    /// Lifecycle phase driving which banners are shown.
    pub status: GameStatus,
}

impl HudModel {
    /// Creates a new HUD descriptor.
    #[must_use]
    pub fn new(
        score: u32,
        lives: u8,
        high_score: u32,
        recent_scores: Vec<u32>,
        status: GameStatus,
    ) -> Self {
        Self {
            score,
            lives,
            high_score,
            recent_scores,
            status,
        }
    }
}

/// Scene description combining the playfield, its inhabitants and the HUD.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Backdrop covering the playable area.
    pub playfield: PlayfieldPresentation,
    /// The player's car.
    pub player: SpriteInstance,
    /// Obstacles currently falling through the playfield.
    pub obstacles: Vec<SpriteInstance>,
    /// Power-ups currently falling through the playfield.
    pub power_ups: Vec<SpriteInstance>,
    /// The crown, when one is on screen.
    pub crown: Option<SpriteInstance>,
    /// Text overlay drawn above the playfield.
    pub hud: HudModel,
}

impl Scene {
    /// Creates a new scene descriptor.
    #[must_use]
    pub fn new(
        playfield: PlayfieldPresentation,
        player: SpriteInstance,
        obstacles: Vec<SpriteInstance>,
        power_ups: Vec<SpriteInstance>,
        crown: Option<SpriteInstance>,
        hud: HudModel,
    ) -> Self {
        Self {
            playfield,
            player,
            obstacles,
            power_ups,
            crown,
            hud,
        }
    }

    /// Iterates over every sprite in draw order, backmost first.
    pub fn sprites(&self) -> impl Iterator<Item = &SpriteInstance> {
        self.obstacles
            .iter()
            .chain(self.power_ups.iter())
            .chain(self.crown.iter())
            .chain(std::iter::once(&self.player))
    }
}

/// Presentation descriptor consumed by rendering backends.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Title used by the created window.
    pub window_title: String,
    /// Solid color used to clear each frame.
    pub clear_color: Color,
    /// Scene content that should be displayed.
    pub scene: Scene,
}

impl Presentation {
    /// Constructs a new presentation descriptor.
    #[must_use]
    pub fn new<T>(window_title: T, clear_color: Color, scene: Scene) -> Self
    where
        T: Into<String>,
    {
        Self {
            window_title: window_title.into(),
            clear_color,
            scene,
        }
    }
}

/// Rendering backend capable of presenting Crown Rush scenes.
pub trait RenderingBackend {
    /// Runs the rendering backend until it is requested to exit.
    ///
    /// The provided `update_scene` closure receives the simulated frame
    /// delta and the input captured by the adapter, and may mutate the scene
    /// before it is rendered, allowing the caller to advance the world and
    /// republish its snapshot every frame.
    fn run<F>(self, presentation: Presentation, update_scene: F) -> AnyResult<()>
    where
        F: FnMut(Duration, InputFrame, &mut Scene) + 'static;
}
