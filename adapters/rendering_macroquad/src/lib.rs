#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Macroquad-backed rendering adapter for Crown Rush.
//!
//! Macroquad's optional audio stack depends on native ALSA development
//! libraries, which are unavailable in the containerised CI environment.
//! To keep `cargo test` usable everywhere we depend on macroquad without its
//! default `audio` feature. Consumers that need sound playback can opt back
//! in by enabling `macroquad/audio` in their own `Cargo.toml` dependency
//! specification.

mod sprites;

use anyhow::{Context, Result};
use crown_rush_core::{GameStatus, InputFrame};
use crown_rush_rendering::{
    AssetCatalog, Color, Presentation, RenderingBackend, Scene, SpriteInstance, SpriteKey,
};
use glam::Vec2;
use macroquad::input::{
    is_key_down, is_key_pressed, is_mouse_button_down, is_mouse_button_pressed,
    is_mouse_button_released, mouse_position, KeyCode, MouseButton,
};
use std::{sync::mpsc, time::Duration};

use self::sprites::{DrawParams, SpriteAtlas};

/// Vertical space reserved above the playfield for the score readouts.
const HUD_HEIGHT: f32 = 120.0;

/// Pointer travel below this many pixels counts as a tap rather than a swipe.
const TAP_SLOP: f32 = 8.0;

/// Snapshot of keyboard input observed during a single frame.
///
/// Vertical keys (`W`/`S` and the up/down arrows) are ignored: the car only
/// moves horizontally.
#[derive(Clone, Copy, Debug, Default)]
struct KeyboardShortcuts {
    /// `Q` or `Escape` to quit the game loop.
    quit_requested: bool,
    /// `A` or the left arrow held to steer left.
    steer_left: bool,
    /// `D` or the right arrow held to steer right.
    steer_right: bool,
    /// `Enter` starts a fresh session from the title state.
    start_pressed: bool,
    /// `R` restarts after a finished session.
    restart_pressed: bool,
    /// `Space` requests a speed boost.
    boost_pressed: bool,
}

impl KeyboardShortcuts {
    fn poll() -> Self {
        let quit_requested = is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q);
        let steer_left = is_key_down(KeyCode::Left) || is_key_down(KeyCode::A);
        let steer_right = is_key_down(KeyCode::Right) || is_key_down(KeyCode::D);
        let start_pressed = is_key_pressed(KeyCode::Enter);
        let restart_pressed = is_key_pressed(KeyCode::R);
        let boost_pressed = is_key_pressed(KeyCode::Space);

        Self {
            quit_requested,
            steer_left,
            steer_right,
            start_pressed,
            restart_pressed,
            boost_pressed,
        }
    }
}

/// Tracks an in-progress pointer drag so it can be replayed as swipe deltas.
///
/// Mouse input stands in for touch on desktop: a held button dragging
/// horizontally produces swipe movement, while a press released without
/// meaningful travel counts as a boost tap.
#[derive(Clone, Copy, Debug, Default)]
struct PointerState {
    dragging: bool,
    last_x: f32,
    travelled: f32,
}

impl PointerState {
    /// Consumes this frame's pointer events, returning the horizontal swipe
    /// delta and whether a tap completed.
    fn sample(&mut self) -> (f32, bool) {
        let (cursor_x, _) = mouse_position();

        if is_mouse_button_pressed(MouseButton::Left) {
            self.dragging = true;
            self.last_x = cursor_x;
            self.travelled = 0.0;
            return (0.0, false);
        }

        if self.dragging && is_mouse_button_down(MouseButton::Left) {
            let delta = cursor_x - self.last_x;
            self.last_x = cursor_x;
            self.travelled += delta.abs();
            return (delta, false);
        }

        if self.dragging && is_mouse_button_released(MouseButton::Left) {
            self.dragging = false;
            let tapped = self.travelled < TAP_SLOP;
            return (0.0, tapped);
        }

        (0.0, false)
    }
}

/// Rendering backend implemented on top of macroquad.
#[derive(Debug)]
pub struct MacroquadBackend {
    swap_interval: Option<i32>,
    show_fps: bool,
    load_sprites: bool,
}

impl Default for MacroquadBackend {
    fn default() -> Self {
        Self {
            swap_interval: None,
            show_fps: false,
            load_sprites: true,
        }
    }
}

impl MacroquadBackend {
    /// Returns a backend that requests the platform's default swap interval.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the backend to request a specific swap interval from the platform.
    #[must_use]
    pub fn with_swap_interval(mut self, swap_interval: Option<i32>) -> Self {
        self.swap_interval = swap_interval;
        self
    }

    /// Configures the backend to either synchronise presentation with the display refresh rate
    /// or render as fast as possible.
    #[must_use]
    pub fn with_vsync(self, enabled: bool) -> Self {
        let swap_interval = if enabled { Some(1) } else { Some(0) };
        self.with_swap_interval(swap_interval)
    }

    /// Configures whether the backend prints frame timing metrics once per second.
    #[must_use]
    pub fn with_show_fps(mut self, show: bool) -> Self {
        self.show_fps = show;
        self
    }

    /// Configures whether the backend should attempt to load sprite assets.
    ///
    /// With loading disabled every sprite falls back to a flat colored
    /// rectangle, keeping the game playable without textures on disk.
    #[must_use]
    pub fn with_sprite_loading(mut self, enabled: bool) -> Self {
        self.load_sprites = enabled;
        self
    }
}

#[derive(Debug, Default)]
struct FpsCounter {
    elapsed: Duration,
    frames: u32,
}

impl FpsCounter {
    /// Records a rendered frame and returns the average once a second elapsed.
    fn record_frame(&mut self, frame: Duration) -> Option<f32> {
        self.elapsed += frame;
        self.frames = self.frames.saturating_add(1);

        if self.elapsed < Duration::from_secs(1) {
            return None;
        }

        let per_second = self.frames as f32 / self.elapsed.as_secs_f32();
        self.elapsed = Duration::ZERO;
        self.frames = 0;
        Some(per_second)
    }
}

impl RenderingBackend for MacroquadBackend {
    fn run<F>(self, presentation: Presentation, mut update_scene: F) -> Result<()>
    where
        F: FnMut(Duration, InputFrame, &mut Scene) + 'static,
    {
        let Self {
            swap_interval,
            show_fps,
            load_sprites,
        } = self;

        let Presentation {
            window_title,
            clear_color,
            scene,
        } = presentation;

        let mut config = macroquad::window::Conf {
            window_title,
            window_width: scene.playfield.width.round() as i32,
            window_height: (scene.playfield.height + HUD_HEIGHT).round() as i32,
            ..macroquad::window::Conf::default()
        };
        if let Some(swap_interval) = swap_interval {
            config.platform.swap_interval = Some(swap_interval);
        }

        let (atlas_init_sender, atlas_init_receiver) = mpsc::channel::<Result<()>>();

        macroquad::Window::from_config(config, async move {
            let mut init_sender = Some(atlas_init_sender);
            let mut scene = scene;

            let sprite_atlas = if load_sprites {
                match SpriteAtlas::from_default_manifest()
                    .context("failed to initialise sprite atlas")
                {
                    Ok(atlas) => Some(atlas),
                    Err(error) => {
                        if let Some(sender) = init_sender.take() {
                            let _ = sender.send(Err(error));
                        }
                        return;
                    }
                }
            } else {
                None
            };

            if let Some(sender) = init_sender.take() {
                let _ = sender.send(Ok(()));
            }

            let background = to_macroquad_color(clear_color);
            let mut fps_counter = FpsCounter::default();
            let mut pointer = PointerState::default();

            loop {
                let keyboard = KeyboardShortcuts::poll();
                if keyboard.quit_requested {
                    break;
                }

                macroquad::window::clear_background(background);

                let dt_seconds = macroquad::time::get_frame_time();
                let frame_dt = Duration::from_secs_f32(dt_seconds.max(0.0));

                // Hold the simulation until every texture is available so the
                // first visible frame is fully drawn.
                let assets_ready = sprite_atlas
                    .as_ref()
                    .map(SpriteAtlas::all_ready)
                    .unwrap_or(true);
                if !assets_ready {
                    macroquad::text::draw_text("Loading...", 20.0, 40.0, 28.0, macroquad::color::WHITE);
                    macroquad::window::next_frame().await;
                    continue;
                }

                let (swipe_delta, boost_tap) = pointer.sample();
                let frame_input = InputFrame {
                    step_left: keyboard.steer_left,
                    step_right: keyboard.steer_right,
                    swipe_delta,
                    boost_tap: boost_tap || keyboard.boost_pressed,
                    start: keyboard.start_pressed,
                    restart: keyboard.restart_pressed,
                };

                update_scene(frame_dt, frame_input, &mut scene);

                let metrics = SceneMetrics::from_scene(
                    &scene,
                    macroquad::window::screen_width(),
                    macroquad::window::screen_height(),
                );

                draw_playfield(&scene, &metrics);
                for sprite in scene.sprites() {
                    draw_sprite(sprite, &metrics, sprite_atlas.as_ref());
                }
                draw_hud(&scene, &metrics);

                if show_fps {
                    if let Some(per_second) = fps_counter.record_frame(frame_dt) {
                        println!("FPS: {per_second:.2}");
                    }
                } else {
                    let _ = fps_counter.record_frame(frame_dt);
                }

                macroquad::window::next_frame().await;
            }
        });

        atlas_init_receiver.recv().unwrap_or_else(|_| Ok(()))?;

        Ok(())
    }
}

/// Mapping from playfield units to screen pixels for the current frame.
#[derive(Clone, Copy, Debug)]
struct SceneMetrics {
    scale: f32,
    offset_x: f32,
    offset_y: f32,
}

impl SceneMetrics {
    fn from_scene(scene: &Scene, screen_width: f32, screen_height: f32) -> Self {
        let field_width = scene.playfield.width.max(1.0);
        let field_height = scene.playfield.height.max(1.0);
        let available_height = (screen_height - HUD_HEIGHT).max(1.0);

        let scale = (screen_width / field_width).min(available_height / field_height);
        let offset_x = (screen_width - field_width * scale) * 0.5;
        let offset_y = HUD_HEIGHT + (available_height - field_height * scale) * 0.5;

        Self {
            scale,
            offset_x,
            offset_y,
        }
    }

    fn project(&self, position: Vec2) -> Vec2 {
        Vec2::new(
            self.offset_x + position.x * self.scale,
            self.offset_y + position.y * self.scale,
        )
    }
}

fn draw_playfield(scene: &Scene, metrics: &SceneMetrics) {
    let origin = metrics.project(Vec2::ZERO);
    macroquad::shapes::draw_rectangle(
        origin.x,
        origin.y,
        scene.playfield.width * metrics.scale,
        scene.playfield.height * metrics.scale,
        to_macroquad_color(scene.playfield.color),
    );
}

fn draw_sprite(sprite: &SpriteInstance, metrics: &SceneMetrics, atlas: Option<&SpriteAtlas>) {
    let position = metrics.project(sprite.position);
    let scale = sprite.size * metrics.scale;

    if let Some(atlas) = atlas {
        if atlas.is_ready(sprite.key) {
            let params = DrawParams::new(position, scale).with_tint(sprite.tint);
            if atlas.draw(sprite.key, params).is_ok() {
                return;
            }
        }
    }

    let untinted = Color::new(1.0, 1.0, 1.0, 1.0);
    let fill = if sprite.tint == untinted {
        fallback_color(sprite.key)
    } else {
        fallback_color(sprite.key).lighten(0.5)
    };
    macroquad::shapes::draw_rectangle(
        position.x,
        position.y,
        scale.x,
        scale.y,
        to_macroquad_color(fill),
    );
}

/// Flat stand-in colors used when textures are unavailable.
fn fallback_color(key: SpriteKey) -> Color {
    match key {
        SpriteKey::Player => Color::from_rgb_u8(66, 135, 245),
        SpriteKey::Obstacle(_) => Color::from_rgb_u8(205, 66, 66),
        SpriteKey::Item(_) => Color::from_rgb_u8(80, 200, 120),
        SpriteKey::Crown => Color::from_rgb_u8(240, 200, 60),
    }
}

fn draw_hud(scene: &Scene, metrics: &SceneMetrics) {
    let hud = &scene.hud;
    let white = macroquad::color::WHITE;

    macroquad::text::draw_text(&format!("Score: {}", hud.score), 20.0, 30.0, 24.0, white);
    macroquad::text::draw_text(&format!("Lives: {}", hud.lives), 20.0, 58.0, 24.0, white);
    macroquad::text::draw_text(
        &format!("High score: {}", hud.high_score),
        20.0,
        86.0,
        24.0,
        white,
    );

    if !hud.recent_scores.is_empty() {
        let recent = hud
            .recent_scores
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        macroquad::text::draw_text(&format!("Recent: {recent}"), 20.0, 110.0, 18.0, white);
    }

    let center_x = metrics.offset_x + scene.playfield.width * metrics.scale * 0.5;
    let center_y = metrics.offset_y + scene.playfield.height * metrics.scale * 0.5;
    match hud.status {
        GameStatus::Ready => {
            draw_banner("Crown Rush", center_x, center_y - 24.0, 40.0);
            draw_banner("Press Enter to start", center_x, center_y + 16.0, 24.0);
        }
        GameStatus::Over => {
            draw_banner("Game over", center_x, center_y - 24.0, 40.0);
            draw_banner("Press R to play again", center_x, center_y + 16.0, 24.0);
        }
        GameStatus::Won => {
            draw_banner("You caught the crown!", center_x, center_y - 24.0, 40.0);
            draw_banner("Press R to play again", center_x, center_y + 16.0, 24.0);
        }
        GameStatus::Running => {}
    }
}

fn draw_banner(text: &str, center_x: f32, baseline_y: f32, font_size: f32) {
    let dimensions = macroquad::text::measure_text(text, None, font_size as u16, 1.0);
    macroquad::text::draw_text(
        text,
        center_x - dimensions.width * 0.5,
        baseline_y,
        font_size,
        macroquad::color::WHITE,
    );
}

pub(crate) fn to_macroquad_color(color: Color) -> macroquad::color::Color {
    macroquad::color::Color::new(color.red, color.green, color.blue, color.alpha)
}
