#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots the Crown Rush experience.
//!
//! The binary wires the pure systems around the world: controls translate
//! input into commands, the world resolves each frame, spawning reacts to
//! elapsed time, and the scoreboard folds finished sessions into a history
//! persisted next to the executable.

mod score_store;

use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use clap::Parser;
use crown_rush_core::Command;
use crown_rush_rendering::{
    Color, HudModel, PlayfieldPresentation, Presentation, RenderingBackend, Scene, SpriteInstance,
    SpriteKey,
};
use crown_rush_rendering_macroquad::MacroquadBackend;
use crown_rush_system_controls::Controls;
use crown_rush_system_scoreboard::{ScoreHistory, Scoreboard};
use crown_rush_system_spawning::{Config as SpawnConfig, Spawning};
use crown_rush_world::{apply, query, World};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Backdrop color of the playable area.
const PLAYFIELD_COLOR: Color = Color::from_rgb_u8(30, 30, 46);

/// Color used to clear the window outside the playfield.
const CLEAR_COLOR: Color = Color::from_rgb_u8(18, 18, 28);

/// Crown Rush, a lane-dodging chase for the crown.
#[derive(Debug, Parser)]
#[command(name = "crown-rush", version, about)]
struct Args {
    /// Seed for the spawn schedule; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Path of the TOML file holding the score history.
    #[arg(long, default_value = "scores.toml")]
    scores: PathBuf,

    /// Width of the playfield in playfield units.
    #[arg(long, default_value_t = 400.0)]
    width: f32,

    /// Height of the playfield in playfield units.
    #[arg(long, default_value_t = 600.0)]
    height: f32,

    /// Print frame timing metrics once per second.
    #[arg(long)]
    show_fps: bool,

    /// Skip texture loading and draw flat colored shapes instead.
    #[arg(long)]
    no_sprites: bool,

    /// Render as fast as possible instead of waiting for the display.
    #[arg(long)]
    no_vsync: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut seed_rng = ChaCha8Rng::seed_from_u64(seed);
    let spawn_seed: u64 = seed_rng.gen();

    let mut world = World::new();
    let mut events = Vec::new();
    apply(
        &mut world,
        Command::ConfigurePlayfield {
            width: args.width,
            height: args.height,
        },
        &mut events,
    );

    let mut controls = Controls::new();
    let mut spawning = Spawning::new(SpawnConfig::new(spawn_seed));
    let mut scoreboard = Scoreboard::new(score_store::load(&args.scores));
    let scores_path = args.scores;

    println!("{}", query::welcome_banner(&world));
    println!("session seed: {seed}");

    let scene = build_scene(&world, scoreboard.history());
    let presentation = Presentation::new("Crown Rush", CLEAR_COLOR, scene);

    let backend = MacroquadBackend::new()
        .with_vsync(!args.no_vsync)
        .with_show_fps(args.show_fps)
        .with_sprite_loading(!args.no_sprites);

    let mut commands = Vec::new();
    backend.run(presentation, move |dt: Duration, input, scene: &mut Scene| {
        controls.handle(&input, query::status(&world), &mut commands);
        for command in commands.drain(..) {
            apply(&mut world, command, &mut events);
        }

        apply(&mut world, Command::Tick { dt }, &mut events);

        spawning.handle(
            &events,
            query::status(&world),
            query::playfield(&world).width(),
            query::crown(&world).is_some(),
            &mut commands,
        );
        for command in commands.drain(..) {
            apply(&mut world, command, &mut events);
        }

        if scoreboard.handle(&events) {
            if let Err(error) = score_store::save(&scores_path, scoreboard.history()) {
                eprintln!("failed to persist score history: {error}");
            }
        }
        events.clear();

        *scene = build_scene(&world, scoreboard.history());
    })
}

/// Rebuilds the renderable scene from the current world snapshot.
fn build_scene(world: &World, history: &ScoreHistory) -> Scene {
    let playfield = query::playfield(world);
    let backdrop =
        PlayfieldPresentation::new(playfield.width(), playfield.height(), PLAYFIELD_COLOR);

    let snapshot = query::player(world);
    let mut player = SpriteInstance::from_rect(SpriteKey::Player, snapshot.rect);
    if snapshot.invincible {
        // Translucent player signals the post-hit grace window.
        player = player.with_tint(Color::new(1.0, 1.0, 1.0, 0.5));
    }

    let obstacles = query::obstacles(world)
        .iter()
        .map(|entity| SpriteInstance::from_rect(SpriteKey::Obstacle(entity.variant), entity.rect))
        .collect();
    let power_ups = query::power_ups(world)
        .iter()
        .map(|entity| SpriteInstance::from_rect(SpriteKey::Item(entity.variant), entity.rect))
        .collect();
    let crown = query::crown(world).map(|rect| SpriteInstance::from_rect(SpriteKey::Crown, rect));

    let hud = HudModel::new(
        query::score(world),
        query::lives(world),
        history.high_score(),
        history.recent().to_vec(),
        query::status(world),
    );

    Scene::new(backdrop, player, obstacles, power_ups, crown, hud)
}
