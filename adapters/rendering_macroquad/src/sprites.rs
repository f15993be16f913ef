use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use crown_rush_core::SpriteVariant;
use crown_rush_rendering::{AssetCatalog, Color, SpriteKey};
use glam::Vec2;
use macroquad::{
    math::Vec2 as MacroquadVec2,
    texture::{self, DrawTextureParams, Texture2D},
};

use crate::to_macroquad_color;

const SUPPORTED_MANIFEST_VERSION: u32 = 1;

/// Parameters describing how a sprite should be drawn on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct DrawParams {
    /// Position in screen-space pixels where the sprite's top-left corner is placed.
    pub position: Vec2,
    /// Desired size in screen-space pixels.
    pub scale: Vec2,
    /// Tint applied to the sprite.
    pub tint: Color,
}

impl DrawParams {
    /// Creates draw parameters anchored at the provided position and scale.
    #[must_use]
    pub(crate) fn new(position: Vec2, scale: Vec2) -> Self {
        Self {
            position,
            scale,
            tint: Color::new(1.0, 1.0, 1.0, 1.0),
        }
    }

    /// Overrides the tint colour used when drawing the sprite.
    #[must_use]
    pub(crate) fn with_tint(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }
}

/// Cache of textures loaded from the sprite manifest.
#[derive(Debug)]
pub(crate) struct SpriteAtlas {
    textures: HashMap<SpriteKey, Texture2D>,
}

impl SpriteAtlas {
    /// Loads the default sprite manifest from disk.
    pub(crate) fn from_default_manifest() -> Result<Self> {
        Self::from_manifest_path(Self::default_manifest_path())
    }

    /// Loads sprites from the manifest located at the provided path.
    pub(crate) fn from_manifest_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_manifest_with_loader(path, default_loader)
    }

    /// Returns the default manifest path relative to the repository root.
    #[must_use]
    pub(crate) fn default_manifest_path() -> PathBuf {
        PathBuf::from("assets/manifest.toml")
    }

    /// Draws the requested sprite using the supplied parameters.
    pub(crate) fn draw(&self, key: SpriteKey, params: DrawParams) -> Result<()> {
        let texture = *self
            .textures
            .get(&key)
            .with_context(|| format!("sprite {key:?} missing from atlas"))?;

        let dest_size = MacroquadVec2::new(params.scale.x, params.scale.y);
        let draw_params = DrawTextureParams {
            dest_size: Some(dest_size),
            ..DrawTextureParams::default()
        };

        texture::draw_texture_ex(
            texture,
            params.position.x,
            params.position.y,
            to_macroquad_color(params.tint),
            draw_params,
        );

        Ok(())
    }

    /// Returns whether the atlas contains the provided key.
    #[must_use]
    pub(crate) fn contains(&self, key: SpriteKey) -> bool {
        self.textures.contains_key(&key)
    }

    fn from_manifest_with_loader(
        path: impl AsRef<Path>,
        mut loader: impl FnMut(SpriteKey, &Path) -> Result<Texture2D>,
    ) -> Result<Self> {
        let manifest_path = path.as_ref();
        let contents = fs::read_to_string(manifest_path).with_context(|| {
            format!(
                "failed to read sprite manifest at {}",
                manifest_path.display()
            )
        })?;
        let base = manifest_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let entries = parse_manifest(&contents, &base)?;
        Self::from_entries(entries, &mut loader)
    }

    fn from_entries(
        entries: Vec<(SpriteKey, PathBuf)>,
        loader: &mut impl FnMut(SpriteKey, &Path) -> Result<Texture2D>,
    ) -> Result<Self> {
        let mut textures = HashMap::with_capacity(entries.len());
        for (key, path) in entries {
            let texture = loader(key, &path).with_context(|| {
                format!("failed to load sprite {key:?} from {}", path.display())
            })?;
            if textures.insert(key, texture).is_some() {
                bail!("duplicate sprite entry for {key:?}");
            }
        }
        Ok(Self { textures })
    }
}

impl AssetCatalog for SpriteAtlas {
    fn is_ready(&self, key: SpriteKey) -> bool {
        self.contains(key)
    }
}

fn default_loader(_key: SpriteKey, path: &Path) -> Result<Texture2D> {
    let bytes = fs::read(path)
        .with_context(|| format!("failed to read sprite asset at {}", path.display()))?;
    Ok(Texture2D::from_file_with_format(&bytes, None))
}

#[derive(Debug, serde::Deserialize)]
struct Manifest {
    version: u32,
    sprites: HashMap<String, String>,
}

fn parse_manifest(contents: &str, base_path: &Path) -> Result<Vec<(SpriteKey, PathBuf)>> {
    let manifest: Manifest =
        toml::from_str(contents).context("failed to parse sprite manifest toml contents")?;
    if manifest.version != SUPPORTED_MANIFEST_VERSION {
        bail!(
            "unsupported sprite manifest version {}; expected {}",
            manifest.version,
            SUPPORTED_MANIFEST_VERSION
        );
    }

    let mut resolved = HashMap::new();
    for (name, relative_path) in manifest.sprites {
        let key = parse_sprite_key(&name)
            .with_context(|| format!("unknown sprite key `{name}` in manifest"))?;
        let path = base_path.join(relative_path);
        if resolved.insert(key, path).is_some() {
            bail!("sprite manifest contains duplicate entry for {key:?}");
        }
    }

    let all_keys = SpriteKey::all();
    let mut ordered = Vec::with_capacity(all_keys.len());
    for key in all_keys {
        let Some(path) = resolved.remove(&key) else {
            bail!("sprite manifest missing entry for {key:?}");
        };
        ordered.push((key, path));
    }

    if !resolved.is_empty() {
        let unexpected = resolved
            .into_keys()
            .map(|key| format!("{key:?}"))
            .collect::<Vec<_>>()
            .join(", ");
        bail!("sprite manifest contains unexpected keys: {unexpected}");
    }

    Ok(ordered)
}

fn parse_sprite_key(name: &str) -> Result<SpriteKey> {
    if name == "Player" {
        return Ok(SpriteKey::Player);
    }
    if name == "Crown" {
        return Ok(SpriteKey::Crown);
    }
    if let Some(index) = name.strip_prefix("Obstacle") {
        return Ok(SpriteKey::Obstacle(parse_variant(index)?));
    }
    if let Some(index) = name.strip_prefix("Item") {
        return Ok(SpriteKey::Item(parse_variant(index)?));
    }
    bail!("unknown sprite key `{name}`")
}

fn parse_variant(index: &str) -> Result<SpriteVariant> {
    let index: u8 = index
        .parse()
        .with_context(|| format!("sprite variant index `{index}` is not a number"))?;
    if index >= SpriteVariant::COUNT {
        bail!(
            "sprite variant index {index} out of range; expected 0..{}",
            SpriteVariant::COUNT
        );
    }
    Ok(SpriteVariant::new(index))
}
