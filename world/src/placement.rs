//! Gap-based placement validation for newly spawned entities.
//!
//! This is a proximity exclusion, deliberately coarser than the bounding-box
//! overlap test used for collisions: a candidate is rejected when its
//! center-to-center offset from any existing entity is smaller than
//! `candidate size + gap` along *both* axes simultaneously.

use crown_rush_core::Rect;

use crate::FallingEntity;

/// Reports whether the candidate keeps the minimum gap from every existing
/// entity. The crown participates as an optional singleton.
pub(crate) fn placement_clear(
    candidate: &Rect,
    obstacles: &[FallingEntity],
    power_ups: &[FallingEntity],
    crown: Option<&Rect>,
    min_gap: f32,
) -> bool {
    if obstacles
        .iter()
        .any(|entity| within_gap(candidate, &entity.rect, min_gap))
    {
        return false;
    }

    if power_ups
        .iter()
        .any(|entity| within_gap(candidate, &entity.rect, min_gap))
    {
        return false;
    }

    match crown {
        Some(crown) => !within_gap(candidate, crown, min_gap),
        None => true,
    }
}

fn within_gap(candidate: &Rect, other: &Rect, min_gap: f32) -> bool {
    let x_too_close = (candidate.x() - other.x()).abs() < candidate.width() + min_gap;
    let y_too_close = (candidate.y() - other.y()).abs() < candidate.height() + min_gap;
    x_too_close && y_too_close
}
