//! LPC spritesheet layout.
//!
//! Characters use the "Liberated Pixel Cup" sheet convention: a grid of
//! fixed-size frames, one animation per row block, four directional sub-rows
//! per animation. This module knows that layout and nothing else - it turns
//! an ordered list of [`AnimationDef`]s into the frame reels each
//! (animation, direction) pair occupies, plus the texture load requests a
//! renderer has to perform.
//!
//! # Sheet Geometry
//!
//! - Regular frames are 64x64. A row holds 13 frames on a plain sheet and 24
//!   on a sheet that carries an oversize animation (the wider grid leaves
//!   blank spots, since most animations do not fill a full row).
//! - Oversize animations (a slash or thrust whose swing exceeds the 64x64
//!   box) are sampled a second time from the same image at 192x192. In that
//!   coarser grid the first oversize row is frame 56 and each directional row
//!   is 8 frames apart.
//!
//! # Related
//!
//! - [`crate::resources::clipstore::ClipStore`] – registers the reels as
//!   playable clips
//! - [`crate::components::facing::Facing`] – resolves a [`Direction`] from
//!   velocity

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Frames per row on a sheet without an oversize animation.
pub const REGULAR_ROW_SIZE: u32 = 13;
/// Frames per row on a sheet that carries an oversize animation.
pub const OVERSIZE_ROW_SIZE: u32 = 24;
/// First frame of the oversize grid (an 8x11 grid laid over the same image).
pub const OVERSIZE_START_FRAME: u32 = 56;
/// Distance between directional rows in the oversize grid.
pub const OVERSIZE_ROW_STRIDE: u32 = 8;
/// Side of a regular frame in pixels.
pub const FRAME_SIZE: u32 = 64;
/// Oversize frames are sampled at this multiple of [`FRAME_SIZE`].
pub const OVERSIZE_SCALE: u32 = 3;

/// The animation types an LPC sheet provides, in sheet row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimName {
    SpellCast,
    Thrust,
    Walk,
    Slash,
    Shoot,
}

impl AnimName {
    /// Name fragment used in clip keys, e.g. `wizard_spell_cast_up`.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimName::SpellCast => "spell_cast",
            AnimName::Thrust => "thrust",
            AnimName::Walk => "walk",
            AnimName::Slash => "slash",
            AnimName::Shoot => "shoot",
        }
    }
}

/// A facing/row direction. The numeric order of [`Direction::REGISTRY_ORDER`]
/// is the row order on the sheet and the order clips are registered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Sheet row order. This is a contract: clip registration and the reel
    /// cursor both walk directions in exactly this order.
    pub const REGISTRY_ORDER: [Direction; 4] =
        [Direction::Up, Direction::Left, Direction::Down, Direction::Right];

    /// Name fragment used in clip keys, e.g. `wizard_walk_left`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// One animation row block: how many frames it has, how it repeats and how
/// long one playthrough takes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationDef {
    pub name: AnimName,
    /// Frames per directional row. Must be positive and fit the row size.
    pub num_of_frames: u32,
    /// Extra playthroughs after the first; -1 loops forever.
    pub loop_count: i32,
    /// Duration of one playthrough in milliseconds.
    pub duration_ms: u32,
}

/// The standard LPC animation table. Order matters: it fixes the row offset
/// each animation gets on the sheet.
pub const LPC_ANIMATIONS: [AnimationDef; 5] = [
    AnimationDef { name: AnimName::SpellCast, num_of_frames: 7, loop_count: 1, duration_ms: 500 },
    AnimationDef { name: AnimName::Thrust, num_of_frames: 8, loop_count: 1, duration_ms: 500 },
    AnimationDef { name: AnimName::Walk, num_of_frames: 9, loop_count: -1, duration_ms: 500 },
    AnimationDef { name: AnimName::Slash, num_of_frames: 6, loop_count: 1, duration_ms: 500 },
    AnimationDef { name: AnimName::Shoot, num_of_frames: 13, loop_count: 1, duration_ms: 500 },
];

/// A character sheet to register, usually read from `assets/sheets.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetDescriptor {
    /// Unique texture key, e.g. `"fighter"`.
    pub texture: String,
    /// Where the renderer finds the image.
    pub image_url: String,
    /// Animation rendered at 3x scale from the oversize grid, if any.
    #[serde(default)]
    pub oversize: Option<AnimName>,
}

/// A texture load the rendering collaborator must perform before any clip of
/// the sheet can be drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetLoad {
    pub texture_key: String,
    pub image_url: String,
    pub frame_width: u32,
    pub frame_height: u32,
    pub start_frame: u32,
}

/// The frame indices one (animation, direction) pair occupies.
#[derive(Debug, Clone, PartialEq)]
pub struct Reel {
    pub anim: AnimName,
    pub direction: Direction,
    /// Absolute frame indices, in playback order.
    pub frames: SmallVec<[u32; 16]>,
    /// True when the frames index into the `_oversize` texture.
    pub oversize: bool,
}

/// Texture key of the 3x-scale companion sheet.
pub fn oversize_texture_key(texture: &str) -> String {
    format!("{texture}_oversize")
}

/// Compose the clip key for a (texture, animation, direction) triple.
pub fn clip_key(texture: &str, anim: AnimName, direction: Direction) -> String {
    format!("{texture}_{}_{}", anim.as_str(), direction.as_str())
}

/// Row capacity for a sheet with or without an oversize animation.
pub fn max_row_size(has_oversize: bool) -> u32 {
    if has_oversize { OVERSIZE_ROW_SIZE } else { REGULAR_ROW_SIZE }
}

/// Compute the frame reel of every (animation, direction) pair of a sheet.
///
/// A single cursor walks the sheet one row per (animation, direction) pair,
/// advancing by the row capacity every time - including for oversize rows, so
/// the animations after the override stay row-aligned. Oversize rows draw
/// their frames from a second cursor that starts at
/// [`OVERSIZE_START_FRAME`] and moves [`OVERSIZE_ROW_STRIDE`] per direction
/// no matter how many frames the animation actually has.
///
/// Pure layout computation: nothing is registered here.
pub fn build_reels(defs: &[AnimationDef], oversize: Option<AnimName>) -> Vec<Reel> {
    let row_size = max_row_size(oversize.is_some());
    let mut last_index: u32 = 0;
    let mut last_oversize_index: u32 = OVERSIZE_START_FRAME;

    let mut reels = Vec::with_capacity(defs.len() * Direction::REGISTRY_ORDER.len());
    for def in defs {
        let is_oversize = oversize == Some(def.name);
        for direction in Direction::REGISTRY_ORDER {
            let mut frames: SmallVec<[u32; 16]> = SmallVec::new();
            if !is_oversize {
                // The guard is the animation's own frame count, never the row
                // capacity, so a reel cannot spill into the next row.
                for r in last_index..last_index + row_size {
                    if r < last_index + def.num_of_frames {
                        frames.push(r);
                    }
                }
            } else {
                for r in last_oversize_index..last_oversize_index + def.num_of_frames {
                    frames.push(r);
                }
                last_oversize_index += OVERSIZE_ROW_STRIDE;
            }

            // Always advance, even for oversize rows, to skip the gap the
            // override leaves in the regular grid.
            last_index += row_size;

            reels.push(Reel { anim: def.name, direction, frames, oversize: is_oversize });
        }
    }
    reels
}

/// The texture loads a sheet needs: the base 64x64 grid, plus the 192x192
/// grid starting at frame 56 when an oversize animation is configured.
pub fn sheet_loads(sheet: &SheetDescriptor) -> Vec<SheetLoad> {
    let mut loads = vec![SheetLoad {
        texture_key: sheet.texture.clone(),
        image_url: sheet.image_url.clone(),
        frame_width: FRAME_SIZE,
        frame_height: FRAME_SIZE,
        start_frame: 0,
    }];
    if sheet.oversize.is_some() {
        loads.push(SheetLoad {
            texture_key: oversize_texture_key(&sheet.texture),
            image_url: sheet.image_url.clone(),
            frame_width: FRAME_SIZE * OVERSIZE_SCALE,
            frame_height: FRAME_SIZE * OVERSIZE_SCALE,
            start_frame: OVERSIZE_START_FRAME,
        });
    }
    loads
}
