//! Animation clip registry.
//!
//! [`ClipStore`] holds every playable clip derived from the registered
//! character sheets, keyed `{texture}_{animation}_{direction}`. It is built
//! exactly once at boot from [`SheetDescriptor`]s and inserted into the
//! world as an immutable resource; entities address clips by key through
//! their [`Animation`](crate::components::animation::Animation) component.
//!
//! Registration failures are boot failures. A malformed animation table or a
//! key collision aborts startup; neither can occur for well-formed input,
//! the checks exist as guards.

use std::fmt;

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::lpc::{
    AnimName, AnimationDef, LPC_ANIMATIONS, SheetDescriptor, build_reels, clip_key, max_row_size,
    oversize_texture_key,
};

/// A registered, immutable animation clip bound to its source texture.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    /// Registry key, `{texture}_{animation}_{direction}`.
    pub key: String,
    /// Texture the frame indices address: the base sheet or its `_oversize`
    /// companion.
    pub texture_key: String,
    /// Absolute frame indices in playback order.
    pub frames: SmallVec<[u32; 16]>,
    /// Extra playthroughs after the first; -1 loops forever.
    pub repeat: i32,
    /// Duration of one playthrough in milliseconds.
    pub duration_ms: u32,
}

impl AnimationClip {
    /// Duration of one playthrough in seconds.
    pub fn duration_secs(&self) -> f32 {
        self.duration_ms as f32 / 1000.0
    }
}

/// Why clip registration aborted.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// An animation definition cannot fit the sheet layout.
    BadDefinition { anim: AnimName, num_of_frames: u32, max_row_size: u32 },
    /// Two clips resolved to the same key (duplicate texture name).
    DuplicateKey(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::BadDefinition { anim, num_of_frames, max_row_size } => write!(
                f,
                "animation '{}' has {} frames, expected 1..={} per row",
                anim.as_str(),
                num_of_frames,
                max_row_size
            ),
            RegistryError::DuplicateKey(key) => {
                write!(f, "clip key '{key}' is already registered")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Central registry of animation clips keyed by clip key.
#[derive(Resource, Debug, Default)]
pub struct ClipStore {
    clips: FxHashMap<String, AnimationClip>,
}

impl ClipStore {
    /// Build the registry for a list of sheets using the standard LPC
    /// animation table.
    pub fn register_all(sheets: &[SheetDescriptor]) -> Result<ClipStore, RegistryError> {
        Self::register_all_with(&LPC_ANIMATIONS, sheets)
    }

    /// Build the registry for a list of sheets with a custom animation table.
    pub fn register_all_with(
        defs: &[AnimationDef],
        sheets: &[SheetDescriptor],
    ) -> Result<ClipStore, RegistryError> {
        let mut store = ClipStore::default();
        for sheet in sheets {
            store.register_sheet(defs, sheet)?;
        }
        log::info!("registered {} animation clips for {} sheets", store.len(), sheets.len());
        Ok(store)
    }

    fn register_sheet(
        &mut self,
        defs: &[AnimationDef],
        sheet: &SheetDescriptor,
    ) -> Result<(), RegistryError> {
        let row_size = max_row_size(sheet.oversize.is_some());
        for def in defs {
            if def.num_of_frames == 0 || def.num_of_frames > row_size {
                return Err(RegistryError::BadDefinition {
                    anim: def.name,
                    num_of_frames: def.num_of_frames,
                    max_row_size: row_size,
                });
            }
        }

        // build_reels yields four directional reels per definition, in table
        // order.
        let reels = build_reels(defs, sheet.oversize);
        for (def, chunk) in defs.iter().zip(reels.chunks(4)) {
            for reel in chunk {
                debug_assert_eq!(def.name, reel.anim);
                let key = clip_key(&sheet.texture, reel.anim, reel.direction);
                let texture_key = if reel.oversize {
                    oversize_texture_key(&sheet.texture)
                } else {
                    sheet.texture.clone()
                };
                log::debug!(
                    "creating clip '{}' on texture '{}' with reel {:?}",
                    key,
                    texture_key,
                    reel.frames
                );
                self.insert(AnimationClip {
                    key,
                    texture_key,
                    frames: reel.frames.clone(),
                    repeat: def.loop_count,
                    duration_ms: def.duration_ms,
                })?;
            }
        }
        Ok(())
    }

    /// Insert a clip, rejecting key collisions.
    pub fn insert(&mut self, clip: AnimationClip) -> Result<(), RegistryError> {
        if self.clips.contains_key(&clip.key) {
            return Err(RegistryError::DuplicateKey(clip.key));
        }
        self.clips.insert(clip.key.clone(), clip);
        Ok(())
    }

    /// Look up a clip by its key.
    pub fn get(&self, key: &str) -> Option<&AnimationClip> {
        self.clips.get(key)
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}
