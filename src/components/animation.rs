//! Clip playback component.
//!
//! [`Animation`] is the per-entity playback head over the clips registered in
//! the [`ClipStore`](crate::resources::clipstore::ClipStore). Behavior
//! systems request clips by (animation, direction) and the
//! [`animation`](crate::systems::animation::animation) system advances the
//! elapsed time and repeat bookkeeping each frame.
//!
//! Requesting the clip that is already playing with `ignore_if_playing` set
//! leaves the playback head alone - the walk loop is re-requested every tick
//! and must not restart from frame zero.

use bevy_ecs::prelude::Component;

use crate::lpc::{AnimName, Direction, clip_key};
use crate::resources::clipstore::ClipStore;

/// Playback state for one entity's sprite.
#[derive(Component, Clone, Debug)]
pub struct Animation {
    /// Base texture key; composed into clip keys with animation and direction.
    pub texture: String,
    /// Key of the current clip, if any was ever requested.
    pub clip_key: Option<String>,
    /// Seconds into the current playthrough.
    pub elapsed: f32,
    /// Completed extra playthroughs of the current clip.
    pub repeats_done: i32,
    /// Whether the playback head advances.
    pub playing: bool,
    /// Set once a finite clip has played all its repeats; progress then
    /// reads 1.0 until another clip is requested.
    pub done: bool,
}

impl Animation {
    pub fn new(texture: impl Into<String>) -> Self {
        Self {
            texture: texture.into(),
            clip_key: None,
            elapsed: 0.0,
            repeats_done: 0,
            playing: false,
            done: false,
        }
    }

    /// Request a clip by key. With `ignore_if_playing`, a request for the
    /// clip that is already playing is a no-op; otherwise playback restarts
    /// from the beginning.
    pub fn play(&mut self, key: impl Into<String>, ignore_if_playing: bool) {
        let key = key.into();
        if ignore_if_playing && self.playing && self.clip_key.as_deref() == Some(key.as_str()) {
            return;
        }
        self.clip_key = Some(key);
        self.elapsed = 0.0;
        self.repeats_done = 0;
        self.playing = true;
        self.done = false;
    }

    /// Request the clip `{texture}_{anim}_{direction}`. Returns the composed
    /// key.
    pub fn play_directional(
        &mut self,
        anim: AnimName,
        direction: Direction,
        ignore_if_playing: bool,
    ) -> String {
        let key = clip_key(&self.texture, anim, direction);
        self.play(key.clone(), ignore_if_playing);
        key
    }

    /// Halt playback on the current frame.
    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Progress through the current playthrough in [0, 1]. Reads 0.0 when no
    /// clip was ever requested and stays pinned at 1.0 once a finite clip has
    /// finished its last repeat.
    pub fn progress(&self, clips: &ClipStore) -> f32 {
        let Some(key) = self.clip_key.as_deref() else {
            return 0.0;
        };
        let Some(clip) = clips.get(key) else {
            return 0.0;
        };
        if self.done {
            return 1.0;
        }
        (self.elapsed / clip.duration_secs()).min(1.0)
    }

    /// Absolute frame index to draw, for the rendering collaborator. The
    /// finished clip stays on its last frame.
    pub fn current_frame(&self, clips: &ClipStore) -> Option<u32> {
        let clip = clips.get(self.clip_key.as_deref()?)?;
        let count = clip.frames.len();
        if count == 0 {
            return None;
        }
        let t = (self.elapsed / clip.duration_secs()).min(1.0);
        let index = ((t * count as f32) as usize).min(count - 1);
        Some(clip.frames[index])
    }
}
