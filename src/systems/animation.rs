//! Animation playback system.
//!
//! Advances every playing [`Animation`](crate::components::animation::Animation)
//! against the clip data in the [`ClipStore`]:
//!
//! 1. Adds the frame delta to the elapsed time of the current playthrough
//! 2. On playthrough end, loops while repeats remain (`repeat = -1` loops
//!    forever, `repeat = n` plays 1 + n times)
//! 3. After the final playthrough the clip is done: the playback head stops
//!    and progress reads exactly 1.0
//!
//! An entity pointing at a key the store does not know is a programming
//! error; it is logged loudly and playback stops rather than silently
//! continuing.

use bevy_ecs::prelude::*;
use log::error;

use crate::components::animation::Animation;
use crate::resources::clipstore::ClipStore;
use crate::resources::worldtime::WorldTime;

/// Advance clip playback and resolve repeats.
pub fn animation(
    mut query: Query<&mut Animation>,
    clips: Res<ClipStore>,
    time: Res<WorldTime>,
) {
    for mut anim in query.iter_mut() {
        if !anim.playing {
            continue;
        }
        let Some(key) = anim.clip_key.clone() else {
            continue;
        };
        let Some(clip) = clips.get(&key) else {
            error!("animation references unknown clip '{}', stopping playback", key);
            anim.playing = false;
            continue;
        };

        let duration = clip.duration_secs();
        if duration <= 0.0 {
            anim.playing = false;
            anim.done = true;
            continue;
        }
        anim.elapsed += time.delta;
        while anim.elapsed >= duration {
            if clip.repeat < 0 || anim.repeats_done < clip.repeat {
                anim.elapsed -= duration;
                if clip.repeat >= 0 {
                    anim.repeats_done += 1;
                }
            } else {
                anim.elapsed = duration;
                anim.playing = false;
                anim.done = true;
                break;
            }
        }
    }
}
