use bevy_ecs::prelude::Resource;

/// Simulation time. `delta` is the scaled frame delta in seconds, written by
/// [`update_world_time`](crate::systems::time::update_world_time) before the
/// schedule runs.
#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime { elapsed: 0.0, delta: 0.0, time_scale: 1.0, frame_count: 0 }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Frame delta in milliseconds. Steering scales velocities by this;
    /// a speed of 8 walks at roughly 130 units/s at 60fps.
    pub fn delta_ms(&self) -> f32 {
        self.delta * 1000.0
    }
}
