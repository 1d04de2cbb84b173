//! Monster-side components.

use bevy_ecs::prelude::Component;

/// Marker for monster entities.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Monster;

/// Aggro bookkeeping. The squared distance to the player is recomputed every
/// tick; comparing squared values avoids the square root.
#[derive(Component, Clone, Copy, Debug)]
pub struct Aggro {
    /// Distance below which the monster attacks.
    pub min_dist_to_player: f32,
    /// Squared distance to the player center, updated each tick.
    pub dist_sq: f32,
}

impl Aggro {
    pub fn new(min_dist_to_player: f32) -> Self {
        Self { min_dist_to_player, dist_sq: f32::INFINITY }
    }

    fn threshold_sq(&self) -> f32 {
        self.min_dist_to_player * self.min_dist_to_player
    }

    /// Strictly inside aggro range. At exactly the threshold this is false:
    /// a walking monster stays walking.
    pub fn in_range(&self) -> bool {
        self.dist_sq < self.threshold_sq()
    }

    /// Strictly outside aggro range. Also false at exactly the threshold, so
    /// an attacking monster keeps attacking there.
    pub fn out_of_range(&self) -> bool {
        self.dist_sq > self.threshold_sq()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_aggro_is_out_of_range() {
        let aggro = Aggro::new(50.0);
        assert!(!aggro.in_range());
        assert!(aggro.out_of_range());
    }

    #[test]
    fn test_threshold_is_exclusive_on_both_sides() {
        let mut aggro = Aggro::new(50.0);
        aggro.dist_sq = 50.0 * 50.0;
        assert!(!aggro.in_range());
        assert!(!aggro.out_of_range());
    }

    #[test]
    fn test_inside_and_outside() {
        let mut aggro = Aggro::new(50.0);
        aggro.dist_sq = 49.0 * 49.0;
        assert!(aggro.in_range());
        aggro.dist_sq = 51.0 * 51.0;
        assert!(aggro.out_of_range());
    }
}
