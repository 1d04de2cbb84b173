//! Facing component and velocity-to-direction resolution.
//!
//! Every walking entity keeps a [`Facing`] so the right directional clip can
//! be addressed. The direction only changes while the entity actually moves:
//! a zero velocity keeps whatever direction was held before, so characters
//! do not snap back to a default pose when they stop.
//!
//! The mapping collapses the full angle space onto the four cardinal
//! directions with 90-degree sectors. The sector boundaries are part of the
//! contract: 45 degrees is still Right, 135 and 225 belong to Left.

use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::lpc::Direction;

/// The direction an entity's sprite faces. Starts [`Direction::Down`], the
/// LPC "toward the camera" pose.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Facing {
    pub direction: Direction,
}

impl Default for Facing {
    fn default() -> Self {
        Self { direction: Direction::Down }
    }
}

impl Facing {
    /// Re-resolve the facing from a velocity. Zero velocity is a no-op.
    pub fn turn_from_velocity(&mut self, velocity: Vec2) -> Direction {
        self.direction = direction_from_velocity(velocity, self.direction);
        self.direction
    }
}

/// Resolve a facing direction from a velocity vector.
///
/// Returns `previous` unchanged for the zero vector. Otherwise the velocity
/// angle (degrees, normalized to [0, 360), +x axis is 0, measured toward +y)
/// picks the sector:
///
/// - `angle <= 45` or `angle >= 315` - Right
/// - `45 < angle < 135` - Down
/// - `135 <= angle <= 225` - Left
/// - `225 < angle < 315` - Up
pub fn direction_from_velocity(velocity: Vec2, previous: Direction) -> Direction {
    if velocity == Vec2::ZERO {
        return previous;
    }
    let angle = velocity.y.atan2(velocity.x).to_degrees().rem_euclid(360.0);
    if angle <= 45.0 || angle >= 315.0 {
        Direction::Right
    } else if angle < 135.0 {
        Direction::Down
    } else if angle <= 225.0 {
        Direction::Left
    } else {
        Direction::Up
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_velocity_keeps_previous_direction() {
        assert_eq!(direction_from_velocity(Vec2::ZERO, Direction::Left), Direction::Left);
        assert_eq!(direction_from_velocity(Vec2::ZERO, Direction::Up), Direction::Up);
    }

    #[test]
    fn test_cardinal_axes() {
        assert_eq!(direction_from_velocity(Vec2::new(1.0, 0.0), Direction::Down), Direction::Right);
        assert_eq!(direction_from_velocity(Vec2::new(0.0, 1.0), Direction::Right), Direction::Down);
        assert_eq!(direction_from_velocity(Vec2::new(-1.0, 0.0), Direction::Down), Direction::Left);
        assert_eq!(direction_from_velocity(Vec2::new(0.0, -1.0), Direction::Down), Direction::Up);
    }

    #[test]
    fn test_45_degree_boundary_is_right() {
        let v = Vec2::new(45f32.to_radians().cos(), 45f32.to_radians().sin());
        assert_eq!(direction_from_velocity(v, Direction::Down), Direction::Right);
    }

    #[test]
    fn test_135_and_225_boundaries_are_left() {
        let at = |deg: f32| {
            Vec2::new(deg.to_radians().cos(), deg.to_radians().sin())
        };
        assert_eq!(direction_from_velocity(at(135.0), Direction::Down), Direction::Left);
        assert_eq!(direction_from_velocity(at(225.0), Direction::Down), Direction::Left);
    }

    #[test]
    fn test_sector_interiors() {
        let at = |deg: f32| {
            Vec2::new(deg.to_radians().cos(), deg.to_radians().sin())
        };
        assert_eq!(direction_from_velocity(at(90.0), Direction::Right), Direction::Down);
        assert_eq!(direction_from_velocity(at(180.0), Direction::Right), Direction::Left);
        assert_eq!(direction_from_velocity(at(270.0), Direction::Right), Direction::Up);
        assert_eq!(direction_from_velocity(at(350.0), Direction::Down), Direction::Right);
    }

    #[test]
    fn test_facing_component_turns_with_motion() {
        let mut facing = Facing::default();
        assert_eq!(facing.direction, Direction::Down);
        facing.turn_from_velocity(Vec2::new(-2.0, 0.0));
        assert_eq!(facing.direction, Direction::Left);
        facing.turn_from_velocity(Vec2::ZERO);
        assert_eq!(facing.direction, Direction::Left);
    }
}
