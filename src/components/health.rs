use bevy_ecs::prelude::Component;

/// Hit points. Damage is subtracted without clamping, so the value can go
/// negative; nothing in the core despawns a depleted entity. Higher layers
/// observe [`HealthDepletedEvent`](crate::events::health::HealthDepletedEvent)
/// and decide what death means.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Health {
    pub current: i32,
}

impl Health {
    pub fn new(amount: i32) -> Self {
        Self { current: amount }
    }

    /// Subtract `amount` hit points. No lower bound.
    pub fn take_damage(&mut self, amount: i32) {
        self.current -= amount;
    }

    /// True once the hit points have reached zero or below.
    pub fn is_depleted(&self) -> bool {
        self.current <= 0
    }
}
