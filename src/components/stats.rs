use bevy_ecs::prelude::Component;

/// Movement speed stat. Velocity per tick is the steering direction scaled
/// by this and the frame delta in milliseconds.
#[derive(Component, Clone, Copy, Debug)]
pub struct MoveSpeed(pub f32);

/// Attack reach tuning. Carried on every combatant, but the damage pass
/// hits every live monster regardless of range or field of view.
#[derive(Component, Clone, Copy, Debug)]
pub struct AttackReach {
    pub range: f32,
    pub fov: f32,
}

/// Display name, used for logging. Unnamed entities get `{texture}{index}`.
#[derive(Component, Clone, Debug)]
pub struct ActorName(pub String);
