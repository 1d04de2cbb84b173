//! lpcquest library.
//!
//! Engine-agnostic core of a 2D tile-based action game: LPC spritesheet clip
//! derivation, directional facing, and the walking/attacking/dealing-damage
//! behavior machines, assembled into an ECS world a host loop drives one
//! tick at a time.

pub mod components;
pub mod events;
pub mod game;
pub mod lpc;
pub mod resources;
pub mod systems;
