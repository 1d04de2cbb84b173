//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution.
//!
//! Overview
//! - `clipstore` – registered animation clips keyed by clip key
//! - `gameconfig` – gameplay tunables loaded from `config.ini`
//! - `input` – per-frame keyboard snapshot and debounced actions
//! - `worldtime` – simulation time and delta

pub mod clipstore;
pub mod gameconfig;
pub mod input;
pub mod worldtime;
