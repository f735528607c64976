//! Per-tick passes over the scene, run in order by
//! [`EngineContext::step`](crate::api::game::EngineContext::step).

pub mod animation;
pub mod behaviour;
pub mod contacts;
pub mod input;
pub mod physics;
pub mod render;
pub mod schedule;
