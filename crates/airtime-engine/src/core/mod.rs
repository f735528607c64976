pub mod geometry;
pub mod rng;
pub mod scene;
pub mod schedule;
pub mod time;
