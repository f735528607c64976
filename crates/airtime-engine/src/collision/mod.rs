pub mod classifier;
pub mod contact;
pub mod filter;
pub mod gate;

pub use classifier::{query_candidates, resolve, Collidable, Resolution, SpatialQuery};
pub use contact::ContactEvent;
pub use filter::{BodyClass, CollisionFilter, FilterMode, ACCEPT_ALL};
pub use gate::DirectionalGate;
