pub mod animation;
pub mod collider;
pub mod entity;

pub use animation::FrameAnimation;
pub use collider::Collider;
pub use entity::Entity;
