pub mod body;
pub mod grounded;
pub mod integrator;

pub use body::{PhysicsBody, DEFAULT_FRICTION, DEFAULT_GRAVITY};
pub use grounded::{evaluate_grounded, GroundProbe, DEFAULT_GROUNDED_DISTANCE};
pub use integrator::{correct_penetration, integrate, move_by, Mover, StepOutcome};
