//! Short-lived cosmetic bodies.
//!
//! Particles are trigger bodies with an empty accept-list: they move through
//! the physics step but never push or get pushed. A [`ParticleKind::Travel`]
//! particle homes in on a target body and fades once it touches it.

use glam::Vec2;
use crate::api::types::EntityId;
use crate::collision::filter::{BodyClass, CollisionFilter, FilterMode};
use crate::components::collider::Collider;
use crate::components::entity::Entity;
use crate::core::rng::Rng;
use crate::physics::body::PhysicsBody;

pub const DEFAULT_RANDOMISATION: f32 = 0.25;
pub const DEFAULT_INITIAL_SPEED: f32 = 5.0;
pub const DEFAULT_FADE_MS: u32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    /// Plain physics body.
    Default,
    /// Steers toward `target`.
    Travel { target: EntityId },
    /// Drifts up and fades.
    Smoke,
    /// Spreads sideways and fades.
    Dust,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub kind: ParticleKind,
    /// Jitter added to each steering direction, and the spread of the
    /// initial velocity relative to `initial_speed`.
    pub randomisation: f32,
    pub initial_speed: f32,
    /// Steering rate per second for travel particles.
    pub acceleration: f32,
    pub fade_ms: u32,
    /// Time spent fading so far, when fading.
    faded_ms: Option<u32>,
}

impl Particle {
    pub fn new(kind: ParticleKind) -> Self {
        let fading = match kind {
            ParticleKind::Smoke | ParticleKind::Dust => Some(0),
            ParticleKind::Default | ParticleKind::Travel { .. } => None,
        };
        Self {
            kind,
            randomisation: DEFAULT_RANDOMISATION,
            initial_speed: DEFAULT_INITIAL_SPEED,
            acceleration: 0.0,
            fade_ms: DEFAULT_FADE_MS,
            faded_ms: fading,
        }
    }

    pub fn travel(target: EntityId, initial_speed: f32, acceleration: f32) -> Self {
        Self {
            initial_speed,
            acceleration,
            ..Self::new(ParticleKind::Travel { target })
        }
    }

    pub fn with_initial_speed(mut self, speed: f32) -> Self {
        self.initial_speed = speed;
        self
    }

    pub fn with_fade_ms(mut self, fade_ms: u32) -> Self {
        self.fade_ms = fade_ms;
        self
    }

    pub fn is_fading(&self) -> bool {
        self.faded_ms.is_some()
    }

    /// Velocity given at spawn.
    pub fn initial_velocity(&self, rng: &mut Rng) -> Vec2 {
        let range = self.initial_speed * self.randomisation;
        match self.kind {
            ParticleKind::Default => Vec2::ZERO,
            ParticleKind::Travel { .. } => Vec2::new(rng.spread(range), rng.spread(range)),
            ParticleKind::Smoke => Vec2::new(rng.spread(range), -range * rng.next_f32()),
            ParticleKind::Dust => Vec2::new(rng.spread(range * 2.0), 0.0),
        }
    }

    /// Entity with the physics tuning of this kind.
    pub fn spawn(id: EntityId, center: Vec2, size: Vec2, particle: Particle, rng: &mut Rng) -> Entity {
        let mut body = PhysicsBody::new()
            .with_friction(0.0)
            .with_velocity(particle.initial_velocity(rng));
        if !matches!(particle.kind, ParticleKind::Default) {
            body.gravity_enabled = false;
        }
        Entity::new(id)
            .with_tag("Particle")
            .with_pos(center - size * 0.5)
            .with_size(size)
            .with_collider(
                Collider::trigger(BodyClass::Particle)
                    .with_filter(CollisionFilter::none(FilterMode::Tag)),
            )
            .with_body(body)
            .with_particle(particle)
    }

    /// Touched its travel target: start fading.
    pub fn reach(&mut self) {
        if self.faded_ms.is_none() {
            self.faded_ms = Some(0);
        }
    }

    /// Steer toward `to_target` (a vector from the particle to its target).
    pub fn steer(&self, velocity: Vec2, to_target: Vec2, elapsed_ms: u32, rng: &mut Rng) -> Vec2 {
        let mut direction = to_target.normalize_or_zero();
        direction.x += rng.spread(self.randomisation);
        direction.y += rng.spread(self.randomisation);
        let lerp = (self.acceleration * elapsed_ms as f32 / 1000.0).clamp(0.0, 1.0);
        velocity * (1.0 - lerp) + direction * self.initial_speed * lerp
    }

    /// Advance the fade and return the new opacity, or `None` once fully faded.
    /// Particles that are not fading keep `opacity` unchanged.
    pub fn fade(&mut self, opacity: f32, elapsed_ms: u32) -> Option<f32> {
        let Some(faded) = self.faded_ms.as_mut() else {
            return Some(opacity);
        };
        *faded += elapsed_ms;
        if *faded >= self.fade_ms {
            return None;
        }
        let remaining = 1.0 - *faded as f32 / self.fade_ms as f32;
        Some(opacity.min(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steering_with_full_lerp_points_at_target() {
        let p = Particle {
            randomisation: 0.0,
            ..Particle::travel(EntityId(1), 2.0, 1000.0)
        };
        let mut rng = Rng::new(1);
        let v = p.steer(Vec2::new(-5.0, 0.0), Vec2::new(0.0, 10.0), 16, &mut rng);
        assert!((v - Vec2::new(0.0, 2.0)).length() < 0.001);
    }

    #[test]
    fn zero_acceleration_keeps_velocity() {
        let p = Particle::travel(EntityId(1), 2.0, 0.0);
        let mut rng = Rng::new(1);
        let v = p.steer(Vec2::new(1.0, 1.0), Vec2::new(0.0, 10.0), 16, &mut rng);
        assert_eq!(v, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn smoke_fades_out_then_dies() {
        let mut p = Particle::new(ParticleKind::Smoke).with_fade_ms(100);
        let o = p.fade(1.0, 50).unwrap();
        assert!((o - 0.5).abs() < 0.001);
        assert!(p.fade(o, 50).is_none());
    }

    #[test]
    fn travel_only_fades_after_reaching_target() {
        let mut p = Particle::travel(EntityId(1), 1.0, 1.0).with_fade_ms(100);
        assert_eq!(p.fade(1.0, 500), Some(1.0));
        p.reach();
        assert!(p.is_fading());
        assert!(p.fade(1.0, 100).is_none());
    }

    #[test]
    fn spawned_particle_interacts_with_nothing() {
        let mut rng = Rng::new(9);
        let e = Particle::spawn(
            EntityId(4),
            Vec2::new(50.0, 50.0),
            Vec2::splat(8.0),
            Particle::new(ParticleKind::Dust),
            &mut rng,
        );
        let collider = e.collider.as_ref().unwrap();
        assert!(collider.is_trigger);
        assert!(collider.filter.tags().is_empty());
        assert_eq!(e.pos, Vec2::new(46.0, 46.0));
        assert!(!e.body.unwrap().gravity_enabled);
    }
}
