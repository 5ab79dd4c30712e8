use glam::{Quat, Vec3};
use rand::Rng;

/// Spawn cube half-extent for initial agent positions.
pub const SPAWN_EXTENT: f32 = 5.0;
/// Initial agent size range.
pub const SIZE_RANGE: (f32, f32) = (0.05, 1.0);

const DIR_EPSILON: f32 = 1e-8;

/// One flocking point-mass: a pose, a visual scale and an optional one-way
/// attraction link to a slightly larger agent.
#[derive(Debug, Clone)]
pub struct Agent {
    pub position: Vec3,
    /// Unit quaternion; forward is -Z in local space.
    pub orientation: Quat,
    pub size: f32,
    /// Index of the agent this one courts, once assigned never cleared.
    pub interest: Option<usize>,
}

impl Agent {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            position: random_vec3(rng, SPAWN_EXTENT),
            orientation: random_unit_quat(rng),
            size: rng.random_range(SIZE_RANGE.0..SIZE_RANGE.1),
            interest: None,
        }
    }

    /// Unit forward-facing vector.
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Turn toward `target` by slerping a fraction `amount` of the way.
    /// Degenerate directions (target at the agent's position) are a no-op.
    pub fn face_toward(&mut self, target: Vec3, amount: f32) {
        let dir = target - self.position;
        if dir.length_squared() < DIR_EPSILON {
            return;
        }
        let desired = Quat::from_rotation_arc(Vec3::NEG_Z, dir.normalize());
        self.orientation = self.orientation.slerp(desired, amount.clamp(0.0, 1.0)).normalize();
    }

    /// Positional nudge by an absolute delta.
    pub fn nudge(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Positional nudge of magnitude `amount` along the direction to
    /// `target`. A negative amount backs away.
    pub fn nudge_toward(&mut self, target: Vec3, amount: f32) {
        let dir = target - self.position;
        if dir.length_squared() < DIR_EPSILON {
            return;
        }
        self.position += dir.normalize() * amount;
    }

    /// Advance along the facing direction at `speed` for `dt` seconds.
    pub fn step_forward(&mut self, speed: f32, dt: f32) {
        self.position += self.forward() * speed * dt;
    }
}

/// Vector with each component uniform in [-scale, scale).
pub fn random_vec3<R: Rng + ?Sized>(rng: &mut R, scale: f32) -> Vec3 {
    Vec3::new(
        rng.random_range(-1.0..1.0),
        rng.random_range(-1.0..1.0),
        rng.random_range(-1.0..1.0),
    ) * scale
}

/// Uniformly random orientation, normalized from four signed-uniform draws.
pub fn random_unit_quat<R: Rng + ?Sized>(rng: &mut R) -> Quat {
    let q = Quat::from_xyzw(
        rng.random_range(-1.0..1.0),
        rng.random_range(-1.0..1.0),
        rng.random_range(-1.0..1.0),
        rng.random_range(-1.0..1.0),
    );
    if q.length_squared() < DIR_EPSILON {
        Quat::IDENTITY
    } else {
        q.normalize()
    }
}
