use glam::Vec3;
use rand::{SeedableRng, rngs::SmallRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::agent::Agent;
use super::food::{FoodTarget, Rgb};

/// Slerp fraction used by every turn-toward rule.
const FACE_AMOUNT: f32 = 0.1;
/// Stand-off nudge for courting followers (negative: back away).
const SHY_NUDGE: f32 = -0.1;
/// Size difference band that forms an interest link, strict on both ends.
const INTEREST_BAND: f32 = 0.1;
/// Pairwise distances inside this band repel; below it the pair is ignored.
const REPEL_DIST_RANGE: (f32, f32) = (0.01, 1.0);
const ALIGN_RADIUS: f32 = 1.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FlockParams {
    #[serde(default = "FlockParams::default_move_speed")]
    pub move_speed: f32,
    #[serde(default = "FlockParams::default_food_interval")]
    pub food_interval: f32,
    #[serde(default = "FlockParams::default_repel_strength")]
    pub repel_strength: f32,
    #[serde(default = "FlockParams::default_align_strength")]
    pub align_strength: f32,
    #[serde(default = "FlockParams::default_cohesion_strength")]
    pub cohesion_strength: f32,
    #[serde(default = "FlockParams::default_cohesion_radius")]
    pub cohesion_radius: f32,
    #[serde(default = "FlockParams::default_total_agents")]
    pub total_agents: usize,
}

impl FlockParams {
    pub const MOVE_SPEED_RANGE: (f32, f32) = (0.1, 20.0);
    pub const FOOD_INTERVAL_RANGE: (f32, f32) = (1.0, 30.0);
    pub const REPEL_STRENGTH_RANGE: (f32, f32) = (0.0, 1.0);
    pub const ALIGN_STRENGTH_RANGE: (f32, f32) = (0.0, 0.5);
    pub const COHESION_STRENGTH_RANGE: (f32, f32) = (0.0, 0.5);
    pub const COHESION_RADIUS_RANGE: (f32, f32) = (0.1, 10.0);
    pub const TOTAL_AGENTS_RANGE: (usize, usize) = (5, 100);

    fn default_move_speed() -> f32 {
        5.0
    }
    fn default_food_interval() -> f32 {
        7.0
    }
    fn default_repel_strength() -> f32 {
        0.05
    }
    fn default_align_strength() -> f32 {
        0.02
    }
    fn default_cohesion_strength() -> f32 {
        0.02
    }
    fn default_cohesion_radius() -> f32 {
        2.0
    }
    fn default_total_agents() -> usize {
        20
    }

    /// Clamp every field into its documented range; live out-of-range writes
    /// are corrected rather than faulting.
    pub fn sanitize(&mut self) {
        let (lo, hi) = Self::MOVE_SPEED_RANGE;
        self.move_speed = self.move_speed.clamp(lo, hi);
        let (lo, hi) = Self::FOOD_INTERVAL_RANGE;
        self.food_interval = self.food_interval.clamp(lo, hi);
        let (lo, hi) = Self::REPEL_STRENGTH_RANGE;
        self.repel_strength = self.repel_strength.clamp(lo, hi);
        let (lo, hi) = Self::ALIGN_STRENGTH_RANGE;
        self.align_strength = self.align_strength.clamp(lo, hi);
        let (lo, hi) = Self::COHESION_STRENGTH_RANGE;
        self.cohesion_strength = self.cohesion_strength.clamp(lo, hi);
        let (lo, hi) = Self::COHESION_RADIUS_RANGE;
        self.cohesion_radius = self.cohesion_radius.clamp(lo, hi);
        let (lo, hi) = Self::TOTAL_AGENTS_RANGE;
        self.total_agents = self.total_agents.clamp(lo, hi);
    }
}

impl Default for FlockParams {
    fn default() -> Self {
        Self {
            move_speed: Self::default_move_speed(),
            food_interval: Self::default_food_interval(),
            repel_strength: Self::default_repel_strength(),
            align_strength: Self::default_align_strength(),
            cohesion_strength: Self::default_cohesion_strength(),
            cohesion_radius: Self::default_cohesion_radius(),
            total_agents: Self::default_total_agents(),
        }
    }
}

/// The whole agent set plus the food target, advanced by `tick`. Agent 0 is
/// the leader: it seeks food directly and is exempt from the repulsion,
/// alignment and cohesion passes.
pub struct Swarm {
    pub agents: Vec<Agent>,
    pub food: FoodTarget,
    /// Leader tint; follows the food color on every relocation.
    pub leader_color: Rgb,
    pub params: FlockParams,
    pub paused: bool,
    food_timer: f32,
    last_count: usize,
    rng: SmallRng,
}

impl Swarm {
    pub fn new(params: FlockParams, seed: u64) -> Self {
        let mut params = params;
        params.sanitize();
        let mut swarm = Self {
            agents: Vec::new(),
            food: FoodTarget::default(),
            leader_color: Rgb::RED,
            params,
            paused: false,
            food_timer: 0.0,
            last_count: params.total_agents,
            rng: SmallRng::seed_from_u64(seed),
        };
        swarm.initialize(swarm.params.total_agents);
        swarm
    }

    /// Discard the whole agent set and batch-create `count` fresh agents.
    /// Atomic by construction: the old vector is replaced in one assignment.
    pub fn initialize(&mut self, count: usize) {
        self.agents = (0..count).map(|_| Agent::spawn(&mut self.rng)).collect();
        info!(count, "agents initialized");
    }

    /// Advance one animation frame. Pass order is fixed: interest links,
    /// steering, repulsion, alignment, cohesion, then integration. Later
    /// passes read positions already nudged by earlier ones.
    pub fn tick(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.params.sanitize();

        let respawned = self.params.total_agents != self.last_count;
        if respawned {
            self.initialize(self.params.total_agents);
            self.last_count = self.params.total_agents;
        }

        if self.paused {
            return;
        }

        if !respawned {
            if self.food_timer > self.params.food_interval {
                self.food_timer -= self.params.food_interval;
                self.food.relocate(&mut self.rng);
                self.leader_color = self.food.color;
                debug!(pos = ?self.food.position, "food relocated");
            }
            self.food_timer += dt;
        }

        if self.agents.is_empty() {
            return;
        }

        self.resolve_interest();
        self.steer(dt);
        self.apply_repulsion();
        self.apply_alignment();
        self.apply_cohesion();
        self.integrate(dt);
    }

    /// One-time courtship links: an agent locks onto the first scan in which
    /// some later agent is larger by less than the band width. Later matches
    /// within the same scan overwrite; once set the link never clears.
    pub fn resolve_interest(&mut self) {
        for i in 0..self.agents.len() {
            if self.agents[i].interest.is_some() {
                continue;
            }
            for j in (i + 1)..self.agents.len() {
                let diff = self.agents[j].size - self.agents[i].size;
                if diff > 0.0 && diff < INTEREST_BAND {
                    self.agents[i].interest = Some(j);
                }
            }
        }
    }

    /// Leader turns toward food and steps forward; followers court their
    /// interest target at a stand-off distance or turn toward food.
    pub fn steer(&mut self, dt: f32) {
        if self.agents.is_empty() {
            return;
        }
        let food_pos = self.food.position;
        let speed = self.params.move_speed;

        let leader = &mut self.agents[0];
        leader.face_toward(food_pos, FACE_AMOUNT);
        leader.step_forward(speed, dt);

        for i in 1..self.agents.len() {
            // A link outside the current agent set counts as no link.
            let target = self.agents[i]
                .interest
                .filter(|&j| j < self.agents.len())
                .map(|j| self.agents[j].position);
            match target {
                Some(pos) => {
                    let agent = &mut self.agents[i];
                    agent.face_toward(pos, FACE_AMOUNT);
                    agent.nudge_toward(pos, SHY_NUDGE);
                }
                None => self.agents[i].face_toward(food_pos, FACE_AMOUNT),
            }
        }
    }

    /// Inverse-square separation between non-leader pairs.
    pub fn apply_repulsion(&mut self) {
        let (min_d, max_d) = REPEL_DIST_RANGE;
        for i in 1..self.agents.len() {
            let mut force = Vec3::ZERO;
            for j in 1..self.agents.len() {
                if j == i {
                    continue;
                }
                let diff = self.agents[i].position - self.agents[j].position;
                let dist = diff.length();
                if dist > min_d && dist < max_d {
                    force += diff / dist * (self.params.repel_strength / (dist * dist));
                }
            }
            self.agents[i].nudge(force);
        }
    }

    /// Nudge each non-leader along the average heading of its non-leader
    /// neighbors within the alignment radius.
    pub fn apply_alignment(&mut self) {
        for i in 1..self.agents.len() {
            let mut avg_heading = Vec3::ZERO;
            let mut count = 0usize;
            for j in 1..self.agents.len() {
                if j == i {
                    continue;
                }
                let dist = (self.agents[j].position - self.agents[i].position).length();
                if dist < ALIGN_RADIUS {
                    avg_heading += self.agents[j].forward();
                    count += 1;
                }
            }
            if count > 0 {
                avg_heading /= count as f32;
                let dir = avg_heading.normalize_or_zero();
                let strength = self.params.align_strength;
                self.agents[i].nudge(dir * strength);
            }
        }
    }

    /// Nudge each non-leader toward the centroid of its non-leader neighbors
    /// within the cohesion radius.
    pub fn apply_cohesion(&mut self) {
        for i in 1..self.agents.len() {
            let mut center = Vec3::ZERO;
            let mut count = 0usize;
            for j in 1..self.agents.len() {
                if j == i {
                    continue;
                }
                let dist = (self.agents[j].position - self.agents[i].position).length();
                if dist < self.params.cohesion_radius {
                    center += self.agents[j].position;
                    count += 1;
                }
            }
            if count > 0 {
                center /= count as f32;
                let dir = (center - self.agents[i].position).normalize_or_zero();
                let strength = self.params.cohesion_strength;
                self.agents[i].nudge(dir * strength);
            }
        }
    }

    /// Final integration: everyone, leader included, moves forward.
    pub fn integrate(&mut self, dt: f32) {
        let speed = self.params.move_speed;
        for agent in &mut self.agents {
            agent.step_forward(speed, dt);
        }
    }

    pub fn food_timer(&self) -> f32 {
        self.food_timer
    }

    pub fn leader(&self) -> Option<&Agent> {
        self.agents.first()
    }
}
