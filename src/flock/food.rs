use glam::Vec3;
use rand::Rng;

use super::agent::random_vec3;

/// Relocation cube half-extent for the food target.
pub const FOOD_EXTENT: f32 = 15.0;

/// Matte look: low saturation, bright value.
const FOOD_SATURATION: f32 = 0.4;
const FOOD_VALUE: f32 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const RED: Rgb = Rgb { r: 1.0, g: 0.0, b: 0.0 };
}

pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb {
    let h = h.rem_euclid(1.0) * 6.0;
    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    let (r, g, b) = match sector as i32 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgb { r, g, b }
}

/// Random hue at the fixed matte saturation/value.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    hsv_to_rgb(rng.random_range(0.0..1.0), FOOD_SATURATION, FOOD_VALUE)
}

/// The single global seek target. Persists between relocations.
#[derive(Debug, Clone, Copy)]
pub struct FoodTarget {
    pub position: Vec3,
    pub color: Rgb,
}

impl Default for FoodTarget {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            color: Rgb::RED,
        }
    }
}

impl FoodTarget {
    /// Move to a fresh random point and recolor with a fresh random hue.
    pub fn relocate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.position = random_vec3(rng, FOOD_EXTENT);
        self.color = random_color(rng);
    }
}
