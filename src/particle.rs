// Particle field backing the animated background: a fixed set of drifting
// points whose positions wrap modulo the viewport, plus the distance rule
// for the connecting lines drawn between nearby pairs.

use crate::color::{Color, PALETTE};
use rand::Rng;
use vecmath;

/// Number of particles allocated per mount. The collection never grows or
/// shrinks afterwards.
pub const PARTICLE_COUNT: usize = 60;

/// Pairs closer than this many pixels get a connecting line.
pub const CONNECT_DISTANCE: f64 = 150.0;

/// Line opacity at zero distance; falls off linearly to 0 at the threshold.
pub const MAX_LINE_ALPHA: f64 = 0.15;

#[derive(Copy, Clone, Debug)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub radius: f64,
    pub color: Color,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: [f64; 2],
}

impl ParticleField {
    /// Creates the field with randomized positions over the current bounds,
    /// small random velocities, and colors drawn from the palette. Generic
    /// over the rng so tests can seed it.
    pub fn new<R: Rng>(width: f64, height: f64, rng: &mut R) -> ParticleField {
        let mut particles = Vec::with_capacity(PARTICLE_COUNT);
        for _ in 0..PARTICLE_COUNT {
            let pos_x = rng.gen::<f64>() * width;
            let pos_y = rng.gen::<f64>() * height;
            let vel_x = (rng.gen::<f64>() - 0.5) * 0.5;
            let vel_y = (rng.gen::<f64>() - 0.5) * 0.5;
            let radius = rng.gen::<f64>() * 3.0 + 2.0;
            let color = PALETTE[rng.gen_range(0, PALETTE.len())];
            particles.push(Particle {
                pos: [pos_x, pos_y],
                vel: [vel_x, vel_y],
                radius,
                color,
            });
        }
        ParticleField {
            particles,
            bounds: [width, height],
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn width(&self) -> f64 {
        self.bounds[0]
    }

    pub fn height(&self) -> f64 {
        self.bounds[1]
    }

    /// Updates the wrap bounds after a viewport resize. Positions are left
    /// alone; particles outside the new bounds wrap back in on the next step.
    pub fn set_bounds(&mut self, width: f64, height: f64) {
        self.bounds = [width, height];
    }

    /// Advances every particle by its velocity and wraps positions modulo
    /// the bounds, so a particle leaving one edge reappears at the opposite
    /// edge. Velocities never change.
    pub fn step(&mut self) {
        let [width, height] = self.bounds;
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        for particle in &mut self.particles {
            particle.pos[0] = wrap(particle.pos[0] + particle.vel[0], width);
            particle.pos[1] = wrap(particle.pos[1] + particle.vel[1], height);
        }
    }
}

fn wrap(value: f64, bound: f64) -> f64 {
    let wrapped = value.rem_euclid(bound);
    // rem_euclid can round up to the bound itself for tiny negative inputs
    if wrapped >= bound {
        0.0
    } else {
        wrapped
    }
}

pub fn distance(a: &Particle, b: &Particle) -> f64 {
    vecmath::vec2_len(vecmath::vec2_sub(a.pos, b.pos))
}

/// Opacity of the line connecting a pair at the given distance, or `None`
/// when the pair is at or beyond the connection threshold.
pub fn connection_alpha(distance: f64) -> Option<f64> {
    if distance < CONNECT_DISTANCE {
        Some(MAX_LINE_ALPHA * (1.0 - distance / CONNECT_DISTANCE))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn seeded_field(width: f64, height: f64, seed: u64) -> ParticleField {
        let mut rng = SmallRng::seed_from_u64(seed);
        ParticleField::new(width, height, &mut rng)
    }

    #[test]
    fn initial_values_are_in_range() {
        let field = seeded_field(800.0, 600.0, 7);
        for p in field.particles() {
            assert!(p.pos[0] >= 0.0 && p.pos[0] < 800.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] < 600.0);
            assert!(p.vel[0] >= -0.25 && p.vel[0] < 0.25);
            assert!(p.vel[1] >= -0.25 && p.vel[1] < 0.25);
            assert!(p.radius >= 2.0 && p.radius < 5.0);
            assert!(PALETTE.contains(&p.color));
        }
    }

    #[test]
    fn count_stays_fixed_across_steps() {
        let mut field = seeded_field(800.0, 600.0, 11);
        assert_eq!(field.particles().len(), PARTICLE_COUNT);
        for _ in 0..1_000 {
            field.step();
        }
        assert_eq!(field.particles().len(), PARTICLE_COUNT);
    }

    #[test]
    fn positions_stay_wrapped_after_many_steps() {
        for seed in 0..8 {
            let mut field = seeded_field(640.0, 480.0, seed);
            for _ in 0..10_000 {
                field.step();
                for p in field.particles() {
                    assert!(p.pos[0] >= 0.0 && p.pos[0] < 640.0, "x = {}", p.pos[0]);
                    assert!(p.pos[1] >= 0.0 && p.pos[1] < 480.0, "y = {}", p.pos[1]);
                }
            }
        }
    }

    #[test]
    fn wrap_invariant_holds_after_shrinking_resize() {
        let mut field = seeded_field(1920.0, 1080.0, 3);
        field.set_bounds(320.0, 240.0);
        for _ in 0..2_000 {
            field.step();
        }
        for p in field.particles() {
            assert!(p.pos[0] >= 0.0 && p.pos[0] < 320.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] < 240.0);
        }
    }

    #[test]
    fn resize_does_not_move_particles() {
        let mut field = seeded_field(800.0, 600.0, 5);
        let before: Vec<[f64; 2]> = field.particles().iter().map(|p| p.pos).collect();
        field.set_bounds(1024.0, 768.0);
        let after: Vec<[f64; 2]> = field.particles().iter().map(|p| p.pos).collect();
        assert_eq!(before, after);
        assert_eq!(field.width(), 1024.0);
        assert_eq!(field.height(), 768.0);
    }

    #[test]
    fn velocities_are_constant() {
        let mut field = seeded_field(800.0, 600.0, 13);
        let before: Vec<[f64; 2]> = field.particles().iter().map(|p| p.vel).collect();
        for _ in 0..500 {
            field.step();
        }
        let after: Vec<[f64; 2]> = field.particles().iter().map(|p| p.vel).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn connection_alpha_falls_off_linearly() {
        assert_eq!(connection_alpha(0.0), Some(MAX_LINE_ALPHA));
        let mid = connection_alpha(75.0).unwrap();
        assert!((mid - 0.075).abs() < 1e-12);
        let near_edge = connection_alpha(149.0).unwrap();
        assert!((near_edge - 0.15 * (1.0 - 149.0 / 150.0)).abs() < 1e-12);
    }

    #[test]
    fn no_connection_at_or_beyond_threshold() {
        assert_eq!(connection_alpha(150.0), None);
        assert_eq!(connection_alpha(151.0), None);
        assert_eq!(connection_alpha(1e6), None);
    }

    #[test]
    fn distance_is_euclidean() {
        let mut a = seeded_field(100.0, 100.0, 1).particles()[0];
        let mut b = a;
        a.pos = [0.0, 0.0];
        b.pos = [3.0, 4.0];
        assert!((distance(&a, &b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn zero_bounds_do_not_produce_nan() {
        let mut field = seeded_field(800.0, 600.0, 9);
        field.set_bounds(0.0, 0.0);
        field.step();
        for p in field.particles() {
            assert!(p.pos[0].is_finite());
            assert!(p.pos[1].is_finite());
        }
    }
}
