use std::time::Duration;

use crate::animate::Animation;

pub const PARTICLE_COUNT: usize = 50;
pub const LINK_DISTANCE: f64 = 100.0;
/// Nominal frame period. In the browser frames follow `requestAnimationFrame`.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

const MAX_SPEED: f64 = 0.25;
const MIN_RADIUS: f64 = 1.0;
const RADIUS_SPREAD: f64 = 2.0;
const MAX_LINK_ALPHA: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

/// A line between two nearby particles, fading out with distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub alpha: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleFrame {
    pub width: f64,
    pub height: f64,
    pub particles: Vec<Particle>,
    pub links: Vec<Link>,
}

/// Drifting particles that bounce off the edges of the field.
#[derive(Debug, Clone)]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// `random` must yield values in `[0, 1)`.
    pub fn new(width: f64, height: f64, count: usize, mut random: impl FnMut() -> f64) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                x: random() * width,
                y: random() * height,
                vx: (random() - 0.5) * 2.0 * MAX_SPEED,
                vy: (random() - 0.5) * 2.0 * MAX_SPEED,
                radius: random() * RADIUS_SPREAD + MIN_RADIUS,
            })
            .collect();
        Self {
            width,
            height,
            particles,
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Move every particle one frame. A particle outside the field on an axis
    /// has its velocity on that axis reversed.
    pub fn advance(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            if p.x < 0.0 || p.x > self.width {
                p.vx = -p.vx;
            }
            if p.y < 0.0 || p.y > self.height {
                p.vy = -p.vy;
            }
        }
    }

    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = (a.x - b.x).hypot(a.y - b.y);
                if distance < LINK_DISTANCE {
                    links.push(Link {
                        x1: a.x,
                        y1: a.y,
                        x2: b.x,
                        y2: b.y,
                        alpha: MAX_LINK_ALPHA * (1.0 - distance / LINK_DISTANCE),
                    });
                }
            }
        }
        links
    }
}

impl Animation for ParticleField {
    type Frame = ParticleFrame;

    fn next_delay(&self) -> Option<Duration> {
        Some(FRAME_INTERVAL)
    }

    fn step(&mut self) -> bool {
        self.advance();
        true
    }

    fn frame(&self) -> ParticleFrame {
        ParticleFrame {
            width: self.width,
            height: self.height,
            particles: self.particles.clone(),
            links: self.links(),
        }
    }
}
