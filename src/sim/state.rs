//! World state and core simulation types

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::SimConfig;

/// RGBA color, pixel-buffer native
pub type Color = [u8; 4];

/// A single disc body
///
/// Radius is shared world-wide (`SimConfig::body_radius`); restitution is
/// per-body even though every spawn currently uses the same constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: DVec2,
    pub vel: DVec2,
    /// Rebound coefficient in (0, 1]
    pub restitution: f64,
    pub color: Color,
}

/// One filled-disc draw request handed to the platform layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscDraw {
    pub center: DVec2,
    pub radius: f64,
    pub color: Color,
}

/// The simulation world
///
/// Exclusive owner of every body. The collection is append-only: nothing
/// in scope removes a body, so indices are stable handles for the whole
/// session.
#[derive(Debug, Clone)]
pub struct World {
    pub config: SimConfig,
    pub bodies: Vec<Body>,
    rng: Pcg32,
}

impl World {
    /// Create an empty world with the given config and color seed
    pub fn new(config: SimConfig, seed: u64) -> Self {
        Self {
            config,
            bodies: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Spawn a disc at rest at the given surface coordinates
    ///
    /// New discs get zero velocity, the configured restitution and a
    /// random color from the world's seeded RNG.
    pub fn spawn_at(&mut self, x: i32, y: i32) {
        let color = [
            self.rng.random::<u8>(),
            self.rng.random::<u8>(),
            self.rng.random::<u8>(),
            255,
        ];
        self.bodies.push(Body {
            pos: DVec2::new(f64::from(x), f64::from(y)),
            vel: DVec2::ZERO,
            restitution: self.config.body_restitution,
            color,
        });
    }

    /// Produce this frame's draw requests, one per body in insertion order
    pub fn draw_list(&self) -> Vec<DiscDraw> {
        self.bodies
            .iter()
            .map(|body| DiscDraw {
                center: body.pos,
                radius: self.config.body_radius,
                color: body.color,
            })
            .collect()
    }
}
