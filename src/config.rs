//! Immutable simulation configuration
//!
//! Every physical tunable is bundled here and handed to `World`
//! construction once; there are no process-wide mutable globals.

use crate::consts::*;

/// Fixed parameters of a simulation run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    /// Viewport width in simulation units (one unit per pixel)
    pub width: f64,
    /// Viewport height; the floor sits at `y == height`
    pub height: f64,
    /// Shared radius of every disc
    pub body_radius: f64,
    /// Downward velocity gained per step
    pub gravity: f64,
    /// Rebound scaling on floor and side-wall contact
    pub wall_restitution: f64,
    /// Rebound coefficient given to newly spawned discs
    pub body_restitution: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: f64::from(VIEW_WIDTH),
            height: f64::from(VIEW_HEIGHT),
            body_radius: BODY_RADIUS,
            gravity: GRAVITY,
            wall_restitution: WALL_RESTITUTION,
            body_restitution: BODY_RESTITUTION,
        }
    }
}
