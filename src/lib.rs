//! Ballpit - click-to-spawn bouncing discs
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, collisions, world state)
//! - `renderer`: CPU rasterizer drawing filled discs into an RGBA8 buffer
//! - `config`: Immutable simulation configuration

pub mod config;
pub mod renderer;
pub mod sim;

pub use config::SimConfig;

/// Simulation configuration constants
pub mod consts {
    /// Viewport width in pixels
    pub const VIEW_WIDTH: u32 = 640;
    /// Viewport height in pixels
    pub const VIEW_HEIGHT: u32 = 480;

    /// Shared disc radius (all bodies are uniform discs)
    pub const BODY_RADIUS: f64 = 20.0;
    /// Downward velocity gained per step (dt is one frame unit)
    pub const GRAVITY: f64 = 0.2;
    /// Rebound scaling on floor and side-wall contact
    pub const WALL_RESTITUTION: f64 = 0.8;
    /// Rebound coefficient given to newly spawned discs
    pub const BODY_RESTITUTION: f64 = 0.8;

    /// Fixed end-of-frame delay in milliseconds (no adaptive timestep)
    pub const FRAME_DELAY_MS: u64 = 16;

    /// Surface clear color (RGBA)
    pub const BACKGROUND: [u8; 4] = [255, 255, 255, 255];
}
