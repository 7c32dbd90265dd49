//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and platform-free:
//! - Fixed timestep only (dt is one frame unit)
//! - Seeded RNG only
//! - Stable body iteration order (insertion order)
//! - No rendering or windowing dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::resolve_pair;
pub use state::{Body, Color, DiscDraw, World};
pub use tick::{Event, FrameInput, advance, integrate, step};
