//! Fixed-step world advancement
//!
//! One frame: apply the drained input events, integrate every body, then
//! resolve every unordered pair of discs.

use crate::config::SimConfig;

use super::collision::resolve_pair;
use super::state::{Body, World};

/// One discrete platform event, drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Left click at surface coordinates
    SpawnAt { x: i32, y: i32 },
    /// Terminate the frame loop before the next iteration
    Quit,
}

/// All events drained for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub events: Vec<Event>,
}

/// Advance one body by one step
///
/// Semi-implicit Euler: gravity accrues into velocity before the position
/// update. Containment clamps against the floor and the two side walls;
/// there is no ceiling, upward excursions are unbounded.
pub fn integrate(body: &mut Body, config: &SimConfig) {
    body.vel.y += config.gravity;
    body.pos += body.vel;

    // Floor. Hard reflection: fires every frame the disc is in contact,
    // which leaves a small residual jitter for discs at rest.
    if body.pos.y + config.body_radius >= config.height {
        body.pos.y = config.height - config.body_radius;
        body.vel.y = -body.vel.y * config.wall_restitution;
    }

    // Side walls are mutually exclusive: a disc cannot penetrate both at
    // this radius/width ratio.
    if body.pos.x - config.body_radius <= 0.0 {
        body.pos.x = config.body_radius;
        body.vel.x = -body.vel.x * config.wall_restitution;
    } else if body.pos.x + config.body_radius >= config.width {
        body.pos.x = config.width - config.body_radius;
        body.vel.x = -body.vel.x * config.wall_restitution;
    }
}

/// Advance the whole world by one step
///
/// Integrates every body in insertion order, then resolves every `(i, j)`
/// pair with `i < j` once. All-pairs, O(n²); body counts stay small
/// because every disc is operator-spawned.
pub fn step(world: &mut World) {
    let config = world.config;
    for body in &mut world.bodies {
        integrate(body, &config);
    }

    let combined = 2.0 * config.body_radius;
    for i in 0..world.bodies.len() {
        let (head, tail) = world.bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            resolve_pair(a, b, combined);
        }
    }
}

/// Apply one frame's events, then step the world
///
/// Spawns land before the step, never mid-step. A `Quit` event does not
/// cut the frame short; it makes this return `false` so the caller ends
/// the loop before the next iteration.
pub fn advance(world: &mut World, input: &FrameInput) -> bool {
    let mut keep_running = true;
    for event in &input.events {
        match *event {
            Event::SpawnAt { x, y } => world.spawn_at(x, y),
            Event::Quit => keep_running = false,
        }
    }
    step(world);
    keep_running
}
