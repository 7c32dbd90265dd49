//! CPU rasterizer
//!
//! Draws the world into an RGBA8 pixel buffer: clear to the background
//! color, then one filled disc per body. Rasterization is a bounding-box
//! scan with an inside-circle test; pixels outside the surface are
//! silently clipped.

use crate::consts::BACKGROUND;
use crate::sim::{Color, DiscDraw, World};

/// Fill the whole buffer with one color
pub fn clear(frame: &mut [u8], color: Color) {
    for pixel in frame.chunks_exact_mut(4) {
        pixel.copy_from_slice(&color);
    }
}

/// Write one pixel, silently skipping coordinates outside the surface
fn set_pixel(frame: &mut [u8], width: u32, height: u32, x: i64, y: i64, color: Color) {
    if x < 0 || y < 0 || x >= i64::from(width) || y >= i64::from(height) {
        return;
    }
    let idx = (y as usize * width as usize + x as usize) * 4;
    frame[idx..idx + 4].copy_from_slice(&color);
}

/// Rasterize a filled disc
///
/// Scans the disc's bounding box and keeps pixels with `dx² + dy² <= r²`.
/// The center truncates to the integer pixel grid.
pub fn fill_disc(frame: &mut [u8], width: u32, height: u32, draw: &DiscDraw) {
    let r = draw.radius.ceil() as i64;
    let cx = draw.center.x as i64;
    let cy = draw.center.y as i64;
    let r_sq = draw.radius * draw.radius;

    for dy in -r..=r {
        for dx in -r..=r {
            if ((dx * dx + dy * dy) as f64) <= r_sq {
                set_pixel(frame, width, height, cx + dx, cy + dy, draw.color);
            }
        }
    }
}

/// Draw one frame: clear, then every disc in draw-list order
pub fn render(world: &World, frame: &mut [u8], width: u32, height: u32) {
    clear(frame, BACKGROUND);
    for draw in world.draw_list() {
        fill_disc(frame, width, height, &draw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SimConfig;
    use glam::DVec2;

    const W: u32 = 16;
    const H: u32 = 16;

    fn buffer() -> Vec<u8> {
        vec![0u8; (W * H * 4) as usize]
    }

    fn pixel(frame: &[u8], x: u32, y: u32) -> Color {
        let idx = ((y * W + x) * 4) as usize;
        [frame[idx], frame[idx + 1], frame[idx + 2], frame[idx + 3]]
    }

    #[test]
    fn test_clear_fills_every_pixel() {
        let mut frame = buffer();
        clear(&mut frame, [10, 20, 30, 255]);
        for y in 0..H {
            for x in 0..W {
                assert_eq!(pixel(&frame, x, y), [10, 20, 30, 255]);
            }
        }
    }

    #[test]
    fn test_fill_disc_inside_test() {
        let mut frame = buffer();
        let draw = DiscDraw {
            center: DVec2::new(8.0, 8.0),
            radius: 3.0,
            color: [255, 0, 0, 255],
        };
        fill_disc(&mut frame, W, H, &draw);

        // Center and cardinal extremes are inside
        assert_eq!(pixel(&frame, 8, 8), [255, 0, 0, 255]);
        assert_eq!(pixel(&frame, 11, 8), [255, 0, 0, 255]);
        assert_eq!(pixel(&frame, 8, 5), [255, 0, 0, 255]);
        // Bounding-box corner fails dx² + dy² <= r²
        assert_eq!(pixel(&frame, 11, 11), [0, 0, 0, 0]);
        // Just past the radius
        assert_eq!(pixel(&frame, 12, 8), [0, 0, 0, 0]);
    }

    #[test]
    fn test_fill_disc_clips_at_edges() {
        let mut frame = buffer();
        let draw = DiscDraw {
            center: DVec2::new(0.0, 0.0),
            radius: 3.0,
            color: [0, 255, 0, 255],
        };
        // Half the disc is off-surface; must not panic or wrap
        fill_disc(&mut frame, W, H, &draw);

        assert_eq!(pixel(&frame, 0, 0), [0, 255, 0, 255]);
        assert_eq!(pixel(&frame, 3, 0), [0, 255, 0, 255]);
        // Opposite edge untouched (no wraparound writes)
        assert_eq!(pixel(&frame, W - 1, 0), [0, 0, 0, 0]);
        assert_eq!(pixel(&frame, 0, H - 1), [0, 0, 0, 0]);
    }

    #[test]
    fn test_render_clears_then_draws() {
        let config = SimConfig {
            width: f64::from(W),
            height: f64::from(H),
            body_radius: 2.0,
            ..SimConfig::default()
        };
        let mut world = World::new(config, 21);
        world.spawn_at(8, 8);
        let body_color = world.bodies[0].color;

        let mut frame = buffer();
        render(&world, &mut frame, W, H);

        assert_eq!(pixel(&frame, 8, 8), body_color);
        // Far corner shows the background
        assert_eq!(pixel(&frame, 0, H - 1), crate::consts::BACKGROUND);
    }
}
