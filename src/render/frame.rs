//! Off-screen frame buffer
//!
//! Packed 0x00RRGGBB pixels in row-major order. The engine repaints the
//! whole frame every tick and hands it to the host's present target.

use glam::Vec2;

use super::sprite::SphereSprite;

/// CPU-side pixel buffer the simulation is composited into.
#[derive(Debug, Clone)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Frame {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Raw byte view for hosts that upload or copy bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Fill the whole frame with one color.
    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Composite a sprite centered on `center`, skipping key-colored pixels.
    /// Pixels falling outside the frame are clipped.
    pub fn blit(&mut self, sprite: &SphereSprite, center: Vec2) {
        let side = sprite.side() as i32;
        let left = center.x.round() as i32 - side / 2;
        let top = center.y.round() as i32 - side / 2;
        let key = sprite.key();
        for sy in 0..side {
            let fy = top + sy;
            if fy < 0 || fy >= self.height as i32 {
                continue;
            }
            for sx in 0..side {
                let fx = left + sx;
                if fx < 0 || fx >= self.width as i32 {
                    continue;
                }
                let px = sprite.pixels()[(sy * side + sx) as usize];
                if px == key {
                    continue;
                }
                self.pixels[(fy * self.width as i32 + fx) as usize] = px;
            }
        }
    }
}
