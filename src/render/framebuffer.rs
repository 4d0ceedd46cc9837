//! CPU framebuffer that rasterizes draw commands and feeds a raylib texture.
use raylib::prelude::*;
use raylib::core::texture::RaylibTexture2D; // update_texture()

use crate::render::frame::DrawCommand;

pub struct Framebuffer {
    pub color_buffer: Vec<Color>,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    bytes: Vec<u8>,
}

#[inline]
fn blend_channel(src: u8, dst: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((src as u32 * a + dst as u32 * (255 - a) + 127) / 255) as u8
}

/// Source-over blend of `src` onto an opaque `dst`.
#[inline]
pub fn blend(src: Color, dst: Color) -> Color {
    match src.a {
        255 => src,
        0 => dst,
        a => Color::new(
            blend_channel(src.r, dst.r, a),
            blend_channel(src.g, dst.g, a),
            blend_channel(src.b, dst.b, a),
            255,
        ),
    }
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        let bg = Color::BLACK;
        Self {
            color_buffer: vec![bg; size],
            width,
            height,
            background_color: bg,
            bytes: Vec::with_capacity(size * 4),
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.color_buffer.fill(self.background_color);
    }

    #[cfg(test)]
    fn get_pixel(&self, x: u32, y: u32) -> Color {
        if x < self.width && y < self.height {
            return self.color_buffer[y as usize * self.width as usize + x as usize];
        }
        self.background_color
    }

    #[inline]
    fn blend_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width && y < self.height {
            let idx = y as usize * self.width as usize + x as usize;
            self.color_buffer[idx] = blend(color, self.color_buffer[idx]);
        }
    }

    /// Clamps a pixel span `[a, b)` to `[0, limit)`.
    #[inline]
    fn span(a: f32, b: f32, limit: u32) -> (u32, u32) {
        let lo = a.round().max(0.0).min(limit as f32) as u32;
        let hi = b.round().max(0.0).min(limit as f32) as u32;
        (lo, hi.max(lo))
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let (x0, x1) = Self::span(x, x + w, self.width);
        let (y0, y1) = Self::span(y, y + h, self.height);
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend_pixel(px, py, color);
            }
        }
    }

    /// Fills every pixel whose centre lies within the circle.
    pub fn fill_circle(&mut self, cx: f32, cy: f32, diameter: f32, color: Color) {
        let r = diameter * 0.5;
        if r.is_nan() || r <= 0.0 { return; }
        let (y0, y1) = Self::span(cy - r, cy + r, self.height);
        for py in y0..y1 {
            let dy = py as f32 + 0.5 - cy;
            let half = r * r - dy * dy;
            if half < 0.0 { continue; }
            let half = half.sqrt();
            let (x0, x1) = Self::span(cx - half, cx + half, self.width);
            for px in x0..x1 {
                self.blend_pixel(px, py, color);
            }
        }
    }

    /// Draws shapes in order. Text is skipped and left to the window backend.
    pub fn rasterize(&mut self, commands: &[DrawCommand]) {
        for cmd in commands {
            match *cmd {
                DrawCommand::FillRect { x, y, w, h, color } => self.fill_rect(x, y, w, h, color),
                DrawCommand::FillCircle { cx, cy, diameter, color } => {
                    self.fill_circle(cx, cy, diameter, color)
                }
                DrawCommand::Text { .. } => {}
            }
        }
    }

    /// Copies the pixels into a persistent RGBA8 texture of the same size.
    pub fn upload_to_texture(&mut self, tex: &mut Texture2D) {
        self.bytes.clear();
        self.bytes.extend(self.color_buffer.iter().flat_map(|c| [c.r, c.g, c.b, c.a]));
        if let Err(e) = tex.update_texture(&self.bytes) {
            log::warn!("frame upload failed, keeping previous frame: {e:?}");
        }
    }
}
