//! Rotating monochrome frame buffer
//!
//! Page-organized like the panel's GDDRAM (one byte covers eight vertical
//! pixels), so a flush is a straight copy of each page. Drawing goes
//! through embedded-graphics in logical coordinates; the current rotation
//! maps them onto the physical 128x64 grid.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use tilt_core::config::DisplayOrientation;

/// Physical panel width
pub const WIDTH: usize = 128;
/// Physical panel height
pub const HEIGHT: usize = 64;
/// Number of 8-pixel pages
pub const PAGES: usize = HEIGHT / 8;

/// 1 bpp frame buffer with quarter-turn rotation
pub struct FrameBuffer {
    pages: [[u8; WIDTH]; PAGES],
    orientation: DisplayOrientation,
}

impl FrameBuffer {
    /// Create a blank, upright buffer
    pub const fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; PAGES],
            orientation: DisplayOrientation::Rot0,
        }
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        for page in self.pages.iter_mut() {
            page.fill(0);
        }
    }

    /// Rotation applied to subsequent drawing
    pub fn set_orientation(&mut self, orientation: DisplayOrientation) {
        self.orientation = orientation;
    }

    /// Set a pixel in logical coordinates; off-screen pixels are ignored
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        let Some((px, py)) = self.to_physical(x, y) else {
            return;
        };
        let bit = 1u8 << (py % 8);
        let byte = &mut self.pages[py / 8][px];
        if on {
            *byte |= bit;
        } else {
            *byte &= !bit;
        }
    }

    /// Read a pixel in physical coordinates
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        x < WIDTH && y < HEIGHT && self.pages[y / 8][x] & (1 << (y % 8)) != 0
    }

    /// Raw bytes of one page
    pub fn page(&self, index: usize) -> &[u8; WIDTH] {
        &self.pages[index]
    }

    /// Check if no pixel is lit
    pub fn is_blank(&self) -> bool {
        self.pages.iter().all(|page| page.iter().all(|&b| b == 0))
    }

    fn to_physical(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let size = self.size();
        if x < 0 || y < 0 || x >= size.width as i32 || y >= size.height as i32 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        Some(match self.orientation {
            DisplayOrientation::Rot0 => (x, y),
            DisplayOrientation::Rot90 => (WIDTH - 1 - y, x),
            DisplayOrientation::Rot180 => (WIDTH - 1 - x, HEIGHT - 1 - y),
            DisplayOrientation::Rot270 => (y, HEIGHT - 1 - x),
        })
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        if self.orientation.is_sideways() {
            Size::new(HEIGHT as u32, WIDTH as u32)
        } else {
            Size::new(WIDTH as u32, HEIGHT as u32)
        }
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.is_on());
        }
        Ok(())
    }
}
