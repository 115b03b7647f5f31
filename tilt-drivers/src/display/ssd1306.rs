//! SSD1306 OLED display driver
//!
//! Driver for 128x64 SSD1306 panels over I2C. Text is rendered with
//! embedded-graphics mono fonts into a [`FrameBuffer`], then pushed to the
//! panel one page at a time.

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_5X8};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use embedded_hal::i2c::I2c;
use tilt_core::config::DisplayOrientation;
use tilt_display::{DisplayBackend, DisplayError, Placement, Side, TextSize};

use super::framebuffer::{FrameBuffer, PAGES, WIDTH};

/// I2C address with SA0 pulled low
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Control byte: command stream follows
const CONTROL_COMMAND: u8 = 0x00;
/// Control byte: display data follows
const CONTROL_DATA: u8 = 0x40;

/// Gap kept between edge text and the panel border
const EDGE_MARGIN: i32 = 2;

/// SSD1306 commands
#[allow(dead_code)]
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const RESUME_RAM: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// Power-up sequence for a 128x64 panel on the internal charge pump
const INIT_SEQUENCE: &[u8] = &[
    cmd::DISPLAY_OFF,
    cmd::SET_CLOCK_DIV,
    0x80,
    cmd::SET_MUX_RATIO,
    0x3F, // 64 lines
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_START_LINE,
    cmd::SET_CHARGE_PUMP,
    0x14,
    cmd::SET_MEMORY_MODE,
    0x02, // Page addressing
    cmd::SET_SEG_REMAP,
    cmd::SET_COM_SCAN_DEC,
    cmd::SET_COM_PINS,
    0x12,
    cmd::SET_CONTRAST,
    0xCF,
    cmd::SET_PRECHARGE,
    0xF1,
    cmd::SET_VCOM_DETECT,
    0x40,
    cmd::RESUME_RAM,
    cmd::SET_NORMAL,
    cmd::DISPLAY_ON,
];

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
    buffer: FrameBuffer,
    ready: bool,
}

impl<I2C: I2c> Ssd1306<I2C> {
    /// Create a new SSD1306 driver
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            buffer: FrameBuffer::new(),
            ready: false,
        }
    }

    /// Initialize the panel and blank it
    pub fn init(&mut self) -> Result<(), DisplayError> {
        for &c in INIT_SEQUENCE {
            self.command(c)?;
        }
        self.ready = true;

        self.buffer.clear();
        self.flush()
    }

    /// Current frame buffer contents
    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// Release the bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn command(&mut self, c: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(self.address, &[CONTROL_COMMAND, c])
            .map_err(|_| DisplayError::Communication)
    }
}

impl<I2C: I2c> DisplayBackend for Ssd1306<I2C> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.buffer.clear();
        Ok(())
    }

    fn set_orientation(&mut self, orientation: DisplayOrientation) -> Result<(), DisplayError> {
        self.buffer.set_orientation(orientation);
        Ok(())
    }

    fn draw_text(
        &mut self,
        placement: Placement,
        size: TextSize,
        text: &str,
    ) -> Result<(), DisplayError> {
        let font = font_for(size);
        let position = anchor(placement, self.buffer.size(), font);
        let character_style = MonoTextStyle::new(font, BinaryColor::On);
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();

        // Drawing into the buffer cannot fail
        let _ = Text::with_text_style(text, position, character_style, text_style)
            .draw(&mut self.buffer);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        if !self.ready {
            return Err(DisplayError::NotInitialized);
        }

        for page in 0..PAGES {
            self.command(cmd::SET_PAGE_ADDR | page as u8)?;
            self.command(cmd::SET_LOW_COLUMN)?;
            self.command(cmd::SET_HIGH_COLUMN)?;

            let mut data = [0u8; WIDTH + 1];
            data[0] = CONTROL_DATA;
            data[1..].copy_from_slice(self.buffer.page(page));
            self.i2c
                .write(self.address, &data)
                .map_err(|_| DisplayError::Communication)?;
        }

        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}

fn font_for(size: TextSize) -> &'static MonoFont<'static> {
    match size {
        TextSize::Normal => &FONT_5X8,
        TextSize::Large => &FONT_10X20,
    }
}

/// Center point of a text item on a screen of the given logical size
fn anchor(placement: Placement, screen: Size, font: &MonoFont<'_>) -> Point {
    let w = screen.width as i32;
    let h = screen.height as i32;
    let glyph_w = font.character_size.width as i32;
    let glyph_h = font.character_size.height as i32;

    // Edge labels are at most three glyphs wide ("30s")
    let edge_x = EDGE_MARGIN + glyph_w * 3 / 2;
    let edge_y = EDGE_MARGIN + glyph_h / 2;
    let inner_x = edge_x + glyph_w * 2;
    let inner_y = edge_y + glyph_h;

    match placement {
        Placement::Center => Point::new(w / 2, h / 2),
        Placement::Edge(side) => match side {
            Side::Top => Point::new(w / 2, edge_y),
            Side::Bottom => Point::new(w / 2, h - edge_y),
            Side::Left => Point::new(edge_x, h / 2),
            Side::Right => Point::new(w - edge_x, h / 2),
        },
        Placement::Inner(side) => match side {
            Side::Top => Point::new(w / 2, inner_y),
            Side::Bottom => Point::new(w / 2, h - inner_y),
            Side::Left => Point::new(inner_x, h / 2),
            Side::Right => Point::new(w - inner_x, h / 2),
        },
        Placement::Upper => Point::new(w / 2, h / 3),
        Placement::Lower => Point::new(w / 2, h * 2 / 3),
    }
}
