// sink.rs - Displays that accept finished frames

use std::io::Write;

use smart_leds::RGB8;

use crate::frame::Frame;
use crate::mapper::CoordinateMapper;
use crate::{Error, Result};

/// Something that shows [`Frame`]s: an LED panel, a window, a terminal.
pub trait DisplaySink {
    /// Blanks the display.
    fn clear(&mut self) -> Result<()>;

    /// Sets the global brightness applied to every later frame.
    fn set_brightness(&mut self, level: u8);

    /// Shows `frame`, returning once it is latched.
    fn present(&mut self, frame: &Frame) -> Result<()>;
}

/// Scales every pixel by `level / 256`.
#[must_use]
pub fn dim(pixels: &[RGB8], level: u8) -> Vec<RGB8> {
    smart_leds::brightness(pixels.iter().copied(), level).collect()
}

/// Checks that `frame` was laid out for a panel of the same size and wiring as `expected`.
pub fn check_frame(expected: &CoordinateMapper, frame: &Frame) -> Result<()> {
    let actual = frame.mapper();
    if actual.width() != expected.width() || actual.height() != expected.height() {
        return Err(Error::FrameSize {
            expected_width: expected.width(),
            expected_height: expected.height(),
            actual_width: actual.width(),
            actual_height: actual.height(),
        });
    }
    if actual.wiring() != expected.wiring() {
        return Err(Error::FrameWiring {
            expected: expected.wiring(),
            actual: actual.wiring(),
        });
    }
    Ok(())
}

/// Draws frames as 24-bit ANSI color blocks, two characters per LED.
///
/// Pixels are read back through the panel's wiring, so what appears matches the
/// physical layout rather than the chain order.
pub struct TerminalSink<W: Write> {
    out: W,
    mapper: CoordinateMapper,
    brightness: u8,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, mapper: CoordinateMapper) -> Self {
        Self {
            out,
            mapper,
            brightness: u8::MAX,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for TerminalSink<W> {
    fn clear(&mut self) -> Result<()> {
        // Clear screen, cursor home.
        write!(self.out, "\x1b[2J\x1b[H")?;
        self.out.flush()?;
        Ok(())
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
    }

    fn present(&mut self, frame: &Frame) -> Result<()> {
        check_frame(&self.mapper, frame)?;
        let pixels = dim(frame.pixels(), self.brightness);
        let mut text = String::with_capacity(pixels.len() * 24);
        text.push_str("\x1b[H");
        for y in 0..self.mapper.height() {
            for x in 0..self.mapper.width() {
                let pixel = pixels[self.mapper.map(x, y)];
                text.push_str(&format!("\x1b[48;2;{};{};{}m  ", pixel.r, pixel.g, pixel.b));
            }
            text.push_str("\x1b[0m\n");
        }
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Keeps every presented frame in memory, already dimmed.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub frames: Vec<Vec<RGB8>>,
    pub clears: usize,
    pub brightness: Option<u8>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplaySink for RecordingSink {
    fn clear(&mut self) -> Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = Some(level);
    }

    fn present(&mut self, frame: &Frame) -> Result<()> {
        let level = self.brightness.unwrap_or(u8::MAX);
        self.frames.push(dim(frame.pixels(), level));
        Ok(())
    }
}
