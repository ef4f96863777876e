//! Shared fakes for the integration tests.

#![allow(dead_code)]

use std::convert::Infallible;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
};
use embedded_storage::nor_flash::{
    ErrorType, NorFlash, NorFlashErrorKind, ReadNorFlash,
};
use web2wire_core::{
    CompletionNotifier, Indicator, IndicatorColor, JobData, NotifyError,
    indicator::OFF,
};

// -----------------------------------------------------------------------------
// Indicator that remembers every color it was asked to show
// -----------------------------------------------------------------------------

#[derive(Default)]
pub struct RecordingIndicator {
    pub current: IndicatorColor,
    pub history: Vec<IndicatorColor>,
}

impl RecordingIndicator {
    pub fn showing(color: IndicatorColor) -> Self {
        Self {
            current: color,
            history: Vec::new(),
        }
    }

    pub fn off() -> Self {
        Self::showing(OFF)
    }
}

impl Indicator for RecordingIndicator {
    fn set_indicator(&mut self, color: IndicatorColor) {
        self.current = color;
        self.history.push(color);
    }

    fn indicator(&self) -> IndicatorColor {
        self.current
    }
}

// -----------------------------------------------------------------------------
// Notifier that records reports, optionally failing
// -----------------------------------------------------------------------------

#[derive(Default)]
pub struct RecordingNotifier {
    /// Every call, failed or not
    pub attempts: usize,
    pub reports: Vec<JobData>,
    pub fail_with: Option<NotifyError>,
}

impl CompletionNotifier for RecordingNotifier {
    fn notify(&mut self, job: &JobData) -> Result<(), NotifyError> {
        self.attempts += 1;
        if let Some(error) = self.fail_with {
            return Err(error);
        }
        self.reports.push(job.clone());
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Full-screen framebuffer
// -----------------------------------------------------------------------------

pub struct FrameBuffer {
    size: Size,
    pixels: Vec<Rgb565>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Size::new(width, height),
            pixels: vec![Rgb565::new(1, 2, 3); (width * height) as usize],
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Rgb565 {
        self.pixels[(y as u32 * self.size.width + x as u32) as usize]
    }

    /// Number of pixels of `color` inside `area`
    pub fn count_in(&self, area: Rectangle, color: Rgb565) -> usize {
        area.points()
            .filter(|p| self.pixel(p.x, p.y) == color)
            .count()
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0
                && point.y >= 0
                && (point.x as u32) < self.size.width
                && (point.y as u32) < self.size.height
            {
                let index = point.y as u32 * self.size.width + point.x as u32;
                self.pixels[index as usize] = color;
            }
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// RAM-backed NOR flash: writes can only clear bits, erase sets them again
// -----------------------------------------------------------------------------

pub struct RamFlash {
    pub data: Vec<u8>,
    pub erase_count: usize,
    pub fail_writes: bool,
}

impl RamFlash {
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0xFF; capacity],
            erase_count: 0,
            fail_writes: false,
        }
    }
}

impl ErrorType for RamFlash {
    type Error = NorFlashErrorKind;
}

impl ReadNorFlash for RamFlash {
    const READ_SIZE: usize = 1;

    fn read(&mut self, offset: u32, bytes: &mut [u8]) -> Result<(), Self::Error> {
        let start = offset as usize;
        let source = self
            .data
            .get(start..start + bytes.len())
            .ok_or(NorFlashErrorKind::OutOfBounds)?;
        bytes.copy_from_slice(source);
        Ok(())
    }

    fn capacity(&self) -> usize {
        self.data.len()
    }
}

impl NorFlash for RamFlash {
    const WRITE_SIZE: usize = 1;
    const ERASE_SIZE: usize = 4096;

    fn erase(&mut self, from: u32, to: u32) -> Result<(), Self::Error> {
        let range = self
            .data
            .get_mut(from as usize..to as usize)
            .ok_or(NorFlashErrorKind::OutOfBounds)?;
        range.fill(0xFF);
        self.erase_count += 1;
        Ok(())
    }

    fn write(&mut self, offset: u32, bytes: &[u8]) -> Result<(), Self::Error> {
        if self.fail_writes {
            return Err(NorFlashErrorKind::Other);
        }
        let start = offset as usize;
        let target = self
            .data
            .get_mut(start..start + bytes.len())
            .ok_or(NorFlashErrorKind::OutOfBounds)?;
        for (cell, byte) in target.iter_mut().zip(bytes) {
            *cell &= byte;
        }
        Ok(())
    }
}
