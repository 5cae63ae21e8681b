use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use crate::error::{LockError, LockResult};

// Slot area
//------------------------------------------------------------------------------

/// One rectangular sub-region of a canvas, in absolute pixel coordinates.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SlotArea {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl SlotArea {
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

// Canvas
//------------------------------------------------------------------------------

/// A pixel buffer partitioned into a grid of equally sized slots.
///
/// Slot dimensions come from integer division of the buffer dimensions, so a
/// remainder strip on the right/bottom edge may fall outside every slot; those
/// pixels are never written. Slots are numbered column by column: slot 0 is
/// top left, slot 1 directly below it, wrapping to the next column after
/// `rows` slots.
#[derive(Debug, Clone)]
pub struct Canvas {
    img: RgbImage,
    rows: u32,
    cols: u32,
    slot_width: u32,
    slot_height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32, rows: u32, cols: u32) -> LockResult<Self> {
        if rows == 0 || cols == 0 || height / rows == 0 || width / cols == 0 {
            return Err(LockError::InvalidGeometry { width, height, rows, cols });
        }
        Ok(Self { img: RgbImage::new(width, height), rows, cols, slot_width: width / cols, slot_height: height / rows })
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn slot_width(&self) -> u32 {
        self.slot_width
    }

    pub fn slot_height(&self) -> u32 {
        self.slot_height
    }

    pub fn num_slots(&self) -> usize {
        (self.rows * self.cols) as usize
    }

    fn slot_row(&self, index: usize) -> u32 {
        index as u32 % self.rows
    }

    fn slot_col(&self, index: usize) -> u32 {
        index as u32 / self.rows
    }

    /// Returns the rectangle covered by the slot at `index`.
    pub fn area(&self, index: usize) -> SlotArea {
        debug_assert!(index < self.num_slots(), "slot index out of range");

        SlotArea {
            x: self.slot_col(index) * self.slot_width,
            y: self.slot_row(index) * self.slot_height,
            width: self.slot_width,
            height: self.slot_height,
        }
    }

    /// Fills one slot with a solid color.
    pub fn fill_slot(&mut self, index: usize, color: Rgb<u8>) {
        let area = self.area(index);
        let rect = Rect::at(area.x as i32, area.y as i32).of_size(area.width, area.height);
        draw_filled_rect_mut(&mut self.img, rect, color);
    }

    /// Fills every slot with a solid color. Remainder pixels outside the slot
    /// grid are left untouched.
    pub fn fill(&mut self, color: Rgb<u8>) {
        for index in 0..self.num_slots() {
            self.fill_slot(index, color);
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        *self.img.get_pixel(x, y)
    }

    pub fn put_pixel(&mut self, x: u32, y: u32, color: Rgb<u8>) {
        self.img.put_pixel(x, y, color);
    }

    pub fn image(&self) -> &RgbImage {
        &self.img
    }

    pub(crate) fn image_mut(&mut self) -> &mut RgbImage {
        &mut self.img
    }

    pub fn into_image(self) -> RgbImage {
        self.img
    }

    pub fn save(&self, path: impl AsRef<std::path::Path>) -> LockResult<()> {
        let path = path.as_ref();
        self.img.save(path).map_err(|e| LockError::SaveFailed(format!("{}: {e}", path.display())))
    }
}
