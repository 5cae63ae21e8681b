use image::{Rgb, RgbImage};
use rand::Rng;

use crate::canvas::Canvas;
use crate::donor::{fit_to_slot, DonorPool};
use crate::error::LockResult;
use crate::hide::{binary, gradient, lsb, noise, Algorithm, Channel};
use crate::text::draw_code;

// Defaults
//------------------------------------------------------------------------------

pub const DEFAULT_WIDTH: u32 = 200;
pub const DEFAULT_HEIGHT: u32 = 150;

// LockImageBuilder
//------------------------------------------------------------------------------

/// Builder for a [`LockImage`]. The code text is rendered into every slot at
/// build time; hiding algorithms are applied afterwards, one slot at a time.
pub struct LockImageBuilder {
    code: String,
    width: u32,
    height: u32,
    rows: u32,
    cols: u32,
    background: Rgb<u8>,
    ink: Rgb<u8>,
}

impl LockImageBuilder {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            rows: 1,
            cols: 1,
            background: Rgb([0, 0, 0]),
            ink: Rgb([255, 255, 255]),
        }
    }

    pub fn size(&mut self, width: u32, height: u32) -> &mut Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn grid(&mut self, rows: u32, cols: u32) -> &mut Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Background and ink must sit on opposite sides of the 127 luminance
    /// threshold or the mask-based algorithms will see an empty slot.
    pub fn background(&mut self, color: Rgb<u8>) -> &mut Self {
        self.background = color;
        self
    }

    pub fn ink(&mut self, color: Rgb<u8>) -> &mut Self {
        self.ink = color;
        self
    }

    pub fn build(&self) -> LockResult<LockImage> {
        let mut canvas = Canvas::new(self.width, self.height, self.rows, self.cols)?;
        canvas.fill(self.background);
        draw_code(&mut canvas, &self.code, self.ink)?;
        Ok(LockImage { canvas, code: self.code.clone() })
    }
}

// LockImage
//------------------------------------------------------------------------------

/// A slot-partitioned puzzle image concealing one code. Each slot starts out
/// showing the code as plain text and can be overwritten by one hiding
/// algorithm.
#[derive(Debug)]
pub struct LockImage {
    canvas: Canvas,
    code: String,
}

impl LockImage {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Fills one slot with a solid color, erasing its rendered text.
    pub fn fill_slot(&mut self, index: usize, color: Rgb<u8>) {
        self.canvas.fill_slot(index, color);
    }

    /// Hides the slot's text mask in one channel's LSB of the donor photo.
    pub fn hide_in_channel(&mut self, index: usize, channel: Channel, donor: &RgbImage) {
        let fitted = fit_to_slot(donor, self.canvas.slot_width(), self.canvas.slot_height());
        lsb::embed_mask(&mut self.canvas, index, channel, &fitted);
    }

    /// Masks the slot's text in random static.
    pub fn hide_static(&mut self, index: usize, rng: &mut impl Rng) {
        noise::embed_noise(&mut self.canvas, index, rng);
    }

    /// Replaces the slot with a column-shuffled gradient decoy.
    pub fn hide_gradient(&mut self, index: usize, rng: &mut impl Rng) {
        gradient::embed_gradient(&mut self.canvas, index, rng);
    }

    /// Hides `"The code for your lock is <code>."` as an ASCII bitstream in
    /// the red channel of the donor photo.
    pub fn hide_binary(&mut self, index: usize, donor: &RgbImage) {
        let fitted = fit_to_slot(donor, self.canvas.slot_width(), self.canvas.slot_height());
        let message = binary::message_for(&self.code);
        binary::embed_message(&mut self.canvas, index, &message, &fitted);
    }

    /// Applies one algorithm to one slot, drawing a fresh donor from the pool
    /// where the algorithm needs a photograph. Donor failures propagate and
    /// abort this image.
    pub fn apply(
        &mut self,
        algorithm: Algorithm,
        index: usize,
        donors: &DonorPool,
        rng: &mut impl Rng,
    ) -> LockResult<()> {
        match algorithm {
            Algorithm::RedLsb => {
                let donor = donors.pick(rng)?;
                self.hide_in_channel(index, Channel::Red, &donor);
            }
            Algorithm::GreenLsb => {
                let donor = donors.pick(rng)?;
                self.hide_in_channel(index, Channel::Green, &donor);
            }
            Algorithm::BlueLsb => {
                let donor = donors.pick(rng)?;
                self.hide_in_channel(index, Channel::Blue, &donor);
            }
            Algorithm::StaticNoise => self.hide_static(index, rng),
            Algorithm::GradientShuffle => self.hide_gradient(index, rng),
            Algorithm::BinaryAscii => {
                let donor = donors.pick(rng)?;
                self.hide_binary(index, &donor);
            }
        }
        Ok(())
    }

    /// Numeric-id dispatch boundary, see [`Algorithm::from_id`].
    pub fn apply_id(
        &mut self,
        id: u8,
        index: usize,
        donors: &DonorPool,
        rng: &mut impl Rng,
    ) -> LockResult<()> {
        self.apply(Algorithm::from_id(id)?, index, donors, rng)
    }

    /// Saves the image as PNG.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> LockResult<()> {
        self.canvas.save(path)
    }

    pub fn into_image(self) -> RgbImage {
        self.canvas.into_image()
    }
}
