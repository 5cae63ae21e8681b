use image::RgbImage;

use super::luminance;
use crate::canvas::Canvas;

// Channel LSB encoder
//------------------------------------------------------------------------------

/// The color channel carrying the hidden mask.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub(crate) fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// Replaces the slot with the fitted donor image, with one channel's least
/// significant bit rewritten to the slot's bright/dark mask: bit 1 where the
/// pre-existing pixel's luminance exceeds 127, bit 0 elsewhere. All other bits
/// come from the donor, so the slot looks like the photograph and only the
/// isolated bit plane reveals the text shape.
pub(crate) fn embed_mask(canvas: &mut Canvas, index: usize, channel: Channel, donor: &RgbImage) {
    let area = canvas.area(index);
    debug_assert_eq!((donor.width(), donor.height()), (area.width, area.height));

    let ch = channel.index();
    for row in 0..area.height {
        for col in 0..area.width {
            let hide = canvas.pixel(area.x + col, area.y + row);
            let mut out = *donor.get_pixel(col, row);
            if luminance(hide) > 127 {
                out[ch] |= 0b0000_0001;
            } else {
                out[ch] &= 0b1111_1110;
            }
            canvas.put_pixel(area.x + col, area.y + row, out);
        }
    }
}
