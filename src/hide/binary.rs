use image::RgbImage;

use crate::canvas::Canvas;

// Binary ASCII encoder
//------------------------------------------------------------------------------

/// The literal sentence embedded by the binary encoder.
pub(crate) fn message_for(code: &str) -> String {
    format!("The code for your lock is {code}.")
}

/// Writes `message` as raw ASCII bits into the red channel's least significant
/// bit, one bit per pixel in row-major scan order, most significant bit first
/// within each byte. Pixels past the end of the message carry bit 0. The other
/// seven red bits and the remaining channels come from the fitted donor, so
/// recovery means reading the red bit plane as a bitstream, not as an image.
pub(crate) fn embed_message(canvas: &mut Canvas, index: usize, message: &str, donor: &RgbImage) {
    let area = canvas.area(index);
    debug_assert_eq!((donor.width(), donor.height()), (area.width, area.height));

    let bytes = message.as_bytes();
    let mut byte_index = 0usize;
    let mut bit_index = 0u8;

    for row in 0..area.height {
        for col in 0..area.width {
            let mut out = *donor.get_pixel(col, row);

            let bit = if byte_index < bytes.len() {
                (bytes[byte_index] >> (7 - bit_index)) & 1
            } else {
                0
            };
            out[0] = (out[0] & 0b1111_1110) | bit;

            bit_index += 1;
            if bit_index == 8 {
                bit_index = 0;
                byte_index += 1;
            }

            canvas.put_pixel(area.x + col, area.y + row, out);
        }
    }
}
