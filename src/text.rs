use ab_glyph::{FontRef, PxScale};
use image::Rgb;
use imageproc::drawing::{draw_text_mut, text_size};

use crate::canvas::Canvas;
use crate::error::{LockError, LockResult};

// Code text rendering
//------------------------------------------------------------------------------

static FONT_BYTES: &[u8] = include_bytes!("../assets/DejaVuSans-Bold.ttf");

pub(crate) fn code_font() -> LockResult<FontRef<'static>> {
    FontRef::try_from_slice(FONT_BYTES).map_err(|_| LockError::FontUnreadable)
}

/// Shrinks the text until it fits in a slot: the scale starts at the full slot
/// height and is divided by 1, 2, 3, ... until the rendered bounds fit both
/// axes. The divisor grows without limit, so the search always terminates.
fn fitting_scale(font: &FontRef, text: &str, slot_width: u32, slot_height: u32) -> (PxScale, u32, u32) {
    let mut div = 1.0f32;
    loop {
        let scale = PxScale::from(slot_height as f32 / div);
        let (width, height) = text_size(scale, font, text);
        if width <= slot_width && height <= slot_height {
            return (scale, width, height);
        }
        div += 1.0;
    }
}

/// Draws `text` centered into every slot of the canvas, auto-sized to the
/// largest scale that fits a single slot. Later encoders recover the shape by
/// thresholding luminance, so the ink must sit on the other side of 127 from
/// the background.
pub(crate) fn draw_code(canvas: &mut Canvas, text: &str, ink: Rgb<u8>) -> LockResult<()> {
    let font = code_font()?;
    let (scale, width, height) = fitting_scale(&font, text, canvas.slot_width(), canvas.slot_height());

    let offset_x = (canvas.slot_width() - width) / 2;
    let offset_y = (canvas.slot_height() - height) / 2;

    for index in 0..canvas.num_slots() {
        let area = canvas.area(index);
        let x = (area.x + offset_x) as i32;
        let y = (area.y + offset_y) as i32;
        draw_text_mut(canvas.image_mut(), ink, x, y, scale, &font, text);
    }
    Ok(())
}
