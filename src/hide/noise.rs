use image::Rgb;
use rand::seq::SliceRandom;
use rand::Rng;

use super::luminance;
use crate::canvas::Canvas;

// Static noise encoder
//------------------------------------------------------------------------------

/// Fills the slot with apparent static while encoding the mask through channel
/// equality. Every pixel draws three pairwise distinct random levels; where
/// the pre-existing luminance exceeds 127 the second level is collapsed onto
/// the first, then the levels are shuffled before becoming R, G and B. The
/// mask survives any channel permutation: foreground pixels have two equal
/// channels, background pixels have none.
pub(crate) fn embed_noise(canvas: &mut Canvas, index: usize, rng: &mut impl Rng) {
    let area = canvas.area(index);

    for row in 0..area.height {
        for col in 0..area.width {
            let hide = canvas.pixel(area.x + col, area.y + row);

            let mut levels = distinct_levels(rng);
            if luminance(hide) > 127 {
                levels[1] = levels[0];
            }
            levels.shuffle(rng);

            canvas.put_pixel(area.x + col, area.y + row, Rgb(levels));
        }
    }
}

/// Three pairwise distinct levels in `[0, 255)`, drawn by reject-and-resample.
fn distinct_levels(rng: &mut impl Rng) -> [u8; 3] {
    let mut levels = [0u8; 3];
    for i in 0..3 {
        loop {
            levels[i] = rng.random_range(0..255);
            if !levels[..i].contains(&levels[i]) {
                break;
            }
        }
    }
    levels
}
