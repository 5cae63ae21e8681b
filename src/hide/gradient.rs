use image::Rgb;
use rand::seq::SliceRandom;
use rand::Rng;

use super::luminance;
use crate::canvas::Canvas;

// Gradient shuffle encoder
//------------------------------------------------------------------------------

/// Paints the mask as a blue gradient keyed on the column index, then shuffles
/// whole columns. Note the inverted convention: luminance below 127 receives
/// the gradient color, everything else turns solid black. The column
/// permutation comes from an unrecorded random source, so the original
/// column order cannot be reconstructed; this encoder is a decoy.
pub(crate) fn embed_gradient(canvas: &mut Canvas, index: usize, rng: &mut impl Rng) {
    let area = canvas.area(index);

    let mut columns: Vec<Vec<Rgb<u8>>> = Vec::with_capacity(area.width as usize);
    for col in 0..area.width {
        let shade = col.min(255) as u8;
        let mut column = Vec::with_capacity(area.height as usize);
        for row in 0..area.height {
            let hide = canvas.pixel(area.x + col, area.y + row);
            if luminance(hide) < 127 {
                column.push(Rgb([0, 0, shade]));
            } else {
                column.push(Rgb([0, 0, 0]));
            }
        }
        columns.push(column);
    }

    columns.shuffle(rng);

    for (col, column) in columns.iter().enumerate() {
        for (row, px) in column.iter().enumerate() {
            canvas.put_pixel(area.x + col as u32, area.y + row as u32, *px);
        }
    }
}

#[cfg(test)]
mod gradient_tests {
    use image::Rgb;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::embed_gradient;
    use crate::canvas::Canvas;

    #[test]
    fn test_dark_slot_keeps_gradient_shades_as_permutation() {
        let mut canvas = Canvas::new(64, 16, 1, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        embed_gradient(&mut canvas, 0, &mut rng);

        // Each column is uniform and the multiset of shades is 0..width.
        let mut shades = Vec::new();
        for x in 0..64 {
            let first = canvas.pixel(x, 0);
            assert_eq!((first[0], first[1]), (0, 0));
            for y in 1..16 {
                assert_eq!(canvas.pixel(x, y), first, "column {x} not uniform");
            }
            shades.push(first[2]);
        }
        shades.sort_unstable();
        assert_eq!(shades, (0u8..64).collect::<Vec<_>>());
    }

    #[test]
    fn test_bright_pixels_turn_black() {
        let mut canvas = Canvas::new(32, 8, 1, 1).unwrap();
        canvas.fill(Rgb([255, 255, 255]));
        let mut rng = StdRng::seed_from_u64(5);

        embed_gradient(&mut canvas, 0, &mut rng);

        for y in 0..8 {
            for x in 0..32 {
                assert_eq!(canvas.pixel(x, y), Rgb([0, 0, 0]));
            }
        }
    }

    #[test]
    fn test_shade_saturates_on_wide_slots() {
        let mut canvas = Canvas::new(300, 4, 1, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(9);

        embed_gradient(&mut canvas, 0, &mut rng);

        // 300 columns but only 256 shades: the top shade appears 45 times.
        let saturated = (0..300).filter(|&x| canvas.pixel(x, 0)[2] == 255).count();
        assert_eq!(saturated, 45);
    }
}
