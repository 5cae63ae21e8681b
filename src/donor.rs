use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::RgbImage;
use rand::Rng;

use crate::error::{LockError, LockResult};

// Donor pool
//------------------------------------------------------------------------------

/// A directory of photographs used as camouflage for the hiding algorithms.
///
/// The listing is taken once when the pool is opened; `.png` and `.jpg` files
/// are accepted (extension matched case-insensitively).
#[derive(Debug, Clone)]
pub struct DonorPool {
    files: Vec<PathBuf>,
}

impl DonorPool {
    pub fn open(dir: impl AsRef<Path>) -> LockResult<Self> {
        let dir = dir.as_ref();
        let entries =
            fs::read_dir(dir).map_err(|_| LockError::DonorDirMissing(dir.display().to_string()))?;

        let mut files: Vec<PathBuf> =
            entries.filter_map(|e| e.ok()).map(|e| e.path()).filter(|p| is_donor_file(p)).collect();
        files.sort();

        if files.is_empty() {
            return Err(LockError::NoDonorImages(dir.display().to_string()));
        }
        Ok(Self { files })
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Loads a uniformly random member of the pool. Decode failures are
    /// reported as unreadable donors, never skipped.
    pub fn pick(&self, rng: &mut impl Rng) -> LockResult<RgbImage> {
        let path = &self.files[rng.random_range(0..self.files.len())];
        let img = image::open(path)
            .map_err(|e| LockError::DonorUnreadable(format!("{}: {e}", path.display())))?;
        Ok(img.to_rgb8())
    }
}

fn is_donor_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("png") || ext.eq_ignore_ascii_case("jpg"))
        .unwrap_or(false)
}

// Slot fitting
//------------------------------------------------------------------------------

/// Center-crops and rescales a donor to exactly `width` x `height` pixels.
///
/// The crop slice keeps the slot's aspect ratio, so the scaled result fills
/// the frame with no letterboxing; excess donor content is discarded
/// symmetrically on the long axis.
pub fn fit_to_slot(donor: &RgbImage, width: u32, height: u32) -> RgbImage {
    let area_ratio = width as f64 / height as f64;
    let image_ratio = donor.width() as f64 / donor.height() as f64;

    let (slice_width, slice_height) = if area_ratio > image_ratio {
        let w = donor.width();
        (w, ((w as f64 / area_ratio) as u32).max(1))
    } else {
        let h = donor.height();
        (((h as f64 * area_ratio) as u32).max(1), h)
    };

    let slice_left = (donor.width() - slice_width) / 2;
    let slice_top = (donor.height() - slice_height) / 2;

    let slice = imageops::crop_imm(donor, slice_left, slice_top, slice_width, slice_height).to_image();
    imageops::resize(&slice, width, height, FilterType::Triangle)
}
