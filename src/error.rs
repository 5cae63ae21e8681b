use std::fmt::{Debug, Display, Error, Formatter};

// Error
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum LockError {
    // Canvas & builder
    InvalidGeometry { width: u32, height: u32, rows: u32, cols: u32 },
    FontUnreadable,

    // Donor pool
    DonorDirMissing(String),
    NoDonorImages(String),
    DonorUnreadable(String),

    // Dispatch
    InvalidAlgorithm(u8),

    // Batch
    BadLockList(String),
    GroupTooLarge { group: char, size: usize },
    SaveFailed(String),
}

impl Display for LockError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match self {
            Self::InvalidGeometry { width, height, rows, cols } => write!(
                f,
                "invalid geometry: {width}x{height} cannot be split into {rows} rows x {cols} cols"
            ),
            Self::FontUnreadable => f.write_str("embedded font could not be parsed"),
            Self::DonorDirMissing(dir) => write!(f, "donor image folder not found: {dir}"),
            Self::NoDonorImages(dir) => write!(f, "no donor images in folder: {dir}"),
            Self::DonorUnreadable(path) => write!(f, "donor image could not be read: {path}"),
            Self::InvalidAlgorithm(id) => {
                write!(f, "invalid algorithm number {id}, must be 0..{}", crate::hide::NUM_ALGORITHMS)
            }
            Self::BadLockList(msg) => write!(f, "bad lock list: {msg}"),
            Self::GroupTooLarge { group, size } => write!(
                f,
                "lock group '{group}' has {size} members, more than the {} available algorithms",
                crate::hide::NUM_ALGORITHMS
            ),
            Self::SaveFailed(msg) => write!(f, "cannot save image: {msg}"),
        }
    }
}

impl std::error::Error for LockError {}

pub type LockResult<T> = Result<T, LockError>;
