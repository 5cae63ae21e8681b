pub mod binary;
pub mod gradient;
pub mod lsb;
pub mod noise;

pub use lsb::Channel;

use image::Rgb;

use crate::error::{LockError, LockResult};

// Algorithm
//------------------------------------------------------------------------------

pub const NUM_ALGORITHMS: u8 = 6;

/// The closed set of hiding algorithms. The numeric ids form the external
/// dispatch boundary and must stay stable: 0 red LSB, 1 green LSB, 2 blue LSB,
/// 3 static noise, 4 gradient shuffle, 5 binary ASCII.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Algorithm {
    RedLsb,
    GreenLsb,
    BlueLsb,
    StaticNoise,
    GradientShuffle,
    BinaryAscii,
}

impl Algorithm {
    pub const ALL: [Algorithm; NUM_ALGORITHMS as usize] = [
        Algorithm::RedLsb,
        Algorithm::GreenLsb,
        Algorithm::BlueLsb,
        Algorithm::StaticNoise,
        Algorithm::GradientShuffle,
        Algorithm::BinaryAscii,
    ];

    pub fn from_id(id: u8) -> LockResult<Self> {
        match id {
            0 => Ok(Algorithm::RedLsb),
            1 => Ok(Algorithm::GreenLsb),
            2 => Ok(Algorithm::BlueLsb),
            3 => Ok(Algorithm::StaticNoise),
            4 => Ok(Algorithm::GradientShuffle),
            5 => Ok(Algorithm::BinaryAscii),
            _ => Err(LockError::InvalidAlgorithm(id)),
        }
    }

    pub fn id(self) -> u8 {
        match self {
            Algorithm::RedLsb => 0,
            Algorithm::GreenLsb => 1,
            Algorithm::BlueLsb => 2,
            Algorithm::StaticNoise => 3,
            Algorithm::GradientShuffle => 4,
            Algorithm::BinaryAscii => 5,
        }
    }

    /// Whether this algorithm consumes a donor photograph.
    pub fn needs_donor(self) -> bool {
        matches!(
            self,
            Algorithm::RedLsb | Algorithm::GreenLsb | Algorithm::BlueLsb | Algorithm::BinaryAscii
        )
    }
}

/// Integer average of the three channels, the foreground/background threshold
/// used by the mask-based encoders.
pub(crate) fn luminance(px: Rgb<u8>) -> u32 {
    (px[0] as u32 + px[1] as u32 + px[2] as u32) / 3
}
