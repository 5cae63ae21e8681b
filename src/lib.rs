//! # lockhide
//!
//! A Rust library for generating puzzle images that visually conceal short
//! lock codes using multiple pixel-level steganography techniques.
//!
//! ## Features
//!
//! - **Slot-partitioned canvases**: one image split into a grid of slots, each
//!   independently encodable
//! - **Six hiding algorithms**: red/green/blue LSB masks, statistical noise
//!   encoding, a shuffled gradient decoy and ASCII bitstream embedding
//! - **Donor camouflage**: arbitrary photographs center-cropped and rescaled
//!   to carry the hidden data
//! - **Batch generation**: tab-separated lock lists, grouped by name prefix,
//!   with non-repeating algorithm assignment per group
//!
//! The crate is encode-only: decoding is done by a human inspecting channel
//! bit planes or channel statistics of the generated PNG.
//!
//! ## Quick Start
//!
//! ### Single puzzle image
//!
//! ```rust
//! use lockhide::LockImageBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut rng = rand::rng();
//!
//! // The code is rendered as text, then masked in random static.
//! let mut img = LockImageBuilder::new("A1-12345").build()?;
//! img.hide_static(0, &mut rng);
//! # Ok(())
//! # }
//! ```
//!
//! ### Hiding in a donor photograph
//!
//! ```rust,no_run
//! use lockhide::{Algorithm, DonorPool, LockImageBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut rng = rand::rng();
//! let donors = DonorPool::open("images")?;
//!
//! let mut img = LockImageBuilder::new("A1-12345").build()?;
//! img.apply(Algorithm::RedLsb, 0, &donors, &mut rng)?;
//! img.save("A1.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Demonstration grid
//!
//! ```rust,no_run
//! use lockhide::{Algorithm, DonorPool, LockImageBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut rng = rand::rng();
//! let donors = DonorPool::open("images")?;
//!
//! // One slot per algorithm, numbered down the columns.
//! let mut img = LockImageBuilder::new("A1-12345").size(600, 450).grid(3, 2).build()?;
//! for (index, algorithm) in Algorithm::ALL.into_iter().enumerate() {
//!     img.apply(algorithm, index, &donors, &mut rng)?;
//! }
//! img.save("demo.png")?;
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod builder;
pub mod canvas;
pub mod donor;
pub mod error;
pub mod hide;
pub(crate) mod text;

pub use batch::{group_locks, parse_lock_list, run_batch, Lock};
pub use builder::{LockImage, LockImageBuilder, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use canvas::{Canvas, SlotArea};
pub use donor::{fit_to_slot, DonorPool};
pub use error::{LockError, LockResult};
pub use hide::{Algorithm, Channel, NUM_ALGORITHMS};
