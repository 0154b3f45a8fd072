//! Pours a timestamped transcript into fixed-length subtitle slots.
//!
//! Slots tile the audio from zero to its end. Each timed fragment spreads its
//! words over the slots it overlaps in proportion to the overlap, untimed
//! fragments collect in the last slot, and no word is ever dropped or
//! repeated.

mod accumulator;
pub mod allocate;
pub mod error;
mod planner;
pub mod text;
mod windows;

pub use allocate::allocate;
pub use error::SlotError;
pub use planner::{assign_fragments, render_blocks};
pub use text::{clean, tokenize};
pub use windows::build_slots;
