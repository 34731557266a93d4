//! Doom fire
//!
//! The PSX Doom fire effect: a heat grid fed from a white-hot bottom row,
//! cooled and scattered as it rises, drawn through a fixed 37-color palette.
//!
//! ```no_run
//! use doomfire::FireGame;
//!
//! let mut game = FireGame::new(320, 200)?;
//! loop {
//!     game.update();
//!     let frame = game.draw();
//!     // upload frame.as_bytes() (RGBA, row-major) to the screen
//!     # let _ = frame;
//!     # break;
//! }
//! # Ok::<(), doomfire::FieldError>(())
//! ```

pub mod cli;
pub mod display;
pub mod fire;
pub mod game;
pub mod rng;
pub mod util;

pub use display::PixelBuffer;
pub use fire::{rasterize, FieldError, FireField, Palette, Rgba, MAX_INTENSITY, PALETTE_LEN};
pub use game::FireGame;
pub use rng::{RandomSource, ThreadRng};
