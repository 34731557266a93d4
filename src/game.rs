//! Frame driver contract
//!
//! The window loop calls `layout` when its surface changes size, then
//! `update` followed by `draw` once per frame. `FireGame` owns everything the
//! effect needs, so the loop never touches the grid directly.

use crate::display::PixelBuffer;
use crate::fire::{rasterize, FieldError, FireField, Palette};
use crate::rng::{RandomSource, ThreadRng};

/// Simulation updates per second
pub const SIM_RATE: u32 = 60;
/// Fixed simulation step in seconds
pub const SIM_STEP: f32 = 1.0 / SIM_RATE as f32;
/// Cap on catch-up steps so a stalled frame can't snowball
pub const MAX_STEPS_PER_FRAME: u32 = 4;

pub struct FireGame<R = ThreadRng> {
    field: FireField,
    palette: Palette,
    pixels: PixelBuffer,
    rng: R,
    sim_accum: f32,
}

impl FireGame<ThreadRng> {
    /// Fire driven by the process-wide generator
    pub fn new(width: u32, height: u32) -> Result<Self, FieldError> {
        Self::with_source(width, height, ThreadRng)
    }
}

impl<R: RandomSource> FireGame<R> {
    /// Fire driven by an injected random source
    pub fn with_source(width: u32, height: u32, rng: R) -> Result<Self, FieldError> {
        let field = FireField::new(width, height)?;
        Ok(Self {
            field,
            palette: Palette::doom(),
            pixels: PixelBuffer::with_size(width, height),
            rng,
            sim_accum: 0.0,
        })
    }

    /// Advance the simulation by one frame
    pub fn update(&mut self) {
        self.field.step(&mut self.rng);
    }

    /// Rasterize the current frame
    pub fn draw(&mut self) -> &PixelBuffer {
        rasterize(&self.field, &self.palette, &mut self.pixels);
        &self.pixels
    }

    /// Match the grid to the requested dimensions
    ///
    /// The fire restarts from a cold grid only when the size actually
    /// changes. Returns the dimensions in effect afterwards; on error the
    /// previous grid is kept.
    pub fn layout(&mut self, width: u32, height: u32) -> Result<(u32, u32), FieldError> {
        if self.field.dimensions() != (width, height) {
            self.field.reset(width, height)?;
            log::debug!("Fire grid reset to {}x{}", width, height);
        }
        Ok(self.field.dimensions())
    }

    /// Run as many fixed-rate updates as `dt` seconds cover
    ///
    /// Keeps the fire at `SIM_RATE` regardless of the display refresh rate.
    /// Returns how many updates ran.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.sim_accum += dt.max(0.0);

        let mut steps = 0;
        while self.sim_accum >= SIM_STEP && steps < MAX_STEPS_PER_FRAME {
            self.sim_accum -= SIM_STEP;
            self.update();
            steps += 1;
        }

        // If we hit max steps, drain remaining accumulator to prevent buildup
        if steps >= MAX_STEPS_PER_FRAME {
            self.sim_accum = 0.0;
        }
        steps
    }

    #[inline]
    pub fn field(&self) -> &FireField {
        &self.field
    }

    /// Direct grid access for tools and tests
    #[inline]
    pub fn field_mut(&mut self) -> &mut FireField {
        &mut self.field
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        self.field.dimensions()
    }
}
