use std::fmt;

use super::palette::MAX_INTENSITY;
use crate::rng::RandomSource;

/// Rejected grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Width or height is zero
    InvalidDimensions { width: u32, height: u32 },
    /// The RGBA buffer for this grid would not fit in memory
    TooLarge { width: u32, height: u32 },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid fire dimensions {}x{}: both must be positive", width, height)
            },
            Self::TooLarge { width, height } => {
                write!(f, "fire dimensions {}x{} are too large", width, height)
            },
        }
    }
}

impl std::error::Error for FieldError {}

/// Heat grid driving the Doom fire
///
/// Row 0 is the top of the screen, row `height - 1` is the source row which
/// is held at `MAX_INTENSITY` forever. Each `step()` carries heat one row up
/// with a random sideways drift and a random loss of 0 or 1.
#[derive(Debug, Clone)]
pub struct FireField {
    cells: Vec<u8>,
    width: usize,
    height: usize,
}

impl FireField {
    pub fn new(width: u32, height: u32) -> Result<Self, FieldError> {
        let cells = seeded_cells(width, height)?;
        Ok(Self {
            cells,
            width: width as usize,
            height: height as usize,
        })
    }

    /// Reallocate for new dimensions and reseed the source row
    ///
    /// The replacement grid is built before the old one is dropped, so a
    /// rejected reset leaves the current fire untouched.
    pub fn reset(&mut self, width: u32, height: u32) -> Result<(), FieldError> {
        self.cells = seeded_cells(width, height)?;
        self.width = width as usize;
        self.height = height as usize;
        Ok(())
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width as u32
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height as u32
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Row-major intensities, `width * height` long
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn row(&self, y: u32) -> Option<&[u8]> {
        let y = y as usize;
        if y >= self.height {
            return None;
        }
        Some(&self.cells[y * self.width..(y + 1) * self.width])
    }

    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Overwrite a single cell, clamped to `MAX_INTENSITY`
    /// Returns false when (x, y) lies outside the grid.
    pub fn set(&mut self, x: u32, y: u32, value: u8) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = value.min(MAX_INTENSITY);
                true
            },
            None => false,
        }
    }

    /// Set every cell, source row included
    pub fn fill(&mut self, value: u8) {
        self.cells.fill(value.min(MAX_INTENSITY));
    }

    /// Advance the fire by one frame
    ///
    /// Columns outer, rows inner from the top down to the row above the
    /// source. A cell written earlier in the pass may be read again as a
    /// source later in the same pass, which gives the flames their texture.
    pub fn step<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        for x in 0..self.width {
            for y in 1..self.height {
                self.spread(y * self.width + x, rng);
            }
        }
    }

    /// Carry heat from `from` to the cell above it (drifted left, right or not at all)
    fn spread<R: RandomSource + ?Sized>(&mut self, from: usize, rng: &mut R) {
        let offset = rng.direction();
        let Some(to) = self.spread_target(from, offset) else {
            return;
        };
        let decay = rng.decay();
        self.cells[to] = self.cells[from].saturating_sub(decay);
    }

    /// Destination of a spread, or None when it leaves the grid
    fn spread_target(&self, from: usize, offset: i32) -> Option<usize> {
        let to = from as isize - self.width as isize + offset as isize;
        if to < 0 || to as usize >= self.cells.len() {
            return None;
        }

        // Drifting off the left or right edge would otherwise wrap around
        // onto the opposite edge of another row.
        let src_x = (from % self.width) as isize;
        let dst_x = src_x + offset as isize;
        if dst_x < 0 || dst_x >= self.width as isize {
            return None;
        }

        let to = to as usize;
        debug_assert_eq!(to % self.width, dst_x as usize);
        debug_assert_eq!(to / self.width + 1, from / self.width);
        Some(to)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }
}

/// Zeroed grid with the bottom row at full heat
fn seeded_cells(width: u32, height: u32) -> Result<Vec<u8>, FieldError> {
    if width == 0 || height == 0 {
        return Err(FieldError::InvalidDimensions { width, height });
    }
    let w = width as usize;
    let len = w
        .checked_mul(height as usize)
        .filter(|len| len.checked_mul(4).is_some())
        .ok_or(FieldError::TooLarge { width, height })?;

    let mut cells = vec![0; len];
    cells[len - w..].fill(MAX_INTENSITY);
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Scripted;

    fn row_means(field: &FireField) -> Vec<f64> {
        (0..field.height())
            .map(|y| {
                let row = field.row(y).unwrap();
                row.iter().map(|&v| f64::from(v)).sum::<f64>() / row.len() as f64
            })
            .collect()
    }

    #[test]
    fn test_reset_seeds_bottom_row() {
        let field = FireField::new(4, 3).unwrap();
        assert_eq!(field.dimensions(), (4, 3));
        assert_eq!(field.cells().len(), 12);
        assert_eq!(field.row(0).unwrap(), &[0, 0, 0, 0]);
        assert_eq!(field.row(1).unwrap(), &[0, 0, 0, 0]);
        assert_eq!(field.row(2).unwrap(), &[36, 36, 36, 36]);
        assert!(field.row(3).is_none());
    }

    #[test]
    fn test_single_step_scenario() {
        let mut field = FireField::new(4, 3).unwrap();
        let mut rng = fastrand::Rng::with_seed(0x1234ABCD);
        field.step(&mut rng);

        assert_eq!(field.row(2).unwrap(), &[36, 36, 36, 36]);
        assert!(field.cells().iter().all(|&v| v <= MAX_INTENSITY));
        // Every column hits row 1 unless its drift fell off an edge, and the
        // two interior columns cannot fall off.
        let row1 = field.row(1).unwrap();
        assert!(row1.iter().any(|&v| v >= MAX_INTENSITY - 1));
        assert!(row1.iter().all(|&v| v == 0 || v >= MAX_INTENSITY - 1));
    }

    #[test]
    fn test_reset_replaces_previous_state() {
        let mut field = FireField::new(8, 8).unwrap();
        let mut rng = fastrand::Rng::with_seed(9);
        for _ in 0..20 {
            field.step(&mut rng);
        }
        field.reset(3, 5).unwrap();
        assert_eq!(field.dimensions(), (3, 5));
        for y in 0..4 {
            assert_eq!(field.row(y).unwrap(), &[0, 0, 0]);
        }
        assert_eq!(field.row(4).unwrap(), &[36, 36, 36]);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            FireField::new(0, 10).unwrap_err(),
            FieldError::InvalidDimensions { width: 0, height: 10 }
        );
        assert!(FireField::new(10, 0).is_err());

        let mut field = FireField::new(5, 4).unwrap();
        field.set(2, 1, 20);
        let before = field.cells().to_vec();
        assert!(field.reset(0, 0).is_err());
        assert_eq!(field.dimensions(), (5, 4));
        assert_eq!(field.cells(), &before[..]);
    }

    #[test]
    fn test_error_messages() {
        let err = FieldError::InvalidDimensions { width: 0, height: 3 };
        assert_eq!(err.to_string(), "invalid fire dimensions 0x3: both must be positive");
    }

    #[test]
    fn test_one_by_one() {
        let mut field = FireField::new(1, 1).unwrap();
        assert_eq!(field.cells(), &[36]);
        let mut rng = Scripted::new(vec![-1, 0, 1], vec![1]);
        field.step(&mut rng);
        assert_eq!(field.cells(), &[36]);
        assert_eq!(rng.directions_drawn(), 0);
    }

    #[test]
    fn test_single_row_is_noop() {
        let mut field = FireField::new(16, 1).unwrap();
        let mut rng = fastrand::Rng::with_seed(5);
        for _ in 0..10 {
            field.step(&mut rng);
        }
        assert!(field.cells().iter().all(|&v| v == MAX_INTENSITY));
    }

    #[test]
    fn test_values_stay_bounded() {
        let mut field = FireField::new(40, 30).unwrap();
        let mut rng = fastrand::Rng::with_seed(77);
        for _ in 0..500 {
            field.step(&mut rng);
            assert!(field.cells().iter().all(|&v| v <= MAX_INTENSITY));
            assert!(field.row(29).unwrap().iter().all(|&v| v == MAX_INTENSITY));
        }
    }

    #[test]
    fn test_width_one_only_rises_straight() {
        let mut field = FireField::new(1, 50).unwrap();
        let mut rng = fastrand::Rng::with_seed(31337);
        for _ in 0..1_000 {
            field.step(&mut rng);
            assert!(field.cells().iter().all(|&v| v <= MAX_INTENSITY));
            assert_eq!(field.get(0, 49), Some(MAX_INTENSITY));
        }

        // Sideways drift is always rejected, so nothing ever moves
        let mut field = FireField::new(1, 4).unwrap();
        field.step(&mut Scripted::constant(-1, 0));
        field.step(&mut Scripted::constant(1, 0));
        assert_eq!(field.cells(), &[0, 0, 0, 36]);

        field.step(&mut Scripted::constant(0, 0));
        assert_eq!(field.get(0, 2), Some(36));
    }

    #[test]
    fn test_edges_do_not_wrap() {
        // Left drift from column 0 would land on the last column of the row
        // two above; it must be dropped instead.
        let mut field = FireField::new(4, 4).unwrap();
        field.step(&mut Scripted::constant(-1, 0));
        assert_eq!(field.row(1).unwrap(), &[0, 0, 0, 0]);
        assert_eq!(field.row(2).unwrap(), &[36, 36, 36, 0]);

        // Right drift from the last column would overwrite the source row
        let mut field = FireField::new(4, 4).unwrap();
        field.step(&mut Scripted::constant(1, 0));
        assert_eq!(field.row(2).unwrap(), &[0, 36, 36, 36]);
        assert_eq!(field.row(3).unwrap(), &[36, 36, 36, 36]);
    }

    #[test]
    fn test_top_row_drops_out_of_range() {
        let mut field = FireField::new(3, 2).unwrap();
        let mut rng = Scripted::constant(0, 1);
        field.step(&mut rng);
        assert_eq!(field.row(0).unwrap(), &[35, 35, 35]);
        // One draw of each kind per column, nothing drawn for rejected cells
        assert_eq!(rng.directions_drawn(), 3);
        assert_eq!(rng.decays_drawn(), 3);

        let mut rng = Scripted::constant(-1, 1);
        field.step(&mut rng);
        assert_eq!(rng.directions_drawn(), 3);
        assert_eq!(rng.decays_drawn(), 2);
    }

    #[test]
    fn test_decay_never_underflows() {
        let mut field = FireField::new(2, 3).unwrap();
        field.fill(0);
        field.step(&mut Scripted::constant(0, 1));
        assert!(field.cells().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_column_reads_previous_frame_top_down() {
        let mut field = FireField::new(3, 5).unwrap();
        for y in 0..4 {
            for x in 0..3 {
                field.set(x, y, 10);
            }
        }
        field.step(&mut Scripted::constant(0, 1));
        for y in 0..3 {
            assert_eq!(field.row(y).unwrap(), &[9, 9, 9]);
        }
        assert_eq!(field.row(3).unwrap(), &[35, 35, 35]);
    }

    #[test]
    fn test_propagation_never_raises_heat() {
        let mut field = FireField::new(24, 20).unwrap();
        let mut rng = fastrand::Rng::with_seed(4242);
        for _ in 0..50 {
            field.step(&mut rng);
        }
        for _ in 0..50 {
            let before = field.clone();
            field.step(&mut rng);
            // Heat only arrives from below, so no row can outgrow what sat beneath it
            for y in 0..field.height() - 1 {
                let ceiling = ((y + 1)..field.height())
                    .flat_map(|sy| before.row(sy).unwrap().iter().copied())
                    .max()
                    .unwrap();
                let hottest = field.row(y).unwrap().iter().copied().max().unwrap();
                assert!(hottest <= ceiling);
            }
        }
    }

    #[test]
    fn test_heat_fades_with_distance_from_source() {
        let mut field = FireField::new(64, 80).unwrap();
        let mut rng = fastrand::Rng::with_seed(0xF1BE);
        let mut sums = vec![0.0; 80];
        for frame in 0..400 {
            field.step(&mut rng);
            if frame >= 200 {
                for (sum, mean) in sums.iter_mut().zip(row_means(&field)) {
                    *sum += mean;
                }
            }
        }

        // Average loss is half a level per row, so 80 rows burn out.
        // Compare bands of ten rows to smooth out the noise.
        let bands: Vec<f64> = sums.chunks(10).map(|band| band.iter().sum::<f64>()).collect();
        for pair in bands.windows(2) {
            assert!(pair[0] < pair[1], "mean heat rose away from the source: {:?}", bands);
        }
        assert!(sums[0] / 200.0 < 3.0);
        assert!(sums[79] / 200.0 > 35.0);
    }

    #[test]
    fn test_set_and_get() {
        let mut field = FireField::new(3, 3).unwrap();
        assert!(field.set(1, 1, 200));
        assert_eq!(field.get(1, 1), Some(MAX_INTENSITY));
        assert!(!field.set(3, 0, 1));
        assert_eq!(field.get(0, 3), None);
    }
}
