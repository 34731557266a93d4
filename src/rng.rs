//! Random sources for the fire simulation
//!
//! The field never reaches for a global generator itself. Every `step()`
//! takes a `RandomSource`, so production code can hand it the `fastrand`
//! thread-local generator while tests hand it a seeded `fastrand::Rng`.

/// Two independent uniform draws per cell update
pub trait RandomSource {
    /// Lateral drift of the heat: -1 (left), 0 (straight up) or +1 (right)
    fn direction(&mut self) -> i32;

    /// Cooling applied while the heat rises: 0 or 1
    fn decay(&mut self) -> u8;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn direction(&mut self) -> i32 {
        (**self).direction()
    }

    #[inline]
    fn decay(&mut self) -> u8 {
        (**self).decay()
    }
}

/// Process-wide generator (fastrand's thread-local state)
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRng;

impl RandomSource for ThreadRng {
    #[inline]
    fn direction(&mut self) -> i32 {
        fastrand::i32(-1..=1)
    }

    #[inline]
    fn decay(&mut self) -> u8 {
        fastrand::u8(0..=1)
    }
}

impl RandomSource for fastrand::Rng {
    #[inline]
    fn direction(&mut self) -> i32 {
        self.i32(-1..=1)
    }

    #[inline]
    fn decay(&mut self) -> u8 {
        self.u8(0..=1)
    }
}

/// Replays fixed sequences, cycling when exhausted
/// Handy for pinning down exactly which way the heat moves.
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct Scripted {
    directions: Vec<i32>,
    decays: Vec<u8>,
    dir_pos: usize,
    decay_pos: usize,
}

#[cfg(test)]
impl Scripted {
    pub fn new(directions: Vec<i32>, decays: Vec<u8>) -> Self {
        assert!(!directions.is_empty(), "Scripted needs at least one direction");
        assert!(!decays.is_empty(), "Scripted needs at least one decay");
        Self {
            directions,
            decays,
            dir_pos: 0,
            decay_pos: 0,
        }
    }

    /// Always drift the same way with the same cooling
    pub fn constant(direction: i32, decay: u8) -> Self {
        Self::new(vec![direction], vec![decay])
    }

    /// How many direction samples have been drawn so far
    pub fn directions_drawn(&self) -> usize {
        self.dir_pos
    }

    /// How many decay samples have been drawn so far
    pub fn decays_drawn(&self) -> usize {
        self.decay_pos
    }
}

#[cfg(test)]
impl RandomSource for Scripted {
    fn direction(&mut self) -> i32 {
        let v = self.directions[self.dir_pos % self.directions.len()];
        self.dir_pos += 1;
        v
    }

    fn decay(&mut self) -> u8 {
        let v = self.decays[self.decay_pos % self.decays.len()];
        self.decay_pos += 1;
        v
    }
}
