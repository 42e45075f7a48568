//! The set of live pentagons
//!
//! The population owns every pentagon, the clock and the RNG. Placement reads
//! the other pentagons' last frames through a borrowed [`Neighbours`] view, so
//! there is no global registry and several populations can coexist.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::Pentagon;
use super::state::StateVector;
use crate::platform::time::{Clock, SystemClock};
use crate::settings::Settings;

/// Every pentagon except one, in population order
#[derive(Debug, Clone, Copy)]
pub struct Neighbours<'a> {
    before: &'a [Pentagon],
    after: &'a [Pentagon],
}

impl<'a> Neighbours<'a> {
    pub fn len(&self) -> usize {
        self.before.len() + self.after.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(self) -> impl Iterator<Item = &'a StateVector> + Clone + 'a {
        self.before
            .iter()
            .chain(self.after.iter())
            .map(Pentagon::last_frame)
    }
}

/// Fixed-size collection of pentagons sharing one clock and one RNG
#[derive(Debug)]
pub struct Population<C: Clock = SystemClock> {
    pentagons: Vec<Pentagon>,
    clock: C,
    rng: Pcg32,
    settings: Settings,
    seed: u64,
}

impl Population<SystemClock> {
    /// `count` pentagons on the wall clock with default settings
    pub fn generate(count: usize) -> Self {
        let settings = Settings {
            entity_count: count,
            ..Settings::default()
        };
        Self::with_clock(settings, SystemClock)
    }
}

impl<C: Clock> Population<C> {
    /// Build `settings.entity_count` pentagons driven by `clock`
    pub fn with_clock(settings: Settings, clock: C) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        let mut rng = Pcg32::seed_from_u64(seed);
        let now = clock.now_ms();

        let pentagons = (0..settings.entity_count)
            .map(|_| Pentagon::new(&mut rng, &settings, now))
            .collect();

        log::info!("Generated {} pentagons (seed {seed})", settings.entity_count);

        Self {
            pentagons,
            clock,
            rng,
            settings,
            seed,
        }
    }

    pub fn len(&self) -> usize {
        self.pentagons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pentagons.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pentagon> {
        self.pentagons.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Pentagon> {
        self.pentagons.get(index)
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Seed the RNG was built from; pass it back via `Settings::seed` to replay
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Last frame of every pentagon, in order
    pub fn last_frames(&self) -> Vec<StateVector> {
        self.pentagons.iter().map(|p| *p.last_frame()).collect()
    }

    /// Advance pentagon `index` to the current clock time
    ///
    /// Returns `None` if `index` is out of range.
    pub fn frame(&mut self, index: usize) -> Option<StateVector> {
        if index >= self.pentagons.len() {
            return None;
        }
        let now = self.clock.now_ms();
        let (before, rest) = self.pentagons.split_at_mut(index);
        let (pentagon, after) = rest.split_first_mut()?;
        let neighbours = Neighbours {
            before: &*before,
            after: &*after,
        };
        Some(pentagon.frame(now, neighbours.iter(), &mut self.rng, &self.settings))
    }

    /// Frame every pentagon once, in order; one display refresh worth of work
    pub fn tick(&mut self) -> Vec<StateVector> {
        (0..self.pentagons.len())
            .filter_map(|i| self.frame(i))
            .collect()
    }
}
