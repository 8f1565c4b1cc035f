//! Occupancy history synthesis.
//!
//! A history is a smoothed random walk sampled backwards from "now": index 0
//! is the newest observation. Each channel (eggs, birds) walks a seeded noise
//! field scaled by a modifier that grows every step, so recent history is
//! calm and older history swings harder.

use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::ids::IdSource;
use crate::noise_field::{NoiseField, NoiseSource};

/// Milliseconds in one week.
pub const WEEK_MILLIS: u32 = 604_800_000;

/// Upper bound for generated noise seeds (exclusive).
const SEED_SPAN: f64 = 1000.0;

/// Shape of one occupancy channel's random walk.
#[derive(Debug, Clone, Copy)]
struct ChannelProfile {
    /// Starting level is drawn from `[0, initial_max)`.
    initial_max: u32,
    /// Starting modifier is drawn from `[0, modifier_max)`.
    modifier_max: u32,
    /// Noise position advances by this much per step.
    frequency: f64,
    /// The modifier grows by `U[0, 1) * modifier_growth` per step.
    modifier_growth: f64,
    octaves: usize,
}

const EGG_PROFILE: ChannelProfile = ChannelProfile {
    initial_max: 50,
    modifier_max: 8,
    frequency: 0.1,
    modifier_growth: 2.0,
    octaves: 4,
};

const BIRD_PROFILE: ChannelProfile = ChannelProfile {
    initial_max: 30,
    modifier_max: 5,
    frequency: 0.15,
    modifier_growth: 3.0,
    octaves: 9,
};

/// One timestamped occupancy sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Opaque unique token.
    pub id: String,
    /// When the sample was recorded.
    pub created_at: DateTime<Utc>,
    /// Number of eggs in the structure.
    pub eggs: u32,
    /// Number of birds in the structure.
    pub birds: u32,
}

/// How often and for how long occupancy is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyCadence {
    /// Length of the generated history in weeks.
    pub weeks: u32,
    /// Observations recorded per week.
    pub updates_per_week: u32,
}

impl Default for OccupancyCadence {
    fn default() -> Self {
        Self {
            weeks: 25,
            updates_per_week: 14,
        }
    }
}

impl OccupancyCadence {
    /// Check the cadence describes at least one observation with a step of
    /// at least one millisecond.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidParameters`] for zero values, a
    /// cadence finer than one update per millisecond, or a history too long
    /// to index.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.weeks == 0 {
            return Err(invalid("occupancy weeks must be at least 1"));
        }
        if self.updates_per_week == 0 || self.updates_per_week > WEEK_MILLIS {
            return Err(invalid(format!(
                "updates per week must be within [1, {WEEK_MILLIS}], got {}",
                self.updates_per_week
            )));
        }
        if self.weeks.checked_mul(self.updates_per_week).is_none() {
            return Err(invalid("occupancy history length overflows"));
        }
        Ok(())
    }

    /// Number of observations per history: `weeks * updates_per_week`.
    #[must_use]
    pub fn observation_count(&self) -> u32 {
        self.weeks.saturating_mul(self.updates_per_week)
    }

    /// Nominal spacing between observations, in whole milliseconds.
    #[must_use]
    pub fn nominal_step(&self) -> TimeDelta {
        let millis = WEEK_MILLIS
            .checked_div(self.updates_per_week)
            .unwrap_or(WEEK_MILLIS);
        TimeDelta::milliseconds(i64::from(millis))
    }
}

fn invalid(message: impl Into<String>) -> GenerationError {
    GenerationError::InvalidParameters {
        message: message.into(),
    }
}

/// Produces occupancy histories for one cadence.
#[derive(Debug, Clone, Copy)]
pub struct OccupancySynthesizer<'a, N> {
    noise: &'a N,
    cadence: OccupancyCadence,
}

impl<'a, N: NoiseSource> OccupancySynthesizer<'a, N> {
    /// Create a synthesizer drawing noise fields from `noise`.
    #[must_use]
    pub const fn new(noise: &'a N, cadence: OccupancyCadence) -> Self {
        Self { noise, cadence }
    }

    /// Generate one history, newest observation first.
    ///
    /// Each observation sits within half a nominal step of its slot on the
    /// grid `now - index * step`, so timestamps strictly decrease with index.
    pub fn synthesize<R, I>(&self, rng: &mut R, ids: &mut I, now: DateTime<Utc>) -> Vec<Observation>
    where
        R: Rng + ?Sized,
        I: IdSource + ?Sized,
    {
        let step = self.cadence.nominal_step();
        let half_step_millis = step.num_milliseconds() / 2;

        let mut eggs = Walk::start(self.noise, EGG_PROFILE, rng);
        let mut birds = Walk::start(self.noise, BIRD_PROFILE, rng);

        let total = self.cadence.observation_count();
        let mut history = Vec::with_capacity(usize::try_from(total).unwrap_or_default());
        let mut slot = now;

        for index in 0..total {
            let jitter = jitter(rng, half_step_millis);
            history.push(Observation {
                id: ids.next_id(),
                created_at: slot + jitter,
                eggs: eggs.count(),
                birds: birds.count(),
            });

            eggs.advance(index, rng);
            birds.advance(index, rng);
            slot -= step;
        }

        history
    }
}

/// Random offset in `(-half, half)` milliseconds; zero when `half` is zero.
fn jitter<R: Rng + ?Sized>(rng: &mut R, half_step_millis: i64) -> TimeDelta {
    if half_step_millis <= 0 {
        return TimeDelta::zero();
    }
    let magnitude = rng.random_range(0..half_step_millis);
    let signed = if rng.random_bool(0.5) {
        -magnitude
    } else {
        magnitude
    };
    TimeDelta::milliseconds(signed)
}

/// State of one channel's random walk.
struct Walk<F> {
    field: F,
    profile: ChannelProfile,
    level: f64,
    modifier: f64,
}

impl<F: NoiseField> Walk<F> {
    fn start<N, R>(noise: &N, profile: ChannelProfile, rng: &mut R) -> Self
    where
        N: NoiseSource<Field = F> + ?Sized,
        R: Rng + ?Sized,
    {
        let level = f64::from(rng.random_range(0..profile.initial_max));
        let modifier = f64::from(rng.random_range(0..profile.modifier_max));
        let seed = noise_seed(rng);
        Self {
            field: noise.field(seed, profile.octaves),
            profile,
            level,
            modifier,
        }
    }

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "counts are reported as the truncated magnitude; `as` saturates"
    )]
    fn count(&self) -> u32 {
        self.level.abs().trunc() as u32
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "the random walk is defined over floating point levels"
    )]
    fn advance<R: Rng + ?Sized>(&mut self, index: u32, rng: &mut R) {
        let position = f64::from(index) * self.profile.frequency;
        self.level += self.field.sample(position) * self.modifier;
        self.modifier += rng.random::<f64>() * self.profile.modifier_growth;
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "seeds are drawn as a scaled unit float, truncated to an integer"
)]
fn noise_seed<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    (rng.random::<f64>() * SEED_SPAN) as u32
}
