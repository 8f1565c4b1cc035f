//! Smooth, seeded noise used to drive occupancy random walks.
//!
//! The synthesizer only relies on two properties: neighbouring positions
//! produce neighbouring values, and values stay within `[-1, 1]`. Anything
//! satisfying both can stand in for the Perlin default.

use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

/// A seeded, one-dimensional noise function.
pub trait NoiseField {
    /// Sample the field at `position`. Values lie within `[-1, 1]`.
    fn sample(&self, position: f64) -> f64;
}

/// Factory for seeded noise fields.
pub trait NoiseSource {
    /// Field type produced by this source.
    type Field: NoiseField;

    /// Build a field for `seed` with the given number of octaves.
    ///
    /// Equal seeds must produce equal fields.
    fn field(&self, seed: u32, octaves: usize) -> Self::Field;
}

/// Fractal Perlin noise.
#[derive(Debug, Default, Clone, Copy)]
pub struct PerlinNoise;

/// A fractal Perlin field, sampled along one axis.
pub struct PerlinField {
    fbm: Fbm<Perlin>,
    octaves: usize,
}

impl std::fmt::Debug for PerlinField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PerlinField")
            .field("octaves", &self.octaves)
            .finish()
    }
}

impl NoiseSource for PerlinNoise {
    type Field = PerlinField;

    fn field(&self, seed: u32, octaves: usize) -> Self::Field {
        let octaves = octaves.max(1);
        PerlinField {
            fbm: Fbm::<Perlin>::new(seed)
                .set_octaves(octaves)
                .set_persistence(0.5)
                .set_lacunarity(2.0),
            octaves,
        }
    }
}

impl NoiseField for PerlinField {
    fn sample(&self, position: f64) -> f64 {
        // The second axis is pinned so the field behaves as 1-D noise.
        self.fbm.get([position, 0.5]).clamp(-1.0, 1.0)
    }
}
