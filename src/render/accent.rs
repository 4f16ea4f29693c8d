use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::foundation::color::Color;

/// Where the accent colour of a render comes from.
///
/// `Random` gives visual variety between renders; `Seeded` and `Fixed` make output reproducible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccentSource {
    /// Fresh thread-local randomness on every render.
    #[default]
    Random,
    /// ChaCha8 stream seeded with this value.
    Seeded(u64),
    /// Always this colour.
    Fixed(Color),
}

impl AccentSource {
    /// Pick an opaque colour with each channel drawn independently and uniformly from `channel`.
    ///
    /// A reversed range such as `200..=100` is read as `100..=200`. `Fixed` ignores the range.
    pub fn pick(&self, channel: RangeInclusive<u8>) -> Color {
        match self {
            Self::Random => random_rgb(&mut rand::rng(), channel),
            Self::Seeded(seed) => random_rgb(&mut ChaCha8Rng::seed_from_u64(*seed), channel),
            Self::Fixed(c) => c.with_alpha(255),
        }
    }
}

fn random_rgb<R: Rng + ?Sized>(rng: &mut R, channel: RangeInclusive<u8>) -> Color {
    let (a, b) = channel.into_inner();
    let channel = a.min(b)..=a.max(b);
    let r = rng.random_range(channel.clone());
    let g = rng.random_range(channel.clone());
    let b = rng.random_range(channel);
    Color::rgb(r, g, b)
}

#[cfg(test)]
#[path = "../../tests/unit/render/accent.rs"]
mod tests;
