//! Korean particle (josa) agreement.
//!
//! A replace rule can swap a word ending in a vowel for one ending in a
//! consonant, leaving the particle after it wrong (천재가 → 선생님가). This
//! module rewrites the particles that follow known words so they agree with
//! the word's final syllable.

pub mod corrector;
pub mod hangul;
pub mod particle;

pub use corrector::{JosaCorrector, correct};
pub use hangul::{Ending, has_batchim, is_hangul_syllable, jongseong_index};
pub use particle::{JosaParticlePair, Particle};
