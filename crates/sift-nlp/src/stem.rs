//! English stemming
//!
//! Thin wrapper over the Snowball (Porter2) English stemmer so that
//! inflectional and derivational forms collide: "components" and
//! "component", "optimization" and "optimize".

use rust_stemmers::{Algorithm, Stemmer};
use std::sync::LazyLock;

static ENGLISH: LazyLock<Stemmer> = LazyLock::new(|| Stemmer::create(Algorithm::English));

/// Stem a single token; the result is always lower-case
pub fn stem(token: &str) -> String {
    ENGLISH.stem(&token.to_lowercase()).into_owned()
}
