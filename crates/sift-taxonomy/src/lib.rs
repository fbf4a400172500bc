//! Sift Term Taxonomy
//!
//! A domain vocabulary that grows with use. Terms live in one of two
//! buckets:
//!
//! - **static**: seeded at initialization with confidence 1.0 and never
//!   mutated afterwards
//! - **learned**: inferred from content by a confidence heuristic, capped
//!   below 1.0, and promoted to `validated` when a registered
//!   [`TermValidator`] confirms them
//!
//! The taxonomy classifies arbitrary text into domain probabilities and can
//! be exported and re-imported wholesale.
//!
//! # Term lifecycle
//!
//! ```text
//! static                      (terminal)
//! learned ──validation──▶ validated
//! external                    (import only)
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod learning;
mod metrics;
mod seed;
mod taxonomy;
mod validator;

pub use config::{DomainConfig, TaxonomyConfig, TaxonomyConfigUpdate};
pub use error::{TaxonomyError, ValidatorError};
pub use metrics::TaxonomyMetrics;
pub use seed::GENERAL_DOMAIN;
pub use taxonomy::{AddTermOutcome, DomainExport, TaxonomyExport, TermTaxonomy};
pub use validator::{KeywordValidator, MockValidator, TermValidator};
