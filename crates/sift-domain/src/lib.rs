//! Sift Domain Layer
//!
//! This crate contains the core domain model shared by the relevance scorer
//! and the term taxonomy. It has ZERO external dependencies and defines the
//! value objects every other crate in the workspace builds on.
//!
//! ## Key Concepts
//!
//! - **Candidate**: a discovered content item awaiting relevance scoring
//! - **Factor**: one of six independently computed sub-scores
//! - **Term**: a vocabulary entry with a confidence and a lifecycle source
//! - **Domain**: a named category bucket (e.g. "programming") holding terms
//! - **Validation**: an external verdict on a term's domain membership
//!
//! ## Lifecycles
//!
//! Candidates are single-use: created by discovery, scored, dropped.
//! Terms outlive any number of scoring and classification calls.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod candidate;
pub mod context;
pub mod scoring;
pub mod taxonomy;
pub mod term;
pub mod validation;

// Re-exports for convenience
pub use candidate::{CandidateMetadata, ContentCandidate, ContentSource};
pub use context::{ContentType, LearningContext, Platform};
pub use scoring::{clamp_unit, Factor, RelevanceFactors, ScoringWeights};
pub use taxonomy::TaxonomyDomain;
pub use term::{current_timestamp, TaxonomyTerm, TermSource};
pub use validation::ValidationResult;
