//! Detection of verbatim overlap among plain-text documents.
//!
//! Every document is converted into a profile of its word n-grams,
//! and every unordered pair of documents is scored by the number of distinct n-grams
//! found in both of them. Pairs with a nonzero score are reported as possible plagiarism.
#![deny(missing_docs)]

pub mod config;
pub mod document;
pub mod errors;
pub mod profile;
pub mod score;
pub mod searcher;

pub(crate) mod shingling;

pub use config::{ReadPolicy, Sensitivity};
pub use document::{Document, FileDocument, TextDocument};
pub use profile::NGramProfile;
pub use score::shared_count;
pub use searcher::{Comparison, ComparisonResult, OverlapSearcher, ProfileSet};
