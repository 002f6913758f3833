//! Calc Ontology Core Library
//!
//! Domain logic for the calculus concept explorer: a static concept
//! vocabulary with fixed embedding vectors, a read-only ontology of
//! calculus individuals, and a resolver that matches free-text queries
//! to ontology entries by cosine similarity.
//!
//! # Architecture
//!
//! This crate defines:
//! - Similarity primitives (`cosine_similarity`, `l2_norm`)
//! - The injected `Vocabulary` (concept vectors + synonym table)
//! - The `Ontology` accessor (loaded once at startup, read-only after)
//! - `ConceptResolver` with best-match resolution and related-concept
//!   suggestion over one shared scored scan
//! - Error types and result aliases
//! - Configuration structures
//!
//! # Example
//!
//! ```
//! use calc_ontology_core::{ConceptResolver, Ontology, Vocabulary};
//!
//! let vocabulary = Vocabulary::builtin();
//! let ontology = Ontology::empty();
//! let resolver = ConceptResolver::new(&vocabulary, &ontology);
//! let resolution = resolver.resolve("slope").unwrap();
//! // Empty ontology: the term is known but nothing matches.
//! assert!(!resolution.is_match());
//! ```

pub mod config;
pub mod error;
pub mod ontology;
pub mod resolver;
pub mod similarity;
pub mod vocabulary;

// Re-exports for convenience
pub use config::Config;
pub use error::{CoreError, CoreResult};
pub use ontology::{Individual, Ontology};
pub use resolver::{ConceptResolver, Resolution, RELATED_THRESHOLD};
pub use vocabulary::Vocabulary;
