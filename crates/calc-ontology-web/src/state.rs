//! Shared request-handler state.

use calc_ontology_core::{ConceptResolver, Ontology, Vocabulary};

/// Process-wide immutable state: the vocabulary and the loaded
/// ontology. Built once in `main`, wrapped in an `Arc`, and injected
/// into handlers via axum's `State` extractor.
#[derive(Debug)]
pub struct AppState {
    pub vocabulary: Vocabulary,
    pub ontology: Ontology,
}

impl AppState {
    pub fn new(vocabulary: Vocabulary, ontology: Ontology) -> Self {
        Self {
            vocabulary,
            ontology,
        }
    }

    /// Resolver over the shared tables.
    pub fn resolver(&self) -> ConceptResolver<'_> {
        ConceptResolver::new(&self.vocabulary, &self.ontology)
    }
}
