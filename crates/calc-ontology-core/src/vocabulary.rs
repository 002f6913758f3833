//! Static concept vocabulary: embedding vectors and synonym table.
//!
//! The vocabulary is built once at startup and passed by reference into
//! the resolver; nothing mutates it afterwards. Tests can construct
//! substitute vocabularies via [`Vocabulary::new`].

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};

/// Concept vocabulary: canonical names with fixed embedding vectors,
/// plus a synonym table mapping free-text phrases to canonical names.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    vectors: HashMap<String, Vec<f32>>,
    synonyms: HashMap<String, String>,
}

impl Vocabulary {
    /// Build a vocabulary from explicit tables.
    ///
    /// Keys are expected in canonical form (lowercase, trimmed); lookup
    /// normalizes input the same way.
    pub fn new(vectors: HashMap<String, Vec<f32>>, synonyms: HashMap<String, String>) -> Self {
        Self { vectors, synonyms }
    }

    /// The builtin calculus vocabulary.
    ///
    /// Placeholder 3-dimensional vectors standing in for real word
    /// embeddings; the synonym table includes identity entries so that
    /// canonical names resolve through the same path as synonyms.
    pub fn builtin() -> Self {
        let vectors = HashMap::from([
            ("differentiation".to_string(), vec![0.1, 0.2, 0.3]),
            ("integration".to_string(), vec![0.2, 0.1, 0.4]),
            ("limits".to_string(), vec![0.3, 0.4, 0.1]),
        ]);
        let synonyms = HashMap::from([
            ("differentiation".to_string(), "differentiation".to_string()),
            ("integration".to_string(), "integration".to_string()),
            ("limits".to_string(), "limits".to_string()),
            ("area under curve".to_string(), "integration".to_string()),
            ("slope".to_string(), "differentiation".to_string()),
            ("continuity".to_string(), "limits".to_string()),
        ]);
        Self { vectors, synonyms }
    }

    /// Normalize raw user text to its canonical concept name.
    ///
    /// Trims whitespace, lowercases, then substitutes a synonym-table
    /// match; unknown phrases pass through unchanged (the vocabulary
    /// check happens at vector lookup).
    pub fn canonicalize(&self, raw: &str) -> String {
        let normalized = raw.trim().to_lowercase();
        match self.synonyms.get(&normalized) {
            Some(canonical) => canonical.clone(),
            None => normalized,
        }
    }

    /// Embedding vector for a canonical concept name, if present.
    pub fn vector(&self, name: &str) -> Option<&[f32]> {
        self.vectors.get(name).map(|v| v.as_slice())
    }

    /// Whether a canonical name is present in the vector table.
    pub fn contains(&self, name: &str) -> bool {
        self.vectors.contains_key(name)
    }

    /// Iterate the synonym table as `(phrase, canonical)` pairs.
    pub fn synonyms(&self) -> impl Iterator<Item = (&str, &str)> {
        self.synonyms.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Validate the synonym -> vector invariant.
    ///
    /// Every synonym target must be a key in the vector table; a
    /// dangling target would otherwise silently resolve to the
    /// vocabulary-miss path at query time.
    pub fn validate(&self) -> CoreResult<()> {
        for (phrase, canonical) in &self.synonyms {
            if !self.vectors.contains_key(canonical) {
                return Err(CoreError::config(format!(
                    "synonym '{}' maps to '{}' which has no vector",
                    phrase, canonical
                )));
            }
        }
        Ok(())
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}
