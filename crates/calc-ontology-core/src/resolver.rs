//! Concept resolution and related-concept suggestion.
//!
//! Both operations run the same scored scan: for every ontology
//! individual, for every lowercased label present in the vocabulary,
//! compute cosine similarity between the query vector and the label
//! vector. The resolver keeps the single best candidate; the suggester
//! keeps every label above a threshold.

use tracing::debug;

use crate::error::CoreResult;
use crate::ontology::{Individual, Ontology};
use crate::similarity::cosine_similarity;
use crate::vocabulary::Vocabulary;

/// Similarity threshold for related-concept suggestion.
pub const RELATED_THRESHOLD: f32 = 0.7;

/// Placeholder when a matched individual has no formula.
pub const FORMULA_PLACEHOLDER: &str = "Formula not available.";
/// Placeholder when a matched individual has no explanation.
pub const EXPLANATION_PLACEHOLDER: &str = "Explanation not available.";

/// Message when the query term is absent from the vector table.
pub const VOCABULARY_MISS_MESSAGE: &str =
    "The concept you entered was not found in the vocabulary.";
/// Message when the term is known but no ontology entry resembles it.
pub const NO_MATCH_MESSAGE: &str = "The concept you entered was not found. Please try again.";

/// Outcome of resolving a user query against the ontology.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Best-matching individual's formula and explanation.
    Match {
        formula: Option<String>,
        explanation: Option<String>,
    },
    /// The canonical term has no vector; nothing was scanned.
    VocabularyMiss,
    /// The term is known but no candidate scored above zero.
    NoMatch,
}

impl Resolution {
    /// Whether this resolution carries a matched individual.
    pub fn is_match(&self) -> bool {
        matches!(self, Resolution::Match { .. })
    }

    /// Render the user-facing HTML fragment for this resolution.
    ///
    /// Formula and explanation fall back to fixed placeholder text
    /// when absent. Ontology content is trusted and rendered as-is.
    pub fn to_html(&self) -> String {
        match self {
            Resolution::Match {
                formula,
                explanation,
            } => {
                let formula = formula.as_deref().unwrap_or(FORMULA_PLACEHOLDER);
                let explanation = explanation.as_deref().unwrap_or(EXPLANATION_PLACEHOLDER);
                format!(
                    "<strong>Formula:</strong> {}<br><strong>Explanation:</strong> {}",
                    formula, explanation
                )
            }
            Resolution::VocabularyMiss => VOCABULARY_MISS_MESSAGE.to_string(),
            Resolution::NoMatch => NO_MATCH_MESSAGE.to_string(),
        }
    }
}

/// A scored (label, individual) pair produced by the shared scan.
#[derive(Debug, Clone)]
struct Candidate<'a> {
    similarity: f32,
    /// Lowercased label that matched the vocabulary.
    label: String,
    individual: &'a Individual,
}

/// Resolves free-text queries against the vocabulary and ontology.
///
/// Holds borrowed, read-only references; construction is free and the
/// resolver itself is stateless between calls.
#[derive(Debug, Clone, Copy)]
pub struct ConceptResolver<'a> {
    vocabulary: &'a Vocabulary,
    ontology: &'a Ontology,
}

impl<'a> ConceptResolver<'a> {
    pub fn new(vocabulary: &'a Vocabulary, ontology: &'a Ontology) -> Self {
        Self {
            vocabulary,
            ontology,
        }
    }

    /// Resolve raw user text to the best-matching ontology entry.
    ///
    /// Only candidates with similarity strictly greater than zero are
    /// eligible. On an exact similarity tie the lexically smallest
    /// label wins, so the outcome does not depend on document order.
    pub fn resolve(&self, raw: &str) -> CoreResult<Resolution> {
        let canonical = self.vocabulary.canonicalize(raw);
        let Some(query_vector) = self.vocabulary.vector(&canonical) else {
            debug!(concept = %canonical, "Query term absent from vocabulary");
            return Ok(Resolution::VocabularyMiss);
        };

        let candidates = self.scan(query_vector)?;

        let mut best: Option<&Candidate<'_>> = None;
        for candidate in &candidates {
            let better = match best {
                None => candidate.similarity > 0.0,
                Some(current) => {
                    candidate.similarity > current.similarity
                        || (candidate.similarity == current.similarity
                            && candidate.label < current.label)
                }
            };
            if better {
                best = Some(candidate);
            }
        }

        match best {
            Some(candidate) => {
                debug!(
                    concept = %canonical,
                    label = %candidate.label,
                    similarity = candidate.similarity,
                    "Resolved concept"
                );
                Ok(Resolution::Match {
                    formula: candidate.individual.formula.clone(),
                    explanation: candidate.individual.explanation.clone(),
                })
            }
            None => {
                debug!(concept = %canonical, "No ontology entry above zero similarity");
                Ok(Resolution::NoMatch)
            }
        }
    }

    /// Suggest related concept labels using the default threshold.
    ///
    /// Returns an empty list on a vocabulary miss; callers branch on
    /// emptiness. Labels appear in scan order and duplicates across
    /// individuals are preserved.
    pub fn suggest(&self, raw: &str) -> CoreResult<Vec<String>> {
        self.suggest_with_threshold(raw, RELATED_THRESHOLD)
    }

    /// Suggest related concept labels with a caller-chosen threshold.
    ///
    /// A label is included when its similarity to the query vector is
    /// strictly greater than `threshold`.
    pub fn suggest_with_threshold(&self, raw: &str, threshold: f32) -> CoreResult<Vec<String>> {
        let canonical = self.vocabulary.canonicalize(raw);
        let Some(query_vector) = self.vocabulary.vector(&canonical) else {
            return Ok(Vec::new());
        };

        let candidates = self.scan(query_vector)?;
        Ok(candidates
            .into_iter()
            .filter(|c| c.similarity > threshold)
            .map(|c| c.label)
            .collect())
    }

    /// Shared scored scan over every (individual, label) pair whose
    /// lowercased label has a vocabulary vector.
    fn scan(&self, query_vector: &[f32]) -> CoreResult<Vec<Candidate<'a>>> {
        let mut candidates = Vec::new();
        for individual in self.ontology.individuals() {
            for label in &individual.labels {
                let label = label.to_lowercase();
                let Some(label_vector) = self.vocabulary.vector(&label) else {
                    continue;
                };
                let similarity = cosine_similarity(query_vector, label_vector)?;
                candidates.push(Candidate {
                    similarity,
                    label,
                    individual,
                });
            }
        }
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ontology::Individual;

    fn individual(label: &str, formula: Option<&str>, explanation: Option<&str>) -> Individual {
        Individual {
            labels: vec![label.to_string()],
            formula: formula.map(str::to_string),
            explanation: explanation.map(str::to_string),
        }
    }

    fn sample_ontology() -> Ontology {
        Ontology::from_individuals(vec![
            individual("differentiation", Some("d/dx"), Some("rate of change")),
            individual(
                "integration",
                Some("∫ f(x) dx"),
                Some("area under a curve"),
            ),
            individual("limits", None, Some("value a function approaches")),
        ])
    }

    #[test]
    fn test_exact_label_match_selected() {
        let vocab = Vocabulary::builtin();
        let onto = sample_ontology();
        let resolver = ConceptResolver::new(&vocab, &onto);
        let resolution = resolver.resolve("differentiation").unwrap();
        assert_eq!(
            resolution,
            Resolution::Match {
                formula: Some("d/dx".to_string()),
                explanation: Some("rate of change".to_string()),
            }
        );
    }

    #[test]
    fn test_synonym_resolves_like_canonical() {
        let vocab = Vocabulary::builtin();
        let onto = sample_ontology();
        let resolver = ConceptResolver::new(&vocab, &onto);
        for (phrase, canonical) in vocab.synonyms() {
            assert_eq!(
                resolver.resolve(phrase).unwrap(),
                resolver.resolve(canonical).unwrap(),
                "synonym '{}' must resolve like '{}'",
                phrase,
                canonical
            );
        }
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let vocab = Vocabulary::builtin();
        let onto = sample_ontology();
        let resolver = ConceptResolver::new(&vocab, &onto);
        let expected = resolver.resolve("differentiation").unwrap();
        assert_eq!(resolver.resolve("Differentiation").unwrap(), expected);
        assert_eq!(resolver.resolve("DIFFERENTIATION ").unwrap(), expected);
        assert_eq!(resolver.resolve("  differentiation").unwrap(), expected);
    }

    #[test]
    fn test_empty_input_is_vocabulary_miss() {
        let vocab = Vocabulary::builtin();
        let onto = sample_ontology();
        let resolver = ConceptResolver::new(&vocab, &onto);
        assert_eq!(resolver.resolve("").unwrap(), Resolution::VocabularyMiss);
        assert_eq!(resolver.resolve("   ").unwrap(), Resolution::VocabularyMiss);
    }

    #[test]
    fn test_unknown_term_is_vocabulary_miss() {
        let vocab = Vocabulary::builtin();
        let onto = sample_ontology();
        let resolver = ConceptResolver::new(&vocab, &onto);
        let resolution = resolver.resolve("wavelets").unwrap();
        assert_eq!(resolution, Resolution::VocabularyMiss);
        assert_eq!(resolution.to_html(), VOCABULARY_MISS_MESSAGE);
    }

    #[test]
    fn test_known_term_empty_ontology_is_no_match() {
        let vocab = Vocabulary::builtin();
        let onto = Ontology::empty();
        let resolver = ConceptResolver::new(&vocab, &onto);
        let resolution = resolver.resolve("limits").unwrap();
        assert_eq!(resolution, Resolution::NoMatch);
        assert_eq!(resolution.to_html(), NO_MATCH_MESSAGE);
    }

    #[test]
    fn test_labels_outside_vocabulary_never_match() {
        let vocab = Vocabulary::builtin();
        // Labels present in the ontology but not in the vector table.
        let onto = Ontology::from_individuals(vec![individual(
            "taylor series",
            Some("f(a) + f'(a)(x-a) + ..."),
            None,
        )]);
        let resolver = ConceptResolver::new(&vocab, &onto);
        assert_eq!(resolver.resolve("limits").unwrap(), Resolution::NoMatch);
    }

    #[test]
    fn test_placeholders_for_absent_attributes() {
        let vocab = Vocabulary::builtin();
        let onto = Ontology::from_individuals(vec![individual("limits", None, None)]);
        let resolver = ConceptResolver::new(&vocab, &onto);
        let html = resolver.resolve("limits").unwrap().to_html();
        assert_eq!(
            html,
            "<strong>Formula:</strong> Formula not available.<br>\
             <strong>Explanation:</strong> Explanation not available."
        );
    }

    #[test]
    fn test_resolve_slope_end_to_end_fragment() {
        let vocab = Vocabulary::builtin();
        let onto = Ontology::from_individuals(vec![individual(
            "differentiation",
            Some("d/dx"),
            Some("rate of change"),
        )]);
        let resolver = ConceptResolver::new(&vocab, &onto);
        let html = resolver.resolve("slope").unwrap().to_html();
        assert_eq!(
            html,
            "<strong>Formula:</strong> d/dx<br><strong>Explanation:</strong> rate of change"
        );
    }

    #[test]
    fn test_tie_keeps_first_seen_among_identical_labels() {
        let vocab = Vocabulary::builtin();
        // Two individuals with identical similarity to the query (both
        // carry the exact query label); lexical order of labels decides.
        let onto = Ontology::from_individuals(vec![
            Individual {
                labels: vec!["limits".to_string()],
                formula: Some("from-limits".to_string()),
                explanation: None,
            },
            Individual {
                labels: vec!["LIMITS".to_string()],
                formula: Some("from-upper".to_string()),
                explanation: None,
            },
        ]);
        let resolver = ConceptResolver::new(&vocab, &onto);
        // Equal labels after lowercasing: first seen wins.
        let resolution = resolver.resolve("limits").unwrap();
        assert_eq!(
            resolution,
            Resolution::Match {
                formula: Some("from-limits".to_string()),
                explanation: None,
            }
        );
    }

    #[test]
    fn test_tie_break_independent_of_document_order() {
        let vocab = Vocabulary::builtin();
        let a = individual("differentiation", Some("d/dx"), None);
        let b = individual("integration", Some("∫ f(x) dx"), None);
        // "slope" canonicalizes to differentiation; its exact-label
        // candidate scores 1.0 and wins regardless of order. Flip the
        // document order and expect the same outcome.
        for individuals in [vec![a.clone(), b.clone()], vec![b, a]] {
            let onto = Ontology::from_individuals(individuals);
            let resolver = ConceptResolver::new(&vocab, &onto);
            let resolution = resolver.resolve("slope").unwrap();
            assert_eq!(
                resolution,
                Resolution::Match {
                    formula: Some("d/dx".to_string()),
                    explanation: None,
                }
            );
        }
    }

    #[test]
    fn test_suggest_unknown_term_is_empty() {
        let vocab = Vocabulary::builtin();
        let onto = sample_ontology();
        let resolver = ConceptResolver::new(&vocab, &onto);
        assert!(resolver.suggest("wavelets").unwrap().is_empty());
    }

    #[test]
    fn test_suggest_threshold_filters() {
        let vocab = Vocabulary::builtin();
        let onto = sample_ontology();
        let resolver = ConceptResolver::new(&vocab, &onto);
        // differentiation vs itself = 1.0, vs integration ~0.933,
        // vs limits ~0.734; all above the 0.7 threshold.
        let related = resolver.suggest("differentiation").unwrap();
        assert_eq!(related, vec!["differentiation", "integration", "limits"]);
        // integration vs limits ~0.599 drops below the threshold.
        let related = resolver.suggest("integration").unwrap();
        assert_eq!(related, vec!["differentiation", "integration"]);
    }

    #[test]
    fn test_suggest_lower_threshold_never_shrinks() {
        let vocab = Vocabulary::builtin();
        let onto = sample_ontology();
        let resolver = ConceptResolver::new(&vocab, &onto);
        let mut previous_len = 0;
        for threshold in [0.95, 0.9, 0.7, 0.5, 0.0, -1.0] {
            let related = resolver
                .suggest_with_threshold("differentiation", threshold)
                .unwrap();
            assert!(
                related.len() >= previous_len,
                "threshold {} shrank the result set",
                threshold
            );
            previous_len = related.len();
        }
    }

    #[test]
    fn test_suggest_preserves_duplicates_in_scan_order() {
        let vocab = Vocabulary::builtin();
        let onto = Ontology::from_individuals(vec![
            individual("integration", None, None),
            individual("integration", None, None),
        ]);
        let resolver = ConceptResolver::new(&vocab, &onto);
        let related = resolver.suggest("integration").unwrap();
        assert_eq!(related, vec!["integration", "integration"]);
    }
}
