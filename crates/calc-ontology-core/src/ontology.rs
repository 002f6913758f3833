//! Ontology accessor.
//!
//! The ontology is a JSON document of individuals, each carrying
//! `label`, `hasFormula`, and `hasExplanation` properties. The source
//! document allows the RDF-ish attribute shapes (absent, a single
//! string, or a list of strings); those are normalized exactly once at
//! load into `Option<String>` so downstream code never branches on
//! shape.
//!
//! Loaded once at process start, read-only for the process lifetime.
//! Load failure is fatal: no route can be served without the ontology.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{CoreResult, OntologyError};

/// Raw attribute value as it appears in the document: a single string
/// or a list of strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum AttrValue {
    Single(String),
    Many(Vec<String>),
}

impl AttrValue {
    /// Collapse to the single carried value: the string itself, or the
    /// first element of a list. Trimmed of surrounding whitespace.
    fn into_text(self) -> Option<String> {
        let text = match self {
            AttrValue::Single(s) => Some(s),
            AttrValue::Many(v) => v.into_iter().next(),
        };
        text.map(|s| s.trim().to_string())
    }
}

/// One individual as it appears in the ontology document.
#[derive(Debug, Clone, Deserialize)]
struct RawIndividual {
    #[serde(default)]
    label: Vec<String>,
    #[serde(default, rename = "hasFormula")]
    has_formula: Option<AttrValue>,
    #[serde(default, rename = "hasExplanation")]
    has_explanation: Option<AttrValue>,
}

/// One ontology entry, attribute shapes already normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    /// Display labels; matched against the vocabulary after lowercasing.
    pub labels: Vec<String>,
    /// Formula text, if the individual carries one.
    pub formula: Option<String>,
    /// Explanation text, if the individual carries one.
    pub explanation: Option<String>,
}

impl From<RawIndividual> for Individual {
    fn from(raw: RawIndividual) -> Self {
        Self {
            labels: raw.label,
            formula: raw.has_formula.and_then(AttrValue::into_text),
            explanation: raw.has_explanation.and_then(AttrValue::into_text),
        }
    }
}

/// The loaded ontology: an ordered, read-only list of individuals.
#[derive(Debug, Clone, Default)]
pub struct Ontology {
    individuals: Vec<Individual>,
}

impl Ontology {
    /// An ontology with no individuals. Valid; every scan comes back
    /// empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build an ontology from already-normalized individuals.
    pub fn from_individuals(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    /// Load the ontology document from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| OntologyError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let ontology = Self::from_json_str(&content).map_err(|e| OntologyError::Parse {
            path: path.display().to_string(),
            source: e,
        })?;
        info!(
            path = %path.display(),
            individuals = ontology.len(),
            "Loaded ontology"
        );
        Ok(ontology)
    }

    /// Parse an ontology document from a JSON string.
    ///
    /// The document is a top-level array of individuals.
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        let raw: Vec<RawIndividual> = serde_json::from_str(content)?;
        Ok(Self {
            individuals: raw.into_iter().map(Individual::from).collect(),
        })
    }

    /// Iterate individuals in document order.
    pub fn individuals(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Whether the ontology holds no individuals.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }
}
