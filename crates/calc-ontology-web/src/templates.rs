//! askama templates for the three pages.

use askama::Template;

/// Static home page.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate;

/// Query form, optionally pre-filled with the submitted concept and
/// the resolver's result fragment.
#[derive(Template)]
#[template(path = "calculus.html")]
pub struct CalculusTemplate {
    pub concept: Option<String>,
    /// Resolver output; intentionally carries markup and is rendered
    /// unescaped in the template.
    pub response: Option<String>,
}

/// Full ontology listing.
#[derive(Template)]
#[template(path = "ontology.html")]
pub struct OntologyTemplate {
    pub rows: Vec<OntologyRow>,
}

/// One listing row, attribute fallbacks already applied.
pub struct OntologyRow {
    pub labels: String,
    pub formula: String,
    pub explanation: String,
}
