//! Route handlers.
//!
//! Each handler is a stateless pass-through: parse the request, call
//! the resolver, render a template. No session state, no caching.

use std::sync::Arc;

use axum::extract::{Form, State};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;

use askama::Template;

use crate::error::WebError;
use crate::state::AppState;
use crate::templates::{CalculusTemplate, HomeTemplate, OntologyRow, OntologyTemplate};

/// Fallback cell text for the ontology listing.
const NOT_AVAILABLE: &str = "Not available";

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/calculus", get(calculus_form).post(calculus_query))
        .route("/ontology", get(ontology_listing))
        .with_state(state)
}

/// `GET /` — static home page.
async fn home() -> Result<Html<String>, WebError> {
    Ok(Html(HomeTemplate.render()?))
}

/// `GET /calculus` — empty query form.
async fn calculus_form() -> Result<Html<String>, WebError> {
    let template = CalculusTemplate {
        concept: None,
        response: None,
    };
    Ok(Html(template.render()?))
}

/// Form payload for `POST /calculus`.
#[derive(Debug, Deserialize)]
struct ConceptForm {
    concept: String,
}

/// `POST /calculus` — resolve the submitted concept and re-render the
/// form with the result fragment.
async fn calculus_query(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ConceptForm>,
) -> Result<Html<String>, WebError> {
    let resolution = state.resolver().resolve(&form.concept)?;
    let template = CalculusTemplate {
        concept: Some(form.concept),
        response: Some(resolution.to_html()),
    };
    Ok(Html(template.render()?))
}

/// `GET /ontology` — table of every loaded individual. An empty
/// ontology renders an empty table.
async fn ontology_listing(State(state): State<Arc<AppState>>) -> Result<Html<String>, WebError> {
    let rows = state
        .ontology
        .individuals()
        .map(|individual| OntologyRow {
            labels: individual.labels.join(", "),
            formula: individual
                .formula
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            explanation: individual
                .explanation
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        })
        .collect();

    let template = OntologyTemplate { rows };
    Ok(Html(template.render()?))
}
