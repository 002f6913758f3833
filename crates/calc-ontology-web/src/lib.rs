//! Calc Ontology Web Server
//!
//! HTTP surface for the calculus concept explorer. Three routes:
//!
//! - `GET /` — home page
//! - `GET /calculus` — empty query form; `POST /calculus` — resolve the
//!   submitted concept and re-render the form with the result
//! - `GET /ontology` — full listing of loaded individuals
//!
//! State (vocabulary + ontology) is built once at startup and shared
//! read-only across requests; no locking, nothing mutates after boot.

pub mod error;
pub mod routes;
pub mod state;
pub mod templates;

pub use error::WebError;
pub use routes::router;
pub use state::AppState;
