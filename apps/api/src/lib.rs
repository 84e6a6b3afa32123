//! Roast & Compliment generator: an HTTP endpoint that turns a name plus a few
//! knobs into one LLM-written line, and the client controller that drives it.

pub mod client;
pub mod config;
pub mod errors;
pub mod generation;
pub mod llm_client;
pub mod models;
pub mod routes;
pub mod state;
