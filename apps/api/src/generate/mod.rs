// The generate endpoint: normalization, prompt construction, response
// parsing, and persistence. All model calls go through llm_client and all
// writes go through firestore — nothing here talks to a provider directly.

pub mod handlers;
pub mod normalizer;
pub mod parser;
pub mod prompts;
