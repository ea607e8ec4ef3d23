//! Groq chat client
//!
//! Groq exposes an OpenAI-compatible chat API, so the client is built on
//! `async-openai` with a custom `api_base`. Two operations are exposed:
//! a one-paragraph article summary and a batch fake-news + wellness
//! narrative over the run's headlines.

pub mod groq;

pub use groq::GroqClient;
