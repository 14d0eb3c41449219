#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Routing of inbound customer messages to a generated reply.
//!
//! A message flows through three steps:
//! - resolve the sender's thread id, creating and persisting one on first contact
//! - seed a short history and ask the generation service for a reply
//! - hand back the reply, or the localized fallback if generation failed
//!
//! Store failures reach the caller. Generation failures never do.

mod error;
mod generator;
mod resolver;
mod router;

#[cfg(test)]
mod testing;

pub use error::ConversationError;
pub use generator::{GenerationSettings, ResponseGenerator};
pub use resolver::ThreadResolver;
pub use router::ConversationRouter;
