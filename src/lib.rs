//! Context-aware wordlist generation for CTF challenges.
//!
//! A base word is expanded through a fixed grammar of transformation rules
//! and combined with context words scraped from reference pages.

pub mod context;
pub mod engine;
pub mod error;
pub mod fetch;
pub mod normalize;
pub mod output;
pub mod rules;

pub use engine::generate;
pub use error::WordgenError;
