#![forbid(unsafe_code)]
//! enumgen: typed enum drafting from comment-embedded constant metadata
//!
//! The semantic core (literal conversion, field and alias extraction, inflection, imports) lives in
//! `enumgen_core`. This crate layers the drafting pipeline, its configuration, and the CLI on top.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a bug (logic error), use `.expect("INVARIANT: reason")` with a
//!   clear explanation.

pub mod cli;
pub mod config;
pub mod draft;
pub mod version;

pub use config::GenerateConfig;
pub use draft::{DraftError, DraftSet, MemberDecl, MemberDraft, TypeDecl, TypeDraft, draft_member, draft_type, draft_types};
