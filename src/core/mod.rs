//! Core logic – the employee record, page arithmetic, and the list fetch.
//!
//! Nothing in this module depends on any TUI or rendering crate.
//! Every type is `Send + Sync` so it can be moved into async tasks.

pub mod employee;
pub mod fetch;
pub mod paginator;
