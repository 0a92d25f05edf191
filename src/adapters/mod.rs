//! Infrastructure adapters. Implement outbound ports.
//!
//! LLM backend, filesystem, console. Map errors to DomainError.

pub mod ai;
pub mod persistence;
pub mod ui;
