//! newstrail: merge several articles on one topic into a neutral composite article.
//!
//! Hexagonal layout: the pipeline in `usecases` talks to the filesystem, the LLM
//! backend and the operator console only through the traits in `ports`.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
