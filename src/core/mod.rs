//! Cross-cutting support for the engine

pub mod error;
