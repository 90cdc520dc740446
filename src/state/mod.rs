//! State management for the generator.
//!
//! Contains the resolved, read-only form of a case that every later stage
//! consumes.

mod case;

pub use case::CaseState;
