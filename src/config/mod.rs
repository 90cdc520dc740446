//! Configuration module for loading case parameters.
//!
//! Parameters are read from JSON; a missing default file falls back to the
//! built-in boundary-layer case.

mod parameters;

pub use parameters::{
    CaseParameters, ChannelParameters, FlowParameters, NumericalParameters, DEFAULT_CASE_FILE,
};
