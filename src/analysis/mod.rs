//! Analysis layer: the four pure pipeline stages.
//!
//! Control flow for an assessment: [`normalize`] → [`scoring`] →
//! [`recommend`]. [`cycle`] is independent of the other three and runs over
//! the caller's day log.

pub mod cycle;
pub mod normalize;
pub mod recommend;
pub mod scoring;
