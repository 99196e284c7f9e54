//! Shared protocol types for kinetics-web
//!
//! Defines the JSON exchange between the UI and the `/data` endpoint, the
//! label strings shown next to the sliders, and request sequencing.

pub mod error;
pub mod labels;
pub mod sequence;
pub mod wire;

pub use error::*;
pub use labels::*;
pub use sequence::*;
pub use wire::*;
