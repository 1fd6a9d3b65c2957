#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod bezier;
pub mod draw;
pub mod sketch;

pub use crate::bezier::BezierCurve;
pub use crate::sketch::Sketch;
