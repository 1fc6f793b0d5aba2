//! A collection of small, independent helpers shared across
//! applications.
//!
//! The only sizeable piece is the [`duration`] module with its
//! config friendly [`Duration`] type, the rest are one-screen helpers
//! for slices, maps, strings, files and random strings.

pub mod duration;
pub use duration::{Duration, ParseError};

pub mod fs;

pub mod maps;

pub mod random;
pub use random::random_string;

pub mod slices;

pub mod strings;
