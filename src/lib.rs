// src/lib.rs

//! _abxlib_ extracts structured items from Android bugreport dumps and
//! logcat streams. The binary program _abx_ drives this library.
//!
//! The library is organized like so:
//!
//! - [`common`] shared type aliases
//! - [`data`] the parsed-output data model ([`Item`]s) and the
//!   logcat line model ([`LogcatLine`])
//! - [`parsers`] the section router, per-section block parsers, the
//!   crash/hang correlators, and the [`BugreportParser`] entry point
//! - [`debug`] printing helpers for debug and test builds
//!
//! [`Item`]: crate::data::item::Item
//! [`LogcatLine`]: crate::data::logcat::LogcatLine
//! [`BugreportParser`]: crate::parsers::bugreport::BugreportParser

pub mod common;
pub mod data;
pub mod debug;
pub mod parsers;
#[cfg(test)]
pub mod tests;
