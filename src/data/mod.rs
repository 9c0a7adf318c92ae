// src/data/mod.rs

//! The `data` module is specialized data containers for parsed bugreport
//! output.
//!
//! ## Definitions of data
//!
//! ### Item
//!
//! An [`Item`] is the atomic unit of parsed output. Every `Item` carries an
//! [`ItemType`] tag identifying which bugreport section or crash class
//! produced it, and an insertion-ordered key/value payload (a
//! [`GenericMap`]). `Item`s are immutable once committed to an
//! [`ItemCollection`].
//!
//! ### LogcatLine
//!
//! A [`LogcatLine`] is one successfully parsed line of device log output,
//! in either the `threadtime` or `time` logcat format. The
//! [`SystemLogParser`] classifies each `LogcatLine` by level and tag and
//! routes it to the correct correlator.
//!
//! [`Item`]: crate::data::item::Item
//! [`ItemType`]: crate::data::item::ItemType
//! [`GenericMap`]: crate::data::item::GenericMap
//! [`ItemCollection`]: crate::data::item::ItemCollection
//! [`LogcatLine`]: crate::data::logcat::LogcatLine
//! [`SystemLogParser`]: crate::parsers::syslog::SystemLogParser

pub mod item;
pub mod logcat;
