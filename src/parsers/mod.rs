// src/parsers/mod.rs

//! The `parsers` module is the section-routing and crash-correlation
//! engine.
//!
//! ## Overview of parsers
//!
//! The [`BugreportParser`] is the public entry point. It feeds the full
//! bugreport text line-by-line through a [`SectionRouter`], which segments
//! the unstructured multi-section dump into blocks and delivers each block
//! to the registered [`SectionParser`] for that section:
//!
//! - [`MemInfoParser`] for the `MEMORY INFO` section
//! - [`ProcRankParser`] for the `PROCRANK` section
//! - [`SystemPropsParser`] for the `SYSTEM PROPERTIES` section
//! - [`SystemLogParser`] for the `SYSTEM LOG` section
//! - [`NullParser`] catch-all for every other section
//!
//! The `SystemLogParser` additionally fans each parsed logcat line out to
//! the three [`Correlator`]s, which reconstruct multi-line crash/hang
//! records from the interleaved line stream:
//!
//! - [`AnrCorrelator`] for "Application Not Responding" hangs
//! - [`JavaCrashCorrelator`] for `AndroidRuntime` crashes
//! - [`NativeCrashCorrelator`] for `debuggerd` native crashes
//!
//! [`BugreportParser`]: crate::parsers::bugreport::BugreportParser
//! [`SectionRouter`]: crate::parsers::router::SectionRouter
//! [`SectionParser`]: crate::parsers::router::SectionParser
//! [`MemInfoParser`]: crate::parsers::memoryinfo::MemInfoParser
//! [`ProcRankParser`]: crate::parsers::procrank::ProcRankParser
//! [`SystemPropsParser`]: crate::parsers::sysprops::SystemPropsParser
//! [`SystemLogParser`]: crate::parsers::syslog::SystemLogParser
//! [`NullParser`]: crate::parsers::router::NullParser
//! [`AnrCorrelator`]: crate::parsers::anr::AnrCorrelator
//! [`JavaCrashCorrelator`]: crate::parsers::javacrash::JavaCrashCorrelator
//! [`NativeCrashCorrelator`]: crate::parsers::nativecrash::NativeCrashCorrelator

use crate::common::{Pid, Tid};
use crate::data::item::ItemCollection;

pub mod anr;
pub mod bugreport;
pub mod javacrash;
pub mod memoryinfo;
pub mod nativecrash;
pub mod procrank;
pub mod router;
pub mod syslog;
pub mod sysprops;

/// A stateful per-event-class line consumer that reconstructs multi-line
/// crash/hang records from a single interleaved logcat line stream.
///
/// Fed exclusively by the [`SystemLogParser`], never directly by the
/// [`SectionRouter`].
///
/// [`SystemLogParser`]: crate::parsers::syslog::SystemLogParser
/// [`SectionRouter`]: crate::parsers::router::SectionRouter
pub trait Correlator {
    /// Consume one logcat message attributed to `(pid, tid)`.
    ///
    /// May commit completed records to `items` (e.g. on an end pattern or a
    /// correlation break).
    fn consume(
        &mut self,
        pid: Pid,
        tid: Tid,
        message: &str,
        items: &mut ItemCollection,
    );

    /// Flush every still-open record to `items` and clear all state.
    ///
    /// Called at block end; guarantees no record survives past the parse.
    fn commit(
        &mut self,
        items: &mut ItemCollection,
    );
}
