// src/parsers/bugreport.rs

//! Implement [`BugreportParser`], the orchestrator and sole public entry
//! point.
//!
//! A `BugreportParser` wires the default section parsers into a
//! [`SectionRouter`], streams the full bugreport text through it
//! line-by-line, flushes at end of stream, and returns the accumulated
//! [`ItemCollection`].
//!
//! One `BugreportParser` instance is single-use; `parse` consumes it.
//! Every invocation constructs fresh router, correlator, and collection
//! state, so concurrent parses of independent inputs are safe provided
//! each uses its own instance.
//!
//! [`SectionRouter`]: crate::parsers::router::SectionRouter
//! [`ItemCollection`]: crate::data::item::ItemCollection

use std::io::{BufRead, Result};

use ::lazy_static::lazy_static;
use ::regex::Regex;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx};

use crate::data::item::ItemCollection;
use crate::parsers::memoryinfo::MemInfoParser;
use crate::parsers::procrank::ProcRankParser;
use crate::parsers::router::{NullParser, SectionRouter};
use crate::parsers::syslog::SystemLogParser;
use crate::parsers::sysprops::SystemPropsParser;

lazy_static! {
    /// `MEMORY INFO` section start boundary
    static ref SECTION_MEMINFO_REGEX: Regex = {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"^------ MEMORY INFO .*$").unwrap()
    };
    /// `PROCRANK` section start boundary
    static ref SECTION_PROCRANK_REGEX: Regex = {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"^------ PROCRANK .*$").unwrap()
    };
    /// `SYSTEM PROPERTIES` section start boundary
    static ref SECTION_SYSPROPS_REGEX: Regex = {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"^------ SYSTEM PROPERTIES .*$").unwrap()
    };
    /// `SYSTEM LOG` section start boundary
    static ref SECTION_SYSLOG_REGEX: Regex = {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"^------ SYSTEM LOG .*$").unwrap()
    };
    /// any other section boundary; must be registered last
    static ref SECTION_CATCHALL_REGEX: Regex = {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"^------ .*$").unwrap()
    };
}

/// The orchestrator: registers the default section parsers into a
/// [`SectionRouter`] and drives a full bugreport through it.
///
/// [`SectionRouter`]: crate::parsers::router::SectionRouter
#[derive(Debug)]
pub struct BugreportParser {
    router: SectionRouter,
    items: ItemCollection,
}

impl Default for BugreportParser {
    fn default() -> BugreportParser {
        BugreportParser::new()
    }
}

impl BugreportParser {
    /// Create a `BugreportParser` with the default section parsers
    /// registered. The catch-all discard parser is registered last so
    /// unrecognized section boundaries are swallowed.
    pub fn new() -> BugreportParser {
        defn!();
        let mut router = SectionRouter::new();
        router.register(
            SECTION_MEMINFO_REGEX.clone(),
            Box::new(MemInfoParser::new()),
        );
        router.register(
            SECTION_PROCRANK_REGEX.clone(),
            Box::new(ProcRankParser::new()),
        );
        router.register(
            SECTION_SYSPROPS_REGEX.clone(),
            Box::new(SystemPropsParser::new()),
        );
        router.register(
            SECTION_SYSLOG_REGEX.clone(),
            Box::new(SystemLogParser::new()),
        );
        router.register(SECTION_CATCHALL_REGEX.clone(), Box::new(NullParser::new()));
        defx!();
        BugreportParser {
            router,
            items: ItemCollection::new(),
        }
    }

    /// Parse a full bugreport from `reader`, line-by-line.
    ///
    /// A reader I/O failure is fatal to the whole parse and propagates to
    /// the caller; already-accumulated items are discarded. Malformed
    /// lines never fail a parse.
    pub fn parse<R: BufRead>(
        mut self,
        reader: R,
    ) -> Result<ItemCollection> {
        defn!();
        for line in reader.lines() {
            let line: String = line?;
            self.router
                .consume_line(&line, &mut self.items);
        }
        self.router
            .flush(&mut self.items);
        defx!("{} items", self.items.len());
        Ok(self.items)
    }

    /// Parse a full bugreport already in memory. Infallible; an in-memory
    /// input cannot raise an I/O failure.
    pub fn parse_str(
        mut self,
        text: &str,
    ) -> ItemCollection {
        defn!("{} bytes", text.len());
        for line in text.lines() {
            self.router
                .consume_line(line, &mut self.items);
        }
        self.router
            .flush(&mut self.items);
        defx!("{} items", self.items.len());
        self.items
    }
}
