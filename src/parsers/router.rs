// src/parsers/router.rs

//! Implement [`SectionRouter`], the pattern-indexed dispatcher that
//! segments one unstructured bugreport text stream into per-section blocks,
//! and [`SectionParser`], the interface every block parser implements.

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};
use ::regex::Regex;

use crate::common::Count;
use crate::data::item::ItemCollection;
use crate::de_wrn;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// SectionParser
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One per-section block parser.
///
/// A `SectionParser` never sees the boundary line that activated it; that
/// line is consumed purely for routing. `parse_block` receives exactly the
/// lines between the parser's own start boundary (exclusive) and the next
/// recognized boundary or end-of-input (inclusive).
pub trait SectionParser {
    /// Short name for diagnostics.
    fn name(&self) -> &'static str;

    /// Parse one delivered block, appending zero or more items to `items`.
    ///
    /// Unparseable lines within the block must be skipped, never fatal;
    /// partial results are always better than none.
    fn parse_block(
        &mut self,
        lines: &[String],
        items: &mut ItemCollection,
    );
}

/// The sentinel "discard" parser.
///
/// Registered as a catch-all so unrecognized section boundaries (e.g. the
/// dump preamble or sections nobody asked for) are swallowed rather than
/// misattributed to the previously active parser.
#[derive(Debug, Default)]
pub struct NullParser {}

impl NullParser {
    pub fn new() -> NullParser {
        NullParser {}
    }
}

impl SectionParser for NullParser {
    fn name(&self) -> &'static str {
        "DISCARD"
    }

    fn parse_block(
        &mut self,
        _lines: &[String],
        _items: &mut ItemCollection,
    ) {
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// SectionRouter
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Converts a single unstructured text stream into a sequence of
/// (parser, block) deliveries.
///
/// Holds a registry of (start pattern, parser) pairs populated once before
/// parsing. Each input line is tested against every start pattern in
/// registration order; first match wins. Registrants must keep patterns
/// unambiguous over the input alphabet and register a catch-all last.
///
/// The caller must call [`flush`] at end of input, otherwise the last
/// section's content is silently lost.
///
/// [`flush`]: SectionRouter::flush
pub struct SectionRouter {
    /// (start pattern, parser) pairs, in registration order
    registry: Vec<(Regex, Box<dyn SectionParser>)>,
    /// index into `self.registry` of the currently active parser
    active: Option<usize>,
    /// lines accumulated for the currently active parser
    buffer: Vec<String>,
    /// count of `parse_block` deliveries, for internal statistics
    pub(crate) deliveries: Count,
    /// count of lines dropped before the first recognized boundary
    pub(crate) lines_dropped: Count,
}

impl std::fmt::Debug for SectionRouter {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter,
    ) -> std::fmt::Result {
        f.debug_struct("SectionRouter")
            .field("registered", &self.registry.len())
            .field("active", &self.active)
            .field("buffered lines", &self.buffer.len())
            .field("deliveries", &self.deliveries)
            .field("lines dropped", &self.lines_dropped)
            .finish()
    }
}

impl Default for SectionRouter {
    fn default() -> SectionRouter {
        SectionRouter::new()
    }
}

impl SectionRouter {
    pub fn new() -> SectionRouter {
        SectionRouter {
            registry: Vec::new(),
            active: None,
            buffer: Vec::new(),
            deliveries: 0,
            lines_dropped: 0,
        }
    }

    /// Register `parser` to receive blocks starting at lines matching
    /// `pattern`.
    ///
    /// Matching is tested in registration order so the catch-all must be
    /// registered last.
    pub fn register(
        &mut self,
        pattern: Regex,
        parser: Box<dyn SectionParser>,
    ) {
        defñ!("register {:?} -> {:?}", pattern.as_str(), parser.name());
        self.registry
            .push((pattern, parser));
    }

    /// Route one input line.
    ///
    /// A line matching a registered start pattern delivers the accumulated
    /// buffer to the previously active parser and switches to the matched
    /// one. Any other line is buffered for the active parser, or dropped
    /// with a diagnostic if no section has been recognized yet.
    pub fn consume_line(
        &mut self,
        line: &str,
        items: &mut ItemCollection,
    ) {
        let matched: Option<usize> = self
            .registry
            .iter()
            .position(|(pattern, _)| pattern.is_match(line));
        match matched {
            Some(index) => {
                defo!("boundary {:?} -> {:?}", line, self.registry[index].1.name());
                self.deliver(items);
                self.active = Some(index);
            }
            None => match self.active {
                Some(_) => self
                    .buffer
                    .push(line.to_string()),
                None => {
                    // text preceding the first recognized section
                    self.lines_dropped += 1;
                    de_wrn!("no active section parser, dropped line {:?}", line);
                }
            },
        }
    }

    /// Deliver the final buffer to whichever parser is active.
    ///
    /// Must be called once at end of input.
    pub fn flush(
        &mut self,
        items: &mut ItemCollection,
    ) {
        defn!();
        self.deliver(items);
        self.active = None;
        defx!("deliveries {}", self.deliveries);
    }

    /// Deliver the accumulated buffer to the active parser, if any, and
    /// clear it.
    fn deliver(
        &mut self,
        items: &mut ItemCollection,
    ) {
        let index: usize = match self.active {
            Some(index) => index,
            None => {
                return;
            }
        };
        let parser: &mut Box<dyn SectionParser> = &mut self.registry[index].1;
        defo!("deliver {} lines to {:?}", self.buffer.len(), parser.name());
        parser.parse_block(&self.buffer, items);
        self.deliveries += 1;
        self.buffer.clear();
    }
}
