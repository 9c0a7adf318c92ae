// src/parsers/javacrash.rs

//! Implement [`JavaCrashCorrelator`] for Java crashes reported by
//! `AndroidRuntime`. e.g.
//!
//! ```lang-text
//! FATAL EXCEPTION: main
//! java.lang.NullPointerException: widget is gone
//!     at com.example.app.Widget.poke(Widget.java:42)
//!     at android.os.Handler.handleCallback(Handler.java:587)
//! ```
//!
//! Crash output from unrelated processes may interleave, so records are
//! demultiplexed per packed (pid, tid) [`EventKey`]. The first line per
//! key with the shape `Exception.Class: reason` seeds the structured
//! fields; every line, matched or not, is appended to that key's stack.
//!
//! [`EventKey`]: crate::common::EventKey

use ::indexmap::IndexMap;
use ::lazy_static::lazy_static;
use ::regex::Regex;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

use crate::common::{event_key, EventKey, Pid, Tid};
use crate::data::item::{GenericMap, Item, ItemCollection, ItemType, MapValue};
use crate::parsers::Correlator;

lazy_static! {
    /// an exception line: no embedded whitespace before the colon,
    /// optional reason after it
    static ref JAVA_EXCEPTION_REGEX: Regex = {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"^([^\s:]+)(?:: (.*))?$").unwrap()
    };
}

/// One in-flight Java crash record.
#[derive(Debug, Default)]
struct JavaCrashRecord {
    exception: Option<String>,
    reason: Option<String>,
    /// every raw line attributed to this key, in arrival order
    stack: Vec<String>,
}

impl JavaCrashRecord {
    fn into_item(self) -> Item {
        let mut map = GenericMap::new();
        if let Some(exception) = self.exception {
            map.insert("exception".to_string(), MapValue::Str(exception));
        }
        if let Some(reason) = self.reason {
            map.insert("reason".to_string(), MapValue::Str(reason));
        }
        map.insert(
            "stack".to_string(),
            MapValue::Str(self.stack.join("\n")),
        );
        Item::new(ItemType::JavaCrash, map)
    }
}

/// Keyed stateful correlator for Java crashes.
///
/// Tracks multiple keys concurrently; `commit` flushes one record per
/// tracked key in first-seen-key order, then clears all state.
#[derive(Debug, Default)]
pub struct JavaCrashCorrelator {
    /// in-flight records; `IndexMap` preserves first-seen-key order for
    /// the commit pass
    records: IndexMap<EventKey, JavaCrashRecord>,
}

impl JavaCrashCorrelator {
    pub fn new() -> JavaCrashCorrelator {
        JavaCrashCorrelator::default()
    }
}

impl Correlator for JavaCrashCorrelator {
    fn consume(
        &mut self,
        pid: Pid,
        tid: Tid,
        message: &str,
        _items: &mut ItemCollection,
    ) {
        let key: EventKey = event_key(pid, tid);
        let record: &mut JavaCrashRecord = self
            .records
            .entry(key)
            .or_default();
        if record.exception.is_none() {
            if let Some(captures) = JAVA_EXCEPTION_REGEX.captures(message) {
                defo!("seed exception for key 0x{:08x}: {:?}", key, &captures[1]);
                record.exception = Some(captures[1].to_string());
                record.reason = captures
                    .get(2)
                    .map(|reason| reason.as_str().to_string());
            }
        }
        record
            .stack
            .push(message.to_string());
    }

    fn commit(
        &mut self,
        items: &mut ItemCollection,
    ) {
        defñ!("commit {} java crash records", self.records.len());
        for (_key, record) in self.records.drain(..) {
            items.commit(record.into_item());
        }
    }
}
