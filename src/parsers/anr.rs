// src/parsers/anr.rs

//! Implement [`AnrCorrelator`] for "Application Not Responding" hang
//! events reported by the platform `ActivityManager`. e.g.
//!
//! ```lang-text
//! ANR in com.android.browser (com.android.browser/.BrowserActivity)
//! Reason: keyDispatchingTimedOut
//! Load: 3.4 / 3.5 / 2.9
//! CPU usage from 8443ms to 2143ms ago:
//!   100% TOTAL: 21% user + 11% kernel + 6.9% iowait
//! ```
//!
//! Unlike the crash correlators, `ActivityManager` output is effectively
//! serialized, so at most one record is open at a time and no per-key
//! demultiplexing is done. A line arriving from a different (pid, tid)
//! while a record is open is a correlation break: the open record is
//! committed and the stray line dropped.

use ::lazy_static::lazy_static;
use ::regex::Regex;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

use crate::common::{Pid, Tid};
use crate::data::item::{GenericMap, Item, ItemCollection, ItemType, MapValue};
use crate::de_wrn;
use crate::parsers::Correlator;

lazy_static! {
    /// the line opening an ANR event; captures the unresponsive app
    static ref ANR_START_REGEX: Regex = {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"^ANR (?:\(application not responding\) )?in (?:process: )?(\S+)").unwrap()
    };
    /// the CPU usage summary line terminating an ANR event
    static ref ANR_END_REGEX: Regex = {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"TOTAL: \d+(?:\.\d+)?% user \+ \d+(?:\.\d+)?% kernel").unwrap()
    };
}

/// One in-flight ANR record.
#[derive(Debug)]
struct AnrRecord {
    /// the unresponsive application, from the start line
    app: String,
    /// identity captured from the start line; later lines must match
    pid: Pid,
    tid: Tid,
    /// every raw line attributed to this event, in arrival order
    stack: Vec<String>,
}

impl AnrRecord {
    fn into_item(self) -> Item {
        let mut map = GenericMap::new();
        map.insert("app".to_string(), MapValue::Str(self.app));
        map.insert(
            "stack".to_string(),
            MapValue::Str(self.stack.join("\n")),
        );
        Item::new(ItemType::Anr, map)
    }
}

/// Single-record stateful correlator for ANR events.
#[derive(Debug, Default)]
pub struct AnrCorrelator {
    current: Option<AnrRecord>,
}

impl AnrCorrelator {
    pub fn new() -> AnrCorrelator {
        AnrCorrelator::default()
    }
}

impl Correlator for AnrCorrelator {
    fn consume(
        &mut self,
        pid: Pid,
        tid: Tid,
        message: &str,
        items: &mut ItemCollection,
    ) {
        if let Some(captures) = ANR_START_REGEX.captures(message) {
            // a new ANR closes any existing record
            self.commit(items);
            defo!("open ANR record for {:?} ({}, {})", &captures[1], pid, tid);
            self.current = Some(AnrRecord {
                app: captures[1].to_string(),
                pid,
                tid,
                stack: vec![message.to_string()],
            });
            return;
        }
        let record: &mut AnrRecord = match self.current {
            Some(ref mut record) => record,
            None => {
                // not inside an ANR event
                return;
            }
        };
        if record.pid != pid || record.tid != tid {
            // correlation break; accepted trade-off for ActivityManager's
            // typically-serial output
            de_wrn!(
                "ANR correlation break: open ({}, {}), line from ({}, {})",
                record.pid,
                record.tid,
                pid,
                tid
            );
            self.commit(items);
            return;
        }
        record
            .stack
            .push(message.to_string());
        if ANR_END_REGEX.is_match(message) {
            defo!("ANR end pattern ({}, {})", pid, tid);
            self.commit(items);
        }
    }

    fn commit(
        &mut self,
        items: &mut ItemCollection,
    ) {
        if let Some(record) = self.current.take() {
            defñ!("commit ANR record for {:?}", record.app);
            items.commit(record.into_item());
        }
    }
}
