// src/parsers/nativecrash.rs

//! Implement [`NativeCrashCorrelator`] for native crashes reported by
//! `debuggerd` under the `DEBUG` tag. e.g.
//!
//! ```lang-text
//! *** *** *** *** *** *** *** *** *** *** *** *** *** *** ***
//! Build fingerprint: 'google/passion/passion:2.3.3/GRI40/102588:user/release-keys'
//! pid: 4135, tid: 4140  >>> com.example.app <<<
//! signal 11 (SIGSEGV), code 1 (SEGV_MAPERR), fault addr 00000000
//!  r0 00000000  r1 00000001  r2 ad12d1e8  r3 7373d72d
//! ```
//!
//! Records are demultiplexed per packed (pid, tid) [`EventKey`]. A record
//! opens only on the fifteen-`***`-group banner line; lines for a key with
//! no banner are discarded with a warning, since a native crash record
//! without its banner is not trustworthy.
//!
//! [`EventKey`]: crate::common::EventKey

use ::indexmap::IndexMap;
use ::lazy_static::lazy_static;
use ::regex::Regex;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

use crate::common::{event_key, EventKey, Pid, Tid};
use crate::data::item::{GenericMap, Item, ItemCollection, ItemType, MapValue};
use crate::de_wrn;
use crate::parsers::Correlator;

lazy_static! {
    /// the fifteen-asterisk-group banner opening a native crash
    static ref NATIVE_BANNER_REGEX: Regex = {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"^(?:\*\*\* ){14}\*\*\*.*$").unwrap()
    };
    /// `Build fingerprint: '...'`
    static ref NATIVE_FINGERPRINT_REGEX: Regex = {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"^Build fingerprint: '(.*)'").unwrap()
    };
    /// `pid: N, tid: M  >>> name <<<`
    static ref NATIVE_APP_REGEX: Regex = {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"^pid: \d+, tid: \d+.*>>> (\S+) <<<").unwrap()
    };
}

/// One in-flight native crash record.
#[derive(Debug, Default)]
struct NativeCrashRecord {
    fingerprint: Option<String>,
    app: Option<String>,
    /// every raw line attributed to this key, in arrival order
    stack: Vec<String>,
}

impl NativeCrashRecord {
    fn into_item(self) -> Item {
        let mut map = GenericMap::new();
        if let Some(fingerprint) = self.fingerprint {
            map.insert("fingerprint".to_string(), MapValue::Str(fingerprint));
        }
        if let Some(app) = self.app {
            map.insert("app".to_string(), MapValue::Str(app));
        }
        map.insert(
            "stack".to_string(),
            MapValue::Str(self.stack.join("\n")),
        );
        Item::new(ItemType::NativeCrash, map)
    }
}

/// Keyed stateful correlator for native crashes.
///
/// Tracks multiple keys concurrently; `commit` flushes one record per
/// tracked key in first-seen-key order, then clears all state.
#[derive(Debug, Default)]
pub struct NativeCrashCorrelator {
    /// in-flight records; `IndexMap` preserves first-seen-key order for
    /// the commit pass
    records: IndexMap<EventKey, NativeCrashRecord>,
}

impl NativeCrashCorrelator {
    pub fn new() -> NativeCrashCorrelator {
        NativeCrashCorrelator::default()
    }
}

impl Correlator for NativeCrashCorrelator {
    fn consume(
        &mut self,
        pid: Pid,
        tid: Tid,
        message: &str,
        _items: &mut ItemCollection,
    ) {
        let key: EventKey = event_key(pid, tid);
        if NATIVE_BANNER_REGEX.is_match(message) {
            defo!("banner for key 0x{:08x}", key);
            let record: &mut NativeCrashRecord = self
                .records
                .entry(key)
                .or_default();
            record
                .stack
                .push(message.to_string());
            return;
        }
        let record: &mut NativeCrashRecord = match self.records.get_mut(&key) {
            Some(record) => record,
            None => {
                de_wrn!(
                    "native crash line for key 0x{:08x} with no banner, discarded: {:?}",
                    key,
                    message
                );
                return;
            }
        };
        if record.fingerprint.is_none() {
            if let Some(captures) = NATIVE_FINGERPRINT_REGEX.captures(message) {
                record.fingerprint = Some(captures[1].to_string());
            }
        }
        if record.app.is_none() {
            if let Some(captures) = NATIVE_APP_REGEX.captures(message) {
                record.app = Some(captures[1].to_string());
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
        defñ!("commit {} native crash records", self.records.len());
        for (_key, record) in self.records.drain(..) {
            items.commit(record.into_item());
        }
    }
}
