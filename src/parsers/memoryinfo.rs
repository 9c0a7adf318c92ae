// src/parsers/memoryinfo.rs

//! Implement [`MemInfoParser`] for the `MEMORY INFO` bugreport section,
//! a `/proc/meminfo`-style table. e.g.
//!
//! ```lang-text
//! MemTotal:         353332 kB
//! MemFree:           65420 kB
//! Buffers:           20800 kB
//! ```

use ::lazy_static::lazy_static;
use ::regex::Regex;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx};

use crate::data::item::{GenericMap, Item, ItemCollection, ItemType, MapValue};
use crate::de_wrn;
use crate::parsers::router::SectionParser;

lazy_static! {
    /// one table line, `<label>:<spaces><integer> kB`
    static ref MEMINFO_LINE_REGEX: Regex = {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"^([^\s:]+):\s+(\d+) kB$").unwrap()
    };
}

/// Stateless-per-call parser converting one `MEMORY INFO` block into one
/// `"MEMORY INFO"` item mapping label → integer kilobytes.
#[derive(Debug, Default)]
pub struct MemInfoParser {}

impl MemInfoParser {
    pub fn new() -> MemInfoParser {
        MemInfoParser {}
    }
}

impl SectionParser for MemInfoParser {
    fn name(&self) -> &'static str {
        ItemType::MemoryInfo.as_str()
    }

    fn parse_block(
        &mut self,
        lines: &[String],
        items: &mut ItemCollection,
    ) {
        defn!("{} lines", lines.len());
        let mut map = GenericMap::new();
        for line in lines.iter() {
            if line.trim().is_empty() {
                continue;
            }
            match MEMINFO_LINE_REGEX.captures(line) {
                Some(captures) => {
                    let label: &str = &captures[1];
                    match captures[2].parse::<i64>() {
                        Ok(kilobytes) => {
                            map.insert(label.to_string(), MapValue::Int(kilobytes));
                        }
                        Err(err) => {
                            de_wrn!("{}: bad amount in line {:?}: {}", self.name(), line, err);
                        }
                    }
                }
                None => {
                    de_wrn!("{}: unparseable line {:?}", self.name(), line);
                }
            }
        }
        if map.is_empty() {
            defx!("no entries, no item");
            return;
        }
        defx!("commit item with {} entries", map.len());
        items.commit(Item::new(ItemType::MemoryInfo, map));
    }
}
