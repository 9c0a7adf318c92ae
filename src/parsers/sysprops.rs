// src/parsers/sysprops.rs

//! Implement [`SystemPropsParser`] for the `SYSTEM PROPERTIES` bugreport
//! section. e.g.
//!
//! ```lang-text
//! [dalvik.vm.dexopt-flags]: [m=y]
//! [dalvik.vm.heapgrowthlimit]: [48m]
//! [dalvik.vm.heapsize]: [256m]
//! ```

use ::lazy_static::lazy_static;
use ::regex::Regex;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx};

use crate::data::item::{GenericMap, Item, ItemCollection, ItemType, MapValue};
use crate::de_wrn;
use crate::parsers::router::SectionParser;

lazy_static! {
    /// one property line, `[<key>]: [<value>]`; the value may be empty
    static ref SYSPROP_LINE_REGEX: Regex = {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"^\[(.*)\]: \[(.*)\]$").unwrap()
    };
}

/// Stateless-per-call parser converting one `SYSTEM PROPERTIES` block into
/// one `"SYSTEM PROPERTIES"` item mapping key → value, both kept as
/// strings.
#[derive(Debug, Default)]
pub struct SystemPropsParser {}

impl SystemPropsParser {
    pub fn new() -> SystemPropsParser {
        SystemPropsParser {}
    }
}

impl SectionParser for SystemPropsParser {
    fn name(&self) -> &'static str {
        ItemType::SystemProperties.as_str()
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
            match SYSPROP_LINE_REGEX.captures(line) {
                Some(captures) => {
                    map.insert(
                        captures[1].to_string(),
                        MapValue::Str(captures[2].to_string()),
                    );
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
        items.commit(Item::new(ItemType::SystemProperties, map));
    }
}
