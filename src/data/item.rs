// src/data/item.rs

//! Implement [`Item`], the atomic unit of parsed bugreport output, and
//! [`ItemCollection`], the append-only ordered sequence of `Item`s returned
//! by a parse.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use ::indexmap::IndexMap;

use crate::common::Count;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ItemType
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The fixed set of item kinds this library produces.
///
/// Each variant maps to the fixed type-tag string a downstream harness
/// queries by, e.g. `"MEMORY INFO"` or `"JAVA CRASH"`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ItemType {
    /// one `/proc/meminfo`-style table
    MemoryInfo,
    /// one `procrank` per-process memory table
    ProcRank,
    /// one `[key]: [value]` system property table
    SystemProperties,
    /// one "Application Not Responding" hang record
    Anr,
    /// one Java (`AndroidRuntime`) crash record
    JavaCrash,
    /// one native (`DEBUG`) crash record
    NativeCrash,
}

impl ItemType {
    /// The fixed type-tag string for this kind.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ItemType::MemoryInfo => "MEMORY INFO",
            ItemType::ProcRank => "PROCRANK",
            ItemType::SystemProperties => "SYSTEM PROPERTIES",
            ItemType::Anr => "ANR",
            ItemType::JavaCrash => "JAVA CRASH",
            ItemType::NativeCrash => "NATIVE CRASH",
        }
    }

    /// All produced kinds, in a stable reporting order.
    pub const ALL: [ItemType; 6] = [
        ItemType::MemoryInfo,
        ItemType::ProcRank,
        ItemType::SystemProperties,
        ItemType::Anr,
        ItemType::JavaCrash,
        ItemType::NativeCrash,
    ];
}

impl fmt::Display for ItemType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// MapValue and GenericMap
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Insertion-ordered mapping from string keys to [`MapValue`]s; the common
/// payload shape for every [`Item`].
///
/// Keys within one map are unique. Value types are homogeneous within a
/// given section kind (e.g. a `"MEMORY INFO"` item is all `Int`s).
pub type GenericMap = IndexMap<String, MapValue>;

/// One value within a [`GenericMap`].
#[derive(Clone, Debug, PartialEq)]
pub enum MapValue {
    /// a verbatim string, e.g. a system property value or a stack trace
    Str(String),
    /// an integer, e.g. a kilobyte amount
    Int(i64),
    /// a nested mapping, e.g. one procrank row
    Map(GenericMap),
}

impl MapValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MapValue::Str(val) => Some(val.as_str()),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            MapValue::Int(val) => Some(*val),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&GenericMap> {
        match self {
            MapValue::Map(val) => Some(val),
            _ => None,
        }
    }
}

impl From<&str> for MapValue {
    fn from(val: &str) -> MapValue {
        MapValue::Str(val.to_string())
    }
}

impl From<String> for MapValue {
    fn from(val: String) -> MapValue {
        MapValue::Str(val)
    }
}

impl From<i64> for MapValue {
    fn from(val: i64) -> MapValue {
        MapValue::Int(val)
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Item
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Thread-safe "atomic reference counting pointer" to an [`Item`].
///
/// `Item`s are immutable once committed so sharing them is safe.
pub type ItemP = Arc<Item>;

/// The atomic unit of parsed output: a type tag plus a key/value payload.
///
/// An `Item` is created by one block parser or one correlator and committed
/// to an [`ItemCollection`] exactly once. It is never mutated afterward.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    item_type: ItemType,
    payload: GenericMap,
}

impl Item {
    pub fn new(
        item_type: ItemType,
        payload: GenericMap,
    ) -> Item {
        Item {
            item_type,
            payload,
        }
    }

    pub const fn item_type(&self) -> ItemType {
        self.item_type
    }

    pub const fn payload(&self) -> &GenericMap {
        &self.payload
    }

    /// Shorthand payload lookup.
    pub fn get(
        &self,
        key: &str,
    ) -> Option<&MapValue> {
        self.payload.get(key)
    }

    /// Count of payload entries.
    pub fn len(self: &Item) -> usize {
        self.payload.len()
    }

    /// Clippy recommends `fn is_empty` since there is a `len()`.
    pub fn is_empty(self: &Item) -> bool {
        self.payload.is_empty()
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ItemCollection
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// An append-only ordered sequence of [`Item`]s plus a side index by
/// [`ItemType`] for retrieval.
///
/// Ordering reflects detection order in the input stream for block-parser
/// items. Correlator items are appended at commit time, so their relative
/// order reflects commit order, not first-line order.
#[derive(Debug, Default)]
pub struct ItemCollection {
    /// all committed items, in commit order
    items: Vec<ItemP>,
    /// indexes into `self.items`, per type, in commit order
    index: HashMap<ItemType, Vec<usize>>,
}

impl ItemCollection {
    pub fn new() -> ItemCollection {
        ItemCollection::default()
    }

    /// Append `item`; the item is immutable from here on.
    pub fn commit(
        &mut self,
        item: Item,
    ) {
        let at: usize = self.items.len();
        self.index
            .entry(item.item_type())
            .or_default()
            .push(at);
        self.items.push(ItemP::new(item));
    }

    /// All items of `item_type`, in commit order.
    pub fn items_of_type(
        &self,
        item_type: ItemType,
    ) -> Vec<ItemP> {
        match self.index.get(&item_type) {
            Some(ats) => ats
                .iter()
                .map(|at| self.items[*at].clone())
                .collect(),
            None => Vec::new(),
        }
    }

    /// The earliest-committed item of `item_type`, if any.
    pub fn first_of_type(
        &self,
        item_type: ItemType,
    ) -> Option<ItemP> {
        let at: &usize = self.index.get(&item_type)?.first()?;
        Some(self.items[*at].clone())
    }

    /// Count of items of `item_type`; e.g. the number of ANRs for
    /// failure-rate metrics.
    pub fn count_of_type(
        &self,
        item_type: ItemType,
    ) -> Count {
        match self.index.get(&item_type) {
            Some(ats) => ats.len() as Count,
            None => 0,
        }
    }

    pub fn len(self: &ItemCollection) -> usize {
        self.items.len()
    }

    pub fn is_empty(self: &ItemCollection) -> bool {
        self.items.is_empty()
    }

    /// Iterate all items in commit order.
    pub fn iter(&self) -> std::slice::Iter<ItemP> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a ItemCollection {
    type Item = &'a ItemP;
    type IntoIter = std::slice::Iter<'a, ItemP>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
