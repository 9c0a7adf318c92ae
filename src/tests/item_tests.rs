// src/tests/item_tests.rs

//! tests for `data/item.rs`

#![allow(non_snake_case)]

use crate::common::event_key;
use crate::data::item::{
    GenericMap,
    Item,
    ItemCollection,
    ItemType,
    MapValue,
};

use ::test_case::test_case;

fn item_one_entry(
    item_type: ItemType,
    key: &str,
    value: MapValue,
) -> Item {
    let mut map = GenericMap::new();
    map.insert(key.to_string(), value);
    Item::new(item_type, map)
}

#[test_case(ItemType::MemoryInfo, "MEMORY INFO")]
#[test_case(ItemType::ProcRank, "PROCRANK")]
#[test_case(ItemType::SystemProperties, "SYSTEM PROPERTIES")]
#[test_case(ItemType::Anr, "ANR")]
#[test_case(ItemType::JavaCrash, "JAVA CRASH")]
#[test_case(ItemType::NativeCrash, "NATIVE CRASH")]
fn test_ItemType_as_str(
    item_type: ItemType,
    expect: &str,
) {
    assert_eq!(item_type.as_str(), expect);
    assert_eq!(item_type.to_string(), expect);
}

#[test]
fn test_Item_get() {
    let item = item_one_entry(ItemType::MemoryInfo, "MemTotal", MapValue::Int(353332));
    assert_eq!(item.item_type(), ItemType::MemoryInfo);
    assert_eq!(item.len(), 1);
    assert!(!item.is_empty());
    assert_eq!(item.get("MemTotal").and_then(MapValue::as_int), Some(353332));
    assert_eq!(item.get("MemFree"), None);
}

#[test]
fn test_GenericMap_preserves_insertion_order() {
    let mut map = GenericMap::new();
    map.insert("zulu".to_string(), MapValue::Int(1));
    map.insert("alfa".to_string(), MapValue::Int(2));
    map.insert("mike".to_string(), MapValue::Int(3));
    let keys: Vec<&str> = map
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["zulu", "alfa", "mike"]);
}

#[test]
fn test_ItemCollection_commit_order_and_index() {
    let mut items = ItemCollection::new();
    assert!(items.is_empty());
    items.commit(item_one_entry(ItemType::Anr, "app", MapValue::from("app.one")));
    items.commit(item_one_entry(
        ItemType::MemoryInfo,
        "MemTotal",
        MapValue::Int(1),
    ));
    items.commit(item_one_entry(ItemType::Anr, "app", MapValue::from("app.two")));
    assert_eq!(items.len(), 3);
    assert_eq!(items.count_of_type(ItemType::Anr), 2);
    assert_eq!(items.count_of_type(ItemType::MemoryInfo), 1);
    assert_eq!(items.count_of_type(ItemType::JavaCrash), 0);

    let anrs = items.items_of_type(ItemType::Anr);
    assert_eq!(anrs.len(), 2);
    assert_eq!(
        anrs[0].get("app").and_then(MapValue::as_str),
        Some("app.one")
    );
    assert_eq!(
        anrs[1].get("app").and_then(MapValue::as_str),
        Some("app.two")
    );

    let first = items
        .first_of_type(ItemType::Anr)
        .unwrap();
    assert_eq!(first.get("app").and_then(MapValue::as_str), Some("app.one"));
    assert!(items.first_of_type(ItemType::NativeCrash).is_none());

    // overall ordering reflects commit order
    let types: Vec<ItemType> = items
        .iter()
        .map(|item| item.item_type())
        .collect();
    assert_eq!(
        types,
        vec![ItemType::Anr, ItemType::MemoryInfo, ItemType::Anr]
    );
}

#[test]
fn test_MapValue_accessors() {
    assert_eq!(MapValue::from("x").as_str(), Some("x"));
    assert_eq!(MapValue::from("x").as_int(), None);
    assert_eq!(MapValue::Int(7).as_int(), Some(7));
    assert_eq!(MapValue::Int(7).as_str(), None);
    let map = GenericMap::new();
    assert!(MapValue::Map(map).as_map().is_some());
}

#[test_case(100, 1, 0x0064_0001)]
#[test_case(200, 2, 0x00C8_0002)]
#[test_case(0, 0, 0)]
#[test_case(65535, 65535, 0xFFFF_FFFF)]
fn test_event_key_packing(
    pid: u32,
    tid: u32,
    expect: u32,
) {
    assert_eq!(event_key(pid, tid), expect);
}
