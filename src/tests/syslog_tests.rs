// src/tests/syslog_tests.rs

//! tests for `parsers/syslog.rs`

#![allow(non_snake_case)]

use crate::data::item::{ItemCollection, ItemType, MapValue};
use crate::parsers::router::SectionParser;
use crate::parsers::syslog::SystemLogParser;
use crate::tests::common::{
    block_lines,
    ANR_LOGCAT,
    JAVA_CRASH_LOGCAT,
    NATIVE_CRASH_LOGCAT,
};

#[test]
fn test_SystemLogParser_anr_block() {
    let mut parser = SystemLogParser::new();
    let mut items = ItemCollection::new();
    parser.parse_block(&block_lines(ANR_LOGCAT), &mut items);
    assert_eq!(items.count_of_type(ItemType::Anr), 1);
    let item = items.first_of_type(ItemType::Anr).unwrap();
    assert_eq!(
        item.get("app").and_then(MapValue::as_str),
        Some("com.android.browser")
    );
    let stack = item
        .get("stack")
        .and_then(MapValue::as_str)
        .unwrap();
    // the stack holds the logcat messages, not the raw prefixed lines
    assert!(stack.starts_with("ANR in com.android.browser"));
    assert!(stack.contains("Reason: keyDispatchingTimedOut"));
}

#[test]
fn test_SystemLogParser_java_crash_block() {
    let mut parser = SystemLogParser::new();
    let mut items = ItemCollection::new();
    parser.parse_block(&block_lines(JAVA_CRASH_LOGCAT), &mut items);
    assert_eq!(items.count_of_type(ItemType::JavaCrash), 1);
    let item = items.first_of_type(ItemType::JavaCrash).unwrap();
    assert_eq!(
        item.get("exception").and_then(MapValue::as_str),
        Some("java.lang.Exception")
    );
    assert_eq!(
        item.get("reason").and_then(MapValue::as_str),
        Some("hello world")
    );
}

#[test]
fn test_SystemLogParser_native_crash_block() {
    let mut parser = SystemLogParser::new();
    let mut items = ItemCollection::new();
    parser.parse_block(&block_lines(NATIVE_CRASH_LOGCAT), &mut items);
    assert_eq!(items.count_of_type(ItemType::NativeCrash), 1);
    let item = items.first_of_type(ItemType::NativeCrash).unwrap();
    assert_eq!(
        item.get("app").and_then(MapValue::as_str),
        Some("com.android.browser")
    );
    assert_eq!(
        item.get("fingerprint").and_then(MapValue::as_str),
        Some("google/passion/passion:2.3.3/GRI40/102588:user/release-keys")
    );
}

/// lines with an unregistered (level, tag) are dropped without complaint
#[test]
fn test_SystemLogParser_uninteresting_lines_dropped() {
    let block = "\
04-25 17:17:08.445   312   366 I WindowManager: Setting rotation to 1
04-25 17:17:08.445   312   366 W PowerManagerService: Timer 0x7->0x3
04-25 17:17:08.445   312   366 E DEBUG: error level DEBUG is not a native crash
04-25 17:17:08.445   312   366 I AndroidRuntime: info level AndroidRuntime is not a java crash
";
    let mut parser = SystemLogParser::new();
    let mut items = ItemCollection::new();
    parser.parse_block(&block_lines(block), &mut items);
    assert!(items.is_empty());
}

/// a line matching neither logcat format is a recoverable parse failure
#[test]
fn test_SystemLogParser_unparseable_line_skipped() {
    let block = "\
--------- beginning of /dev/log/main
04-25 17:17:08.445   312   366 E ActivityManager: ANR in com.android.browser
not a logcat line at all
04-25 17:17:08.445   312   366 E ActivityManager: Reason: keyDispatchingTimedOut
";
    let mut parser = SystemLogParser::new();
    let mut items = ItemCollection::new();
    parser.parse_block(&block_lines(block), &mut items);
    assert_eq!(items.count_of_type(ItemType::Anr), 1);
    let item = items.first_of_type(ItemType::Anr).unwrap();
    let stack = item
        .get("stack")
        .and_then(MapValue::as_str)
        .unwrap();
    assert!(stack.contains("Reason: keyDispatchingTimedOut"));
    assert!(!stack.contains("not a logcat line"));
}

/// at block end the correlators are committed in fixed order: java,
/// native, anr
#[test]
fn test_SystemLogParser_commit_order() {
    // all three events still open at block end: no ANR end pattern, no
    // crash terminator (crash correlators only flush on commit)
    let block = "\
04-25 17:17:08.445   312   366 E ActivityManager: ANR in com.app.hung
04-25 18:40:21.369    85    85 I DEBUG   : *** *** *** *** *** *** *** *** *** *** *** *** *** *** *** ***
04-25 09:55:47.799  E/AndroidRuntime( 3064): java.lang.Exception: late
";
    let mut parser = SystemLogParser::new();
    let mut items = ItemCollection::new();
    parser.parse_block(&block_lines(block), &mut items);
    let types: Vec<ItemType> = items
        .iter()
        .map(|item| item.item_type())
        .collect();
    assert_eq!(
        types,
        vec![ItemType::JavaCrash, ItemType::NativeCrash, ItemType::Anr]
    );
}

/// parsing two blocks with one parser instance must not leak state
/// between blocks
#[test]
fn test_SystemLogParser_no_state_across_blocks() {
    let mut parser = SystemLogParser::new();
    let mut items = ItemCollection::new();
    parser.parse_block(&block_lines(ANR_LOGCAT), &mut items);
    parser.parse_block(&block_lines(JAVA_CRASH_LOGCAT), &mut items);
    assert_eq!(items.count_of_type(ItemType::Anr), 1);
    assert_eq!(items.count_of_type(ItemType::JavaCrash), 1);
    assert_eq!(items.len(), 2);
}
