// src/tests/logcat_tests.rs

//! tests for `data/logcat.rs`

#![allow(non_snake_case)]

use crate::data::logcat::{
    parse_logcat_line,
    LogLevel,
    LogcatLine,
};

use ::test_case::test_case;

#[test_case('V', Some(LogLevel::Verbose))]
#[test_case('D', Some(LogLevel::Debug))]
#[test_case('I', Some(LogLevel::Info))]
#[test_case('W', Some(LogLevel::Warn))]
#[test_case('E', Some(LogLevel::Error))]
#[test_case('A', Some(LogLevel::Assert))]
#[test_case('F', Some(LogLevel::Assert))]
#[test_case('X', None)]
fn test_LogLevel_from_char(
    c: char,
    expect: Option<LogLevel>,
) {
    assert_eq!(LogLevel::from_char(c), expect);
}

#[test]
fn test_parse_logcat_line_threadtime() {
    let line = "04-25 17:17:08.445   312   366 E ActivityManager: ANR in com.android.browser";
    let parsed: LogcatLine = parse_logcat_line(line).unwrap();
    assert_eq!(parsed.timestamp_raw, "04-25 17:17:08.445");
    assert_eq!(parsed.pid, 312);
    assert_eq!(parsed.tid, 366);
    assert_eq!(parsed.level, LogLevel::Error);
    assert_eq!(parsed.tag, "ActivityManager");
    assert_eq!(parsed.message, "ANR in com.android.browser");
}

#[test]
fn test_parse_logcat_line_threadtime_padded_tag() {
    // `DEBUG` is blank-padded by logcat; padding is not part of the tag
    let line = "04-25 18:40:21.369    85    85 I DEBUG   : signal 11 (SIGSEGV)";
    let parsed: LogcatLine = parse_logcat_line(line).unwrap();
    assert_eq!(parsed.tag, "DEBUG");
    assert_eq!(parsed.level, LogLevel::Info);
    assert_eq!(parsed.message, "signal 11 (SIGSEGV)");
}

#[test]
fn test_parse_logcat_line_time() {
    let line = "04-25 09:55:47.799  E/AndroidRuntime( 3064): java.lang.Exception: hello world";
    let parsed: LogcatLine = parse_logcat_line(line).unwrap();
    assert_eq!(parsed.timestamp_raw, "04-25 09:55:47.799");
    assert_eq!(parsed.pid, 3064);
    // `time` format has no tid; defaults to pid
    assert_eq!(parsed.tid, 3064);
    assert_eq!(parsed.level, LogLevel::Error);
    assert_eq!(parsed.tag, "AndroidRuntime");
    assert_eq!(parsed.message, "java.lang.Exception: hello world");
}

#[test]
fn test_parse_logcat_line_time_padded_tag() {
    let line = "04-25 18:40:21.369  I/DEBUG   (   85): Build fingerprint: 'x'";
    let parsed: LogcatLine = parse_logcat_line(line).unwrap();
    assert_eq!(parsed.tag, "DEBUG");
    assert_eq!(parsed.pid, 85);
    assert_eq!(parsed.message, "Build fingerprint: 'x'");
}

#[test_case(""; "empty line")]
#[test_case("plain words, no log prefix"; "freeform text")]
#[test_case("04-25 17:17:08 312 366 E Tag: missing milliseconds"; "bad timestamp")]
#[test_case("04-25 17:17:08.445 312 E Tag: missing tid is not threadtime"; "not quite threadtime")]
fn test_parse_logcat_line_rejects(line: &str) {
    assert!(parse_logcat_line(line).is_none(), "should not parse {:?}", line);
}

#[test]
fn test_LogcatLine_datetime() {
    let line = "04-25 17:17:08.445   312   366 E ActivityManager: x";
    let parsed: LogcatLine = parse_logcat_line(line).unwrap();
    let datetime = parsed.datetime(2011).unwrap();
    assert_eq!(
        datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
        "2011-04-25 17:17:08.445"
    );
}

#[test]
fn test_LogcatLine_datetime_impossible_date() {
    let line = "02-30 01:02:03.004   312   366 E ActivityManager: x";
    let parsed: LogcatLine = parse_logcat_line(line).unwrap();
    assert!(parsed.datetime(2011).is_none());
}
