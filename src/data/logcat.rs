// src/data/logcat.rs

//! Implement [`LogcatLine`], one parsed line of device log output.
//!
//! Two logcat line formats are recognized, both requiring exact field order:
//!
//! - `threadtime`, e.g.
//!   ```lang-text
//!   04-25 17:17:08.445   312   366 E ActivityManager: ANR in com.android.browser
//!   ```
//! - `time`, e.g.
//!   ```lang-text
//!   04-25 18:33:27.273 I/dun_service( 1518): Dun service detect interface down
//!   ```
//!
//! A line matching neither format is not a `LogcatLine`; callers treat that
//! as a recoverable per-line parse failure.

use std::fmt;

use ::chrono::NaiveDateTime;
use ::lazy_static::lazy_static;
use ::regex::Regex;

use crate::common::{Pid, Tid, Year};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// logcat line patterns
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Regular expression pattern, as a `str`.
pub type RegexPattern = str;

/// [`RegexPattern`] for one `threadtime` format line,
/// `MM-DD HH:MM:SS.mmm  PID  TID LEVEL TAG: MESSAGE`
const LOGCAT_THREADTIME_PATTERN: &RegexPattern = concat!(
    r"^(?P<ts>\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{3})",
    r"\s+(?P<pid>\d+)\s+(?P<tid>\d+)\s+(?P<level>[VDIWEAF])\s+(?P<tag>.+?)\s*: (?P<message>.*)$",
);

/// [`RegexPattern`] for one `time` format line,
/// `MM-DD HH:MM:SS.mmm LEVEL/TAG( PID): MESSAGE`
const LOGCAT_TIME_PATTERN: &RegexPattern = concat!(
    r"^(?P<ts>\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{3})",
    r"\s+(?P<level>[VDIWEAF])/(?P<tag>.+?)\s*\(\s*(?P<pid>\d+)\): (?P<message>.*)$",
);

/// `chrono` strftime format matching the logcat timestamp with a year
/// prefixed
const TIMESTAMP_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

lazy_static! {
    static ref LOGCAT_THREADTIME_REGEX: Regex = {
        #[allow(clippy::unwrap_used)]
        Regex::new(LOGCAT_THREADTIME_PATTERN).unwrap()
    };
    static ref LOGCAT_TIME_REGEX: Regex = {
        #[allow(clippy::unwrap_used)]
        Regex::new(LOGCAT_TIME_PATTERN).unwrap()
    };
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LogLevel
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One logcat priority level letter.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum LogLevel {
    Verbose,
    Debug,
    Info,
    Warn,
    Error,
    /// letter `A` (newer logcat) or `F` (older logcat "fatal")
    Assert,
}

impl LogLevel {
    /// The level for logcat letter `c`, or `None` for an unknown letter.
    pub const fn from_char(c: char) -> Option<LogLevel> {
        match c {
            'V' => Some(LogLevel::Verbose),
            'D' => Some(LogLevel::Debug),
            'I' => Some(LogLevel::Info),
            'W' => Some(LogLevel::Warn),
            'E' => Some(LogLevel::Error),
            'A' | 'F' => Some(LogLevel::Assert),
            _ => None,
        }
    }

    pub const fn as_char(&self) -> char {
        match self {
            LogLevel::Verbose => 'V',
            LogLevel::Debug => 'D',
            LogLevel::Info => 'I',
            LogLevel::Warn => 'W',
            LogLevel::Error => 'E',
            LogLevel::Assert => 'A',
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LogcatLine
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One successfully parsed logcat line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LogcatLine {
    /// the year-less `MM-DD HH:MM:SS.mmm` timestamp, verbatim
    pub timestamp_raw: String,
    pub pid: Pid,
    /// `time` format lines carry no tid; this defaults to [`Self::pid`] so
    /// event correlation keys stay well-defined
    pub tid: Tid,
    pub level: LogLevel,
    pub tag: String,
    pub message: String,
}

impl LogcatLine {
    /// Resolve the year-less timestamp against `year`.
    ///
    /// Logcat omits the year; the caller knows the device-time year of the
    /// test run and supplies it. Returns `None` for impossible dates
    /// (e.g. `02-30`).
    pub fn datetime(
        &self,
        year: Year,
    ) -> Option<NaiveDateTime> {
        let with_year: String = format!("{}-{}", year, self.timestamp_raw);
        NaiveDateTime::parse_from_str(&with_year, TIMESTAMP_DATETIME_FORMAT).ok()
    }
}

/// Parse one raw device-log line in either `threadtime` or `time` format.
///
/// Returns `None` for a line matching neither format. Never panics on
/// untrusted input; the patterns guarantee the numeric captures parse,
/// but absurdly long digit runs still fall back to `None`.
pub fn parse_logcat_line(line: &str) -> Option<LogcatLine> {
    if let Some(captures) = LOGCAT_THREADTIME_REGEX.captures(line) {
        let pid: Pid = captures
            .name("pid")?
            .as_str()
            .parse::<Pid>()
            .ok()?;
        let tid: Tid = captures
            .name("tid")?
            .as_str()
            .parse::<Tid>()
            .ok()?;
        let level: LogLevel = LogLevel::from_char(
            captures.name("level")?.as_str().chars().next()?,
        )?;
        return Some(LogcatLine {
            timestamp_raw: captures.name("ts")?.as_str().to_string(),
            pid,
            tid,
            level,
            tag: captures.name("tag")?.as_str().to_string(),
            message: captures.name("message")?.as_str().to_string(),
        });
    }
    if let Some(captures) = LOGCAT_TIME_REGEX.captures(line) {
        let pid: Pid = captures
            .name("pid")?
            .as_str()
            .parse::<Pid>()
            .ok()?;
        let level: LogLevel = LogLevel::from_char(
            captures.name("level")?.as_str().chars().next()?,
        )?;
        return Some(LogcatLine {
            timestamp_raw: captures.name("ts")?.as_str().to_string(),
            pid,
            // no tid in `time` format
            tid: pid,
            level,
            tag: captures.name("tag")?.as_str().to_string(),
            message: captures.name("message")?.as_str().to_string(),
        });
    }

    None
}
