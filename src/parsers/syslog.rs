// src/parsers/syslog.rs

//! Implement [`SystemLogParser`] for the `SYSTEM LOG` bugreport section,
//! a block of raw logcat lines in `threadtime` or `time` format.
//!
//! Each successfully parsed line is routed by (level, tag) to the correct
//! correlator:
//!
//! - level `I`, tag `DEBUG` → [`NativeCrashCorrelator`]
//! - level `E`, tag `AndroidRuntime` → [`JavaCrashCorrelator`]
//! - tag `ActivityManager` (any level) → [`AnrCorrelator`]
//! - anything else → dropped, not an error
//!
//! At block end all three correlators are committed in fixed order (java,
//! native, anr), so every still-open record surfaces as an item exactly
//! once per block.

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx};

use crate::data::item::{ItemCollection, ItemType};
use crate::data::logcat::{parse_logcat_line, LogLevel, LogcatLine};
use crate::de_wrn;
use crate::parsers::anr::AnrCorrelator;
use crate::parsers::javacrash::JavaCrashCorrelator;
use crate::parsers::nativecrash::NativeCrashCorrelator;
use crate::parsers::router::SectionParser;
use crate::parsers::Correlator;

/// tag of the `debuggerd` native crash reporter
const TAG_NATIVE: &str = "DEBUG";
/// tag of the Java runtime crash reporter
const TAG_JAVA: &str = "AndroidRuntime";
/// tag of the ANR reporter
const TAG_ANR: &str = "ActivityManager";

/// Parser for one block of raw device-log lines; classifies each line by
/// tag and level and forwards it to the correct correlator.
#[derive(Debug, Default)]
pub struct SystemLogParser {
    java: JavaCrashCorrelator,
    native: NativeCrashCorrelator,
    anr: AnrCorrelator,
}

impl SystemLogParser {
    pub fn new() -> SystemLogParser {
        SystemLogParser::default()
    }

    /// Route one parsed logcat line to the owning correlator, if any.
    fn route(
        &mut self,
        line: LogcatLine,
        items: &mut ItemCollection,
    ) {
        if line.level == LogLevel::Info && line.tag == TAG_NATIVE {
            self.native
                .consume(line.pid, line.tid, &line.message, items);
        } else if line.level == LogLevel::Error && line.tag == TAG_JAVA {
            self.java
                .consume(line.pid, line.tid, &line.message, items);
        } else if line.tag == TAG_ANR {
            self.anr
                .consume(line.pid, line.tid, &line.message, items);
        }
        // any other (level, tag) is of no interest here
    }
}

impl SectionParser for SystemLogParser {
    fn name(&self) -> &'static str {
        "SYSTEM LOG"
    }

    fn parse_block(
        &mut self,
        lines: &[String],
        items: &mut ItemCollection,
    ) {
        defn!("{} lines", lines.len());
        for line in lines.iter() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_logcat_line(line) {
                Some(logcat_line) => self.route(logcat_line, items),
                None => {
                    de_wrn!("{}: unparseable logcat line {:?}", self.name(), line);
                }
            }
        }
        // fixed commit order: java, native, anr
        self.java.commit(items);
        self.native.commit(items);
        self.anr.commit(items);
        defx!(
            "committed; {} JAVA CRASH, {} NATIVE CRASH, {} ANR so far",
            items.count_of_type(ItemType::JavaCrash),
            items.count_of_type(ItemType::NativeCrash),
            items.count_of_type(ItemType::Anr)
        );
    }
}
