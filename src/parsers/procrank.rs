// src/parsers/procrank.rs

//! Implement [`ProcRankParser`] for the `PROCRANK` bugreport section, the
//! per-process memory table written by the `procrank` device tool. e.g.
//!
//! ```lang-text
//!   PID      Vss      Rss      Pss      Uss  cmdline
//!   178   87136K   81684K   52829K   50012K  system_server
//!   273   64528K   62688K   33542K   30988K  com.android.launcher
//! ```
//!
//! The header names the columns; the command-line column is always the
//! final field. Numeric columns carry an optional unit suffix that
//! [`normalize_to_kb`] reduces to kilobytes.

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx};

use crate::common::KiloBytes;
use crate::data::item::{GenericMap, Item, ItemCollection, ItemType, MapValue};
use crate::de_wrn;
use crate::parsers::router::SectionParser;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// unit normalization
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Normalize a memory amount with optional unit suffix to kilobytes.
///
/// Suffixes `B`, `K`, `M`, `G` are case-insensitive; bytes divide by 1024,
/// kilobytes pass through, megabytes multiply by 1024, gigabytes by
/// 1024×1024. A bare number is treated as already being in kilobytes.
///
/// Returns `None` for a non-numeric amount or multiply overflow.
pub fn normalize_to_kb(value: &str) -> Option<KiloBytes> {
    let last: char = value.chars().last()?;
    let (digits, multiply, divide): (&str, KiloBytes, KiloBytes) = match last {
        'B' | 'b' => (&value[..value.len() - 1], 1, 1024),
        'K' | 'k' => (&value[..value.len() - 1], 1, 1),
        'M' | 'm' => (&value[..value.len() - 1], 1024, 1),
        'G' | 'g' => (&value[..value.len() - 1], 1024 * 1024, 1),
        _ => (value, 1, 1),
    };
    let amount: KiloBytes = digits.parse::<KiloBytes>().ok()?;
    amount
        .checked_mul(multiply)
        .map(|kilobytes| kilobytes / divide)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ProcRankParser
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Split one data row into exactly `ncols` whitespace-delimited fields,
/// keeping the final field verbatim (it is the process command line and is
/// never split further).
fn split_row(
    line: &str,
    ncols: usize,
) -> Vec<&str> {
    let mut fields: Vec<&str> = Vec::with_capacity(ncols);
    let mut rest: &str = line.trim();
    while fields.len() + 1 < ncols && !rest.is_empty() {
        match rest.find(char::is_whitespace) {
            Some(at) => {
                fields.push(&rest[..at]);
                rest = rest[at..].trim_start();
            }
            None => {
                break;
            }
        }
    }
    if !rest.is_empty() {
        fields.push(rest);
    }
    fields
}

/// Stateless-per-call parser converting one `PROCRANK` block into one
/// `"PROCRANK"` item mapping process command line → (column name →
/// normalized kilobytes).
#[derive(Debug, Default)]
pub struct ProcRankParser {}

impl ProcRankParser {
    pub fn new() -> ProcRankParser {
        ProcRankParser {}
    }
}

impl SectionParser for ProcRankParser {
    fn name(&self) -> &'static str {
        ItemType::ProcRank.as_str()
    }

    fn parse_block(
        &mut self,
        lines: &[String],
        items: &mut ItemCollection,
    ) {
        defn!("{} lines", lines.len());
        // the first non-blank line is the header; once read it is fixed
        // for this block
        let mut header: Option<Vec<String>> = None;
        let mut map = GenericMap::new();
        for line in lines.iter() {
            if line.trim().is_empty() {
                continue;
            }
            let columns: &Vec<String> = match header {
                Some(ref columns) => columns,
                None => {
                    let columns: Vec<String> = line
                        .split_whitespace()
                        .map(String::from)
                        .collect();
                    defo!("header columns {:?}", columns);
                    if columns.len() < 2 {
                        de_wrn!("{}: degenerate header {:?}", self.name(), line);
                        return;
                    }
                    header = Some(columns);
                    continue;
                }
            };
            let fields: Vec<&str> = split_row(line, columns.len());
            if fields.len() != columns.len() {
                de_wrn!(
                    "{}: expected {} fields, found {}, skip row {:?}",
                    self.name(),
                    columns.len(),
                    fields.len(),
                    line
                );
                continue;
            }
            let mut row = GenericMap::new();
            let mut row_ok: bool = true;
            for (column, field) in columns[..columns.len() - 1]
                .iter()
                .zip(fields.iter())
            {
                match normalize_to_kb(field) {
                    Some(kilobytes) => {
                        row.insert(column.clone(), MapValue::Int(kilobytes));
                    }
                    None => {
                        de_wrn!(
                            "{}: bad amount {:?} in row {:?}",
                            self.name(),
                            field,
                            line
                        );
                        row_ok = false;
                        break;
                    }
                }
            }
            if !row_ok {
                continue;
            }
            // the final field is the command line, verbatim
            let cmdline: &str = fields[columns.len() - 1];
            map.insert(cmdline.to_string(), MapValue::Map(row));
        }
        if map.is_empty() {
            defx!("no rows, no item");
            return;
        }
        defx!("commit item with {} rows", map.len());
        items.commit(Item::new(ItemType::ProcRank, map));
    }
}
