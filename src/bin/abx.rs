// src/bin/abx.rs

//! Driver program _abx_ drives the [_abxlib_].
//!
//! Processes user-passed command-line arguments, reads one bugreport dump
//! from a file path or STDIN, runs the parse, then prints a per-type item
//! summary. Optionally prints every extracted item (`--items`).
//!
//! `abx.rs` should be the only file that prints to STDOUT.
//!
//! [_abxlib_]: abxlib

#![allow(non_camel_case_types)]

use std::fs::File;
use std::io::{BufReader, Write};

use ::abxlib::data::item::{ItemCollection, ItemP, ItemType, MapValue};
use ::abxlib::parsers::bugreport::BugreportParser;
use ::anyhow::Context;
use ::clap::Parser;
use ::termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// command-line arguments
#[derive(Parser, Debug)]
#[clap(
    name = "abx",
    version,
    about = "Extract structured items from an Android bugreport dump.",
    after_help = "Exit code is 0 even when crash items are found; \
pass --fail-on-crash to exit 1 when any ANR, JAVA CRASH, or NATIVE CRASH \
item is extracted."
)]
struct CLI_Args {
    /// Path of a bugreport file, or "-" to read from STDIN.
    #[clap(required = true)]
    path: String,

    /// Print every extracted item, not only the summary counts.
    #[clap(short, long)]
    items: bool,

    /// Exit 1 when any crash/hang item is extracted.
    #[clap(long = "fail-on-crash")]
    fail_on_crash: bool,

    /// Choose to print to terminal using colors.
    #[clap(
        short = 'c',
        long = "color",
        value_enum,
        default_value_t = ColorChoiceArg::Auto,
    )]
    color: ColorChoiceArg,
}

/// [`ColorChoice`] wrapper that `clap` can parse.
#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
enum ColorChoiceArg {
    Always,
    Auto,
    Never,
}

impl From<ColorChoiceArg> for ColorChoice {
    fn from(choice: ColorChoiceArg) -> ColorChoice {
        match choice {
            ColorChoiceArg::Always => ColorChoice::Always,
            ColorChoiceArg::Auto => ColorChoice::Auto,
            ColorChoiceArg::Never => ColorChoice::Never,
        }
    }
}

/// Print the per-type summary counts, highlighting nonzero crash counts.
fn print_summary(
    stdout: &mut StandardStream,
    items: &ItemCollection,
) -> std::io::Result<()> {
    writeln!(stdout, "items extracted: {}", items.len())?;
    for item_type in ItemType::ALL.iter() {
        let count = items.count_of_type(*item_type);
        let is_failure_kind: bool = matches!(
            item_type,
            ItemType::Anr | ItemType::JavaCrash | ItemType::NativeCrash
        );
        if is_failure_kind && count > 0 {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        }
        writeln!(stdout, "  {:<17} {}", item_type, count)?;
        stdout.reset()?;
    }
    Ok(())
}

/// Print one item's payload, indented, nested maps one level deeper.
fn print_item(
    stdout: &mut StandardStream,
    item: &ItemP,
) -> std::io::Result<()> {
    stdout.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(stdout, "[{}]", item.item_type())?;
    stdout.reset()?;
    for (key, value) in item.payload().iter() {
        match value {
            MapValue::Str(val) => writeln!(stdout, "  {}: {}", key, val)?,
            MapValue::Int(val) => writeln!(stdout, "  {}: {}", key, val)?,
            MapValue::Map(val) => {
                writeln!(stdout, "  {}:", key)?;
                for (subkey, subvalue) in val.iter() {
                    match subvalue {
                        MapValue::Str(sval) => writeln!(stdout, "    {}: {}", subkey, sval)?,
                        MapValue::Int(sval) => writeln!(stdout, "    {}: {}", subkey, sval)?,
                        MapValue::Map(..) => {}
                    }
                }
            }
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = CLI_Args::parse();

    let items: ItemCollection = match args.path.as_str() {
        "-" => {
            let stdin = std::io::stdin();
            BugreportParser::new()
                .parse(stdin.lock())
                .context("failed reading bugreport from STDIN")?
        }
        path => {
            let file: File =
                File::open(path).with_context(|| format!("failed to open {:?}", path))?;
            let reader: BufReader<File> = BufReader::new(file);
            BugreportParser::new()
                .parse(reader)
                .with_context(|| format!("failed reading bugreport {:?}", path))?
        }
    };

    let mut stdout = StandardStream::stdout(args.color.into());
    print_summary(&mut stdout, &items)?;
    if args.items {
        for item in items.iter() {
            print_item(&mut stdout, item)?;
        }
    }

    let crashes: u64 = items.count_of_type(ItemType::Anr)
        + items.count_of_type(ItemType::JavaCrash)
        + items.count_of_type(ItemType::NativeCrash);
    if args.fail_on_crash && crashes > 0 {
        std::process::exit(1);
    }

    Ok(())
}
