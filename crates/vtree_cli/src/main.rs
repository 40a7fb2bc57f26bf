//! vtree CLI
//!
//! Builds one of a few sample value trees and prints it in a chosen
//! encoding. Set `RUST_LOG=vtree=trace` to watch grid growth and resizes.

use std::io;

use vtree::{Dictionary, Emitter, Encode, Encoding, Grid, IoEmitter, List, Value, ValueResult};

/// The sample trees the CLI knows how to build.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Sample {
    Scalar,
    List,
    Dictionary,
    Grid,
    Nested,
}

impl Sample {
    const NAMES: &'static str = "scalar, list, dictionary, grid, nested";

    fn parse(name: &str) -> Option<Self> {
        match name {
            "scalar" => Some(Sample::Scalar),
            "list" => Some(Sample::List),
            "dictionary" => Some(Sample::Dictionary),
            "grid" => Some(Sample::Grid),
            "nested" => Some(Sample::Nested),
            _ => None,
        }
    }

    fn build(self) -> ValueResult<Value> {
        match self {
            Sample::Scalar => Ok(Value::scalar(1.0 / 3.0)),
            Sample::List => Ok(sample_list().into()),
            Sample::Dictionary => Ok(sample_dictionary().into()),
            Sample::Grid => Ok(sample_grid()?.into()),
            Sample::Nested => {
                let mut root = sample_dictionary();
                *root.add_list("series") = sample_list();
                root.set("weights", Value::from(sample_grid()?));
                root.add_dictionary("empty");
                Ok(root.into())
            }
        }
    }
}

#[derive(Debug, PartialEq)]
struct Options {
    sample: Sample,
    encoding: Encoding,
}

fn parse_encoding(name: &str) -> Option<Encoding> {
    match name {
        "compact" => Some(Encoding::Compact),
        "debug" => Some(Encoding::Debug),
        "xml" => Some(Encoding::Xml),
        _ => None,
    }
}

/// Parse everything after the program name.
fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut sample = None;
    let mut encoding = Encoding::Debug;

    for arg in args {
        if let Some(format) = arg.strip_prefix("--format=") {
            encoding = parse_encoding(format).ok_or_else(|| {
                format!("unknown format '{format}' (expected compact, debug or xml)")
            })?;
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else if sample.is_none() {
            sample = Some(Sample::parse(arg).ok_or_else(|| {
                format!("unknown sample '{arg}' (expected one of: {})", Sample::NAMES)
            })?);
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }

    let sample = sample.ok_or_else(|| "missing sample name".to_string())?;
    Ok(Options { sample, encoding })
}

fn sample_list() -> List {
    let mut list = List::new();
    list.add_scalar(1.0);
    list.push(None);
    list.add_scalar(2.5e-7);
    list.add_list().add_scalar(42.0);
    list
}

fn sample_dictionary() -> Dictionary {
    let mut dict = Dictionary::new();
    dict.add_scalar("begin", 0.0);
    dict.add_scalar("duration", 86_400.0);
    dict.set("seed", None);
    dict
}

/// A 3x2 grid filled through the cursor, then widened by one column.
fn sample_grid() -> ValueResult<Grid> {
    let mut grid = Grid::buffered(3, 2, 3, 4, 2, 2)?;
    for i in 1..=6_u32 {
        grid.add_to_last_cell(Value::scalar(f64::from(i) / 2.0))?;
        grid.move_last_cell();
    }
    grid.add_column();
    Ok(grid)
}

/// Render `value` as the CLI prints it: always newline-terminated.
fn render(value: &Value, encoding: Encoding, out: &mut dyn Emitter) {
    value.encode(encoding, out);
    let ends_with_newline = value.is_grid() && encoding != Encoding::Xml;
    if !ends_with_newline {
        out.emit_newline();
    }
}

fn print_usage() {
    eprintln!("Usage: vtree <sample> [--format=compact|debug|xml]");
    eprintln!();
    eprintln!("Samples: {}", Sample::NAMES);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --format=<encoding>   Output encoding (default: debug)");
}

fn main() {
    vtree::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}");
            print_usage();
            std::process::exit(1);
        }
    };
    tracing::debug!(sample = ?options.sample, encoding = ?options.encoding, "rendering sample");

    let value = match options.sample.build() {
        Ok(value) => value,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let mut out = IoEmitter::new(io::stdout().lock());
    render(&value, options.encoding, &mut out);
    if let Err(err) = out.finish() {
        eprintln!("error: failed to write output: {err}");
        std::process::exit(1);
    }
}
