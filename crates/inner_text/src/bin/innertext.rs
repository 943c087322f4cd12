//! Print the rendered text of an HTML document, or of one element in it.
//!
//! Usage: `innertext [--id=<id>] [--max-depth=<n>] [--items] [--dump-dom] <file.html | ->`

use anyhow::{Context as _, Error, Result, anyhow};
use dom::{Dom, parse_html, parse_html_file};
use env_logger::{Builder, Env};
use inner_text::{InnerTextOptions, collect_items, inner_text_with};
use log::error;
use std::env;
use std::io::{self, Write as _};
use std::path::Path;
use std::process::exit;

const USAGE: &str = "innertext [--id=<id>] [--max-depth=<n>] [--items] [--dump-dom] <file.html | ->";

#[derive(Debug, Default)]
struct Args {
    input: Option<String>,
    id: Option<String>,
    max_depth: Option<usize>,
    items: bool,
    dump_dom: bool,
}

fn parse_max_depth(value: &str) -> Result<usize> {
    value
        .parse()
        .with_context(|| format!("--max-depth expects a number, got {value:?}"))
}

/// Parse command line arguments; flags take `--flag=value` or `--flag value`.
fn parse_args() -> Result<Args> {
    let mut args = env::args();
    let _prog_name = args.next(); // skip program name
    let mut parsed = Args::default();
    let mut pending: Option<&'static str> = None;
    for arg in args {
        match pending.take() {
            Some("--id") => {
                parsed.id = Some(arg);
                continue;
            }
            Some("--max-depth") => {
                parsed.max_depth = Some(parse_max_depth(&arg)?);
                continue;
            }
            Some(_) | None => {}
        }
        if let Some(rest) = arg.strip_prefix("--id=") {
            parsed.id = Some(rest.to_owned());
        } else if let Some(rest) = arg.strip_prefix("--max-depth=") {
            parsed.max_depth = Some(parse_max_depth(rest)?);
        } else if arg == "--id" {
            pending = Some("--id");
        } else if arg == "--max-depth" {
            pending = Some("--max-depth");
        } else if arg == "--items" {
            parsed.items = true;
        } else if arg == "--dump-dom" {
            parsed.dump_dom = true;
        } else if arg.starts_with("--") {
            return Err(anyhow!("unknown flag {arg}"));
        } else if parsed.input.replace(arg).is_some() {
            return Err(anyhow!("more than one input given"));
        }
    }
    if let Some(flag) = pending {
        return Err(anyhow!("{flag} expects a value"));
    }
    Ok(parsed)
}

fn load(input: &str) -> Result<Dom> {
    if input == "-" {
        let html = io::read_to_string(io::stdin()).context("failed to read stdin")?;
        return parse_html(&html);
    }
    parse_html_file(Path::new(input))
}

fn run(args: &Args) -> Result<(), Error> {
    let input = args
        .input
        .as_deref()
        .ok_or_else(|| anyhow!("usage: {USAGE}"))?;
    let dom = load(input)?;
    let root = match &args.id {
        Some(id) => dom
            .element_by_id(id)
            .ok_or_else(|| anyhow!("no element with id {id:?} in {input}"))?,
        None => dom.root(),
    };
    let options = args
        .max_depth
        .map_or_else(InnerTextOptions::default, |depth| {
            InnerTextOptions::default().with_max_depth(depth)
        });

    let mut out = io::stdout().lock();
    if args.dump_dom {
        writeln!(out, "{dom:?}")?;
    }
    if args.items {
        let items = collect_items(&root, &options);
        writeln!(out, "{}", serde_json::to_string_pretty(&items)?)?;
    }
    writeln!(out, "{}", inner_text_with(&root, &options))?;
    out.flush()?;
    Ok(())
}

fn main() {
    Builder::from_env(Env::default().filter_or("RUST_LOG", "warn"))
        .is_test(false)
        .init();
    if let Err(err) = parse_args().and_then(|args| run(&args)) {
        error!("error: {err:#}");
        exit(1);
    }
}
