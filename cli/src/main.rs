//! Recast CLI - convert one value to a named shape.
//!
//! ```text
//! recast <shape> <value> [--json] [--pattern P] [--charset C] [--default D]
//! ```
//!
//! The value is taken as text unless `--json` is given, in which case it is
//! parsed as a JSON document first. Options come from the config file and
//! are overridden by flags. The result is printed in its default text form,
//! `null` when there is none.
//!
//! Without `--default` a failed conversion is an error and exits non-zero.
//! With it, the default is printed instead.

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use recast_config::RecastConfig;
use recast_core::Caster;
use recast_types::{CastOptions, Charset, Shape, Value};

#[derive(Debug, Parser)]
#[command(name = "recast")]
#[command(about = "Convert a value to a named shape")]
struct Args {
    /// Target shape: bool, char, string, byte, short, int, long, float,
    /// double, biginteger, bigdecimal, bytes, datetime, date, time,
    /// timestamp, enum(A,B,..), or any of these followed by []
    shape: String,

    /// The value to convert
    value: String,

    /// Parse the value as JSON instead of taking it as text
    #[arg(long)]
    json: bool,

    /// Date pattern for text sources, e.g. yyyyMMdd
    #[arg(long, env = "RECAST_DATE_PATTERN")]
    pattern: Option<String>,

    /// Charset for text encoded as bytes
    #[arg(long, env = "RECAST_CHARSET")]
    charset: Option<String>,

    /// Printed instead of failing when the conversion has no result
    #[arg(long)]
    default: Option<String>,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_default();

    // stdout carries only the result
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn options(args: &Args) -> Result<CastOptions> {
    let mut options = match RecastConfig::load() {
        Ok(Some(config)) => config.resolve()?,
        // load() already logged the failure
        Ok(None) | Err(_) => CastOptions::new(),
    };
    if let Some(pattern) = &args.pattern {
        options = options.with_date_pattern(pattern.clone());
    }
    if let Some(name) = &args.charset {
        let charset = Caster::to_charset(name)?;
        options = options.with_charset(charset);
    }
    Ok(options)
}

fn source(args: &Args) -> Result<Value> {
    if !args.json {
        return Ok(Value::from(args.value.as_str()));
    }
    let json: serde_json::Value =
        serde_json::from_str(&args.value).context("value is not valid JSON")?;
    Ok(Value::from(json))
}

fn run(args: &Args) -> Result<String> {
    let shape: Shape = args.shape.parse()?;
    let caster = Caster::new(options(args)?);
    let value = source(args)?;

    let converted = match &args.default {
        Some(default) => match caster.convert(&value, &shape) {
            Some(converted) => converted.to_string(),
            None => default.clone(),
        },
        None => match caster.try_convert(&value, &shape)? {
            Some(converted) => converted.to_string(),
            None if value.is_null() => "null".to_string(),
            None => bail!("{} cannot cast to {shape}", value.kind()),
        },
    };
    Ok(converted)
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let output = run(&args)?;
    println!("{output}");
    Ok(())
}
