use crate::display::display_record;
use crate::model::{RegNo, Student};
use clap::{ArgAction, Parser};
use eyre::Result;
use std::collections::HashMap;
use tracing::{debug, info};

mod checks;
mod display;
mod model;

#[derive(Debug, Parser)]
#[command(version, about = "Show that registration records defensively copy their metadata")]
struct Args {
    /// Student name
    #[arg(short, long, default_value = "Johan")]
    name: String,
    /// Registration number
    #[arg(short, long, default_value_t = 1234)]
    reg_no: u32,
    /// Metadata entry as KEY=VALUE (repeatable)
    #[arg(short, long = "meta", value_parser = parse_entry)]
    meta: Vec<(String, String)>,
    /// Set verbosity level
    #[arg(short, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_entry(entry: &str) -> Result<(String, String), String> {
    match entry.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_owned(), value.to_owned())),
        _ => Err(format!("expected KEY=VALUE, got {entry:?}")),
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let level = match args.verbose {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(format!("regcard={level}"))
        .init();
    let mut metadata: HashMap<String, String> = if args.meta.is_empty() {
        [("City", "Vallentuna"), ("Company", "Truesec")]
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    } else {
        args.meta.into_iter().collect()
    };
    let student = Student::new(&args.name, RegNo(args.reg_no), &metadata);
    let snapshot = metadata.clone();

    // Tamper with the caller-side mapping after construction.
    for value in metadata.values_mut() {
        *value = "tampered".to_owned();
    }
    if let Some(key) = metadata.keys().next().cloned() {
        info!("removing {} from the caller's mapping", key);
        metadata.remove(&key);
    }
    debug!(
        "caller's mapping now holds {} entries, the record was built from {}",
        metadata.len(),
        snapshot.len()
    );

    display_record(&student);
    checks::ensure_unaliased(&student, &snapshot)?;
    checks::ensure_copies_independent(&student)?;
    println!("Metadata stayed put; the record never shared its mapping.");
    Ok(())
}

#[test]
fn test_parse_entry() {
    assert_eq!(
        parse_entry("City=Vallentuna"),
        Ok(("City".to_owned(), "Vallentuna".to_owned()))
    );
    assert_eq!(
        parse_entry("Motto=a=b"),
        Ok(("Motto".to_owned(), "a=b".to_owned()))
    );
    assert!(parse_entry("=oops").is_err());
    assert!(parse_entry("nodelimiter").is_err());
}
