//! Sun report binary: prints exposure and climate for a crag or route page.
//!
//! Usage: cargo run --release --bin topo_sun -- [OPTIONS]
//!
//! Options:
//!   --entries <DIR>     Root of the per-crag topo files (default: "entries")
//!   --crag <PATH>       Crag or route path, e.g. europe/austria/wachau/nasenwand
//!   --date <YYYY-MM-DD> Day to scan (default: today in the configured zone)
//!   --config <FILE>     Engine configuration JSON (default: built-in)
//!   --routes            Also report every route of the crag
//!   --list              List all crag and route paths and exit

use std::process::ExitCode;

use chrono::NaiveDate;
use serde_json::json;

use topo_sun::core::{logging, Result};
use topo_sun::engine::{EngineConfig, SunExposureEngine};
use topo_sun::topo::TopoCatalog;

fn main() -> ExitCode {
    logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let entries = parse_str_arg(&args, "--entries").unwrap_or_else(|| "entries".to_string());
    let catalog = TopoCatalog::new(&entries);

    if has_flag(&args, "--list") {
        for entry in catalog.entries()? {
            println!("{}", entry);
        }
        return Ok(());
    }

    let Some(crag) = parse_str_arg(&args, "--crag") else {
        eprintln!("Usage: topo_sun --crag <PATH> [--entries <DIR>] [--date <YYYY-MM-DD>] [--config <FILE>] [--routes] [--list]");
        return Ok(());
    };

    let config = match parse_str_arg(&args, "--config") {
        Some(path) => EngineConfig::from_json_file(&path)?,
        None => EngineConfig::default(),
    };
    let page = catalog.load(&crag)?;
    let engine = SunExposureEngine::with_spa_for(config, &page.topo)?;
    let date = parse_date_arg(&args, "--date").unwrap_or_else(|| engine.today());

    log::info!("Sun report for {} on {} ({})", crag, date, engine.time_zone());
    let report = engine.report(&page.topo, page.route.as_ref(), date)?;
    let routes = if has_flag(&args, "--routes") && page.route.is_none() {
        engine.report_routes(&page.topo, date)?
    } else {
        Vec::new()
    };

    let output = json!({
        "path": page.path,
        "name": page.topo.name,
        "date": date.to_string(),
        "report": report,
        "routes": routes,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn parse_date_arg(args: &[String], flag: &str) -> Option<NaiveDate> {
    let value = parse_str_arg(args, flag)?;
    match value.parse() {
        Ok(date) => Some(date),
        Err(e) => {
            log::warn!("Ignoring {} {:?}: {}; using today", flag, value, e);
            None
        }
    }
}
