//! trap-enrich: Enrich an SNMP trap varbind blob into an incident record.
//!
//! Reads the blob from a file (or stdin), runs the vendor handler registry
//! over it, and prints the enriched event as text or JSON.

use clap::{Parser, ValueEnum};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use trap_enrich::cmdb::NoCmdb;
use trap_enrich::event::{EnrichedEvent, RawEvent};
use trap_enrich::{pipeline, vendor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable field listing.
    Human,
    /// JSON object.
    Json,
}

/// Enrich an SNMP trap varbind blob into an incident record.
#[derive(Debug, Parser)]
#[command(name = "trap-enrich", version, about)]
struct Args {
    /// File containing the varbind blob; stdin when omitted.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Event source (the platform's notion of the sender).
    #[arg(short, long)]
    source: Option<String>,

    /// Output format.
    #[arg(short = 'O', long, value_enum, default_value = "human")]
    format: OutputFormat,

    /// Enable debug tracing (or set RUST_LOG).
    #[arg(short, long)]
    debug: bool,
}

impl Args {
    fn init_tracing(&self) {
        let default = if self.debug { "debug" } else { "warn" };
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    args.init_tracing();

    let payload = match read_payload(&args) {
        Ok(payload) => payload,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let event = RawEvent {
        additional_info: payload,
        source: args.source.clone(),
        sys_id: None,
    };

    let handlers = vendor::registry();
    match pipeline::process(&handlers, &event, &NoCmdb) {
        Ok(Some(enriched)) => {
            if let Err(e) = write_event(&enriched, args.format) {
                eprintln!("Error writing output: {}", e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Ok(None) => {
            eprintln!("No handler claimed this trap; event left untouched.");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn read_payload(args: &Args) -> std::io::Result<String> {
    match &args.file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut payload = String::new();
            std::io::stdin().read_to_string(&mut payload)?;
            Ok(payload)
        }
    }
}

fn write_event(event: &EnrichedEvent, format: OutputFormat) -> std::io::Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(event)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
            println!("{json}");
        }
        OutputFormat::Human => {
            println!("node:             {}", event.node);
            println!("type:             {}", event.event_type);
            println!("resource:         {}", event.resource);
            println!("severity:         {} ({})", event.severity.code(), event.severity);
            println!("priority:         {}", event.priority);
            if let Some(impact) = event.impact {
                println!("impact:           {}", impact);
            }
            if let Some(urgency) = event.urgency {
                println!("urgency:          {}", urgency);
            }
            println!("category:         {}", event.category);
            println!("subcategory:      {}", event.subcategory);
            println!("vendor:           {}", event.vendor);
            if let Some(component) = &event.component_type {
                println!("component:        {}", component);
            }
            println!("assignment group: {}", event.assignment_group);
            println!("correlation id:   {}", event.correlation_id);
            println!("message key:      {}", event.message_key);
            for (key, value) in &event.attributes {
                println!("{key}: {value}");
            }
            println!();
            println!("{}", event.description);
        }
    }
    Ok(())
}
