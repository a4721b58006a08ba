// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::config::options::{AppOptions, ExportFormat};
use crate::core::net::Session;
use crate::export;
use crate::progress::Progress;
use crate::runner;

const HELP: &str = "\
tm_graph: teammate-network scraper

Usage: cli [options]

  --players N        top players to collect (default 20)
  --teammates N      teammates to collect per player (default 10)
  --start PATH       listing path to start from
  -o, --out DIR      output directory (default: out)
  --format FMT       csv | tsv (default: csv)
  --no-headers       omit header rows from exports
  -h, --help         this text
";

/// Headless run: scrape, build the graph, export, print a summary.
pub fn run() -> Result<(), Box<dyn Error>> {
    let opts = parse_cli()?;

    let mut session = Session::new();
    let mut progress = ConsoleProgress::default();
    let graph = runner::build_graph(&mut session, &opts.scrape, Some(&mut progress));

    let written = export::export_graph(&opts.export, &graph)?;
    println!(
        "Graph: {} players, {} teammate edges",
        graph.node_count(),
        graph.edge_count()
    );
    for path in written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn parse_cli() -> Result<AppOptions, Box<dyn Error>> {
    let mut opts = AppOptions::default();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--players" => {
                let v: usize = args.next().ok_or("Missing value for --players")?.parse()?;
                if v == 0 { return Err("--players must be at least 1".into()); }
                opts.scrape.player_count = v;
            }
            "--teammates" => {
                opts.scrape.teammates_per_player =
                    args.next().ok_or("Missing value for --teammates")?.parse()?;
            }
            "--start" => {
                opts.scrape.start_path = args.next().ok_or("Missing value for --start")?;
            }
            "-o" | "--out" => {
                opts.export.out_dir =
                    PathBuf::from(args.next().ok_or("Missing output directory")?);
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                opts.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--no-headers" => opts.export.include_headers = false,
            "-h" | "--help" => {
                eprintln!("{HELP}");
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(opts)
}

/// Prints one line per pipeline event.
#[derive(Default)]
struct ConsoleProgress {
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("Collecting teammates for {} players…", total);
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, index: usize, label: &str) {
        println!("[{}/{}] {}", index + 1, self.total, label);
    }
    fn item_failed(&mut self, index: usize, label: &str) {
        eprintln!("[{}/{}] {}: failed", index + 1, self.total, label);
    }
    fn finish(&mut self) {
        println!("Done.");
    }
}
