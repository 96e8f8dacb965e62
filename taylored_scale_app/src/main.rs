// Taylored Scale CLI.
//
// Builds a session from the command line, then prints either a readable
// report (title, spelled notes, numerals, modes, chords) or the full
// snapshot as pretty JSON.
//
// Usage:
//   cargo run -p taylored_scale_app -- [--tonic N]
//     [--intervals BITS | --number N | --query Q] [--config PATH]
//     [--search TERM] [--json]
//
// BITS is a 0/1 string, degree 0 first (e.g. 101011010101 for major).
// --query takes a permalink query (`tonic=2&intervals=...` or `t=2&i=6ad`).
// --search lists registry names containing TERM and exits.

use std::path::Path;

use taylored_scale_app::query::parse_bitstring;
use taylored_scale_app::session::ScaleSnapshot;
use taylored_scale_app::{Session, ViewConfig};
use taylored_scale_theory::chord::ChordFamily;
use taylored_scale_theory::{ScaleCommand, ScaleModel, default_registry};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let config = match parse_flag::<String>(&args, "--config") {
        Some(path) => match ViewConfig::load(Path::new(&path)) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => ViewConfig::default(),
    };

    let mut session = Session::new(ScaleModel::default(), config, default_registry());

    if let Some(term) = parse_flag::<String>(&args, "--search") {
        let matches = session.search(&term);
        if matches.is_empty() {
            println!("No scales match '{}'.", term);
        }
        for entry in matches {
            println!("{:>5}  {}", entry.number, entry.name);
        }
        return;
    }

    let query = parse_flag::<String>(&args, "--query").unwrap_or_default();
    if let Err(e) = session.apply_query(&query) {
        eprintln!("Bad query '{}': {}", query, e);
        std::process::exit(1);
    }

    let mut commands = Vec::new();
    if let Some(tonic) = parse_flag::<i64>(&args, "--tonic") {
        commands.push(ScaleCommand::SetTonic { tonic });
    }
    if let Some(bits) = parse_flag::<String>(&args, "--intervals") {
        match parse_bitstring(&bits) {
            Ok(set) => commands.push(ScaleCommand::SetIntervals {
                intervals: set.to_flags().to_vec(),
            }),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
    if let Some(number) = parse_flag::<u32>(&args, "--number") {
        commands.push(ScaleCommand::SetCanonicalNumber { number });
    }
    for command in &commands {
        if let Err(e) = session.apply(command) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    let snapshot = session.snapshot();
    if args.iter().any(|a| a == "--json") {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing snapshot: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print_report(&snapshot);
    }
}

fn print_report(snap: &ScaleSnapshot) {
    println!("=== {} ===", snap.title);
    if !snap.names.is_empty() {
        println!("Also known as: {}", snap.names.join(", "));
    }
    println!("Reference: {}", snap.ian_ring_url);
    println!("Permalink: ?{}", snap.query);
    println!();

    println!("Degree  Interval  Note  Numeral");
    for d in snap.degrees.iter().filter(|d| d.on) {
        println!(
            "{:>6}  {:<8}  {:<4}  {}",
            d.degree,
            d.interval,
            d.note_name.as_deref().unwrap_or("?"),
            d.numeral
        );
    }
    println!();

    println!("Modes:");
    for mode in &snap.modes {
        println!("  +{:<2} {} ({})", mode.offset, mode.name, mode.number);
    }
    println!();

    for (family, label) in [(ChordFamily::Triad, "Triads"), (ChordFamily::Seventh, "Sevenths")] {
        let chords: Vec<String> = snap
            .chords
            .iter()
            .filter(|c| c.family == family)
            .map(|c| format!("{} ({})", c.symbol, c.numeral))
            .collect();
        if chords.is_empty() {
            println!("{}: none", label);
        } else {
            println!("{}: {}", label, chords.join("  "));
        }
    }
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
}
