use std::io::Read;
use std::path::PathBuf;
use clap::Parser;
use clap::ArgAction;
use colored::Colorize;
use log::LevelFilter;
use log::error;
use log::info;
use serde::Serialize;

use zs_energy::EnergyTable;
use zsfold::FoldConfig;
use zsfold::Folder;
use zsfold::MfeFold;
use zsfold::Record;
use zsfold::parse_records;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Minimum free energy RNA secondary structures with a simple loop model.",
)]
struct Cli {
    /// Sequences to fold. Read from standard input if neither these nor
    /// --input are given.
    #[arg(value_name = "SEQUENCE")]
    sequences: Vec<String>,

    /// FASTA or raw sequence file.
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// JSON energy parameter file (overrides the config file).
    #[arg(short, long, value_name = "PATH")]
    params: Option<PathBuf>,

    /// JSON configuration file.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Minimum distance j - i of a base pair (overrides the config file).
    #[arg(short, long, value_name = "N")]
    min_pair_dist: Option<usize>,

    /// Print one JSON report per sequence.
    #[arg(long)]
    json: bool,

    /// Print the built-in energy parameters as JSON and exit.
    #[arg(long)]
    dump_params: bool,

    /// Increase verbosity (-v for INFO, -vv for DEBUG, -vvv for TRACE).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize, Debug)]
struct FoldReport<'a> {
    name: Option<&'a str>,
    sequence: String,
    structure: String,
    energy: f64,
    pairs: Vec<(u16, u16)>,
}

impl<'a> FoldReport<'a> {
    fn new(record: &'a Record, mfe: &MfeFold) -> Self {
        Self {
            name: record.name.as_deref(),
            sequence: mfe.sequence().to_string(),
            structure: mfe.structure().to_string(),
            energy: mfe.energy(),
            pairs: mfe.pairs().iter().map(|p| (p.i(), p.j())).collect(),
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn collect_records(cli: &Cli) -> Result<Vec<Record>, Box<dyn std::error::Error>> {
    let mut records: Vec<Record> = cli.sequences.iter().map(Record::unnamed).collect();
    if let Some(path) = &cli.input {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read '{}': {e}", path.display()))?;
        records.extend(parse_records(&text));
    }
    if cli.sequences.is_empty() && cli.input.is_none() {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        records.extend(parse_records(&text));
    }
    Ok(records)
}

fn print_fold(record: &Record, mfe: &MfeFold) {
    if let Some(name) = &record.name {
        println!("{}", format!(">{name}").bold());
    }
    let energy = format!("({:6.2})", mfe.energy());
    let energy = if mfe.energy() < 0.0 { energy.green() } else { energy.dimmed() };
    println!("{}", mfe.sequence());
    println!("{} {energy}", mfe.structure());
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.dump_params {
        println!("{}", EnergyTable::default().to_json_string()?);
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => FoldConfig::from_json_file(path)?,
        None => FoldConfig::default(),
    };
    if let Some(path) = &cli.params {
        config.parameters = Some(path.clone());
    }
    if let Some(mpd) = cli.min_pair_dist {
        config.min_pair_dist = mpd;
    }
    let table = config.energy_table()?;
    let folder = Folder::with_config(&table, &config)?;

    let records = collect_records(&cli)?;
    info!("Folding {} sequences with min_pair_dist = {}.", records.len(), folder.min_pair_dist());

    let mut failed = 0;
    for record in &records {
        let mfe = match folder.fold_str(&record.sequence) {
            Ok(mfe) => mfe,
            Err(e) => {
                error!("{}: {e}", record.name.as_deref().unwrap_or(&record.sequence));
                failed += 1;
                continue;
            }
        };
        if cli.json {
            println!("{}", serde_json::to_string(&FoldReport::new(record, &mfe))?);
        } else {
            print_fold(record, &mfe);
        }
    }

    if failed > 0 {
        return Err(format!("{failed} of {} sequences could not be folded", records.len()).into());
    }
    Ok(())
}
