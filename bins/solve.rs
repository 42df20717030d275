use clap::{Parser, ValueEnum};
use log::{error, info, warn};
use sp_suite::{Algorithm, Error, Graph, RunConfig, Solution};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Run one shortest-path algorithm on a graph file.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Graph file: vertex count, then `source destination weight` triples.
    #[arg(short, long)]
    input: PathBuf,

    /// TOML run configuration; flags below override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, value_enum)]
    algorithm: Option<Algorithm>,

    /// Source vertex, 1-based.
    #[arg(short, long)]
    source: Option<usize>,

    /// Branching factor for the indexed D-ary heap.
    #[arg(long)]
    arity: Option<usize>,

    /// Fail on negative cycles in Floyd–Warshall.
    #[arg(long)]
    check_negative_cycles: bool,

    /// Print the distances, not only the summary.
    #[arg(long)]
    print_distances: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl Args {
    fn run_config(&self) -> Result<RunConfig, Error> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };
        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm;
        }
        if let Some(source) = self.source {
            config.source = source;
        }
        if self.arity.is_some() {
            config.arity = self.arity;
        }
        config.check_negative_cycles |= self.check_negative_cycles;
        config.validate()?;
        Ok(config)
    }
}

fn format_distance(distance: Option<i64>) -> String {
    match distance {
        Some(d) => d.to_string(),
        None => "INF".to_string(),
    }
}

fn print_text(solution: &Solution, source: usize) {
    match solution {
        Solution::SingleSource(paths) => {
            let row: Vec<String> = paths.to_vec().into_iter().map(format_distance).collect();
            println!("{}", row.join(" "));
        }
        Solution::AllPairs(matrix) => {
            for from in 1..=matrix.vertex_count() {
                let row: Vec<String> = matrix.row(from).into_iter().map(format_distance).collect();
                println!("{}", row.join(" "));
            }
            info!("row {source} is the configured source");
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.run_config()?;

    let begin = Instant::now();
    let graph = Graph::from_file(&args.input)?;
    info!(
        "loaded {}: {} vertices, {} edges in {:?}",
        args.input.display(),
        graph.vertex_count(),
        graph.edge_count(),
        begin.elapsed()
    );

    let start = Instant::now();
    let solution = sp_suite::run(&graph, &config)?;
    let elapsed = start.elapsed();

    if args.print_distances {
        match args.format {
            OutputFormat::Text => print_text(&solution, config.source),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&solution)?),
        }
    }

    println!("Algorithm = {:?}", config.algorithm);
    println!("Elapsed time = {} ns", elapsed.as_nanos());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<Error>() {
                Some(inner) if inner.is_negative_cycle() => {
                    warn!("{inner}");
                    println!("Warning: negative weight cycle detected.");
                }
                _ => error!("{e}"),
            }
            ExitCode::FAILURE
        }
    }
}
