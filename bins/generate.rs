use clap::Parser;
use log::info;
use sp_suite::{GraphGenerator, Orientation};
use std::path::PathBuf;

/// Generate connected Erdős–Rényi test graphs.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[arg(short = 'n', long, default_value_t = 100)]
    vertices: usize,

    /// Probability of each vertex pair being joined.
    #[arg(short, long, default_value_t = 0.1)]
    density: f64,

    /// Draw weights from -10..=10 instead of 1..=10.
    #[arg(long)]
    negative: bool,

    #[arg(long, value_enum, default_value_t = Orientation::Undirected)]
    orientation: Orientation,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// How many graphs to write; graph `i` uses seed `seed + i`.
    #[arg(long, default_value_t = 1)]
    count: usize,

    #[arg(short, long, default_value = ".")]
    output: PathBuf,
}

/// Seed of graph `id` (1-based); wraps around at `u64::MAX`.
fn graph_seed(base: u64, id: usize) -> u64 {
    base.wrapping_add(id as u64 - 1)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    std::fs::create_dir_all(&args.output)?;
    for id in 1..=args.count {
        let seed = graph_seed(args.seed, id);
        let mut generator = GraphGenerator::seeded(args.vertices, args.density, seed)
            .with_negative_weights(args.negative)
            .with_orientation(args.orientation);
        let graph = generator.generate()?;
        info!(
            "graph {id}: {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        let path = generator.save(&graph, &args.output, id)?;
        println!("Generated graph saved to {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_wrap_near_the_top() {
        assert_eq!(graph_seed(42, 1), 42);
        assert_eq!(graph_seed(42, 3), 44);
        assert_eq!(graph_seed(u64::MAX, 1), u64::MAX);
        assert_eq!(graph_seed(u64::MAX, 2), 0);
    }
}
