use anyhow::{bail, Result};
use clap::Parser;
use sp_core::prelude::*;

/// Shortest-path query on the built-in sample graph.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Id of the start node (1-6)
    #[arg(default_value_t = 1)]
    source: usize,

    /// Id of the destination node (1-6)
    #[arg(default_value_t = 3)]
    target: usize,
}

fn find_by_id(g: &Graph, id: NodeId) -> Result<NodeIndex> {
    match g.nodes().position(|n| n.id == id) {
        Some(pos) => Ok(node_index(pos)),
        None => bail!("no node with id {} in the graph", id),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let g = sample_graph();

    let source = find_by_id(&g, cli.source)?;
    let target = find_by_id(&g, cli.target)?;

    let mut dijkstra = Dijkstra::new(&g);
    match dijkstra.search(source, target)? {
        Some(sp) => {
            let ids: Vec<String> = sp
                .nodes
                .iter()
                .filter_map(|n| g.node(*n))
                .map(|n| n.id.to_string())
                .collect();
            println!("{}", ids.join(" ; "));
            println!("Costs: {}", sp.weight);
        }
        None => println!("No path from {} to {}", cli.source, cli.target),
    }

    Ok(())
}
