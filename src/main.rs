mod algorithm;
mod exec;
mod layout;
mod matrix;
mod normalize;
mod playback;
mod render;
mod session;

use std::process::ExitCode;
use std::sync::Arc;

use algorithm::AlgorithmKind;
use exec::{ExecClient, ExecConfig};
use render::NodeClass;
use session::Session;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let Some(args) = Args::from_cli() else {
        eprintln!("usage: graphstep <matrix.txt> <bfs|dfs|dijkstra|prim|kruskal> [start]");
        return ExitCode::FAILURE;
    };

    let content = match std::fs::read_to_string(&args.file) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("cannot read {}: {e}", args.file);
            return ExitCode::FAILURE;
        }
    };

    let client = match ExecClient::new(ExecConfig::from_env()) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let mut session = Session::new(client);

    if session.load_graph_file(&args.file, &content).is_err() {
        return fail(&session);
    }
    if session.run(args.kind, args.start).await.is_err() {
        return fail(&session);
    }

    print_matrix(&session);
    print_replay(&mut session);
    print_detail(&session);
    ExitCode::SUCCESS
}

struct Args {
    file: String,
    kind: AlgorithmKind,
    start: usize,
}

impl Args {
    fn from_cli() -> Option<Self> {
        let mut args = std::env::args().skip(1);
        let file = args.next()?;
        let kind: AlgorithmKind = args.next()?.parse().ok()?;
        let start = match args.next() {
            Some(raw) => raw.parse().ok()?,
            None => 0,
        };
        Some(Self { file, kind, start })
    }
}

fn fail(session: &Session) -> ExitCode {
    eprintln!("{}", session.last_error().unwrap_or("unknown error"));
    ExitCode::FAILURE
}

/// Print the adjacency table with row/column labels.
fn print_matrix(session: &Session) {
    let Some(graph) = session.graph() else { return };
    let labels = graph.labels();

    println!("Adjacency matrix ({} nodes):", graph.size());
    println!("      {}", labels.iter().map(|l| format!("{l:>5}")).collect::<String>());
    for (label, row) in labels.iter().zip(session.cell_views()) {
        let cells: String = row
            .iter()
            .map(|c| if c.connected { format!("{:>5}", c.weight) } else { format!("{:>5}", ".") })
            .collect();
        println!("{label:>5} {cells}");
    }
    println!();
}

/// Print every step, then scrub to the last step and show the final
/// node classification.
fn print_replay(session: &mut Session) {
    let Some(playback) = session.playback() else { return };
    let steps = playback.len();

    println!("Replay ({steps} steps):");
    for step in playback.timeline() {
        println!("  {:>3}. {}", step.index + 1, step.label);
    }

    if steps > 0 && session.jump(steps - 1).is_ok() {
        let summary: Vec<String> = session
            .node_views()
            .iter()
            .map(|v| {
                let mark = match v.class {
                    NodeClass::Current => "*",
                    NodeClass::Visited => "+",
                    NodeClass::Unvisited => " ",
                };
                format!("{}{mark}", v.label)
            })
            .collect();
        println!("Final: {}  (* current, + visited)", summary.join(" "));
    }
    println!();
}

/// Print the Dijkstra distance table or the MST edge table, whichever
/// the run produced.
fn print_detail(session: &Session) {
    if let Some(rows) = session.distance_rows() {
        println!("Shortest distances:");
        for row in rows {
            println!("  {:>5}  {:>8}  {}", row.node, row.distance, row.path);
        }
    }
    if let Some((rows, total)) = session.mst_rows() {
        println!("Minimum spanning tree:");
        for row in rows {
            println!("  {} → {}  (weight {})", row.from, row.to, row.weight);
        }
        println!("  Total weight: {total}");
    }
}
