//! Command line analysis of graph files.
//!
//! Loads each graph, computes all-pairs shortest paths and reports negative
//! cycles, the matrices and the requested paths.

use std::{
    fmt::Display,
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
    str::FromStr,
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use warshall::{
    algo::{shortest_paths::Step, Outcome, ShortestPaths},
    core::{Graph, Weight},
    infra::{
        export::{Dot, Table},
        load,
    },
};

#[derive(Parser)]
#[command(name = "warshall")]
#[command(author, version, about = "All-pairs shortest paths with negative cycle detection", long_about = None)]
struct Cli {
    /// Graph files, or directories whose `*.txt` files are analyzed in numeric order
    #[arg(value_name = "INPUT", required = true)]
    inputs: Vec<PathBuf>,

    /// Print the matrices after every step
    #[arg(short, long)]
    verbose: bool,

    /// Print the final distance and predecessor matrices
    #[arg(short, long)]
    matrices: bool,

    /// Print a shortest path (can be specified multiple times)
    #[arg(short, long = "path", value_name = "START:END", value_parser = parse_query)]
    paths: Vec<(usize, usize)>,

    /// Print shortest paths between all pairs of distinct vertices
    #[arg(short, long)]
    all_paths: bool,

    /// Write the graph in DOT format, highlighting the first queried path
    #[arg(long, value_name = "FILE")]
    dot: Option<PathBuf>,

    /// Parse weights as floating point numbers instead of integers
    #[arg(long)]
    float: bool,
}

fn parse_query(query: &str) -> Result<(usize, usize), String> {
    let (start, end) = query
        .split_once(':')
        .ok_or_else(|| format!("expected START:END, got {query:?}"))?;

    let parse = |vertex: &str| {
        vertex
            .trim()
            .parse::<usize>()
            .map_err(|_| format!("invalid vertex {vertex:?}"))
    };

    Ok((parse(start)?, parse(end)?))
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let files = collect_inputs(&cli.inputs)?;
    let several = files.len() > 1;

    let mut failed = 0;

    for (index, file) in files.iter().enumerate() {
        if index > 0 {
            println!();
        }

        let dot = cli
            .dot
            .as_deref()
            .map(|dot| dot_output_path(dot, file, several));

        let result = if cli.float {
            analyze::<f64>(&cli, file, dot.as_deref())
        } else {
            analyze::<i64>(&cli, file, dot.as_deref())
        };

        if let Err(error) = result {
            eprintln!("error: {error:#}");
            failed += 1;
        }
    }

    if failed > 0 {
        debug!(failed, total = files.len(), "some graphs were not analyzed");
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn collect_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let listed = load::list_graph_files(input)
                .with_context(|| format!("cannot list directory {}", input.display()))?;

            if listed.is_empty() {
                warn!(dir = %input.display(), "no graph files in directory");
            }

            files.extend(listed);
        } else {
            files.push(input.clone());
        }
    }

    if files.is_empty() {
        bail!("no graph files to analyze");
    }

    Ok(files)
}

/// With several inputs, each DOT file gets the input file stem appended so
/// that they do not overwrite each other.
fn dot_output_path(dot: &Path, input: &Path, several: bool) -> PathBuf {
    if !several {
        return dot.to_path_buf();
    }

    let stem = dot.file_stem().unwrap_or_default().to_string_lossy();
    let input_stem = input.file_stem().unwrap_or_default().to_string_lossy();

    let mut name = format!("{stem}_{input_stem}");
    if let Some(extension) = dot.extension() {
        name.push('.');
        name.push_str(&extension.to_string_lossy());
    }

    dot.with_file_name(name)
}

fn analyze<W>(cli: &Cli, file: &Path, dot: Option<&Path>) -> Result<()>
where
    W: Weight + FromStr + Display,
{
    let mut graph = load::from_path::<W, _>(file)
        .with_context(|| format!("cannot load {}", file.display()))?;

    println!("== {} ==", file.display());
    println!(
        "vertices: {}, arcs: {}",
        graph.vertex_count(),
        graph.arc_count()
    );
    println!();
    print!("{}", initial_matrices(&graph, cli.verbose));

    let outcome = if cli.verbose {
        ShortestPaths::on(&mut graph)
            .observe_fn(|step| print_step(&step))
            .run()
    } else {
        ShortestPaths::on(&mut graph).run()
    };

    println!();

    match &outcome {
        Outcome::NegativeCycle(cycle) => {
            let vertices = cycle
                .vertices()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>();

            println!(
                "negative cycle through vertices {}, shortest paths are undefined",
                vertices.join(", ")
            );
        }
        Outcome::Solved(paths) => {
            println!("no negative cycle");

            if cli.matrices {
                println!();
                print_matrices(paths.graph());
            }

            if !cli.paths.is_empty() {
                println!();
                for &(start, end) in &cli.paths {
                    println!("{}", describe_path(paths, start, end));
                }
            }

            if cli.all_paths {
                println!();
                for start in paths.graph().vertices() {
                    for end in paths.graph().vertices().filter(|&end| end != start) {
                        println!("{start} to {end}: {}", describe_path(paths, start, end));
                    }
                }
            }
        }
    }

    if let Some(dot) = dot {
        let mut exporter = Dot::new(None);

        let highlighted = match (&outcome, cli.paths.first()) {
            (Outcome::Solved(paths), Some(&(start, end))) => paths.reconstruct(start, end),
            _ => None,
        };
        if let Some(path) = highlighted {
            exporter = exporter.highlight_path(&path);
        }

        fs::write(dot, exporter.to_string(outcome.graph()))
            .with_context(|| format!("cannot write {}", dot.display()))?;

        debug!(dot = %dot.display(), "graph exported");
    }

    Ok(())
}

/// The distance matrix, followed by the predecessor matrix if `verbose`.
fn initial_matrices<W: Display>(graph: &Graph<W>, verbose: bool) -> String {
    let mut output = Table::new(graph.dist_matrix()).name("L").to_string();
    if verbose {
        output.push_str(&Table::new(graph.pred_matrix()).name("P").missing("-").to_string());
    }
    output
}

fn print_step<W: Display>(step: &Step<'_, W>) {
    println!();
    println!("-- after k = {} --", step.k);
    print!("{}", Table::new(step.dist).name("L"));
    print!("{}", Table::new(step.pred).name("P").missing("-"));
}

fn print_matrices<W: Display>(graph: &Graph<W>) {
    print!("{}", Table::new(graph.dist_matrix()).name("L"));
    print!("{}", Table::new(graph.pred_matrix()).name("P").missing("-"));
}

fn describe_path<W: Display>(paths: &ShortestPaths<'_, W>, start: usize, end: usize) -> String {
    if !paths.graph().contains_vertex(start) || !paths.graph().contains_vertex(end) {
        warn!(start, end, "path query out of range");
    }

    match (paths.reconstruct(start, end), paths.dist(start, end)) {
        (Some(path), Some(cost)) => {
            let vertices = path.iter().map(ToString::to_string).collect::<Vec<_>>();
            format!("{} (cost {cost})", vertices.join(" -> "))
        }
        _ => format!("no path from {start} to {end}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query() {
        assert_eq!(parse_query("0:3"), Ok((0, 3)));
        assert_eq!(parse_query(" 2 : 1 "), Ok((2, 1)));
        assert!(parse_query("0-3").is_err());
        assert!(parse_query("a:1").is_err());
        assert!(parse_query("-1:1").is_err());
    }

    #[test]
    fn dot_path_single_input() {
        assert_eq!(
            dot_output_path(Path::new("out/graph.dot"), Path::new("g1.txt"), false),
            PathBuf::from("out/graph.dot")
        );
    }

    #[test]
    fn dot_path_several_inputs() {
        assert_eq!(
            dot_output_path(Path::new("out/graph.dot"), Path::new("in/g1.txt"), true),
            PathBuf::from("out/graph_g1.dot")
        );
        assert_eq!(
            dot_output_path(Path::new("graph"), Path::new("g2.txt"), true),
            PathBuf::from("graph_g2")
        );
    }

    #[test]
    fn initial_matrices_verbose() {
        let mut graph = Graph::new(2).unwrap();
        graph.add_arc(0, 1, 4).unwrap();

        let quiet = initial_matrices(&graph, false);
        assert!(quiet.starts_with("L =\n"));
        assert!(!quiet.contains("P ="));

        let verbose = initial_matrices(&graph, true);
        assert!(verbose.starts_with(&quiet));
        assert!(verbose.contains("P =\n"));
        assert!(verbose.ends_with("  1 |      -     1\n"));
    }

    #[test]
    fn describe() {
        let mut graph = Graph::new(3).unwrap();
        graph.extend_with_arcs([(0, 1, 2), (1, 2, 4)]).unwrap();
        let paths = ShortestPaths::on(&mut graph).run().solved().unwrap();

        assert_eq!(describe_path(&paths, 0, 2), "0 -> 1 -> 2 (cost 6)");
        assert_eq!(describe_path(&paths, 2, 0), "no path from 2 to 0");
        assert_eq!(describe_path(&paths, 1, 1), "1 (cost 0)");
    }
}
