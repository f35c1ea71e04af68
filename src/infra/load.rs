//! Reading graphs from the plain text format.
//!
//! ```text
//! # comments and blank lines are ignored
//! 4        vertex count
//! 3        arc count
//! 0 1 3    one `source destination weight` line per arc
//! 1 2 1
//! 2 3 -2
//! ```
//!
//! Lines after the declared number of arcs are ignored.

use std::{
    fs,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
    str::FromStr,
};

use thiserror::Error;
use tracing::{debug, warn};

use crate::core::{AddArcErrorKind, CreateGraphError, Graph, Weight};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading graph failed: {0}")]
    Io(#[from] io::Error),
    #[error("graph is too short, expected vertex count and arc count")]
    Truncated,
    #[error("line {line}: invalid number {token:?}")]
    InvalidNumber { line: usize, token: String },
    #[error("line {line}: {source}")]
    InvalidSize {
        line: usize,
        source: CreateGraphError,
    },
    #[error("line {line}: expected arc in format `source destination weight`")]
    MalformedArc { line: usize },
    #[error("line {line}: {kind}")]
    ArcOutOfRange { line: usize, kind: AddArcErrorKind },
    #[error("expected {expected} arcs, found {found}")]
    ArcCountMismatch { expected: usize, found: usize },
}

pub fn from_str<W>(input: &str) -> Result<Graph<W>, LoadError>
where
    W: Weight + FromStr,
{
    from_lines(input.lines().map(Ok))
}

pub fn from_reader<W, R>(reader: R) -> Result<Graph<W>, LoadError>
where
    W: Weight + FromStr,
    R: BufRead,
{
    from_lines(reader.lines())
}

pub fn from_path<W, P>(path: P) -> Result<Graph<W>, LoadError>
where
    W: Weight + FromStr,
    P: AsRef<Path>,
{
    let file = fs::File::open(path)?;
    from_reader(BufReader::new(file))
}

fn from_lines<W, I, S>(lines: I) -> Result<Graph<W>, LoadError>
where
    W: Weight + FromStr,
    I: IntoIterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    // Pairs of 1-based line number and trimmed content.
    let mut lines = lines
        .into_iter()
        .enumerate()
        .filter_map(|(i, line)| match line {
            Ok(line) => {
                let line = line.as_ref().trim();
                if line.is_empty() || line.starts_with('#') {
                    None
                } else {
                    Some(Ok((i + 1, line.to_owned())))
                }
            }
            Err(error) => Some(Err(error)),
        });

    let (line, token) = lines.next().ok_or(LoadError::Truncated)??;
    let vertex_count = parse_number::<i64>(line, &token)?;
    let vertex_count = usize::try_from(vertex_count).unwrap_or(0);
    let mut graph =
        Graph::new(vertex_count).map_err(|source| LoadError::InvalidSize { line, source })?;

    let (line, token) = lines.next().ok_or(LoadError::Truncated)??;
    let arc_count = parse_number::<usize>(line, &token)?;

    for found in 0..arc_count {
        let (line, arc) = lines.next().ok_or(LoadError::ArcCountMismatch {
            expected: arc_count,
            found,
        })??;

        let mut fields = arc.split_whitespace();
        let (Some(src), Some(dst), Some(weight), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(LoadError::MalformedArc { line });
        };

        let src = parse_vertex(line, src, AddArcErrorKind::SourceOutOfRange)?;
        let dst = parse_vertex(line, dst, AddArcErrorKind::DestinationOutOfRange)?;
        let weight = parse_number::<W>(line, weight)?;

        graph
            .add_arc(src, dst, weight)
            .map_err(|error| LoadError::ArcOutOfRange {
                line,
                kind: error.kind,
            })?;
    }

    let ignored = lines.count();
    if ignored > 0 {
        warn!(ignored, "ignoring lines after the declared arcs");
    }

    debug!(vertex_count, arc_count, "graph loaded");

    Ok(graph)
}

fn parse_number<T: FromStr>(line: usize, token: &str) -> Result<T, LoadError> {
    token.parse().map_err(|_| LoadError::InvalidNumber {
        line,
        token: token.to_owned(),
    })
}

fn parse_vertex(line: usize, token: &str, kind: AddArcErrorKind) -> Result<usize, LoadError> {
    let vertex = parse_number::<i64>(line, token)?;
    usize::try_from(vertex).map_err(|_| LoadError::ArcOutOfRange { line, kind })
}

/// Lists `*.txt` files in the directory, ordered by the first number in their
/// name (`g2.txt` comes before `g10.txt`). Files without a number come first.
pub fn list_graph_files<P: AsRef<Path>>(dir: P) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_txt = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));

        if is_txt && path.is_file() {
            files.push(path);
        }
    }

    files.sort_by_cached_key(|path| {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        (first_number(&name), name)
    });

    Ok(files)
}

fn first_number(name: &str) -> u64 {
    name.split(|c: char| !c.is_ascii_digit())
        .find(|part| !part.is_empty())
        .and_then(|part| part.parse().ok())
        .unwrap_or(0)
}
