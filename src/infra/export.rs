use std::{
    collections::HashSet,
    fmt::{self, Display},
    io::{self, Cursor, Write},
};

use crate::core::{Graph, Matrix, Weight};

/// Text rendering of a matrix with row and column headers.
///
/// ```
/// use warshall::{core::Graph, infra::export::Table};
///
/// let mut graph = Graph::new(2).unwrap();
/// graph.add_arc(0, 1, 7).unwrap();
///
/// print!("{}", Table::new(graph.dist_matrix()).name("L"));
/// ```
pub struct Table<'a, T> {
    matrix: &'a Matrix<Option<T>>,
    name: Option<&'a str>,
    missing: &'a str,
}

const CELL_WIDTH: usize = 6;

impl<'a, T> Table<'a, T> {
    /// Missing entries are rendered as `∞`.
    pub fn new(matrix: &'a Matrix<Option<T>>) -> Self {
        Self {
            matrix,
            name: None,
            missing: "∞",
        }
    }

    pub fn name(self, name: &'a str) -> Self {
        Self {
            name: Some(name),
            ..self
        }
    }

    pub fn missing(self, missing: &'a str) -> Self {
        Self { missing, ..self }
    }
}

impl<T: Display> Display for Table<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.matrix.size();

        if let Some(name) = self.name {
            writeln!(f, "{name} =")?;
        }

        write!(f, "{:width$}", "", width = CELL_WIDTH)?;
        for col in 0..size {
            write!(f, "{col:>width$}", width = CELL_WIDTH)?;
        }
        writeln!(f)?;
        writeln!(f, "     {}", "-".repeat(CELL_WIDTH * size))?;

        for (row, values) in self.matrix.rows().enumerate() {
            write!(f, "{row:>3} | ")?;
            for value in values {
                // Not every Display implementation respects the width.
                let cell = match value {
                    Some(value) => value.to_string(),
                    None => self.missing.to_owned(),
                };
                write!(f, "{cell:>width$}", width = CELL_WIDTH)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

pub trait Export<G> {
    fn export<Wr: Write>(&self, graph: &G, out: &mut Wr) -> io::Result<()>;
}

/// Export of the graph arcs in the [DOT
/// language](https://graphviz.org/doc/info/lang.html).
///
/// Arcs are colored by the sign of their weight and the arcs of a highlighted
/// path are drawn bold.
pub struct Dot {
    name: String,
    get_vertex_label: Box<dyn Fn(usize) -> String>,
    show_weights: bool,
    highlighted: HashSet<(usize, usize)>,
}

const NEGATIVE_COLOR: &str = "#ff6b6b";
const ZERO_COLOR: &str = "#95e1d3";
const POSITIVE_COLOR: &str = "#4ecdc4";

impl Dot {
    pub fn new(name: Option<String>) -> Self {
        Self {
            name: name.unwrap_or_else(|| String::from("G")),
            get_vertex_label: Box::new(|v| v.to_string()),
            show_weights: true,
            highlighted: HashSet::new(),
        }
    }

    pub fn vertex_label<F>(self, get_vertex_label: F) -> Self
    where
        F: Fn(usize) -> String + 'static,
    {
        Self {
            get_vertex_label: Box::new(get_vertex_label),
            ..self
        }
    }

    pub fn hide_weights(self) -> Self {
        Self {
            show_weights: false,
            ..self
        }
    }

    pub fn highlight_path(mut self, path: &[usize]) -> Self {
        self.highlighted
            .extend(path.windows(2).map(|pair| (pair[0], pair[1])));
        self
    }

    pub fn to_string<W>(&self, graph: &Graph<W>) -> String
    where
        W: Weight + Display,
    {
        let mut cursor = Cursor::new(Vec::new());
        self.export(graph, &mut cursor)
            .expect("writing to vec in cursor does not fail");

        String::from_utf8(cursor.into_inner()).expect("dot format is text format")
    }
}

impl<W> Export<Graph<W>> for Dot
where
    W: Weight + Display,
{
    fn export<Wr: Write>(&self, graph: &Graph<W>, out: &mut Wr) -> io::Result<()> {
        writeln!(out, "digraph {} {{", self.name)?;

        for v in graph.vertices() {
            writeln!(out, "    v{} [label={:?}];", v, (self.get_vertex_label)(v))?;
        }

        for (src, dst, weight) in graph.arcs() {
            let color = if weight.is_negative() {
                NEGATIVE_COLOR
            } else if *weight == W::zero() {
                ZERO_COLOR
            } else {
                POSITIVE_COLOR
            };

            write!(out, "    v{src} -> v{dst} [")?;
            if self.show_weights {
                write!(out, "label={:?}, ", weight.to_string())?;
            }
            write!(out, "color={color:?}")?;
            if self.highlighted.contains(&(src, dst)) {
                write!(out, ", penwidth=3")?;
            }
            writeln!(out, "];")?;
        }

        writeln!(out, "}}")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::infra::testing::create_path;

    use super::*;

    #[test]
    fn table() {
        let mut graph = Graph::new(3).unwrap();
        graph.extend_with_arcs([(0, 1, 5), (2, 0, -12)]).unwrap();

        let expected = "\
L =
           0     1     2
     ------------------
  0 |      0     5     ∞
  1 |      ∞     0     ∞
  2 |    -12     ∞     0
";

        assert_eq!(
            Table::new(graph.dist_matrix()).name("L").to_string(),
            expected
        );
    }

    #[test]
    fn table_missing_placeholder() {
        let graph = Graph::<i32>::new(2).unwrap();

        let expected = "\
P =
           0     1
     ------------
  0 |      0     -
  1 |      -     1
";

        assert_eq!(
            Table::new(graph.pred_matrix()).name("P").missing("-").to_string(),
            expected
        );
    }

    #[test]
    fn dot() {
        let mut graph = create_path(3, 2);
        graph.add_arc(2, 0, -1).unwrap();
        graph.add_arc(0, 2, 0).unwrap();

        let expected = r##"digraph G {
    v0 [label="0"];
    v1 [label="1"];
    v2 [label="2"];
    v0 -> v1 [label="2", color="#4ecdc4", penwidth=3];
    v0 -> v2 [label="0", color="#95e1d3"];
    v1 -> v2 [label="2", color="#4ecdc4", penwidth=3];
    v2 -> v0 [label="-1", color="#ff6b6b"];
}
"##;

        assert_eq!(Dot::new(None).highlight_path(&[0, 1, 2]).to_string(&graph), expected);
    }

    #[test]
    fn dot_custom_labels() {
        let graph = create_path(2, 1.5);

        let expected = r##"digraph roads {
    v0 [label="A"];
    v1 [label="B"];
    v0 -> v1 [color="#4ecdc4"];
}
"##;

        let dot = Dot::new(Some(String::from("roads")))
            .vertex_label(|v| ["A", "B"][v].to_owned())
            .hide_weights();

        assert_eq!(dot.to_string(&graph), expected);
    }
}
