//! # Dot
//!
//! The Dot-Format is a very extensive format used by
//! [GraphViz](https://graphviz.org/) to allow for detailed visualizations.
//! We only use basic functionality to draw (colored, labeled) nodes and
//! edges.
//!
//! For example, drawing a graph where the neighbors of `1` are colored red
//! can be achieved via
//! ```ignore
//! let dot_writer = DotWriter::default();
//! dot_writer.start_graph(&mut writer, graph.is_directed())?;
//! dot_writer.write_edges(&mut writer, graph.edges(), graph.is_directed(), None)?;
//! dot_writer.color_nodes(&mut writer, graph.neighbors_of(1), DotColor::Red)?;
//! dot_writer.finish_graph(&mut writer)?;
//! ```
//!
//! [`DotWriter::write_annotated`] renders a whole graph with a caller
//! supplied vertex-name mapping and per-node/per-edge attribute callbacks;
//! driver programs use it to overlay traversal results (distances,
//! components, discovery edges) onto the graph.

use std::fmt::Display;

use super::*;

/// An ordered lookup from a 0-based vertex index to a display label.
///
/// The labels are passed through unchanged; they must follow DOT's naming
/// conventions (no spaces, hyphens, or other special characters).
pub trait VertexLabels {
    /// Returns the display label of `u`
    fn label_of(&self, u: Node) -> String;
}

impl<S: Display> VertexLabels for [S] {
    fn label_of(&self, u: Node) -> String {
        self[u as usize].to_string()
    }
}

impl<S: Display> VertexLabels for Vec<S> {
    fn label_of(&self, u: Node) -> String {
        self[u as usize].to_string()
    }
}

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Increment nodes by 1 before writing
    inc_nodes: bool,
    /// Prefix of a node (default: 'u')
    prefix: String,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            inc_nodes: true,
            prefix: "u".to_string(),
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *false*, nodes retain their internal value (-1 that of output)
    pub fn inc_nodes(mut self, inc_nodes: bool) -> Self {
        self.inc_nodes = inc_nodes;
        self
    }

    /// Sets the prefix of a node (`u` by default). Can also be changed while
    /// drawing to draw additional subgraphs apart from the original graph.
    pub fn node_prefix<S>(self, prefix: S) -> DotWriter
    where
        S: Into<String>,
    {
        DotWriter {
            inc_nodes: self.inc_nodes,
            prefix: prefix.into(),
        }
    }

    /// Writes the opening brackets of the graph.
    /// Must know if the graph is directed.
    pub fn start_graph<W>(&self, writer: &mut W, directed: bool) -> Result<()>
    where
        W: Write,
    {
        let graph_name = if directed { "digraph" } else { "graph" };

        writeln!(writer, "{graph_name} {{")
    }

    /// Formats a node depending on `self.prefix, self.inc_nodes`
    fn format_node(&self, u: Node) -> String {
        let u = u + self.inc_nodes as Node;
        format!("{}{u}", self.prefix)
    }

    /// Writes an iterator of edges to `writer`. Must know if the edges are
    /// directed and if they should be colored.
    pub fn write_edges<W, I>(
        &self,
        writer: &mut W,
        edges: I,
        directed: bool,
        color: Option<DotColor>,
    ) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = Edge>,
    {
        let edge_dir = if directed { "->" } else { "--" };
        let edge_color = color.map(|c| format!("[color={c}]")).unwrap_or_default();

        for Edge(u, v) in edges.into_iter() {
            write!(
                writer,
                "{}{edge_dir}{}{edge_color};",
                self.format_node(u),
                self.format_node(v)
            )?;
        }
        writeln!(writer)
    }

    /// Writes a list of colored nodes to `writer`.
    /// This method should only be needed when wanting to color additional
    /// nodes which is why `color` is not optional.
    pub fn color_nodes<W, I>(&self, writer: &mut W, nodes: I, color: DotColor) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = Node>,
    {
        for u in nodes.into_iter() {
            write!(
                writer,
                "{}[style=filled, color={color}]",
                self.format_node(u)
            )?;
        }
        writeln!(writer)
    }

    /// Writes the complete graph with a caller supplied vertex-name mapping.
    ///
    /// Every vertex is written on its own line using its label from
    /// `labels`; `node_attrs`/`edge_attrs` may return an attribute string
    /// (e.g. `"color=red, style=filled"`) to annotate the element. The
    /// labels are passed through unchanged.
    pub fn write_annotated<W, G, L>(
        &self,
        graph: &G,
        writer: &mut W,
        labels: &L,
        mut node_attrs: impl FnMut(Node) -> Option<String>,
        mut edge_attrs: impl FnMut(Edge) -> Option<String>,
    ) -> Result<()>
    where
        W: Write,
        G: AdjacencyList,
        L: VertexLabels + ?Sized,
    {
        let directed = graph.is_directed();
        let edge_dir = if directed { "->" } else { "--" };

        self.start_graph(writer, directed)?;

        for u in graph.vertices() {
            let label = labels.label_of(u);
            match node_attrs(u) {
                Some(attrs) => writeln!(writer, "\t{label}[{attrs}];")?,
                None => writeln!(writer, "\t{label};")?,
            }
        }

        for e in graph.edges() {
            let from = labels.label_of(e.0);
            let to = labels.label_of(e.1);
            match edge_attrs(e) {
                Some(attrs) => writeln!(writer, "\t{from}{edge_dir}{to}[{attrs}];")?,
                None => writeln!(writer, "\t{from}{edge_dir}{to};")?,
            }
        }

        self.finish_graph(writer)
    }

    /// Closes the Dot-Graph, thus finishing the graph
    pub fn finish_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "}}")
    }
}

impl<G> GraphWriter<G> for DotWriter
where
    G: AdjacencyList,
{
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        let directed = graph.is_directed();
        self.start_graph(&mut writer, directed)?;
        self.write_edges(&mut writer, graph.edges(), directed, None)?;
        self.finish_graph(&mut writer)
    }
}

/// Trait for writing a graph to a writer in the Dot-Format.
/// Shorthand for default settings.
pub trait DotWrite {
    /// Tries to write the graph to a writer
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the graph to a file
    fn try_write_dot_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_dot(writer)
    }
}

impl<G> DotWrite for G
where
    G: AdjacencyList,
{
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        DotWriter::default().try_write_graph(self, writer)
    }
}

impl Display for DotColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

/// Subset of the permitted colors in Svg-Dot taken from
/// `https://graphviz.gitlab.io/doc/info/colors.html#svg`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DotColor {
    Black,
    Blue,
    Brown,
    Cyan,
    Gold,
    Gray,
    Green,
    Lime,
    Magenta,
    Orange,
    Pink,
    Purple,
    Red,
    Silver,
    Teal,
    Violet,
    White,
    Yellow,
}

impl DotColor {
    /// Cycles through the palette; handy for coloring by component id or
    /// distance class
    pub fn cycle(i: usize) -> DotColor {
        const PALETTE: [DotColor; 6] = [
            DotColor::Red,
            DotColor::Green,
            DotColor::Blue,
            DotColor::Orange,
            DotColor::Purple,
            DotColor::Teal,
        ];
        PALETTE[i % PALETTE.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::Ucc;

    #[test]
    fn plain_undirected_graph() {
        let graph = DenseGraph::from_edges(3, false, [(0, 1), (1, 2)]);

        let mut out = Vec::new();
        graph.try_write_dot(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(out, "graph {\nu1--u2;u2--u3;\n}\n");
    }

    #[test]
    fn plain_directed_graph() {
        let graph = DenseGraph::from_edges(2, true, [(1, 0)]);

        let mut out = Vec::new();
        graph.try_write_dot(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(out, "digraph {\nu2->u1;\n}\n");
    }

    #[test]
    fn colored_edges_and_nodes() {
        let graph = DenseGraph::from_edges(3, true, [(0, 2)]);
        let writer = DotWriter::new().inc_nodes(false).node_prefix("v");

        let mut out = Vec::new();
        writer.start_graph(&mut out, true).unwrap();
        writer
            .write_edges(&mut out, graph.edges(), true, Some(DotColor::Red))
            .unwrap();
        writer
            .color_nodes(&mut out, [1], DotColor::Yellow)
            .unwrap();
        writer.finish_graph(&mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            "digraph {\nv0->v2[color=red];\nv1[style=filled, color=yellow]\n}\n"
        );
    }

    #[test]
    fn annotated_components_overlay() {
        let graph = SparseMultiGraph::from_edges(4, false, [(0, 1), (2, 3)]);
        let mut ucc = Ucc::new(&graph);
        ucc.calculate();

        let labels = vec!["a", "b", "c", "d"];
        let mut out = Vec::new();
        DotWriter::default()
            .write_annotated(
                &graph,
                &mut out,
                &labels,
                |u| {
                    let color = DotColor::cycle(ucc.component_of(u).unwrap() as usize);
                    Some(format!("style=filled, color={color}"))
                },
                |_| None,
            )
            .unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.starts_with("graph {\n"));
        assert!(out.contains("\ta[style=filled, color=red];\n"));
        assert!(out.contains("\tb[style=filled, color=red];\n"));
        assert!(out.contains("\tc[style=filled, color=green];\n"));
        assert!(out.contains("\ta--b;\n"));
        assert!(out.ends_with("}\n"));
    }
}
