//! # EdgeList
//!
//! The EdgeList-Format consists of a header line `n m`, followed by `m`
//! non-comment-lines `u v` representing an edge `Edge(u - 1, v - 1)`.
//! Whether the parsed edges are interpreted as directed is a setting of the
//! reader, not of the file.

use std::{
    fs::File,
    io::{BufRead, BufWriter, ErrorKind, Lines, Write},
    path::Path,
};

use super::*;

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Orientation of the constructed graph
    directed: bool,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    /// Defaults to undirected graphs and `c`-comments
    fn default() -> Self {
        Self {
            directed: false,
            comment_identifier: "c".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the orientation of the constructed graph
    pub fn directed(mut self, directed: bool) -> EdgeListReader {
        self.directed = directed;
        self
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }
}

impl<G> GraphReader<G> for EdgeListReader
where
    G: GraphFromEdges,
    Edge: Into<G::Edge>,
{
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let edges_reader = EdgeListEdgesReader::try_new(reader, &self.comment_identifier)?;
        let n = edges_reader.number_of_nodes();
        Ok(G::from_edges(n, self.directed, edges_reader))
    }
}

/// Trait for creating graphs from an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings.
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G> EdgeListRead for G
where
    G: GraphFromEdges,
    Edge: Into<G::Edge>,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// Streaming edge parser that consumes the reader
pub struct EdgeListEdgesReader<'a, R> {
    /// Lines in the reader
    lines: Lines<R>,
    /// Number of nodes parsed from the header
    number_of_nodes: NumNodes,
    /// Number of edges parsed from the header
    number_of_edges: NumEdges,
    /// Comment identifier
    comment_identifier: &'a str,
}

impl<'a, R: BufRead> EdgeListEdgesReader<'a, R> {
    /// Creates a new EdgeListEdgesReader and tries to parse the first
    /// non-comment-line as the `n m` header
    pub fn try_new(reader: R, comment_identifier: &'a str) -> Result<Self> {
        let mut edge_list_reader = Self {
            lines: reader.lines(),
            number_of_nodes: 0,
            number_of_edges: 0,
            comment_identifier,
        };

        let header = edge_list_reader
            .next_non_comment_line()?
            .ok_or(io_error!(ErrorKind::NotFound, "Header not found"))?;

        let mut parts = header.split(' ').filter(|t| !t.is_empty());
        edge_list_reader.number_of_nodes = parse_next_value!(parts, "Header>Number of nodes");
        edge_list_reader.number_of_edges = parse_next_value!(parts, "Header>Number of edges");

        Ok(edge_list_reader)
    }

    /// Returns the parsed number of edges in the graph
    pub fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }

    /// Returns the parsed number of nodes in the graph
    pub fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }

    /// Returns the next non-comment-line if it exists or propagates an error
    fn next_non_comment_line(&mut self) -> Result<Option<String>> {
        loop {
            let line = self.lines.next();
            match line {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line)) if line.starts_with(self.comment_identifier) => continue,
                Some(Ok(line)) => return Ok(Some(line)),
            }
        }
    }

    /// Tries to parse an edge from the next non-comment-line
    fn parse_edge_line(&mut self) -> Result<Option<Edge>> {
        let line = self.next_non_comment_line()?;
        if let Some(line) = line {
            let mut parts = line.split(' ').filter(|t| !t.is_empty());

            let from = parse_next_value!(parts, "Source node");
            let dest = parse_next_value!(parts, "Target node");

            debug_assert!((1..=self.number_of_nodes).contains(&from));
            debug_assert!((1..=self.number_of_nodes).contains(&dest));

            Ok(Some(Edge(from, dest)))
        } else {
            Ok(None)
        }
    }
}

impl<R: BufRead> Iterator for EdgeListEdgesReader<'_, R> {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        self.parse_edge_line()
            .unwrap()
            .map(|Edge(u, v)| Edge(u - 1, v - 1))
    }
}

/// A writer for the EdgeList-Format
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter {}

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }
}

impl<G: AdjacencyList + GraphEdgeOrder> GraphWriter<G> for EdgeListWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        writeln!(
            writer,
            "{} {}",
            graph.number_of_nodes(),
            graph.number_of_edges()
        )?;

        for Edge(u, v) in graph.edges() {
            writeln!(writer, "{} {}", u + 1, v + 1)?;
        }

        Ok(())
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(writer)
    }
}

impl<G: AdjacencyList + GraphEdgeOrder> EdgeListWrite for G {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn read_undirected() {
        let input = "c a comment\n4 3\n1 2\nc another comment\n2 3\n1 4\n";
        let graph: SparseMultiGraph = EdgeListReader::new().try_read_graph(input.as_bytes()).unwrap();

        assert_eq!(graph.number_of_nodes(), 4);
        assert_eq!(graph.number_of_edges(), 3);
        assert!(graph.is_undirected());
        assert!(graph.has_edge(1, 0));
    }

    #[test]
    fn read_directed() {
        let input = "3 2\n1 2\n3 2\n";
        let graph: DenseGraph = EdgeListReader::new()
            .directed(true)
            .try_read_graph(input.as_bytes())
            .unwrap();

        assert!(graph.is_directed());
        assert!(graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 0));
        assert!(graph.has_edge(2, 1));
    }

    #[test]
    fn read_into_weighted_with_unit_weights() {
        let input = "3 2\n1 2\n2 3\n";
        let graph: WeightedSparseMultiGraph =
            EdgeListReader::new().try_read_graph(input.as_bytes()).unwrap();

        assert_eq!(graph.weight_of(0, 1), Some(1.0));
        assert_eq!(graph.weight_of(2, 1), Some(1.0));
    }

    #[test]
    fn missing_header_is_an_error() {
        assert!(SparseMultiGraph::try_read_edge_list("c only comments\n".as_bytes()).is_err());
        assert!(SparseMultiGraph::try_read_edge_list("nonsense header\n".as_bytes()).is_err());
    }

    #[test]
    fn write_then_read_round_trip() {
        let graph = SparseMultiGraph::from_edges(5, false, [(0, 1), (0, 1), (2, 4), (1, 3)]);

        let mut out = Vec::new();
        graph.try_write_edge_list(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("5 4\n"));

        let back: SparseMultiGraph = EdgeListReader::new().try_read_graph(text.as_bytes()).unwrap();
        assert_eq!(
            back.ordered_edges().collect_vec(),
            graph.ordered_edges().collect_vec()
        );
        assert_eq!(back.number_of_edges(), 4);
    }

    #[test]
    fn write_directed() {
        let graph = DenseGraph::from_edges(3, true, [(2, 0), (0, 2)]);

        let mut out = Vec::new();
        graph.try_write_edge_list(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text, "3 2\n1 3\n3 1\n");
    }
}
