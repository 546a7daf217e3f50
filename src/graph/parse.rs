//! # Edge-list input
//!
//! The serialized form is a stream of whitespace separated tokens:
//!
//! ```text
//! <vertex count> <edge count>
//! <source> <target> <weight>     (edge count times)
//! ```
//!
//! Ids are 0-based. Line breaks carry no meaning beyond separating tokens.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use log::debug;

use crate::graph::{DirectedGraph, MutableGraph, Weight};
use crate::{Error, Result};

/// Token-level reader over an edge-list document
struct EdgeListParser<'a> {
    tokens: SplitWhitespace<'a>,
    /// Index of the next token, reported in errors
    position: usize,
}

impl<'a> EdgeListParser<'a> {
    fn new(input: &'a str) -> Self {
        EdgeListParser {
            tokens: input.split_whitespace(),
            position: 0,
        }
    }

    fn next_token(&mut self, expected: &str) -> Result<(usize, &'a str)> {
        let token = self
            .tokens
            .next()
            .ok_or_else(|| Error::UnexpectedEof(expected.to_string()))?;
        let position = self.position;
        self.position += 1;
        Ok((position, token))
    }

    fn parse_count(&mut self, what: &str) -> Result<usize> {
        let (position, token) = self.next_token(what)?;
        token.parse().map_err(|_| Error::Parse {
            token: position,
            message: format!("{} must be a non-negative integer, found {:?}", what, token),
        })
    }

    fn parse_id(&mut self, what: &str) -> Result<usize> {
        let (position, token) = self.next_token(what)?;
        token.parse().map_err(|_| Error::Parse {
            token: position,
            message: format!("{} must be a vertex id, found {:?}", what, token),
        })
    }

    fn parse_weight<W: Weight>(&mut self) -> Result<W> {
        let (position, token) = self.next_token("edge weight")?;
        token.parse().map_err(|_| Error::Parse {
            token: position,
            message: format!("invalid edge weight {:?}", token),
        })
    }

    fn parse_graph<W: Weight>(mut self) -> Result<DirectedGraph<W>> {
        let vertices = self.parse_count("vertex count")?;
        let edges = self.parse_count("edge count")?;

        let mut graph = DirectedGraph::try_new(vertices).ok_or_else(|| Error::Parse {
            token: 0,
            message: format!("cannot allocate a graph of {} vertices", vertices),
        })?;
        for _ in 0..edges {
            let from = self.parse_id("edge source")?;
            let to = self.parse_id("edge target")?;
            let weight = self.parse_weight()?;
            graph.add_edge(from, to, weight)?;
        }

        if let Some(extra) = self.tokens.next() {
            return Err(Error::Parse {
                token: self.position,
                message: format!("unexpected token {:?} after {} edge records", extra, edges),
            });
        }

        debug!("Parsed graph with {} vertices and {} edges", vertices, edges);
        Ok(graph)
    }
}

impl<W> FromStr for DirectedGraph<W>
where
    W: Weight,
{
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        EdgeListParser::new(s).parse_graph()
    }
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Reads a graph in edge-list form from any reader
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        input.parse()
    }

    /// Reads a graph in edge-list form from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use ordered_float::OrderedFloat;

    #[test]
    fn test_parse_integer_graph() {
        let graph: DirectedGraph<i64> = "3 2\n0 1 5\n1 2 -4\n".parse().unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbours(1).collect::<Vec<_>>(), vec![(2, -4)]);
    }

    #[test]
    fn test_parse_ignores_line_layout() {
        let graph: DirectedGraph<OrderedFloat<f64>> = "2\n2 0 1 0.5 1\n0 -1.25".parse().unwrap();
        assert_eq!(
            graph.edges().collect::<Vec<_>>(),
            vec![(0, 1, OrderedFloat(0.5)), (1, 0, OrderedFloat(-1.25))]
        );
    }

    #[test]
    fn test_parse_empty_graph() {
        let graph: DirectedGraph<i64> = "0 0".parse().unwrap();
        assert_eq!(graph.size(), 0);
    }

    #[test]
    fn test_negative_vertex_count_is_rejected() {
        let result: Result<DirectedGraph<i64>> = "-3 0".parse();
        assert!(matches!(result, Err(Error::Parse { token: 0, .. })));
    }

    #[test]
    fn test_unallocatable_vertex_count_is_rejected() {
        let result: Result<DirectedGraph<i64>> = "18446744073709551615 0".parse();
        assert!(matches!(result, Err(Error::Parse { token: 0, .. })));
    }

    #[test]
    fn test_malformed_edge_count() {
        let result: Result<DirectedGraph<i64>> = "3 two".parse();
        assert!(matches!(result, Err(Error::Parse { token: 1, .. })));
    }

    #[test]
    fn test_missing_record() {
        let result: Result<DirectedGraph<i64>> = "3 2\n0 1 5\n1 2".parse();
        assert!(matches!(result, Err(Error::UnexpectedEof(_))));

        let result: Result<DirectedGraph<i64>> = "".parse();
        assert!(matches!(result, Err(Error::UnexpectedEof(_))));
    }

    #[test]
    fn test_out_of_range_endpoint() {
        let result: Result<DirectedGraph<i64>> = "3 1\n0 3 5".parse();
        assert!(matches!(result, Err(Error::InvalidEdge(0, 3))));
    }

    #[test]
    fn test_bad_weight_and_trailing_tokens() {
        let result: Result<DirectedGraph<i64>> = "2 1\n0 1 1.5".parse();
        assert!(matches!(result, Err(Error::Parse { token: 4, .. })));

        let result: Result<DirectedGraph<i64>> = "2 1\n0 1 1\n1 0 1".parse();
        assert!(matches!(result, Err(Error::Parse { token: 5, .. })));
    }

    #[test]
    fn test_from_reader() {
        let input = "2 1\n1 0 9\n";
        let graph: DirectedGraph<i32> = DirectedGraph::from_reader(input.as_bytes()).unwrap();
        assert_eq!(graph.neighbours(1).collect::<Vec<_>>(), vec![(0, 9)]);
    }
}
