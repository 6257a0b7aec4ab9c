use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Lines},
    path::Path,
};

use log::warn;

use crate::graph::{Edge, GraphEdgeEditing, GraphNew, NumEdges, NumNodes};

pub type Result<T> = std::io::Result<T>;

pub trait GraphPaceReader: Sized {
    fn try_read_pace<R: BufRead>(reader: R) -> Result<Self>;
    fn try_read_pace_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

impl<G> GraphPaceReader for G
where
    G: GraphNew + GraphEdgeEditing,
{
    fn try_read_pace<R: BufRead>(reader: R) -> Result<Self> {
        let pace_reader = PaceReader::try_new(reader)?;
        let number_of_edges = pace_reader.number_of_edges();
        let mut graph = Self::new(pace_reader.number_of_nodes());

        let mut edges_read: NumEdges = 0;
        for edge in pace_reader {
            let Edge(u, v) = edge?;
            graph
                .try_add_checked(u, v)
                .map_err(|e| std::io::Error::new(ErrorKind::InvalidData, e))?;
            edges_read += 1;
        }

        if edges_read != number_of_edges {
            warn!("Header announced {number_of_edges} edges, but {edges_read} edge lines were read");
        }

        Ok(graph)
    }

    fn try_read_pace_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = File::open(path)?;
        let buf_reader = BufReader::new(reader);
        Self::try_read_pace(buf_reader)
    }
}

/// Streams the 0-based edges of a file with a `p <tag> n m` header, 1-based edge lines
/// and `c` comment lines
pub struct PaceReader<R> {
    lines: Lines<R>,
    tag: String,
    number_of_nodes: NumNodes,
    number_of_edges: NumEdges,
}

impl<R: BufRead> PaceReader<R> {
    pub fn try_new(reader: R) -> Result<Self> {
        let mut pace_reader = Self {
            lines: reader.lines(),
            tag: String::new(),
            number_of_nodes: 0,
            number_of_edges: 0,
        };

        (
            pace_reader.tag,
            pace_reader.number_of_nodes,
            pace_reader.number_of_edges,
        ) = pace_reader.parse_header()?;
        Ok(pace_reader)
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }

    pub fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }
}

impl<R: BufRead> Iterator for PaceReader<R> {
    type Item = Result<Edge>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parse_edge_line()
            .map(|edge| edge.map(|Edge(u, v)| Edge(u - 1, v - 1)))
            .transpose()
    }
}

macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(std::io::Error::new($kind, $info));
        }
    };
}

macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let Some(next) = $iterator.next() else {
            return Err(std::io::Error::new(
                ErrorKind::InvalidData,
                format!("Premature end of line when parsing {}.", $name),
            ));
        };

        match next.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(std::io::Error::new(
                    ErrorKind::InvalidData,
                    format!("Invalid value found. Cannot parse {}.", $name),
                ));
            }
        }
    }};
}

impl<R: BufRead> PaceReader<R> {
    fn next_non_comment_line(&mut self) -> Result<Option<String>> {
        loop {
            let line = self.lines.next();
            match line {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line)) if line.starts_with('c') || line.trim().is_empty() => continue,
                Some(Ok(line)) => return Ok(Some(line)),
            }
        }
    }

    fn parse_header(&mut self) -> Result<(String, NumNodes, NumEdges)> {
        let Some(line) = self.next_non_comment_line()? else {
            return Err(std::io::Error::new(
                ErrorKind::InvalidData,
                "No header found",
            ));
        };

        let mut parts = line.split_whitespace();

        raise_error_unless!(
            parts.next() == Some("p"),
            ErrorKind::InvalidData,
            "Invalid header found; line should start with p"
        );

        let tag = parts.next().unwrap_or_default().to_string();
        raise_error_unless!(
            !tag.is_empty() && tag.chars().all(|c| c.is_ascii_alphabetic()),
            ErrorKind::InvalidData,
            "Invalid header found; expected a problem tag"
        );

        let number_of_nodes = parse_next_value!(parts, "Header>Number of nodes");
        let number_of_edges = parse_next_value!(parts, "Header>Number of edges");

        raise_error_unless!(
            parts.next().is_none(),
            ErrorKind::InvalidData,
            "Invalid header found; expected end of line"
        );

        Ok((tag, number_of_nodes, number_of_edges))
    }

    fn parse_edge_line(&mut self) -> Result<Option<Edge>> {
        let Some(line) = self.next_non_comment_line()? else {
            return Ok(None);
        };

        let mut parts = line.split_whitespace();

        let from: NumNodes = parse_next_value!(parts, "Source node");
        let dest: NumNodes = parse_next_value!(parts, "Target node");

        raise_error_unless!(
            parts.next().is_none(),
            ErrorKind::InvalidData,
            "Invalid edge found; expected end of line"
        );

        let range = 1..=self.number_of_nodes;
        raise_error_unless!(
            range.contains(&from) && range.contains(&dest),
            ErrorKind::InvalidData,
            format!(
                "Edge {from} {dest} references a node outside of 1..={}",
                self.number_of_nodes
            )
        );

        Ok(Some(Edge(from, dest)))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::*;
    use itertools::Itertools;

    #[test]
    fn test_success() {
        const DEMO_FILE: &str =
            "c TEST\n p  od 10  9 \n1 2\nc TEST\n2 3\n3 4\n4 5\n5 6\n6 7\n7 8\n8 9\n9 10";
        let buf_reader = std::io::BufReader::new(DEMO_FILE.as_bytes());
        let pace_reader = PaceReader::try_new(buf_reader).unwrap();

        assert_eq!(pace_reader.tag(), "od");
        assert_eq!(pace_reader.number_of_nodes(), 10);
        assert_eq!(pace_reader.number_of_edges(), 9);

        let edges: Vec<_> = pace_reader.collect::<Result<_>>().unwrap();
        assert_eq!(
            edges,
            vec![
                Edge(0, 1),
                Edge(1, 2),
                Edge(2, 3),
                Edge(3, 4),
                Edge(4, 5),
                Edge(5, 6),
                Edge(6, 7),
                Edge(7, 8),
                Edge(8, 9)
            ]
        );
    }

    #[test]
    fn foreign_tags_are_accepted() {
        let graph = AdjArray::try_read_pace("p ds 3 2\n1 2\n2 3\n".as_bytes()).unwrap();
        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.ordered_edges().collect_vec(), [Edge(0, 1), Edge(1, 2)]);
    }

    #[test]
    fn invalid_inputs() {
        for input in [
            "",
            "c only a comment\n",
            "q od 3 1\n1 2\n",
            "p 3 1\n1 2\n",
            "p od 3\n",
            "p od 3 1 7\n1 2\n",
            "p od 3 1\n1\n",
            "p od 3 1\n1 x\n",
            "p od 3 1\n0 2\n",
            "p od 3 1\n1 4\n",
            "p od 3 1\n2 2\n",
            "p od 3 1\n1 2 3\n",
        ] {
            let error = AdjArray::try_read_pace(input.as_bytes()).unwrap_err();
            assert_eq!(error.kind(), ErrorKind::InvalidData, "{input:?}");
        }
    }

    #[test]
    fn duplicates_are_merged() {
        let graph = AdjArray::try_read_pace("p od 2 2\n1 2\n2 1\n".as_bytes()).unwrap();
        assert_eq!(graph.number_of_edges(), 1);
    }
}
