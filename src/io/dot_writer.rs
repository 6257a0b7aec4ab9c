use std::io::Write;

use super::super::graph::*;

/// produces a minimalistic DOT representation of the graph
pub trait DotWriter {
    fn try_write_dot<W: Write>(&self, writer: W) -> Result<(), std::io::Error>;

    /// As [`DotWriter::try_write_dot`] but highlights the given nodes
    fn try_write_dot_with_marked<W: Write>(
        &self,
        writer: W,
        marked: &[Node],
    ) -> Result<(), std::io::Error>;
}

impl<T> DotWriter for T
where
    T: AdjacencyList,
{
    fn try_write_dot<W: Write>(&self, writer: W) -> Result<(), std::io::Error> {
        self.try_write_dot_with_marked(writer, &[])
    }

    fn try_write_dot_with_marked<W: Write>(
        &self,
        mut writer: W,
        marked: &[Node],
    ) -> Result<(), std::io::Error> {
        write!(writer, "graph G {{")?;
        for u in self.vertices() {
            if marked.contains(&u) {
                write!(writer, "v{u}[color=red]; ")?;
            } else if self.degree_of(u) == 0 {
                write!(writer, "v{u}; ")?;
            }
        }
        for Edge(u, v) in self.ordered_edges() {
            write!(writer, "v{u}--v{v}; ")?;
        }
        write!(writer, r"}}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn to_dot(graph: &AdjArray, marked: &[Node]) -> String {
        let mut buffer = Vec::new();
        graph.try_write_dot_with_marked(&mut buffer, marked).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn path_with_isolated_node() {
        let mut graph = AdjArray::new(4);
        graph.add_edges([(1, 0), (1, 2)]);
        assert_eq!(to_dot(&graph, &[]), "graph G {v3; v0--v1; v1--v2; }");
        assert_eq!(
            to_dot(&graph, &[1]),
            "graph G {v1[color=red]; v3; v0--v1; v1--v2; }"
        );
        assert_eq!(format!("{graph:?}"), "graph G {v3; v0--v1; v1--v2; }");
    }
}
