use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use super::super::graph::*;

/// Problem tag written into the header line
pub const PACE_TAG: &str = "od";

/// Writes graphs as `p od n m` followed by one `u v` line per edge (1-based, `u < v`)
pub trait PaceWriter {
    /// As [`PaceWriter::try_write_pace`], preceded by one `c` line per comment
    fn try_write_pace_with_comments<W: Write>(
        &self,
        writer: W,
        comments: &[&str],
    ) -> std::io::Result<()>;

    fn try_write_pace<W: Write>(&self, writer: W) -> std::io::Result<()> {
        self.try_write_pace_with_comments(writer, &[])
    }

    fn try_write_pace_file<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_pace(&mut writer)?;
        writer.flush()
    }
}

impl<T> PaceWriter for T
where
    T: AdjacencyList + GraphEdgeOrder,
{
    fn try_write_pace_with_comments<W: Write>(
        &self,
        mut writer: W,
        comments: &[&str],
    ) -> std::io::Result<()> {
        for comment in comments.iter().flat_map(|c| c.lines()) {
            writeln!(writer, "c {comment}")?;
        }

        writeln!(
            writer,
            "p {PACE_TAG} {} {}",
            self.number_of_nodes(),
            self.number_of_edges()
        )?;

        for Edge(u, v) in self.ordered_edges() {
            writeln!(writer, "{} {}", u + 1, v + 1)?;
        }

        Ok(())
    }
}
