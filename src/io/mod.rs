pub mod dot_writer;
pub mod pace_reader;
pub mod pace_writer;

pub use dot_writer::DotWriter;
pub use pace_reader::{GraphPaceReader, PaceReader};
pub use pace_writer::PaceWriter;
