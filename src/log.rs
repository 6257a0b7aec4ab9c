use std::io::Write;

use env_logger::{Builder, Env};
pub use log::LevelFilter;

/// Installs a global logger writing to stderr. The level can be overridden by `RUST_LOG`.
/// Installing a second logger is a no-op.
pub fn build_logger_for_level(level: LevelFilter) {
    let _ = Builder::from_env(Env::default().default_filter_or(level.as_str()))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {:<5} {}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.module_path().unwrap_or("-"),
                record.args()
            )
        })
        .try_init();
}

/// Raises `base` by one level per occurrence of the verbose flag
pub fn build_logger_for_verbosity(base: LevelFilter, verbosity: usize) {
    let level = LevelFilter::iter()
        .skip_while(|&l| l != base)
        .nth(verbosity)
        .unwrap_or(LevelFilter::Trace);

    build_logger_for_level(level);
}
