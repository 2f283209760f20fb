use log::LevelFilter;

/// Initialize logging for the `boggle` binary.
///
/// Defaults to `Info`, or `Debug` when `debug_enabled`; an explicit `RUST_LOG`
/// overrides either.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // a second initialization (e.g. from tests) keeps the first logger
    if builder.try_init().is_ok() {
        log::debug!("logger initialized at {level:?} level");
    }
}
