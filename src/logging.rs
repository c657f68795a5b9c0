use env_logger::Env;

/// Initialise `env_logger`.
///
/// `RUST_LOG` wins when set; otherwise the level is `info`, raised to
/// `debug` and `trace` by one or two `-v` flags.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    // A second init (e.g. from tests) is harmless.
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp_millis()
        .try_init();
}
