use tracing_subscriber::EnvFilter;

/// Install the stderr `tracing` subscriber. Stdout is reserved for the
/// protocol document, so logs never go there.
///
/// `RUST_LOG` wins when set; otherwise `morpho_bridge=info`, or `debug`
/// with `verbose`.
pub fn init(verbose: bool) {
    let default = if verbose {
        "morpho_bridge=debug"
    } else {
        "morpho_bridge=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // try_init: a second call (tests, embedding hosts) is a no-op
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
