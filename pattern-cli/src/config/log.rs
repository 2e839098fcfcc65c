use env_logger::Env;

/// Logs go to stderr, `warn` and above unless `RUST_LOG` says otherwise.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
}
