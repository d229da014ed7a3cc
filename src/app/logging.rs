use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "ARTPROMPT_LOG";

fn build_filter(directives: Option<&str>) -> EnvFilter {
    let builder = EnvFilter::builder().with_default_directive(LevelFilter::WARN.into());
    match directives.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => builder.parse_lossy(value),
        None => builder.parse_lossy(""),
    }
    .add_directive("hyper=warn".parse().expect("static directive"))
    .add_directive("reqwest=warn".parse().expect("static directive"))
}

/// Install the stderr subscriber. Safe to call more than once.
pub fn init_logging() {
    let directives = std::env::var(LOG_ENV).ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_warn() {
        assert!(build_filter(None).to_string().contains("warn"));
    }

    #[test]
    fn honours_explicit_directives() {
        assert!(build_filter(Some("artprompt=debug")).to_string().contains("artprompt=debug"));
    }
}
