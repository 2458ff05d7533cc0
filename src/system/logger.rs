use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Filter variables in priority order.
const LOG_ENV_VARS: [&str; 2] = ["CHARTSPAN_LOG", "RUST_LOG"];

pub fn init_logging(verbose: bool, no_color: bool) {
    let directive = filter_directive(verbose, |name| std::env::var(name).ok());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|err| {
        eprintln!("Invalid log filter '{}': {}", directive, err);
        EnvFilter::new("info")
    });

    // stdout carries command output.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

/// First non-empty filter variable, else `debug` or `info` by verbosity.
fn filter_directive<F>(verbose: bool, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    LOG_ENV_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| if verbose { "debug" } else { "info" }.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let vars = vars.to_vec();
        move |name| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_owned())
        }
    }

    #[test]
    fn chartspan_log_takes_priority_over_rust_log() {
        let lookup = env(&[("RUST_LOG", "warn"), ("CHARTSPAN_LOG", "chartspan=trace")]);
        assert_eq!(filter_directive(false, lookup), "chartspan=trace");
    }

    #[test]
    fn rust_log_used_when_chartspan_log_unset() {
        assert_eq!(filter_directive(true, env(&[("RUST_LOG", "warn")])), "warn");
    }

    #[test]
    fn empty_chartspan_log_falls_through() {
        let lookup = env(&[("CHARTSPAN_LOG", " "), ("RUST_LOG", "error")]);
        assert_eq!(filter_directive(false, lookup), "error");
    }

    #[test]
    fn verbosity_picks_default_level() {
        assert_eq!(filter_directive(false, env(&[])), "info");
        assert_eq!(filter_directive(true, env(&[])), "debug");
    }

    #[test]
    fn init_logging_is_idempotent() {
        init_logging(false, false);
        init_logging(false, true);
    }
}
