use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// `--json` 輸出時使用，日誌改為 JSON 並寫到 stderr
pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .json(),
        )
        .init();
}

fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

/// The `katas` binary logs under its own target, so both crates are listed.
fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "small_katas=debug,katas=debug,info"
    } else {
        "small_katas=info,katas=info"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_cover_library_and_binary() {
        for verbose in [false, true] {
            let directives = default_directives(verbose);
            assert!(directives.contains("small_katas="), "{directives}");
            assert!(directives.split(',').any(|d| d.starts_with("katas=")));
        }
        assert!(default_directives(true).contains("katas=debug"));
        assert!(default_directives(false).contains("katas=info"));
    }

    #[test]
    fn test_default_directives_parse() {
        for verbose in [false, true] {
            assert!(EnvFilter::try_new(default_directives(verbose)).is_ok());
        }
    }
}
