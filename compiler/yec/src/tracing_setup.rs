//! Tracing subscriber installation for the CLI.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Filter directives, e.g. `YE_LOG=ye_parse=trace`.
const LOG_ENV: &str = "YE_LOG";
/// Read when `YE_LOG` is unset.
const FALLBACK_LOG_ENV: &str = "RUST_LOG";
/// Any value other than `0` switches to indented span-tree output.
const LOG_TREE_ENV: &str = "YE_LOG_TREE";

/// Install a global subscriber if a log filter is set.
///
/// Call once at startup. Later calls are no-ops. Output goes to stderr so
/// it never mixes with `de` lines on stdout.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Some(directives) = std::env::var(LOG_ENV)
            .or_else(|_| std::env::var(FALLBACK_LOG_ENV))
            .ok()
        else {
            return;
        };

        let registry = tracing_subscriber::registry().with(EnvFilter::new(directives));
        let tree = std::env::var_os(LOG_TREE_ENV).is_some_and(|value| value != "0");
        let installed = if tree {
            registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .try_init()
        };
        if let Err(error) = installed {
            eprintln!("warning: tracing not installed: {error}");
        }
    });
}
