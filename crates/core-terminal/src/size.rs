//! Terminal size query (spec.md §6): the OS window-size ioctl, falling
//! back to `core_config::TerminalConfig`'s configured size when it
//! reports zero in either dimension.

use core_config::TerminalConfig;

pub fn query_size(config: &TerminalConfig) -> (u16, u16) {
    match crossterm::terminal::size() {
        Ok((cols, rows)) if cols > 0 && rows > 0 => (cols, rows),
        _ => {
            tracing::warn!(
                target: "runtime",
                cols = config.fallback_cols,
                rows = config.fallback_rows,
                "terminal_size_query_failed_using_fallback"
            );
            (config.fallback_cols, config.fallback_rows)
        }
    }
}
