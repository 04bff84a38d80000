//! Terminal output styling for the Newsreel CLI.
//!
//! Everything is emitted through the `log` facade at info level, so the same
//! text lands in any configured log sink. Styling degrades to plain text when
//! the NO_COLOR environment variable is set.

use console::style;
use log::info;

/// Check if color should be used (respects NO_COLOR environment variable)
fn should_use_color() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a section header for major workflow phases
pub fn print_section(title: &str) {
    info!("");
    if should_use_color() {
        info!("===== {} =====", style(title.to_uppercase()).cyan());
    } else {
        info!("===== {} =====", title.to_uppercase());
    }
    info!("");
}

/// Print a processing step
pub fn print_processing(message: &str) {
    info!("");
    if should_use_color() {
        info!("  » {}", style(message).bold());
    } else {
        info!("  » {message}");
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    info!("");
    if should_use_color() {
        info!("  ✓ {}", style(message).green());
    } else {
        info!("  ✓ {message}");
    }
}

/// Print a status line (key-value pair)
pub fn print_status(label: &str, value: &str, highlight: bool) {
    let label_width = 15;
    let padding = if label.len() < label_width {
        label_width - label.len()
    } else {
        1
    };

    if should_use_color() && highlight {
        info!("      {}:{} {}", label, " ".repeat(padding), style(value).bold());
    } else {
        info!("      {}:{} {}", label, " ".repeat(padding), value);
    }
}
