//! Progress bar utilities for fragment export.

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

/// Create a progress bar for exporting `total` fragments.
///
/// Returns a hidden bar when disabled so callers need not branch.
pub fn create_fragment_progress(total: usize, enabled: bool) -> ProgressBar {
    if !enabled || total == 0 {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} fragments ({msg})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb
}

/// Report one line of progress.
///
/// Printed above a visible bar to avoid stuttering, otherwise logged.
pub fn report(pb: &ProgressBar, line: &str) {
    if pb.is_hidden() {
        info!("{line}");
    } else {
        pb.println(line);
    }
}
