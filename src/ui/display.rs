//! Styled terminal output.

use std::path::Path;

use console::style;

use crate::error::Error;

/// Prints the single-line diagnostic for a failed operation.
pub fn show_error(err: &Error) {
    eprintln!("{} {err}", style("ERR:").red().bold());
}

/// Prints a completion message.
pub fn show_success(action: &str, path: &Path) {
    println!("{} {}", style("✓").green(), style(format!("{action}: {}", path.display())).bold());
}

/// Prints the erase-source completion message.
pub fn show_source_erased(path: &Path) {
    println!("{} {}", style("✓").green(), style(format!("Source securely erased: {}", path.display())).bold());
}

/// States the limits of single-pass erasure before anything is destroyed.
///
/// Copy-on-write filesystems, journaling, snapshots, and flash wear-leveling
/// can all retain copies a single overwrite never reaches; users deserve to
/// know that before trusting the wipe.
pub fn show_wipe_limitation() {
    println!(
        "{} single-pass overwrite: copy-on-write filesystems, journaling, snapshots, and flash wear-leveling may retain recoverable copies",
        style("note:").yellow().bold()
    );
}
