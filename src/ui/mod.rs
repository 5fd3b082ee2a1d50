//! User interface components for terminal interaction.
//!
//! - [`display`]: success and warning output
//! - [`prompt`]: confirmation dialogs for destructive steps

pub mod display;
pub mod prompt;
