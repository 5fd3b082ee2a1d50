//! Confirmation prompts for destructive decision points.

use inquire::Confirm;

use crate::error::Result;

/// Asks the user a yes/no question, defaulting to no.
///
/// When `auto_approve` is set (non-interactive mode) no prompt is shown and
/// the answer is yes. This is the only place the pipeline touches the
/// terminal for input.
pub fn confirm(message: &str, auto_approve: bool) -> Result<bool> {
    if auto_approve {
        return Ok(true);
    }

    Ok(Confirm::new(message).with_default(false).prompt()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_approve_skips_the_prompt() {
        // Would hang on a real prompt; auto-approve must short-circuit.
        assert!(confirm("never shown", true).unwrap());
    }
}
