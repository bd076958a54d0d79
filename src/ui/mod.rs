//! Terminal building blocks shared by the one-shot, interactive and
//! configure commands.

use anyhow::Result;
use inquire::InquireError;

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

/// Whether an inquire error means the user backed out of the prompt
/// (Escape or Ctrl+C) rather than something going wrong.
pub const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Runs a prompt-driven flow, treating a cancelled prompt as a clean exit.
pub fn handle_prompt_cancellation<F>(f: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    match f() {
        Err(e)
            if e.downcast_ref::<InquireError>()
                .is_some_and(is_prompt_cancelled) =>
        {
            // Leave the cursor on a fresh line after the aborted prompt.
            println!();
            Ok(())
        }
        other => other,
    }
}
