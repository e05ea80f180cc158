use inquire::InquireError;

mod spinner;
mod theme;

pub use spinner::Spinner;
pub use theme::{Style, TRANSLATION_RGB};

/// Check if the inquire error is a user cancellation/interruption.
pub const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}
