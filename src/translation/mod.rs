mod client;
mod direction;
mod outcome;

pub use client::{TranslationClient, Translator};
pub use direction::{Direction, PerDirection};
pub use outcome::{TransportError, TranslationOutcome};
