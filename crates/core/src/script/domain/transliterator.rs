use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Urdu,
    Devanagari,
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Script::Urdu => write!(f, "Urdu"),
            Script::Devanagari => write!(f, "Devanagari"),
        }
    }
}

#[derive(Error, Debug)]
pub enum TransliterationError {
    #[error("transliteration from {from} to {to} is not supported")]
    Unsupported { from: Script, to: Script },
    #[error("transliteration failed: {0}")]
    Failed(String),
}

/// Domain interface for rewriting text from one script into another.
pub trait Transliterator: Send {
    fn transliterate(
        &self,
        from: Script,
        to: Script,
        text: &str,
    ) -> Result<String, TransliterationError>;
}

/// The transliteration engine as resolved at startup.
pub enum TransliterationCapability {
    Available(Box<dyn Transliterator>),
    Unavailable,
}

impl TransliterationCapability {
    pub fn is_available(&self) -> bool {
        matches!(self, TransliterationCapability::Available(_))
    }
}
