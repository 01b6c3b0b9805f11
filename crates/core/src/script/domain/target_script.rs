use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid script '{0}': expected one of Auto, Hindi, Urdu, Mixed")]
pub struct ParseTargetScriptError(pub String);

/// Which writing system segment text should end up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetScript {
    /// Keep whatever script the engine produced.
    #[default]
    Auto,
    Hindi,
    /// Hindi/English code-mixed speech; Urdu script is still folded to Devanagari.
    Mixed,
    Urdu,
}

impl TargetScript {
    pub const ALL: &[TargetScript] = &[
        TargetScript::Auto,
        TargetScript::Hindi,
        TargetScript::Mixed,
        TargetScript::Urdu,
    ];

    /// Whether Urdu-script text must be rewritten in Devanagari.
    pub fn wants_devanagari(&self) -> bool {
        matches!(self, TargetScript::Hindi | TargetScript::Mixed)
    }
}

impl fmt::Display for TargetScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetScript::Auto => write!(f, "Auto"),
            TargetScript::Hindi => write!(f, "Hindi"),
            TargetScript::Mixed => write!(f, "Mixed"),
            TargetScript::Urdu => write!(f, "Urdu"),
        }
    }
}

impl FromStr for TargetScript {
    type Err = ParseTargetScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetScript::ALL
            .iter()
            .copied()
            .find(|script| script.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseTargetScriptError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Auto", TargetScript::Auto)]
    #[case("hindi", TargetScript::Hindi)]
    #[case("MIXED", TargetScript::Mixed)]
    #[case(" Urdu ", TargetScript::Urdu)]
    fn test_parse_case_insensitive(#[case] input: &str, #[case] expected: TargetScript) {
        assert_eq!(input.parse::<TargetScript>().unwrap(), expected);
    }

    #[test]
    fn test_parse_unknown_script() {
        let err = "Latin".parse::<TargetScript>().unwrap_err();
        assert!(err.to_string().contains("Latin"));
    }

    #[rstest]
    #[case(TargetScript::Auto, false)]
    #[case(TargetScript::Hindi, true)]
    #[case(TargetScript::Mixed, true)]
    #[case(TargetScript::Urdu, false)]
    fn test_wants_devanagari(#[case] script: TargetScript, #[case] expected: bool) {
        assert_eq!(script.wants_devanagari(), expected);
    }

    #[test]
    fn test_default_is_auto() {
        assert_eq!(TargetScript::default(), TargetScript::Auto);
    }
}
