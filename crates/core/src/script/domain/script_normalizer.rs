use super::script_detector::contains_arabic_script;
use super::target_script::TargetScript;
use super::transliterator::{Script, TransliterationCapability};
use crate::recognition::domain::segment::Segment;

/// Folds Urdu-script segments into Devanagari when the target script asks for it.
///
/// A missing or failing transliteration engine never aborts the run: the text
/// is kept as recognized and a warning is logged.
pub struct ScriptNormalizer {
    target: TargetScript,
    capability: TransliterationCapability,
    warned_unavailable: bool,
}

impl ScriptNormalizer {
    pub fn new(target: TargetScript, capability: TransliterationCapability) -> Self {
        Self {
            target,
            capability,
            warned_unavailable: false,
        }
    }

    /// Rewrite `segment.text` in place if it needs transliteration.
    /// Returns whether the text was changed.
    pub fn normalize(&mut self, segment: &mut Segment) -> bool {
        if !self.target.wants_devanagari() || !contains_arabic_script(&segment.text) {
            return false;
        }

        let transliterator = match &self.capability {
            TransliterationCapability::Available(t) => t,
            TransliterationCapability::Unavailable => {
                if !self.warned_unavailable {
                    log::warn!(
                        "Urdu script detected but no transliteration engine is available; \
                         keeping original text"
                    );
                    self.warned_unavailable = true;
                }
                return false;
            }
        };

        log::info!(
            "Urdu script detected in segment {}; transliterating to Devanagari",
            segment.id
        );
        match transliterator.transliterate(Script::Urdu, Script::Devanagari, &segment.text) {
            Ok(text) => {
                segment.text = text;
                true
            }
            Err(e) => {
                log::warn!("Segment {}: {e}; keeping original text", segment.id);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::domain::transliterator::{TransliterationError, Transliterator};
    use crate::shared::log_capture;
    use log::Level;
    use rstest::rstest;
    use std::sync::{Arc, Mutex};

    // ─── Stubs ───

    struct RecordingTransliterator {
        calls: Arc<Mutex<Vec<(Script, Script, String)>>>,
    }

    impl Transliterator for RecordingTransliterator {
        fn transliterate(
            &self,
            from: Script,
            to: Script,
            text: &str,
        ) -> Result<String, TransliterationError> {
            self.calls
                .lock()
                .unwrap()
                .push((from, to, text.to_string()));
            Ok(format!("<dev:{text}>"))
        }
    }

    struct FailingTransliterator;

    impl Transliterator for FailingTransliterator {
        fn transliterate(
            &self,
            _: Script,
            _: Script,
            _: &str,
        ) -> Result<String, TransliterationError> {
            Err(TransliterationError::Failed("table missing".to_string()))
        }
    }

    type Calls = Arc<Mutex<Vec<(Script, Script, String)>>>;

    fn recording(target: TargetScript) -> (ScriptNormalizer, Calls) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let t = RecordingTransliterator {
            calls: calls.clone(),
        };
        let normalizer =
            ScriptNormalizer::new(target, TransliterationCapability::Available(Box::new(t)));
        (normalizer, calls)
    }

    fn segment(text: &str) -> Segment {
        Segment {
            id: 0,
            start: 0.0,
            end: 1.0,
            text: text.to_string(),
        }
    }

    #[rstest]
    #[case::urdu_text("آپ کیسے ہیں")]
    #[case::latin_text("How are you")]
    #[case::devanagari_text("आप कैसे हैं")]
    fn test_auto_never_changes_text(#[case] text: &str) {
        let (mut normalizer, calls) = recording(TargetScript::Auto);
        let mut s = segment(text);
        assert!(!normalizer.normalize(&mut s));
        assert_eq!(s.text.as_bytes(), text.as_bytes());
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_urdu_target_keeps_urdu_text() {
        let (mut normalizer, calls) = recording(TargetScript::Urdu);
        let mut s = segment("شکریہ");
        assert!(!normalizer.normalize(&mut s));
        assert_eq!(s.text, "شکریہ");
        assert!(calls.lock().unwrap().is_empty());
    }

    #[rstest]
    #[case(TargetScript::Hindi)]
    #[case(TargetScript::Mixed)]
    fn test_arabic_block_text_is_transliterated(#[case] target: TargetScript) {
        let (mut normalizer, calls) = recording(target);
        let mut s = segment("شکریہ dost");
        assert!(normalizer.normalize(&mut s));
        assert_eq!(s.text, "<dev:شکریہ dost>");

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            (Script::Urdu, Script::Devanagari, "شکریہ dost".to_string())
        );
    }

    #[test]
    fn test_hindi_target_passes_non_arabic_text_through() {
        let (mut normalizer, calls) = recording(TargetScript::Hindi);
        let mut s = segment("नमस्ते world");
        assert!(!normalizer.normalize(&mut s));
        assert_eq!(s.text, "नमस्ते world");
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_unavailable_engine_keeps_text_and_warns_once() {
        log_capture::install();
        let mut normalizer =
            ScriptNormalizer::new(TargetScript::Hindi, TransliterationCapability::Unavailable);
        let mut first = segment("سلام");
        let mut second = segment("خدا حافظ");
        assert!(!normalizer.normalize(&mut first));
        assert!(!normalizer.normalize(&mut second));
        assert_eq!(first.text, "سلام");
        assert_eq!(second.text, "خدا حافظ");

        let warnings = log_capture::messages(Level::Warn);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("no transliteration engine is available"));
    }

    #[test]
    fn test_unavailable_engine_does_not_warn_for_plain_text() {
        log_capture::install();
        let mut normalizer =
            ScriptNormalizer::new(TargetScript::Hindi, TransliterationCapability::Unavailable);
        let mut s = segment("hello");
        normalizer.normalize(&mut s);
        assert!(log_capture::messages(Level::Warn).is_empty());
    }

    #[test]
    fn test_failing_engine_keeps_text() {
        log_capture::install();
        let mut normalizer = ScriptNormalizer::new(
            TargetScript::Mixed,
            TransliterationCapability::Available(Box::new(FailingTransliterator)),
        );
        let mut s = segment("کتاب");
        assert!(!normalizer.normalize(&mut s));
        assert_eq!(s.text, "کتاب");

        let warnings = log_capture::messages(Level::Warn);
        assert_eq!(
            warnings,
            vec!["Segment 0: transliteration failed: table missing; keeping original text"]
        );
    }
}
