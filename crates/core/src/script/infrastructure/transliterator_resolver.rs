use crate::script::domain::transliterator::TransliterationCapability;

/// Resolve the transliteration engine once for the whole run.
///
/// The table transliterator is only compiled in with the `transliteration`
/// feature; without it the capability is reported as unavailable.
pub fn resolve_transliterator() -> TransliterationCapability {
    #[cfg(feature = "transliteration")]
    {
        use super::urdu_devanagari_transliterator::UrduDevanagariTransliterator;
        TransliterationCapability::Available(Box::new(UrduDevanagariTransliterator::new()))
    }
    #[cfg(not(feature = "transliteration"))]
    {
        log::debug!("Built without the transliteration feature");
        TransliterationCapability::Unavailable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_follows_feature() {
        assert_eq!(
            resolve_transliterator().is_available(),
            cfg!(feature = "transliteration")
        );
    }
}
