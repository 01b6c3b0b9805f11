pub mod transliterator_resolver;
#[cfg(feature = "transliteration")]
pub mod urdu_devanagari_transliterator;
