use crate::shared::constants::{ARABIC_BLOCK_END, ARABIC_BLOCK_START};

/// Whether any code point of `text` lies in the Arabic block (U+0600–U+06FF).
pub fn contains_arabic_script(text: &str) -> bool {
    text.chars()
        .any(|c| (ARABIC_BLOCK_START..=ARABIC_BLOCK_END).contains(&c))
}
