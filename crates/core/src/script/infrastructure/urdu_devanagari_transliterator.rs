use crate::script::domain::transliterator::{Script, TransliterationError, Transliterator};

/// Rule-based Urdu → Devanagari transliterator.
///
/// Urdu script usually omits short vowels, so output relies on the inherent
/// vowel of each Devanagari consonant. Long vowels are read from alef, vav
/// and ye according to their position in the word. Characters the table does
/// not know are copied through unchanged.
#[derive(Debug, Default)]
pub struct UrduDevanagariTransliterator;

impl UrduDevanagariTransliterator {
    pub fn new() -> Self {
        Self
    }
}

impl Transliterator for UrduDevanagariTransliterator {
    fn transliterate(
        &self,
        from: Script,
        to: Script,
        text: &str,
    ) -> Result<String, TransliterationError> {
        if from != Script::Urdu || to != Script::Devanagari {
            return Err(TransliterationError::Unsupported { from, to });
        }
        Ok(transliterate_text(text))
    }
}

/// What the previous output of the current word was.
#[derive(Clone, Copy, PartialEq)]
enum Prev {
    WordStart,
    Consonant(&'static str),
    Vowel,
}

const DO_CHASHMI_HE: char = '\u{06BE}';
const ZABAR: char = '\u{064E}';
const ZER: char = '\u{0650}';
const PESH: char = '\u{064F}';
const SHADDA: char = '\u{0651}';
const SUKUN: char = '\u{0652}';

fn transliterate_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut word: Vec<char> = Vec::new();

    for c in text.chars() {
        if is_word_char(c) {
            word.push(c);
            continue;
        }
        if !word.is_empty() {
            transliterate_word(&word, &mut out);
            word.clear();
        }
        push_non_letter(c, &mut out);
    }
    if !word.is_empty() {
        transliterate_word(&word, &mut out);
    }
    out
}

fn transliterate_word(word: &[char], out: &mut String) {
    let letters = word.iter().filter(|c| !is_mark(**c)).count();
    let mut prev = Prev::WordStart;
    let mut i = 0;

    while i < word.len() {
        let c = word[i];
        let next = word.get(i + 1).copied();
        let is_final = word[i + 1..].iter().all(|c| is_mark(*c));

        if let Some(base) = consonant(c) {
            if next == Some(DO_CHASHMI_HE) {
                match aspirate(c) {
                    Some(aspirated) => out.push_str(aspirated),
                    None => {
                        out.push_str(base);
                        out.push_str("्ह");
                    }
                }
                prev = Prev::Consonant(base);
                i += 2;
                continue;
            }
            // Word-final he after a consonant marks a trailing "a" in longer words.
            if matches!(c, 'ہ' | 'ه') && is_final && letters > 2 {
                if let Prev::Consonant(_) = prev {
                    out.push('ा');
                    prev = Prev::Vowel;
                    i += 1;
                    continue;
                }
            }
            out.push_str(base);
            prev = Prev::Consonant(base);
            i += 1;
            continue;
        }

        let mut consumed = 1;
        match c {
            'ا' | 'أ' | 'إ' => {
                match prev {
                    Prev::Consonant(_) => out.push('ा'),
                    _ => {
                        let (vowel, takes_next) = initial_alef(next, prev == Prev::WordStart);
                        out.push_str(vowel);
                        if takes_next {
                            consumed = 2;
                        }
                    }
                }
                prev = Prev::Vowel;
            }
            'آ' => {
                out.push(if let Prev::Consonant(_) = prev { 'ा' } else { 'आ' });
                prev = Prev::Vowel;
            }
            'و' => match prev {
                Prev::Consonant(_) => {
                    out.push('ो');
                    prev = Prev::Vowel;
                }
                _ => {
                    out.push('व');
                    prev = Prev::Consonant("व");
                }
            },
            'ی' | 'ي' | 'ى' => match prev {
                Prev::Consonant(_) if matches!(next, Some('ا' | 'آ' | 'و')) => {
                    out.push_str("्य");
                    prev = Prev::Consonant("य");
                }
                Prev::Consonant(_) => {
                    out.push('ी');
                    prev = Prev::Vowel;
                }
                _ => {
                    out.push('य');
                    prev = Prev::Consonant("य");
                }
            },
            'ئ' => {
                match next {
                    Some('ی' | 'ي') => {
                        out.push('ई');
                        consumed = 2;
                    }
                    Some('ے') => {
                        out.push('ए');
                        consumed = 2;
                    }
                    _ => out.push('इ'),
                }
                prev = Prev::Vowel;
            }
            'ے' => {
                out.push(if let Prev::Consonant(_) = prev { 'े' } else { 'ए' });
                prev = Prev::Vowel;
            }
            'ۓ' => {
                out.push('ए');
                prev = Prev::Vowel;
            }
            'ؤ' => {
                out.push(if let Prev::Consonant(_) = prev { 'ु' } else { 'उ' });
                prev = Prev::Vowel;
            }
            DO_CHASHMI_HE => {
                out.push('ह');
                prev = Prev::Consonant("ह");
            }
            'ں' => {
                out.push('ं');
                prev = Prev::Vowel;
            }
            'ع' => {
                if prev == Prev::WordStart {
                    out.push('अ');
                    prev = Prev::Vowel;
                }
            }
            'ء' | '\u{0640}' | ZABAR => {}
            ZER => {
                if let Prev::Consonant(_) = prev {
                    out.push('ि');
                    prev = Prev::Vowel;
                }
            }
            PESH => {
                if let Prev::Consonant(_) = prev {
                    out.push('ु');
                    prev = Prev::Vowel;
                }
            }
            SHADDA => {
                if let Prev::Consonant(base) = prev {
                    out.push('्');
                    out.push_str(base);
                }
            }
            SUKUN => {
                if let Prev::Consonant(_) = prev {
                    out.push('्');
                    prev = Prev::Vowel;
                }
            }
            '\u{0670}' => {
                out.push('ा');
                prev = Prev::Vowel;
            }
            '\u{064B}' => {
                out.push('न');
                prev = Prev::Consonant("न");
            }
            c if is_mark(c) => {}
            other => {
                out.push(other);
                prev = Prev::Vowel;
            }
        }
        i += consumed;
    }
}

/// Independent vowel for an alef that does not follow a consonant, and
/// whether it absorbs the next character.
fn initial_alef(next: Option<char>, at_word_start: bool) -> (&'static str, bool) {
    match next {
        Some('و') => ("ओ", true),
        Some('ی' | 'ي') => ("ए", true),
        Some('ے') => ("ए", true),
        Some(ZER) => ("इ", true),
        Some(PESH) => ("उ", true),
        Some(ZABAR) => ("अ", true),
        _ if at_word_start => ("अ", false),
        _ => ("आ", false),
    }
}

fn consonant(c: char) -> Option<&'static str> {
    let mapped = match c {
        'ب' => "ब",
        'پ' => "प",
        'ت' | 'ط' | 'ة' => "त",
        'ٹ' => "ट",
        'ث' | 'س' | 'ص' => "स",
        'ج' => "ज",
        'چ' => "च",
        'ح' | 'ہ' | 'ه' => "ह",
        'خ' => "\u{0959}",
        'د' => "द",
        'ڈ' => "ड",
        'ذ' | 'ز' | 'ض' | 'ظ' => "\u{095B}",
        'ر' => "र",
        'ڑ' => "\u{095C}",
        'ژ' => "झ\u{093C}",
        'ش' => "श",
        'غ' => "\u{095A}",
        'ف' => "\u{095E}",
        'ق' => "\u{0958}",
        'ک' | 'ك' => "क",
        'گ' => "ग",
        'ل' => "ल",
        'م' => "म",
        'ن' => "न",
        _ => return None,
    };
    Some(mapped)
}

fn aspirate(c: char) -> Option<&'static str> {
    let mapped = match c {
        'ب' => "भ",
        'پ' => "फ",
        'ت' => "थ",
        'ٹ' => "ठ",
        'ج' => "झ",
        'چ' => "छ",
        'د' => "ध",
        'ڈ' => "ढ",
        'ک' | 'ك' => "ख",
        'گ' => "घ",
        'ڑ' => "\u{095D}",
        _ => return None,
    };
    Some(mapped)
}

/// Combining marks that never stand as a letter of their own.
fn is_mark(c: char) -> bool {
    matches!(c,
        '\u{0610}'..='\u{061A}'
        | '\u{064B}'..='\u{065F}'
        | '\u{0640}'
        | '\u{0670}'
        | '\u{06D6}'..='\u{06ED}')
}

fn is_word_char(c: char) -> bool {
    matches!(c, '\u{0610}'..='\u{061A}' | '\u{0620}'..='\u{065F}' | '\u{066E}'..='\u{06D3}' | '\u{06D5}'..='\u{06ED}')
}

fn push_non_letter(c: char, out: &mut String) {
    match c {
        '۔' => out.push('।'),
        '،' => out.push(','),
        '؟' => out.push('?'),
        '؛' => out.push(';'),
        '٪' => out.push('%'),
        '\u{06F0}'..='\u{06F9}' => out.push(devanagari_digit(c as u32 - 0x06F0)),
        '\u{0660}'..='\u{0669}' => out.push(devanagari_digit(c as u32 - 0x0660)),
        other => out.push(other),
    }
}

fn devanagari_digit(value: u32) -> char {
    char::from_u32(0x0966 + value).unwrap_or('?')
}
