use super::language::Language;


pub fn normalize(text: &str, language: Language) -> String {
    match language {
        Language::En => normalize_english(text),
        Language::Ar => normalize_arabic(text),
    }
}

fn normalize_english(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    for ch in lowered.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            out.push(ch);
        } else {
            out.push(' ');
        }
    }
    collapse_whitespace(&out)
}

fn normalize_arabic(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    for ch in lowered.chars() {
        // Tashkeel and tatweel are removed outright rather than blanked so
        // that a diacritized word does not split in two.
        if is_arabic_diacritic(ch) || ch == '\u{0640}' {
            continue;
        }
        let ch = fold_arabic_char(ch);
        if is_arabic_letter(ch) || is_digit(ch) {
            out.push(ch);
        } else {
            out.push(' ');
        }
    }
    collapse_whitespace(&out)
}

// Presentation variants folded to a single canonical codepoint.
fn fold_arabic_char(ch: char) -> char {
    match ch {
        '\u{0622}' | '\u{0623}' | '\u{0625}' => '\u{0627}', // آ أ إ -> ا
        '\u{0649}' | '\u{0626}' => '\u{064A}',              // ى ئ -> ي
        '\u{0624}' => '\u{0648}',                           // ؤ -> و
        '\u{0629}' => '\u{0647}',                           // ة -> ه
        '\u{06C1}' | '\u{06BE}' => '\u{0647}',              // ہ ھ -> ه
        '\u{06A9}' => '\u{0643}',                           // ک -> ك
        _ => ch,
    }
}

fn is_arabic_diacritic(ch: char) -> bool {
    matches!(ch, '\u{0610}'..='\u{061A}' | '\u{064B}'..='\u{065F}' | '\u{0670}')
}

fn is_arabic_letter(ch: char) -> bool {
    matches!(ch, '\u{0621}'..='\u{063A}' | '\u{0641}'..='\u{064A}')
}

fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit() || matches!(ch, '\u{0660}'..='\u{0669}')
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
