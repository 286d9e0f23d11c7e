//! Cyrillic to Latin transliteration.

/// Latin spelling of a lowercase Cyrillic letter.
fn latin(c: char) -> Option<&'static str> {
    let s = match c {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' => "e",
        'ё' => "yo",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "y",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "sch",
        'ъ' => "",
        'ы' => "y",
        'ь' => "",
        'э' => "e",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    };
    Some(s)
}

/// Appends the transliteration of one character, if it has one.
///
/// Capital letters map to a capitalized spelling (`Щ` becomes `Sch`).
fn push_latin(out: &mut String, c: char) -> bool {
    if let Some(s) = latin(c) {
        out.push_str(s);
        return true;
    }

    let mut lower = c.to_lowercase();
    if let (Some(l), None) = (lower.next(), lower.next())
        && l != c
        && let Some(s) = latin(l)
    {
        let mut chars = s.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
        return true;
    }

    false
}

/// Transliterates Cyrillic text to Latin.
///
/// Mapped letters are replaced. Other letters, digits, and whitespace are
/// kept as is. Everything else is dropped.
pub fn transliterate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if push_latin(&mut out, c) {
            continue;
        }
        if c.is_alphabetic() || c.is_numeric() || c.is_whitespace() {
            out.push(c);
        }
    }
    out
}

/// Returns true for characters in the Unicode Cyrillic blocks.
fn is_cyrillic(c: char) -> bool {
    matches!(
        c,
        '\u{0400}'..='\u{052F}'
            | '\u{1C80}'..='\u{1C8F}'
            | '\u{1D2B}'
            | '\u{1D78}'
            | '\u{2DE0}'..='\u{2DFF}'
            | '\u{A640}'..='\u{A69F}'
            | '\u{FE2E}'..='\u{FE2F}'
    )
}

/// Returns true if the text contains any Cyrillic character.
pub fn contains_cyrillic(text: &str) -> bool {
    text.chars().any(is_cyrillic)
}
