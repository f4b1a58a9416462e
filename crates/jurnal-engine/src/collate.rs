//! Case- and accent-insensitive string ordering for Indonesian display text.
//!
//! Comparison happens at base-letter strength: "Ádi", "adi" and "ADI" are
//! equal under [`compare`]. Within a string, separators sort before digits
//! and digits before letters, matching the order users see in the browser.
//!
//! Folding covers the Latin-1 Supplement and Latin Extended-A letters, the
//! same range the PDF export can render. Ligatures (æ, œ, ß) and letters
//! outside that range keep their own code point and sort after `z`.

use std::cmp::Ordering;

/// Folds one character to its lowercase base letter.
fn fold(c: char) -> char {
    let lower = c.to_lowercase().next().unwrap_or(c);
    match lower {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'ð' | 'ď' | 'đ' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ĥ' | 'ħ' => 'h',
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'ĵ' => 'j',
        'ķ' | 'ĸ' => 'k',
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' | 'ŉ' | 'ŋ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' | 'ſ' => 's',
        'ţ' | 'ť' | 'ŧ' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ŵ' => 'w',
        'ý' | 'ÿ' | 'ŷ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}

fn class(c: char) -> u8 {
    if c.is_whitespace() || c.is_ascii_punctuation() {
        0
    } else if c.is_numeric() {
        1
    } else if c.is_alphabetic() {
        2
    } else {
        3
    }
}

/// Sort key with the same ordering as [`compare`] at base strength.
pub fn key(s: &str) -> Vec<(u8, char)> {
    s.trim()
        .chars()
        .map(fold)
        .map(|c| (class(c), c))
        .collect()
}

/// Base-strength comparison; ties are not broken.
pub fn compare(a: &str, b: &str) -> Ordering {
    key(a).cmp(&key(b))
}

/// Total order: base strength first, then the raw strings so equal keys
/// still come out in a deterministic sequence.
pub fn compare_total(a: &str, b: &str) -> Ordering {
    compare(a, b).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        assert_eq!(compare("budi", "Budi"), Ordering::Equal);
        assert_eq!(compare("andi", "Budi"), Ordering::Less);
        // code-point order would put "Zaenal" before "andi"
        assert_eq!(compare("Zaenal", "andi"), Ordering::Greater);
    }

    #[test]
    fn test_accents_fold_to_base_letter() {
        assert_eq!(compare("Ésa", "esa"), Ordering::Equal);
        assert_eq!(compare("Ésa", "Fitri"), Ordering::Less);
    }

    #[test]
    fn test_latin_extended_letters_fold() {
        assert_eq!(compare("Łukasz", "lukasz"), Ordering::Equal);
        assert_eq!(compare("Ørsted", "orsted"), Ordering::Equal);
        assert_eq!(compare("Şükrü", "sukru"), Ordering::Equal);
        assert_eq!(compare("Đorđe", "Eka"), Ordering::Less);
    }

    #[test]
    fn test_digits_before_letters() {
        assert_eq!(compare("7A", "A7"), Ordering::Less);
        assert_eq!(compare("10 IPA", "7A"), Ordering::Less);
    }

    #[test]
    fn test_total_order_breaks_ties() {
        let mut names = vec!["budi", "Budi", "andi"];
        names.sort_by(|a, b| compare_total(a, b));
        assert_eq!(names, vec!["andi", "Budi", "budi"]);
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        assert_eq!(compare("  Sari", "sari"), Ordering::Equal);
    }
}
