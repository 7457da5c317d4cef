//! Deciding whether `$...$` content is a formula or prose that happens to
//! sit between dollar signs (prices, shell variables).

const OPERATORS: &[char] = &[
    '+', '-', '*', '/', '=', '<', '>', '^', '_', '{', '}', '×', '÷', '±', '∞', '∑', '∫', '∏', '√',
];

const GREEK: &str = "αβγδεζηθικλμνξπρστυφχψω";

pub fn looks_like_math(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return false;
    }

    s.contains('\\')
        || s.contains(OPERATORS)
        || s.to_lowercase().chars().any(|c| GREEK.contains(c))
        || s.chars().all(|c| c.is_ascii_alphabetic())
        || mixes_letters_and_digits(s)
        || is_decimal(s)
}

/// A letter directly followed or preceded by a digit, as in `x2` or `2a`.
fn mixes_letters_and_digits(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    chars.windows(2).any(|w| {
        (w[0].is_ascii_alphabetic() && w[1].is_ascii_digit())
            || (w[0].is_ascii_digit() && w[1].is_ascii_alphabetic())
    })
}

/// `42` or `3.14`.
fn is_decimal(s: &str) -> bool {
    let digits = |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit());
    match s.split_once('.') {
        Some((int, frac)) => digits(int) && digits(frac),
        None => digits(s),
    }
}
