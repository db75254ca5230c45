/// Characters that cannot appear in a folder name on at least one platform
const UNSAFE_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Title-case every word of a genre string.
///
/// The first letter after a separator is upper-cased and every other
/// character is kept as-is, so "hip hop" becomes "Hip Hop" and
/// "r&b" becomes "R&B". Letters, digits and `_` are word characters;
/// everything else (whitespace, punctuation) starts a new word.
pub fn title_case(genre: &str) -> String {
    let mut out = String::with_capacity(genre.len());
    let mut at_word_start = true;

    for c in genre.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = is_word_separator(c);
    }

    out
}

fn is_word_separator(c: char) -> bool {
    if c.is_ascii() {
        !(c.is_ascii_alphanumeric() || c == '_')
    } else if c.is_alphanumeric() {
        false
    } else {
        c.is_whitespace()
    }
}

/// True when the name contains a character that would split or break a path
pub fn has_unsafe_chars(name: &str) -> bool {
    name.chars().any(|c| UNSAFE_CHARS.contains(&c) || c.is_control())
        || matches!(name, "." | "..")
}

/// Sanitize a name to be safe as a single folder component
pub fn sanitize_folder_name(name: &str) -> String {
    let cleaned = name
        .chars()
        .map(|c| match c {
            c if UNSAFE_CHARS.contains(&c) => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect::<String>()
        .trim()
        .to_string();

    match cleaned.as_str() {
        "." | ".." => cleaned.replace('.', "_"),
        _ => cleaned,
    }
}
