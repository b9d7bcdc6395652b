//! URL fragment slugs derived from heading text.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Creates a readable URL fragment from heading text.
///
/// Runs of whitespace, hyphens, en dashes and em dashes collapse into a single
/// hyphen; punctuation and back-ticks are then dropped, except for the
/// hyphens themselves. `"Simple Values"` becomes `"Simple-Values"`.
///
/// Without this step the characters that are not allowed in a fragment would
/// be percent-escaped (`#hello%20world` instead of `#hello-world`).
pub fn url_readable_fragment(text: &str) -> String {
    let joined = text
        .trim()
        .split(is_separator)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    joined
        .chars()
        .filter(|&c| c == '-' || !(c == '`' || is_punctuation(c)))
        .collect()
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '-' | '\u{2013}' | '\u{2014}')
}

/// Unicode punctuation (general category P*). Symbols such as `$`, `+` or
/// `|` are category S and are kept.
fn is_punctuation(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}
