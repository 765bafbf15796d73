use unidecode::unidecode;

/// Fold a location label into the form used for lookups: ASCII, lower-case,
/// single spaces.
pub fn clean_str(input: &str) -> String {
    unidecode(input)
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}
