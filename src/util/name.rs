//! Name formatting for registrations and guild nicknames.

/// Discord rejects nicknames longer than this many characters.
pub const MAX_NICKNAME_LEN: usize = 32;

/// Title-cases every whitespace separated word and joins them with single spaces.
///
/// The first character of each word is upper-cased and the rest lower-cased, so
/// `"mARY  ann"` becomes `"Mary Ann"`.
pub fn capwords(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builds the guild nickname `"{first} {last initial}"`.
///
/// Falls back to the first name alone when the last name is empty and truncates to
/// [`MAX_NICKNAME_LEN`] characters.
pub fn nickname(first_name: &str, last_name: &str) -> String {
    let nick = match last_name.chars().next() {
        Some(initial) => format!("{} {}", first_name, initial),
        None => first_name.to_string(),
    };

    nick.chars().take(MAX_NICKNAME_LEN).collect()
}
