use heck::ToSnakeCase;

/// Convert a camelCase or snake_case identifier to Title Case.
///
/// A space goes in at every lowercase→uppercase and digit→uppercase boundary,
/// underscores become spaces, and each word is capitalized with the rest of it
/// lowercased.
///
/// - `getPetById` → `Get Pet By Id`
/// - `get_pet_by_id` → `Get Pet By Id`
/// - `v2Upload` → `V2 Upload`
pub fn to_title_case(name: &str) -> String {
    let mut spaced = String::with_capacity(name.len() + 8);
    let mut prev: Option<char> = None;

    for ch in name.chars() {
        if ch == '_' {
            spaced.push(' ');
        } else {
            if ch.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
                spaced.push(' ');
            }
            spaced.push(ch);
        }
        prev = Some(ch);
    }

    spaced
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Derive a `.http` variable name from a request name: snake_case, only
/// `[a-z0-9_]`, never starting with a digit.
///
/// - `Create Item #123` → `create_item_123`
/// - `123 Test` → `_123_test`
/// - `getHTTPStatus` → `get_http_status` (acronym runs split before their last capital)
pub fn var_name(name: &str) -> String {
    let snake: String = name
        .to_snake_case()
        .chars()
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || *ch == '_')
        .collect();

    if snake.starts_with(|ch: char| ch.is_ascii_digit()) {
        format!("_{snake}")
    } else {
        snake
    }
}

/// Turn a tag into a file stem: lowercase, with spaces and characters that
/// are unsafe in file names replaced by `_`.
pub fn file_stem(tag: &str) -> String {
    tag.chars()
        .map(|ch| match ch {
            ' ' | '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            other => other,
        })
        .collect::<String>()
        .to_lowercase()
}
