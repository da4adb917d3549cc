//! Initials fallback for user avatars.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

/// Up to two uppercase initials from the first and last words of `name`.
///
/// A blank name yields `"?"`.
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let Some(first) = words.next() else {
        return "?".to_owned();
    };
    let mut out: String = first.chars().take(1).flat_map(char::to_uppercase).collect();
    if let Some(last) = words.next_back() {
        out.extend(last.chars().take(1).flat_map(char::to_uppercase));
    }
    out
}
