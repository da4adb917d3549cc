use super::*;

#[test]
fn initials_use_first_and_last_words() {
    assert_eq!(initials("Ada Lovelace"), "AL");
    assert_eq!(initials("mary ann evans"), "ME");
}

#[test]
fn initials_single_word_yields_one_letter() {
    assert_eq!(initials("cher"), "C");
}

#[test]
fn initials_ignore_surrounding_whitespace() {
    assert_eq!(initials("   grace \t hopper  "), "GH");
}

#[test]
fn initials_blank_name_is_placeholder() {
    assert_eq!(initials(""), "?");
    assert_eq!(initials("   "), "?");
}

#[test]
fn initials_handle_non_ascii() {
    assert_eq!(initials("élodie ørsted"), "ÉØ");
}
