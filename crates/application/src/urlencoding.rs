//! URL component encoding for links the server hands out

use std::fmt::Write;

/// Percent-encode a string for use as a single URL component
///
/// Keeps `A-Z`, `a-z`, `0-9` and `- _ . ! ~ * ' ( )`. Everything else,
/// including spaces, becomes `%XX` over its UTF-8 bytes.
pub fn encode_component(input: &str) -> String {
    let mut result = String::with_capacity(input.len() * 3);
    for c in input.chars() {
        match c {
            'a'..='z'
            | 'A'..='Z'
            | '0'..='9'
            | '-'
            | '_'
            | '.'
            | '!'
            | '~'
            | '*'
            | '\''
            | '('
            | ')' => result.push(c),
            _ => {
                let mut buf = [0; 4];
                for b in c.encode_utf8(&mut buf).as_bytes() {
                    let _ = write!(result, "%{b:02X}");
                }
            },
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_space_as_percent() {
        assert_eq!(encode_component("New York"), "New%20York");
    }

    #[test]
    fn encode_reserved_chars() {
        assert_eq!(encode_component("a&b=c/d?e#f"), "a%26b%3Dc%2Fd%3Fe%23f");
    }

    #[test]
    fn keep_unreserved_marks() {
        assert_eq!(encode_component("St. John's (old)!~*"), "St.%20John's%20(old)!~*");
    }

    #[test]
    fn encode_unicode() {
        assert_eq!(encode_component("Kraków"), "Krak%C3%B3w");
        assert_eq!(encode_component("東京"), "%E6%9D%B1%E4%BA%AC");
    }

    #[test]
    fn encode_empty() {
        assert_eq!(encode_component(""), "");
    }
}
