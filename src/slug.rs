//! URL slug generation

use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref APOSTROPHES: Regex = Regex::new(r"'+").unwrap();
    static ref NON_WORD: Regex = Regex::new(r"[^A-Za-z0-9_]+").unwrap();
}

/// Turn a display string into a lowercase, hyphen-delimited slug
///
/// Diacritics are decomposed away and any other non-ASCII character is
/// dropped, so the function never fails.
///
/// # Examples
/// ```
/// use guild_press::slugify;
/// assert_eq!(slugify("Eddie van Halen"), "eddie-van-halen");
/// assert_eq!(slugify("Crème Brûlée"), "creme-brulee");
/// ```
pub fn slugify(input: &str) -> String {
    let ascii: String = input.nfkd().filter(char::is_ascii).collect();
    let value = APOSTROPHES.replace_all(&ascii, "");
    let value = NON_WORD.replace_all(&value, " ");

    value.trim().to_ascii_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Eddie van Halen"), "eddie-van-halen");
        assert_eq!(slugify("Some String To Convert"), "some-string-to-convert");
    }

    #[test]
    fn test_slugify_strips_diacritics_and_non_ascii() {
        assert_eq!(slugify("Ångström café"), "angstrom-cafe");
        assert_eq!(slugify("日本 Rust"), "rust");
        assert_eq!(slugify("日本"), "");
    }

    #[test]
    fn test_slugify_apostrophes_and_punctuation() {
        assert_eq!(slugify("Don't Panic!"), "dont-panic");
        assert_eq!(slugify("  Hello,   World...  "), "hello-world");
        assert_eq!(slugify("Rust & Ruby: a tale"), "rust-ruby-a-tale");
    }

    #[test]
    fn test_slugify_keeps_underscores_and_digits() {
        assert_eq!(slugify("snake_case 42"), "snake_case-42");
        assert_eq!(slugify("_a_ '' ½ — b"), "_a_-12-b");
        assert_eq!(slugify("x__y 3½ “quoted” – dash"), "x__y-312-quoted-dash");
    }

    #[test]
    fn test_slugify_is_idempotent() {
        let inputs = [
            "Eddie van Halen",
            "Don't Panic!",
            "-leading and trailing-",
            "Crème Brûlée",
            "",
            "a--b",
            "  ",
            "_a_ '' ½ — b",
            "x__y 3½ “quoted” – dash",
            "Ünïcödé—mix_42",
            "__",
            "'''",
            "_-_ 1_2 ‘9’",
        ];
        for input in inputs {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "input: {:?}", input);
        }
    }
}
