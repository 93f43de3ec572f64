//! Symbol name normalization helpers.
//!
//! The host runtime hands us symbol names in whatever case convention the
//! codebase uses (typically PascalCase). Filenames on disk may instead be
//! snake_case or dash-separated, so before building candidate paths we
//! optionally rewrite the symbol name to match.

/// Inserts an underscore at each word boundary of a camelCase or PascalCase
/// name, e.g. `FooBar` becomes `Foo_Bar`. Case is preserved; callers
/// lowercase the final candidate string in one place.
///
/// A boundary exists before an ASCII uppercase letter that follows another
/// ASCII letter and is itself followed by an ASCII lowercase letter. The
/// trailing-lowercase requirement keeps acronym runs intact: `HTTPServer`
/// becomes `HTTP_Server`, not `H_T_T_P_Server`. An already-snake_case name
/// has no such boundary and passes through unchanged.
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut result = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        let follows_letter = i > 0 && chars[i - 1].is_ascii_alphabetic();
        let starts_word = c.is_ascii_uppercase()
            && matches!(chars.get(i + 1), Some(next) if next.is_ascii_lowercase());

        if follows_letter && starts_word {
            result.push('_');
        }
        result.push(c);
    }

    result
}

pub fn underscore_to_dash(name: &str) -> String {
    name.replace('_', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inserts_boundaries_between_words() {
        assert_eq!(to_snake_case("FooBar"), "Foo_Bar");
        assert_eq!(to_snake_case("FooBarBaz"), "Foo_Bar_Baz");
        assert_eq!(to_snake_case("fooBar"), "foo_Bar");
    }

    #[test]
    fn test_does_not_split_acronym_runs() {
        assert_eq!(to_snake_case("HTTPServer"), "HTTP_Server");
        assert_eq!(to_snake_case("XMLHTTPRequest"), "XMLHTTP_Request");
        assert_eq!(to_snake_case("ABC"), "ABC");
    }

    #[test]
    fn test_already_snake_case_is_unchanged() {
        assert_eq!(to_snake_case("foo_bar"), "foo_bar");
        assert_eq!(to_snake_case("foo"), "foo");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_leading_uppercase_gets_no_separator() {
        assert_eq!(to_snake_case("Foo"), "Foo");
        assert_eq!(to_snake_case("A_FooBar"), "A_Foo_Bar");
    }

    #[test]
    fn test_digits_are_not_word_starts() {
        // A digit before an uppercase letter is not an ASCII letter, so no
        // boundary is inserted there.
        assert_eq!(to_snake_case("Foo2Bar"), "Foo2Bar");
        assert_eq!(to_snake_case("Version2Beta"), "Version2Beta");
    }

    #[test]
    fn test_underscore_to_dash() {
        assert_eq!(underscore_to_dash("foo_bar_baz"), "foo-bar-baz");
        assert_eq!(underscore_to_dash("no-underscores"), "no-underscores");
    }
}
