use itertools::Itertools;
use std::path::MAIN_SEPARATOR;

use crate::autoload::configuration::Configuration;
use crate::autoload::inflector;
use crate::autoload::NAMESPACE_SEPARATOR;

/// Builds the candidate relative paths a symbol name could live at, one per
/// configured prefix, all lowercased so the listing scan can compare them
/// without further case folding.
///
/// Returns an empty vector when the configuration requires namespaces and
/// the symbol name has fewer than two segments. Namespace segments are
/// joined verbatim: consecutive separators or a segment that repeats the
/// base filename are not collapsed or deduplicated.
pub fn generate(
    configuration: &Configuration,
    symbol_name: &str,
) -> Vec<String> {
    let mut transformed = symbol_name.to_string();
    if configuration.uses_snake_case {
        transformed = inflector::to_snake_case(&transformed);
    }
    if configuration.underscore_to_dash {
        transformed = inflector::underscore_to_dash(&transformed);
    }

    let prefixes = configuration.prefixes_or_default();

    if configuration.uses_namespaces {
        let mut segments: Vec<&str> =
            transformed.split(NAMESPACE_SEPARATOR).collect();
        if segments.len() < 2 {
            return vec![];
        }

        if configuration.strip_root_namespace {
            segments.remove(0);
        }

        let last_idx = segments.len() - 1;
        prefixes
            .iter()
            .map(|prefix| {
                let base_filename = format!("{}{}", prefix, segments[last_idx]);
                let relative_path = segments[..last_idx]
                    .iter()
                    .copied()
                    .chain(std::iter::once(base_filename.as_str()))
                    .join(&MAIN_SEPARATOR.to_string());
                format!("{}{}", relative_path, configuration.file_extension)
                    .to_lowercase()
            })
            .collect()
    } else {
        prefixes
            .iter()
            .map(|prefix| {
                format!(
                    "{}{}{}",
                    prefix, transformed, configuration.file_extension
                )
                .to_lowercase()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_symbol_is_a_bare_filename() {
        let configuration = Configuration::default();
        assert_eq!(generate(&configuration, "Foo"), vec!["foo.php"]);
    }

    #[test]
    fn test_one_candidate_per_prefix_in_order() {
        let configuration = Configuration::builder()
            .file_prefixes(["class-", "trait-"])
            .build();
        assert_eq!(
            generate(&configuration, "Foo"),
            vec!["class-foo.php", "trait-foo.php"]
        );
    }

    #[test]
    fn test_snake_case_and_dashes_apply_before_prefixing() {
        let configuration = Configuration::builder()
            .file_prefix("c-")
            .snake_case(true)
            .build();
        assert_eq!(generate(&configuration, "FooBar"), vec!["c-foo-bar.php"]);
    }

    #[test]
    fn test_custom_extension_is_appended_verbatim() {
        let configuration = Configuration::builder()
            .file_extension(".class.php")
            .build();
        assert_eq!(generate(&configuration, "Foo"), vec!["foo.class.php"]);
    }

    #[test]
    fn test_namespaced_symbol_becomes_a_relative_path() {
        let configuration = Configuration::builder().namespaces(false).build();
        assert_eq!(
            generate(&configuration, "Ns\\Sub\\Bar"),
            vec!["ns/sub/bar.php"]
        );
    }

    #[test]
    fn test_strip_root_drops_the_first_segment() {
        let configuration = Configuration::builder().namespaces(true).build();
        assert_eq!(
            generate(&configuration, "Ns\\Sub\\Bar"),
            vec!["sub/bar.php"]
        );
    }

    #[test]
    fn test_prefix_lands_on_the_base_filename_only() {
        let configuration = Configuration::builder()
            .namespaces(false)
            .file_prefix("class-")
            .build();
        assert_eq!(
            generate(&configuration, "Ns\\Foo"),
            vec!["ns/class-foo.php"]
        );
    }

    #[test]
    fn test_namespaced_mode_rejects_single_segment_names() {
        let configuration = Configuration::builder().namespaces(false).build();
        assert!(generate(&configuration, "Foo").is_empty());
    }

    #[test]
    fn test_strip_root_still_requires_two_segments() {
        // `Ns\Foo` with strip_root leaves a single segment, which is still a
        // valid candidate: the arity check happens before stripping.
        let configuration = Configuration::builder().namespaces(true).build();
        assert_eq!(generate(&configuration, "Ns\\Foo"), vec!["foo.php"]);
        assert!(generate(&configuration, "Foo").is_empty());
    }

    #[test]
    fn test_consecutive_separators_are_joined_verbatim() {
        let configuration = Configuration::builder().namespaces(false).build();
        assert_eq!(
            generate(&configuration, "Ns\\\\Bar"),
            vec!["ns//bar.php"]
        );
    }

    #[test]
    fn test_candidates_are_lowercase() {
        let configuration = Configuration::builder()
            .namespaces(false)
            .file_prefixes(["Class-"])
            .build();
        assert_eq!(
            generate(&configuration, "NS\\FooBar"),
            vec!["ns/class-foobar.php"]
        );
    }

    #[test]
    fn test_already_snake_case_name_is_unchanged() {
        let configuration = Configuration::builder().snake_case(false).build();
        assert_eq!(generate(&configuration, "foo_bar"), vec!["foo_bar.php"]);
    }
}
