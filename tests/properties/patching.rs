//! Property tests for the reference-directive patch rule.

use proptest::prelude::*;

use typepack::patch_definition_file;

/// Lines that cannot contain a reference-path directive: the character
/// class has no `/` or `"`, so the directive prefix cannot appear.
fn plain_line() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 _=:;{}()*,.<>'-]{0,60}").unwrap()
}

fn directive_line() -> impl Strategy<Value = String> {
    ("[a-z][a-z0-9-]{0,12}", "[a-z0-9.-]{1,20}")
        .prop_map(|(name, rest)| format!("/// <reference path=\"../{}/{}\" />", name, rest))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: text without directives passes through byte-for-byte.
    #[test]
    fn property_plain_text_round_trips(
        lines in proptest::collection::vec(plain_line(), 0..12)
    ) {
        let input = lines.join("\n");
        prop_assert_eq!(patch_definition_file(&input), input);
    }

    /// PROPERTY: patching never changes the number of lines.
    #[test]
    fn property_line_count_is_preserved(
        plain in proptest::collection::vec(plain_line(), 0..6),
        directive in directive_line()
    ) {
        let mut lines = plain;
        lines.push(directive);
        let input = lines.join("\n");

        let output = patch_definition_file(&input);
        prop_assert_eq!(output.lines().count(), input.lines().count());
    }

    /// PROPERTY: patching is idempotent - a patched file has no remaining
    /// sibling-path directives to rewrite.
    #[test]
    fn property_patching_is_idempotent(
        before in proptest::collection::vec(plain_line(), 0..4),
        directive in directive_line(),
        after in proptest::collection::vec(plain_line(), 0..4)
    ) {
        let mut lines = before;
        lines.push(directive);
        lines.extend(after);
        let input = lines.join("\n");

        let once = patch_definition_file(&input);
        let twice = patch_definition_file(&once);
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: a lone directive always rewrites to a types reference
    /// naming the sibling package.
    #[test]
    fn property_directive_rewrites_to_types(
        name in "[a-z][a-z0-9-]{0,12}",
        rest in "[a-z0-9.-]{1,20}"
    ) {
        let input = format!("/// <reference path=\"../{}/{}\" />", name, rest);
        let expected = format!("/// <reference types=\"{}\" />", name);
        prop_assert_eq!(patch_definition_file(&input), expected);
    }
}
