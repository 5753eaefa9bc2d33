//! Display-name ordering for library collections.
//!
//! All five entity kinds sort by display name, case-insensitively. Song and
//! album names additionally drop a leading English article ("The ", "A ")
//! before comparing, so "The Wall" files under W. Names are lowercased with
//! Unicode default casing, which is independent of the process locale and
//! therefore stable across devices.
//!
//! The comparison carries a quirk: the branch meant to push non-alphabetic
//! names to the end classifies a name as alphabetic only when the *whole*
//! name is a single lowercase ASCII letter, so for ordinary multi-character
//! names the branch never fires and the order is plainly lexicographic
//! (digits before letters). Shipped libraries have sorted this way for
//! years, so [`LetterRule::SingleLetterName`] keeps that behavior and stays
//! the default; [`LetterRule::LeadingLetter`] applies the classification to
//! the first character instead, which moves "1999" after "Zzz".

use std::cmp::Ordering;

/// Selects how the letter-partition branch classifies a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterRule {
    /// A name is alphabetic only when it is exactly one lowercase ASCII
    /// letter. Default; preserves the established shipped ordering.
    #[default]
    SingleLetterName,
    /// A name is alphabetic when its first character is a lowercase ASCII
    /// letter; names that do not lead with a letter sort after those that do.
    LeadingLetter,
}

/// Build the key a display name is ordered by: lowercased, with the leading
/// article dropped when `strip_articles` is set.
pub fn sort_key(name: &str, strip_articles: bool) -> String {
    let lowered = name.to_lowercase();

    if strip_articles {
        if let Some(rest) = lowered.strip_prefix("the ") {
            return rest.to_string();
        }
        if let Some(rest) = lowered.strip_prefix("a ") {
            return rest.to_string();
        }
    }

    lowered
}

/// Compare two already-normalized keys under the given letter rule.
pub fn compare_keys(a: &str, b: &str, rule: LetterRule) -> Ordering {
    match rule {
        LetterRule::SingleLetterName => {
            if !is_single_letter(a) && is_single_letter(b) {
                return b.cmp(a);
            }
            a.cmp(b)
        }
        LetterRule::LeadingLetter => match (leads_with_letter(a), leads_with_letter(b)) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => a.cmp(b),
        },
    }
}

/// Compare two display names: normalize, then order the keys.
pub fn compare_names(a: &str, b: &str, strip_articles: bool, rule: LetterRule) -> Ordering {
    compare_keys(
        &sort_key(a, strip_articles),
        &sort_key(b, strip_articles),
        rule,
    )
}

fn is_single_letter(s: &str) -> bool {
    s.len() == 1 && s.as_bytes()[0].is_ascii_lowercase()
}

fn leads_with_letter(s: &str) -> bool {
    s.bytes().next().map_or(false, |b| b.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_lowercases() {
        assert_eq!(sort_key("LOUD", false), "loud");
        assert_eq!(sort_key("MiXeD Case", false), "mixed case");
    }

    #[test]
    fn test_sort_key_strips_articles() {
        assert_eq!(sort_key("The Wall", true), "wall");
        assert_eq!(sort_key("A Day", true), "day");
        // "An" is not stripped; only "the " and "a " are recognized.
        assert_eq!(sort_key("An Evening", true), "an evening");
    }

    #[test]
    fn test_sort_key_article_stripping_is_case_insensitive() {
        // Lowercasing happens before the prefix check, so any casing of the
        // article is stripped.
        assert_eq!(sort_key("THE WALL", true), "wall");
        assert_eq!(sort_key("a day", true), "day");
    }

    #[test]
    fn test_sort_key_keeps_articles_when_disabled() {
        assert_eq!(sort_key("The Wall", false), "the wall");
        assert_eq!(sort_key("A Day", false), "a day");
    }

    #[test]
    fn test_sort_key_only_first_article_form_applies() {
        // "the " wins over "a " when both could match; the remainder is not
        // re-checked for a second article.
        assert_eq!(sort_key("The A Team", true), "a team");
    }

    #[test]
    fn test_equal_stripped_forms_compare_equal() {
        assert_eq!(
            compare_names("The Beatles", "BEATLES", true, LetterRule::SingleLetterName),
            Ordering::Equal
        );
        assert_eq!(
            compare_names("A Day", "day", true, LetterRule::SingleLetterName),
            Ordering::Equal
        );
    }

    #[test]
    fn test_article_stripping_applies_before_comparison() {
        // "The Beatles Song" compares as "beatles song" against "zzz".
        assert_eq!(
            compare_names("The Beatles Song", "Zzz", true, LetterRule::SingleLetterName),
            Ordering::Less
        );
    }

    #[test]
    fn test_multi_character_names_compare_lexicographically() {
        // Under the default rule no multi-character name counts as
        // alphabetic, so digits order before letters.
        assert_eq!(
            compare_names("1999", "apple", false, LetterRule::SingleLetterName),
            Ordering::Less
        );
        assert_eq!(
            compare_names("apple", "banana", false, LetterRule::SingleLetterName),
            Ordering::Less
        );
    }

    #[test]
    fn test_single_letter_name_lands_after_when_compared_against() {
        // The partition branch fires only when the right-hand side is a lone
        // letter: the lone letter is placed after the longer name.
        assert_eq!(
            compare_keys("banana", "a", LetterRule::SingleLetterName),
            Ordering::Less
        );
        assert_eq!(
            compare_keys("1", "b", LetterRule::SingleLetterName),
            Ordering::Greater
        );
    }

    #[test]
    fn test_leading_letter_rule_partitions() {
        assert_eq!(
            compare_keys("apple", "1999", LetterRule::LeadingLetter),
            Ordering::Less
        );
        assert_eq!(
            compare_keys("1999", "apple", LetterRule::LeadingLetter),
            Ordering::Greater
        );
        // Within a partition the order is lexicographic.
        assert_eq!(
            compare_keys("1999", "2001", LetterRule::LeadingLetter),
            Ordering::Less
        );
        assert_eq!(
            compare_keys("apple", "banana", LetterRule::LeadingLetter),
            Ordering::Less
        );
    }

    #[test]
    fn test_leading_letter_rule_is_antisymmetric() {
        let names = ["apple", "banana", "1999", "2001", "a", "z"];
        for x in names {
            for y in names {
                let xy = compare_keys(x, y, LetterRule::LeadingLetter);
                let yx = compare_keys(y, x, LetterRule::LeadingLetter);
                assert_eq!(xy, yx.reverse(), "asymmetry between {x:?} and {y:?}");
            }
        }
    }

    #[test]
    fn test_default_rule_total_order_on_multi_character_names() {
        // For realistic (multi-character) names the default rule degenerates
        // to plain lexicographic order, which is transitive and antisymmetric.
        let names = ["arcade", "1999", "banana", "zz top", "echoes"];
        for x in names {
            for y in names {
                let xy = compare_keys(x, y, LetterRule::SingleLetterName);
                let yx = compare_keys(y, x, LetterRule::SingleLetterName);
                assert_eq!(xy, yx.reverse(), "asymmetry between {x:?} and {y:?}");
                for z in names {
                    if compare_keys(x, y, LetterRule::SingleLetterName) != Ordering::Greater
                        && compare_keys(y, z, LetterRule::SingleLetterName) != Ordering::Greater
                    {
                        assert_ne!(
                            compare_keys(x, z, LetterRule::SingleLetterName),
                            Ordering::Greater,
                            "transitivity broken for {x:?} {y:?} {z:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_locale_independent_lowercasing() {
        // Unicode default casing maps 'I' to 'i' regardless of process
        // locale; there is no dotless-i special case.
        assert_eq!(sort_key("IRON MAIDEN", false), "iron maiden");
    }
}
