//! Predicate selection: the single exactness × profile table
//!
//! | exactness | ma-only | default | original |
//! |-----------|---------|---------|----------|
//! | exact     | target  | target  | source   |
//! | related   | target  | source  | source   |
//!
//! Whenever the source property is chosen it is also declared
//! `rdfs:subPropertyOf` the target.

use mediaont_domain::vocab;
use mediaont_domain::{Exactness, Iri, Namespace, OutputProfile, Triple};

/// Which of the two candidate properties a value is emitted with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateChoice {
    /// The `ma:` target property
    Target,

    /// The source-vocabulary property
    Source,
}

/// Pick the property kind for a field; a pure function of its two inputs
pub fn select(exactness: Exactness, profile: OutputProfile) -> PredicateChoice {
    match (exactness, profile) {
        (_, OutputProfile::MaOnly) => PredicateChoice::Target,
        (Exactness::Exact, OutputProfile::Default) => PredicateChoice::Target,
        (Exactness::Related, OutputProfile::Default) => PredicateChoice::Source,
        (_, OutputProfile::Original) => PredicateChoice::Source,
    }
}

/// A predicate plus the axiom that has to accompany it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPredicate {
    /// Predicate to emit values with
    pub predicate: Iri,

    /// `source rdfs:subPropertyOf target`, when the source property is used
    pub axiom: Option<Triple>,
}

/// Resolve the predicate for `source_key` mapped onto the `ma:` property
/// `target`
pub fn resolve(
    target: &str,
    exactness: Exactness,
    source_key: &str,
    vocabulary: &Namespace,
    profile: OutputProfile,
) -> ResolvedPredicate {
    let target = Namespace::ma().term(target);
    match select(exactness, profile) {
        PredicateChoice::Target => ResolvedPredicate {
            predicate: target,
            axiom: None,
        },
        PredicateChoice::Source => {
            let source = vocabulary.term(source_key);
            ResolvedPredicate {
                axiom: Some(Triple::new(
                    source.clone(),
                    vocab::rdfs_sub_property_of(),
                    target,
                )),
                predicate: source,
            }
        }
    }
}

/// Source key of a paired value: the field key suffixed with its role label
///
/// Characters that cannot appear in a prefixed name are replaced by `_`; an
/// empty role falls back to the bare field key.
pub fn paired_source_key(key: &str, role: &str) -> String {
    let role: String = role
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    let role = role.trim_matches('_');
    if role.is_empty() {
        key.to_string()
    } else {
        format!("{}-{}", key, role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_table() {
        use Exactness::*;
        use OutputProfile::*;
        use PredicateChoice::*;

        let table = [
            (Exact, MaOnly, Target),
            (Exact, Default, Target),
            (Exact, Original, Source),
            (Related, MaOnly, Target),
            (Related, Default, Source),
            (Related, Original, Source),
        ];
        for (exactness, profile, expected) in table {
            assert_eq!(select(exactness, profile), expected, "{:?} × {}", exactness, profile);
        }
    }

    #[test]
    fn test_resolve_target() {
        let resolved = resolve(
            "title",
            Exactness::Exact,
            "TIT2",
            &Namespace::id3(),
            OutputProfile::Default,
        );
        assert_eq!(resolved.predicate.as_str(), "http://www.w3.org/ns/ma-ont#title");
        assert!(resolved.axiom.is_none());
    }

    #[test]
    fn test_resolve_source_declares_sub_property() {
        let resolved = resolve(
            "title",
            Exactness::Exact,
            "TIT2",
            &Namespace::id3(),
            OutputProfile::Original,
        );
        assert_eq!(resolved.predicate, Namespace::id3().term("TIT2"));

        let axiom = resolved.axiom.unwrap();
        assert_eq!(axiom.predicate, vocab::rdfs_sub_property_of());
        assert_eq!(axiom.object, Namespace::ma().term("title").into());
    }

    #[test]
    fn test_paired_source_key() {
        assert_eq!(paired_source_key("TIPL", "producer"), "TIPL-producer");
        assert_eq!(paired_source_key("TMCL", "lead vocals"), "TMCL-lead_vocals");
        assert_eq!(paired_source_key("TMCL", " (guitar) "), "TMCL-guitar");
        assert_eq!(paired_source_key("TIPL", "  "), "TIPL");
    }
}
