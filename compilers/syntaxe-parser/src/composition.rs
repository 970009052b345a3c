use syntaxe_protocol::{Block, BlockKind, CompositionError, LexicalSet, LexicalType};

/// Words that introduce a complément du nom inside a noun group.
pub const COMPLEMENT_PREPOSITIONS: [&str; 3] = ["à", "de", "en"];

/// Word classes allowed right after a complement preposition.
const COMPLEMENT_HEADS: LexicalSet = LexicalSet::NOUN
    .union(LexicalSet::DETERMINER)
    .union(LexicalSet::PRONOUN)
    .union(LexicalSet::VERB)
    .union(LexicalSet::ADVERB);

pub fn is_complement_preposition(text: &str) -> bool {
    COMPLEMENT_PREPOSITIONS.contains(&text)
}

/// Checks that every noun group is structurally complete.
pub fn check_composition(blocks: &[Block]) -> Vec<CompositionError> {
    blocks
        .iter()
        .filter(|b| b.kind == BlockKind::NounGroup)
        .flat_map(check_noun_group)
        .collect()
}

fn check_noun_group(group: &Block) -> Vec<CompositionError> {
    let mut errors = Vec::new();

    let common_noun = group.words.iter().find(|w| w.is_common_noun());
    let has_proper_noun = group.words.iter().any(|w| w.is_proper_noun());
    let determiner = group.position(LexicalType::Determiner);

    if let Some(noun) = common_noun {
        if determiner.is_none() && !has_proper_noun {
            errors.push(CompositionError::MissingDeterminer { noun: noun.text.clone() });
        }
    }

    if let [only] = group.words.as_slice() {
        if only.is(LexicalType::Determiner) {
            errors.push(CompositionError::LoneDeterminer { determiner: only.text.clone() });
        }
    }

    if common_noun.is_none() && !has_proper_noun {
        errors.push(CompositionError::MissingNoun { group: group.text() });
    }

    if let (Some(determiner), Some(noun)) = (determiner, group.position(LexicalType::Noun)) {
        if determiner > noun {
            errors.push(CompositionError::DeterminerAfterNoun { group: group.text() });
        }
    }

    let complement = group
        .words
        .iter()
        .position(|w| is_complement_preposition(&w.text))
        .filter(|&index| index > 0);

    if let Some(index) = complement {
        let preposition = &group.words[index].text;
        let before = group.words[index - 1];

        if !before.is(LexicalType::Noun) {
            errors.push(CompositionError::ComplementWithoutNoun {
                preposition: preposition.clone(),
                found: before.lexical_type,
            });
        }

        let well_formed = group
            .words
            .get(index + 1)
            .map_or(false, |after| COMPLEMENT_HEADS.admits(after.lexical_type));

        if !well_formed {
            errors.push(CompositionError::MalformedComplement { preposition: preposition.clone() });
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use syntaxe_protocol::{Subtype, WordToken};

    fn det(id: u32, text: &str) -> WordToken {
        WordToken::new(id, text, LexicalType::Determiner)
    }

    fn common(id: u32, text: &str) -> WordToken {
        WordToken::new(id, text, LexicalType::Noun).with_subtype(Subtype::Common)
    }

    fn proper(id: u32, text: &str) -> WordToken {
        WordToken::new(id, text, LexicalType::Noun).with_subtype(Subtype::Proper)
    }

    fn check(words: &[WordToken]) -> Vec<CompositionError> {
        check_composition(&[Block { kind: BlockKind::NounGroup, words: words.iter().collect() }])
    }

    #[test]
    fn test_well_formed_groups() {
        assert!(check(&[det(0, "le"), common(1, "chien")]).is_empty());
        assert!(check(&[proper(0, "Paul")]).is_empty());
        // "la maison de Paul"
        assert!(check(&[
            det(0, "la"),
            common(1, "maison"),
            WordToken::new(2, "de", LexicalType::Preposition),
            proper(3, "Paul"),
        ])
        .is_empty());
    }

    #[test]
    fn test_common_noun_needs_determiner() {
        let errors = check(&[common(0, "chien")]);
        assert_eq!(errors, vec![CompositionError::MissingDeterminer { noun: "chien".into() }]);
        assert_eq!(errors[0].tag(), "GN-Comp");
    }

    #[test]
    fn test_lone_determiner() {
        let errors = check(&[det(0, "le")]);
        assert_eq!(
            errors,
            vec![
                CompositionError::LoneDeterminer { determiner: "le".into() },
                CompositionError::MissingNoun { group: "le".into() },
            ]
        );
    }

    #[test]
    fn test_missing_noun() {
        // "le grand"
        let errors = check(&[det(0, "le"), WordToken::new(1, "grand", LexicalType::Adjective)]);
        assert_eq!(errors, vec![CompositionError::MissingNoun { group: "le grand".into() }]);
    }

    #[test]
    fn test_determiner_order() {
        // "chien le": also lacks a determiner before the noun, but one is present
        let errors = check(&[common(0, "chien"), det(1, "le")]);
        assert_eq!(errors, vec![CompositionError::DeterminerAfterNoun { group: "chien le".into() }]);
        assert_eq!(errors[0].tag(), "GN-Ordre");
    }

    #[test]
    fn test_complement_must_follow_noun() {
        // "le grand de chien"
        let errors = check(&[
            det(0, "le"),
            WordToken::new(1, "grand", LexicalType::Adjective),
            WordToken::new(2, "de", LexicalType::Preposition),
            common(3, "chien"),
        ]);
        assert_eq!(
            errors,
            vec![CompositionError::ComplementWithoutNoun { preposition: "de".into(), found: LexicalType::Adjective }]
        );
        assert!(errors[0].to_string().contains("pas un \"adjectif\""));
    }

    #[test]
    fn test_complement_needs_head() {
        // "la tasse à" / "la tasse à rouge"
        let dangling = check(&[det(0, "la"), common(1, "tasse"), WordToken::new(2, "à", LexicalType::Preposition)]);
        assert_eq!(dangling, vec![CompositionError::MalformedComplement { preposition: "à".into() }]);

        let adjective = check(&[
            det(0, "la"),
            common(1, "tasse"),
            WordToken::new(2, "à", LexicalType::Preposition),
            WordToken::new(3, "rouge", LexicalType::Adjective),
        ]);
        assert_eq!(adjective, vec![CompositionError::MalformedComplement { preposition: "à".into() }]);
        assert_eq!(adjective[0].tag(), "GN-C.N");
    }

    #[test]
    fn test_only_noun_groups_checked() {
        let le = det(0, "le");
        let blocks = [Block::new(BlockKind::PrepGroup, &le)];
        assert!(check_composition(&blocks).is_empty());
    }
}
