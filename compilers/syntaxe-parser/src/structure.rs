//! Global sentence structure: block-kind sequences against the template grammar.

use syntaxe_protocol::{Block, BlockKind, StructureError};

use syntaxe_protocol::BlockKind::{
    AdjectiveGroup as GAdj, AdverbGroup as GAdv, InfinitiveGroup as GInf, NounGroup as GN, PrepGroup as GP,
    PronounGroup as GPron, Verb,
};

/// Admissible skeletons of a simple declarative sentence.
pub static TEMPLATES: &[&[BlockKind]] = &[
    // Le chien dort / Il dort
    &[GN, Verb],
    &[GPron, Verb],
    // Le chien mange l'os
    &[GN, Verb, GN],
    &[GPron, Verb, GN],
    // Le chien joue dans le jardin
    &[GN, Verb, GP],
    &[GPron, Verb, GP],
    // Le chien semble heureux
    &[GN, Verb, GAdj],
    &[GPron, Verb, GAdj],
    // Il aime manger
    &[GN, Verb, GInf],
    &[GPron, Verb, GInf],
    // Le chien court vite
    &[GN, Verb, GAdv],
    &[GPron, Verb, GAdv],
    // Soudain arrive le train (inverted subject)
    &[GAdv, Verb, GN],
    &[GAdv, Verb, GPron],
    // Manger est bon
    &[GInf, Verb],
    &[GInf, Verb, GN],
    &[GInf, Verb, GAdj],
    &[GInf, Verb, GP],
];

/// Joined kind tags, e.g. `GN-verbe`.
pub fn sequence_key(blocks: &[Block]) -> String {
    blocks.iter().map(|b| b.kind.tag()).collect::<Vec<_>>().join("-")
}

fn detail(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|b| format!("{}({})", b.kind, b.text()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A lone personal subject pronoun.
fn is_subject_pronoun(block: &Block) -> bool {
    matches!(block.kind, GN | GPron) && matches!(block.words.as_slice(), [word] if word.is_personal_subject())
}

/// Checks the two ordering prohibitions, then requires an exact template match.
pub fn match_structure(blocks: &[Block]) -> Result<(), StructureError> {
    if blocks.first().map_or(false, |b| b.kind == Verb) {
        return Err(StructureError::VerbFirst);
    }

    for pair in blocks.windows(2) {
        if let [current, next] = pair {
            if is_subject_pronoun(current) && next.kind == GN {
                return Err(StructureError::PronounBeforeNounGroup {
                    pronoun: current.text(),
                    group: next.text(),
                });
            }
        }
    }

    let kinds: Vec<BlockKind> = blocks.iter().map(|b| b.kind).collect();
    if TEMPLATES.iter().any(|template| *template == kinds.as_slice()) {
        return Ok(());
    }

    Err(StructureError::UnknownSequence { sequence: sequence_key(blocks), detail: detail(blocks) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syntaxe_protocol::{LexicalType, Subtype, WordToken};

    fn blocks_of<'a>(kinds: &[BlockKind], word: &'a WordToken) -> Vec<Block<'a>> {
        kinds.iter().map(|&kind| Block::new(kind, word)).collect()
    }

    #[test]
    fn test_every_template_matches() {
        let w = WordToken::new(0, "x", LexicalType::Other);
        for template in TEMPLATES {
            assert_eq!(match_structure(&blocks_of(template, &w)), Ok(()), "{:?}", template);
        }
    }

    #[test]
    fn test_exact_match_only() {
        let w = WordToken::new(0, "x", LexicalType::Other);
        // Prefix of a template
        assert!(match_structure(&blocks_of(&[GN], &w)).is_err());
        // Template plus a trailing block
        assert!(match_structure(&blocks_of(&[GN, Verb, GN, GAdv], &w)).is_err());
    }

    #[test]
    fn test_verb_first() {
        let w = WordToken::new(0, "x", LexicalType::Other);
        assert_eq!(match_structure(&blocks_of(&[Verb, GN], &w)), Err(StructureError::VerbFirst));
        assert_eq!(match_structure(&blocks_of(&[Verb], &w)), Err(StructureError::VerbFirst));
    }

    #[test]
    fn test_subject_pronoun_before_noun_group() {
        // "il chien"
        let il = WordToken::new(0, "il", LexicalType::Pronoun).with_subtype(Subtype::PersonalSubject);
        let chien = WordToken::new(1, "chien", LexicalType::Noun).with_subtype(Subtype::Common);
        let blocks = vec![Block::new(GPron, &il), Block::new(GN, &chien)];

        let err = match_structure(&blocks).unwrap_err();
        assert_eq!(err, StructureError::PronounBeforeNounGroup { pronoun: "il".into(), group: "chien".into() });
        assert!(err.to_string().contains("Il manque probablement un verbe"));
    }

    #[test]
    fn test_other_pronouns_fall_through_to_templates() {
        // "cela chien": only subject pronouns are prohibited, this just matches no template
        let cela = WordToken::new(0, "cela", LexicalType::Pronoun).with_subtype(Subtype::Demonstrative);
        let chien = WordToken::new(1, "chien", LexicalType::Noun);
        let blocks = vec![Block::new(GPron, &cela), Block::new(GN, &chien)];

        assert_eq!(
            match_structure(&blocks),
            Err(StructureError::UnknownSequence {
                sequence: "GPron-GN".into(),
                detail: "GPron(cela) GN(chien)".into(),
            })
        );
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(
            match_structure(&[]),
            Err(StructureError::UnknownSequence { sequence: String::new(), detail: String::new() })
        );
    }
}
