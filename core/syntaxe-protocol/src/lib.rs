pub mod ids;
pub mod morphology;

// Re-export core types for convenience
pub use ids::{BlockId, TokenId};
pub use morphology::*;

pub mod model;
pub use model::*;

pub mod error;
pub use error::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn chien() -> WordToken {
        WordToken::new(2, "chien", LexicalType::Noun)
            .with_subtype(Subtype::Common)
            .with_gender(Gender::Masculine)
            .with_number(Number::Singular)
    }

    #[test]
    fn test_id_layout() {
        assert_eq!(core::mem::size_of::<TokenId>(), 4);
        assert_eq!(BlockId::at(3).index(), 3);
    }

    #[test]
    fn test_lexical_sets() {
        assert!(LexicalSet::NOUN_GROUP.admits(LexicalType::Determiner));
        assert!(LexicalSet::NOUN_GROUP.admits(LexicalType::Adjective));
        assert!(!LexicalSet::NOUN_GROUP.admits(LexicalType::Pronoun));
    }

    #[test]
    fn test_block_queries() {
        let le = WordToken::new(1, "Le", LexicalType::Determiner);
        let chien = chien();
        let mut block = Block::new(BlockKind::NounGroup, &le);
        block.absorb(Block::new(BlockKind::AdjectiveGroup, &chien));

        assert_eq!(block.kind, BlockKind::NounGroup);
        assert_eq!(block.text(), "Le chien");
        assert_eq!(block.position(LexicalType::Noun), Some(1));
        assert_eq!(block.first_id(), Some(TokenId(1)));
        assert_eq!(block.last_id(), Some(TokenId(2)));
        assert!(std::ptr::eq(block.find(LexicalType::Noun).unwrap(), &chien));
    }

    #[test]
    fn test_error_tags_and_messages() {
        let err: SentenceError = CompositionError::DeterminerAfterNoun { group: "chien le".into() }.into();
        assert_eq!(err.tag(), "GN-Ordre");
        assert!(err.to_string().starts_with("[GN-Ordre]"));

        let err: SentenceError = AgreementError::DeterminerNumber {
            determiner: "Le".into(),
            determiner_number: Number::Singular,
            noun: "chiens".into(),
            noun_number: Number::Plural,
        }
        .into();
        assert_eq!(err.tag(), "Accord-GN");
        assert!(err.to_string().contains("(singulier)"));
        assert!(err.to_string().contains("(pluriel)"));

        let err: SentenceError = StructureError::VerbFirst.into();
        assert_eq!(err.tag(), "Structure");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_word_bank_aliases() {
        let json = r#"{"id": 7, "text": "chiens", "type": "nom", "subtype": "commun",
                       "gender": "masculin", "number": "pluriel"}"#;
        let token: WordToken = serde_json::from_str(json).expect("Failed to decode token");

        assert_eq!(token.lexical_type, LexicalType::Noun);
        assert!(token.is_common_noun());
        assert_eq!(token.number, Some(Number::Plural));
        assert_eq!(token.person, None);

        let english = r#"{"id": 1, "text": "il", "type": "pronoun", "subtype": "personal-subject", "person": "il"}"#;
        let token: WordToken = serde_json::from_str(english).expect("Failed to decode token");
        assert!(token.is_personal_subject());
        assert_eq!(token.person, Some(Person::Il));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_errors_serialize_by_family() {
        let err = SentenceError::from(StructureError::VerbFirst);
        assert_eq!(serde_json::to_value(&err).unwrap(), serde_json::json!({"structure": "verb-first"}));

        let err = SentenceError::from(ElisionError::MissingElision {
            word: "le".into(),
            elided: "l'".into(),
            next: "école".into(),
        });
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            serde_json::json!({"elision": {"missing-elision": {"word": "le", "elided": "l'", "next": "école"}}})
        );
    }

    #[test]
    fn test_block_id_saturates() {
        assert_eq!(BlockId::at(7), BlockId(7));
        assert_eq!(BlockId::at(u32::MAX as usize), BlockId(u32::MAX));
        #[cfg(target_pointer_width = "64")]
        assert_eq!(BlockId::at(u32::MAX as usize + 1), BlockId(u32::MAX));
    }
}
