use syntaxe_protocol::{AgreementError, Block, BlockKind, Gender, LexicalType, Number, WordToken};

use super::mismatch;

/// Gender and number agreement inside noun groups of more than one word.
pub fn check_internal_agreement(blocks: &[Block]) -> Vec<AgreementError> {
    let mut errors = Vec::new();

    for group in blocks.iter().filter(|b| b.kind == BlockKind::NounGroup && b.words.len() > 1) {
        let determiner = group.find(LexicalType::Determiner);
        let noun = group.find(LexicalType::Noun);

        // 1. Determiner-Noun
        if let (Some(determiner), Some(noun)) = (determiner, noun) {
            errors.extend(check_determiner(determiner, noun));
        }

        // 2. Adjective-Noun (épithètes)
        if let Some(noun) = noun {
            for adjective in group.words.iter().filter(|w| w.is(LexicalType::Adjective)) {
                errors.extend(check_adjective(adjective, noun));
            }
        }
    }

    errors
}

fn check_determiner(determiner: &WordToken, noun: &WordToken) -> Vec<AgreementError> {
    let mut errors = Vec::new();

    if let Some((determiner_number, noun_number)) = mismatch(determiner.number, noun.number) {
        errors.push(AgreementError::DeterminerNumber {
            determiner: determiner.text.clone(),
            determiner_number,
            noun: noun.text.clone(),
            noun_number,
        });
    }

    // Plural determiners do not mark gender.
    if determiner.number == Some(Number::Singular) {
        if let Some((determiner_gender, noun_gender)) = mismatch(determiner.gender, noun.gender) {
            if !determiner_gender.is_flexible() && noun_gender != Gender::Epicene {
                errors.push(AgreementError::DeterminerGender {
                    determiner: determiner.text.clone(),
                    determiner_gender,
                    noun: noun.text.clone(),
                    noun_gender,
                });
            }
        }
    }

    errors
}

fn check_adjective(adjective: &WordToken, noun: &WordToken) -> Vec<AgreementError> {
    let mut errors = Vec::new();

    if let Some((adjective_number, noun_number)) = mismatch(adjective.number, noun.number) {
        errors.push(AgreementError::AdjectiveNumber {
            adjective: adjective.text.clone(),
            adjective_number,
            noun: noun.text.clone(),
            noun_number,
        });
    }

    if let Some((adjective_gender, noun_gender)) = mismatch(adjective.gender, noun.gender) {
        if noun_gender != Gender::Epicene {
            errors.push(AgreementError::AdjectiveGender {
                adjective: adjective.text.clone(),
                adjective_gender,
                noun: noun.text.clone(),
                noun_gender,
            });
        }
    }

    errors
}
