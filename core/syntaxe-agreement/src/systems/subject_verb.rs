use syntaxe_protocol::{AgreementError, Block, BlockKind, FunctionTree, LexicalType, Number, Person};

/// Person agreement between the identified subject and verb.
///
/// Nominal subjects are third person: `ils` when the lead noun is plural,
/// `il` otherwise. Infinitive subjects always take `il`.
pub fn check_subject_verb(blocks: &[Block], tree: &FunctionTree) -> Option<AgreementError> {
    let subject = blocks.get(tree.subject?.index())?;
    let verb = blocks.get(tree.verb?.index())?.words.first()?;
    let verb_person = verb.person?;

    if subject.kind == BlockKind::InfinitiveGroup {
        if verb_person == Person::Il {
            return None;
        }
        return Some(AgreementError::InfinitiveSubject {
            infinitive: subject.words.first()?.text.clone(),
            verb: verb.text.clone(),
            verb_person,
        });
    }

    let lead = subject
        .words
        .iter()
        .find(|w| w.is(LexicalType::Noun) || w.is(LexicalType::Pronoun))?;

    let subject_person = match lead.lexical_type {
        LexicalType::Pronoun => lead.person?,
        _ if lead.number == Some(Number::Plural) => Person::Ils,
        _ => Person::Il,
    };

    (subject_person != verb_person).then(|| AgreementError::SubjectVerb {
        subject: lead.text.clone(),
        subject_person,
        verb: verb.text.clone(),
        verb_person,
    })
}
