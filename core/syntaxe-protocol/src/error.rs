//! Diagnostics reported to the learner.
//!
//! Every check reports values, never panics. `Display` renders the French
//! message shown under the sentence; `tag()` gives the short family label.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::Serialize as SerdeSerialize;

use crate::morphology::{Gender, LexicalType, Number, Person};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ElisionError {
    /// An elided form (l', j'...) placed before a consonant.
    #[error("Erreur d'élision : La forme élidée \"{word}\" doit être utilisée devant un mot commençant par une voyelle ou un 'h' muet.")]
    ElidedBeforeConsonant { word: String },

    /// A full clitic (le, je...) placed before a vowel.
    #[error("Erreur d'élision : Le mot \"{word}\" doit être élidé (ex: \"{elided}\") devant un mot commençant par une voyelle comme \"{next}\".")]
    MissingElision { word: String, elided: String, next: String },
}

/// Malformed noun groups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CompositionError {
    #[error("[GN-Comp] Le nom commun \"{noun}\" doit être accompagné d'un déterminant (ex: \"les oiseaux\").")]
    MissingDeterminer { noun: String },

    #[error("[GN-Comp] Le déterminant \"{determiner}\" est incomplet. Il doit être suivi d'un nom.")]
    LoneDeterminer { determiner: String },

    #[error("[GN-Comp] Le groupe nominal \"{group}\" est incomplet. Il manque probablement un nom.")]
    MissingNoun { group: String },

    #[error("[GN-Ordre] Dans le groupe nominal \"{group}\", le déterminant doit être placé avant le nom.")]
    DeterminerAfterNoun { group: String },

    #[error("[GN-C.N] La préposition \"{preposition}\" doit compléter un nom, pas un \"{found}\".")]
    ComplementWithoutNoun { preposition: String, found: LexicalType },

    #[error("[GN-C.N] La préposition \"{preposition}\" doit être suivie d'un groupe nominal, d'un pronom, d'un verbe à l'infinitif ou d'un adverbe.")]
    MalformedComplement { preposition: String },
}

impl CompositionError {
    pub fn tag(&self) -> &'static str {
        match self {
            CompositionError::MissingDeterminer { .. }
            | CompositionError::LoneDeterminer { .. }
            | CompositionError::MissingNoun { .. } => "GN-Comp",
            CompositionError::DeterminerAfterNoun { .. } => "GN-Ordre",
            CompositionError::ComplementWithoutNoun { .. }
            | CompositionError::MalformedComplement { .. } => "GN-C.N",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum AgreementError {
    #[error("[Accord-GN] Le déterminant \"{determiner}\" ({determiner_number}) ne s'accorde pas en nombre avec le nom \"{noun}\" ({noun_number}).")]
    DeterminerNumber {
        determiner: String,
        determiner_number: Number,
        noun: String,
        noun_number: Number,
    },

    #[error("[Accord-GN] Le déterminant \"{determiner}\" ({determiner_gender}) ne s'accorde pas avec le nom \"{noun}\" ({noun_gender}).")]
    DeterminerGender {
        determiner: String,
        determiner_gender: Gender,
        noun: String,
        noun_gender: Gender,
    },

    #[error("[Accord-GN] L'adjectif \"{adjective}\" ({adjective_number}) ne s'accorde pas en nombre avec le nom \"{noun}\" ({noun_number}).")]
    AdjectiveNumber {
        adjective: String,
        adjective_number: Number,
        noun: String,
        noun_number: Number,
    },

    #[error("[Accord-GN] L'adjectif \"{adjective}\" ({adjective_gender}) ne s'accorde pas en genre avec le nom \"{noun}\" ({noun_gender}).")]
    AdjectiveGender {
        adjective: String,
        adjective_gender: Gender,
        noun: String,
        noun_gender: Gender,
    },

    #[error("[Accord S-V] Quand le sujet est un infinitif (\"{infinitive}...\"), le verbe doit être à la 3ème personne du singulier (comme avec \"il\").")]
    InfinitiveSubject { infinitive: String, verb: String, verb_person: Person },

    #[error("[Accord S-V] Le sujet \"{subject}\" ({subject_person}) ne s'accorde pas avec le verbe \"{verb}\" ({verb_person}).")]
    SubjectVerb {
        subject: String,
        subject_person: Person,
        verb: String,
        verb_person: Person,
    },
}

impl AgreementError {
    pub fn tag(&self) -> &'static str {
        match self {
            AgreementError::InfinitiveSubject { .. } | AgreementError::SubjectVerb { .. } => "Accord S-V",
            _ => "Accord-GN",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum StructureError {
    #[error("❌ Structure : Une phrase déclarative simple ne peut pas commencer par un verbe conjugué.")]
    VerbFirst,

    #[error("❌ Structure : Un pronom sujet comme \"{pronoun}\" ne peut pas être directement suivi d'un autre groupe nominal comme \"{group}\". Il manque probablement un verbe.")]
    PronounBeforeNounGroup { pronoun: String, group: String },

    /// No template matches. `sequence` is the joined kind key (`GPron-GN`),
    /// `detail` lists each block as `Kind(words)`.
    #[error("❌ Structure : La séquence de blocs \"{sequence}\" n'est pas une structure de phrase de base valide. Détail : {detail}")]
    UnknownSequence { sequence: String, detail: String },
}

/// Any diagnostic produced by an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SentenceError {
    #[error(transparent)]
    Elision(#[from] ElisionError),
    #[error(transparent)]
    Composition(#[from] CompositionError),
    #[error(transparent)]
    Agreement(#[from] AgreementError),
    #[error(transparent)]
    Structure(#[from] StructureError),
}

impl SentenceError {
    pub fn tag(&self) -> &'static str {
        match self {
            SentenceError::Elision(_) => "Élision",
            SentenceError::Composition(e) => e.tag(),
            SentenceError::Agreement(e) => e.tag(),
            SentenceError::Structure(_) => "Structure",
        }
    }
}
