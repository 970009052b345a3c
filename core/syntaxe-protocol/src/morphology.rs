use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

/// Part of speech assigned by the word bank.
///
/// Wire names are kebab-case English; the French spellings of the word bank
/// are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[repr(u8)]
pub enum LexicalType {
    #[cfg_attr(feature = "serde", serde(alias = "nom"))]
    Noun = 0,
    #[cfg_attr(feature = "serde", serde(alias = "determinant"))]
    Determiner = 1,
    #[cfg_attr(feature = "serde", serde(alias = "adjectif"))]
    Adjective = 2,
    #[cfg_attr(feature = "serde", serde(alias = "pronom"))]
    Pronoun = 3,
    #[cfg_attr(feature = "serde", serde(alias = "verbe"))]
    Verb = 4,
    #[cfg_attr(feature = "serde", serde(alias = "adverbe"))]
    Adverb = 5,
    Preposition = 6,
    /// Punctuation and anything the word bank does not classify.
    #[cfg_attr(feature = "serde", serde(alias = "ponctuation", alias = "autre", alias = "punctuation"))]
    Other = 7,
}

impl LexicalType {
    pub fn flag(self) -> LexicalSet {
        match self {
            LexicalType::Noun => LexicalSet::NOUN,
            LexicalType::Determiner => LexicalSet::DETERMINER,
            LexicalType::Adjective => LexicalSet::ADJECTIVE,
            LexicalType::Pronoun => LexicalSet::PRONOUN,
            LexicalType::Verb => LexicalSet::VERB,
            LexicalType::Adverb => LexicalSet::ADVERB,
            LexicalType::Preposition => LexicalSet::PREPOSITION,
            LexicalType::Other => LexicalSet::OTHER,
        }
    }
}

impl fmt::Display for LexicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LexicalType::Noun => "nom",
            LexicalType::Determiner => "determinant",
            LexicalType::Adjective => "adjectif",
            LexicalType::Pronoun => "pronom",
            LexicalType::Verb => "verbe",
            LexicalType::Adverb => "adverbe",
            LexicalType::Preposition => "preposition",
            LexicalType::Other => "autre",
        };
        f.write_str(name)
    }
}

bitflags! {
    /// A set of lexical types, used by the grammar tables.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct LexicalSet: u16 {
        const NOUN = 1;
        const DETERMINER = 2;
        const ADJECTIVE = 4;
        const PRONOUN = 8;
        const VERB = 16;
        const ADVERB = 32;
        const PREPOSITION = 64;
        const OTHER = 128;

        /// Words that open or extend a noun group.
        const NOUN_GROUP = Self::NOUN.bits() | Self::DETERMINER.bits() | Self::ADJECTIVE.bits();
    }
}

impl LexicalSet {
    pub fn admits(self, lexical_type: LexicalType) -> bool {
        self.contains(lexical_type.flag())
    }
}

/// Context-dependent refinement of the lexical type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Subtype {
    // Nouns
    #[cfg_attr(feature = "serde", serde(alias = "commun"))]
    Common,
    #[cfg_attr(feature = "serde", serde(alias = "propre"))]
    Proper,

    // Pronouns
    #[cfg_attr(feature = "serde", serde(alias = "personnel-sujet"))]
    PersonalSubject,
    #[cfg_attr(feature = "serde", serde(alias = "personnel-cod"))]
    PersonalObject,
    #[cfg_attr(feature = "serde", serde(alias = "reflechi"))]
    Reflexive,
    #[cfg_attr(feature = "serde", serde(alias = "demonstratif"))]
    Demonstrative,
    #[cfg_attr(feature = "serde", serde(alias = "possessif"))]
    Possessive,
    #[cfg_attr(feature = "serde", serde(alias = "indefini"))]
    Indefinite,

    // Verbs
    Action,
    /// Copular verbs (être, sembler, devenir...) that take a subject attribute.
    #[cfg_attr(feature = "serde", serde(alias = "etat"))]
    State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[repr(u8)]
pub enum Gender {
    #[cfg_attr(feature = "serde", serde(alias = "masculin"))]
    Masculine = 0,
    #[cfg_attr(feature = "serde", serde(alias = "feminin"))]
    Feminine = 1,
    /// Determiners shared by both genders (les, des, mes...).
    #[cfg_attr(feature = "serde", serde(alias = "mixte"))]
    Mixed = 2,
    /// Elided forms (l', j', qu'...). Carried in the gender slot by the word bank.
    Elision = 3,
    /// Nouns whose form does not vary with gender (élève, enfant...).
    Epicene = 4,
}

impl Gender {
    /// Determiner genders that agree with either noun gender.
    pub fn is_flexible(self) -> bool {
        matches!(self, Gender::Mixed | Gender::Elision)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Gender::Masculine => "masculin",
            Gender::Feminine => "feminin",
            Gender::Mixed => "mixte",
            Gender::Elision => "elision",
            Gender::Epicene => "epicene",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[repr(u8)]
pub enum Number {
    #[cfg_attr(feature = "serde", serde(alias = "singulier"))]
    Singular = 0,
    #[cfg_attr(feature = "serde", serde(alias = "pluriel"))]
    Plural = 1,
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Number::Singular => "singulier",
            Number::Plural => "pluriel",
        })
    }
}

/// Grammatical person, named after the subject pronoun that selects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Person {
    Je = 1,
    Tu = 2,
    Il = 3,
    Nous = 4,
    Vous = 5,
    Ils = 6,
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Person::Je => "je",
            Person::Tu => "tu",
            Person::Il => "il",
            Person::Nous => "nous",
            Person::Vous => "vous",
            Person::Ils => "ils",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[repr(u8)]
pub enum Mode {
    #[cfg_attr(feature = "serde", serde(alias = "indicatif"))]
    Indicative = 0,
    #[cfg_attr(feature = "serde", serde(alias = "infinitif"))]
    Infinitive = 1,
    #[cfg_attr(feature = "serde", serde(alias = "subjonctif"))]
    Subjunctive = 2,
    #[cfg_attr(feature = "serde", serde(alias = "participe"))]
    Participle = 3,
}
