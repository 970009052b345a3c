use core::fmt;

use crate::ids::{BlockId, TokenId};
use crate::morphology::{Gender, LexicalType, Mode, Number, Person, Subtype};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// A tagged word, as placed in the sentence by the learner.
///
/// The presentation layer fills every attribute before analysis; the
/// analyzer only ever borrows tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct WordToken {
    pub id: TokenId,
    pub text: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub lexical_type: LexicalType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub subtype: Option<Subtype>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub gender: Option<Gender>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub number: Option<Number>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub person: Option<Person>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mode: Option<Mode>,
}

impl WordToken {
    pub fn new(id: u32, text: impl Into<String>, lexical_type: LexicalType) -> Self {
        Self {
            id: TokenId(id),
            text: text.into(),
            lexical_type,
            subtype: None,
            gender: None,
            number: None,
            person: None,
            mode: None,
        }
    }

    pub fn with_subtype(mut self, subtype: Subtype) -> Self {
        self.subtype = Some(subtype);
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_number(mut self, number: Number) -> Self {
        self.number = Some(number);
        self
    }

    pub fn with_person(mut self, person: Person) -> Self {
        self.person = Some(person);
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn is(&self, lexical_type: LexicalType) -> bool {
        self.lexical_type == lexical_type
    }

    pub fn is_common_noun(&self) -> bool {
        self.is(LexicalType::Noun) && self.subtype == Some(Subtype::Common)
    }

    pub fn is_proper_noun(&self) -> bool {
        self.is(LexicalType::Noun) && self.subtype == Some(Subtype::Proper)
    }

    pub fn is_infinitive(&self) -> bool {
        self.is(LexicalType::Verb) && self.mode == Some(Mode::Infinitive)
    }

    pub fn is_personal_subject(&self) -> bool {
        self.subtype == Some(Subtype::PersonalSubject)
    }
}

/// Syntactic block kinds produced by segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
pub enum BlockKind {
    /// GN
    NounGroup,
    /// GPron
    PronounGroup,
    /// GAdv
    AdverbGroup,
    /// GAdj, produced by adverb + adjective fusion
    AdjectiveGroup,
    /// GP: a preposition and everything up to the next one
    PrepGroup,
    /// A finite verb
    Verb,
    /// GInf
    InfinitiveGroup,
    Other,
}

impl BlockKind {
    /// Short tag used in sequence keys and diagnostics.
    pub fn tag(self) -> &'static str {
        match self {
            BlockKind::NounGroup => "GN",
            BlockKind::PronounGroup => "GPron",
            BlockKind::AdverbGroup => "GAdv",
            BlockKind::AdjectiveGroup => "GAdj",
            BlockKind::PrepGroup => "GP",
            BlockKind::Verb => "verbe",
            BlockKind::InfinitiveGroup => "GInf",
            BlockKind::Other => "autre",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A run of consecutive tokens with a syntactic kind.
///
/// Words stay in sentence order; merges only append.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
pub struct Block<'a> {
    pub kind: BlockKind,
    pub words: Vec<&'a WordToken>,
}

impl<'a> Block<'a> {
    pub fn new(kind: BlockKind, first: &'a WordToken) -> Self {
        Self { kind, words: vec![first] }
    }

    /// Appends the words of `follower`, keeping this block's kind.
    pub fn absorb(&mut self, follower: Block<'a>) {
        self.words.extend(follower.words);
    }

    pub fn find(&self, lexical_type: LexicalType) -> Option<&'a WordToken> {
        self.words.iter().copied().find(|w| w.is(lexical_type))
    }

    pub fn position(&self, lexical_type: LexicalType) -> Option<usize> {
        self.words.iter().position(|w| w.is(lexical_type))
    }

    pub fn contains(&self, lexical_type: LexicalType) -> bool {
        self.position(lexical_type).is_some()
    }

    pub fn first_id(&self) -> Option<TokenId> {
        self.words.first().map(|w| w.id)
    }

    pub fn last_id(&self) -> Option<TokenId> {
        self.words.last().map(|w| w.id)
    }

    /// Words joined by single spaces.
    pub fn text(&self) -> String {
        join_words(&self.words)
    }
}

pub fn join_words(words: &[&WordToken]) -> String {
    words.iter().map(|w| w.text.as_str()).collect::<Vec<_>>().join(" ")
}

/// Grammatical functions, as labelled references into the block list of a
/// single analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
pub struct FunctionTree {
    pub subject: Option<BlockId>,
    pub verb: Option<BlockId>,
    pub direct_object: Option<BlockId>,
    pub attribute: Option<BlockId>,
    /// Remaining blocks, in sentence order.
    pub others: Vec<BlockId>,
}
