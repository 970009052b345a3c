use core::fmt;

use syntaxe_protocol::{join_words, Block, BlockId, BlockKind, FunctionTree, LexicalType, Subtype, TokenId, WordToken};

use crate::composition::is_complement_preposition;

fn can_be_subject(block: &Block) -> bool {
    matches!(block.kind, BlockKind::NounGroup | BlockKind::PronounGroup | BlockKind::InfinitiveGroup)
}

fn can_be_attribute(block: &Block) -> bool {
    block.kind == BlockKind::AdjectiveGroup
        || (block.kind == BlockKind::NounGroup && block.contains(LexicalType::Adjective))
}

fn can_be_object(block: &Block) -> bool {
    matches!(block.kind, BlockKind::NounGroup | BlockKind::InfinitiveGroup)
}

/// Derives subject, verb, direct object and attribute around the first verb.
pub fn identify_functions(blocks: &[Block]) -> FunctionTree {
    let Some(verb) = blocks.iter().position(|b| b.kind == BlockKind::Verb) else {
        return FunctionTree { others: (0..blocks.len()).map(BlockId::at).collect(), ..Default::default() };
    };

    let after = verb + 1..blocks.len();

    // Inverted subjects ("Soudain arrive le train") are searched after the verb.
    let subject = (0..verb)
        .find(|&i| can_be_subject(&blocks[i]))
        .or_else(|| after.clone().find(|&i| can_be_subject(&blocks[i])));

    let is_copula = blocks[verb].words.first().map_or(false, |w| w.subtype == Some(Subtype::State));

    let (attribute, direct_object) = if is_copula {
        (after.clone().find(|&i| can_be_attribute(&blocks[i])), None)
    } else {
        (None, after.clone().find(|&i| Some(i) != subject && can_be_object(&blocks[i])))
    };

    let others = (0..blocks.len())
        .filter(|&i| i != verb && ![subject, direct_object, attribute].contains(&Some(i)))
        .map(BlockId::at)
        .collect();

    FunctionTree {
        subject: subject.map(BlockId::at),
        verb: Some(BlockId::at(verb)),
        direct_object: direct_object.map(BlockId::at),
        attribute: attribute.map(BlockId::at),
        others,
    }
}

/// Labels shown under the sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionLabel {
    Subject,
    Verb,
    DirectObject,
    /// Direct object realised by an infinitive group.
    InfinitiveObject,
    SubjectAttribute,
    Epithet,
    NounComplement,
}

impl FunctionLabel {
    /// Main functions sit on the first line; épithètes and compléments below.
    pub fn is_main(self) -> bool {
        !matches!(self, FunctionLabel::Epithet | FunctionLabel::NounComplement)
    }
}

impl fmt::Display for FunctionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FunctionLabel::Subject => "Sujet",
            FunctionLabel::Verb => "Verbe",
            FunctionLabel::DirectObject => "COD",
            FunctionLabel::InfinitiveObject => "COD (Infinitif)",
            FunctionLabel::SubjectAttribute => "Attribut du Sujet",
            FunctionLabel::Epithet => "Épithète",
            FunctionLabel::NounComplement => "C. du Nom",
        })
    }
}

/// A labelled run of words, positioned by its first and last token ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSpan<'a> {
    pub label: FunctionLabel,
    pub words: Vec<&'a WordToken>,
}

impl<'a> FunctionSpan<'a> {
    fn new(label: FunctionLabel, words: &[&'a WordToken]) -> Self {
        Self { label, words: words.to_vec() }
    }

    pub fn first_id(&self) -> Option<TokenId> {
        self.words.first().map(|w| w.id)
    }

    pub fn last_id(&self) -> Option<TokenId> {
        self.words.last().map(|w| w.id)
    }

    pub fn text(&self) -> String {
        join_words(&self.words)
    }
}

/// Expands a function tree into display spans: main functions first, then
/// épithètes and compléments du nom found inside the subject and object.
pub fn describe_functions<'a>(blocks: &[Block<'a>], tree: &FunctionTree) -> Vec<FunctionSpan<'a>> {
    let block = |id: Option<BlockId>| id.and_then(|id| blocks.get(id.index()));
    let mut spans = Vec::new();

    if let Some(subject) = block(tree.subject) {
        spans.push(FunctionSpan::new(FunctionLabel::Subject, &subject.words));
    }
    if let Some(verb) = block(tree.verb) {
        spans.push(FunctionSpan::new(FunctionLabel::Verb, &verb.words));
    }
    if let Some(object) = block(tree.direct_object) {
        let label = match object.kind {
            BlockKind::InfinitiveGroup => FunctionLabel::InfinitiveObject,
            _ => FunctionLabel::DirectObject,
        };
        spans.push(FunctionSpan::new(label, &object.words));
    }
    if let Some(attribute) = block(tree.attribute) {
        spans.push(FunctionSpan::new(FunctionLabel::SubjectAttribute, &attribute.words));
    }

    let groups = [block(tree.subject), block(tree.direct_object)];
    for group in groups.into_iter().flatten().filter(|b| b.kind == BlockKind::NounGroup) {
        for (index, word) in group.words.iter().enumerate() {
            if word.is(LexicalType::Adjective) {
                spans.push(FunctionSpan::new(FunctionLabel::Epithet, &group.words[index..=index]));
            }
            if is_complement_preposition(&word.text) && index + 1 < group.words.len() {
                spans.push(FunctionSpan::new(FunctionLabel::NounComplement, &group.words[index..]));
            }
        }
    }

    spans
}
