//! Finite-state segmentation of tokens into syntactic blocks.
//!
//! The machine keeps at most one open block. A transition either extends
//! it, or closes it (emitting it) and opens a block for the new token.

use log::trace;
use syntaxe_protocol::{Block, BlockKind, LexicalSet, LexicalType, WordToken};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Initial state, and after an `Other` block.
    AwaitingGroup,
    InNounGroup,
    InAdverbGroup,
    InPrepGroup,
    /// After a verb, pronoun, infinitive or adjective group.
    /// Transitions are those of `AwaitingGroup`.
    AfterSimpleCore,
}

/// Result of feeding one token to the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<'a> {
    pub state: State,
    pub open: Option<Block<'a>>,
    pub emitted: Option<Block<'a>>,
}

/// `(state, open block, token) -> (state, open block, emitted block)`
pub fn transition<'a>(state: State, open: Option<Block<'a>>, token: &'a WordToken) -> Step<'a> {
    match state {
        State::AwaitingGroup | State::AfterSimpleCore => dispatch(open, token),

        State::InNounGroup => match token.lexical_type {
            LexicalType::Noun | LexicalType::Adjective => extend(state, open, token),
            // "le chat le chien"
            LexicalType::Determiner => restart(open, BlockKind::NounGroup, State::InNounGroup, token),
            LexicalType::Preposition => restart(open, BlockKind::PrepGroup, State::InPrepGroup, token),
            _ => dispatch(open, token),
        },

        State::InAdverbGroup => match (token.lexical_type, open) {
            // "très lentement"
            (LexicalType::Adverb, open) => extend(state, open, token),
            // "très heureux": the open block is retyped, not closed
            (LexicalType::Adjective, Some(mut block)) => {
                block.kind = BlockKind::AdjectiveGroup;
                block.words.push(token);
                Step { state: State::AfterSimpleCore, open: Some(block), emitted: None }
            }
            (_, open) => dispatch(open, token),
        },

        // The regime runs until the next preposition.
        State::InPrepGroup => match token.lexical_type {
            LexicalType::Preposition => restart(open, BlockKind::PrepGroup, State::InPrepGroup, token),
            _ => extend(state, open, token),
        },
    }
}

/// Closes the open block and starts one for `token`, as from `AwaitingGroup`.
fn dispatch<'a>(open: Option<Block<'a>>, token: &'a WordToken) -> Step<'a> {
    let (kind, next) = match token.lexical_type {
        t if LexicalSet::NOUN_GROUP.admits(t) => (BlockKind::NounGroup, State::InNounGroup),
        LexicalType::Preposition => (BlockKind::PrepGroup, State::InPrepGroup),
        LexicalType::Pronoun => (BlockKind::PronounGroup, State::AfterSimpleCore),
        LexicalType::Verb if token.is_infinitive() => (BlockKind::InfinitiveGroup, State::AfterSimpleCore),
        LexicalType::Verb => (BlockKind::Verb, State::AfterSimpleCore),
        LexicalType::Adverb => (BlockKind::AdverbGroup, State::InAdverbGroup),
        _ => (BlockKind::Other, State::AwaitingGroup),
    };
    restart(open, kind, next, token)
}

fn restart<'a>(open: Option<Block<'a>>, kind: BlockKind, state: State, token: &'a WordToken) -> Step<'a> {
    Step { state, open: Some(Block::new(kind, token)), emitted: open }
}

fn extend<'a>(state: State, open: Option<Block<'a>>, token: &'a WordToken) -> Step<'a> {
    match open {
        Some(mut block) => {
            block.words.push(token);
            Step { state, open: Some(block), emitted: None }
        }
        None => dispatch(None, token),
    }
}

/// Runs the machine over the whole sentence and flushes the last block.
pub fn segment(tokens: &[WordToken]) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut state = State::AwaitingGroup;
    let mut open = None;

    for token in tokens {
        let step = transition(state, open.take(), token);
        trace!("{:?} --{}({})--> {:?}", state, token.lexical_type, token.text, step.state);

        blocks.extend(step.emitted);
        state = step.state;
        open = step.open;
    }

    blocks.extend(open);
    blocks
}
