pub mod combiner;
pub mod composition;
pub mod functions;
pub mod segmenter;
pub mod structure;

#[cfg(feature = "serde")]
pub mod report;

use log::debug;
use syntaxe_agreement::{check_internal_agreement, check_subject_verb};
use syntaxe_morph::check_elision;
use syntaxe_protocol::{Block, BlockId, FunctionTree, SentenceError, WordToken};

use crate::combiner::combine;
use crate::composition::check_composition;
use crate::functions::{describe_functions, identify_functions, FunctionSpan};
use crate::segmenter::segment;
use crate::structure::{match_structure, sequence_key};

pub use crate::functions::FunctionLabel;

pub const SUCCESS_MESSAGE: &str = "La phrase est grammaticalement correcte.";

/// Outcome of one analysis. Borrows the analyzed tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult<'a> {
    pub valid: bool,
    pub errors: Vec<SentenceError>,
    /// Combined blocks; `BlockId`s in the tree index into this list.
    pub blocks: Vec<Block<'a>>,
    /// Present whenever the sentence has a verb, valid or not.
    pub function_tree: Option<FunctionTree>,
}

impl<'a> AnalysisResult<'a> {
    /// Errors one per line, or the success message.
    pub fn message(&self) -> String {
        if self.errors.is_empty() {
            return SUCCESS_MESSAGE.to_string();
        }
        self.errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
    }

    pub fn block(&self, id: BlockId) -> Option<&Block<'a>> {
        self.blocks.get(id.index())
    }

    /// Labelled spans for display (Sujet, Verbe, COD, Épithète...).
    pub fn functions(&self) -> Vec<FunctionSpan<'a>> {
        match &self.function_tree {
            Some(tree) => describe_functions(&self.blocks, tree),
            None => Vec::new(),
        }
    }
}

/// Runs every stage over a tagged sentence.
///
/// Order: elision, segmentation, combination, composition and internal
/// agreement, structure, functions, subject-verb agreement. The structure
/// error is only reported when no earlier stage found anything; subject-verb
/// agreement only runs on a valid structure.
pub fn analyze(tokens: &[WordToken]) -> AnalysisResult<'_> {
    let mut errors: Vec<SentenceError> = Vec::new();

    // 0. Elision (independent of segmentation)
    errors.extend(check_elision(tokens).map(SentenceError::from));

    // 1-2. Blocks
    let blocks = combine(segment(tokens));
    debug!("blocks: [{}]", sequence_key(&blocks));

    // 3. Internal composition and agreement
    errors.extend(check_composition(&blocks).into_iter().map(SentenceError::from));
    errors.extend(check_internal_agreement(&blocks).into_iter().map(SentenceError::from));

    // 4. Structure
    let structure = match_structure(&blocks);
    debug!("structure: {:?}", structure);
    let tree = identify_functions(&blocks);
    debug!("functions: {:?}", tree);

    // 5. Subject-verb agreement
    match structure {
        Ok(()) => errors.extend(check_subject_verb(&blocks, &tree).map(SentenceError::from)),
        Err(err) if !errors.is_empty() => debug!("structure error superseded: {}", err),
        Err(err) => errors.push(err.into()),
    }

    debug!("{} error(s)", errors.len());
    AnalysisResult {
        valid: errors.is_empty(),
        errors,
        function_tree: tree.verb.is_some().then_some(tree),
        blocks,
    }
}
