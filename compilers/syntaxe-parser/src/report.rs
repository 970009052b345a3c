//! Serializable view of an analysis, for the CLI and the browser engine.

use serde::Serialize;
use syntaxe_protocol::{Block, SentenceError, TokenId};

use crate::functions::FunctionSpan;
use crate::AnalysisResult;

#[derive(Debug, Clone, Serialize)]
pub struct ReportedError {
    pub tag: &'static str,
    pub message: String,
}

impl From<&SentenceError> for ReportedError {
    fn from(e: &SentenceError) -> Self {
        Self { tag: e.tag(), message: e.to_string() }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BlockReport {
    pub kind: &'static str,
    pub text: String,
    pub first_id: Option<TokenId>,
    pub last_id: Option<TokenId>,
}

impl From<&Block<'_>> for BlockReport {
    fn from(block: &Block<'_>) -> Self {
        Self {
            kind: block.kind.tag(),
            text: block.text(),
            first_id: block.first_id(),
            last_id: block.last_id(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FunctionReport {
    pub label: String,
    pub text: String,
    pub first_id: Option<TokenId>,
    pub last_id: Option<TokenId>,
    /// Main functions (Sujet, Verbe, COD...) versus inner ones (Épithète...).
    pub main: bool,
}

impl From<&FunctionSpan<'_>> for FunctionReport {
    fn from(span: &FunctionSpan<'_>) -> Self {
        Self {
            label: span.label.to_string(),
            text: span.text(),
            first_id: span.first_id(),
            last_id: span.last_id(),
            main: span.label.is_main(),
        }
    }
}

/// The structured response sent back to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub valid: bool,
    pub message: String,
    pub errors: Vec<ReportedError>,
    pub blocks: Vec<BlockReport>,
    pub functions: Vec<FunctionReport>,
}

impl From<&AnalysisResult<'_>> for AnalysisReport {
    fn from(result: &AnalysisResult<'_>) -> Self {
        Self {
            valid: result.valid,
            message: result.message(),
            errors: result.errors.iter().map(ReportedError::from).collect(),
            blocks: result.blocks.iter().map(BlockReport::from).collect(),
            functions: result.functions().iter().map(FunctionReport::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze;
    use syntaxe_protocol::{LexicalType, Mode, Person, Subtype, WordToken};

    #[test]
    fn test_report_positions_spans() {
        // "Il dort"
        let tokens = vec![
            WordToken::new(4, "Il", LexicalType::Pronoun)
                .with_subtype(Subtype::PersonalSubject)
                .with_person(Person::Il),
            WordToken::new(9, "dort", LexicalType::Verb).with_mode(Mode::Indicative).with_person(Person::Il),
        ];
        let report = AnalysisReport::from(&analyze(&tokens));

        assert!(report.valid);
        assert!(report.errors.is_empty());
        assert_eq!(report.blocks[0].kind, "GPron");
        assert_eq!(report.functions[0].label, "Sujet");
        assert_eq!(report.functions[0].first_id, Some(TokenId(4)));
        assert_eq!(report.functions[1].last_id, Some(TokenId(9)));
    }
}
