use wasm_bindgen::prelude::*;
use syntaxe_parser::analyze;
use syntaxe_parser::report::AnalysisReport;
use syntaxe_protocol::WordToken;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Runs the analyzer over an already-tagged sentence.
pub fn analyze_tokens(tokens: &[WordToken]) -> AnalysisReport {
    AnalysisReport::from(&analyze(tokens))
}

/// The engine instance running in the browser.
///
/// Stateless: the template table and elision lists are static, so one
/// instance can serve every sentence attempt.
#[wasm_bindgen]
#[derive(Default)]
pub struct SyntaxeEngine {
    _private: (),
}

#[wasm_bindgen]
impl SyntaxeEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokens (JS array of `{id, text, type, ...}`) -> report object.
    pub fn analyze(&self, tokens: JsValue) -> Result<JsValue, JsError> {
        let tokens: Vec<WordToken> = serde_wasm_bindgen::from_value(tokens)?;
        let report = analyze_tokens(&tokens);
        Ok(serde_wasm_bindgen::to_value(&report)?)
    }
}
