//! One-shot `translate` subcommand.

use std::fmt::Write;

use anyhow::Result;
use bizspec_core::{TranslateRequest, Translation};
use bizspec_llm::LlmConfig;
use bizspec_service::Translator;

/// Validate `requirement`, build an Anthropic translator from `config` and
/// render the result. Validation runs before the key is checked.
pub async fn run_translate(config: &LlmConfig, requirement: &str) -> Result<String> {
    let request = validated(requirement)?;
    let translator = Translator::new(config)?;
    translate_request(&translator, &request).await
}

/// Same as [`run_translate`] with an already-built translator.
pub async fn translate_with(translator: &Translator, requirement: &str) -> Result<String> {
    let request = validated(requirement)?;
    translate_request(translator, &request).await
}

fn validated(requirement: &str) -> Result<TranslateRequest> {
    let request = TranslateRequest {
        business_requirement: requirement.to_string(),
    };
    request.validate()?;
    Ok(request)
}

async fn translate_request(translator: &Translator, request: &TranslateRequest) -> Result<String> {
    let result = translator.translate(&request.business_requirement).await?;
    Ok(render_sections(&result))
}

/// Plain-text rendering: a `==== Name ====` banner per section, in order.
pub fn render_sections(translation: &Translation) -> String {
    let mut out = String::new();
    for (section, text) in translation.sections() {
        let _ = writeln!(out, "==== {section} ====\n");
        let _ = writeln!(out, "{text}\n");
    }
    out
}
