//! Prompt Template Registry: maps an output style to its instruction
//! template and binds the three substitution slots.

use crate::models::resume::{OutputFormat, OutputStyle};
use crate::refine::prompts::{
    ENGLISH_CONCISE_TEMPLATE, ENGLISH_LINKEDIN_TEMPLATE, ENGLISH_PROFESSIONAL_TEMPLATE,
    HIDE_CONTACT_DIRECTIVE, JAPANESE_CASUAL_TEMPLATE, JAPANESE_KEIGO_TEMPLATE,
};

/// Selects the instruction template for a style. Total over the closed enum;
/// there is no fallback path.
fn template_for(style: OutputStyle) -> &'static str {
    match style {
        OutputStyle::JapaneseKeigo => JAPANESE_KEIGO_TEMPLATE,
        OutputStyle::JapaneseCasual => JAPANESE_CASUAL_TEMPLATE,
        OutputStyle::EnglishProfessional => ENGLISH_PROFESSIONAL_TEMPLATE,
        OutputStyle::EnglishConcise => ENGLISH_CONCISE_TEMPLATE,
        OutputStyle::EnglishLinkedin => ENGLISH_LINKEDIN_TEMPLATE,
    }
}

/// Renders one fully-substituted prompt string.
///
/// Pure: templates are shared constants and substitution never mutates them,
/// so concurrent dispatches cannot observe each other's slot values. The
/// resume text is substituted last so braces inside user content are never
/// re-expanded as slots.
pub fn render_prompt(
    style: OutputStyle,
    text: &str,
    format: OutputFormat,
    hide_contact: bool,
) -> String {
    let directive = if hide_contact {
        HIDE_CONTACT_DIRECTIVE
    } else {
        ""
    };

    template_for(style)
        .replace("{format}", format.label())
        .replace("{hide_contact}", directive)
        .replace("{text}", text)
}
