use super::length::LengthTarget;
use super::model::ScriptConfig;

/// Amount of trailing script handed back to the model when asking it to continue
const CONTINUATION_CONTEXT_CHARS: usize = 1500;

/// Build the prompt for the first generation request
pub fn build_script_prompt(config: &ScriptConfig, target: &LengthTarget) -> String {
    format!(
        "You are ScriptGen Studio. Create a natural two speaker conversation script.\n\
         \n\
         Rules:\n\
         No em dashes.\n\
         Tone is realistic and natural.\n\
         Use correct language and dialect: {language} ({dialect}).\n\
         Speaker genders: {speakers}.\n\
         Domain: {domain}.\n\
         Topic: {topic}.\n\
         Length target: {length}.\n\
         Conversation should flow smoothly with turn taking.\n\
         Label speakers as Speaker A and Speaker B.\n\
         \n\
         Return only the final script.",
        language = config.language.name(),
        dialect = config.dialect.label(),
        speakers = config.speakers.label(),
        domain = config.domain.label(),
        topic = config.topic,
        length = target.describe(),
    )
}

/// Build the follow-up prompt asking the model to keep a short script going
pub fn build_continuation_prompt(
    config: &ScriptConfig,
    target: &LengthTarget,
    script_so_far: &str,
    current_count: usize,
) -> String {
    let remaining = target.shortfall(current_count);

    format!(
        "You are ScriptGen Studio. Continue the two speaker conversation script below.\n\
         \n\
         Rules:\n\
         No em dashes.\n\
         Keep the same language and dialect: {language} ({dialect}).\n\
         Speaker genders: {speakers}.\n\
         Domain: {domain}.\n\
         Topic: {topic}.\n\
         The script currently has {current} {unit}. Write about {remaining} more {unit}.\n\
         Pick up exactly where the conversation stops.\n\
         Do not repeat earlier lines, add a title, or restart the conversation.\n\
         Keep labeling speakers as Speaker A and Speaker B.\n\
         \n\
         End of the script so far:\n\
         {tail}\n\
         \n\
         Return only the continuation.",
        language = config.language.name(),
        dialect = config.dialect.label(),
        speakers = config.speakers.label(),
        domain = config.domain.label(),
        topic = config.topic,
        current = current_count,
        remaining = remaining,
        unit = target.unit,
        tail = tail_chars(script_so_far, CONTINUATION_CONTEXT_CHARS),
    )
}

/// Last `max_chars` characters of `text`, never splitting a code point
fn tail_chars(text: &str, max_chars: usize) -> &str {
    if max_chars == 0 {
        return "";
    }
    match text.char_indices().rev().nth(max_chars - 1) {
        Some((start, _)) => &text[start..],
        None => text,
    }
}
