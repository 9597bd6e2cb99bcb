use regex::Regex;
use std::sync::LazyLock;

static CODE_FENCE_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A\s*```[^\n]*\n").expect("valid regex"));
static CODE_FENCE_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*```\s*\z").expect("valid regex"));
// Horizontal whitespace only; a dash ending a line must not join two turns
static EM_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]*—[ \t]*").expect("valid regex"));
static TRAILING_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)[ \t]+$").expect("valid regex"));
static BLANK_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));
static SPEAKER_TURN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*\**\s*Speaker\s+[AB]\s*\**\s*:").expect("valid regex")
});

/// Normalize raw model output into a plain script.
///
/// Strips a surrounding markdown code fence, replaces em dashes the model
/// slipped in anyway, and collapses runs of blank lines.
pub fn clean_script(raw: &str) -> String {
    let text = raw.replace("\r\n", "\n");
    let text = CODE_FENCE_OPEN.replace(&text, "");
    let text = CODE_FENCE_CLOSE.replace(&text, "");
    let text = EM_DASH.replace_all(&text, ", ");
    let text = TRAILING_SPACE.replace_all(&text, "");
    let text = BLANK_RUNS.replace_all(&text, "\n\n");

    text.trim().to_string()
}

/// Append a continuation to a script, separated by a blank line
pub fn append_continuation(script: &mut String, continuation: &str) {
    if continuation.is_empty() {
        return;
    }
    if !script.is_empty() {
        script.push_str("\n\n");
    }
    script.push_str(continuation);
}

/// Number of lines that open a "Speaker A:" / "Speaker B:" turn
pub fn count_speaker_turns(script: &str) -> usize {
    SPEAKER_TURN.find_iter(script).count()
}
