use regex::Regex;

lazy_static::lazy_static! {
    static ref EMPHASIS_RE: Regex = Regex::new(r"\*\*(.+?)\*\*").expect("emphasis pattern compiles");
}

/// A span of prompt text, either plain or emphasized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub emphasized: bool,
}

impl TextRun {
    pub fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            emphasized: false,
        }
    }

    pub fn emphasized(text: &str) -> Self {
        Self {
            text: text.to_string(),
            emphasized: true,
        }
    }
}

/// Split `**word**` markup into plain and emphasized runs, stripping the markers.
/// An unmatched `**` stays in the text as-is. Empty runs are never produced.
pub fn parse_emphasis(text: &str) -> Vec<TextRun> {
    let mut runs: Vec<TextRun> = Vec::new();
    let mut last = 0;

    for caps in EMPHASIS_RE.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        push_plain(&mut runs, &text[last..whole.start()]);
        runs.push(TextRun::emphasized(inner.as_str()));
        last = whole.end();
    }
    push_plain(&mut runs, &text[last..]);

    runs
}

/// Concatenate runs back into unmarked text.
pub fn plain_text(runs: &[TextRun]) -> String {
    runs.iter().map(|r| r.text.as_str()).collect()
}

fn push_plain(runs: &mut Vec<TextRun>, text: &str) {
    if text.is_empty() {
        return;
    }
    match runs.last_mut() {
        Some(prev) if !prev.emphasized => prev.text.push_str(text),
        _ => runs.push(TextRun::plain(text)),
    }
}
