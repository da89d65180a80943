use crate::core::model::{ParseResult, WordPair};
use crate::layout::SPLIT_MARKER;

/// Accumulator threaded through the fold over the line sequence.
/// `pairs_started` is a one-way latch: the first numbered line closes the
/// title window for good, whether or not it produced a pair.
#[derive(Debug, Default)]
struct ParseState {
    title: Option<String>,
    pairs: Vec<WordPair>,
    pairs_started: bool,
}

/// Parse serialized lines, top-to-bottom, into a title and word pairs.
///
/// Total over any input: malformed lines are dropped, never errored. Lines
/// before the first numbered line accumulate into the title; numbered
/// lines split on the column marker when present, otherwise fall back to
/// treating the last whitespace token as the native term.
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> ParseResult {
    let state = lines
        .iter()
        .fold(ParseState::default(), |state, line| {
            consume_line(state, line.as_ref())
        });
    ParseResult {
        title: state.title,
        pairs: state.pairs,
        debug: None,
    }
}

fn consume_line(mut state: ParseState, line: &str) -> ParseState {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return state;
    }

    let Some(remainder) = strip_numbered_prefix(trimmed) else {
        // Non-numbered lines before any numbered line form the title;
        // afterwards they are page furniture. The column marker is a
        // stage-internal token and must not survive into the title.
        if !state.pairs_started {
            let fragment = strip_marker(trimmed);
            if !fragment.is_empty() {
                state.title = Some(match state.title.take() {
                    Some(title) => format!("{title} {fragment}"),
                    None => fragment,
                });
            }
        }
        return state;
    };

    state.pairs_started = true;

    if remainder.contains(SPLIT_MARKER) {
        let parts: Vec<&str> = remainder.split(SPLIT_MARKER).collect();
        if parts.len() < 2 {
            return state;
        }
        let foreign = parts[0].trim();
        let native = parts[1].trim();
        if foreign.is_empty() || native.is_empty() {
            return state;
        }
        state.pairs.push(WordPair::new(foreign, native));
    } else {
        // The marker did not survive serialization; the native column is
        // rightmost and typically a single word, so anchor on the last token.
        let words: Vec<&str> = remainder.split_whitespace().collect();
        if words.len() < 2 {
            return state;
        }
        let native = words[words.len() - 1];
        let foreign = words[..words.len() - 1].join(" ");
        state.pairs.push(WordPair::new(foreign, native));
    }
    state
}

fn strip_marker(line: &str) -> String {
    if !line.contains(SPLIT_MARKER) {
        return line.to_string();
    }
    line.split(SPLIT_MARKER)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip an anchored `^\d+\.\s*` list prefix, returning the remainder.
/// The numeric value is never used; output order is arrival order.
fn strip_numbered_prefix(line: &str) -> Option<&str> {
    let digits_end = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    if digits_end == 0 {
        return None;
    }
    let rest = line[digits_end..].strip_prefix('.')?;
    Some(rest.trim_start())
}
