//! Inline-span parsing: bold/italic/strikethrough/inline-code/link markup
//! within a single block's already-complete text.
//!
//! This is a pure function over a finished string, not part of the
//! streaming state machine — the core only ever hands it block text after
//! a block has been appended or patched. It never sees partial markers,
//! so it does not need (and does not attempt) truncation-safety.

use ratatui::style::{Color, Modifier, Style};

/// A text span with associated style information.
///
/// Multiple `StyledSpan`s compose a line of styled text. Each span
/// carries a contiguous run of text sharing the same `ratatui::Style`.
pub struct StyledSpan {
    pub text: String,
    pub style: Style,
}

fn code_style() -> Style {
    Style::default()
        .bg(Color::Indexed(236))
        .fg(Color::Indexed(252))
        .add_modifier(Modifier::BOLD | Modifier::ITALIC)
}

/// Builds the single styled span for a whole `InlineCode` block's text.
/// Unlike `plain_spans`, the text is never re-scanned for markup — an
/// inline-code run's content is literal.
pub fn code_span(text: &str) -> StyledSpan {
    StyledSpan { text: text.to_string(), style: code_style() }
}

fn effective_style(stack: &[Style]) -> Style {
    stack.iter().fold(Style::default(), |acc, s| acc.patch(*s))
}

/// Parses inline markup in `text` into styled spans. Unterminated markers
/// (an opening `**` with no matching close, for example) are rendered as
/// literal text — this function never drops input characters.
pub fn plain_spans(text: &str) -> Vec<StyledSpan> {
    let chars: Vec<char> = text.chars().collect();
    let mut spans = Vec::new();
    let mut style_stack: Vec<Style> = Vec::new();
    let mut buf = String::new();
    let mut i = 0;

    let flush = |buf: &mut String, spans: &mut Vec<StyledSpan>, style: Style| {
        if !buf.is_empty() {
            spans.push(StyledSpan { text: std::mem::take(buf), style });
        }
    };

    while i < chars.len() {
        let ch = chars[i];

        if ch == '`' {
            if let Some(end) = find_closing(&chars, i + 1, &['`']) {
                flush(&mut buf, &mut spans, effective_style(&style_stack));
                let code: String = chars[i + 1..end].iter().collect();
                spans.push(StyledSpan { text: code, style: code_style() });
                i = end + 1;
                continue;
            }
        } else if ch == '*' && chars.get(i + 1) == Some(&'*') {
            if let Some(end) = find_closing_run(&chars, i + 2, "**") {
                flush(&mut buf, &mut spans, effective_style(&style_stack));
                style_stack.push(Style::default().add_modifier(Modifier::BOLD));
                let inner: String = chars[i + 2..end].iter().collect();
                spans.extend(inner_spans(&inner, &style_stack));
                style_stack.pop();
                i = end + 2;
                continue;
            }
        } else if ch == '~' && chars.get(i + 1) == Some(&'~') {
            if let Some(end) = find_closing_run(&chars, i + 2, "~~") {
                flush(&mut buf, &mut spans, effective_style(&style_stack));
                style_stack.push(Style::default().add_modifier(Modifier::CROSSED_OUT));
                let inner: String = chars[i + 2..end].iter().collect();
                spans.extend(inner_spans(&inner, &style_stack));
                style_stack.pop();
                i = end + 2;
                continue;
            }
        } else if ch == '*' || ch == '_' {
            if let Some(end) = find_closing(&chars, i + 1, &[ch]) {
                flush(&mut buf, &mut spans, effective_style(&style_stack));
                style_stack.push(Style::default().add_modifier(Modifier::ITALIC));
                let inner: String = chars[i + 1..end].iter().collect();
                spans.extend(inner_spans(&inner, &style_stack));
                style_stack.pop();
                i = end + 1;
                continue;
            }
        } else if ch == '[' {
            if let Some((label_end, url_end)) = find_link(&chars, i) {
                flush(&mut buf, &mut spans, effective_style(&style_stack));
                style_stack.push(Style::default().add_modifier(Modifier::ITALIC));
                let label: String = chars[i + 1..label_end].iter().collect();
                spans.extend(inner_spans(&label, &style_stack));
                style_stack.pop();
                i = url_end + 1;
                continue;
            }
        }

        buf.push(ch);
        i += 1;
    }
    flush(&mut buf, &mut spans, effective_style(&style_stack));
    spans
}

/// Recursively parses an already-isolated inner run so nested markers
/// (e.g. `**bold _and italic_**`) still split into separate spans.
fn inner_spans(text: &str, outer_style_stack: &[Style]) -> Vec<StyledSpan> {
    let base = effective_style(outer_style_stack);
    plain_spans(text)
        .into_iter()
        .map(|s| StyledSpan { text: s.text, style: base.patch(s.style) })
        .collect()
}

fn find_closing(chars: &[char], start: usize, marker: &[char]) -> Option<usize> {
    (start..chars.len()).find(|&j| marker.contains(&chars[j]))
}

fn find_closing_run(chars: &[char], start: usize, marker: &str) -> Option<usize> {
    let marker: Vec<char> = marker.chars().collect();
    let n = marker.len();
    let mut j = start;
    while j + n <= chars.len() {
        if chars[j..j + n] == marker[..] {
            return Some(j);
        }
        j += 1;
    }
    None
}

/// Finds `[label](url)` starting at `chars[i] == '['`. Returns
/// `(index of ']', index of ')')` if well-formed.
fn find_link(chars: &[char], i: usize) -> Option<(usize, usize)> {
    let label_end = (i + 1..chars.len()).find(|&j| chars[j] == ']')?;
    if chars.get(label_end + 1) != Some(&'(') {
        return None;
    }
    let url_end = (label_end + 2..chars.len()).find(|&j| chars[j] == ')')?;
    Some((label_end, url_end))
}
