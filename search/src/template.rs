//! Per-entry result templates.
//!
//! A template is literal markup with `%value%`, `%label%` and `%data.<key>%`
//! placeholders. Every occurrence is substituted; a data key the option does
//! not carry renders as an empty string. Any other `%...%` run is left as text.

use navsearch_core::types::NavOption;

const DATA_PREFIX: &str = "data.";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Value,
    Label,
    Data(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Returns `None` when the markup is blank after trimming.
    pub fn parse(markup: &str) -> Option<Self> {
        let markup = markup.trim();
        if markup.is_empty() {
            return None;
        }

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = markup;

        while let Some(start) = rest.find('%') {
            literal.push_str(&rest[..start]);
            let after = &rest[start + 1..];

            let placeholder = after
                .find('%')
                .and_then(|end| placeholder(&after[..end]).map(|segment| (end, segment)));

            match placeholder {
                Some((end, segment)) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(segment);
                    rest = &after[end + 1..];
                }
                None => {
                    // Not a placeholder; the closing `%` may still open one.
                    literal.push('%');
                    rest = after;
                }
            }
        }
        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Some(Self { segments })
    }

    pub fn render(&self, option: &NavOption) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Value => push_escaped(&mut out, &option.value),
                Segment::Label => push_escaped(&mut out, &option.label),
                Segment::Data(key) => {
                    if let Some(value) = option.data.get(key) {
                        push_escaped(&mut out, value);
                    }
                }
            }
        }
        out
    }

    pub fn placeholder_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| !matches!(s, Segment::Literal(_)))
            .count()
    }
}

fn placeholder(name: &str) -> Option<Segment> {
    match name {
        "value" => Some(Segment::Value),
        "label" => Some(Segment::Label),
        _ => name
            .strip_prefix(DATA_PREFIX)
            .filter(|key| !key.is_empty() && !key.contains(char::is_whitespace))
            .map(|key| Segment::Data(key.to_string())),
    }
}

/// Fallback fragment when no template is configured.
pub fn render_default(option: &NavOption) -> String {
    let mut out = String::from("<a href=\"");
    push_escaped(&mut out, &option.value);
    out.push_str("\">");
    push_escaped(&mut out, &option.label);
    out.push_str("</a>");
    out
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
