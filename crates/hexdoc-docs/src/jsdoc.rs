use crate::model::{JsDocTag, ParameterDoc};

/// Structured representation of a parsed JSDoc comment.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParsedJsDoc {
    /// Description text before the first tag.
    pub summary: Option<String>,
    /// `@param` / `@arg` / `@argument` tags.
    pub parameters: Vec<ParameterDoc>,
    /// `@returns` / `@return` description, prefixed with its type when present.
    pub returns: Option<String>,
    pub deprecated: Option<String>,
    /// `@example` bodies, verbatim.
    pub examples: Vec<String>,
    /// Tags without a dedicated field.
    pub tags: Vec<JsDocTag>,
    /// Whether the comment contained `@internal` or `@private`.
    pub is_internal: bool,
}

/// A tag line plus the continuation lines that follow it.
struct TagBlock<'a> {
    name: &'a str,
    lines: Vec<&'a str>,
}

impl TagBlock<'_> {
    /// Payload joined into a single line.
    fn inline(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Payload with line structure preserved.
    fn verbatim(&self) -> String {
        self.lines.join("\n").trim().to_string()
    }
}

/// Parse a JSDoc body (without the `/**` and `*/` delimiters).
///
/// Supports the subset of JSDoc that hexlet packages use: a free-form description
/// followed by block tags. Inline tags such as `{@link}` are kept as text.
pub fn parse_jsdoc(raw: &str) -> ParsedJsDoc {
    let lines = strip_gutter(raw);
    let tag_start = lines
        .iter()
        .position(|line| line.trim_start().starts_with('@'))
        .unwrap_or(lines.len());

    let mut doc = ParsedJsDoc {
        summary: compose_summary(&lines[..tag_start]),
        ..ParsedJsDoc::default()
    };

    for block in split_blocks(&lines[tag_start..]) {
        match block.name {
            "param" | "arg" | "argument" => {
                if let Some(param) = parse_param(&block.inline()) {
                    doc.parameters.push(param);
                }
            }
            "returns" | "return" => {
                let (type_hint, description) = split_type(&block.inline());
                let value = match (type_hint, description) {
                    (Some(ty), Some(desc)) => format!("{ty} {desc}"),
                    (Some(ty), None) => ty,
                    (None, Some(desc)) => desc,
                    (None, None) => continue,
                };
                doc.returns = Some(value);
            }
            "deprecated" => {
                let message = block.inline();
                doc.deprecated = Some(if message.is_empty() {
                    "Deprecated".to_string()
                } else {
                    message
                });
            }
            "example" => {
                let example = block.verbatim();
                if !example.is_empty() {
                    doc.examples.push(example);
                }
            }
            "internal" | "private" => doc.is_internal = true,
            other => {
                let mut tag = JsDocTag::new(other);
                let (type_hint, description) = split_type(&block.inline());
                tag.type_hint = type_hint;
                tag.description = description;
                doc.tags.push(tag);
            }
        }
    }

    doc
}

/// Removes the leading `*` gutter and surrounding whitespace of each line.
fn strip_gutter(raw: &str) -> Vec<&str> {
    raw.lines()
        .map(|line| {
            let line = line.trim();
            match line.strip_prefix('*') {
                Some(rest) => rest.strip_prefix(' ').unwrap_or(rest).trim_end(),
                None => line,
            }
        })
        .collect()
}

fn compose_summary(lines: &[&str]) -> Option<String> {
    let text = lines
        .iter()
        .map(|line| line.trim())
        .collect::<Vec<_>>()
        .join("\n");
    // Blank lines separate paragraphs; single newlines are soft breaks.
    let paragraphs = text
        .split("\n\n")
        .map(|paragraph| {
            paragraph
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|paragraph| !paragraph.is_empty())
        .collect::<Vec<_>>();
    (!paragraphs.is_empty()).then(|| paragraphs.join("\n\n"))
}

fn split_blocks<'a>(lines: &[&'a str]) -> Vec<TagBlock<'a>> {
    let mut blocks: Vec<TagBlock<'a>> = Vec::new();
    for &line in lines {
        if let Some(rest) = line.trim_start().strip_prefix('@') {
            let (name, payload) = rest
                .split_once(char::is_whitespace)
                .unwrap_or((rest, ""));
            blocks.push(TagBlock {
                name,
                lines: vec![payload],
            });
        } else if let Some(block) = blocks.last_mut() {
            block.lines.push(line);
        }
    }
    blocks
}

fn parse_param(payload: &str) -> Option<ParameterDoc> {
    let (type_hint, rest) = split_type(payload);
    let rest = rest.unwrap_or_default();
    let (name, description) = rest
        .split_once(char::is_whitespace)
        .unwrap_or((rest.as_str(), ""));

    // `[name=default]` marks an optional parameter.
    let name = name.trim_matches(|c| c == '[' || c == ']');
    let name = name.split('=').next().unwrap_or(name).trim();
    if name.is_empty() {
        return None;
    }

    let mut param = ParameterDoc::new(name);
    param.type_hint = type_hint;
    let description = description.trim().trim_start_matches("- ").trim();
    if !description.is_empty() {
        param.description = Some(description.to_string());
    }
    Some(param)
}

/// Splits a leading `{type}` expression from the rest of a tag payload.
fn split_type(payload: &str) -> (Option<String>, Option<String>) {
    let trimmed = payload.trim();
    let non_empty = |s: &str| (!s.trim().is_empty()).then(|| s.trim().to_string());

    let Some(stripped) = trimmed.strip_prefix('{') else {
        return (None, non_empty(trimmed));
    };

    // Type expressions may nest braces, e.g. `{{ x: number }}`.
    let mut depth = 1usize;
    for (idx, ch) in stripped.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return (non_empty(&stripped[..idx]), non_empty(&stripped[idx + 1..]));
                }
            }
            _ => {}
        }
    }
    (None, non_empty(trimmed))
}
