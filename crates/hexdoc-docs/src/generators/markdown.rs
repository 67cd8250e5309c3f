use std::fmt::Write;

use crate::model::ExportedSymbol;

/// First line of every generated document.
pub const GENERATED_HEADER: &str =
    "<!-- Generated by hexdoc. Update this documentation by updating the source code. -->";

/// Render a sequence of documented symbols as GitHub-flavoured Markdown.
///
/// Output depends only on the input, so rendering the same entries twice yields
/// identical bytes. An empty slice renders the header alone.
pub fn render_markdown(symbols: &[ExportedSymbol]) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{GENERATED_HEADER}");

    if symbols.is_empty() {
        return output;
    }

    output.push('\n');
    let _ = writeln!(output, "### Table of Contents\n");
    for symbol in symbols {
        let _ = writeln!(output, "-   [{}](#{})", symbol.name, anchor(&symbol.name));
    }

    for symbol in symbols {
        output.push('\n');
        render_symbol(&mut output, symbol);
    }

    output
}

fn render_symbol(buffer: &mut String, symbol: &ExportedSymbol) {
    let _ = writeln!(buffer, "## {}\n", symbol.name);
    let _ = writeln!(
        buffer,
        "> {} at line {}, column {}\n",
        symbol.kind.label(),
        symbol.location.line,
        symbol.location.column
    );

    if let Some(summary) = symbol.summary.as_deref().and_then(non_empty) {
        let _ = writeln!(buffer, "{summary}\n");
    }

    if let Some(deprecated) = symbol.deprecated.as_deref().and_then(non_empty) {
        let _ = writeln!(buffer, "**Deprecated**: {deprecated}\n");
    }

    if !symbol.parameters.is_empty() {
        let _ = writeln!(buffer, "### Parameters\n");
        for parameter in &symbol.parameters {
            let mut line = format!("-   `{}`", parameter.name);
            if let Some(ty) = parameter.type_hint.as_deref().and_then(non_empty) {
                let _ = write!(line, " **{ty}**");
            }
            if let Some(description) = parameter.description.as_deref().and_then(non_empty) {
                let _ = write!(line, " {description}");
            }
            let _ = writeln!(buffer, "{line}");
        }
        buffer.push('\n');
    }

    if !symbol.examples.is_empty() {
        let _ = writeln!(buffer, "### Examples\n");
        for example in &symbol.examples {
            let _ = writeln!(buffer, "```javascript\n{}\n```\n", example.trim_end());
        }
    }

    if let Some(returns) = symbol.returns.as_deref().and_then(non_empty) {
        let _ = writeln!(buffer, "Returns {returns}\n");
    }

    for tag in &symbol.tags {
        let mut line = format!("**{}**", tag.tag);
        if let Some(ty) = tag.type_hint.as_deref().and_then(non_empty) {
            let _ = write!(line, " `{ty}`");
        }
        if let Some(description) = tag.description.as_deref().and_then(non_empty) {
            let _ = write!(line, ": {description}");
        }
        let _ = writeln!(buffer, "{line}\n");
    }
}

/// GitHub heading anchor for a symbol name.
fn anchor(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .flat_map(char::to_lowercase)
        .collect()
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
