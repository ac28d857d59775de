//! CLI command implementations
//!
//! Commands render their report as a `String`; printing and exit codes are handled by the top-level `run()`.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use enumgen_core::lang::types;
use enumgen_core::{CasingForms, convert, derive_imports, extract_field_specs, parse_alias_list, resolve_field_values, singularize};

use super::{CliError, CliResult};
use crate::config::GenerateConfig;
use crate::draft::{TypeDecl, draft_types};

/// Write one `label value` row, labels padded to a fixed column.
fn row(out: &mut String, label: &str, value: impl std::fmt::Display) {
    if !out.is_empty() {
        out.push('\n');
    }
    // Writing into a String cannot fail.
    let _ = write!(out, "{label:<14}{value}");
}

fn field_label(name: &str) -> &str {
    if name.is_empty() { "_" } else { name }
}

/// Show how a type comment is read: its delimiter convention, field specs and imports.
pub fn render_fields(comment: &str) -> String {
    let (delimiters, specs) = extract_field_specs(comment);
    let mut out = String::new();
    row(&mut out, "delimiters", delimiters);
    for spec in &specs {
        let kind = spec.kind();
        row(&mut out, field_label(&spec.name), format!("{:<14}{}", kind.to_string(), kind.description()));
    }
    let imports = derive_imports(&specs);
    row(
        &mut out,
        "imports",
        if imports.is_empty() { "-".to_string() } else { imports.join(", ") },
    );
    out
}

/// Resolve a member's literals against the fields declared by `spec`.
pub fn render_values(literals: &str, spec: &str) -> CliResult<String> {
    let (_, specs) = extract_field_specs(spec);
    let values = resolve_field_values(literals, &specs).map_err(|e| CliError::failure(format!("error: {e}")))?;
    let mut out = String::new();
    for value in &values {
        row(&mut out, &value.name, &value.value);
    }
    if out.is_empty() {
        out.push_str("(no values)");
    }
    Ok(out)
}

/// One alias per line.
pub fn render_aliases(raw: &str) -> String {
    parse_alias_list(raw)
        .iter()
        .map(|alias| format!("{alias:?}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Convert `literal` to the type spelled by `type_token` and render it as a generated-code literal.
pub fn render_convert(type_token: &str, literal: &str) -> CliResult<String> {
    let kind = types::from_str(type_token)
        .ok_or_else(|| CliError::failure(format!("error: unknown type `{type_token}`")))?;
    let value = convert(literal, &kind.zero_value()).map_err(|e| CliError::failure(format!("error: {e}")))?;
    Ok(value.to_string())
}

/// Show every naming variant of `word`.
pub fn render_case(word: &str) -> String {
    let forms = CasingForms::new(word);
    let mut out = String::new();
    row(&mut out, "original", &forms.original);
    row(&mut out, "camel", &forms.camel);
    row(&mut out, "lower", &forms.lower);
    row(&mut out, "upper", &forms.upper);
    row(&mut out, "plural", &forms.plural_lower);
    row(&mut out, "plural camel", &forms.plural_camel);
    row(&mut out, "singular", singularize(word));
    out
}

/// Draft a JSON array of type declarations read from `path` (`-` reads stdin) and render the drafts as JSON.
pub fn draft_file(path: &Path, config: &GenerateConfig) -> CliResult<String> {
    let source = if path.as_os_str() == "-" {
        io::read_to_string(io::stdin())
    } else {
        fs::read_to_string(path)
    }
    .map_err(|e| CliError::failure(format!("error: cannot read {}: {e}", path.display())))?;

    draft_json(&source, config)
}

/// Draft a JSON array of type declarations and render the drafts as pretty JSON.
pub fn draft_json(source: &str, config: &GenerateConfig) -> CliResult<String> {
    let decls: Vec<TypeDecl> =
        serde_json::from_str(source).map_err(|e| CliError::failure(format!("error: invalid declarations: {e}")))?;
    tracing::debug!(types = decls.len(), "loaded declarations");

    let drafts = draft_types(&decls, config).map_err(|e| CliError::failure(format!("error: {e}")))?;
    serde_json::to_string_pretty(&drafts).map_err(|e| CliError::failure(format!("error: {e}")))
}
