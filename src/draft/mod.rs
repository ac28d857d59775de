//! Drafting generation-ready enum models from pre-split declarations.
//!
//! The source front-end hands over one [`TypeDecl`] per enum type: its identifier, the type-level comment declaring
//! custom fields, and its members in declaration order. Drafting runs the semantic core over those strings and
//! produces immutable [`TypeDraft`]s for the code writer.
//!
//! ## Notes
//!
//! - A member whose field values fail to resolve aborts the type under `failfast`; otherwise it is skipped with a
//!   warning and drafting continues.
//! - Members named like the configured skip marker (`_`) are not drafted but still consume a positional index.

pub mod member_comment;

use enumgen_core::{
    CasingForms, Delimiters, ErrorKind, FieldError, FieldSpec, FieldValue, derive_imports, extract_field_specs,
    parse_alias_list, resolve_field_values,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::GenerateConfig;
pub use member_comment::{MemberComment, split_member_comment};

/// One constant declaration as split by the source front-end.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemberDecl {
    pub name: String,
    /// Trailing comment text, without the comment marker.
    #[serde(default)]
    pub comment: String,
}

/// One enum type as split by the source front-end.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeDecl {
    pub name: String,
    /// The type's own declaration comment (the field-spec line).
    #[serde(default)]
    pub comment: String,
    pub members: Vec<MemberDecl>,
}

/// A member ready for the writer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberDraft {
    pub name: String,
    pub positional_index: i64,
    /// Declaration order; the first alias is the canonical one.
    pub aliases: Vec<String>,
    pub fields: Vec<FieldValue>,
    pub valid: bool,
    pub forms: CasingForms,
}

/// An enum type ready for the writer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeDraft {
    pub name: String,
    pub forms: CasingForms,
    pub delimiters: Delimiters,
    pub field_specs: Vec<FieldSpec>,
    pub members: Vec<MemberDraft>,
    pub imports: Vec<String>,
}

/// Every drafted type of one generation run, with the combined import set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftSet {
    pub types: Vec<TypeDraft>,
    pub imports: Vec<String>,
}

/// Drafting a member failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{type_name}.{member} (index {index}): {source}")]
pub struct DraftError {
    pub type_name: String,
    pub member: String,
    pub index: i64,
    #[source]
    pub source: FieldError,
}

impl DraftError {
    pub fn kind(&self) -> ErrorKind {
        self.source.kind()
    }
}

/// Draft one member against its type's field specs.
///
/// ## Errors
/// - The [`FieldError`] from resolving the member's values.
pub fn draft_member(
    decl: &MemberDecl,
    positional_index: i64,
    specs: &[FieldSpec],
    delimiters: Delimiters,
    config: &GenerateConfig,
) -> Result<MemberDraft, FieldError> {
    let comment = split_member_comment(&decl.comment, delimiters, &config.invalid_marker);
    let aliases = if comment.aliases.trim().is_empty() {
        Vec::new()
    } else {
        parse_alias_list(comment.aliases)
    };
    let fields = resolve_field_values(comment.values, specs)?;

    Ok(MemberDraft {
        name: decl.name.clone(),
        positional_index,
        aliases,
        fields,
        valid: comment.valid,
        forms: CasingForms::new(&decl.name),
    })
}

/// Draft one enum type.
///
/// ## Errors
/// - Under `failfast`, the first member that fails to resolve.
#[tracing::instrument(skip_all, fields(type_name = %decl.name, member_count = decl.members.len()))]
pub fn draft_type(decl: &TypeDecl, config: &GenerateConfig) -> Result<TypeDraft, DraftError> {
    let (delimiters, field_specs) = extract_field_specs(&decl.comment);
    tracing::debug!(field_count = field_specs.len(), ?delimiters, "extracted field specs");

    let mut members = Vec::with_capacity(decl.members.len());
    for (offset, member) in decl.members.iter().enumerate() {
        let index = config.start_index + offset as i64;
        if member.name == config.skip_marker {
            tracing::debug!(index, "skipping placeholder member");
            continue;
        }

        match draft_member(member, index, &field_specs, delimiters, config) {
            Ok(draft) => members.push(draft),
            Err(source) => {
                let err = DraftError {
                    type_name: decl.name.clone(),
                    member: member.name.clone(),
                    index,
                    source,
                };
                if config.failfast {
                    return Err(err);
                }
                tracing::warn!(error = %err, "skipping member");
            }
        }
    }

    let imports = derive_imports(&field_specs);
    Ok(TypeDraft {
        name: decl.name.clone(),
        forms: CasingForms::new(&decl.name),
        delimiters,
        field_specs,
        members,
        imports,
    })
}

/// Draft every type of a generation run and derive the combined import set.
#[tracing::instrument(skip_all, fields(type_count = decls.len()))]
pub fn draft_types(decls: &[TypeDecl], config: &GenerateConfig) -> Result<DraftSet, DraftError> {
    let types = decls
        .iter()
        .map(|decl| draft_type(decl, config))
        .collect::<Result<Vec<_>, _>>()?;
    let imports = derive_imports(types.iter().flat_map(|t| &t.field_specs));
    Ok(DraftSet { types, imports })
}
