//! Format-agnostic data model for resolved documentation.

use crate::manifest::Resolved;
use docchain::{unindent, MemberKind, TypeDef};
use serde::Serialize;

/// Everything rendered from one manifest.
#[derive(Debug, Default, Serialize)]
pub struct Document {
    pub types: Vec<TypeDoc>,
    pub functions: Vec<FunctionDoc>,
}

/// A registered type after resolution. Documentation is unindented for
/// display; resolved text already is.
#[derive(Debug, Serialize)]
pub struct TypeDoc {
    pub name: String,
    /// Bases as declared.
    pub bases: Vec<String>,
    /// Ancestor list, starting with the type itself.
    pub mro: Vec<String>,
    pub doc: Option<String>,
    /// Members defined on the type itself.
    pub members: Vec<MemberDoc>,
}

#[derive(Debug, Serialize)]
pub struct MemberDoc {
    pub name: String,
    pub kind: MemberKind,
    pub doc: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FunctionDoc {
    pub name: String,
    pub doc: Option<String>,
}

/// Unindented documentation, `None` when nothing is left.
fn display(doc: Option<&str>) -> Option<String> {
    doc.map(unindent).filter(|d| !d.is_empty())
}

impl TypeDoc {
    fn from_def(def: &TypeDef) -> Self {
        TypeDoc {
            name: def.name().to_string(),
            bases: def.bases().to_vec(),
            mro: def.mro().to_vec(),
            doc: display(def.doc()),
            members: def
                .members()
                .iter()
                .map(|(name, member)| MemberDoc {
                    name: name.clone(),
                    kind: member.kind,
                    doc: display(member.doc()),
                })
                .collect(),
        }
    }

    /// Linearized ancestors without the type itself.
    pub fn ancestors(&self) -> &[String] {
        self.mro.get(1..).unwrap_or_default()
    }
}

impl Document {
    /// Build the document for `resolved`.
    ///
    /// When `only` is non-empty, types not named in it are left out;
    /// free functions are left out too.
    pub fn build(resolved: &Resolved, only: &[String]) -> Self {
        let types = resolved
            .registry
            .types()
            .filter(|def| only.is_empty() || only.iter().any(|n| n == def.name()))
            .map(TypeDoc::from_def)
            .collect();
        let functions = if only.is_empty() {
            resolved
                .functions
                .iter()
                .map(|f| FunctionDoc {
                    name: f.name.clone(),
                    doc: display(f.doc.as_deref()),
                })
                .collect()
        } else {
            Vec::new()
        };
        Document { types, functions }
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.functions.is_empty()
    }
}
