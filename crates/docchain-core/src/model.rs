//! Data model for registered types and their members.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Kind of a type member, as far as documentation is concerned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    /// Plain function.
    #[default]
    Function,
    /// Wrapper exposing an underlying function (bound, class-level or
    /// static method). Its documentation is the underlying function's.
    Method,
    /// Documentable but not function-like (e.g. a property).
    Property,
    /// Plain value with no documentation field.
    Data,
}

impl MemberKind {
    /// Whether members of this kind carry a documentation field at all.
    pub fn is_documentable(self) -> bool {
        !matches!(self, MemberKind::Data)
    }

    /// Whether a whole-type sweep resolves members of this kind.
    pub fn is_function_like(self) -> bool {
        matches!(self, MemberKind::Function | MemberKind::Method)
    }
}

/// A named entry of a type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Member {
    pub kind: MemberKind,
    doc: Option<String>,
}

impl Member {
    pub fn new(kind: MemberKind, doc: Option<String>) -> Self {
        let mut member = Member { kind, doc: None };
        member.set_doc(doc);
        member
    }

    pub fn function(doc: impl Into<String>) -> Self {
        Member::new(MemberKind::Function, Some(doc.into()))
    }

    pub fn method(doc: impl Into<String>) -> Self {
        Member::new(MemberKind::Method, Some(doc.into()))
    }

    pub fn property(doc: impl Into<String>) -> Self {
        Member::new(MemberKind::Property, Some(doc.into()))
    }

    pub fn data() -> Self {
        Member::new(MemberKind::Data, None)
    }

    /// Function-like member without documentation.
    pub fn undocumented(kind: MemberKind) -> Self {
        Member::new(kind, None)
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// Replace the documentation. Ignored for data members.
    pub fn set_doc(&mut self, doc: Option<String>) {
        if self.kind.is_documentable() {
            self.doc = doc;
        }
    }
}

/// A free-standing documented item (a function outside any type).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    pub doc: Option<String>,
}

impl Function {
    pub fn new(name: impl Into<String>, doc: Option<String>) -> Self {
        Function {
            name: name.into(),
            doc,
        }
    }
}

/// A registered type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDef {
    pub(crate) name: String,
    pub(crate) bases: Vec<String>,
    pub(crate) doc: Option<String>,
    pub(crate) members: IndexMap<String, Member>,
    /// Linearized ancestors, starting with the type itself. Never contains
    /// the root type.
    pub(crate) mro: Vec<String>,
}

impl TypeDef {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bases as declared.
    pub fn bases(&self) -> &[String] {
        &self.bases
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// Members defined directly on this type, in definition order.
    pub fn members(&self) -> &IndexMap<String, Member> {
        &self.members
    }

    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.get(name)
    }

    /// Ancestor list, most specific first, beginning with this type.
    pub fn mro(&self) -> &[String] {
        &self.mro
    }
}
