//! Types under construction and the marking side-table.
//!
//! A member is marked while its type is still being built, before the
//! ancestor list exists. Marking only records the member name; the member
//! itself is stored and behaves exactly as an unmarked one. The registry
//! consumes the marks when the type is defined.

use crate::error::{DocChainError, Result};
use crate::model::Member;
use indexmap::{IndexMap, IndexSet};

/// Builder for a type that has not been registered yet.
#[derive(Debug, Clone, Default)]
pub struct TypeBuilder {
    pub(crate) name: String,
    pub(crate) bases: Vec<String>,
    pub(crate) doc: Option<String>,
    pub(crate) members: IndexMap<String, Member>,
    pub(crate) marked: IndexSet<String>,
}

impl TypeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        TypeBuilder {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Append a declared base. Order of calls is declaration order.
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.bases.push(base.into());
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add or replace a member. Replacing keeps an existing mark.
    pub fn member(mut self, name: impl Into<String>, member: Member) -> Self {
        self.members.insert(name.into(), member);
        self
    }

    /// Add a member and mark it in one step.
    pub fn extended_member(self, name: impl Into<String>, member: Member) -> Result<Self> {
        let name = name.into();
        let mut builder = self.member(name.clone(), member);
        builder.mark(&name)?;
        Ok(builder)
    }

    /// Mark `name` for documentation resolution when the type is defined.
    ///
    /// Fails with [`DocChainError::NotDocumentable`] for members without a
    /// documentation field. Marking twice is a no-op.
    pub fn mark(&mut self, name: &str) -> Result<()> {
        let member = self
            .members
            .get(name)
            .ok_or_else(|| DocChainError::UnknownMember {
                type_name: self.name.clone(),
                member: name.to_string(),
            })?;
        if !member.kind.is_documentable() {
            return Err(DocChainError::NotDocumentable {
                type_name: self.name.clone(),
                member: name.to_string(),
            });
        }
        self.marked.insert(name.to_string());
        Ok(())
    }

    pub fn is_marked(&self, name: &str) -> bool {
        self.marked.contains(name)
    }

    /// Marked member names in marking order.
    pub fn marked(&self) -> impl Iterator<Item = &str> {
        self.marked.iter().map(String::as_str)
    }
}
