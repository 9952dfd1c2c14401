//! Registered type hierarchy and the operations that rewrite documentation.

use crate::builder::TypeBuilder;
use crate::error::{DocChainError, Result};
use crate::linearize::linearize;
use crate::model::{Function, Member, MemberKind, TypeDef};
use crate::resolve::{self, DocBlocks};
use indexmap::{IndexMap, IndexSet};
use tracing::{debug, warn};

/// One source of documentation for [`Registry::extends`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent<'a> {
    /// Documentation text taken as-is.
    Doc(Option<&'a str>),
    /// A registered type; the member named like the target is looked up on
    /// it, inherited members included. A type without such a member
    /// contributes its own documentation.
    Type(&'a str),
}

/// Registry of finalized types, in registration order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    types: IndexMap<String, TypeDef>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn types(&self) -> impl Iterator<Item = &TypeDef> {
        self.types.values()
    }

    fn require(&self, name: &str) -> Result<&TypeDef> {
        self.get(name)
            .ok_or_else(|| DocChainError::UnknownType(name.to_string()))
    }

    /// Ancestor list of `name`, most specific first, root excluded.
    pub fn ancestors(&self, name: &str) -> Result<&[String]> {
        Ok(self.require(name)?.mro())
    }

    /// Find `member` on `type_name` or the first ancestor defining it.
    pub fn lookup(&self, type_name: &str, member: &str) -> Option<&Member> {
        self.lookup_with_owner(type_name, member).map(|(_, m)| m)
    }

    /// Like [`Registry::lookup`], also returning the defining type.
    pub fn lookup_with_owner(&self, type_name: &str, member: &str) -> Option<(&str, &Member)> {
        let def = self.get(type_name)?;
        def.mro().iter().find_map(|ancestor| {
            let owner = self.types.get(ancestor)?;
            owner.member(member).map(|m| (owner.name(), m))
        })
    }

    /// Every member name visible on `type_name`: own members first, then
    /// names introduced by each ancestor in ancestor order.
    pub fn member_names(&self, type_name: &str) -> Result<Vec<&str>> {
        let def = self.require(type_name)?;
        let mut names: IndexSet<&str> = IndexSet::new();
        for ancestor in def.mro() {
            if let Some(owner) = self.types.get(ancestor) {
                names.extend(owner.members().keys().map(String::as_str));
            }
        }
        Ok(names.into_iter().collect())
    }

    /// Register `builder` as-is. Marks are discarded unresolved.
    pub fn define(&mut self, builder: TypeBuilder) -> Result<&TypeDef> {
        let name = builder.name.clone();
        let marked = self.insert(builder)?;
        if !marked.is_empty() {
            warn!(
                type_name = %name,
                members = ?marked,
                "type defined without extension; marked members left unresolved"
            );
        }
        self.require(&name)
    }

    /// Register `builder`, then resolve every marked member and the type
    /// documentation against the complete ancestor list.
    pub fn define_extended(&mut self, builder: TypeBuilder) -> Result<&TypeDef> {
        let name = builder.name.clone();
        let marked = self.insert(builder)?;

        let registry: &Registry = self;
        let mro = registry.ancestors(&name)?;
        let resolved: Vec<(String, Option<String>)> = marked
            .into_iter()
            .map(|member| {
                let doc = resolve::attribute_doc(registry, mro, &member);
                (member, doc)
            })
            .collect();

        self.apply(&name, resolved);
        self.refresh_type_doc(&name);
        self.require(&name)
    }

    /// Resolve every function-like member visible on `name`, then the type
    /// documentation.
    ///
    /// A member inherited from an ancestor gets its own entry on `name`,
    /// with the owner's kind and the resolved documentation. The owner is
    /// left untouched.
    pub fn extend_all(&mut self, name: &str) -> Result<&TypeDef> {
        let mro = self.ancestors(name)?;
        let mut resolved: Vec<(String, Option<String>)> = Vec::new();
        let mut inherited: Vec<(String, MemberKind, Option<String>)> = Vec::new();
        for member in self.member_names(name)? {
            let Some((owner, found)) = self.lookup_with_owner(name, member) else {
                continue;
            };
            if !found.kind.is_function_like() {
                continue;
            }
            let doc = resolve::attribute_doc(self, mro, member);
            if owner == name {
                resolved.push((member.to_string(), doc));
            } else {
                debug!(type_name = %name, member, owner, "copying inherited member");
                inherited.push((member.to_string(), found.kind, doc));
            }
        }

        self.apply(name, resolved);
        if let Some(def) = self.types.get_mut(name) {
            for (member, kind, doc) in inherited {
                def.members.insert(member, Member::new(kind, doc));
            }
        }
        self.refresh_type_doc(name);
        self.require(name)
    }

    /// Chain `parents` in front of `target`'s own documentation and store the
    /// result on `target`.
    ///
    /// Blocks are kept in input order, so parent documentation comes first.
    pub fn extends(&self, parents: &[Parent<'_>], target: &mut Function) -> Result<String> {
        let mut blocks = DocBlocks::new();
        for parent in parents {
            match *parent {
                Parent::Doc(doc) => {
                    blocks.push(doc);
                }
                Parent::Type(type_name) => {
                    let def = self.require(type_name)?;
                    let doc = match self.lookup(type_name, &target.name) {
                        Some(member) => member.doc(),
                        None => def.doc(),
                    };
                    blocks.push(doc);
                }
            }
        }
        blocks.push(target.doc.as_deref());

        let doc = blocks.join();
        target.doc = (!doc.is_empty()).then(|| doc.clone());
        debug!(function = %target.name, parents = parents.len(), "extended documentation");
        Ok(doc)
    }

    /// Type form of [`Registry::extends`]: merge the documentation of
    /// `parents` with that of `name` and store it on `name`.
    pub fn extends_type(&mut self, parents: &[&str], name: &str) -> Result<String> {
        self.require(name)?;
        let mut chain: Vec<&str> = Vec::with_capacity(parents.len() + 1);
        for &parent in parents {
            self.require(parent)?;
            chain.push(parent);
        }
        chain.push(name);
        chain.reverse();

        let doc = resolve::type_doc(self, &chain);
        self.set_type_doc(name, &doc);
        Ok(doc)
    }

    /// Inherited documentation of `member` on `type_name`, without storing it.
    pub fn attribute_doc(&self, type_name: &str, member: &str) -> Result<Option<String>> {
        Ok(resolve::attribute_doc(self, self.ancestors(type_name)?, member))
    }

    /// Inherited documentation of `type_name`, without storing it.
    pub fn type_doc(&self, type_name: &str) -> Result<String> {
        Ok(resolve::type_doc(self, self.ancestors(type_name)?))
    }

    fn insert(&mut self, builder: TypeBuilder) -> Result<IndexSet<String>> {
        if self.contains(&builder.name) {
            return Err(DocChainError::DuplicateType(builder.name));
        }
        let mro = linearize(&builder.name, &builder.bases, |n| {
            self.types.get(n).map(|def| def.mro.as_slice())
        })?;
        debug!(type_name = %builder.name, ?mro, "registered type");

        let TypeBuilder {
            name,
            bases,
            doc,
            members,
            marked,
        } = builder;
        self.types.insert(
            name.clone(),
            TypeDef {
                name,
                bases,
                doc,
                members,
                mro,
            },
        );
        Ok(marked)
    }

    fn apply(&mut self, name: &str, resolved: Vec<(String, Option<String>)>) {
        let Some(def) = self.types.get_mut(name) else {
            return;
        };
        for (member, doc) in resolved {
            if let Some(m) = def.members.get_mut(&member) {
                debug!(type_name = %name, member = %member, "resolved member documentation");
                m.set_doc(doc);
            }
        }
    }

    fn refresh_type_doc(&mut self, name: &str) {
        if let Ok(doc) = self.type_doc(name) {
            self.set_type_doc(name, &doc);
        }
    }

    fn set_type_doc(&mut self, name: &str, doc: &str) {
        if let Some(def) = self.types.get_mut(name) {
            def.doc = (!doc.is_empty()).then(|| doc.to_string());
        }
    }
}
