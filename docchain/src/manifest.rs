//! JSON hierarchy manifests.
//!
//! A manifest lists types in definition order (bases first) and,
//! optionally, free functions whose documentation extends other items.
//! Loading a manifest registers every type and applies the resolution each
//! type asks for.

use anyhow::{bail, Context, Result};
use docchain::{Function, Member, MemberKind, Parent, Registry, TypeBuilder};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub types: Vec<TypeSpec>,
    #[serde(default)]
    pub functions: Vec<FunctionSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeSpec {
    pub name: String,
    #[serde(default)]
    pub bases: Vec<String>,
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub resolve: Resolve,
    #[serde(default)]
    pub members: Vec<MemberSpec>,
}

/// Resolution applied when a type is defined.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolve {
    /// Register only; marks are discarded.
    #[default]
    None,
    /// Resolve marked members and the type documentation.
    Marked,
    /// Resolve every function-like member and the type documentation.
    All,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemberSpec {
    pub name: String,
    #[serde(default)]
    pub kind: MemberKind,
    #[serde(default)]
    pub doc: Option<String>,
    /// Mark this member for resolution.
    #[serde(default)]
    pub extend: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FunctionSpec {
    pub name: String,
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub extends: Vec<ParentSpec>,
}

/// `{ "doc": ... }`, `{ "type": ... }` or `{ "function": ... }`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParentSpec {
    Doc(Option<String>),
    Type(String),
    /// An earlier free function of the same manifest, after resolution.
    Function(String),
}

/// Registry and free functions after every resolution has run.
#[derive(Debug, Default)]
pub struct Resolved {
    pub registry: Registry,
    pub functions: Vec<Function>,
}

/// Parse manifest JSON.
pub fn parse(input: &str) -> Result<Manifest> {
    serde_json::from_str(input).context("invalid manifest")
}

/// Register every type of `manifest` and resolve documentation.
pub fn load(manifest: &Manifest) -> Result<Resolved> {
    let mut registry = Registry::new();

    for spec in &manifest.types {
        define_type(&mut registry, spec)
            .with_context(|| format!("failed to define type `{}`", spec.name))?;
    }

    let mut functions: Vec<Function> = Vec::with_capacity(manifest.functions.len());
    for spec in &manifest.functions {
        let mut function = Function::new(&spec.name, spec.doc.clone());
        {
            let mut parents = Vec::with_capacity(spec.extends.len());
            for parent in &spec.extends {
                parents.push(match parent {
                    ParentSpec::Doc(doc) => Parent::Doc(doc.as_deref()),
                    ParentSpec::Type(name) => Parent::Type(name),
                    ParentSpec::Function(name) => {
                        let Some(earlier) = functions.iter().find(|f| &f.name == name) else {
                            bail!(
                                "function `{}` extends unknown function `{}`",
                                spec.name,
                                name
                            );
                        };
                        Parent::Doc(earlier.doc.as_deref())
                    }
                });
            }
            registry
                .extends(&parents, &mut function)
                .with_context(|| format!("failed to extend function `{}`", spec.name))?;
        }
        functions.push(function);
    }

    Ok(Resolved {
        registry,
        functions,
    })
}

fn define_type(registry: &mut Registry, spec: &TypeSpec) -> Result<()> {
    let mut builder = TypeBuilder::new(&spec.name);
    for base in &spec.bases {
        builder = builder.base(base);
    }
    if let Some(doc) = &spec.doc {
        builder = builder.doc(doc);
    }
    for member in &spec.members {
        builder = builder.member(&member.name, Member::new(member.kind, member.doc.clone()));
    }
    for member in spec.members.iter().filter(|m| m.extend) {
        builder.mark(&member.name)?;
    }

    match spec.resolve {
        Resolve::None => {
            registry.define(builder)?;
        }
        Resolve::Marked => {
            registry.define_extended(builder)?;
        }
        Resolve::All => {
            registry.define(builder)?;
            registry.extend_all(&spec.name)?;
        }
    }
    Ok(())
}
