//! C3 linearization of declared bases.
//!
//! Every type implicitly derives from [`ROOT_TYPE`]. The root is common to
//! all ancestor lists, so it is left out of them entirely.

use crate::error::{DocChainError, Result};

/// Name of the implicit root type shared by every hierarchy.
pub const ROOT_TYPE: &str = "object";

/// Compute the ancestor list of `name` from its declared `bases`.
///
/// `lookup` returns the already computed ancestor list of a registered type.
/// The result starts with `name` itself and never contains [`ROOT_TYPE`].
pub(crate) fn linearize<'a, F>(name: &str, bases: &[String], lookup: F) -> Result<Vec<String>>
where
    F: Fn(&str) -> Option<&'a [String]>,
{
    let bases: Vec<&str> = bases
        .iter()
        .map(String::as_str)
        .filter(|b| *b != ROOT_TYPE)
        .collect();

    for (i, base) in bases.iter().enumerate() {
        if bases[..i].contains(base) {
            return Err(DocChainError::DuplicateBase {
                type_name: name.to_string(),
                base: base.to_string(),
            });
        }
    }

    let mut seqs: Vec<Vec<&str>> = Vec::with_capacity(bases.len() + 1);
    for &base in &bases {
        let mro = lookup(base).ok_or_else(|| DocChainError::UnknownType(base.to_string()))?;
        seqs.push(mro.iter().map(String::as_str).collect());
    }
    seqs.push(bases);

    let mut out = vec![name.to_string()];
    loop {
        seqs.retain(|s| !s.is_empty());
        if seqs.is_empty() {
            return Ok(out);
        }

        // First head that does not appear in the tail of any sequence.
        let head = seqs
            .iter()
            .map(|s| s[0])
            .find(|cand| !seqs.iter().any(|s| s[1..].contains(cand)))
            .ok_or_else(|| DocChainError::InconsistentHierarchy(name.to_string()))?;

        out.push(head.to_string());
        for seq in &mut seqs {
            if seq[0] == head {
                seq.remove(0);
            }
        }
    }
}
