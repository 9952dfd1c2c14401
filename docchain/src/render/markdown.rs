//! GitHub-flavored markdown renderer.
//!
//! Layout: an index of every type and free function, then one `##` block per
//! type with a `###` block per documented member, then the free functions.

use crate::model::*;
use crate::render::Renderer;
use crate::toc;
use anyhow::Result;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, doc: &Document) -> Result<String> {
        let mut output = String::new();

        if !doc.is_empty() {
            output.push_str("## Index\n\n");
            for ty in &doc.types {
                output.push_str(&toc::render_toc_item(&ty.name));
                output.push('\n');
            }
            for func in &doc.functions {
                output.push_str(&toc::render_toc_item(&func.name));
                output.push('\n');
            }
            output.push('\n');
        }

        for ty in &doc.types {
            output.push_str(&render_type(ty));
            output.push('\n');
        }

        if !doc.functions.is_empty() {
            output.push_str("## Functions\n\n");
            for func in &doc.functions {
                output.push_str(&render_function(func));
                output.push('\n');
            }
        }

        Ok(output)
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

/// Render one type block.
fn render_type(ty: &TypeDoc) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("## {}\n", ty.name));

    let ancestors = ty.ancestors();
    if !ancestors.is_empty() {
        let rendered: Vec<String> = ancestors.iter().map(|a| format!("`{}`", a)).collect();
        lines.push(format!("> Bases: {}\n", rendered.join(", ")));
    }

    if let Some(ref doc) = ty.doc {
        lines.push(doc.clone());
        lines.push(String::new());
    }

    // Undocumented members (and data members) get no block
    for member in &ty.members {
        let Some(ref doc) = member.doc else {
            continue;
        };
        lines.push(format!("### {}.{}\n", ty.name, member.name));
        lines.push(doc.clone());
        lines.push(String::new());
    }

    lines.join("\n")
}

fn render_function(func: &FunctionDoc) -> String {
    let mut lines = vec![format!("### {}\n", func.name)];
    if let Some(ref doc) = func.doc {
        lines.push(doc.clone());
        lines.push(String::new());
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use docchain::MemberKind;

    fn sample() -> Document {
        Document {
            types: vec![TypeDoc {
                name: "B".to_string(),
                bases: vec!["A".to_string()],
                mro: vec!["B".to_string(), "A".to_string()],
                doc: Some("A docs\n\nB docs".to_string()),
                members: vec![
                    MemberDoc {
                        name: "run".to_string(),
                        kind: MemberKind::Function,
                        doc: Some("Run.".to_string()),
                    },
                    MemberDoc {
                        name: "cache".to_string(),
                        kind: MemberKind::Data,
                        doc: None,
                    },
                ],
            }],
            functions: vec![],
        }
    }

    #[test]
    fn render_type_block() {
        let out = MarkdownRenderer.render(&sample()).unwrap();
        assert_eq!(
            out,
            "## Index\n\n* [B](#b)\n\n\
             ## B\n\n> Bases: `A`\n\nA docs\n\nB docs\n\n### B.run\n\nRun.\n\n"
        );
    }

    #[test]
    fn render_functions_section() {
        let doc = Document {
            types: vec![],
            functions: vec![FunctionDoc {
                name: "f4".to_string(),
                doc: Some("f1\n\nf4".to_string()),
            }],
        };
        let out = MarkdownRenderer.render(&doc).unwrap();
        assert!(out.contains("* [f4](#f4)"));
        assert!(out.contains("## Functions\n\n### f4\n\nf1\n\nf4\n"));
    }

    #[test]
    fn render_empty_document() {
        assert_eq!(MarkdownRenderer.render(&Document::default()).unwrap(), "");
    }
}
