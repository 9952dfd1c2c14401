//! GitHub-flavored markdown anchor/slug generation for the index.

/// Generate an index link to the heading titled `text`.
pub fn render_toc_link(text: &str) -> String {
    format!("[{}](#{})", text, github_slug(text))
}

/// Generate an index list item.
pub fn render_toc_item(title: &str) -> String {
    format!("* {}", render_toc_link(title))
}

/// GitHub heading anchor slug generation.
///
/// - lowercase
/// - remove all chars that aren't alphanumeric, space or hyphen
///   (`.`, `_` and `:` included)
/// - replace spaces with hyphens
fn github_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_simple() {
        assert_eq!(github_slug("hello world"), "hello-world");
    }

    #[test]
    fn slug_member_heading() {
        assert_eq!(github_slug("B.__init__"), "binit");
        assert_eq!(github_slug("Shape.area"), "shapearea");
    }

    #[test]
    fn slug_with_hyphens() {
        assert_eq!(github_slug("drop-index"), "drop-index");
    }

    #[test]
    fn toc_item() {
        assert_eq!(render_toc_item("Circle"), "* [Circle](#circle)");
    }
}
