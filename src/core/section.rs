/// Class of the centered inner container.
pub const CONTAINER_CLASS: &str = "container";

/// Wrap `children` markup in a section with a centered container.
///
/// Children are inserted verbatim; the class name is attribute-escaped.
pub fn render(children: &str, class_name: Option<&str>) -> String {
    let mut out = String::with_capacity(children.len() + 64);
    out.push_str("<section");
    if let Some(class) = class_name.filter(|c| !c.is_empty()) {
        out.push_str(" class=\"");
        escape_attr(class, &mut out);
        out.push('"');
    }
    out.push_str("><div class=\"");
    out.push_str(CONTAINER_CLASS);
    out.push_str("\">");
    out.push_str(children);
    out.push_str("</div></section>");
    out
}

fn escape_attr(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}
