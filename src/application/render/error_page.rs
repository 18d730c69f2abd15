//! Diagnostic page written in place of a template that failed to render

use std::fmt::Write;
use std::path::Path;

use crate::domain::ports::TemplateError;

/// HTML document describing a render failure
pub fn render_error_page(template: &Path, err: &TemplateError) -> String {
    let name = escape_html(&template.to_string_lossy());
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>Render error: {name}</title>");
    html.push_str(
        "<style>body{font-family:monospace;margin:2em}h1{color:#b00}pre{background:#f6f6f6;padding:1em;white-space:pre-wrap}</style>\n",
    );
    html.push_str("</head>\n<body>\n<h1>Render error</h1>\n");
    let _ = writeln!(html, "<p>{name}</p>");
    let _ = writeln!(html, "<pre>{}</pre>", escape_html(&err.message));
    if !err.causes.is_empty() {
        html.push_str("<h2>Caused by</h2>\n<ol>\n");
        for cause in &err.causes {
            let _ = writeln!(html, "<li><pre>{}</pre></li>", escape_html(cause));
        }
        html.push_str("</ol>\n");
    }
    html.push_str("</body>\n</html>\n");
    html
}

fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
