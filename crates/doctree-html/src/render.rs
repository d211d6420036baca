//! HTML generation for documentation trees.
//!
//! Builds complete, self-contained HTML documents from read-only tree nodes.
//! All interpolated source text is escaped; the tree is never mutated.

use std::fs;
use std::path::Path;

use doctree::{Class, Method, Module, Package};
use tracing::debug;

use crate::error::RenderError;

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2em auto; max-width: 50em; padding: 0 1em; }
h1 { border-bottom: 2px solid #ccc; }
section.class { margin: 1.5em 0; }
p.bases code { background: #f4f4f4; padding: 0 0.3em; }
pre.docstring { background: #f4f4f4; padding: 0.7em; overflow-x: auto; }
ul.methods { list-style: none; padding-left: 1em; }
ul.methods > li { margin: 0.8em 0; }
p.package-doc { color: #444; }
";

/// Display heading for a class; the synthetic holder gets a fixed label
fn class_heading(class: &Class) -> String {
    if class.name.is_empty() {
        "Module-level functions".to_string()
    } else {
        escape_html(&class.name)
    }
}

/// `name(param, param)` signature text for a method
fn signature(method: &Method) -> String {
    format!("{}({})", method.name, method.parameters.join(", "))
}

/// Relative link target for a module's rendered page
fn href(module: &Module) -> String {
    format!("{}.html", module.path.display())
}

/// Render one module into a complete HTML documentation page
pub fn render_docpage(module: &Module) -> String {
    let mut output = String::new();

    push_header(&mut output, &module.name);
    output.push_str(&format!("<h1>{}</h1>\n", escape_html(&module.name)));

    for class in &module.classes {
        output.push_str("<section class=\"class\">\n");
        output.push_str(&format!("<h2>{}</h2>\n", class_heading(class)));

        if !class.parent.is_empty() {
            output.push_str(&format!(
                "<p class=\"bases\">Inherits from <code>{}</code></p>\n",
                escape_html(&class.parent)
            ));
        }

        if !class.docstring.is_empty() {
            output.push_str(&format!(
                "<pre class=\"docstring\">{}</pre>\n",
                escape_html(&class.docstring)
            ));
        }

        if !class.methods.is_empty() {
            output.push_str("<ul class=\"methods\">\n");
            for method in &class.methods {
                output.push_str(&format!("<li><code>{}</code>\n", escape_html(&signature(method))));
                if !method.docstring.is_empty() {
                    output.push_str(&format!(
                        "<pre class=\"docstring\">{}</pre>\n",
                        escape_html(&method.docstring)
                    ));
                }
                output.push_str("</li>\n");
            }
            output.push_str("</ul>\n");
        }

        output.push_str("</section>\n");
    }

    push_footer(&mut output);
    output
}

/// Render an index page linking every module in the tree
///
/// Packages are visited in pre-order; empty packages (no modules anywhere in
/// their subtree) are left out entirely.
pub fn render_index(root: &Package) -> String {
    let mut output = String::new();

    push_header(&mut output, "Index");
    output.push_str("<h1>Index</h1>\n");

    for package in root.iter().filter(|p| !p.is_empty()) {
        if !package.name.is_empty() {
            output.push_str(&format!("<h2>{}</h2>\n", escape_html(&package.name)));
        }
        if !package.docstring.is_empty() {
            output.push_str(&format!(
                "<p class=\"package-doc\">{}</p>\n",
                escape_html(&package.docstring)
            ));
        }
        if !package.modules.is_empty() {
            output.push_str("<ul>\n");
            for module in &package.modules {
                output.push_str(&format!(
                    "<li><a href=\"{}\">{}</a></li>\n",
                    escape_html(&href(module)),
                    escape_html(&module.name)
                ));
            }
            output.push_str("</ul>\n");
        }
    }

    push_footer(&mut output);
    output
}

/// Write a rendered page, creating parent directories as needed
pub fn write_page(path: &Path, contents: &str) -> Result<(), RenderError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| RenderError::write(path, e))?;
        }
    }
    fs::write(path, contents).map_err(|e| RenderError::write(path, e))?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote page");
    Ok(())
}

fn push_header(output: &mut String, title: &str) {
    output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    output.push_str("<meta charset=\"utf-8\">\n");
    output.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    output.push_str(&format!("<style>\n{STYLE}</style>\n"));
    output.push_str("</head>\n<body>\n");
}

fn push_footer(output: &mut String) {
    output.push_str("</body>\n</html>\n");
}

/// Escape special characters for HTML text and attribute values
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
