use crate::render::{basename, indent};
use crate::tree::{CategoryTree, NodeId};
use quick_xml::escape::escape;
use std::fmt::Write;

const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Render the tree as a nested `Global` / `Category` / `Resource` document.
///
/// Layout, two spaces of indent per depth:
///
/// ```text
/// <?xml version="1.0" encoding="UTF-8"?>
/// <Global name="Base">
///   <Category name="Alignment">
///     <Resource name="sample1.bam" autoscale="true"
///       path="/data/sample1.bam">
///     </Resource>
///   </Category>
/// </Global>
/// ```
///
/// Children are emitted in name order, a leaf's resources in the order its
/// filenames were inserted. Each resource carries the leaf's inherited
/// attributes verbatim; `name` and `path` values are escaped.
pub fn render_xml(tree: &CategoryTree) -> anyhow::Result<String> {
    tree.check_shape()?;

    let mut out = String::new();
    writeln!(out, "{}", XML_HEADER)?;

    let root = tree.node(tree.root());
    writeln!(out, r#"<Global name="{}">"#, escape(root.name()))?;
    for child in root.children() {
        write_category(tree, child, 1, &mut out)?;
    }
    writeln!(out, "</Global>")?;

    Ok(out)
}

fn write_category(
    tree: &CategoryTree,
    id: NodeId,
    depth: usize,
    out: &mut String,
) -> std::fmt::Result {
    let node = tree.node(id);
    let pad = indent(depth);

    writeln!(out, r#"{}<Category name="{}">"#, pad, escape(node.name()))?;
    if node.is_leaf() {
        let attrs = tree.effective_attrs(id).join(" ");
        for filename in node.filenames() {
            write_resource(filename, &attrs, depth + 1, out)?;
        }
    } else {
        for child in node.children() {
            write_category(tree, child, depth + 1, out)?;
        }
    }
    writeln!(out, "{}</Category>", pad)
}

fn write_resource(filename: &str, attrs: &str, depth: usize, out: &mut String) -> std::fmt::Result {
    let pad = indent(depth);

    write!(out, r#"{}<Resource name="{}""#, pad, escape(basename(filename)))?;
    if !attrs.is_empty() {
        write!(out, " {}", attrs)?;
    }
    writeln!(out)?;
    writeln!(out, r#"{}path="{}">"#, indent(depth + 1), escape(filename))?;
    writeln!(out, "{}</Resource>", pad)
}
