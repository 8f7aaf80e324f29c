use crate::render::{basename, indent};
use crate::tree::{CategoryTree, NodeId};

/// Plain outline of the tree: one node name per line, leaf filenames by
/// basename one level below their node.
pub fn render_text(tree: &CategoryTree) -> anyhow::Result<String> {
    tree.check_shape()?;

    let mut out = String::new();
    write_node(tree, tree.root(), 0, &mut out);
    Ok(out)
}

fn write_node(tree: &CategoryTree, id: NodeId, depth: usize, out: &mut String) {
    let node = tree.node(id);
    out.push_str(&indent(depth));
    out.push_str(node.name());
    out.push('\n');

    for child in node.children() {
        write_node(tree, child, depth + 1, out);
    }
    for filename in node.filenames() {
        out.push_str(&indent(depth + 1));
        out.push_str(basename(filename));
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{NodeAttrs, RulesSpec};
    use pretty_assertions::assert_eq;

    #[test]
    fn outlines_nodes_and_basenames() {
        let table = RulesSpec::from_json_str(r#"{ "Type": { "bam$": "Alignment" }, "Sample": ["s[0-9]"] }"#)
            .unwrap()
            .validate_and_build()
            .unwrap();
        let filenames = vec!["/d/s2.bam".to_string(), "/d/s1.bam".to_string(), "/d/notes".to_string()];
        let c = table.classify(&filenames);
        let tree = CategoryTree::build("Base", &c, &filenames, &NodeAttrs::default()).unwrap();

        assert_eq!(
            render_text(&tree).unwrap(),
            "Base\n  Alignment\n    s1\n      s1.bam\n    s2\n      s2.bam\n  NoMatch\n    NoMatch\n      notes\n"
        );
    }
}
