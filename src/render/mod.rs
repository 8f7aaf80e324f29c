//! Rendering a finished [`CategoryTree`](crate::tree::CategoryTree).
//!
//! Renderers build the whole document in memory and return it; callers write
//! it out only once it is complete.

pub mod text;
pub mod xml;

pub use text::render_text;
pub use xml::render_xml;

const INDENT: &str = "  ";

fn indent(depth: usize) -> String {
    INDENT.repeat(depth)
}

/// Final path segment of `filename`.
fn basename(filename: &str) -> &str {
    filename.rsplit('/').next().unwrap_or(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basename_takes_last_segment() {
        assert_eq!(basename("/data/run1/sample1.bam"), "sample1.bam");
        assert_eq!(basename("sample1.bam"), "sample1.bam");
        assert_eq!(basename("/data/dir/"), "");
    }
}
