//! The box-drawing renderer shared by both tree containers.
//!
//! Downstream callers compare the rendered text byte-for-byte, so the exact
//! prefix characters are part of the contract: a non-last child hangs off
//! `├─` with `│ ` continuing beneath it, the last child hangs off `└─` with
//! plain two-space padding beneath it.

const BRANCH: &str = "├─";
const LAST_BRANCH: &str = "└─";
const CONTINUATION: &str = "│ ";
const PADDING: &str = "  ";

/// Glues a node's rendered value onto its children's rendered blocks.
///
/// `children` holds one fully rendered multi-line block per occupied child,
/// in storage order. Vacant slots must already be filtered out by the
/// caller. A node with no occupied children renders as just its value line.
pub(crate) fn compose(value: &str, children: &[String]) -> String {
    let mut out = String::from(value);
    for (position, block) in children.iter().enumerate() {
        let last = position + 1 == children.len();
        for (line, text) in block.lines().enumerate() {
            out.push('\n');
            out.push_str(match (line, last) {
                (0, false) => BRANCH,
                (0, true) => LAST_BRANCH,
                (_, false) => CONTINUATION,
                (_, true) => PADDING,
            });
            out.push_str(text);
        }
    }
    out
}
