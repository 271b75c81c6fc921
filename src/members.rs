use roxmltree::{Document, Node};

use crate::error::Error;

/// Collects the text of every `steamID64` child of a `members` element below the
/// document root, in document order. Values are trimmed and blank ones skipped.
pub fn parse_steam_ids(xml: &str) -> Result<Vec<String>, Error> {
    let doc = Document::parse(xml)?;

    let ids = doc
        .root_element()
        .descendants()
        .skip(1)
        .filter(|n| n.has_tag_name("members"))
        .flat_map(|members| members.children().filter(is_steam_id))
        .filter_map(|n| n.text())
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect();

    Ok(ids)
}

fn is_steam_id(node: &Node) -> bool {
    node.has_tag_name("steamID64")
}
