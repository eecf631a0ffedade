//! Main document part parsing (`word/document.xml`).

use roxmltree::Node;

use crate::error::{Error, Result};
use crate::model::Paragraph;

use super::styles::StyleSheet;

/// WordprocessingML main namespace.
pub const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Office document relationships namespace (`r:` prefix).
pub const R_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Parse the body of a main document part into paragraphs.
///
/// Each paragraph keeps the exact source bytes of its `<w:p>` element as raw markup.
pub fn parse_body(xml: &str, styles: &StyleSheet, include_tables: bool) -> Result<Vec<Paragraph>> {
    let doc = roxmltree::Document::parse(xml)?;

    let body = doc
        .root_element()
        .children()
        .find(|n| n.has_tag_name((W_NS, "body")))
        .ok_or_else(|| Error::Xml("main document part has no w:body".to_string()))?;

    let mut paragraphs = Vec::new();
    collect_block_content(body, xml, styles, include_tables, &mut paragraphs);
    Ok(paragraphs)
}

fn collect_block_content(
    container: Node<'_, '_>,
    xml: &str,
    styles: &StyleSheet,
    include_tables: bool,
    out: &mut Vec<Paragraph>,
) {
    for node in container.children().filter(Node::is_element) {
        if node.has_tag_name((W_NS, "p")) {
            out.push(paragraph_from(node, xml, styles));
        } else if include_tables && node.has_tag_name((W_NS, "tbl")) {
            for cell in node
                .descendants()
                .filter(|n| n.has_tag_name((W_NS, "tc")) && innermost_table(*n) == Some(node))
            {
                collect_block_content(cell, xml, styles, include_tables, out);
            }
        }
    }
}

/// The table a cell belongs to (its nearest `w:tbl` ancestor).
fn innermost_table<'a, 'input>(cell: Node<'a, 'input>) -> Option<Node<'a, 'input>> {
    cell.ancestors().find(|n| n.has_tag_name((W_NS, "tbl")))
}

fn paragraph_from(p: Node<'_, '_>, xml: &str, styles: &StyleSheet) -> Paragraph {
    let style_id = p
        .children()
        .find(|n| n.has_tag_name((W_NS, "pPr")))
        .and_then(|ppr| ppr.children().find(|n| n.has_tag_name((W_NS, "pStyle"))))
        .and_then(|ps| ps.attribute((W_NS, "val")));

    Paragraph {
        text: paragraph_text(p),
        style_name: styles.resolve(style_id),
        raw_markup: xml[p.range()].to_string(),
        embed_ids: p
            .descendants()
            .filter_map(|n| n.attribute((R_NS, "embed")))
            .map(str::to_string)
            .collect(),
    }
}

/// Text of the paragraph's runs, including runs inside hyperlinks.
fn paragraph_text(p: Node<'_, '_>) -> String {
    let mut text = String::new();
    for child in p.children().filter(Node::is_element) {
        if child.has_tag_name((W_NS, "r")) {
            push_run_text(child, &mut text);
        } else if child.has_tag_name((W_NS, "hyperlink")) {
            for run in child.children().filter(|n| n.has_tag_name((W_NS, "r"))) {
                push_run_text(run, &mut text);
            }
        }
    }
    text
}

fn push_run_text(run: Node<'_, '_>, text: &mut String) {
    for item in run.children().filter(Node::is_element) {
        if item.tag_name().namespace() != Some(W_NS) {
            continue;
        }
        match item.tag_name().name() {
            "t" => text.push_str(item.text().unwrap_or_default()),
            "tab" | "ptab" => text.push('\t'),
            "br" | "cr" => text.push('\n'),
            "noBreakHyphen" => text.push('-'),
            _ => {}
        }
    }
}
