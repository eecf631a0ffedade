//! Relationship part parsing (`word/_rels/document.xml.rels`).

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::Result;
use crate::model::{RelationshipEntry, RelationshipTable};

/// Package path of the main document's relationship part.
pub const DOCUMENT_RELS_PART: &str = "word/_rels/document.xml.rels";

/// Parse a relationship part into a table, keeping document order.
pub fn parse_relationships(xml: &str) -> Result<RelationshipTable> {
    let mut table = RelationshipTable::new();
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Empty(e) | Event::Start(e) if e.local_name().as_ref() == b"Relationship" => {
                if let Some(entry) = relationship_from(&e)? {
                    table.push(entry);
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(table)
}

fn relationship_from(e: &BytesStart<'_>) -> Result<Option<RelationshipEntry>> {
    let mut id = None;
    let mut target = None;
    let mut rel_type = String::new();
    let mut external = false;

    for attr in e.attributes() {
        let attr = attr?;
        let value = String::from_utf8_lossy(&attr.value).to_string();
        match attr.key.as_ref() {
            b"Id" => id = Some(value),
            b"Target" => target = Some(value),
            b"Type" => rel_type = value,
            b"TargetMode" => external = value.eq_ignore_ascii_case("External"),
            _ => {}
        }
    }

    let (Some(id), Some(target)) = (id, target) else {
        log::debug!("Skipping relationship without Id or Target");
        return Ok(None);
    };

    let mut entry = RelationshipEntry::new(id, target, rel_type);
    entry.external = external;
    Ok(Some(entry))
}
