mod ids;
mod overlayable;
mod values;

pub use ids::IdParser;
pub use overlayable::OverlayableParser;
pub use values::ValuesParser;

use quick_xml::events::BytesStart;

/// Qualified tag name of an element, prefix included
fn tag_name(element: &BytesStart) -> String {
    String::from_utf8_lossy(element.name().as_ref()).to_string()
}

/// Unescaped value of the attribute `key`, if present
fn attribute(element: &BytesStart, key: &[u8]) -> quick_xml::Result<Option<String>> {
    for attr in element.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == key {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}
