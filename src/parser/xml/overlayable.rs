use super::{attribute, tag_name};
use crate::error::{OverlayableError, Result};
use crate::resource::Resource;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::path::Path;
use tracing::debug;

/// Element path under which overlayable items live
const ITEM_PARENTS: [&str; 3] = ["resources", "overlayable", "policy"];

/// Parser for overlayable.xml files
///
/// Reads back the `<item type=".." name=".."/>` entries of every
/// `<overlayable>/<policy>` block. Used for the generated manifest and for
/// the exclusion mapping, which shares the format.
pub struct OverlayableParser;

impl OverlayableParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, path: &Path, contents: &str) -> Result<Vec<Resource>> {
        let mut resources = Vec::new();
        let mut reader = Reader::from_str(contents);
        reader.trim_text(true);

        let mut stack: Vec<String> = Vec::new();
        let mut seen_root = false;

        loop {
            let event = reader
                .read_event()
                .map_err(|e| OverlayableError::xml(path, e))?;

            match event {
                Event::Start(ref e) | Event::Empty(ref e) => {
                    let tag = tag_name(e);

                    if stack.is_empty() {
                        if seen_root || tag != "resources" {
                            return Err(OverlayableError::UnexpectedRoot {
                                path: path.to_path_buf(),
                                expected: "resources",
                                found: format!("<{}>", tag),
                            });
                        }
                        seen_root = true;
                    }

                    if tag == "item" && stack == ITEM_PARENTS {
                        let resource_type = attribute(e, b"type")
                            .map_err(|err| OverlayableError::xml(path, err))?
                            .ok_or_else(|| OverlayableError::missing_attribute(path, &tag, "type"))?;
                        let name = attribute(e, b"name")
                            .map_err(|err| OverlayableError::xml(path, err))?
                            .ok_or_else(|| OverlayableError::missing_attribute(path, &tag, "name"))?;
                        resources.push(Resource::new(resource_type, name));
                    }

                    if matches!(event, Event::Start(_)) {
                        stack.push(tag);
                    }
                }
                Event::End(_) => {
                    stack.pop();
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(OverlayableError::UnclosedElement {
                path: path.to_path_buf(),
            });
        }
        if !seen_root {
            return Err(OverlayableError::UnexpectedRoot {
                path: path.to_path_buf(),
                expected: "resources",
                found: "an empty document".to_string(),
            });
        }

        debug!("Parsed overlayable {}: {} items", path.display(), resources.len());
        Ok(resources)
    }
}

impl Default for OverlayableParser {
    fn default() -> Self {
        Self::new()
    }
}
