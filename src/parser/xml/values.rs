use super::{attribute, tag_name};
use crate::error::{OverlayableError, Result};
use crate::resource::Resource;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::path::Path;
use tracing::debug;

/// Tags that may appear under `<resources>` without declaring anything
const NON_DECLARATIONS: &[&str] = &[
    "eat-comment",
    "skip",
    "public",
    "public-group",
    "staging-public-group",
    "java-symbol",
    "overlayable",
];

/// Parser for `res/values*/*.xml` files
pub struct ValuesParser;

impl ValuesParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a values file and return every resource it declares
    pub fn parse(&self, path: &Path, contents: &str) -> Result<Vec<Resource>> {
        let mut resources = Vec::new();
        let mut reader = Reader::from_str(contents);
        reader.trim_text(true);

        let mut depth = 0usize;
        let mut seen_root = false;
        let mut in_styleable = false;

        loop {
            let event = reader
                .read_event()
                .map_err(|e| OverlayableError::xml(path, e))?;

            match event {
                Event::Start(ref e) | Event::Empty(ref e) => {
                    let has_children = matches!(event, Event::Start(_));
                    let tag = tag_name(e);

                    match depth {
                        0 => {
                            if seen_root || tag != "resources" {
                                return Err(OverlayableError::UnexpectedRoot {
                                    path: path.to_path_buf(),
                                    expected: "resources",
                                    found: format!("<{}>", tag),
                                });
                            }
                            seen_root = true;
                        }
                        1 => {
                            if let Some(resource) = self.declaration(path, &tag, e)? {
                                in_styleable = has_children && resource.resource_type == "styleable";
                                resources.push(resource);
                            }
                        }
                        2 if in_styleable && tag == "attr" => {
                            let name = attribute(e, b"name")
                                .map_err(|err| OverlayableError::xml(path, err))?
                                .ok_or_else(|| OverlayableError::missing_attribute(path, &tag, "name"))?;
                            // `android:foo` refers to a framework attr
                            if !name.contains(':') {
                                resources.push(Resource::new("attr", name));
                            }
                        }
                        _ => {}
                    }

                    if has_children {
                        depth += 1;
                    }
                }
                Event::End(_) => {
                    depth = depth.saturating_sub(1);
                    if depth <= 1 {
                        in_styleable = false;
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if depth != 0 {
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

        debug!("Parsed {}: {} declarations", path.display(), resources.len());
        Ok(resources)
    }

    /// Map a direct child of `<resources>` to the resource it declares
    fn declaration(&self, path: &Path, tag: &str, element: &BytesStart) -> Result<Option<Resource>> {
        if NON_DECLARATIONS.contains(&tag) {
            return Ok(None);
        }

        let resource_type = match tag {
            "item" => attribute(element, b"type")
                .map_err(|e| OverlayableError::xml(path, e))?
                .ok_or_else(|| OverlayableError::missing_attribute(path, tag, "type"))?,
            "string-array" | "integer-array" | "array" => "array".to_string(),
            "declare-styleable" => "styleable".to_string(),
            other => other.to_string(),
        };

        let name = attribute(element, b"name")
            .map_err(|e| OverlayableError::xml(path, e))?
            .ok_or_else(|| OverlayableError::missing_attribute(path, tag, "name"))?;

        Ok(Some(Resource::new(resource_type, name)))
    }
}

impl Default for ValuesParser {
    fn default() -> Self {
        Self::new()
    }
}
