use crate::error::{OverlayableError, Result};
use crate::resource::Resource;
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

/// `@+id/name` creates an id; `@+android:id/..` and `@id/..` do not
fn id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^@\+id/([A-Za-z0-9_.]+)$").expect("valid id pattern"))
}

/// Parser for XML files in file-based resource directories (layouts, menus,
/// drawables, ...), collecting the ids they create inline
pub struct IdParser;

impl IdParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, path: &Path, contents: &str) -> Result<Vec<Resource>> {
        let mut ids = Vec::new();
        let mut reader = Reader::from_str(contents);
        reader.trim_text(true);

        let mut depth = 0usize;
        loop {
            let event = reader
                .read_event()
                .map_err(|e| OverlayableError::xml(path, e))?;

            match event {
                Event::Start(ref e) | Event::Empty(ref e) => {
                    for attr in e.attributes() {
                        let attr = attr.map_err(|err| OverlayableError::xml(path, err.into()))?;
                        let value = attr
                            .unescape_value()
                            .map_err(|err| OverlayableError::xml(path, err))?;
                        if let Some(cap) = id_pattern().captures(value.trim()) {
                            ids.push(Resource::new("id", &cap[1]));
                        }
                    }

                    if matches!(event, Event::Start(_)) {
                        depth += 1;
                    }
                }
                Event::End(_) => depth = depth.saturating_sub(1),
                Event::Eof => break,
                _ => {}
            }
        }

        if depth != 0 {
            return Err(OverlayableError::UnclosedElement {
                path: path.to_path_buf(),
            });
        }

        debug!("Parsed {}: {} inline ids", path.display(), ids.len());
        Ok(ids)
    }
}

impl Default for IdParser {
    fn default() -> Self {
        Self::new()
    }
}
