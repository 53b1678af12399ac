//! Manifest generation
//!
//! Renders the `overlayable.xml` allow-list: a copyright header, an
//! autogeneration notice, and one `<item>` per overlayable resource inside
//! `<resources>/<overlayable>/<policy>`.

use chrono::Datelike;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{OverlayableError, Result};
use crate::resource::ResourceSet;

/// Notice placed above the root element
pub const AUTOGENERATED_NOTICE: &str = "THIS FILE IS AUTO GENERATED, DO NOT EDIT MANUALLY.";

/// Declaration content, single-quoted
const DECLARATION: &str = "xml version='1.0' encoding='utf-8'";

const INDENT: usize = 2;

/// Generator for overlayable manifests
#[derive(Debug, Clone)]
pub struct ManifestGenerator {
    overlayable_name: String,
    policy: String,
    year: i32,
}

impl ManifestGenerator {
    /// Create a generator for the named overlayable, dated this year
    pub fn new(overlayable_name: impl Into<String>) -> Self {
        Self {
            overlayable_name: overlayable_name.into(),
            policy: "public".to_string(),
            year: chrono::Local::now().year(),
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn with_policy(mut self, policy: impl Into<String>) -> Self {
        self.policy = policy.into();
        self
    }

    /// The resources the manifest lists: everything not already excluded
    pub fn project(&self, resources: &ResourceSet, exclusions: &ResourceSet) -> ResourceSet {
        let projected = resources.without(exclusions);
        debug!(
            "{} resources, {} excluded, {} overlayable",
            resources.len(),
            resources.len() - projected.len(),
            projected.len()
        );
        projected
    }

    /// Render the manifest for `resources` minus `exclusions`
    pub fn generate(&self, resources: &ResourceSet, exclusions: &ResourceSet) -> Result<String> {
        self.render(&self.project(resources, exclusions))
    }

    /// Render a manifest listing exactly `overlayable`, in `(type, name)` order
    pub fn render(&self, overlayable: &ResourceSet) -> Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT);

        let declaration = BytesDecl::from_start(BytesStart::from_content(DECLARATION, 3));
        emit(&mut writer, Event::Decl(declaration))?;
        emit(&mut writer, Event::Comment(BytesText::from_escaped(copyright_header(self.year))))?;
        emit(&mut writer, Event::Comment(BytesText::from_escaped(AUTOGENERATED_NOTICE)))?;

        emit(&mut writer, Event::Start(BytesStart::new("resources")))?;
        emit(
            &mut writer,
            Event::Start(
                BytesStart::new("overlayable")
                    .with_attributes([("name", self.overlayable_name.as_str())]),
            ),
        )?;

        let policy = BytesStart::new("policy").with_attributes([("type", self.policy.as_str())]);
        if overlayable.is_empty() {
            emit(&mut writer, Event::Empty(policy))?;
        } else {
            emit(&mut writer, Event::Start(policy))?;
            for resource in overlayable {
                // type before name
                let item = BytesStart::new("item").with_attributes([
                    ("type", resource.resource_type.as_str()),
                    ("name", resource.name.as_str()),
                ]);
                emit(&mut writer, Event::Empty(item))?;
            }
            emit(&mut writer, Event::End(BytesEnd::new("policy")))?;
        }

        emit(&mut writer, Event::End(BytesEnd::new("overlayable")))?;
        emit(&mut writer, Event::End(BytesEnd::new("resources")))?;

        let mut document = String::from_utf8_lossy(&writer.into_inner()).into_owned();
        document.push('\n');
        Ok(document)
    }

    /// Write a rendered document to `path`, creating parent directories
    pub fn write(&self, document: &str, path: &Path) -> Result<()> {
        let write_err = |source| OverlayableError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(path, document).map_err(write_err)?;

        info!("Wrote {}", path.display());
        Ok(())
    }
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|source| OverlayableError::Emit { source })
}

fn copyright_header(year: i32) -> String {
    format!(
        r#"
  Copyright (C) {year} The Android Open Source Project

  Licensed under the Apache License, Version 2.0 (the "License");
  you may not use this file except in compliance with the License.
  You may obtain a copy of the License at

       http://www.apache.org/licenses/LICENSE-2.0

  Unless required by applicable law or agreed to in writing, software
  distributed under the License is distributed on an "AS IS" BASIS,
  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
  See the License for the specific language governing permissions and
  limitations under the License.
  "#
    )
}
