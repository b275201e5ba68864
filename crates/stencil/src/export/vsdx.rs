//! VSDX package export.
//!
//! A VSDX file is a zip archive of XML parts. Only the page index and the
//! page contents depend on the diagram; every other part is fixed.
//!
//! Writing is all-or-nothing: the archive is built in memory, written to a
//! temporary file next to the destination and renamed over it only once
//! complete.

mod templates;
mod xml;

use std::{
    fs,
    io::{Cursor, Write},
    path::{Path, PathBuf},
};

use log::{debug, info};
use tempfile::NamedTempFile;
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

use super::{Error, Exporter};
use crate::layout::Page;

/// Builds the complete package for a page, in memory.
///
/// # Errors
///
/// Returns [`Error::Xml`] or [`Error::Archive`] if a part cannot be
/// produced.
pub fn package(page: &Page, title: &str) -> Result<Vec<u8>, Error> {
    let pages = xml::pages_xml(page, title)?;
    let contents = xml::page_xml(page)?;

    let parts: [(&str, &str); 9] = [
        ("[Content_Types].xml", templates::CONTENT_TYPES),
        ("_rels/.rels", templates::ROOT_RELS),
        ("visio/document.xml", templates::DOCUMENT),
        ("visio/_rels/document.xml.rels", templates::DOCUMENT_RELS),
        ("visio/pages/pages.xml", &pages),
        ("visio/pages/_rels/pages.xml.rels", templates::PAGES_RELS),
        ("visio/pages/page1.xml", &contents),
        ("visio/windows.xml", templates::WINDOWS),
        ("docProps/app.xml", templates::APP),
    ];

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut archive = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, body) in parts {
        archive.start_file(name, options)?;
        archive.write_all(body.as_bytes()).map_err(Error::Io)?;
    }
    let bytes = archive.finish()?.into_inner();

    debug!(bytes_len = bytes.len(), shapes_len = page.shapes().len(); "Package built");
    Ok(bytes)
}

/// Atomically replaces `path` with `bytes`.
fn persist(bytes: &[u8], path: &Path) -> Result<(), Error> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(Error::Io)?;

    let mut file = NamedTempFile::new_in(dir).map_err(Error::Io)?;
    file.write_all(bytes).map_err(Error::Io)?;
    file.as_file().sync_all().map_err(Error::Io)?;
    file.persist(path).map_err(|err| Error::Io(err.error))?;
    Ok(())
}

/// Builder for a [`Vsdx`] exporter.
#[derive(Debug, Clone)]
pub struct VsdxBuilder {
    path: PathBuf,
    title: String,
}

impl VsdxBuilder {
    /// Creates a builder writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            title: String::new(),
        }
    }

    /// Sets the page name.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn build(self) -> Vsdx {
        Vsdx {
            path: self.path,
            title: self.title,
        }
    }
}

/// Writes pages as VSDX files.
#[derive(Debug, Clone)]
pub struct Vsdx {
    path: PathBuf,
    title: String,
}

impl Vsdx {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Exporter for Vsdx {
    fn export_page(&mut self, page: &Page) -> Result<(), Error> {
        let bytes = package(page, &self.title)?;
        persist(&bytes, &self.path)?;
        info!(path:? = self.path, title = self.title.as_str(); "VSDX written");
        Ok(())
    }
}
