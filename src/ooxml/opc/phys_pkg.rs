//! Physical package writer.
//!
//! Handles the low-level writing of parts into a ZIP archive.

use crate::ooxml::opc::error::Result;
use crate::ooxml::opc::packuri::PackURI;
use std::io::{Cursor, Write};
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Physical package writer for creating OPC packages in memory.
pub struct PhysPkgWriter {
    /// The underlying ZIP archive writer
    archive: ZipWriter<Cursor<Vec<u8>>>,
}

impl PhysPkgWriter {
    /// Create a new package writer that writes to memory.
    pub fn new() -> Self {
        Self {
            archive: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Write a part to the package with Deflate compression.
    ///
    /// # Arguments
    /// * `pack_uri` - The PackURI for the part
    /// * `blob` - The binary content to write
    pub fn write(&mut self, pack_uri: &PackURI, blob: &[u8]) -> Result<()> {
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        self.archive.start_file(pack_uri.membername(), options)?;
        self.archive.write_all(blob)?;
        Ok(())
    }

    /// Finish writing and return the package bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.archive.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for PhysPkgWriter {
    fn default() -> Self {
        Self::new()
    }
}
