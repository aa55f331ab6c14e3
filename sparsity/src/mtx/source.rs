//! File contents backing a Matrix Market parse
//!
//! Large array files (a 1000x1000 dense matrix is tens of megabytes) are
//! memory mapped when the `mmap` feature is enabled, so parsing borrows
//! straight from the page cache instead of copying into a `String`.

use crate::error::Result;
use log::trace;
use std::{fs::File, io::Read, path::Path};

#[cfg(feature = "mmap")]
use memmap2::{Mmap, MmapOptions};

/// Loaded file contents
pub enum MtxSource {
    #[cfg(feature = "mmap")]
    Mapped(Mmap),
    Owned(String),
}

impl MtxSource {
    /// Open a file, memory mapping it if requested and available
    pub fn open<P: AsRef<Path>>(path: P, memory_map: bool) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path)?;

        #[cfg(feature = "mmap")]
        if memory_map && file.metadata()?.len() > 0 {
            // SAFETY: Read-only mapping; the contents are validated as UTF-8
            // before use and never written through.
            let mmap = unsafe { MmapOptions::new().map(&file)? };
            trace!("memory mapped {} ({} bytes)", path.display(), mmap.len());
            return Ok(MtxSource::Mapped(mmap));
        }
        #[cfg(not(feature = "mmap"))]
        let _ = memory_map;

        let mut text = String::new();
        file.read_to_string(&mut text)?;
        trace!("read {} ({} bytes)", path.display(), text.len());
        Ok(MtxSource::Owned(text))
    }

    /// View the contents as text
    pub fn as_str(&self) -> Result<&str> {
        match self {
            #[cfg(feature = "mmap")]
            MtxSource::Mapped(mmap) => std::str::from_utf8(mmap).map_err(|e| {
                std::io::Error::new(std::io::ErrorKind::InvalidData, e).into()
            }),
            MtxSource::Owned(text) => Ok(text),
        }
    }
}
