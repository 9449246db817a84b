use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::Context;

use crate::Result;

/// File access seam, so commands can run against an in-memory file system in
/// tests.
pub trait FileSystem {
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>>;
    fn open(&self, path: &Path) -> std::io::Result<Box<dyn Read>>;
    fn create(&self, path: &Path) -> std::io::Result<Box<dyn Write>>;
}

/// `FileSystem` backed by `std::fs`.
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn open(&self, path: &Path) -> std::io::Result<Box<dyn Read>> {
        File::open(path).map(|file| Box::new(file) as Box<dyn Read>)
    }

    fn create(&self, path: &Path) -> std::io::Result<Box<dyn Write>> {
        File::create(path).map(|file| Box::new(file) as Box<dyn Write>)
    }
}

/// Picks the stream a retrieved haste is written to.
pub fn setup_output(
    path: Option<&Path>,
    fs: &dyn FileSystem,
    stdout: impl Write + 'static,
) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => fs.create(path).context("Error creating output file"),
        None => Ok(Box::new(stdout)),
    }
}

/// Picks the stream the new haste content is read from.
pub fn setup_input(
    path: Option<&Path>,
    fs: &dyn FileSystem,
    stdin: impl Read + 'static,
) -> Result<Box<dyn Read>> {
    match path {
        Some(path) => fs.open(path).context("Error reading input file"),
        None => Ok(Box::new(stdin)),
    }
}
