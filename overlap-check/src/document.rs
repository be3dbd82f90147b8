//! Input documents.
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// A document to be compared: a stable identifier and a readable body.
pub trait Document {
    /// Gets the identifier reported in comparison results.
    fn id(&self) -> &str;

    /// Opens the body of the document for reading.
    fn open(&self) -> io::Result<Box<dyn Read + '_>>;
}

/// A document backed by a file on disk, identified by its file name.
#[derive(Clone, Debug)]
pub struct FileDocument {
    path: PathBuf,
    id: String,
}

impl FileDocument {
    /// Creates an instance whose identifier is the final component of `path`.
    pub fn new<P>(path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        let path = path.into();
        let id = path.file_name().map_or_else(
            || path.to_string_lossy().into_owned(),
            |name| name.to_string_lossy().into_owned(),
        );
        Self { path, id }
    }

    /// Creates an instance with an explicit identifier.
    pub fn with_id<P, S>(path: P, id: S) -> Self
    where
        P: Into<PathBuf>,
        S: Into<String>,
    {
        Self {
            path: path.into(),
            id: id.into(),
        }
    }

    /// Gets the path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Document for FileDocument {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(io::BufReader::new(File::open(&self.path)?)))
    }
}

/// A document whose body is already in memory.
#[derive(Clone, Debug)]
pub struct TextDocument {
    id: String,
    text: String,
}

impl TextDocument {
    /// Creates an instance.
    pub fn new<I, T>(id: I, text: T) -> Self
    where
        I: Into<String>,
        T: Into<String>,
    {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    /// Gets the body.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Document for TextDocument {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(self.text.as_bytes()))
    }
}

impl<D> Document for &D
where
    D: Document + ?Sized,
{
    fn id(&self) -> &str {
        (**self).id()
    }

    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        (**self).open()
    }
}
