use std::{
    cell::RefCell,
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::{BatchError, core::item::ItemWriter};

const DEFAULT_INDENT: &[u8] = b"  ";

/// Encodes `items` as a JSON array indented by two spaces.
///
/// An empty slice gives `[]`.
pub fn to_json_pretty<T: Serialize>(items: &[T]) -> Result<Vec<u8>, BatchError> {
    encode(items, Some(DEFAULT_INDENT))
}

fn encode<T: Serialize>(items: &[T], indent: Option<&[u8]>) -> Result<Vec<u8>, BatchError> {
    let mut buffer = Vec::with_capacity(128 * items.len().max(1));

    match indent {
        Some(indent) => {
            let formatter = PrettyFormatter::with_indent(indent);
            let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
            items.serialize(&mut serializer)?;
        }
        None => serde_json::to_writer(&mut buffer, items)?,
    }

    Ok(buffer)
}

/// Writes each batch it receives as one JSON array.
pub struct JsonItemWriter<W: Write> {
    stream: RefCell<W>,
    indent: Option<Box<[u8]>>,
}

impl<W: Write> JsonItemWriter<W> {
    pub fn into_inner(self) -> W {
        self.stream.into_inner()
    }
}

impl<T: Serialize, W: Write> ItemWriter<T> for JsonItemWriter<W> {
    fn write(&self, items: &[T]) -> Result<(), BatchError> {
        let json = encode(items, self.indent.as_deref())?;
        self.stream.borrow_mut().write_all(&json)?;
        Ok(())
    }

    fn flush(&self) -> Result<(), BatchError> {
        self.stream.borrow_mut().flush()?;
        Ok(())
    }
}

/// A file that is created (or truncated) on the first write, so nothing touches
/// the disk for a batch that fails before it is written.
pub struct DeferredFile {
    path: PathBuf,
    file: Option<BufWriter<File>>,
}

impl DeferredFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            file: None,
        }
    }

    fn file(&mut self) -> io::Result<&mut BufWriter<File>> {
        let file = match self.file.take() {
            Some(file) => file,
            None => BufWriter::new(File::create(&self.path)?),
        };
        Ok(self.file.insert(file))
    }
}

impl Write for DeferredFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

pub struct JsonItemWriterBuilder {
    indent: Box<[u8]>,
    pretty_formatter: bool,
}

impl Default for JsonItemWriterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonItemWriterBuilder {
    pub fn new() -> JsonItemWriterBuilder {
        JsonItemWriterBuilder {
            indent: Box::from(DEFAULT_INDENT),
            pretty_formatter: true,
        }
    }

    pub fn indent(mut self, indent: &[u8]) -> JsonItemWriterBuilder {
        self.indent = Box::from(indent);
        self
    }

    pub fn pretty_formatter(mut self, yes: bool) -> JsonItemWriterBuilder {
        self.pretty_formatter = yes;
        self
    }

    /// Writes to the file at `path`, created (or truncated) on the first write.
    pub fn from_path<P: AsRef<Path>>(self, path: P) -> JsonItemWriter<DeferredFile> {
        self.from_writer(DeferredFile::new(path))
    }

    pub fn from_writer<W: Write>(self, writer: W) -> JsonItemWriter<W> {
        JsonItemWriter {
            stream: RefCell::new(writer),
            indent: self.pretty_formatter.then_some(self.indent),
        }
    }
}
