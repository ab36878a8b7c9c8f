//! File reference parsing.
//!
//! Turns a loosely-typed file reference (a path, a `scheme://` URL or a
//! named in-memory blob) into a [`FileDescriptor`]: name, extension,
//! compression, directory and protocol. The URL builders in
//! [`crate::client`] only ever use the descriptor's `path`.

mod protocol;
mod split;

pub use protocol::match_protocol;
pub use split::{dir_prefix, file_name, split_extension, strip_query};

/// Outer extensions recognized as a compression wrapper.
pub const COMPRESSED_EXTENSIONS: &[&str] = &["gz"];

/// A file reference as handed in by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileRef {
    /// Path or URL string.
    Path(String),
    /// File-like object (upload handle, in-memory blob) known only by its name.
    Blob { name: Option<String> },
}

impl FileRef {
    pub fn blob(name: impl Into<String>) -> Self {
        FileRef::Blob {
            name: Some(name.into()),
        }
    }

    /// The string the parser works on: the path itself, or the blob's name.
    pub fn as_path(&self) -> &str {
        match self {
            FileRef::Path(p) => p,
            FileRef::Blob { name } => name.as_deref().unwrap_or(""),
        }
    }
}

impl From<&str> for FileRef {
    fn from(s: &str) -> Self {
        FileRef::Path(s.to_string())
    }
}

impl From<String> for FileRef {
    fn from(s: String) -> Self {
        FileRef::Path(s)
    }
}

impl From<&String> for FileRef {
    fn from(s: &String) -> Self {
        FileRef::Path(s.clone())
    }
}

impl From<&FileRef> for FileRef {
    fn from(r: &FileRef) -> Self {
        r.clone()
    }
}

/// Normalized description of a file reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    /// Path with query string and protocol prefix removed.
    pub path: String,
    /// Final path segment.
    pub name: String,
    /// Lowercase extension of the logical (inner, if compressed) file.
    pub ext: String,
    /// File name without extension(s).
    pub base: String,
    /// `path` up to and including the last `/`.
    pub dir: String,
    /// Lowercase compression extension (e.g. `gz`), `None` when uncompressed.
    pub compressed: Option<String>,
    /// Lowercase scheme of a `scheme://rest` input.
    pub protocol: Option<String>,
    /// The reference exactly as it was passed in.
    pub src: FileRef,
}

impl FileDescriptor {
    pub fn parse(file: impl Into<FileRef>) -> Self {
        get_file_info(file)
    }

    pub fn is_compressed(&self) -> bool {
        self.compressed.is_some()
    }
}

/// Parses a file reference into a [`FileDescriptor`]. Never fails; degenerate
/// input produces empty fields.
///
/// `name`, `base` and `ext` come from the query-stripped input and are not
/// recomputed after the protocol prefix is removed from `path`.
///
/// # Examples
///
/// - `"a/b/c.pdb.gz"` → name `c.pdb.gz`, ext `pdb`, base `c`, compressed `gz`
/// - `"http://example.com/x.cif"` → protocol `http`, path `example.com/x.cif`
pub fn get_file_info(file: impl Into<FileRef>) -> FileDescriptor {
    let src = file.into();

    let mut path = strip_query(src.as_path());
    let name = file_name(path);
    let (base, ext) = split_extension(name);

    let mut protocol = None;
    if let Some((scheme, rest)) = match_protocol(path) {
        protocol = Some(scheme);
        path = rest;
    }

    let dir = dir_prefix(path);

    let (ext, base, compressed) = if COMPRESSED_EXTENSIONS.contains(&ext.as_str()) {
        let outer_len = ext.chars().count() as isize;
        let path_len = path.chars().count() as isize;
        let inner_ext = split::last_dot_segment(split::take_chars(path, path_len - outer_len - 1));

        let base_len = base.chars().count() as isize;
        let inner_len = inner_ext.chars().count() as isize;
        let inner_base = split::take_chars(base, base_len - inner_len - 1);

        (inner_ext, inner_base.to_string(), Some(ext))
    } else {
        (ext, base.to_string(), None)
    };

    FileDescriptor {
        path: path.to_string(),
        name: name.to_string(),
        ext,
        base,
        dir: dir.to_string(),
        compressed,
        protocol,
        src,
    }
}
