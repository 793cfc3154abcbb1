use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use log::debug;
use relative_path::{Component, RelativePathBuf};

use crate::parsing::{ParseError, parse_page};
use crate::tree::Node;

/// Extension of page files below the wiki root.
pub const PAGE_SUFFIX: &str = ".txt";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Page not found: {0}")]
    NotFound(PathBuf),
    #[error("Page {path} is larger than {limit} bytes")]
    TooLarge { path: PathBuf, limit: u64 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// File of the page at wiki path `page_path`, relative to the wiki root.
///
/// `/Folder/Page` and `Folder/Page` both map to `Folder/Page.txt`. Leading
/// `..` segments are dropped, so the file never lies above the root.
pub fn page_file_path(page_path: &str) -> RelativePathBuf {
    let trimmed = page_path.trim_start_matches('/');
    let normalized = RelativePathBuf::from(format!("{trimmed}{PAGE_SUFFIX}")).normalize();
    let mut path = RelativePathBuf::new();
    for component in normalized.components() {
        if let Component::Normal(name) = component {
            path.push(name);
        }
    }
    path
}

/// Reads a page's source, refusing files over `max_bytes`.
pub fn read_page(wiki_root: &Path, page_path: &str, max_bytes: u64) -> Result<String, IoError> {
    let path = page_file_path(page_path).to_path(wiki_root);
    if !path.exists() {
        return Err(IoError::NotFound(path));
    }
    let file = fs::File::open(&path)?;
    if file.metadata()?.len() > max_bytes {
        return Err(IoError::TooLarge {
            path,
            limit: max_bytes,
        });
    }

    // The file may grow between the size check and the read
    let mut source = String::new();
    file.take(max_bytes + 1).read_to_string(&mut source)?;
    if source.len() as u64 > max_bytes {
        return Err(IoError::TooLarge {
            path,
            limit: max_bytes,
        });
    }
    debug!("read {} bytes from {}", source.len(), path.display());
    Ok(source)
}

/// Reads and parses a page into a `WikiPage` node named by `page_path`.
pub fn load_page(wiki_root: &Path, page_path: &str, max_bytes: u64) -> Result<Node, IoError> {
    let source = read_page(wiki_root, page_path, max_bytes)?;
    let absolute = if page_path.starts_with('/') {
        page_path.to_string()
    } else {
        format!("/{page_path}")
    };
    Ok(parse_page(absolute, &source)?)
}
