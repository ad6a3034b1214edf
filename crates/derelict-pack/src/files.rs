//! Directory and file helpers shared by the loaders.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The usable entries of a folder, plus any whose names are not valid UTF-8.
#[derive(Debug, Default)]
pub(crate) struct Listing {
    /// `(name, path)` pairs sorted by name.
    pub(crate) entries: Vec<(String, PathBuf)>,
    /// Entries that matched but cannot be named.
    pub(crate) unnamed: Vec<PathBuf>,
}

fn list(
    dir: &Path,
    keep: impl Fn(&Path) -> bool,
    name: impl Fn(&Path) -> Option<&OsStr>,
) -> io::Result<Listing> {
    let mut listing = Listing::default();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !keep(&path) {
            continue;
        }
        match name(&path).and_then(OsStr::to_str) {
            Some(n) => listing.entries.push((n.to_string(), path)),
            None => listing.unnamed.push(path),
        }
    }
    listing.entries.sort();
    Ok(listing)
}

/// List the `.txt` files in a folder, named by stem.
pub(crate) fn txt_entries(dir: &Path) -> io::Result<Listing> {
    list(
        dir,
        |p| p.is_file() && p.extension().is_some_and(|ext| ext == "txt"),
        Path::file_stem,
    )
}

/// List the sub-folders of a folder, named by folder name.
pub(crate) fn subdirs(dir: &Path) -> io::Result<Listing> {
    list(dir, Path::is_dir, Path::file_name)
}

/// Read a file as lines, without line terminators.
pub(crate) fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    Ok(fs::read_to_string(path)?
        .lines()
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn txt_entries_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::write(dir.path().join("notes.md"), "").unwrap();
        fs::create_dir(dir.path().join("c.txt")).unwrap();

        let names: Vec<_> = txt_entries(dir.path())
            .unwrap()
            .entries
            .into_iter()
            .map(|(stem, _)| stem)
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn read_lines_handles_crlf() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("t.txt");
        fs::write(&path, "one\r\ntwo\r\n").unwrap();
        assert_eq!(read_lines(&path).unwrap(), vec!["one", "two"]);
    }

    #[test]
    fn subdirs_sorted() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("b")).unwrap();
        fs::create_dir(dir.path().join("a")).unwrap();
        fs::write(dir.path().join("c.txt"), "").unwrap();

        let listing = subdirs(dir.path()).unwrap();
        let names: Vec<_> = listing.entries.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert!(listing.unnamed.is_empty());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_names_are_reported() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        let bad = dir.path().join(OsStr::from_bytes(b"bad\xff"));
        fs::create_dir(&bad).unwrap();
        fs::create_dir(dir.path().join("good")).unwrap();

        let listing = subdirs(dir.path()).unwrap();
        assert_eq!(listing.entries.len(), 1);
        assert_eq!(listing.unnamed, vec![bad]);
    }
}
