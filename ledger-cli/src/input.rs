//! Page texts from disk. One string per page, in statement order.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

/// Page separator written by `pdftotext` and most OCR exporters
const FORM_FEED: char = '\u{c}';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSource {
    /// Explicit page files, in the order given
    Files(Vec<PathBuf>),
    /// Every `*.txt` file in a directory, sorted by file name
    Dir(PathBuf),
    /// One file holding every page, split on form feed
    Text(PathBuf),
}

impl PageSource {
    pub fn from_args(pages: Vec<PathBuf>, dir: Option<PathBuf>, text: Option<PathBuf>) -> Result<Self> {
        match (pages.is_empty(), dir, text) {
            (false, None, None) => Ok(PageSource::Files(pages)),
            (true, Some(dir), None) => Ok(PageSource::Dir(dir)),
            (true, None, Some(text)) => Ok(PageSource::Text(text)),
            (true, None, None) => bail!("no input given (pass --page, --dir or --text)"),
            _ => bail!("--page, --dir and --text are mutually exclusive"),
        }
    }

    pub fn load(&self) -> Result<Vec<String>> {
        match self {
            PageSource::Files(files) => files.iter().map(|p| read_page(p)).collect(),
            PageSource::Dir(dir) => pages_from_dir(dir),
            PageSource::Text(path) => pages_from_text(path),
        }
    }
}

fn read_page(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

fn pages_from_dir(dir: &Path) -> Result<Vec<String>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("read dir {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && p.extension().is_some_and(|e| e.eq_ignore_ascii_case("txt")))
        .collect();
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if files.is_empty() {
        bail!("no .txt pages in {}", dir.display());
    }
    files.iter().map(|p| read_page(p)).collect()
}

fn pages_from_text(path: &Path) -> Result<Vec<String>> {
    let raw = read_page(path)?;
    Ok(split_pages(&raw))
}

/// Split on form feed. The trailing separator most tools emit does not
/// start another page.
pub fn split_pages(raw: &str) -> Vec<String> {
    let mut pages: Vec<String> = raw.split(FORM_FEED).map(str::to_string).collect();
    if pages.len() > 1 && pages.last().is_some_and(|p| p.trim().is_empty()) {
        pages.pop();
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_pages() {
        assert_eq!(split_pages("one\ntwo\u{c}three\u{c}"), vec!["one\ntwo", "three"]);
        assert_eq!(split_pages("single"), vec!["single"]);
        assert_eq!(split_pages(""), vec![""]);
    }

    #[test]
    fn test_source_selection() {
        let p = PathBuf::from("p1.txt");
        assert_eq!(
            PageSource::from_args(vec![p.clone()], None, None).unwrap(),
            PageSource::Files(vec![p.clone()])
        );
        assert!(PageSource::from_args(vec![], None, None).is_err());
        assert!(PageSource::from_args(vec![p], Some(PathBuf::from("d")), None).is_err());
    }

    #[test]
    fn test_dir_pages_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("page2.txt"), "second").unwrap();
        fs::write(dir.path().join("page1.txt"), "first").unwrap();
        fs::write(dir.path().join("notes.md"), "ignored").unwrap();

        let pages = PageSource::Dir(dir.path().to_path_buf()).load().unwrap();
        assert_eq!(pages, vec!["first", "second"]);
    }

    #[test]
    fn test_empty_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(PageSource::Dir(dir.path().to_path_buf()).load().is_err());
    }

    #[test]
    fn test_text_file_split() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("statement.txt");
        fs::write(&path, "cover\u{c}BANK\nStatement\nDate\u{c}").unwrap();

        let pages = PageSource::Text(path).load().unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1], "BANK\nStatement\nDate");
    }
}
