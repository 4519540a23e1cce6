//! Word list loading.
//!
//! Word lists are plain text files holding one word per line. Blank lines are
//! skipped and Windows line endings are stripped before insertion.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::config::dictionary::DictionaryConfig;
use crate::error::{LexitrieError, LexitrieResult};
use crate::trie::Node;

/// Reads every word of `reader` into `trie`, returning how many lines held a word.
pub fn load_reader<R: BufRead>(
    trie: &mut Node,
    reader: R,
    config: &DictionaryConfig,
) -> std::io::Result<usize> {
    let mut count = 0;
    for line in reader.lines() {
        if let Some(word) = config.normalize(&line?) {
            trie.insert(&word);
            count += 1;
        }
    }
    Ok(count)
}

/// Reads the word list at `path` into `trie`.
///
/// # Errors
///
/// Returns [`LexitrieError::WordList`] if the file cannot be opened or read.
pub fn load_file(trie: &mut Node, path: &Path, config: &DictionaryConfig) -> LexitrieResult<usize> {
    let wrap = |source| LexitrieError::WordList {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(wrap)?;
    let count = load_reader(trie, BufReader::new(file), config).map_err(wrap)?;
    debug!(?path, count, "loaded word list");
    Ok(count)
}

/// Builds a trie from every file listed in `config` followed by `extra` files.
pub fn build<P: AsRef<Path>>(config: &DictionaryConfig, extra: &[P]) -> LexitrieResult<Node> {
    let mut trie = Node::new();
    let mut total = 0;
    let paths = config
        .files
        .iter()
        .map(|p| p.as_path())
        .chain(extra.iter().map(|p| p.as_ref()));
    for path in paths {
        total += load_file(&mut trie, path, config)?;
    }
    info!(lines = total, words = trie.len(), "dictionary built");
    Ok(trie)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn test_load_reader_skips_blank_lines() {
        let mut trie = Node::new();
        let input = Cursor::new("apple\r\n\n   \napply\nape\n");
        let count = load_reader(&mut trie, input, &DictionaryConfig::default()).unwrap();

        assert_eq!(count, 3);
        assert_eq!(trie.all(""), vec!["ape", "apple", "apply"]);
    }

    #[test]
    fn test_load_reader_lowercases() {
        let config = DictionaryConfig {
            lowercase: true,
            ..Default::default()
        };
        let mut trie = Node::new();
        load_reader(&mut trie, Cursor::new("Apple\nAPPLE\nÉté\n"), &config).unwrap();

        assert_eq!(trie.all(""), vec!["apple", "été"]);
    }

    #[test]
    fn test_build_combines_files() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");
        std::fs::write(&first, "car\ncart\n").unwrap();
        std::fs::write(&second, "cat\ncar\n").unwrap();

        let config = DictionaryConfig {
            files: vec![first],
            ..Default::default()
        };
        let trie = build(&config, &[second]).unwrap();

        assert_eq!(trie.search("ca"), vec!["car", "cart", "cat"]);
    }

    #[test]
    fn test_missing_file_is_reported() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let err = build(&DictionaryConfig::default(), &[&missing]).unwrap_err();

        match err {
            LexitrieError::WordList { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }
}
