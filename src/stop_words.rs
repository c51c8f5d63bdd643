use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StopWordsError {
    #[error("cannot read stop words from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A membership set of tokens to drop during filtering.
///
/// Lookup is whole-token, exact, case-sensitive string equality. Duplicates
/// in the input collapse; the order words were added is never observable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a newline-delimited stop word file, one token per line.
    ///
    /// Lines are taken as-is: no trimming, no lowercasing.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StopWordsError> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|source| StopWordsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|source| StopWordsError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(content.lines().map(|line| line.to_string()).collect())
    }

    pub fn insert(&mut self, word: String) -> bool {
        self.words.insert(word)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<String> for StopWords {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for StopWords {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(|word| word.to_string()).collect()
    }
}

impl Extend<String> for StopWords {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.words.extend(iter);
    }
}
