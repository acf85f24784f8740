//! repository.rs - Discovers, loads and caches the built-in word lists.
//!
//! Built-in sources live as newline-delimited `*.txt` files in one directory. The first
//! caller for a directory reads and compiles every file (one task per file); later
//! callers share the resulting [`SourceSet`]. The snapshot is never mutated after it is
//! built. [`WordListRepository::reload`] swaps in a fresh snapshot explicitly.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{OnceCell, RwLock};
use tokio::task::JoinSet;

use crate::errors::ProfanityError;
use crate::word_lists::{ProfaneSourceFilter, SourceSet};

/// Environment variable that overrides the built-in word-list directory.
pub const WORD_LISTS_DIR_ENV: &str = "PROFANITY_WORD_LISTS_DIR";

/// File extension of built-in word lists.
const WORD_LIST_EXTENSION: &str = "txt";

type SnapshotCell = Arc<OnceCell<Arc<SourceSet>>>;

lazy_static! {
    /// Process-wide snapshots of built-in sources, one per word-list directory.
    static ref BUILT_IN_CACHE: RwLock<HashMap<PathBuf, SnapshotCell>> = RwLock::new(HashMap::new());
}

/// The directory shipped with this crate.
pub fn bundled_word_list_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
}

/// Resolves the built-in directory: `PROFANITY_WORD_LISTS_DIR` if set, else the bundled one.
pub fn default_word_list_dir() -> PathBuf {
    match std::env::var_os(WORD_LISTS_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => bundled_word_list_dir(),
    }
}

/// Read access to built-in and call-scoped word-list sources.
#[derive(Debug, Clone)]
pub struct WordListRepository {
    dir: PathBuf,
}

impl Default for WordListRepository {
    fn default() -> Self {
        Self::new(default_word_list_dir())
    }
}

impl WordListRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the built-in sources merged with `additional`, in application order.
    ///
    /// `additional` is call-scoped and never enters the process-wide cache.
    pub async fn sources(&self, additional: &[Arc<ProfaneSourceFilter>]) -> Result<SourceSet, ProfanityError> {
        let built_in = self.built_in().await?;
        if additional.is_empty() {
            return Ok(built_in.as_ref().clone());
        }
        debug!("Merging {} call-scoped source(s) after {} built-in source(s).", additional.len(), built_in.len());
        Ok(built_in.merged(additional))
    }

    /// Returns the cached built-in snapshot, building it on first use.
    pub async fn built_in(&self) -> Result<Arc<SourceSet>, ProfanityError> {
        let cell = self.snapshot_cell().await;
        let dir = self.dir.clone();
        let snapshot = cell
            .get_or_try_init(|| async move { load_sources(&dir).await.map(Arc::new) })
            .await?;
        Ok(Arc::clone(snapshot))
    }

    /// Rebuilds the built-in snapshot from disk and publishes it for later callers.
    /// Callers already holding the previous snapshot keep using it.
    pub async fn reload(&self) -> Result<Arc<SourceSet>, ProfanityError> {
        let fresh = Arc::new(load_sources(&self.dir).await?);
        let cell: SnapshotCell = Arc::new(OnceCell::new_with(Some(Arc::clone(&fresh))));
        BUILT_IN_CACHE.write().await.insert(self.dir.clone(), cell);
        info!("Reloaded {} built-in word list(s) from {}.", fresh.len(), self.dir.display());
        Ok(fresh)
    }

    /// Names of the built-in sources, in application order.
    pub async fn source_names(&self) -> Result<Vec<String>, ProfanityError> {
        let built_in = self.built_in().await?;
        Ok(built_in.names().into_iter().map(str::to_string).collect())
    }

    /// The raw words of one built-in source, sorted, or `None` if no such source exists.
    pub async fn word_list(&self, source_name: &str) -> Result<Option<Vec<String>>, ProfanityError> {
        let built_in = self.built_in().await?;
        Ok(built_in
            .get(source_name)
            .map(|source| source.words.iter().cloned().collect()))
    }

    async fn snapshot_cell(&self) -> SnapshotCell {
        if let Some(cell) = BUILT_IN_CACHE.read().await.get(&self.dir) {
            return Arc::clone(cell);
        }
        let mut cache = BUILT_IN_CACHE.write().await;
        Arc::clone(cache.entry(self.dir.clone()).or_default())
    }
}

/// Reads and compiles every `*.txt` file in `dir`, sorted by source name.
async fn load_sources(dir: &Path) -> Result<SourceSet, ProfanityError> {
    debug!("Building word-list sources from {}.", dir.display());

    let mut entries = tokio::fs::read_dir(dir).await.map_err(|source| ProfanityError::WordListRead {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) == Some(WORD_LIST_EXTENSION) {
            files.push(path);
        }
    }

    let mut tasks = JoinSet::new();
    for path in files {
        tasks.spawn(async move { load_source(path).await });
    }

    let mut sources = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        let source = joined.map_err(|e| ProfanityError::Fatal(format!("Word-list task failed: {}", e)))??;
        sources.push(Arc::new(source));
    }
    sources.sort_by(|a, b| a.source_name.cmp(&b.source_name));

    info!("Loaded {} built-in word list(s) from {}.", sources.len(), dir.display());
    Ok(SourceSet::new(sources))
}

/// Loads one file. Read failures degrade to an empty source; compile failures are fatal.
async fn load_source(path: PathBuf) -> Result<ProfaneSourceFilter, ProfanityError> {
    let source_name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    match tokio::fs::read_to_string(&path).await {
        Ok(text) => ProfaneSourceFilter::from_text(source_name, &text),
        Err(e) => {
            warn!("Unable to read word list {}: {}. Treating it as empty.", path.display(), e);
            Ok(ProfaneSourceFilter::empty(source_name))
        }
    }
}
