use crate::error::{AdrError, Result};
use crate::index;
use crate::io;
use crate::paths;
use crate::record::{self, RecordDoc, RecordSummary};
use crate::status::Status;
use chrono::Local;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Attempts at claiming a fresh record number before giving up on a store
/// that is being written to concurrently.
const CREATE_ATTEMPTS: u32 = 5;

/// A directory of numbered decision records plus the generated index.
/// Every operation derives its view from a fresh directory scan; the files
/// are the only durable state.
pub struct Store {
    dir: PathBuf,
}

/// What `init` created, for reporting.
#[derive(Debug, Serialize)]
pub struct InitOutcome {
    pub dir: PathBuf,
    /// Seed record filename when this call wrote it.
    pub seed_created: Option<String>,
    pub index_created: bool,
    /// Records present after the call.
    pub records: usize,
}

#[derive(Debug, Serialize)]
pub struct CreatedRecord {
    pub number: u32,
    pub path: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct IndexOutcome {
    pub path: PathBuf,
    pub records: usize,
    pub active: usize,
    pub retired: usize,
}

impl Store {
    /// A store rooted at `dir`. Nothing on disk is touched until an
    /// operation runs.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn index_path(&self) -> PathBuf {
        paths::index_path(&self.dir)
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    /// Create the store directory, the seed record, and an empty index.
    /// Idempotent: a store that already holds any record file keeps its
    /// files exactly as they are, so a hand-deleted seed is never reborn
    /// and record 0001 is never assigned twice.
    pub fn init(&self) -> Result<InitOutcome> {
        io::ensure_dir(&self.dir)?;

        let seed_created = if self.scan()?.is_empty() {
            let slug = paths::slugify(record::SEED_TITLE);
            let file = paths::record_file_name(record::SEED_NUMBER, &slug);
            let content = record::render_seed(Local::now().date_naive());
            if io::create_exclusive(&self.dir.join(&file), content.as_bytes())? {
                Some(file)
            } else {
                None
            }
        } else {
            None
        };

        let index_created =
            io::write_if_missing(&self.index_path(), index::render(&[]).as_bytes())?;

        Ok(InitOutcome {
            dir: self.dir.clone(),
            seed_created,
            index_created,
            records: self.scan()?.len(),
        })
    }

    /// Create a new record and return its assigned number and path.
    ///
    /// The number is derived from a fresh scan (max existing + 1) and the
    /// file is claimed with a create-new write, so a concurrent creator can
    /// cost a retry but never a silent overwrite. Bootstraps the store when
    /// the directory or seed is missing.
    pub fn create(&self, title: &str, status: &Status) -> Result<CreatedRecord> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AdrError::EmptyTitle);
        }
        self.init()?;

        let slug = paths::slugify(title);
        let date = Local::now().date_naive();
        for _ in 0..CREATE_ATTEMPTS {
            let number = self.next_number()?;
            let path = paths::record_path(&self.dir, number, &slug);
            let content = record::render_skeleton(number, title, date, status);
            if io::create_exclusive(&path, content.as_bytes())? {
                return Ok(CreatedRecord { number, path });
            }
        }
        Err(AdrError::CreateContention(CREATE_ATTEMPTS))
    }

    /// Rewrite the status section of record `number`, leaving every other
    /// section byte-identical. A `Superseded` status requires the number of
    /// an existing superseding record; the old status is kept underneath
    /// the reference line, struck through. The heading and `Date:` line are
    /// never touched.
    pub fn update_status(
        &self,
        number: u32,
        status: &Status,
        superseded_by: Option<u32>,
    ) -> Result<()> {
        let path = self.find_record(number)?;
        let raw = std::fs::read_to_string(&path)?;
        let mut doc = RecordDoc::parse(&raw);

        let body = match status {
            Status::Superseded => {
                let by = superseded_by.ok_or(AdrError::MissingSupersededBy)?;
                let by_path = match self.find_record(by) {
                    Ok(p) => p,
                    Err(AdrError::RecordNotFound(_)) => {
                        return Err(AdrError::SupersededByNotFound(by))
                    }
                    Err(e) => return Err(e),
                };
                let by_file = by_path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let old = doc.status_line().unwrap_or(record::UNKNOWN).to_string();
                record::superseded_status(by, &by_file, &old)
            }
            other => other.as_str().to_string(),
        };

        if !doc.set_status_body(&body) {
            return Err(AdrError::MissingStatusSection(number));
        }
        io::atomic_write(&path, doc.render().as_bytes())
    }

    /// Summaries of every record, ascending by number. Damaged records come
    /// back with `unknown` fields rather than failing the listing.
    pub fn list(&self) -> Result<Vec<RecordSummary>> {
        let mut out = Vec::new();
        for (number, file) in self.scan()? {
            let raw = std::fs::read_to_string(self.dir.join(&file))?;
            out.push(RecordSummary::parse(number, &file, &raw));
        }
        Ok(out)
    }

    /// Rebuild the index from the current records and atomically replace
    /// it. Regenerating over an unchanged store is byte-identical.
    pub fn regenerate_index(&self) -> Result<IndexOutcome> {
        let records = self.list()?;
        let content = index::render(&records);
        let path = self.index_path();
        io::atomic_write(&path, content.as_bytes())?;

        let (active, retired) = index::partition(&records);
        Ok(IndexOutcome {
            path,
            records: records.len(),
            active: active.len(),
            retired: retired.len(),
        })
    }

    // -----------------------------------------------------------------------
    // Scanning
    // -----------------------------------------------------------------------

    /// All record files as (number, filename), ascending. NotInitialized
    /// when the store directory itself is missing.
    fn scan(&self) -> Result<Vec<(u32, String)>> {
        if !self.dir.is_dir() {
            return Err(AdrError::NotInitialized(self.dir.clone()));
        }
        let mut records = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if let Some(number) = paths::record_number(&name) {
                records.push((number, name));
            }
        }
        records.sort();
        Ok(records)
    }

    fn next_number(&self) -> Result<u32> {
        let max = self.scan()?.into_iter().map(|(n, _)| n).max().unwrap_or(0);
        Ok(max + 1)
    }

    /// Path of the record numbered `number`, whatever its slug.
    fn find_record(&self, number: u32) -> Result<PathBuf> {
        self.scan()?
            .into_iter()
            .find(|(n, _)| *n == number)
            .map(|(_, file)| self.dir.join(file))
            .ok_or(AdrError::RecordNotFound(number))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
