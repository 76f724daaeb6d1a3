use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Store constants
// ---------------------------------------------------------------------------

/// Store directory used when neither `--dir` nor the `ADR_STORE_DIR`
/// environment override is given, relative to the working directory.
pub const DEFAULT_STORE_DIR: &str = "docs/decisions";

/// Generated index document, kept inside the store directory.
pub const INDEX_FILE: &str = "README.md";

// ---------------------------------------------------------------------------
// Record filenames
// ---------------------------------------------------------------------------

static RECORD_FILE_RE: OnceLock<Regex> = OnceLock::new();

// Four-or-more digits: numbers past 9999 outgrow their zero padding and
// must still be scanned.
fn record_file_re() -> &'static Regex {
    RECORD_FILE_RE.get_or_init(|| Regex::new(r"^(\d{4,})-.*\.md$").unwrap())
}

/// Parse the record number out of a store filename. None when the name
/// does not follow the `NNNN-slug.md` pattern.
pub fn record_number(file_name: &str) -> Option<u32> {
    let caps = record_file_re().captures(file_name)?;
    caps[1].parse().ok()
}

pub fn record_file_name(number: u32, slug: &str) -> String {
    format!("{number:04}-{slug}.md")
}

pub fn record_path(dir: &Path, number: u32, slug: &str) -> PathBuf {
    dir.join(record_file_name(number, slug))
}

pub fn index_path(dir: &Path) -> PathBuf {
    dir.join(INDEX_FILE)
}

// ---------------------------------------------------------------------------
// Slugs
// ---------------------------------------------------------------------------

/// Derive the filename slug from a record title: lowercase, runs of
/// whitespace become single hyphens, every other character outside
/// `[a-z0-9-]` is dropped. A title of pure punctuation yields an empty
/// slug, which is still a legal filename (`NNNN-.md`).
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;
    for c in title.trim().to_lowercase().chars() {
        if c.is_whitespace() {
            pending_hyphen = true;
            continue;
        }
        if pending_hyphen {
            slug.push('-');
            pending_hyphen = false;
        }
        if c.is_ascii_alphanumeric() || c == '-' {
            slug.push(c);
        }
    }
    slug
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_lowercases_and_hyphenates() {
        assert_eq!(slugify("Use Kafka for events"), "use-kafka-for-events");
        assert_eq!(slugify("Adopt gRPC"), "adopt-grpc");
    }

    #[test]
    fn slug_collapses_whitespace_runs() {
        assert_eq!(slugify("too   many\tspaces"), "too-many-spaces");
        assert_eq!(slugify("  padded  "), "padded");
    }

    #[test]
    fn slug_strips_punctuation() {
        assert_eq!(slugify("Adopt gRPC!"), "adopt-grpc");
        assert_eq!(slugify("What's in a name?"), "whats-in-a-name");
    }

    #[test]
    fn slug_keeps_hyphens_left_by_stripped_runs() {
        // "C++ & Rust" -> "c++-&-rust" -> strip -> "c--rust"
        assert_eq!(slugify("C++ & Rust"), "c--rust");
    }

    #[test]
    fn slug_may_be_empty() {
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn record_number_parses_prefix() {
        assert_eq!(record_number("0001-use-records.md"), Some(1));
        assert_eq!(record_number("0012-adopt-grpc.md"), Some(12));
        assert_eq!(record_number("10000-big-store.md"), Some(10000));
        assert_eq!(record_number("0002-.md"), Some(2));
    }

    #[test]
    fn record_number_rejects_other_files() {
        assert_eq!(record_number("README.md"), None);
        assert_eq!(record_number("123-short-prefix.md"), None);
        assert_eq!(record_number("0001-notes.txt"), None);
        assert_eq!(record_number("0001.md"), None);
        assert_eq!(record_number("draft-0001-x.md"), None);
    }

    #[test]
    fn record_file_name_pads_to_four_digits() {
        assert_eq!(record_file_name(1, "use-records"), "0001-use-records.md");
        assert_eq!(record_file_name(42, ""), "0042-.md");
        assert_eq!(record_file_name(10000, "big"), "10000-big.md");
    }

    #[test]
    fn path_helpers() {
        let dir = Path::new("/tmp/store");
        assert_eq!(
            record_path(dir, 3, "use-kafka"),
            PathBuf::from("/tmp/store/0003-use-kafka.md")
        );
        assert_eq!(index_path(dir), PathBuf::from("/tmp/store/README.md"));
    }
}
