use std::fmt;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle state of a decision record.
///
/// The four canonical states follow the usual ADR lifecycle. Anything else
/// supplied at the CLI boundary is carried verbatim as `Custom`, so stores
/// with house conventions keep working.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Proposed,
    Accepted,
    Deprecated,
    Superseded,
    Custom(String),
}

impl Status {
    /// Interpret a user-supplied status. Canonical names match
    /// case-insensitively; everything else becomes `Custom` as given.
    pub fn parse(s: &str) -> Status {
        let t = s.trim();
        match t.to_ascii_lowercase().as_str() {
            "proposed" => Status::Proposed,
            "accepted" => Status::Accepted,
            "deprecated" => Status::Deprecated,
            "superseded" => Status::Superseded,
            _ => Status::Custom(t.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Status::Proposed => "Proposed",
            Status::Accepted => "Accepted",
            Status::Deprecated => "Deprecated",
            Status::Superseded => "Superseded",
            Status::Custom(s) => s,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Status::Custom(_))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True when a stored status line marks the record as retired: the literal
/// `Deprecated`, or any line starting with `Superseded` (which covers the
/// `Superseded by [ADR-NNNN](file)` rendering written on supersede).
pub fn is_retired(status_line: &str) -> bool {
    let s = status_line.trim();
    s == "Deprecated" || s.starts_with("Superseded")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
