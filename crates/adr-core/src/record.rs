use crate::status::Status;
use chrono::NaiveDate;
use serde::Serialize;

/// Number of the record seeded by `init`.
pub const SEED_NUMBER: u32 = 1;
/// Title of the record seeded by `init`.
pub const SEED_TITLE: &str = "Use Architecture Decision Records";

/// Sentinel for listing fields that cannot be recovered from a record.
pub const UNKNOWN: &str = "unknown";

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

struct SectionTexts {
    context: &'static str,
    decision: &'static str,
    positive: &'static str,
    negative: &'static str,
    neutral: &'static str,
}

const PROMPTS: SectionTexts = SectionTexts {
    context: "What is the issue that we are seeing that motivates this decision or change?",
    decision: "What is the change that we are proposing and/or doing?",
    positive: "What becomes easier because of this change?",
    negative: "What becomes more difficult or riskier?",
    neutral: "What is worth noting either way?",
};

const SEED_TEXTS: SectionTexts = SectionTexts {
    context: "We need to record the architectural decisions made on this project, so that \
              new team members can see the reasoning behind past choices and the current \
              team can revisit them when circumstances change.",
    decision: "We will keep a collection of records for architecturally significant \
               decisions: those that affect the structure, non-functional characteristics, \
               dependencies, interfaces, or construction techniques of the project. A \
               record is a short Markdown file in this directory, numbered in order of \
               creation. A decision that no longer holds is marked Deprecated or \
               Superseded rather than deleted.",
    positive: "The reasoning behind structural choices survives team turnover",
    negative: "Recording a decision takes a little discipline on every significant change",
    neutral: "Records are plain Markdown and render anywhere",
};

fn render_document(
    number: u32,
    title: &str,
    date: NaiveDate,
    status: &str,
    texts: &SectionTexts,
) -> String {
    format!(
        "# {number}. {title}\n\
         \n\
         Date: {date}\n\
         \n\
         ## Status\n\
         \n\
         {status}\n\
         \n\
         ## Context\n\
         \n\
         {context}\n\
         \n\
         ## Decision\n\
         \n\
         {decision}\n\
         \n\
         ## Consequences\n\
         \n\
         ### Positive\n\
         - {positive}\n\
         \n\
         ### Negative\n\
         - {negative}\n\
         \n\
         ### Neutral\n\
         - {neutral}\n",
        context = texts.context,
        decision = texts.decision,
        positive = texts.positive,
        negative = texts.negative,
        neutral = texts.neutral,
    )
}

/// A fresh record skeleton: heading with the un-padded number, today's
/// date, the requested status, and prompt text in the remaining sections.
pub fn render_skeleton(number: u32, title: &str, date: NaiveDate, status: &Status) -> String {
    render_document(number, title, date, status.as_str(), &PROMPTS)
}

/// The record seeded into every new store, explaining the practice itself.
pub fn render_seed(date: NaiveDate) -> String {
    render_document(SEED_NUMBER, SEED_TITLE, date, "Accepted", &SEED_TEXTS)
}

/// Status section body written when a record is superseded. The reference
/// line comes first so it reads back as the record's status; the old status
/// is kept underneath, struck through.
pub fn superseded_status(by: u32, by_file: &str, old_status: &str) -> String {
    format!("Superseded by [ADR-{by:04}]({by_file})\n~~{old_status}~~")
}

// ---------------------------------------------------------------------------
// RecordDoc
// ---------------------------------------------------------------------------

/// A record file split into its preamble (title heading and date line) and
/// the ordered level-two sections, each kept as raw text. Re-serializing an
/// untouched document reproduces it byte for byte, so a status rewrite can
/// never disturb the other sections.
#[derive(Debug)]
pub struct RecordDoc {
    preamble: String,
    sections: Vec<Section>,
}

#[derive(Debug)]
struct Section {
    /// Heading text with the `## ` marker and surrounding whitespace removed.
    name: String,
    /// The exact heading line, line ending included.
    heading: String,
    /// Raw text up to the next level-two heading.
    body: String,
}

impl RecordDoc {
    /// Split `raw` at its `## ` headings. `### ` subsections stay inside the
    /// body of the section that contains them.
    pub fn parse(raw: &str) -> Self {
        let mut preamble = String::new();
        let mut sections: Vec<Section> = Vec::new();
        for line in raw.split_inclusive('\n') {
            if let Some(rest) = line.strip_prefix("## ") {
                sections.push(Section {
                    name: rest.trim().to_string(),
                    heading: line.to_string(),
                    body: String::new(),
                });
            } else if let Some(section) = sections.last_mut() {
                section.body.push_str(line);
            } else {
                preamble.push_str(line);
            }
        }
        Self { preamble, sections }
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity(
            self.preamble.len()
                + self
                    .sections
                    .iter()
                    .map(|s| s.heading.len() + s.body.len())
                    .sum::<usize>(),
        );
        out.push_str(&self.preamble);
        for s in &self.sections {
            out.push_str(&s.heading);
            out.push_str(&s.body);
        }
        out
    }

    /// Title from the `# N. Title` heading line. The numeric prefix is
    /// stripped when present; a heading without one is taken whole.
    pub fn title(&self) -> Option<&str> {
        let line = self.preamble.lines().find(|l| l.starts_with("# "))?;
        let text = line[2..].trim();
        match text.split_once(". ") {
            Some((prefix, rest))
                if !prefix.is_empty() && prefix.chars().all(|c| c.is_ascii_digit()) =>
            {
                Some(rest.trim())
            }
            _ => Some(text),
        }
    }

    /// Creation date from the `Date:` line.
    pub fn date(&self) -> Option<&str> {
        let line = self.preamble.lines().find(|l| l.starts_with("Date:"))?;
        let value = line["Date:".len()..].trim();
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }

    /// The record's current status: the first non-blank line after the
    /// `## Status` heading, trimmed.
    pub fn status_line(&self) -> Option<&str> {
        let section = self.sections.iter().find(|s| s.name == "Status")?;
        section
            .body
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
    }

    /// Replace the body of the `## Status` section, leaving every other
    /// byte of the document as parsed. Returns false when the document has
    /// no Status section.
    pub fn set_status_body(&mut self, text: &str) -> bool {
        let Some(section) = self.sections.iter_mut().find(|s| s.name == "Status") else {
            return false;
        };
        section.body = format!("\n{text}\n\n");
        true
    }
}

// ---------------------------------------------------------------------------
// RecordSummary
// ---------------------------------------------------------------------------

/// One row of a listing. Fields that cannot be parsed fall back to the
/// `unknown` sentinel; a damaged record never aborts a listing.
#[derive(Debug, Clone, Serialize)]
pub struct RecordSummary {
    pub number: u32,
    pub title: String,
    pub status: String,
    pub date: String,
    pub file: String,
}

impl RecordSummary {
    pub fn parse(number: u32, file: &str, raw: &str) -> Self {
        let doc = RecordDoc::parse(raw);
        Self {
            number,
            title: doc.title().unwrap_or(UNKNOWN).to_string(),
            status: doc.status_line().unwrap_or(UNKNOWN).to_string(),
            date: doc.date().unwrap_or(UNKNOWN).to_string(),
            file: file.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn skeleton_has_expected_shape() {
        let text = render_skeleton(2, "Adopt gRPC", sample_date(), &Status::Proposed);
        assert!(text.starts_with("# 2. Adopt gRPC\n"));
        assert!(text.contains("Date: 2025-06-01\n"));
        assert!(text.contains("## Status\n\nProposed\n"));
        assert!(text.contains("## Context\n"));
        assert!(text.contains("## Decision\n"));
        assert!(text.contains("## Consequences\n"));
        assert!(text.contains("### Positive\n- "));
        assert!(text.contains("### Negative\n- "));
        assert!(text.contains("### Neutral\n- "));
    }

    #[test]
    fn consequence_bullets_sit_directly_under_their_headings() {
        let text = render_skeleton(2, "Adopt gRPC", sample_date(), &Status::Proposed);
        assert!(text.ends_with(
            "## Consequences\n\
             \n\
             ### Positive\n\
             - What becomes easier because of this change?\n\
             \n\
             ### Negative\n\
             - What becomes more difficult or riskier?\n\
             \n\
             ### Neutral\n\
             - What is worth noting either way?\n"
        ));

        let seed = render_seed(sample_date());
        assert!(seed.contains("### Positive\n- "));
        assert!(seed.contains("### Negative\n- "));
        assert!(seed.contains("### Neutral\n- "));
    }

    #[test]
    fn skeleton_heading_number_is_not_padded() {
        let text = render_skeleton(12, "Use Kafka", sample_date(), &Status::Proposed);
        assert!(text.starts_with("# 12. Use Kafka\n"));
    }

    #[test]
    fn seed_is_record_one_and_accepted() {
        let text = render_seed(sample_date());
        assert!(text.starts_with("# 1. Use Architecture Decision Records\n"));
        assert!(text.contains("## Status\n\nAccepted\n"));
        assert!(text.contains("architectural decisions"));
    }

    #[test]
    fn parse_render_round_trips_bytes() {
        let original = render_skeleton(3, "Use REST", sample_date(), &Status::Accepted);
        let doc = RecordDoc::parse(&original);
        assert_eq!(doc.render(), original);
    }

    #[test]
    fn parse_reads_fields() {
        let text = render_skeleton(7, "Adopt gRPC", sample_date(), &Status::Proposed);
        let doc = RecordDoc::parse(&text);
        assert_eq!(doc.title(), Some("Adopt gRPC"));
        assert_eq!(doc.date(), Some("2025-06-01"));
        assert_eq!(doc.status_line(), Some("Proposed"));
    }

    #[test]
    fn title_without_number_prefix_is_taken_whole() {
        let doc = RecordDoc::parse("# Just A Title\n\nDate: 2025-06-01\n");
        assert_eq!(doc.title(), Some("Just A Title"));
    }

    #[test]
    fn title_keeps_interior_periods() {
        let doc = RecordDoc::parse("# 4. Target Java 21. Not 17\n");
        assert_eq!(doc.title(), Some("Target Java 21. Not 17"));
    }

    #[test]
    fn status_rewrite_touches_only_the_status_section() {
        let original = render_skeleton(2, "Adopt gRPC", sample_date(), &Status::Proposed);
        let mut doc = RecordDoc::parse(&original);
        assert!(doc.set_status_body("Accepted"));
        let updated = doc.render();

        assert_ne!(updated, original);
        assert!(updated.contains("## Status\n\nAccepted\n"));
        // Everything from ## Context onward is byte-identical.
        let tail = |s: &str| s[s.find("## Context").unwrap()..].to_string();
        assert_eq!(tail(&updated), tail(&original));
        // The preamble is byte-identical too.
        let head = |s: &str| s[..s.find("## Status").unwrap()].to_string();
        assert_eq!(head(&updated), head(&original));
    }

    #[test]
    fn set_status_body_fails_without_status_section() {
        let mut doc = RecordDoc::parse("# 9. Broken\n\nDate: 2025-06-01\n\n## Context\n\nx\n");
        assert!(!doc.set_status_body("Accepted"));
    }

    #[test]
    fn subsections_stay_inside_their_section() {
        let original = render_skeleton(2, "Adopt gRPC", sample_date(), &Status::Proposed);
        let mut doc = RecordDoc::parse(&original);
        doc.set_status_body("Deprecated");
        let updated = doc.render();
        assert!(updated.contains("### Positive"));
        assert!(updated.contains("### Negative"));
        assert!(updated.contains("### Neutral"));
    }

    #[test]
    fn superseded_status_reads_back_as_superseded() {
        let body = superseded_status(10, "0010-use-kafka.md", "Accepted");
        assert_eq!(
            body,
            "Superseded by [ADR-0010](0010-use-kafka.md)\n~~Accepted~~"
        );

        let original = render_skeleton(3, "Use REST", sample_date(), &Status::Accepted);
        let mut doc = RecordDoc::parse(&original);
        doc.set_status_body(&body);
        let reparsed = RecordDoc::parse(&doc.render());
        assert_eq!(
            reparsed.status_line(),
            Some("Superseded by [ADR-0010](0010-use-kafka.md)")
        );
    }

    #[test]
    fn summary_parses_well_formed_record() {
        let text = render_skeleton(5, "Use Kafka for events", sample_date(), &Status::Proposed);
        let summary = RecordSummary::parse(5, "0005-use-kafka-for-events.md", &text);
        assert_eq!(summary.number, 5);
        assert_eq!(summary.title, "Use Kafka for events");
        assert_eq!(summary.status, "Proposed");
        assert_eq!(summary.date, "2025-06-01");
        assert_eq!(summary.file, "0005-use-kafka-for-events.md");
    }

    #[test]
    fn summary_uses_unknown_sentinels() {
        let summary = RecordSummary::parse(9, "0009-broken.md", "not a record at all\n");
        assert_eq!(summary.title, UNKNOWN);
        assert_eq!(summary.status, UNKNOWN);
        assert_eq!(summary.date, UNKNOWN);
    }

    #[test]
    fn summary_tolerates_empty_status_section() {
        let raw = "# 6. Half Written\n\nDate: 2025-06-01\n\n## Status\n\n\n## Context\n\nx\n";
        let summary = RecordSummary::parse(6, "0006-half-written.md", raw);
        assert_eq!(summary.title, "Half Written");
        assert_eq!(summary.status, UNKNOWN);
        assert_eq!(summary.date, "2025-06-01");
    }
}
