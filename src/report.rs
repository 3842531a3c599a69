use std::io::Write;

use crate::{Result, ScoutError, SearchOutcome};

/// Tabular export sink: a header row followed by one row per processed
/// document, in pipeline delivery order. No sorting, no dedup.
pub struct CsvReport<W: Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl<W: Write> CsvReport<W> {
    pub fn new(inner: W) -> Result<Self> {
        let mut writer = csv::Writer::from_writer(inner);
        writer.write_record(["URL", "Keyword", "Page Numbers", "Count", "Keyword Found"])?;

        Ok(Self { writer, rows: 0 })
    }

    pub fn write_row(&mut self, outcome: &SearchOutcome) -> Result<()> {
        self.writer.write_record([
            outcome.document_url.as_str(),
            &outcome.keyword,
            &format_pages(&outcome.matched_pages),
            &outcome.occurrence_count.to_string(),
            if outcome.found { "True" } else { "False" },
        ])?;
        self.rows += 1;

        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        self.writer
            .into_inner()
            .map_err(|e| ScoutError::Io(e.into_error()))
    }
}

/// Page numbers render as a bracketed list, e.g. `[2, 5]` or `[]`.
fn format_pages(pages: &[u32]) -> String {
    let inner = pages
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    format!("[{inner}]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn outcome(found: bool, pages: Vec<u32>, count: usize) -> SearchOutcome {
        SearchOutcome {
            document_url: Url::parse("http://example.com/a.pdf").unwrap(),
            keyword: "report".to_string(),
            matched_pages: pages,
            occurrence_count: count,
            found,
        }
    }

    #[test]
    fn test_format_pages() {
        assert_eq!(format_pages(&[]), "[]");
        assert_eq!(format_pages(&[3]), "[3]");
        assert_eq!(format_pages(&[2, 5]), "[2, 5]");
    }

    #[test]
    fn test_header_and_rows() {
        let mut report = CsvReport::new(Vec::new()).unwrap();
        report.write_row(&outcome(true, vec![2, 5], 4)).unwrap();
        report.write_row(&outcome(false, vec![], 0)).unwrap();

        assert_eq!(report.rows_written(), 2);

        let bytes = report.finish().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "URL,Keyword,Page Numbers,Count,Keyword Found");
        assert_eq!(lines[1], "http://example.com/a.pdf,report,\"[2, 5]\",4,True");
        assert_eq!(lines[2], "http://example.com/a.pdf,report,[],0,False");
    }
}
