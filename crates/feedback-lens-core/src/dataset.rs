//! Loading customer feedback from CSV.
//!
//! Only two columns are read: a rating and a free-text body. Their header
//! names come from [`Columns`]; everything else in the file is ignored.

use std::fs::File;
use std::io::Read;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::error::{SentimentError, SentimentOutcome};

/// Header names of the rating and text columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Columns {
    /// Column holding the review body.
    pub text: String,
    /// Column holding the star rating.
    pub rating: String,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            text: "Text".to_string(),
            rating: "Score".to_string(),
        }
    }
}

/// One row of feedback. The rating is kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Star rating, passed through unparsed.
    pub rating: String,
    /// Review body.
    pub text: String,
}

impl FeedbackRecord {
    /// Build a record from its two fields.
    pub fn new(rating: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            rating: rating.into(),
            text: text.into(),
        }
    }
}

/// Read feedback rows from CSV with a header line.
///
/// # Errors
///
/// Returns [`SentimentError::MissingField`] if either configured column is
/// absent from the header, or [`SentimentError::Csv`] for malformed input.
pub fn load_feedback<R: Read>(
    reader: R,
    columns: &Columns,
) -> SentimentOutcome<Vec<FeedbackRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let position = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| SentimentError::MissingField {
                field: name.to_string(),
            })
    };
    let text_idx = position(&columns.text)?;
    let rating_idx = position(&columns.rating)?;

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        records.push(FeedbackRecord {
            rating: row.get(rating_idx).unwrap_or_default().to_string(),
            text: row.get(text_idx).unwrap_or_default().to_string(),
        });
    }

    tracing::debug!(rows = records.len(), "loaded feedback rows");
    Ok(records)
}

/// Read feedback rows from a CSV file.
///
/// # Errors
///
/// Returns [`SentimentError::Io`] if the file cannot be opened, otherwise the
/// same errors as [`load_feedback`].
#[tracing::instrument(skip_all, fields(path = %path))]
pub fn load_feedback_file(
    path: &Utf8Path,
    columns: &Columns,
) -> SentimentOutcome<Vec<FeedbackRecord>> {
    let file = File::open(path).map_err(|source| SentimentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_feedback(file, columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    const SAMPLE: &str = "\
Id,ProductId,Score,Summary,Text
1,B001,5,Great,\"I absolutely love this, it's amazing!\"
2,B002,1,Nope,This is the worst product I have ever bought.
3,B003,3,Meh,\"It arrived on Tuesday.\"
";

    #[test]
    fn reads_configured_columns_in_order() {
        let records = load_feedback(SAMPLE.as_bytes(), &Columns::default()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(
            records[0],
            FeedbackRecord::new("5", "I absolutely love this, it's amazing!")
        );
        assert_eq!(records[1].rating, "1");
        assert_eq!(records[2].text, "It arrived on Tuesday.");
    }

    #[test]
    fn custom_column_names() {
        let csv = "stars,body\n4,fine\n";
        let columns = Columns {
            text: "body".to_string(),
            rating: "stars".to_string(),
        };
        let records = load_feedback(csv.as_bytes(), &columns).unwrap();
        assert_eq!(records, vec![FeedbackRecord::new("4", "fine")]);
    }

    #[test]
    fn header_whitespace_is_ignored() {
        let csv = " Score , Text \n2,meh\n";
        let records = load_feedback(csv.as_bytes(), &Columns::default()).unwrap();
        assert_eq!(records, vec![FeedbackRecord::new("2", "meh")]);
    }

    #[test]
    fn missing_text_column() {
        let csv = "Score,Summary\n5,Great\n";
        let err = load_feedback(csv.as_bytes(), &Columns::default()).unwrap_err();
        assert!(matches!(err, SentimentError::MissingField { ref field } if field == "Text"));
    }

    #[test]
    fn missing_rating_column() {
        let csv = "Text\nhello\n";
        let err = load_feedback(csv.as_bytes(), &Columns::default()).unwrap_err();
        assert!(matches!(err, SentimentError::MissingField { ref field } if field == "Score"));
    }

    #[test]
    fn header_only_yields_no_rows() {
        let records = load_feedback("Score,Text\n".as_bytes(), &Columns::default()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn ragged_row_is_a_csv_error() {
        let csv = "Score,Text\n5,ok\n4\n";
        let err = load_feedback(csv.as_bytes(), &Columns::default()).unwrap_err();
        assert!(matches!(err, SentimentError::Csv(_)));
    }

    #[test]
    fn loads_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("Reviews.csv")).unwrap();
        std::fs::write(&path, SAMPLE).unwrap();

        let records = load_feedback_file(&path, &Columns::default()).unwrap();
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = Utf8Path::new("/nonexistent/Reviews.csv");
        let err = load_feedback_file(path, &Columns::default()).unwrap_err();
        assert!(matches!(err, SentimentError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/Reviews.csv"));
    }
}
