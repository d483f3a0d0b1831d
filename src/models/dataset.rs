//! Dataset models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single quarterly observation: the date string as published and the GDP in billions.
///
/// On the wire a record is a two element array, e.g. `["1947-01-01", 243.1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, f64)", into = "(String, f64)")]
pub struct Record {
    pub date: String,
    pub value: f64,
}

impl Record {
    pub fn new(date: impl Into<String>, value: f64) -> Self {
        Self {
            date: date.into(),
            value,
        }
    }

    /// Parse the leading `YYYY-MM-DD` part of the date string
    pub fn parse_date(&self) -> Result<NaiveDate, chrono::ParseError> {
        let day = self.date.get(..10).unwrap_or(&self.date);
        NaiveDate::parse_from_str(day, "%Y-%m-%d")
    }

    /// Text shown in the label attached to this record's bar
    pub fn label(&self) -> String {
        format!("{}, ${} Billion", self.date, self.value)
    }
}

impl From<(String, f64)> for Record {
    fn from((date, value): (String, f64)) -> Self {
        Self::new(date, value)
    }
}

impl From<Record> for (String, f64) {
    fn from(record: Record) -> Self {
        (record.date, record.value)
    }
}

/// Ordered, immutable sequence of records from one load
///
/// On the wire a dataset is the array of record pairs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Record>", into = "Vec<Record>")]
pub struct Dataset {
    records: Vec<Record>,
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl From<Dataset> for Vec<Record> {
    fn from(dataset: Dataset) -> Self {
        dataset.records
    }
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Largest value in the dataset, `None` when empty
    pub fn max_value(&self) -> Option<f64> {
        self.records
            .iter()
            .map(|r| r.value)
            .fold(None, |acc, v| match acc {
                Some(m) if m >= v => Some(m),
                _ => Some(v),
            })
    }

    /// Earliest and latest dates in the dataset
    pub fn date_extent(&self) -> Result<Option<(NaiveDate, NaiveDate)>, (String, chrono::ParseError)> {
        let mut extent: Option<(NaiveDate, NaiveDate)> = None;
        for record in &self.records {
            let date = record
                .parse_date()
                .map_err(|e| (record.date.clone(), e))?;
            extent = Some(match extent {
                Some((lo, hi)) => (lo.min(date), hi.max(date)),
                None => (date, date),
            });
        }
        Ok(extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_json_pair() {
        let record: Record = serde_json::from_str(r#"["1947-01-01", 243.1]"#).unwrap();
        assert_eq!(record, Record::new("1947-01-01", 243.1));
    }

    #[test]
    fn test_dataset_preserves_order() {
        let dataset: Dataset =
            serde_json::from_str(r#"[["1947-04-01", 246.3], ["1947-01-01", 243.1]]"#).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[0].date, "1947-04-01");
        assert_eq!(dataset.records()[1].date, "1947-01-01");
    }

    #[test]
    fn test_label_format() {
        assert_eq!(Record::new("1947-01-01", 243.1).label(), "1947-01-01, $243.1 Billion");
        assert_eq!(Record::new("2015-07-01", 18064.7).label(), "2015-07-01, $18064.7 Billion");
        assert_eq!(Record::new("2000-01-01", 10000.0).label(), "2000-01-01, $10000 Billion");
    }

    #[test]
    fn test_extents() {
        let dataset = Dataset::new(vec![
            Record::new("1950-01-01", 10.0),
            Record::new("1947-01-01", 30.0),
            Record::new("1960-07-01", 20.0),
        ]);
        assert_eq!(dataset.max_value(), Some(30.0));
        let (lo, hi) = dataset.date_extent().unwrap().unwrap();
        assert_eq!(lo, NaiveDate::from_ymd_opt(1947, 1, 1).unwrap());
        assert_eq!(hi, NaiveDate::from_ymd_opt(1960, 7, 1).unwrap());

        assert_eq!(Dataset::default().max_value(), None);
        assert!(Dataset::default().date_extent().unwrap().is_none());
    }

    #[test]
    fn test_bad_date_is_reported() {
        let dataset = Dataset::new(vec![Record::new("not a date", 1.0)]);
        let (date, _) = dataset.date_extent().unwrap_err();
        assert_eq!(date, "not a date");
    }
}
