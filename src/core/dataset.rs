//! Object/feature table
//!
//! A Dataset maps object names to binary feature values and remembers the
//! order in which the feature columns were declared.

use rustc_hash::FxHashMap;
use std::fmt;

/// A table of objects described by binary features
///
/// Every object carries a value for every feature (the table is rectangular),
/// and features keep their declaration order, which is significant for
/// tie-breaking during feature selection.
#[derive(Debug, Clone)]
pub struct Dataset {
    objects: FxHashMap<String, FxHashMap<String, u8>>,
    features: Vec<String>,
}

/// Error type for malformed dataset text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    Empty,
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    NonBinaryCell {
        line: usize,
        value: String,
    },
    DuplicateObject(String),
    DuplicateFeature(String),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "dataset has no header row"),
            Self::RaggedRow {
                line,
                expected,
                found,
            } => {
                write!(f, "row {line} has {found} cells, expected {expected}")
            }
            Self::NonBinaryCell { line, value } => {
                write!(f, "row {line} has non-binary cell value '{value}'")
            }
            Self::DuplicateObject(name) => write!(f, "duplicate object name '{name}'"),
            Self::DuplicateFeature(name) => write!(f, "duplicate feature column '{name}'"),
        }
    }
}

impl std::error::Error for DatasetError {}

impl Dataset {
    /// Parse a dataset from tabular text
    ///
    /// The first row is a header naming the object column followed by the
    /// feature columns. Every following row supplies an object name and one
    /// `0`/`1` cell per feature. Blank lines are skipped.
    ///
    /// A table with a header but no object rows parses successfully; running
    /// a game against it is rejected separately.
    ///
    /// # Errors
    /// Returns `DatasetError` if:
    /// - The text has no header row
    /// - A row has the wrong number of cells
    /// - A cell is anything other than `0` or `1`
    /// - An object name or feature column appears twice
    ///
    /// # Examples
    /// ```
    /// use twenty_questions::core::Dataset;
    ///
    /// let table = "object,red,round\napple,1,1\nbanana,0,0\n";
    /// let dataset = Dataset::parse(table).unwrap();
    /// assert_eq!(dataset.object_count(), 2);
    /// assert_eq!(dataset.features(), ["red", "round"]);
    /// assert!(dataset.has_feature("apple", "red"));
    /// ```
    pub fn parse(text: &str) -> Result<Self, DatasetError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (_, header) = lines.next().ok_or(DatasetError::Empty)?;

        let mut columns = header.split(',').map(str::trim);
        // First column names the objects; the rest are features.
        columns.next().ok_or(DatasetError::Empty)?;

        let mut features: Vec<String> = Vec::new();
        for column in columns {
            if features.iter().any(|f| f == column) {
                return Err(DatasetError::DuplicateFeature(column.to_string()));
            }
            features.push(column.to_string());
        }

        let mut objects: FxHashMap<String, FxHashMap<String, u8>> = FxHashMap::default();

        for (line, row) in lines {
            let cells: Vec<&str> = row.split(',').map(str::trim).collect();
            if cells.len() != features.len() + 1 {
                return Err(DatasetError::RaggedRow {
                    line,
                    expected: features.len() + 1,
                    found: cells.len(),
                });
            }

            let name = cells[0].to_string();
            if objects.contains_key(&name) {
                return Err(DatasetError::DuplicateObject(name));
            }

            let mut values = FxHashMap::default();
            for (feature, cell) in features.iter().zip(&cells[1..]) {
                let value = match *cell {
                    "0" => 0,
                    "1" => 1,
                    other => {
                        return Err(DatasetError::NonBinaryCell {
                            line,
                            value: other.to_string(),
                        });
                    }
                };
                values.insert(feature.clone(), value);
            }

            objects.insert(name, values);
        }

        Ok(Self { objects, features })
    }

    /// Number of objects in the table
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Whether the table has no objects
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Feature names in declaration order
    #[must_use]
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Whether an object with this name exists
    #[must_use]
    pub fn contains_object(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }

    /// Object names in no particular order
    pub fn object_names(&self) -> impl Iterator<Item = &str> {
        self.objects.keys().map(String::as_str)
    }

    /// Object names sorted alphabetically
    #[must_use]
    pub fn sorted_object_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.objects.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// The raw cell value for an object/feature pair, if both exist
    #[must_use]
    pub fn value(&self, object: &str, feature: &str) -> Option<u8> {
        self.objects.get(object)?.get(feature).copied()
    }

    /// Whether the object has the feature (cell value 1)
    ///
    /// Unknown object or feature names read as 0.
    #[must_use]
    pub fn has_feature(&self, object: &str, feature: &str) -> bool {
        self.value(object, feature) == Some(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
object,red,round,sweet
apple,1,1,1
banana,0,0,1
tomato,1,1,0
lemon,0,1,0
";

    #[test]
    fn parse_valid_table() {
        let dataset = Dataset::parse(TABLE).unwrap();

        assert_eq!(dataset.object_count(), 4);
        assert_eq!(dataset.features(), ["red", "round", "sweet"]);
        assert!(dataset.contains_object("apple"));
        assert!(!dataset.contains_object("cherry"));
    }

    #[test]
    fn parse_preserves_feature_order() {
        let dataset = Dataset::parse("name,zebra,apple,mango\nx,1,0,1\n").unwrap();

        // Declaration order, not alphabetical
        assert_eq!(dataset.features(), ["zebra", "apple", "mango"]);
    }

    #[test]
    fn parse_skips_blank_lines() {
        let dataset = Dataset::parse("object,red\n\napple,1\n\nlemon,0\n").unwrap();
        assert_eq!(dataset.object_count(), 2);
    }

    #[test]
    fn parse_empty_text_is_error() {
        assert_eq!(Dataset::parse("").unwrap_err(), DatasetError::Empty);
        assert_eq!(Dataset::parse("\n\n").unwrap_err(), DatasetError::Empty);
    }

    #[test]
    fn parse_header_only_is_empty_dataset() {
        let dataset = Dataset::parse("object,red,round\n").unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.features().len(), 2);
    }

    #[test]
    fn parse_ragged_row_is_error() {
        let result = Dataset::parse("object,red,round\napple,1\n");
        assert_eq!(
            result.unwrap_err(),
            DatasetError::RaggedRow {
                line: 2,
                expected: 3,
                found: 2,
            }
        );
    }

    #[test]
    fn parse_non_binary_cell_is_error() {
        let result = Dataset::parse("object,red\napple,2\n");
        assert_eq!(
            result.unwrap_err(),
            DatasetError::NonBinaryCell {
                line: 2,
                value: "2".to_string(),
            }
        );
    }

    #[test]
    fn parse_duplicate_object_is_error() {
        let result = Dataset::parse("object,red\napple,1\napple,0\n");
        assert_eq!(
            result.unwrap_err(),
            DatasetError::DuplicateObject("apple".into())
        );
    }

    #[test]
    fn parse_duplicate_feature_is_error() {
        let result = Dataset::parse("object,red,red\napple,1,0\n");
        assert_eq!(
            result.unwrap_err(),
            DatasetError::DuplicateFeature("red".into())
        );
    }

    #[test]
    fn value_lookup() {
        let dataset = Dataset::parse(TABLE).unwrap();

        assert_eq!(dataset.value("apple", "red"), Some(1));
        assert_eq!(dataset.value("lemon", "red"), Some(0));
        assert_eq!(dataset.value("apple", "spiky"), None);
        assert_eq!(dataset.value("durian", "red"), None);
    }

    #[test]
    fn has_feature_reads_missing_as_false() {
        let dataset = Dataset::parse(TABLE).unwrap();

        assert!(dataset.has_feature("apple", "red"));
        assert!(!dataset.has_feature("lemon", "red"));
        assert!(!dataset.has_feature("durian", "red"));
        assert!(!dataset.has_feature("apple", "spiky"));
    }

    #[test]
    fn sorted_object_names_are_alphabetical() {
        let dataset = Dataset::parse(TABLE).unwrap();

        assert_eq!(
            dataset.sorted_object_names(),
            ["apple", "banana", "lemon", "tomato"]
        );
    }

    #[test]
    fn cells_are_trimmed() {
        let dataset = Dataset::parse("object, red , round\napple , 1 , 0\n").unwrap();

        assert_eq!(dataset.features(), ["red", "round"]);
        assert!(dataset.has_feature("apple", "red"));
        assert!(!dataset.has_feature("apple", "round"));
    }
}
