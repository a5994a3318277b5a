use super::{CatalogTable, DataLoadError, RowError};
use std::io::Read;

/// One non-blank data row with every field trimmed and unquoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CsvRow {
    fields: Vec<String>,
}

impl CsvRow {
    pub(crate) fn column(&self, index: usize, column: &'static str) -> Result<&str, RowError> {
        self.fields
            .get(index)
            .map(String::as_str)
            .ok_or(RowError::MissingColumn { column, index })
    }

    pub(crate) fn integer<T>(&self, index: usize, column: &'static str) -> Result<T, RowError>
    where
        T: std::str::FromStr<Err = std::num::ParseIntError>,
    {
        let value = self.column(index, column)?;
        value.parse().map_err(|source| RowError::InvalidInteger {
            column,
            value: value.to_string(),
            source,
        })
    }

    pub(crate) fn number(&self, index: usize, column: &'static str) -> Result<f64, RowError> {
        let value = self.column(index, column)?;
        value.parse().map_err(|source| RowError::InvalidNumber {
            column,
            value: value.to_string(),
            source,
        })
    }

    /// Row content as it appears in diagnostics.
    pub(crate) fn raw(&self) -> String {
        self.fields.join(", ")
    }
}

/// Reads a whole table, skipping the header line and any blank lines.
///
/// The header is the first physical line whatever it contains, even when it
/// is blank.
pub(crate) fn read_rows<R: Read>(
    mut reader: R,
    table: CatalogTable,
) -> Result<Vec<CsvRow>, DataLoadError> {
    let mut content = Vec::new();
    reader
        .read_to_end(&mut content)
        .map_err(|source| DataLoadError::Read { table, source })?;

    if content.is_empty() {
        return Err(DataLoadError::Empty { table });
    }

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(skip_header(&content));
    let mut rows = Vec::new();

    for record in csv_reader.records() {
        let record = record.map_err(|source| DataLoadError::Csv { table, source })?;
        let fields = record.iter().map(clean_field).collect::<Vec<_>>();
        if fields.iter().all(String::is_empty) {
            continue;
        }

        rows.push(CsvRow { fields });
    }

    Ok(rows)
}

fn skip_header(content: &[u8]) -> &[u8] {
    match content.iter().position(|&byte| byte == b'\n') {
        Some(end) => &content[end + 1..],
        None => &[],
    }
}

fn clean_field(value: &str) -> String {
    let trimmed = value.trim();
    match trimmed
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
    {
        Some(inner) => inner.trim().to_string(),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn rows(data: &str) -> Vec<CsvRow> {
        read_rows(Cursor::new(data), CatalogTable::Restaurants).expect("csv parses")
    }

    fn fields(row: &CsvRow) -> Vec<&str> {
        row.fields.iter().map(String::as_str).collect()
    }

    #[test]
    fn skips_header_and_trims_fields() {
        let parsed = rows("id,name\n1 ,  Italian \n2,Chinese\n");
        assert_eq!(parsed.len(), 2);
        assert_eq!(fields(&parsed[0]), ["1", "Italian"]);
        assert_eq!(fields(&parsed[1]), ["2", "Chinese"]);
    }

    #[test]
    fn strips_surrounding_quotes() {
        let parsed = rows(
            "name,cuisine\n\"Pizza Place\",1\n\"Sushi, Bar\",2\n  \"Taco Stand\" ,3\n",
        );
        assert_eq!(fields(&parsed[0]), ["Pizza Place", "1"]);
        assert_eq!(fields(&parsed[1]), ["Sushi, Bar", "2"]);
        assert_eq!(fields(&parsed[2]), ["Taco Stand", "3"]);
    }

    #[test]
    fn skips_blank_and_whitespace_lines() {
        let parsed = rows("id,name\n\n1,Italian\n   \n\t\n2,Chinese");
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn header_only_table_has_no_rows() {
        assert!(rows("id,name\n").is_empty());
        assert!(rows("id,name").is_empty());
    }

    #[test]
    fn first_line_is_the_header_even_when_blank() {
        let parsed = rows("\n1,Italian\n2,Chinese\n");
        assert_eq!(parsed.len(), 2);
        assert_eq!(fields(&parsed[0]), ["1", "Italian"]);

        let parsed = rows("   \r\n1,Italian\r\n");
        assert_eq!(fields(&parsed[0]), ["1", "Italian"]);
    }

    #[test]
    fn header_fields_are_never_parsed() {
        let parsed = rows("\"unterminated,header\n1,Italian\n");
        assert_eq!(parsed.len(), 1);
        assert_eq!(fields(&parsed[0]), ["1", "Italian"]);
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = read_rows(Cursor::new(""), CatalogTable::Cuisines).expect_err("empty data");
        assert!(matches!(
            err,
            DataLoadError::Empty {
                table: CatalogTable::Cuisines
            }
        ));
        assert!(err.to_string().contains("CSV data is empty"));
    }

    #[test]
    fn short_rows_report_the_missing_column() {
        let parsed = rows("name,customer_rating,distance\nIncomplete,4,1.0\n");
        let err = parsed[0]
            .column(4, "cuisine_id")
            .expect_err("column missing");
        assert!(matches!(
            err,
            RowError::MissingColumn {
                column: "cuisine_id",
                index: 4
            }
        ));
    }

    #[test]
    fn numeric_accessors_wrap_parse_failures() {
        let parsed = rows("id,distance\nabc,far\n");
        assert!(matches!(
            parsed[0].integer::<i64>(0, "id"),
            Err(RowError::InvalidInteger { column: "id", .. })
        ));
        assert!(matches!(
            parsed[0].number(1, "distance"),
            Err(RowError::InvalidNumber {
                column: "distance",
                ..
            })
        ));
        assert_eq!(parsed[0].raw(), "abc, far");
    }
}
