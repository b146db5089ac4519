use chrono::NaiveDate;
use sheet2table::convert;
use sheet2table::normalizer_for;
use sheet2table::CellType;
use sheet2table::CellValue;

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_owned())
}

#[test]
fn score_column_widens_to_float() {
    let table = convert(vec![vec![
        text("Score"),
        CellValue::Integer(1),
        CellValue::Float(2.5),
        CellValue::Null,
    ]])
    .expect("conversion succeeds");

    let column = &table.columns()[0];
    assert_eq!(column.header, "Score");
    assert_eq!(column.normalized_type, CellType::Float);
    assert_eq!(
        column.values,
        vec![CellValue::Float(1.0), CellValue::Float(2.5), CellValue::Null]
    );
}

#[test]
fn empty_header_truncates_remaining_columns() {
    let table = convert(vec![
        vec![text("Name"), text("alice"), text("bob")],
        vec![text("Age"), CellValue::Integer(30), CellValue::Integer(41)],
        vec![text(""), CellValue::Integer(1), CellValue::Integer(2)],
        vec![text("Ignored"), text("x"), text("y")],
    ])
    .expect("conversion succeeds");

    assert_eq!(table.columns().len(), 2);
    let headers: Vec<&str> = table.headers().collect();
    assert_eq!(headers, vec!["Name", "Age"]);
}

#[test]
fn normalized_values_conform_to_column_type() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 9).expect("NaiveDate literal");
    let datetime = date.and_hms_opt(8, 0, 0).expect("NaiveDateTime literal");
    let table = convert(vec![
        vec![text("Name"), text("alice"), CellValue::Null],
        vec![text("Score"), CellValue::Integer(1), CellValue::Float(2.5)],
        vec![text("When"), CellValue::Date(date), CellValue::DateTime(datetime)],
        vec![text("Mixed"), CellValue::Integer(7), CellValue::Boolean(true)],
        vec![text("Blank"), CellValue::Null, CellValue::Null],
    ])
    .expect("conversion succeeds");

    for column in table.columns() {
        for value in &column.values {
            if *value != CellValue::Null {
                assert_eq!(
                    value.cell_type(),
                    column.normalized_type,
                    "column '{}' holds a non-conforming value",
                    column.header
                );
            }
        }
    }

    let kinds: Vec<CellType> = table
        .columns()
        .iter()
        .map(|column| column.normalized_type)
        .collect();
    assert_eq!(
        kinds,
        vec![
            CellType::Text,
            CellType::Float,
            CellType::DateTime,
            CellType::Text,
            CellType::Null,
        ]
    );
}

#[test]
fn conversion_failure_aborts_whole_table() {
    // The classifier never routes malformed text to the float routine, so
    // drive the routine through the registry the way the builder would.
    let normalize = normalizer_for(CellType::Float).expect("registered normalizer");
    let error = normalize(vec![CellValue::Float(1.0), text("not a number")])
        .expect_err("malformed value");

    assert_eq!(error.to_string(), "cannot convert 'not a number' to float");
}

#[test]
fn table_rows_feed_the_writer() {
    let table = convert(vec![
        vec![text("Name"), text("alice"), CellValue::Null],
        vec![text("Paid"), CellValue::Boolean(true), text("")],
    ])
    .expect("conversion succeeds");

    let headers: Vec<&str> = table.headers().collect();
    assert_eq!(headers, vec!["Name", "Paid"]);
    assert_eq!(table.row_count(), 2);

    let rendered: Vec<Vec<String>> = table
        .rows()
        .map(|row| row.into_iter().map(|value| value.to_string()).collect())
        .collect();
    assert_eq!(
        rendered,
        vec![
            vec!["alice".to_owned(), "true".to_owned()],
            vec!["".to_owned(), "".to_owned()],
        ]
    );
}
