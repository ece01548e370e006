use common::{Dataset, TableDescriptor};
use pretty_assertions::assert_eq;
use render::TableModel;

const DOCUMENT: &str = r##"{
    "world": "salocaia",
    "players": ["Amy", "Bo"],
    "field_metadata": {
        "nat_20_ratio": { "pretty": "% Nat 20s", "is_percent": true },
        "nat_20_count": {
            "pretty": "# Nat 20s",
            "explanation": "After advantage or disadvantage, was the number on the die a 20?"
        }
    },
    "All": { "nat_20_ratio": 0.125, "nat_20_count": 5, "odd_column": 7 },
    "All Players": { "nat_20_ratio": 0.1, "nat_20_count": 3, "odd_column": 4 },
    "Gamemaster": { "nat_20_ratio": 0.15, "nat_20_count": 2, "odd_column": 3 },
    "Amy": { "nat_20_ratio": 0.2, "nat_20_count": 2, "odd_column": 1 },
    "Bo": { "nat_20_ratio": 0.05, "nat_20_count": 1 }
}"##;

fn descriptor(columns: &[&str]) -> TableDescriptor {
    TableDescriptor {
        id: "crits".to_owned(),
        title: None,
        columns: columns.iter().map(|c| (*c).to_owned()).collect(),
    }
}

#[test]
fn percent_column_scenario() {
    let dataset = Dataset::from_json_str(DOCUMENT).unwrap();
    let table = TableModel::build(&descriptor(&["nat_20_ratio"]), &dataset, &dataset.row_keys());

    assert_eq!(
        vec!["Player", "% Nat 20s"],
        table.headers.iter().map(|h| h.label.as_str()).collect::<Vec<_>>()
    );
    assert_eq!(
        vec!["All", "All Players", "Gamemaster", "Amy", "Bo"],
        table.column_texts(0)
    );
    assert_eq!(
        vec!["12.5%", "10.0%", "15.0%", "20.0%", "5.0%"],
        table.column_texts(1)
    );
}

#[test]
fn shape_follows_descriptor() {
    let dataset = Dataset::from_json_str(DOCUMENT).unwrap();
    let columns = ["nat_20_count", "nat_20_ratio", "odd_column"];
    let row_keys = vec!["Bo".to_owned(), "Amy".to_owned()];

    let table = TableModel::build(&descriptor(&columns), &dataset, &row_keys);

    assert_eq!(columns.len() + 1, table.headers.len());
    assert_eq!(row_keys.len(), table.rows.len());
    for row in &table.rows {
        assert_eq!(columns.len() + 1, row.cells.len());
    }
    // caller order is kept
    assert_eq!(vec!["Bo", "Amy"], table.row_keys());
}

#[test]
fn headers_without_metadata_use_identifier() {
    let dataset = Dataset::from_json_str(DOCUMENT).unwrap();
    let table = TableModel::build(&descriptor(&["odd_column"]), &dataset, &dataset.row_keys());

    assert_eq!("odd_column", table.headers[1].label);
    assert_eq!(None, table.headers[1].tooltip);
    assert_eq!(vec!["7", "4", "3", "1", ""], table.column_texts(1));
}

#[test]
fn explanations_become_tooltips() {
    let dataset = Dataset::from_json_str(DOCUMENT).unwrap();
    let table = TableModel::build(&descriptor(&["nat_20_count"]), &dataset, &dataset.row_keys());

    assert_eq!(None, table.headers[0].tooltip);
    assert_eq!(
        Some("After advantage or disadvantage, was the number on the die a 20?"),
        table.headers[1].tooltip.as_deref()
    );
}

#[test]
fn missing_cells() {
    let dataset = Dataset::from_json_str(DOCUMENT).unwrap();
    let row_keys = vec!["Bo".to_owned(), "Nobody".to_owned()];
    let table = TableModel::build(&descriptor(&["odd_column", "nat_20_count"]), &dataset, &row_keys);

    let bo = &table.rows[0];
    assert!(bo.cells[1].is_missing());
    assert!(!bo.cells[2].is_missing());

    let nobody = &table.rows[1];
    assert_eq!("Nobody", nobody.cells[0].text);
    assert!(nobody.cells[1..].iter().all(|c| c.is_missing() && c.text.is_empty()));
}

#[test]
fn rebuilding_does_not_accumulate() {
    let dataset = Dataset::from_json_str(DOCUMENT).unwrap();
    let descriptor = descriptor(&["nat_20_ratio"]);

    let first = TableModel::build(&descriptor, &dataset, &dataset.row_keys());
    let second = TableModel::build(&descriptor, &dataset, &dataset.row_keys());

    assert_eq!(first, second);
    assert_eq!(2, second.headers.len());
}

#[test]
fn undescribed_columns_use_builtin_formatting() {
    let dataset = Dataset::from_json_str(
        r#"{
            "players": ["Amy"],
            "field_metadata": {},
            "All": { "advantage_ratio": 0.3333333333333333, "average_raw_d20_roll": 10.456 },
            "Amy": { "advantage_ratio": 0.5, "average_raw_d20_roll": 9.0 }
        }"#,
    )
    .unwrap();
    let table = TableModel::build(
        &descriptor(&["advantage_ratio", "average_raw_d20_roll"]),
        &dataset,
        &dataset.row_keys(),
    );

    assert_eq!("% Advantage", table.headers[1].label);
    assert_eq!(vec!["33.3%", "50.0%"], table.column_texts(1));
    assert_eq!(vec!["10.5", "9.0"], table.column_texts(2));
}
