use common::{ChartDescriptor, Dataset};
use pretty_assertions::assert_eq;
use render::ChartSpec;

const DOCUMENT: &str = r#"{
    "players": ["Amy", "Bo", "Cy"],
    "field_metadata": {
        "nat_20_ratio": { "pretty": "% Nat 20s", "is_percent": true },
        "nat_1_ratio": { "pretty": "% Nat 1s", "is_percent": true },
        "d20_roll_count": { "pretty": "D20 Rolls" }
    },
    "All": { "nat_20_ratio": 0.1, "nat_1_ratio": 0.05, "d20_roll_count": 30 },
    "Amy": { "nat_20_ratio": 0.2, "nat_1_ratio": 0.1, "d20_roll_count": 10 },
    "Bo": { "nat_20_ratio": 0.05, "nat_1_ratio": 0.0, "d20_roll_count": 20 },
    "Cy": { "nat_20_ratio": "unknown" }
}"#;

fn descriptor(fields: &[&str], colors: &[&str], zero_floor: bool) -> ChartDescriptor {
    ChartDescriptor {
        id: "chart".to_owned(),
        title: None,
        fields: fields.iter().map(|f| (*f).to_owned()).collect(),
        colors: colors.iter().map(|c| (*c).to_owned()).collect(),
        zero_floor,
    }
}

#[test]
fn single_field_chart() {
    let dataset = Dataset::from_json_str(DOCUMENT).unwrap();
    let chart = ChartSpec::build(&descriptor(&["d20_roll_count"], &["#1f77b4"], true), &dataset);

    assert_eq!(1, chart.data.len());
    assert_eq!(vec!["Amy", "Bo", "Cy"], chart.data[0].x);
    assert_eq!(vec![Some(10.0), Some(20.0), None], chart.data[0].y);
    assert_eq!("D20 Rolls", chart.layout.title.as_ref().unwrap().text);
    assert_eq!(0.0, chart.layout.yaxis.range[0]);
    assert!((chart.layout.yaxis.range[1] - 22.0).abs() < 1e-9);
    assert_eq!(None, chart.layout.yaxis.ticksuffix);
}

#[test]
fn percent_series_are_scaled() {
    let dataset = Dataset::from_json_str(DOCUMENT).unwrap();
    let chart = ChartSpec::build(
        &descriptor(&["nat_20_ratio", "nat_1_ratio"], &["green"], false),
        &dataset,
    );

    assert_eq!(2, chart.data.len());
    assert_eq!("% Nat 20s", chart.data[0].name);
    assert_eq!(Some(20.0), chart.data[0].y[0].map(|v| v.round()));
    assert_eq!(None, chart.data[0].y[2]);
    assert_eq!("green", chart.data[0].marker.as_ref().unwrap().color);
    assert_eq!(None, chart.data[1].marker);
    assert_eq!(None, chart.layout.title);
    assert_eq!(Some("%"), chart.layout.yaxis.ticksuffix);
}

#[test]
fn plotly_json() {
    let dataset = Dataset::from_json_str(DOCUMENT).unwrap();
    let mut descriptor = descriptor(&["d20_roll_count"], &[], true);
    descriptor.title = Some("Rolls".to_owned());
    let chart = ChartSpec::build(&descriptor, &dataset);

    let data: serde_json::Value = serde_json::from_str(&chart.data_json().unwrap()).unwrap();
    assert_eq!(
        serde_json::json!([{
            "type": "bar",
            "name": "D20 Rolls",
            "x": ["Amy", "Bo", "Cy"],
            "y": [10.0, 20.0, null],
        }]),
        data
    );

    let layout: serde_json::Value = serde_json::from_str(&chart.layout_json().unwrap()).unwrap();
    assert_eq!("Rolls", layout["title"]["text"]);
    assert_eq!("group", layout["barmode"]);
    assert_eq!(0.0, layout["yaxis"]["range"][0]);
}
