//! Bar chart specifications in the shape Plotly's `newPlot` takes.

use common::{ChartDescriptor, Dataset, Value};

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Marker {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct BarTrace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: String,
    pub x: Vec<String>,
    /// `None` leaves a gap for rows without a numeric value.
    pub y: Vec<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Axis {
    pub range: [f64; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticksuffix: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ChartLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    pub barmode: &'static str,
    pub yaxis: Axis,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub id: String,
    pub data: Vec<BarTrace>,
    pub layout: ChartLayout,
}

impl ChartSpec {
    /// One bar series per field over the participants. Percent fields are
    /// plotted in percent, not as ratios.
    pub fn build(descriptor: &ChartDescriptor, dataset: &Dataset) -> Self {
        let metadata = &dataset.field_metadata;
        let labels = dataset.players.clone();

        let data: Vec<BarTrace> = descriptor
            .fields
            .iter()
            .enumerate()
            .map(|(idx, field)| {
                let scale = match metadata.get(field) {
                    Some(meta) if meta.is_percent => 100.0,
                    _ => 1.0,
                };
                let y = labels
                    .iter()
                    .map(|player| {
                        dataset
                            .value(player, field)
                            .and_then(Value::as_number)
                            .filter(|n| n.is_finite())
                            .map(|n| n * scale)
                    })
                    .collect();

                BarTrace {
                    kind: "bar",
                    name: metadata.label(field).to_owned(),
                    x: labels.clone(),
                    y,
                    marker: descriptor.colors.get(idx).map(|color| Marker {
                        color: color.clone(),
                    }),
                }
            })
            .collect();

        let title = descriptor
            .title
            .clone()
            .or_else(|| match descriptor.fields.as_slice() {
                [only] => Some(metadata.label(only).to_owned()),
                _ => None,
            })
            .map(|text| Title { text });

        let all_percent = !descriptor.fields.is_empty()
            && descriptor
                .fields
                .iter()
                .all(|f| metadata.get(f).map_or(false, |m| m.is_percent));

        let (low, high) = axis_range(
            data.iter().flat_map(|trace| trace.y.iter().flatten().copied()),
            descriptor.zero_floor,
        );

        tracing::trace!(chart = %descriptor.id, low, high, "Built chart");

        Self {
            id: descriptor.id.clone(),
            data,
            layout: ChartLayout {
                title,
                barmode: "group",
                yaxis: Axis {
                    range: [low, high],
                    ticksuffix: all_percent.then_some("%"),
                },
            },
        }
    }

    pub fn data_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.data)
    }

    pub fn layout_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.layout)
    }
}

/// Value axis padded by a tenth beyond the data. The axis always includes
/// zero; `zero_floor` pins its lower end there even for negative data.
pub fn axis_range(values: impl IntoIterator<Item = f64>, zero_floor: bool) -> (f64, f64) {
    let (min, max) = values
        .into_iter()
        .fold((0.0_f64, 0.0_f64), |(min, max), v| (min.min(v), max.max(v)));

    let low = if zero_floor { 0.0 } else { min * 1.1 };
    let high = max * 1.1;

    if high <= low {
        (low, low + 1.0)
    } else {
        (low, high)
    }
}
