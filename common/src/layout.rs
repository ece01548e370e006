//! Page configuration: which tables and charts are shown and what they contain.

use crate::legacy;
use crate::DatasetVersion;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TableDescriptor {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    pub columns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChartDescriptor {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    pub fields: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    /// Pin the lower end of the value axis to zero.
    #[serde(default)]
    pub zero_floor: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Layout {
    /// Fields of the `All` row shown next to the banner.
    #[serde(default)]
    pub summary: Vec<String>,
    #[serde(default)]
    pub tables: Vec<TableDescriptor>,
    #[serde(default)]
    pub charts: Vec<ChartDescriptor>,
}

fn table(id: &str, title: &str, columns: Vec<String>) -> TableDescriptor {
    TableDescriptor {
        id: id.to_owned(),
        title: Some(title.to_owned()),
        columns,
    }
}

fn columns(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|c| (*c).to_owned()).collect()
}

impl Layout {
    /// The statistics page. The two document versions name the d20 roll
    /// count differently, everything else is shared.
    pub fn standard(version: DatasetVersion) -> Self {
        let rolls = match version {
            DatasetVersion::V1 => "roll_count",
            DatasetVersion::V2 => "d20_roll_count",
        };
        let with_rolls = |ids: &[&str]| {
            std::iter::once(rolls.to_owned())
                .chain(ids.iter().map(|c| (*c).to_owned()))
                .collect::<Vec<_>>()
        };

        let mut tables = vec![
            table(
                "advantage",
                "Advantage",
                with_rolls(&[
                    "advantage_count",
                    "advantage_ratio",
                    "disadvantage_count",
                    "disadvantage_ratio",
                ]),
            ),
            table(
                "type_of_roll",
                "Types of Roll",
                with_rolls(&[
                    "attack_roll_count",
                    "attack_roll_count_prev",
                    "saving_throw_count",
                    "saving_throw_count_prev",
                    "ability_check_count",
                    "ability_check_count_prev",
                    "skill_check_count",
                    "skill_check_count_prev",
                    "initiative_roll_count",
                    "initiative_roll_count_prev",
                ]),
            ),
            table(
                "type_of_roll_pct",
                "Types of Roll (%)",
                with_rolls(&[
                    "attack_roll_ratio",
                    "saving_throw_ratio",
                    "ability_check_ratio",
                    "skill_check_ratio",
                    "initiative_roll_ratio",
                ]),
            ),
            table(
                "crits",
                "Crits",
                with_rolls(&[
                    "nat_20_count",
                    "nat_20_count_prev",
                    "nat_20_ratio",
                    "nat_1_count",
                    "nat_1_count_prev",
                    "nat_1_ratio",
                    "stolen_nat_20_count",
                    "stolen_nat_20_count_prev",
                    "super_nat_20_count",
                    "super_nat_20_count_prev",
                    "disadvantage_nat_20_count",
                    "disadvantage_nat_20_count_prev",
                    "dropped_nat_1_count",
                    "dropped_nat_1_count_prev",
                    "super_nat_1_count",
                    "super_nat_1_count_prev",
                    "advantage_nat_1_count",
                    "advantage_nat_1_count_prev",
                ]),
            ),
            table(
                "d20_performance_by_type",
                "D20 Performance",
                with_rolls(&[
                    "average_raw_d20_roll",
                    "average_final_d20_roll",
                    "average_d20_after_modifiers",
                    "average_attack_before_modifiers",
                    "average_attack_after_modifiers",
                    "average_save_before_modifiers",
                    "average_save_after_modifiers",
                    "average_skill_before_modifiers",
                    "average_skill_after_modifiers",
                    "average_ability_before_modifiers",
                    "average_ability_after_modifiers",
                    "average_initiative_before_modifiers",
                    "average_initiative_after_modifiers",
                ]),
            ),
        ];

        let mut saves = columns(&["saving_throw_count"]);
        for (id, _) in legacy::SAVES {
            saves.push(legacy::save_count_column(id));
            saves.push(legacy::save_average_column(id));
        }
        let mut abilities = columns(&["ability_check_count"]);
        for (id, _) in legacy::ABILITIES {
            abilities.push(legacy::ability_count_column(id));
            abilities.push(legacy::ability_average_column(id));
        }
        let mut skill_counts = columns(&["skill_check_count"]);
        let mut skill_averages = columns(&["skill_check_count"]);
        for (id, _) in legacy::SKILLS {
            skill_counts.push(legacy::skill_count_column(id));
            skill_averages.push(legacy::skill_average_column(id));
        }

        tables.push(table("save_specific_data", "Saving Throws", saves));
        tables.push(table("ability_specific_data", "Ability Checks", abilities));
        tables.push(table("skill_specific_data1", "Skill Checks", skill_counts));
        tables.push(table("skill_specific_data2", "Skill Check Averages", skill_averages));

        if version == DatasetVersion::V2 {
            tables.push(table(
                "raw_dice",
                "Raw Dice",
                columns(&[
                    "d20_raw_count",
                    "d20_raw_average",
                    "d12_raw_count",
                    "d10_raw_count",
                    "d10_raw_average",
                    "d8_raw_count",
                    "d8_raw_average",
                    "d6_raw_count",
                    "d6_raw_average",
                    "d4_raw_count",
                    "d4_raw_average",
                    "d100_raw_count",
                    "d347_raw_count",
                ]),
            ));
        }

        let charts = vec![
            ChartDescriptor {
                id: "roll_count_chart".to_owned(),
                title: None,
                fields: vec![rolls.to_owned()],
                colors: columns(&["#1f77b4"]),
                zero_floor: true,
            },
            ChartDescriptor {
                id: "crit_chart".to_owned(),
                title: Some("Natural 20s and 1s".to_owned()),
                fields: columns(&["nat_20_ratio", "nat_1_ratio"]),
                colors: columns(&["#2ca02c", "#d62728"]),
                zero_floor: true,
            },
            ChartDescriptor {
                id: "roll_type_chart".to_owned(),
                title: Some("Types of Roll".to_owned()),
                fields: columns(&[
                    "attack_roll_ratio",
                    "saving_throw_ratio",
                    "ability_check_ratio",
                    "skill_check_ratio",
                    "initiative_roll_ratio",
                ]),
                colors: columns(&["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd"]),
                zero_floor: true,
            },
            ChartDescriptor {
                id: "average_chart".to_owned(),
                title: None,
                fields: columns(&["average_raw_d20_roll"]),
                colors: columns(&["#8c564b"]),
                zero_floor: false,
            },
        ];

        Self {
            summary: columns(&[rolls, "nat_20_count", "nat_1_count", "average_raw_d20_roll"]),
            tables,
            charts,
        }
    }
}
