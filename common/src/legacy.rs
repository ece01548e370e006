//! Column dictionary for documents that carry no field metadata of their own.

use crate::{FieldMeta, FieldMetadata};

pub const SKILLS: [(&str, &str); 18] = [
    ("acr", "Acrobatics"),
    ("ani", "Animal Handling"),
    ("arc", "Arcana"),
    ("ath", "Athletics"),
    ("dec", "Deception"),
    ("his", "History"),
    ("ins", "Insight"),
    ("itm", "Intimidation"),
    ("inv", "Investigation"),
    ("med", "Medicine"),
    ("nat", "Nature"),
    ("prc", "Perception"),
    ("prf", "Performance"),
    ("per", "Persuasion"),
    ("rel", "Religion"),
    ("slt", "Sleight of Hand"),
    ("ste", "Stealth"),
    ("sur", "Survival"),
];

pub const ABILITIES: [(&str, &str); 6] = [
    ("str", "Strength"),
    ("dex", "Dexterity"),
    ("con", "Constitution"),
    ("int", "Intelligence"),
    ("wis", "Wisdom"),
    ("cha", "Charisma"),
];

pub const SAVES: [(&str, &str); 7] = [
    ("death", "Death"),
    ("str", "Strength"),
    ("dex", "Dexterity"),
    ("con", "Constitution"),
    ("int", "Intelligence"),
    ("wis", "Wisdom"),
    ("cha", "Charisma"),
];

const LABELS: &[(&str, &str)] = &[
    ("player", "Player"),
    ("roll_count", "D20 Rolls"),
    ("roll_count_prev", "D20s Last Session"),
    ("advantage_count", "Rolls with Advantage"),
    ("disadvantage_count", "Rolls with Disadvantage"),
    ("advantage_ratio", "% Advantage"),
    ("disadvantage_ratio", "% Disadvantage"),
    ("attack_roll_count", "Attacks"),
    ("attack_roll_count_prev", "Attacks Last Session"),
    ("attack_roll_ratio", "% Attacks"),
    ("saving_throw_count", "Saves"),
    ("saving_throw_count_prev", "Saves Last Session"),
    ("saving_throw_ratio", "% Saves"),
    ("ability_check_count", "Ability Checks"),
    ("ability_check_count_prev", "Ability Checks Last Session"),
    ("ability_check_ratio", "% Ability Checks"),
    ("skill_check_count", "Skill Checks"),
    ("skill_check_count_prev", "Skill Checks Last Session"),
    ("skill_check_ratio", "% Skill Checks"),
    ("initiative_roll_count", "Initiative Rolls"),
    ("initiative_roll_count_prev", "Initiative Rolls Last Session"),
    ("initiative_roll_ratio", "% Initiative Rolls"),
    ("nat_20_count", "Nat 20s"),
    ("nat_20_count_prev", "Nat 20s Last Session"),
    ("nat_20_ratio", "% Nat 20s"),
    ("nat_1_count", "Nat 1s"),
    ("nat_1_count_prev", "Nat 1s Last Session"),
    ("nat_1_ratio", "% Nat 1s"),
    ("stolen_nat_20_count", "Stolen Nat 20s"),
    ("super_nat_20_count", "Super Nat 20s"),
    ("disadvantage_nat_20_count", "Disadvantage Nat 20s"),
    ("dropped_nat_1_count", "Dropped Nat 1s"),
    ("super_nat_1_count", "Super Nat 1s"),
    ("advantage_nat_1_count", "Advantage Nat 1s"),
    ("stolen_nat_20_count_prev", "Stolen Nat 20s Last Session"),
    ("super_nat_20_count_prev", "Super Nat 20s Last Session"),
    ("disadvantage_nat_20_count_prev", "Disadvantage Nat 20s Last Session"),
    ("dropped_nat_1_count_prev", "Dropped Nat 1s Last Session"),
    ("super_nat_1_count_prev", "Super Nat 1s Last Session"),
    ("advantage_nat_1_count_prev", "Advantage Nat 1s Last Session"),
    ("average_raw_d20_roll", "Raw D20 (inc. dropped)"),
    ("average_final_d20_roll", "Raw D20 (after adv./disadv.)"),
    ("average_d20_after_modifiers", "D20 after Mods"),
    ("average_attack_before_modifiers", "Attacks before Mods"),
    ("average_initiative_before_modifiers", "Initiative before Mods"),
    ("average_save_before_modifiers", "Saves before Mods"),
    ("average_skill_before_modifiers", "Skill Checks before Mods"),
    ("average_ability_before_modifiers", "Ability Checks before Mods"),
    ("average_attack_after_modifiers", "Attacks after Mods"),
    ("average_initiative_after_modifiers", "Initiative after Mods"),
    ("average_save_after_modifiers", "Saves after Mods"),
    ("average_skill_after_modifiers", "Skill Checks after Mods"),
    ("average_ability_after_modifiers", "Ability Checks after Mods"),
];

pub fn skill_count_column(id: &str) -> String {
    format!("{}_skill_count", id)
}

pub fn skill_average_column(id: &str) -> String {
    format!("{}_skill_average", id)
}

pub fn ability_count_column(id: &str) -> String {
    format!("{}_ability_count", id)
}

pub fn ability_average_column(id: &str) -> String {
    format!("{}_ability_average", id)
}

pub fn save_count_column(id: &str) -> String {
    format!("{}_save_count", id)
}

pub fn save_average_column(id: &str) -> String {
    format!("{}_save_average", id)
}

pub fn field_metadata() -> FieldMetadata {
    let mut metadata: FieldMetadata = LABELS
        .iter()
        .map(|(column, label)| {
            let meta = FieldMeta::pretty(*label);
            let meta = if column.ends_with("_ratio") {
                meta.percent()
            } else if column.starts_with("average_") {
                meta.roll_average()
            } else {
                meta
            };
            (*column, meta)
        })
        .collect();

    for (id, name) in SKILLS {
        metadata.insert(skill_count_column(id), FieldMeta::pretty(format!("{} Count", name)));
        metadata.insert(
            skill_average_column(id),
            FieldMeta::pretty(format!("Avg. {}", name)).roll_average(),
        );
    }
    for (id, name) in ABILITIES {
        metadata.insert(ability_count_column(id), FieldMeta::pretty(format!("{} Count", name)));
        metadata.insert(
            ability_average_column(id),
            FieldMeta::pretty(format!("Avg. {}", name)).roll_average(),
        );
    }
    for (id, name) in SAVES {
        metadata.insert(save_count_column(id), FieldMeta::pretty(format!("{} Count", name)));
        metadata.insert(
            save_average_column(id),
            FieldMeta::pretty(format!("Avg. {}", name)).roll_average(),
        );
    }

    metadata
}
