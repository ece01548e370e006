pub const DEFAULT_WORLD: &str = "salocaia";

/// Which document layout a statistics file uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DatasetVersion {
    /// A flat array of row records.
    V1,
    /// An object keyed by row label, carrying its own field metadata.
    #[default]
    V2,
}

impl DatasetVersion {
    pub fn file_name(&self, world: &str) -> String {
        match self {
            Self::V1 => format!("{}_data.json", world),
            Self::V2 => format!("{}_data_v2.json", world),
        }
    }
}

/// Resolves the world id from a URL fragment, with or without its leading `#`.
/// The id is not validated.
pub fn world_from_fragment(fragment: &str) -> &str {
    let world = fragment.strip_prefix('#').unwrap_or(fragment);
    if world.is_empty() {
        DEFAULT_WORLD
    } else {
        world
    }
}

pub fn banner_title(world: &str) -> String {
    let mut chars = world.chars();
    match chars.next() {
        Some(first) => format!("{}{} Statistics", first.to_uppercase(), chars.as_str()),
        None => "Statistics".to_owned(),
    }
}
