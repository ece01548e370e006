use std::path::{Path, PathBuf};

use common::{Dataset, DatasetVersion, Layout};

#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Directory holding the `{world}_data*.json` documents
    #[arg(long, default_value = "public/")]
    pub public: PathBuf,
    /// Page layout as JSON, defaults to the standard page
    #[arg(long)]
    pub layout: Option<PathBuf>,
    /// Print the report as JSON instead of logging it
    #[arg(long)]
    pub json: bool,
    #[arg(default_value = common::DEFAULT_WORLD)]
    pub world: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MissingCell {
    pub table: String,
    pub row: String,
    pub column: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Report {
    pub path: PathBuf,
    pub version: &'static str,
    pub rows: usize,
    pub players: usize,
    pub missing: Vec<MissingCell>,
}

/// Loads the newest document version present for `world`.
pub fn load(public: &Path, world: &str) -> Result<(PathBuf, Dataset), common::Error> {
    for version in [DatasetVersion::V2, DatasetVersion::V1] {
        let path = public.join(version.file_name(world));
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(source) => return Err(common::Error::Io { path, source }),
        };

        tracing::debug!(?path, "Loading statistics document");
        let dataset = Dataset::from_json_str(&content)?;
        return Ok((path, dataset));
    }

    Err(common::Error::NotFound(world.to_owned()))
}

fn load_layout(path: &Path) -> Result<Layout, common::Error> {
    let content = std::fs::read_to_string(path).map_err(|source| common::Error::Io {
        path: path.to_owned(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

/// Every cell the page would render empty: a layout column absent from a row.
pub fn missing_cells(dataset: &Dataset, layout: &Layout) -> Vec<MissingCell> {
    let row_keys = dataset.row_keys();
    let mut missing = Vec::new();

    for descriptor in layout.tables.iter() {
        let table = render::TableModel::build(descriptor, dataset, &row_keys);

        for row in table.rows.iter() {
            for (header, cell) in table.headers.iter().zip(row.cells.iter()) {
                let column = match &header.column {
                    Some(c) => c,
                    None => continue,
                };
                if cell.is_missing() {
                    missing.push(MissingCell {
                        table: table.id.clone(),
                        row: row.key.clone(),
                        column: column.clone(),
                    });
                }
            }
        }
    }

    missing
}

pub fn run(args: &CheckArgs) -> Result<Report, common::Error> {
    let (path, dataset) = load(&args.public, &args.world)?;
    let layout = match &args.layout {
        Some(layout) => load_layout(layout)?,
        None => Layout::standard(dataset.version),
    };

    Ok(Report {
        path,
        version: match dataset.version {
            DatasetVersion::V1 => "v1",
            DatasetVersion::V2 => "v2",
        },
        rows: dataset.rows.len(),
        players: dataset.players.len(),
        missing: missing_cells(&dataset, &layout),
    })
}
