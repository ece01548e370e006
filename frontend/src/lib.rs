use std::rc::Rc;

use leptos::*;

use common::{Dataset, DatasetVersion, Layout};

pub mod chart;
pub use chart::BarChart;

pub mod table;
pub use table::StatTable;

pub mod loader;

/// The whole statistics page for the world named in the URL fragment.
///
/// The document is fetched once. If that fails the page keeps its empty
/// pre-load state and the reason only goes to the console.
#[leptos::component]
pub fn stats_page() -> impl leptos::IntoView {
    let location = leptos_router::use_location();
    let world = common::world_from_fragment(&location.hash.get_untracked()).to_owned();
    let banner = common::banner_title(&world);

    let dataset = create_local_resource(
        || (),
        move |_| {
            let world = world.clone();
            async move {
                match loader::fetch_dataset(&world, DatasetVersion::V2).await {
                    Ok(dataset) => Some(Rc::new(dataset)),
                    Err(e) => {
                        logging::warn!("Loading statistics for '{}': {}", world, e);
                        None
                    }
                }
            }
        },
    );

    let board = move || {
        dataset.get().flatten().map(|dataset| {
            let layout = Rc::new(Layout::standard(dataset.version));
            view! { <Board dataset layout /> }
        })
    };

    view! {
        <h1 id="banner">{ banner }</h1>

        <Suspense fallback=move || view! { <p>Loading statistics</p> }>
            { board }
        </Suspense>
    }
}

#[leptos::component]
fn board(dataset: Rc<Dataset>, layout: Rc<Layout>) -> impl leptos::IntoView {
    let style = stylers::style! {
        "Board",
        .summary {
            display: inline-grid;
            grid-template-columns: auto auto;
            column-gap: 2ch;
        }
        .charts {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(480px, 1fr));
        }
    };

    let row_keys = dataset.row_keys();

    let summary = layout
        .summary
        .iter()
        .map(|field| {
            view! {
                class=style,
                <span>{ dataset.field_metadata.label(field).to_owned() }</span>
                <AllValue dataset=dataset.clone() field=field.clone() />
            }
        })
        .collect::<Vec<_>>();

    let tables = layout
        .tables
        .iter()
        .map(|descriptor| {
            let model = render::TableModel::build(descriptor, &dataset, &row_keys);
            view! { <StatTable model /> }
        })
        .collect::<Vec<_>>();

    let charts = layout
        .charts
        .iter()
        .map(|descriptor| {
            let spec = render::ChartSpec::build(descriptor, &dataset);
            view! { <BarChart spec /> }
        })
        .collect::<Vec<_>>();

    view! {
        class=style,
        <div class="summary">{ summary }</div>
        <div class="charts">{ charts }</div>
        <div>{ tables }</div>
    }
}

/// A single field of the `All` row, formatted like its table cells.
#[leptos::component]
pub fn all_value(dataset: Rc<Dataset>, field: String) -> impl leptos::IntoView {
    let text = render::format_cell(
        dataset.value(common::ALL_ROW, &field),
        dataset.field_metadata.get(&field),
    );

    view! {
        <span class=format!("all_{}", field)>{ text }</span>
    }
}
