use leptos::*;

use render::TableModel;

/// A sortable table. Clicking any header reorders the rows by that column,
/// alternating direction on every click. Each table keeps its own state.
#[leptos::component]
pub fn stat_table(model: TableModel) -> impl leptos::IntoView {
    let style = stylers::style! {
        "Stat-Table",
        tr:nth-child(even) {
            background-color: #dddddd;
        }

        th {
            padding-left: 10px;
            padding-right: 10px;
            cursor: pointer;
        }
        th:nth-child(1) {
            width: 200px;
        }

        td {
            text-align: right;
        }
        td:nth-child(1) {
            text-align: left;
        }

        abbr {
            text-decoration: underline dotted;
        }
    };

    let id = model.id.clone();
    let title = model.title.clone();
    let model = create_rw_signal(model);

    let headers = move || {
        model.with(|m| {
            m.headers
                .iter()
                .enumerate()
                .map(|(idx, header)| {
                    let label = match &header.tooltip {
                        Some(tooltip) => view! {
                            class=style,
                            <abbr title=tooltip.clone()>{ header.label.clone() }</abbr>
                        }
                        .into_view(),
                        None => header.label.clone().into_view(),
                    };
                    let symbol = m.sort_state().display_symbol(idx);

                    view! {
                        class=style,
                        <th on:click=move |_| model.update(|m| m.activate(idx))>
                            { label } " " { symbol }
                        </th>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    let rows = move || {
        model.with(|m| {
            m.rows
                .iter()
                .map(|row| {
                    let cells = row
                        .cells
                        .iter()
                        .map(|cell| {
                            let missing = cell.is_missing();
                            view! {
                                class=style,
                                <td class:missing=move || missing>{ cell.text.clone() }</td>
                            }
                        })
                        .collect::<Vec<_>>();

                    view! { class=style, <tr>{ cells }</tr> }
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        class=style,
        <div>
            { title.map(|t| view! { <h3>{ t }</h3> }) }
            <table id=id>
                <thead>
                    <tr>{ headers }</tr>
                </thead>
                <tbody>{ rows }</tbody>
            </table>
        </div>
    }
}
