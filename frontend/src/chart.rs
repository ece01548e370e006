use leptos::*;
use wasm_bindgen::prelude::*;

use render::ChartSpec;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = Plotly, js_name = newPlot)]
    fn plotly_new_plot(
        root: &leptos::web_sys::HtmlElement,
        data: &JsValue,
        layout: &JsValue,
    ) -> Result<js_sys::Promise, JsValue>;
}

fn plot_arguments(spec: &ChartSpec) -> Result<(JsValue, JsValue), JsValue> {
    let data = spec
        .data_json()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let layout = spec
        .layout_json()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok((js_sys::JSON::parse(&data)?, js_sys::JSON::parse(&layout)?))
}

/// Hands a bar chart to Plotly once its container is mounted.
#[leptos::component]
pub fn bar_chart(spec: ChartSpec) -> impl leptos::IntoView {
    let container = create_node_ref::<html::Div>();
    let id = spec.id.clone();

    create_effect(move |_| {
        let Some(root) = container.get() else {
            return;
        };

        let result = plot_arguments(&spec)
            .and_then(|(data, layout)| plotly_new_plot(&root, &data, &layout));
        if let Err(e) = result {
            logging::warn!("Plotting chart '{}': {:?}", spec.id, e);
        }
    });

    view! {
        <div id=id class="chart" node_ref=container></div>
    }
}
