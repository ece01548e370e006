use leptos::*;
use leptos_router::*;

use frontend::StatsPage;

fn main() {
    console_error_panic_hook::set_once();

    mount_to_body(move || {
        view! {
            <Router>
                <main>
                    <StatsPage />
                </main>
            </Router>
        }
    })
}
