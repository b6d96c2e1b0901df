//! Leptos Potion Shop Demo Application

use leptos::prelude::*;

use potion_shop::{fixtures::POTION_OF_HEALING_YAML, storefront::Storefront};

mod cart;
mod product;
mod reviews;

/// Main demo app shell.
#[component]
fn App() -> impl IntoView {
    match Storefront::from_fixture(POTION_OF_HEALING_YAML) {
        Ok(storefront) => {
            let storefront = RwSignal::new(storefront);
            let live_message = RwSignal::new((0_u64, String::new()));

            view! {
                <main class="min-h-screen bg-slate-50 px-4 py-6 text-slate-900">
                    <p class="sr-only" role="status" aria-live="polite" aria-atomic="true">
                        {move || live_message.get().1}
                    </p>
                    <div class="nav-bar"></div>
                    <cart::CartPanel storefront=storefront />
                    <div class="mx-auto grid max-w-5xl grid-cols-1 gap-6">
                        <product::ProductPanel storefront=storefront live_message=live_message />
                        <reviews::ProductTabs storefront=storefront live_message=live_message />
                    </div>
                </main>
            }
            .into_any()
        }
        Err(error) => view! {
            <main class="min-h-screen bg-slate-50 px-4 py-6 text-slate-900">
                <div class="mx-auto mb-6 max-w-5xl">
                    <h1 class="text-2xl font-semibold tracking-tight">"Potion Shop"</h1>
                </div>
                <div class="mx-auto max-w-3xl rounded-lg border border-red-200 bg-red-50 p-4">
                    <p class="text-sm text-red-700">
                        {format!("Failed to load product fixture: {error}")}
                    </p>
                </div>
            </main>
        }
        .into_any(),
    }
}

/// Main function
fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}

fn announce(live_message: RwSignal<(u64, String)>, message: String) {
    live_message.update(|(id, text)| {
        *id = id.saturating_add(1);
        *text = message;
    });
}
