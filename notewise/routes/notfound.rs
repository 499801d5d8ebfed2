use leptos::prelude::*;
use leptos_meta::Title;
use tailwindmerge::tailwind_merge;
use theme::use_theme;

#[allow(non_snake_case)]
#[component]
pub fn NotFound() -> impl IntoView {
    let palette = use_theme().palette();
    view! {
        <Title text="Page not found" />
        <div class="px-6 py-32 text-center">
            <p class=move || tailwind_merge("text-6xl font-bold", palette.get().accent_text)>"404"</p>
            <h1 class="mt-4 text-3xl font-semibold">"Page not found"</h1>
            <a href="/" class=move || tailwind_merge("mt-8 inline-block", palette.get().link)>
                "Back to the home page"
            </a>
        </div>
    }
}
