use leptos::prelude::*;
use tailwindmerge::tailwind_merge_all;
use theme::use_theme;

#[allow(non_snake_case)]
#[component]
pub fn Card(
    children: Children,
    #[prop(into, default = "".into())] class: Signal<String>,
) -> impl IntoView {
    let palette = use_theme().palette();
    view! {
        <div class=move || {
            let p = palette.get();
            tailwind_merge_all(&["p-6 border rounded-xl shadow-sm", p.raised, p.border, &class.get()])
        }>{children()}</div>
    }
}
