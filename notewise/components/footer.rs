use leptos::prelude::*;
use tailwindmerge::tailwind_merge;
use theme::use_theme;

use crate::components::seo::SITE_NAME;

const COLUMNS: &[(&str, &[(&str, &str)])] = &[
    ("Product", &[("Features", "/features"), ("Pricing", "/pricing"), ("Docs", "/docs")]),
    ("Company", &[("About", "/about"), ("Blog", "/blog"), ("Help center", "/help")]),
    ("Legal", &[("Privacy", "/legal/privacy"), ("Terms", "/legal/terms")]),
];

#[allow(non_snake_case)]
#[component]
pub fn Footer() -> impl IntoView {
    let palette = use_theme().palette();
    let columns = COLUMNS
        .iter()
        .map(move |&(heading, links)| {
            view! {
                <div>
                    <h3 class="text-sm font-semibold uppercase tracking-wide">{heading}</h3>
                    <ul class="mt-4 space-y-2">
                        {links
                            .iter()
                            .map(move |&(label, href)| {
                                view! {
                                    <li>
                                        <a href=href class=move || palette.get().link>
                                            {label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            }
        })
        .collect_view();
    view! {
        <footer class=move || {
            let p = palette.get();
            tailwind_merge(&format!("border-t {}", p.border), p.surface)
        }>
            <div class="mx-auto max-w-6xl px-6 py-12 grid grid-cols-2 gap-8 md:grid-cols-4">
                <div>
                    <span class="text-xl font-semibold">{SITE_NAME}</span>
                    <p class=move || tailwind_merge("mt-2 text-sm", palette.get().muted)>
                        "Study smarter, not longer."
                    </p>
                </div>
                {columns}
            </div>
            <p class=move || tailwind_merge("pb-8 text-center text-xs", palette.get().muted)>
                {format!("© 2026 {SITE_NAME}. All rights reserved.")}
            </p>
        </footer>
    }
}
