use leptos::prelude::*;
use tailwindmerge::tailwind_merge;
use theme::use_theme;

#[allow(non_snake_case)]
#[component]
pub fn Hero(
    #[prop(into)] title: String,
    #[prop(into)] tagline: String,
    #[prop(optional)] cta: Option<(&'static str, &'static str)>,
) -> impl IntoView {
    let palette = use_theme().palette();
    view! {
        <header class="px-6 py-24 text-center">
            <h1 class="mx-auto max-w-3xl text-5xl font-bold tracking-tight">{title}</h1>
            <p class=move || {
                tailwind_merge("mx-auto mt-6 max-w-2xl text-xl", palette.get().muted)
            }>{tagline}</p>
            {cta
                .map(|(label, href)| {
                    view! {
                        <div class="mt-10">
                            <a
                                href=href
                                class=move || {
                                    tailwind_merge(
                                        "rounded-lg px-6 py-3 font-semibold text-white",
                                        palette.get().accent,
                                    )
                                }
                            >
                                {label}
                            </a>
                        </div>
                    }
                })}
        </header>
    }
}

#[allow(non_snake_case)]
#[component]
pub fn Section(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    children: Children,
) -> impl IntoView {
    let palette = use_theme().palette();
    view! {
        <section id=id class="mx-auto max-w-6xl px-6 py-16">
            <h2 class="text-3xl font-bold">{title}</h2>
            {subtitle
                .map(|s| {
                    view! {
                        <p class=move || tailwind_merge("mt-3 text-lg", palette.get().muted)>{s}</p>
                    }
                })}
            <div class="mt-10">{children()}</div>
        </section>
    }
}
