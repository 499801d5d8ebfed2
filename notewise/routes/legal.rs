use leptos::prelude::*;
use tailwindmerge::tailwind_merge;
use theme::use_theme;

use crate::components::seo::Seo;

#[allow(non_snake_case)]
#[component]
fn LegalPage(
    title: &'static str,
    path: &'static str,
    updated: &'static str,
    sections: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    let palette = use_theme().palette();
    view! {
        <Seo title description=format!("Notewise {}", title.to_lowercase()) path />
        <article class="mx-auto max-w-3xl px-6 py-16">
            <h1 class="text-4xl font-bold">{title}</h1>
            <p class=move || tailwind_merge("mt-2 text-sm", palette.get().muted)>
                {format!("Last updated {updated}")}
            </p>
            {sections
                .iter()
                .map(|(heading, text)| {
                    view! {
                        <h2 class="mt-10 text-xl font-semibold">{*heading}</h2>
                        <p class="mt-3 leading-relaxed">{*text}</p>
                    }
                })
                .collect_view()}
        </article>
    }
}

const PRIVACY: &[(&str, &str)] = &[
    ("What we collect", "Your account email, the notes and decks you create, and basic usage statistics."),
    ("What this site stores in your browser", "One local storage entry remembering whether you picked light or dark mode. Nothing else."),
    ("How we use it", "To run the service and improve it. We never sell personal data."),
    ("Your rights", "You can export or delete your data from account settings at any time."),
];

const TERMS: &[(&str, &str)] = &[
    ("Accounts", "You are responsible for keeping your login secure."),
    ("Your content", "You own what you upload. You grant us the rights needed to store and display it to you and people you share it with."),
    ("Payments", "Paid plans renew automatically until cancelled. Refunds are handled case by case."),
    ("Acceptable use", "Don't upload material you don't have the right to share."),
];

#[allow(non_snake_case)]
#[component]
pub fn Privacy() -> impl IntoView {
    view! {
        <LegalPage title="Privacy Policy" path="/legal/privacy" updated="2026-09-01" sections=PRIVACY />
    }
}

#[allow(non_snake_case)]
#[component]
pub fn Terms() -> impl IntoView {
    view! {
        <LegalPage title="Terms of Service" path="/legal/terms" updated="2026-09-01" sections=TERMS />
    }
}
