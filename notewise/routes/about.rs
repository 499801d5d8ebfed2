use leptos::prelude::*;
use tailwindmerge::tailwind_merge;
use theme::use_theme;

use crate::components::{card::Card, section::{Hero, Section}, seo::Seo};

const VALUES: &[(&str, &str)] = &[
    ("Less time, better recall", "Every feature has to earn its place by saving study time."),
    ("Your notes stay yours", "Export everything, any time, in open formats."),
    ("Priced for students", "If it doesn't fit a student budget, we haven't finished the job."),
];

#[allow(non_snake_case)]
#[component]
pub fn About() -> impl IntoView {
    let palette = use_theme().palette();
    view! {
        <Seo
            title="About"
            description="Notewise is a small team building study tools we wished we had."
            path="/about"
        />
        <Hero
            title="Built by people who hated cramming"
            tagline="Notewise started as a shared flashcard deck between three students and grew from there."
        />
        <Section title="What we care about">
            <div class="grid gap-6 md:grid-cols-3">
                {VALUES
                    .iter()
                    .map(|(title, text)| {
                        view! {
                            <Card>
                                <h3 class="text-lg font-semibold">{*title}</h3>
                                <p class=move || tailwind_merge("mt-2", palette.get().muted)>{*text}</p>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}
