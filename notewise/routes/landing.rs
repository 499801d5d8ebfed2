use leptos::prelude::*;
use tailwindmerge::tailwind_merge;
use theme::use_theme;

use crate::{
    components::{card::Card, section::{Hero, Section}, seo::Seo},
    routes::features::FeatureGrid,
};

const STEPS: &[(&str, &str)] = &[
    ("Bring your notes", "Upload lecture notes, slides or a photo of the whiteboard."),
    ("Let Notewise sort it", "We pull out key terms and build flashcards and a review sheet."),
    ("Review a little every day", "Short daily sessions beat one long night before the exam."),
];

const QUOTES: &[(&str, &str)] = &[
    ("I stopped rewriting my notes three times. The review sheets are all I need now.", "Priya, nursing student"),
    ("Our study group shares one deck per module. Finals were way less chaotic.", "Jonas, CS undergrad"),
];

#[allow(non_snake_case)]
#[component]
pub fn Landing() -> impl IntoView {
    let palette = use_theme().palette();
    view! {
        <Seo
            title=""
            description="Notewise turns your notes into flashcards, summaries and quizzes."
            path="/"
        />
        <Hero
            title="Study smarter, not longer"
            tagline="Notewise turns your lecture notes into flashcards, summaries and practice quizzes."
            cta=("Get started free", "/pricing")
        />
        <Section title="Built for how you actually study">
            <FeatureGrid />
        </Section>
        <Section title="How it works" subtitle="Three steps, about five minutes.">
            <ol class="grid gap-6 md:grid-cols-3">
                {STEPS
                    .iter()
                    .enumerate()
                    .map(|(i, (title, text))| {
                        view! {
                            <li>
                                <span class=move || {
                                    tailwind_merge("text-4xl font-bold", palette.get().accent_text)
                                }>{i + 1}</span>
                                <h3 class="mt-2 text-lg font-semibold">{*title}</h3>
                                <p class=move || palette.get().muted>{*text}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </Section>
        <Section title="Students like it">
            <div class="grid gap-6 md:grid-cols-2">
                {QUOTES
                    .iter()
                    .map(|(quote, who)| {
                        view! {
                            <Card>
                                <blockquote class="text-lg">{format!("\u{201C}{quote}\u{201D}")}</blockquote>
                                <p class=move || tailwind_merge("mt-4 text-sm", palette.get().muted)>
                                    {*who}
                                </p>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}
