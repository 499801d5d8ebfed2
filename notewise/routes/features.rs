use leptos::prelude::*;
use tailwindmerge::tailwind_merge;
use theme::use_theme;

use crate::components::{card::Card, section::{Hero, Section}, seo::Seo};

pub struct Feature {
    pub title: &'static str,
    pub summary: &'static str,
    pub details: &'static [&'static str],
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Smart flashcards",
        summary: "Spaced repetition schedules every card for the moment you are about to forget it.",
        details: &[
            "Import decks from CSV or paste straight from your notes",
            "Image and formula cards",
            "Daily review goals that adapt to your exam date",
        ],
    },
    Feature {
        title: "Note summaries",
        summary: "Turn a week of lecture notes into a one-page review sheet.",
        details: &[
            "Keeps your headings and highlights",
            "Links every summary line back to the source note",
            "Export to PDF for printing",
        ],
    },
    Feature {
        title: "Practice quizzes",
        summary: "Generate quizzes from any deck and see which topics need another pass.",
        details: &[
            "Multiple choice, short answer and cloze",
            "Per-topic accuracy history",
            "Timed exam mode",
        ],
    },
    Feature {
        title: "Study groups",
        summary: "Share decks with classmates and split the work before finals.",
        details: &[
            "Shared decks with edit history",
            "Group streaks and leaderboards",
            "Invite links that expire",
        ],
    },
];

#[allow(non_snake_case)]
#[component]
pub fn FeatureGrid(#[prop(optional)] with_details: bool) -> impl IntoView {
    let palette = use_theme().palette();
    view! {
        <div class="grid gap-6 md:grid-cols-2">
            {FEATURES
                .iter()
                .map(|f| {
                    view! {
                        <Card>
                            <h3 class=move || {
                                tailwind_merge("text-xl font-semibold", palette.get().accent_text)
                            }>{f.title}</h3>
                            <p class="mt-2">{f.summary}</p>
                            {with_details
                                .then(|| {
                                    view! {
                                        <ul class=move || {
                                            tailwind_merge(
                                                "mt-4 list-disc pl-5 space-y-1 text-sm",
                                                palette.get().muted,
                                            )
                                        }>
                                            {f.details.iter().map(|d| view! { <li>{*d}</li> }).collect_view()}
                                        </ul>
                                    }
                                })}
                        </Card>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[allow(non_snake_case)]
#[component]
pub fn Features() -> impl IntoView {
    view! {
        <Seo
            title="Features"
            description="Flashcards, summaries, quizzes and study groups in one place."
            path="/features"
        />
        <Hero
            title="Everything you need for exam season"
            tagline="Notewise brings your notes, cards and practice tests together."
            cta=("Start for free", "/pricing")
        />
        <Section title="What's inside">
            <FeatureGrid with_details=true />
        </Section>
    }
}
