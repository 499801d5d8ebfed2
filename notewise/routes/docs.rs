use leptos::prelude::*;
use tailwindmerge::{tailwind_merge, tailwind_merge_all};
use theme::use_theme;

use crate::components::seo::Seo;

struct Topic {
    anchor: &'static str,
    title: &'static str,
    body: &'static [&'static str],
}

const TOPICS: &[Topic] = &[
    Topic {
        anchor: "getting-started",
        title: "Getting started",
        body: &[
            "Create an account with your school email to unlock the student discount.",
            "Your first deck is created for you. Add a card with the + button or press N.",
        ],
    },
    Topic {
        anchor: "importing",
        title: "Importing notes",
        body: &[
            "Drag Markdown, PDF or plain text files onto the library page.",
            "Headings become topics, bold text becomes a flashcard candidate you can accept or skip.",
        ],
    },
    Topic {
        anchor: "reviewing",
        title: "Daily review",
        body: &[
            "Each day Notewise queues the cards that are due. Rate each answer Again, Hard, Good or Easy.",
            "Set an exam date on a deck and the schedule compresses so everything is seen at least twice before it.",
        ],
    },
    Topic {
        anchor: "sharing",
        title: "Sharing decks",
        body: &[
            "Open a deck, choose Share, and send the invite link. Links expire after seven days.",
            "Group members can suggest edits; the deck owner approves them.",
        ],
    },
    Topic {
        anchor: "appearance",
        title: "Appearance",
        body: &[
            "Notewise starts in your system's light or dark scheme and dark if it can't tell.",
            "The switch in the navigation bar overrides it, and the choice is saved in this browser.",
        ],
    },
];

#[allow(non_snake_case)]
#[component]
pub fn Docs() -> impl IntoView {
    let palette = use_theme().palette();
    view! {
        <Seo
            title="Docs"
            description="How to import notes, review cards and share decks in Notewise."
            path="/docs"
        />
        <div class="mx-auto max-w-6xl px-6 py-16 md:flex md:gap-12">
            <nav class=move || {
                let p = palette.get();
                tailwind_merge_all(&["md:w-56 shrink-0 mb-10 p-4 border rounded-xl self-start", p.surface, p.border])
            }>
                <h2 class="font-semibold">"On this page"</h2>
                <ul class="mt-3 space-y-2 text-sm">
                    {TOPICS
                        .iter()
                        .map(|t| {
                            view! {
                                <li>
                                    <a href=format!("#{}", t.anchor) class=move || palette.get().link>
                                        {t.title}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
            <div class="flex-1 space-y-12">
                <h1 class="text-4xl font-bold">"Documentation"</h1>
                {TOPICS
                    .iter()
                    .map(|t| {
                        view! {
                            <section id=t.anchor>
                                <h2 class="text-2xl font-semibold">{t.title}</h2>
                                {t
                                    .body
                                    .iter()
                                    .map(|para| {
                                        view! {
                                            <p class=move || {
                                                tailwind_merge("mt-3", palette.get().muted)
                                            }>{*para}</p>
                                        }
                                    })
                                    .collect_view()}
                            </section>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
