use leptos::prelude::*;
use tailwindmerge::tailwind_merge;
use theme::use_theme;

use crate::components::{
    accordion::{Accordion, AccordionItem},
    card::Card,
    section::{Hero, Section},
    seo::Seo,
};

const FAQS: &[(&str, &str)] = &[
    (
        "Is there a free plan?",
        "Yes. The Free plan keeps up to three decks forever. No card required.",
    ),
    (
        "Do you offer student discounts?",
        "The Student plan is already discounted. Sign up with a school email to use it.",
    ),
    (
        "Can I cancel any time?",
        "Yes. Cancel from account settings and you keep access until the end of the billing period.",
    ),
    (
        "Does Notewise work offline?",
        "Student and Group plans can download decks for offline review. Progress syncs when you reconnect.",
    ),
    (
        "Why does the site open in dark mode?",
        "We follow your system color scheme on your first visit and fall back to dark. Use the switch in the top bar to change it.",
    ),
];

#[allow(non_snake_case)]
#[component]
pub fn Help() -> impl IntoView {
    let palette = use_theme().palette();
    view! {
        <Seo
            title="Help center"
            description="Answers to common questions about Notewise plans, billing and features."
            path="/help"
        />
        <Hero title="How can we help?" tagline="Quick answers to the questions we hear most." />
        <Section title="Frequently asked questions">
            <Accordion>
                {FAQS
                    .iter()
                    .enumerate()
                    .map(|(index, (question, answer))| {
                        view! {
                            <AccordionItem index title=*question>
                                <p>{*answer}</p>
                            </AccordionItem>
                        }
                    })
                    .collect_view()}
            </Accordion>
        </Section>
        <Section title="Still stuck?" id="contact">
            <Card>
                <p>"Email us and a real person will reply within one working day."</p>
                <a
                    href="mailto:support@notewise.app"
                    class=move || tailwind_merge("mt-4 inline-block font-semibold", palette.get().accent_text)
                >
                    "support@notewise.app"
                </a>
            </Card>
        </Section>
    }
}
