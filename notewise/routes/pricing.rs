use leptos::prelude::*;
use tailwindmerge::{tailwind_merge, tailwind_merge_all};
use theme::use_theme;

use crate::components::{section::{Hero, Section}, seo::Seo};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Billing {
    Monthly,
    Yearly,
}

pub struct Plan {
    pub name: &'static str,
    pub blurb: &'static str,
    pub monthly_cents: u32,
    pub features: &'static [&'static str],
    pub featured: bool,
}

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Free",
        blurb: "For trying things out.",
        monthly_cents: 0,
        features: &["3 decks", "Basic flashcards", "Community support"],
        featured: false,
    },
    Plan {
        name: "Student",
        blurb: "For a full course load.",
        monthly_cents: 699,
        features: &[
            "Unlimited decks",
            "Note summaries",
            "Practice quizzes",
            "Offline review",
        ],
        featured: true,
    },
    Plan {
        name: "Group",
        blurb: "For study groups and tutors.",
        monthly_cents: 1500,
        features: &[
            "Everything in Student",
            "Shared decks for up to 10 people",
            "Group progress dashboard",
        ],
        featured: false,
    },
];

/// Yearly billing charges ten months.
pub fn price_cents(plan: &Plan, billing: Billing) -> u32 {
    match billing {
        Billing::Monthly => plan.monthly_cents,
        Billing::Yearly => plan.monthly_cents * 10,
    }
}

pub fn format_price(cents: u32) -> String {
    match (cents / 100, cents % 100) {
        (0, 0) => "Free".to_string(),
        (dollars, 0) => format!("${dollars}"),
        (dollars, rest) => format!("${dollars}.{rest:02}"),
    }
}

#[allow(non_snake_case)]
#[component]
fn PlanCard(plan: &'static Plan, billing: ReadSignal<Billing>) -> impl IntoView {
    let palette = use_theme().palette();
    let per = move || match billing.get() {
        _ if plan.monthly_cents == 0 => "",
        Billing::Monthly => "/month",
        Billing::Yearly => "/year",
    };
    view! {
        <div class=move || {
            let p = palette.get();
            let ring = if plan.featured { "ring-2 ring-indigo-500" } else { "" };
            tailwind_merge_all(&["flex flex-col p-8 border rounded-2xl", p.raised, p.border, ring])
        }>
            <h3 class="text-xl font-semibold">{plan.name}</h3>
            <p class=move || tailwind_merge("mt-1 text-sm", palette.get().muted)>{plan.blurb}</p>
            <p class="mt-6">
                <span class="text-4xl font-bold">
                    {move || format_price(price_cents(plan, billing.get()))}
                </span>
                <span class=move || palette.get().muted>{per}</span>
            </p>
            <ul class="mt-6 space-y-2 flex-1">
                {plan.features.iter().map(|f| view! { <li>"✓ "{*f}</li> }).collect_view()}
            </ul>
            <a
                href="/help"
                class=move || {
                    tailwind_merge(
                        "mt-8 block rounded-lg px-4 py-2 text-center font-semibold text-white",
                        palette.get().accent,
                    )
                }
            >
                {if plan.monthly_cents == 0 { "Start free" } else { "Choose plan" }}
            </a>
        </div>
    }
}

#[allow(non_snake_case)]
#[component]
pub fn Pricing() -> impl IntoView {
    let (billing, set_billing) = signal(Billing::Monthly);
    let palette = use_theme().palette();
    let tab = move |which: Billing, label: &'static str| {
        view! {
            <button
                type="button"
                class=move || {
                    let p = palette.get();
                    if billing.get() == which {
                        tailwind_merge("px-4 py-2 rounded-md font-medium text-white", p.accent)
                    } else {
                        tailwind_merge("px-4 py-2 rounded-md", p.muted)
                    }
                }
                on:click=move |_| set_billing.set(which)
            >
                {label}
            </button>
        }
    };
    view! {
        <Seo
            title="Pricing"
            description="Free to start. Student and group plans when you need more."
            path="/pricing"
        />
        <Hero title="Simple pricing" tagline="Start free. Upgrade when your course load does." />
        <Section title="Plans">
            <div class=move || {
                let p = palette.get();
                tailwind_merge_all(&["inline-flex gap-1 p-1 mb-10 border rounded-lg", p.surface, p.border])
            }>
                {tab(Billing::Monthly, "Monthly")}
                {tab(Billing::Yearly, "Yearly (2 months free)")}
            </div>
            <div class="grid gap-6 md:grid-cols-3">
                {PLANS.iter().map(|plan| view! { <PlanCard plan billing /> }).collect_view()}
            </div>
        </Section>
    }
}

#[cfg(test)]
mod test {
    use crate::routes::pricing::{format_price, price_cents, Billing, PLANS};

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "Free");
        assert_eq!(format_price(1500), "$15");
        assert_eq!(format_price(699), "$6.99");
        assert_eq!(format_price(6990), "$69.90");
    }

    #[test]
    fn test_yearly_is_ten_months() {
        for plan in PLANS {
            assert_eq!(
                price_cents(plan, Billing::Yearly),
                price_cents(plan, Billing::Monthly) * 10
            );
        }
        assert_eq!(format_price(price_cents(&PLANS[0], Billing::Yearly)), "Free");
    }

    #[test]
    fn test_exactly_one_featured_plan() {
        assert_eq!(PLANS.iter().filter(|p| p.featured).count(), 1);
        assert!(PLANS.windows(2).all(|w| w[0].monthly_cents < w[1].monthly_cents));
    }
}
