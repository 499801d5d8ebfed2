use leptos::prelude::*;
use tailwindmerge::tailwind_merge;
use theme::use_theme;

/// Index of the open item, shared by the items of one accordion.
#[derive(Clone, Copy)]
struct OpenItem(RwSignal<Option<usize>>);

/// Clicking the open item closes it; clicking any other opens it instead.
pub fn next_open(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[allow(non_snake_case)]
#[component]
pub fn AccordionItem(
    index: usize,
    #[prop(into)] title: String,
    children: Children,
) -> impl IntoView {
    let OpenItem(open) = expect_context::<OpenItem>();
    let palette = use_theme().palette();
    let is_open = move || open.get() == Some(index);
    let body_id = format!("accordion-body-{index}");
    view! {
        <button
            type="button"
            on:click=move |_| open.update(|o| *o = next_open(*o, index))
            class="flex items-center justify-between w-full p-5 font-medium text-left gap-3"
            aria-expanded=move || is_open().to_string()
            aria-controls=body_id.clone()
        >
            <span>{title}</span>
            <svg
                class=move || {
                    format!(
                        "transition-all w-3 h-3 shrink-0 {}",
                        if is_open() { "" } else { "rotate-180" },
                    )
                }
                aria-hidden="true"
                xmlns="http://www.w3.org/2000/svg"
                fill="none"
                viewBox="0 0 10 6"
            >
                <path
                    stroke="currentColor"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    stroke-width="2"
                    d="M9 5 5 1 1 5"
                ></path>
            </svg>
        </button>
        <div id=body_id class:hidden=move || !is_open()>
            <div class=move || tailwind_merge("px-5 pb-5", palette.get().muted)>{children()}</div>
        </div>
    }
}

#[allow(non_snake_case)]
#[component]
pub fn Accordion(children: Children) -> impl IntoView {
    provide_context(OpenItem(RwSignal::new(None)));
    let palette = use_theme().palette();
    view! {
        <div class=move || {
            let p = palette.get();
            format!("rounded-xl border divide-y {} {}", p.border, p.raised)
        }>{children()}</div>
    }
}

#[cfg(test)]
mod test {
    use crate::components::accordion::next_open;

    #[test]
    fn test_next_open() {
        assert_eq!(next_open(None, 2), Some(2));
        assert_eq!(next_open(Some(2), 2), None);
        assert_eq!(next_open(Some(0), 3), Some(3));
    }
}
