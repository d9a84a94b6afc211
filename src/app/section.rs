use leptos::prelude::*;

use super::reveal::Reveal;

/// Eyebrow, two-tone title and blurb shared by every page section.
#[component]
pub fn SectionHeading(
    eyebrow: &'static str,
    title: &'static str,
    accent: &'static str,
    #[prop(optional)] accent_first: bool,
    #[prop(optional)] blurb: Option<&'static str>,
) -> impl IntoView {
    let heading = if accent_first {
        view! {
            <span class="text-gradient">{accent}</span>
            " "
            {title}
        }
        .into_any()
    } else {
        view! {
            {title}
            " "
            <span class="text-gradient">{accent}</span>
        }
        .into_any()
    };

    view! {
        <Reveal class="text-center mb-16">
            <span class="inline-block text-primary font-mono text-sm tracking-wider uppercase mb-4">
                {eyebrow}
            </span>
            <h2 class="font-display text-3xl sm:text-4xl lg:text-5xl font-bold mb-4">{heading}</h2>
            {blurb
                .map(|b| {
                    view! { <p class="text-muted-foreground text-lg max-w-2xl mx-auto">{b}</p> }
                })}
        </Reveal>
    }
}
