use leptos::prelude::*;

use super::reveal::Reveal;
use super::section::SectionHeading;
use crate::content::TECH_STACK;

#[component]
pub fn TechStack() -> impl IntoView {
    view! {
        <section id="stack" class="py-24 sm:py-32 relative bg-secondary/20">
            <div class="section-container">
                <SectionHeading
                    eyebrow="Technologies"
                    title="Tech"
                    accent="Stack"
                    blurb="A comprehensive toolkit for building scalable, maintainable applications."
                />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {TECH_STACK
                        .iter()
                        .enumerate()
                        .map(|(i, category)| {
                            view! {
                                <Reveal delay_ms={100 * i as u32} class="card p-6">
                                    <h3 class="font-display text-lg font-semibold mb-4 text-muted-foreground">
                                        {category.name}
                                    </h3>
                                    <div class="flex flex-wrap gap-2">
                                        {category
                                            .items
                                            .iter()
                                            .map(|tech| {
                                                view! { <span class="badge-tech">{*tech}</span> }
                                            })
                                            .collect_view()}
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
