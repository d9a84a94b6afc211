use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::{ABOUT_HIGHLIGHTS, ABOUT_PARAGRAPHS};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-24 sm:py-32 relative">
            <div class="section-container grid lg:grid-cols-2 gap-12 lg:gap-16 items-center">
                <Reveal>
                    <span class="inline-block text-primary font-mono text-sm tracking-wider uppercase mb-4">
                        "About Me"
                    </span>
                    <h2 class="font-display text-3xl sm:text-4xl lg:text-5xl font-bold mb-6">
                        "Crafting " <span class="text-gradient">"scalable solutions"</span>
                        " for complex problems"
                    </h2>
                    <div class="space-y-4 text-muted-foreground text-lg leading-relaxed">
                        {ABOUT_PARAGRAPHS.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                    </div>
                </Reveal>
                <div class="grid sm:grid-cols-2 gap-4">
                    {ABOUT_HIGHLIGHTS
                        .iter()
                        .enumerate()
                        .map(|(i, item)| {
                            view! {
                                <Reveal delay_ms={100 * i as u32} class="card p-6">
                                    <div class="w-12 h-12 rounded-xl bg-primary/10 flex items-center justify-center mb-4 text-2xl">
                                        {item.icon}
                                    </div>
                                    <h3 class="font-display text-xl font-semibold mb-2">
                                        {item.title}
                                    </h3>
                                    <p class="text-muted-foreground text-sm">{item.description}</p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
