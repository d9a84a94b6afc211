use leptos::prelude::*;

use super::reveal::Reveal;
use super::section::SectionHeading;
use crate::content::{CONTACT_LINKS, PROFILE};

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="py-24 sm:py-32 relative">
            <div class="section-container max-w-4xl text-center">
                <SectionHeading
                    eyebrow="Get in Touch"
                    title="Let's Build Something"
                    accent="Amazing"
                    blurb="I'm always open to discussing new projects, creative ideas, or opportunities to be part of your vision. Feel free to reach out!"
                />
                <div class="grid sm:grid-cols-3 gap-4 mb-12">
                    {CONTACT_LINKS
                        .iter()
                        .enumerate()
                        .map(|(i, link)| {
                            view! {
                                <Reveal delay_ms={100 * i as u32}>
                                    <a
                                        href=link.href
                                        target=link.target()
                                        rel="noopener noreferrer"
                                        class="group card block p-6 hover:border-primary/50 transition-colors"
                                    >
                                        <div class="w-12 h-12 mx-auto rounded-xl bg-primary/10 flex items-center justify-center mb-4 text-primary text-2xl">
                                            <i class=link.icon></i>
                                        </div>
                                        <h3 class="font-medium mb-1">{link.label}</h3>
                                        <p class="text-sm text-muted-foreground group-hover:text-primary transition-colors">
                                            {link.value}
                                            <span class="opacity-0 group-hover:opacity-100 transition-opacity">
                                                " ↗"
                                            </span>
                                        </p>
                                    </a>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
                <Reveal delay_ms=400>
                    <a href=PROFILE.mailto() class="btn btn-hero btn-xl">
                        <i class="extra-email mr-2"></i>
                        "Send me an email"
                    </a>
                </Reveal>
            </div>
        </section>
    }
}
