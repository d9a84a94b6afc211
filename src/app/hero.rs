use leptos::prelude::*;

use super::avatar::{Avatar, StatusBadge};
use super::reveal::Reveal;
use crate::content::PROFILE;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex items-center justify-center overflow-hidden pt-16">
            <div class="absolute inset-0 hero-glow"></div>
            <div class="section-container relative z-10 text-center space-y-8">
                <Reveal class="flex items-center justify-center">
                    <Avatar />
                </Reveal>
                <Reveal delay_ms=100>
                    <StatusBadge />
                </Reveal>
                <Reveal delay_ms=200>
                    <h1 class="font-display text-5xl sm:text-6xl md:text-7xl font-bold tracking-tight">
                        <span>{PROFILE.first_name}</span>
                        " "
                        <span class="text-gradient">{PROFILE.last_name}</span>
                    </h1>
                </Reveal>
                <Reveal delay_ms=300 class="space-y-4">
                    <h2 class="font-display text-xl sm:text-2xl md:text-3xl text-muted-foreground font-medium">
                        {PROFILE.role}
                        " "
                        <span class="text-primary">"|"</span>
                        " "
                        <span class="text-gradient-angular font-semibold">{PROFILE.specialty}</span>
                    </h2>
                    <p class="text-lg text-muted-foreground max-w-2xl mx-auto">{PROFILE.tagline}</p>
                </Reveal>
                <Reveal delay_ms=400 class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <a href="#projects" class="btn btn-hero">
                        "View Projects →"
                    </a>
                    <a
                        href=PROFILE.resume
                        download=PROFILE.resume_download_name
                        class="btn btn-outline"
                    >
                        <i class="extra-download mr-1"></i>
                        "Download CV"
                    </a>
                    <a href="#contact" class="btn btn-glass">
                        <i class="extra-email mr-1"></i>
                        "Contact Me"
                    </a>
                </Reveal>
                <Reveal delay_ms=500 class="flex items-center justify-center gap-4">
                    <a
                        href=PROFILE.github
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-muted-foreground hover:text-foreground text-2xl"
                        aria-label="GitHub Profile"
                    >
                        <i class="devicon-github-plain"></i>
                    </a>
                    <a
                        href=PROFILE.linkedin
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-muted-foreground hover:text-foreground text-2xl"
                        aria-label="LinkedIn Profile"
                    >
                        <i class="devicon-linkedin-plain"></i>
                    </a>
                </Reveal>
            </div>
            <a
                href="#about"
                class="absolute bottom-8 left-1/2 -translate-x-1/2 flex flex-col items-center gap-2 text-muted-foreground hover:text-foreground animate-bounce"
            >
                <span class="text-sm">"Scroll to explore"</span>
                <span>"⌄"</span>
            </a>
        </section>
    }
}
