use leptos::prelude::*;

use crate::build_info::{build_date, current_year};
use crate::content::PROFILE;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 border-t border-border">
            <div class="section-container flex flex-col md:flex-row items-center justify-between gap-6">
                <div class="flex flex-col items-center md:items-start gap-2">
                    <a href="#" class="font-display text-xl font-bold tracking-tight">
                        <span>{PROFILE.first_name}</span>
                        <span class="text-primary">"."</span>
                    </a>
                    <p class="text-sm text-muted-foreground">
                        {format!("© {} {}.", current_year(), PROFILE.full_name())}
                    </p>
                    <p class="text-xs text-muted-foreground">
                        "Built with Rust & Leptos · " {build_date()}
                    </p>
                </div>
                <div class="flex items-center gap-4 text-xl">
                    <a
                        href=PROFILE.mailto()
                        class="text-muted-foreground hover:text-primary"
                        aria-label="Email"
                    >
                        <i class="extra-email"></i>
                    </a>
                    <a
                        href=PROFILE.github
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-muted-foreground hover:text-primary"
                        aria-label="GitHub Profile"
                    >
                        <i class="devicon-github-plain"></i>
                    </a>
                    <a
                        href=PROFILE.linkedin
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-muted-foreground hover:text-primary"
                        aria-label="LinkedIn Profile"
                    >
                        <i class="devicon-linkedin-plain"></i>
                    </a>
                </div>
            </div>
        </footer>
    }
}
