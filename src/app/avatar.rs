use leptos::prelude::*;

use crate::content::PROFILE;

#[component]
pub fn Avatar() -> impl IntoView {
    view! {
        <div class="relative">
            <div class="absolute inset-0 rounded-full bg-primary/30 blur-2xl"></div>
            <img
                src=PROFILE.avatar
                alt=PROFILE.full_name()
                class="relative rounded-full w-32 h-32 sm:w-40 sm:h-40 md:w-48 md:h-48 object-cover border-4 border-primary/20 shadow-2xl"
            />
        </div>
    }
}

#[component]
pub fn StatusBadge() -> impl IntoView {
    view! {
        <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-secondary/60 border border-border">
            <span class="relative flex h-2 w-2">
                <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-green-400 opacity-75"></span>
                <span class="relative inline-flex rounded-full h-2 w-2 bg-green-500"></span>
            </span>
            <span class="text-sm text-muted-foreground">{PROFILE.status}</span>
        </div>
    }
}
