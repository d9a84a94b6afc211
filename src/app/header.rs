use leptos::prelude::*;

use crate::content::{NAV_LINKS, PROFILE};

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let links = move |on_mobile: bool| {
        NAV_LINKS
            .iter()
            .map(|link| {
                let class = if on_mobile {
                    "block px-4 py-3 text-muted-foreground hover:text-foreground"
                } else {
                    "text-sm text-muted-foreground hover:text-foreground transition-colors"
                };
                view! {
                    <a href=link.href() class=class on:click=move |_| set_menu_open.set(false)>
                        {link.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="fixed top-0 inset-x-0 z-50 bg-background/80 backdrop-blur border-b border-border">
            <nav class="section-container flex items-center justify-between h-16">
                <a href="#" class="font-display text-xl font-bold tracking-tight">
                    <span>{PROFILE.first_name}</span>
                    <span class="text-primary">"."</span>
                </a>
                <div class="hidden md:flex items-center gap-8">{links(false)}</div>
                <button
                    class="md:hidden text-muted-foreground hover:text-foreground"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </nav>
            <Show when=move || menu_open.get()>
                <div class="md:hidden border-t border-border bg-background">{links(true)}</div>
            </Show>
        </header>
    }
}
