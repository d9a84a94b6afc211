use leptos::prelude::*;
use leptos::server_fn::codec::GetUrl;

use super::reveal::Reveal;
use super::section::SectionHeading;
use crate::content::EXPERTISE_SKILLS;
use crate::selector::Selector;

#[cfg(feature = "ssr")]
use crate::showcase::load_selector;

#[server(input = GetUrl)]
pub async fn get_showcase() -> Result<Selector, ServerFnError> {
    load_selector().map_err(|e| {
        tracing::error!("showcase failed to load: {e}");
        ServerFnError::new(e)
    })
}

#[component]
pub fn Expertise() -> impl IntoView {
    let showcase = Resource::new(|| (), |_| get_showcase());

    view! {
        <section id="expertise" class="py-24 sm:py-32 relative bg-secondary/30">
            <div class="section-container relative z-10">
                <SectionHeading
                    eyebrow="Technical Showcase"
                    title="Expertise"
                    accent="Angular"
                    accent_first=true
                    blurb="Deep expertise in Angular's latest features, from Signals to Microfrontends. Explore interactive code demos showcasing production-ready patterns."
                />
                <Reveal delay_ms=200 class="flex flex-wrap justify-center gap-3 mb-12">
                    {EXPERTISE_SKILLS
                        .iter()
                        .map(|skill| {
                            let class = if skill.accent {
                                "badge-tech badge-angular"
                            } else {
                                "badge-tech"
                            };
                            view! {
                                <div class=class>
                                    <span>{skill.icon}</span>
                                    {skill.name}
                                </div>
                            }
                        })
                        .collect_view()}
                </Reveal>
                <Reveal delay_ms=300>
                    <Suspense fallback=move || {
                        view! {
                            <div class="space-y-4">
                                <div class="loading-skeleton h-10 rounded"></div>
                                <div class="loading-skeleton h-64 rounded"></div>
                            </div>
                        }
                    }>
                        {move || Suspend::new(async move {
                            match showcase.await {
                                Ok(selector) => view! { <ShowcaseTabs selector /> }.into_any(),
                                Err(_) => {
                                    view! {
                                        <p class="text-center text-muted-foreground">
                                            "Code demos are unavailable right now."
                                        </p>
                                    }
                                        .into_any()
                                }
                            }
                        })}
                    </Suspense>
                </Reveal>
            </div>
        </section>
    }
}

/// Tab bar plus the active panel. The selector is the only state and is
/// written solely by the tab buttons.
#[component]
fn ShowcaseTabs(selector: Selector) -> impl IntoView {
    let tabs = selector.list_panels();
    let selector = RwSignal::new(selector);

    let tab_bar = tabs
        .into_iter()
        .map(|tab| {
            let key = tab.key.clone();
            let is_active = {
                let key = tab.key.clone();
                move || selector.with(|s| s.is_selected(&key))
            };
            let is_active_aria = is_active.clone();
            view! {
                <button
                    role="tab"
                    aria-selected=move || is_active_aria().to_string()
                    class=move || {
                        if is_active() { "tab-trigger tab-active" } else { "tab-trigger" }
                    }
                    on:click=move |_| {
                        selector.update(|s| {
                            s.select(&key);
                        })
                    }
                >
                    <span class="mr-2">"</>"</span>
                    {tab.title}
                </button>
            }
        })
        .collect_view();

    view! {
        <div role="tablist" class="w-full flex flex-wrap gap-2 mb-8 justify-center">
            {tab_bar}
        </div>
        {move || {
            let panel = selector.with(|s| s.current_panel().clone());
            view! {
                <div role="tabpanel" class="grid lg:grid-cols-5 gap-8 panel-enter">
                    <div class="lg:col-span-3">
                        <CodeBlock language=panel.language body=panel.body />
                    </div>
                    <div class="lg:col-span-2 space-y-6">
                        <h3 class="font-display text-xl font-semibold mb-2">{panel.title}</h3>
                        <p class="text-muted-foreground mb-6">{panel.description}</p>
                        <div class="space-y-3">
                            <h4 class="text-sm font-medium text-muted-foreground uppercase tracking-wider">
                                "Key Benefits"
                            </h4>
                            {panel
                                .auxiliary_items
                                .into_iter()
                                .enumerate()
                                .map(|(i, benefit)| {
                                    view! {
                                        <div
                                            class="flex items-center gap-3 p-3 rounded-lg bg-secondary/50 border border-border panel-enter"
                                            style=format!("animation-delay: {}ms", 100 * i)
                                        >
                                            <span class="text-primary">"→"</span>
                                            <span class="text-sm">{benefit}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            }
        }}
    }
}

#[component]
fn CodeBlock(language: String, body: String) -> impl IntoView {
    view! {
        <div class="code-block overflow-hidden">
            <div class="flex items-center justify-between px-4 py-2 border-b border-code-border bg-code-bg/50">
                <div class="flex items-center gap-2">
                    <div class="flex gap-1.5">
                        <div class="w-3 h-3 rounded-full bg-red-500/80"></div>
                        <div class="w-3 h-3 rounded-full bg-yellow-400"></div>
                        <div class="w-3 h-3 rounded-full bg-green-500"></div>
                    </div>
                    <span class="text-xs text-muted-foreground font-mono ml-2">{language}</span>
                </div>
                <span class="text-muted-foreground font-mono text-xs">">_"</span>
            </div>
            <div class="p-4 overflow-x-auto text-sm leading-relaxed" inner_html=body></div>
        </div>
    }
}
