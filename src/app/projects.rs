use leptos::prelude::*;

use super::reveal::Reveal;
use super::section::SectionHeading;
use crate::content::{Project, PROJECTS};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="py-24 sm:py-32">
            <div class="section-container">
                <SectionHeading
                    eyebrow="Featured Work"
                    title="Projects with"
                    accent="Technical Depth"
                    blurb="Enterprise-scale applications built with modern Angular architecture, serving millions of users across government, healthcare, and fintech."
                />
                <div class="space-y-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);

    view! {
        <Reveal delay_ms={150 * index as u32} class="card overflow-hidden">
            <div class="p-6 sm:p-8">
                <div class="flex flex-wrap items-start justify-between gap-4 mb-4">
                    <div>
                        <span class="text-xs font-mono text-muted-foreground uppercase tracking-wider">
                            {project.organization}
                        </span>
                        <h3 class="font-display text-2xl font-bold mt-1">{project.title}</h3>
                        <span class="inline-block mt-2 px-3 py-1 rounded-full text-xs font-medium bg-primary/10 text-primary border border-primary/20">
                            {project.kind}
                        </span>
                    </div>
                </div>
                <p class="text-muted-foreground">{project.description}</p>
            </div>
            <div class="grid grid-cols-3 border-y border-border bg-secondary/30">
                {project
                    .metrics
                    .iter()
                    .map(|metric| {
                        view! {
                            <div class="p-4 text-center border-r last:border-r-0 border-border">
                                <div class="mb-1">{metric.icon}</div>
                                <div class="font-display text-xl font-bold">{metric.value}</div>
                                <div class="text-xs text-muted-foreground">{metric.label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="p-6 sm:p-8 space-y-6">
                <Show when=move || expanded.get()>
                    <div class="grid md:grid-cols-2 gap-6 panel-enter">
                        <div>
                            <h4 class="text-sm font-semibold text-muted-foreground uppercase tracking-wider mb-2">
                                "Challenge"
                            </h4>
                            <p class="text-sm text-muted-foreground">{project.problem}</p>
                        </div>
                        <div>
                            <h4 class="text-sm font-semibold text-muted-foreground uppercase tracking-wider mb-2">
                                "Solution"
                            </h4>
                            <p class="text-sm text-foreground">{project.solution}</p>
                        </div>
                    </div>
                    <div class="panel-enter">
                        <h4 class="text-sm font-semibold text-muted-foreground uppercase tracking-wider mb-3">
                            "Impact"
                        </h4>
                        <div class="space-y-2">
                            {project
                                .impact
                                .iter()
                                .map(|item| {
                                    view! {
                                        <div class="flex items-center gap-2">
                                            <span class="text-green-500">"✓"</span>
                                            <span class="text-sm">{*item}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Show>
                <div class="flex flex-wrap items-center justify-between gap-4">
                    <div class="flex flex-wrap gap-2">
                        {project
                            .stack
                            .iter()
                            .map(|tech| {
                                view! {
                                    <span class="px-3 py-1 rounded-md text-xs font-mono bg-secondary border border-border">
                                        {*tech}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button
                        class="text-sm text-primary hover:underline"
                        aria-expanded=move || expanded.get().to_string()
                        on:click=move |_| set_expanded.update(|e| *e = !*e)
                    >
                        {move || if expanded.get() { "Show less" } else { "View details" }}
                    </button>
                </div>
            </div>
        </Reveal>
    }
}
