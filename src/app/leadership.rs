use leptos::prelude::*;

use super::reveal::Reveal;
use super::section::SectionHeading;
use crate::content::ACHIEVEMENTS;

#[component]
pub fn Leadership() -> impl IntoView {
    view! {
        <section id="leadership" class="py-24 sm:py-32">
            <div class="section-container">
                <SectionHeading
                    eyebrow="Beyond Code"
                    title="Leadership &"
                    accent="Impact"
                    blurb="Technical excellence combined with strong leadership to drive team success."
                />
                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    {ACHIEVEMENTS
                        .iter()
                        .enumerate()
                        .map(|(i, achievement)| {
                            view! {
                                <Reveal delay_ms={100 * i as u32} class="card p-6 text-center">
                                    <div class="w-14 h-14 mx-auto rounded-2xl bg-primary/10 flex items-center justify-center mb-4 text-3xl">
                                        {achievement.icon}
                                    </div>
                                    <div class="font-display text-4xl font-bold text-gradient mb-1">
                                        {achievement.metric}
                                    </div>
                                    <div class="text-xs text-muted-foreground uppercase tracking-wider mb-4">
                                        {achievement.metric_label}
                                    </div>
                                    <h3 class="font-display text-lg font-semibold mb-2">
                                        {achievement.title}
                                    </h3>
                                    <p class="text-sm text-muted-foreground">
                                        {achievement.description}
                                    </p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
