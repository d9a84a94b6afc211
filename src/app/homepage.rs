use leptos::prelude::*;
use leptos_meta::Title;

use super::about::About;
use super::contact::Contact;
use super::expertise::Expertise;
use super::hero::Hero;
use super::leadership::Leadership;
use super::projects::Projects;
use super::tech_stack::TechStack;

/// The whole portfolio: every section, top to bottom.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Expertise />
        <Projects />
        <TechStack />
        <Leadership />
        <Contact />
    }
}
