use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Fades its children in the first time they scroll into view.
///
/// Once revealed, content stays visible; scrolling away doesn't hide it again.
#[component]
pub fn Reveal(
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(target);
    let (revealed, set_revealed) = signal(false);

    Effect::new(move |_| {
        if visible.get() && !revealed.get_untracked() {
            set_revealed.set(true);
        }
    });

    let style = format!("transition-delay: {delay_ms}ms");
    view! {
        <div
            node_ref=target
            class=move || {
                let state = if revealed.get() { "reveal revealed" } else { "reveal" };
                format!("{state} {class}")
            }
            style=style
        >
            {children()}
        </div>
    }
}
