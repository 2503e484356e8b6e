use landing::theme::class;
use landing::view::{GreetingView, HEADLINE, TAGLINE};
use leptos::prelude::*;

use crate::hooks::use_pointer_position;

#[component]
pub fn Greeting() -> impl IntoView {
    let position = use_pointer_position();

    // Memo skips re-rendering when a move repeats the current position
    let surface = Memo::new(move |_| GreetingView.render(position.get()));
    let background = move || surface.with(|s| s.background.clone());

    view! {
        <main class=class::SURFACE>
            // Glow follows the pointer; pointer-events: none in the stylesheet
            <div class=class::GLOW style:background=background></div>

            <div class=class::CONTENT>
                <h1 class=class::HEADLINE>
                    <span class=class::HEADLINE_TEXT>{HEADLINE}</span>
                </h1>
                <p class=class::TAGLINE>{TAGLINE}</p>
            </div>
        </main>
    }
}
