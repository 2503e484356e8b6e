use landing::theme::stylesheet;
use landing::view::HEADLINE;
use leptos::prelude::*;
use leptos_meta::{Style, Title, provide_meta_context};

use crate::components::Greeting;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=HEADLINE/>
        <Style>{stylesheet()}</Style>
        <Greeting/>
    }
}
