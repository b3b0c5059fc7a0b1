//! OpenClaw brand mark for page headers.

use leptos::prelude::*;

/// Logo block with the product wordmark.
#[component]
pub fn BrandMark() -> impl IntoView {
    view! {
        <a class="brand-mark" href="/">
            <span class="brand-mark__badge">"OC"</span>
            <span class="brand-mark__words">
                <span class="brand-mark__name">"OpenClaw"</span>
                <span class="brand-mark__product">"Mission Control"</span>
            </span>
        </a>
    }
}
