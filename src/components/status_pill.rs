//! Status badge for task workflow states.

#[cfg(test)]
#[path = "status_pill_test.rs"]
mod status_pill_test;

use leptos::prelude::*;

/// Badge variant for a workflow status. Unknown statuses fall back to the
/// default variant so new server-side states render without a deploy here.
pub(crate) fn status_variant(status: &str) -> &'static str {
    match status {
        "inbox" | "testing" | "offline" => "outline",
        "in_progress" | "busy" => "ember",
        _ => "default",
    }
}

/// Human label for a status value.
pub(crate) fn status_label(status: &str) -> String {
    status.replace('_', " ")
}

/// Small pill rendering a workflow status.
#[component]
pub fn StatusPill(status: String) -> impl IntoView {
    let class = format!("badge badge--{}", status_variant(&status));
    view! { <span class=class>{status_label(&status)}</span> }
}
