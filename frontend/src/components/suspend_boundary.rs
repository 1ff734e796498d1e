//! Loading fallback for components that suspend on a server call.

use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

/// Shows `message` while a child suspends; errors are caught per component.
#[component]
pub fn SuspendWrapper(#[props(default = "Loading...".to_string())] message: String, children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: move |_s: SuspenseContext| rsx! {
                div {
                    style: "display: flex; width: 100%; justify-content: center;",
                    LoadingIndicator { message: message.clone() }
                }
            },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                align-items: center;
                gap: 10px;
                width: fit-content;
                font-size: 22px;
                color: rgb(75, 87, 112);
                background: white;
                border-radius: 8px;
                padding: 10px 16px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
            ",
            "{message}"
        }
    }
}
