//! Error boundaries for the app shell and for single dashboard components.

use dioxus::prelude::*;

use crate::routes::Route;

/// Last-resort boundary; offers a plain link back to the dashboard since the router may be broken.
#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                rsx! {
                    div {
                        style: "display: flex; flex-direction: column; gap: 12px; padding: 24px;",
                        h1 { style: "color: darkred; font-size: 40px; margin: 0;", "Something went wrong" }
                        p { style: "color: rgb(75, 87, 112); margin: 0;", "Failed in: {boundary_name}" }
                        a { href: "/", "Back to the Brewery Dashboard" }
                        pre {
                            style: "border: 1px solid red; border-radius: 5px; padding: 10px; text-wrap: auto;",
                            "{err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

/// Keeps a failing component from taking the whole page down.
#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "color: blue; border: 1px solid blue; border-radius: 5px; padding: 4px 10px; background: white; cursor: pointer;",
                            onclick: move |_| err.clear_errors(),
                            "Try Again"
                        }
                    }
                }
            },
            {children}
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(
    #[props(default = "Error loading brewery data".to_string())] title: String,
    error_txt: ReadSignal<String>,
    children: Element,
) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 10px;
                align-items: flex-start;
                color: darkred;
                border: 1px solid red;
                border-radius: 5px;
                padding: 14px;
                max-width: 720px;
            ",
            h2 { style: "font-size: 26px; margin: 0;", "{title}" }
            pre { style: "margin: 0; text-wrap: auto; max-height: 300px; overflow-y: auto;", "{error_txt}" }
            div {
                style: "display: flex; flex-direction: row; gap: 12px; align-items: center;",
                {children}
                Link { to: Route::HomePage {}, "Home" }
            }
        }
    }
}
