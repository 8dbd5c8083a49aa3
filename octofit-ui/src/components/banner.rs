//! Status Banners
//!
//! Inline alerts for failed and empty collections. Error banners can be
//! dismissed; dismissing only hides the banner, it never retries.

use leptos::*;

/// Bootstrap alert with a close button
#[component]
pub fn DismissibleAlert(
    /// Bootstrap alert variant (`danger`, `info`, ...)
    variant: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let (open, set_open) = create_signal(true);
    let class = format!("alert alert-{} alert-dismissible fade show", variant);

    view! {
        {move || {
            if open.get() {
                view! {
                    <div class=class.clone() role="alert">
                        {children()}
                        <button
                            type="button"
                            class="btn-close"
                            aria-label="Close"
                            on:click=move |_| set_open.set(false)
                        ></button>
                    </div>
                }
                .into_view()
            } else {
                view! {}.into_view()
            }
        }}
    }
}

/// Failed fetch; shows the message verbatim
#[component]
pub fn ErrorBanner(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="container mt-5">
            <DismissibleAlert variant="danger">
                <strong>"Error: "</strong>
                {message.clone()}
            </DismissibleAlert>
        </div>
    }
}

/// Successful fetch with nothing to show
#[component]
pub fn EmptyBanner(headline: &'static str, hint: &'static str) -> impl IntoView {
    view! {
        <div class="alert alert-info" role="alert">
            <strong>{headline}</strong>
            " "
            {hint}
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn error_banner_shows_message_and_dismisses() {
        mount_to_body(|| view! { <ErrorBanner message="HTTP error! status: 500" /> });

        let document = document();
        let alert = document
            .query_selector(".alert-danger")
            .unwrap()
            .expect("error banner rendered");
        assert!(alert.text_content().unwrap().contains("HTTP error! status: 500"));

        let close = document
            .query_selector(".alert-danger .btn-close")
            .unwrap()
            .expect("close button rendered")
            .unchecked_into::<web_sys::HtmlElement>();
        close.click();

        assert!(document.query_selector(".alert-danger").unwrap().is_none());
    }
}
