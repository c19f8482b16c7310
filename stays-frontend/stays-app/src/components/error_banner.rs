use leptos::prelude::*;

use crate::error::AppError;

#[component]
pub fn ErrorBanner(error: AppError) -> impl IntoView {
    view! {
        <div class="error-banner" role="alert">
            <h2>"Something went wrong"</h2>
            <p>{error.to_string()}</p>
        </div>
    }
}
