use crate::{app_lib::theme::Theme, features::auth::validation::PasswordPolicy};
use leptos::prelude::*;

/// Live list of password rules, each marked as met or not.
#[component]
pub fn PasswordChecklist(
    policy: PasswordPolicy,
    #[prop(into)] password: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2 mt-2">
            {move || {
                policy
                    .check(&password.get())
                    .into_iter()
                    .map(|check| {
                        let (class, mark) = if check.satisfied {
                            (Theme::CHIP_OK, "✓")
                        } else {
                            (Theme::CHIP_PENDING, "✕")
                        };
                        view! {
                            <span class=class>
                                {check.label}
                                <span aria-hidden="true">{mark}</span>
                            </span>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
