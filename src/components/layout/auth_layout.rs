use crate::components::layout::SideIllustration;
use leptos::prelude::*;

/// Two-column auth page: the illustration on the left (hidden on small
/// screens) and the form on the right.
#[component]
pub fn AuthLayout(
    /// Vertically center the form column on wide screens.
    #[prop(optional)]
    centered: bool,
    children: Children,
) -> impl IntoView {
    let class = if centered {
        "grid grid-cols-1 md:grid-cols-2 min-h-screen items-start md:items-center"
    } else {
        "grid grid-cols-1 md:grid-cols-2 min-h-screen"
    };

    view! {
        <main class=class>
            <SideIllustration />
            {children()}
        </main>
    }
}
