use leptos::*;

use crate::api;
use crate::pages::{About, Home, Login, Plans, Profile, Register, Routine, Trainers, Training};
use crate::types::{AppView, AuthSession};

/// "dd/mm/yyyy" out of unix seconds, for the profile page.
pub fn format_member_since(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_default()
}

#[component]
pub fn App() -> impl IntoView {
    let initial_view = if api::load_auth_session().is_some() {
        AppView::Profile
    } else {
        AppView::Home
    };

    let (view, set_view) = create_signal(initial_view);
    let (auth, set_auth) = create_signal(api::load_auth_session());

    view! {
        <div class="app">
            <SiteNav view=view set_view=set_view auth=auth />
            <main class="site-main">
                {move || match view.get() {
                    AppView::Home => view! { <Home set_view=set_view /> }.into_view(),
                    AppView::About => view! { <About set_view=set_view /> }.into_view(),
                    AppView::Trainers => view! { <Trainers set_view=set_view /> }.into_view(),
                    AppView::Plans => view! { <Plans set_view=set_view /> }.into_view(),
                    AppView::Training(slug) => {
                        view! { <Training slug=slug set_view=set_view /> }.into_view()
                    }
                    AppView::Login => {
                        view! { <Login set_view=set_view set_auth=set_auth /> }.into_view()
                    }
                    AppView::Register => {
                        view! { <Register set_view=set_view set_auth=set_auth /> }.into_view()
                    }
                    AppView::Profile => {
                        view! { <Profile set_view=set_view set_auth=set_auth /> }.into_view()
                    }
                    AppView::Routine => view! { <Routine set_view=set_view /> }.into_view(),
                }}
            </main>
            <SiteFooter set_view=set_view />
        </div>
    }
}

#[component]
fn SiteNav(
    view: ReadSignal<AppView>,
    set_view: WriteSignal<AppView>,
    auth: ReadSignal<Option<AuthSession>>,
) -> impl IntoView {
    let link_class = move |target: AppView| {
        move || {
            if view.get() == target {
                "nav-link active"
            } else {
                "nav-link"
            }
        }
    };

    view! {
        <nav class="site-nav">
            <button class="nav-brand" on:click=move |_| set_view.set(AppView::Home)>
                "FORJA"
            </button>
            <div class="nav-links">
                <button
                    class=link_class(AppView::About)
                    on:click=move |_| set_view.set(AppView::About)
                >
                    "Nosotros"
                </button>
                <button
                    class=link_class(AppView::Trainers)
                    on:click=move |_| set_view.set(AppView::Trainers)
                >
                    "Entrenadores"
                </button>
                <button
                    class=link_class(AppView::Plans)
                    on:click=move |_| set_view.set(AppView::Plans)
                >
                    "Planes"
                </button>
            </div>
            {move || {
                if auth.get().is_some() {
                    view! {
                        <button class="nav-cta" on:click=move |_| set_view.set(AppView::Profile)>
                            "Mi perfil"
                        </button>
                    }
                    .into_view()
                } else {
                    view! {
                        <button class="nav-cta" on:click=move |_| set_view.set(AppView::Login)>
                            "Acceder"
                        </button>
                    }
                    .into_view()
                }
            }}
        </nav>
    }
}

#[component]
fn SiteFooter(set_view: WriteSignal<AppView>) -> impl IntoView {
    view! {
        <footer class="site-footer">
            <span class="footer-brand">"FORJA · Estudio de entrenamiento"</span>
            <span class="footer-address">"C/ de la Farga 12, Valencia"</span>
            <div class="footer-links">
                <button class="footer-link" on:click=move |_| set_view.set(AppView::Plans)>
                    "Planes"
                </button>
                <a
                    class="footer-link"
                    href="https://wa.me/34600123123"
                    target="_blank"
                    rel="noopener"
                >
                    "WhatsApp"
                </a>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::format_member_since;

    #[test]
    fn member_since_renders_day_month_year() {
        assert_eq!(format_member_since(1709596800), "05/03/2024");
    }

    #[test]
    fn member_since_swallows_out_of_range_timestamps() {
        assert_eq!(format_member_since(i64::MAX), "");
    }
}
