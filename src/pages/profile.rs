use leptos::*;

use crate::api;
use crate::app::format_member_since;
use crate::program;
use crate::storage;
use crate::types::{AppView, AuthSession};

#[component]
pub fn Profile(
    set_view: WriteSignal<AppView>,
    set_auth: WriteSignal<Option<AuthSession>>,
) -> impl IntoView {
    let session = match api::load_auth_session() {
        Some(s) => s,
        None => {
            set_view.set(AppView::Login);
            return view! { <div class="loading">"La sesión ha caducado..."</div> }.into_view();
        }
    };

    let account_name = store_value(session.user.name.clone());
    let user_email = session.user.email.clone();
    let member_since = format_member_since(session.user.member_since);

    let initial_name = storage::load_display_name().unwrap_or_else(|| account_name.get_value());
    let (display_name, set_display_name) = create_signal(initial_name.clone());
    let (editing_name, set_editing_name) = create_signal(false);
    let (name_input, set_name_input) = create_signal(initial_name);

    let save_display_name = move |_| {
        let name = name_input.get().trim().to_string();
        storage::save_display_name(&name);

        if name.is_empty() {
            set_display_name.set(account_name.get_value());
        } else {
            set_display_name.set(name.clone());
            if let Some(mut session) = api::load_auth_session() {
                session.user.name = name;
                api::save_auth_session(&session);
                set_auth.set(Some(session));
            }
        }
        set_editing_name.set(false);
    };

    let assigned = program::assigned_program();
    let program_name = assigned.name.clone();
    let program_phase = assigned.phase.clone();
    let week_count = assigned.weeks.len();

    view! {
        <div class="profile">
            <header class="profile-header">
                <h1>{move || format!("Hola, {}", display_name.get())}</h1>
                <p class="profile-sub">"Tu zona de cliente de FORJA"</p>
            </header>

            <section class="profile-section">
                <h2>"Tu rutina"</h2>
                <div class="routine-summary">
                    <div class="routine-summary-info">
                        <span class="routine-summary-name">{program_name}</span>
                        <span class="routine-summary-phase">{program_phase}</span>
                        <span class="routine-summary-weeks">
                            {format!("{} semanas", week_count)}
                        </span>
                    </div>
                    <button
                        class="routine-open-btn"
                        on:click=move |_| set_view.set(AppView::Routine)
                    >
                        "Ver mi rutina →"
                    </button>
                </div>
            </section>

            <section class="profile-section">
                <h2>"Nombre"</h2>
                <p class="profile-hint">"Así te saludamos en el portal"</p>
                {move || {
                    if editing_name.get() {
                        view! {
                            <div class="name-edit-row">
                                <input
                                    type="text"
                                    maxlength="30"
                                    class="name-input"
                                    placeholder="Tu nombre"
                                    prop:value=name_input
                                    on:input=move |ev| set_name_input.set(event_target_value(&ev))
                                />
                                <button class="name-save" on:click=save_display_name>"✓"</button>
                                <button
                                    class="name-cancel"
                                    on:click=move |_| set_editing_name.set(false)
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                        .into_view()
                    } else {
                        view! {
                            <div class="name-display-row">
                                <span class="name-value">{display_name.get()}</span>
                                <button
                                    class="name-edit-btn"
                                    on:click=move |_| {
                                        set_name_input.set(display_name.get());
                                        set_editing_name.set(true);
                                    }
                                >
                                    "Cambiar"
                                </button>
                            </div>
                        }
                        .into_view()
                    }
                }}
            </section>

            <section class="profile-section">
                <h2>"Cuenta"</h2>
                <div class="account-info">
                    <span class="account-email">{user_email}</span>
                    <span class="account-since">{format!("Cliente desde {}", member_since)}</span>
                    <button
                        class="logout-btn"
                        on:click=move |_| {
                            api::sign_out();
                            set_auth.set(None);
                            set_view.set(AppView::Home);
                        }
                    >
                        "Cerrar sesión"
                    </button>
                </div>
            </section>
        </div>
    }
    .into_view()
}
