use leptos::*;

use crate::api;
use crate::completion::CompletionState;
use crate::program;
use crate::types::{AppView, Day, Exercise, Program, Week};

/// At most one week is open at a time. Clicking the open week closes it,
/// clicking any other week moves the expansion there.
pub fn toggle_expansion(current: Option<u32>, week: u32) -> Option<u32> {
    if current == Some(week) {
        None
    } else {
        Some(week)
    }
}

/// The first week in program order starts expanded.
pub fn initial_expansion(program: &Program) -> Option<u32> {
    program.weeks.first().map(|w| w.week_number)
}

pub struct WeekTheme {
    pub card: &'static str,
    pub header: &'static str,
    pub badge: &'static str,
}

/// Weeks alternate between the light and dark card theme by list position,
/// regardless of their week numbers.
pub fn week_theme(index: usize) -> WeekTheme {
    if index % 2 == 0 {
        WeekTheme {
            card: "week-card light",
            header: "week-header light",
            badge: "week-badge light",
        }
    } else {
        WeekTheme {
            card: "week-card dark",
            header: "week-header dark",
            badge: "week-badge dark",
        }
    }
}

fn scroll_week_into_view(week: u32) {
    let id = format!("week-{}", week);
    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(&id))
    {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

fn set_body_scroll_lock(locked: bool) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let style = body.style();
        if locked {
            let _ = style.set_property("overflow", "hidden");
        } else {
            let _ = style.remove_property("overflow");
        }
    }
}

#[component]
pub fn Routine(set_view: WriteSignal<AppView>) -> impl IntoView {
    if api::load_auth_session().is_none() {
        set_view.set(AppView::Login);
        return view! { <div class="loading">"La sesión ha caducado..."</div> }.into_view();
    }

    let program = program::assigned_program();

    let (state, set_state) = create_signal(CompletionState::new());
    let (expanded, set_expanded) = create_signal(initial_expansion(&program));
    let (detail, set_detail) = create_signal(Option::<Exercise>::None);

    // Scroll follows the expansion, but not on mount, and only after the
    // freshly expanded content has made it into the DOM.
    create_effect(move |prev: Option<Option<u32>>| {
        let current = expanded.get();
        if prev.is_some() {
            if let Some(week) = current {
                gloo_timers::callback::Timeout::new(60, move || scroll_week_into_view(week))
                    .forget();
            }
        }
        current
    });

    create_effect(move |_| {
        set_body_scroll_lock(detail.get().is_some());
    });
    on_cleanup(|| set_body_scroll_lock(false));

    let program_name = program.name.clone();
    let program_phase = program.phase.clone();
    let program_load = program.load.clone();

    view! {
        <div class="routine">
            <header class="routine-header">
                <button class="back-btn" on:click=move |_| set_view.set(AppView::Profile)>
                    "← Tu perfil"
                </button>
                <h1>{program_name}</h1>
                <div class="routine-meta">
                    <span class="routine-phase">{program_phase}</span>
                    <span class="routine-load">{program_load}</span>
                </div>
            </header>

            <div class="week-list">
                {program
                    .weeks
                    .iter()
                    .enumerate()
                    .map(|(index, week)| {
                        view! {
                            <WeekSection
                                week=week.clone()
                                index=index
                                state=state
                                set_state=set_state
                                expanded=expanded
                                set_expanded=set_expanded
                                set_detail=set_detail
                            />
                        }
                    })
                    .collect_view()}
            </div>

            {move || detail.get().map(|exercise| {
                let meta = format!(
                    "{} series · {} reps · descanso {}",
                    exercise.sets, exercise.reps, exercise.rest
                );
                let name = exercise.name;
                view! {
                    <div class="modal-overlay" on:click=move |_| set_detail.set(None)>
                        <div class="exercise-modal" on:click=|e| e.stop_propagation()>
                            <div class="exercise-modal-header">
                                <span class="exercise-modal-name">{name}</span>
                                <button
                                    class="exercise-modal-close"
                                    on:click=move |_| set_detail.set(None)
                                >
                                    "✕"
                                </button>
                            </div>
                            <div class="exercise-modal-meta">{meta}</div>
                            <div class="exercise-modal-body">
                                <div class="video-placeholder">
                                    "Demostración en vídeo próximamente"
                                </div>
                                <p>
                                    "¿Dudas con la técnica? Pregunta a tu entrenador "
                                    "en tu próxima sesión."
                                </p>
                            </div>
                        </div>
                    </div>
                }
            })}
        </div>
    }
    .into_view()
}

#[component]
fn WeekSection(
    week: Week,
    index: usize,
    state: ReadSignal<CompletionState>,
    set_state: WriteSignal<CompletionState>,
    expanded: ReadSignal<Option<u32>>,
    set_expanded: WriteSignal<Option<u32>>,
    set_detail: WriteSignal<Option<Exercise>>,
) -> impl IntoView {
    let week_number = week.week_number;
    let theme = week_theme(index);

    let week_for_badge = week.clone();
    let week_for_label = week.clone();
    let week_for_toggle = week.clone();
    let days = week.days.clone();

    let is_expanded = move || expanded.get() == Some(week_number);

    view! {
        <section class=theme.card id=format!("week-{}", week_number)>
            <div
                class=theme.header
                on:click=move |_| set_expanded.update(|e| *e = toggle_expansion(*e, week_number))
            >
                <div class="week-title-group">
                    <span class="week-title">{format!("Semana {}", week_number)}</span>
                    <span class=theme.badge>
                        {move || {
                            let s = state.get();
                            if s.is_week_complete(&week_for_badge) {
                                "Completada".to_string()
                            } else {
                                let (done, total) = s.week_progress(&week_for_badge);
                                format!("{}/{} días", done, total)
                            }
                        }}
                    </span>
                </div>
                <div class="week-header-actions">
                    <button
                        class="week-complete-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            let done = state.get().is_week_complete(&week_for_toggle);
                            set_state.update(|s| s.set_week_state(&week_for_toggle, !done));
                        }
                    >
                        {move || {
                            if state.get().is_week_complete(&week_for_label) {
                                "Deshacer semana"
                            } else {
                                "Completar semana"
                            }
                        }}
                    </button>
                    <span class="week-chevron">
                        {move || if is_expanded() { "▾" } else { "▸" }}
                    </span>
                </div>
            </div>

            {move || is_expanded().then(|| view! {
                <div class="week-days">
                    {days
                        .iter()
                        .map(|day| {
                            view! {
                                <DayCard
                                    week_number=week_number
                                    day=day.clone()
                                    state=state
                                    set_state=set_state
                                    set_detail=set_detail
                                />
                            }
                        })
                        .collect_view()}
                </div>
            })}
        </section>
    }
}

#[component]
fn DayCard(
    week_number: u32,
    day: Day,
    state: ReadSignal<CompletionState>,
    set_state: WriteSignal<CompletionState>,
    set_detail: WriteSignal<Option<Exercise>>,
) -> impl IntoView {
    let day_number = day.day_number;
    let focus = day.focus.clone();

    let day_for_progress = day.clone();
    let day_for_label = day.clone();
    let day_for_toggle = day.clone();

    view! {
        <div class="day-card">
            <div class="day-head">
                <div class="day-head-info">
                    <span class="day-title">{format!("Día {} · {}", day_number, focus)}</span>
                    <span class="day-progress">
                        {move || {
                            let (done, total) =
                                state.get().day_progress(week_number, &day_for_progress);
                            format!("{}/{}", done, total)
                        }}
                    </span>
                </div>
                <button
                    class="day-complete-btn"
                    on:click=move |_| {
                        let done = state.get().is_day_complete(week_number, &day_for_toggle);
                        set_state.update(|s| s.set_day_state(week_number, &day_for_toggle, !done));
                    }
                >
                    {move || {
                        if state.get().is_day_complete(week_number, &day_for_label) {
                            "Deshacer día"
                        } else {
                            "Completar día"
                        }
                    }}
                </button>
            </div>

            <table class="exercise-table">
                <thead>
                    <tr>
                        <th class="col-check"></th>
                        <th>"Ejercicio"</th>
                        <th>"Series"</th>
                        <th>"Reps"</th>
                        <th>"Descanso"</th>
                        <th class="col-detail"></th>
                    </tr>
                </thead>
                <tbody>
                    {day
                        .exercises
                        .iter()
                        .enumerate()
                        .map(|(idx, exercise)| {
                            let detail_exercise = exercise.clone();
                            let name = exercise.name.clone();
                            let sets = exercise.sets.clone();
                            let reps = exercise.reps.clone();
                            let rest = exercise.rest.clone();
                            view! {
                                <tr>
                                    <td class="col-check">
                                        <button
                                            class=move || {
                                                if state
                                                    .get()
                                                    .is_exercise_complete(week_number, day_number, idx)
                                                {
                                                    "exercise-check done"
                                                } else {
                                                    "exercise-check"
                                                }
                                            }
                                            on:click=move |_| {
                                                set_state.update(|s| {
                                                    s.toggle_exercise(week_number, day_number, idx)
                                                });
                                            }
                                        >
                                            "✓"
                                        </button>
                                    </td>
                                    <td class="exercise-name">{name}</td>
                                    <td>{sets}</td>
                                    <td>{reps}</td>
                                    <td>{rest}</td>
                                    <td class="col-detail">
                                        <button
                                            class="exercise-detail-btn"
                                            on:click=move |_| {
                                                set_detail.set(Some(detail_exercise.clone()))
                                            }
                                        >
                                            "Ver"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{initial_expansion, toggle_expansion, week_theme};
    use crate::program::assigned_program;

    #[test]
    fn first_week_starts_expanded() {
        assert_eq!(initial_expansion(&assigned_program()), Some(1));
    }

    #[test]
    fn expanding_from_collapsed_opens_the_week() {
        assert_eq!(toggle_expansion(None, 4), Some(4));
    }

    #[test]
    fn clicking_the_open_week_collapses_it() {
        assert_eq!(toggle_expansion(Some(3), 3), None);
    }

    #[test]
    fn expanding_another_week_moves_the_expansion() {
        assert_eq!(toggle_expansion(Some(1), 2), Some(2));
    }

    #[test]
    fn themes_alternate_by_position() {
        assert_eq!(week_theme(0).card, week_theme(2).card);
        assert_eq!(week_theme(1).badge, week_theme(3).badge);
        assert_ne!(week_theme(0).card, week_theme(1).card);
        assert_ne!(week_theme(0).header, week_theme(1).header);
    }
}
