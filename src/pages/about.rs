use leptos::*;

use crate::types::AppView;

struct Value {
    title: &'static str,
    text: &'static str,
}

const VALUES: &[Value] = &[
    Value {
        title: "Medir antes que opinar",
        text: "Cada plan arranca con una valoración y cada semana queda registrada. \
               Si no se mide, no se mejora.",
    },
    Value {
        title: "Técnica primero",
        text: "Ninguna carga sube hasta que el movimiento lo merece. Las prisas \
               lesionan; la técnica acompaña toda la vida.",
    },
    Value {
        title: "Sin masificación",
        text: "Aforo limitado por franja horaria. Un entrenador que mira ocho \
               personas entrena; uno que mira cuarenta, vigila.",
    },
];

#[component]
pub fn About(set_view: WriteSignal<AppView>) -> impl IntoView {
    view! {
        <div class="about">
            <section class="about-hero">
                <h1 class="page-title">"Nuestra historia"</h1>
                <p class="about-lead">
                    "FORJA abrió en 2019 con dos racks, una esterilla y una idea fija: "
                    "el entrenamiento serio no tiene por qué ser hostil. Hoy somos un "
                    "equipo de cuatro entrenadores y seguimos cabiendo en un local "
                    "donde todo el mundo se conoce."
                </p>
            </section>

            <section class="about-values">
                <h2 class="section-title">"En qué creemos"</h2>
                <div class="value-cards">
                    {VALUES
                        .iter()
                        .map(|v| view! {
                            <div class="value-card">
                                <span class="value-title">{v.title}</span>
                                <p class="value-text">{v.text}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="about-cta">
                <p>"¿Quieres ponerle cara al equipo?"</p>
                <button class="cta-primary" on:click=move |_| set_view.set(AppView::Trainers)>
                    "Conoce a los entrenadores"
                </button>
            </section>
        </div>
    }
}
