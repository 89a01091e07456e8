use leptos::*;

use crate::types::AppView;

struct Trainer {
    name: &'static str,
    initials: &'static str,
    specialty: &'static str,
    bio: &'static str,
}

const TRAINERS: &[Trainer] = &[
    Trainer {
        name: "Marta Ribes",
        initials: "MR",
        specialty: "Fuerza y powerlifting",
        bio: "Competidora nacional de powerlifting y fundadora del estudio. Lleva \
              diez años enseñando a mover cargas sin romperse por el camino.",
    },
    Trainer {
        name: "Dani Ferrer",
        initials: "DF",
        specialty: "Funcional y readaptación",
        bio: "Fisioterapeuta reconvertido a entrenador. Especialista en volver a \
              entrenar después de una lesión sin miedo ni recaídas.",
    },
    Trainer {
        name: "Lucía Andrés",
        initials: "LA",
        specialty: "HIIT y acondicionamiento",
        bio: "Ex atleta de 400 metros. Sus sesiones son cortas, exigentes y con la \
              música demasiado alta, según el resto del equipo.",
    },
    Trainer {
        name: "Óscar Peña",
        initials: "OP",
        specialty: "Entrenamiento personal",
        bio: "El que más horas de sala acumula. Escribe los planes del portal de \
              cliente y revisa cada rutina semana a semana.",
    },
];

#[component]
pub fn Trainers(set_view: WriteSignal<AppView>) -> impl IntoView {
    view! {
        <div class="trainers">
            <h1 class="page-title">"El equipo"</h1>
            <p class="page-lead">
                "Cuatro entrenadores, cero teléfonos en la sala y todas las horas de "
                "formación que no caben en esta página."
            </p>

            <div class="trainer-cards">
                {TRAINERS
                    .iter()
                    .map(|t| view! {
                        <div class="trainer-card">
                            <div class="trainer-avatar">{t.initials}</div>
                            <span class="trainer-name">{t.name}</span>
                            <span class="trainer-specialty">{t.specialty}</span>
                            <p class="trainer-bio">{t.bio}</p>
                        </div>
                    })
                    .collect_view()}
            </div>

            <section class="trainers-cta">
                <p>"Entrena con cualquiera de ellos desde el primer día."</p>
                <button class="cta-primary" on:click=move |_| set_view.set(AppView::Plans)>
                    "Ver planes"
                </button>
            </section>
        </div>
    }
}
