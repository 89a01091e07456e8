use leptos::*;

use crate::types::AppView;

/// One entry per training style the studio offers; `slug` is the key the
/// rest of the site links with.
pub struct TrainingStyle {
    pub slug: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
}

pub const TRAINING_STYLES: &[TrainingStyle] = &[
    TrainingStyle {
        slug: "fuerza",
        title: "Fuerza y musculación",
        tagline: "Progresa en los básicos con cargas que suben contigo",
        description: "Bloques de 4 semanas centrados en sentadilla, press y peso \
                      muerto. Medimos cada levantamiento para que la carga suba \
                      cuando toca, no cuando apetece.",
        highlights: &[
            "Programación por bloques",
            "Técnica supervisada en cada sesión",
            "Sobrecarga progresiva medida",
        ],
    },
    TrainingStyle {
        slug: "funcional",
        title: "Entrenamiento funcional",
        tagline: "Fuerza que se nota fuera del gimnasio",
        description: "Patrones de movimiento completos con peso libre y trabajo de \
                      core. Grupos reducidos para que nadie entrene sin mirada \
                      encima.",
        highlights: &[
            "Patrones de empuje, tracción y bisagra",
            "Core y estabilidad en cada sesión",
            "Grupos de máximo 8 personas",
        ],
    },
    TrainingStyle {
        slug: "hiit",
        title: "HIIT y acondicionamiento",
        tagline: "Sesiones cortas, intensidad honesta",
        description: "Intervalos de alta intensidad adaptados a tu nivel real. \
                      Cuarenta y cinco minutos que valen por dos horas de cinta.",
        highlights: &[
            "Intervalos escalados por nivel",
            "Trabajo cardiovascular y de potencia",
            "Sesiones de 45 minutos",
        ],
    },
    TrainingStyle {
        slug: "personal",
        title: "Entrenamiento personal 1:1",
        tagline: "Tu plan, tu ritmo, tu entrenador",
        description: "Un entrenador para ti solo, un plan escrito para tus \
                      objetivos y revisiones cada semana. La opción más directa \
                      entre donde estás y donde quieres llegar.",
        highlights: &[
            "Plan individual revisado cada semana",
            "Horario a tu medida",
            "Acceso al portal de cliente",
        ],
    },
];

pub fn style_by_slug(slug: &str) -> Option<&'static TrainingStyle> {
    TRAINING_STYLES.iter().find(|s| s.slug == slug)
}

#[component]
pub fn Training(slug: String, set_view: WriteSignal<AppView>) -> impl IntoView {
    match style_by_slug(&slug) {
        Some(style) => view! {
            <div class="training-page">
                <section class="training-hero">
                    <span class="training-kicker">"Entrenamiento"</span>
                    <h1 class="training-title">{style.title}</h1>
                    <p class="training-tagline">{style.tagline}</p>
                </section>

                <section class="training-body">
                    <p class="training-description">{style.description}</p>
                    <ul class="training-highlights">
                        {style
                            .highlights
                            .iter()
                            .map(|h| view! { <li>{*h}</li> })
                            .collect_view()}
                    </ul>
                </section>

                <section class="training-cta">
                    <button
                        class="cta-primary"
                        on:click=move |_| set_view.set(AppView::Plans)
                    >
                        "Ver planes"
                    </button>
                    <button
                        class="cta-secondary"
                        on:click=move |_| set_view.set(AppView::Register)
                    >
                        "Reservar primera sesión"
                    </button>
                </section>
            </div>
        }
        .into_view(),
        None => view! {
            <div class="training-page">
                <div class="not-found">
                    <p>"No encontramos ese entrenamiento."</p>
                    <button class="cta-secondary" on:click=move |_| set_view.set(AppView::Home)>
                        "Volver al inicio"
                    </button>
                </div>
            </div>
        }
        .into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_unique() {
        let mut slugs: Vec<&str> = TRAINING_STYLES.iter().map(|s| s.slug).collect();
        let count = slugs.len();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), count);
    }

    #[test]
    fn unknown_slug_has_no_style() {
        assert!(style_by_slug("fuerza").is_some());
        assert!(style_by_slug("pilates").is_none());
    }
}
