use leptos::*;

use super::training::TRAINING_STYLES;
use crate::types::AppView;

#[component]
pub fn Home(set_view: WriteSignal<AppView>) -> impl IntoView {
    view! {
        <div class="home">
            <section class="hero">
                <span class="hero-kicker">"Estudio de entrenamiento · Valencia"</span>
                <h1 class="hero-title">"Entrena con un plan, no con suerte"</h1>
                <p class="hero-sub">
                    "Programas a medida, seguimiento semanal y un equipo que no te deja solo. "
                    "Tu rutina te espera en el portal de cliente."
                </p>
                <div class="hero-actions">
                    <button class="cta-primary" on:click=move |_| set_view.set(AppView::Register)>
                        "Empieza hoy"
                    </button>
                    <button class="cta-secondary" on:click=move |_| set_view.set(AppView::Plans)>
                        "Ver planes"
                    </button>
                </div>
            </section>

            <section class="styles-section">
                <h2 class="section-title">"Elige cómo entrenar"</h2>
                <div class="style-cards">
                    {TRAINING_STYLES
                        .iter()
                        .map(|style| {
                            let slug = style.slug;
                            view! {
                                <button
                                    class="style-card"
                                    on:click=move |_| set_view.set(AppView::Training(slug.to_string()))
                                >
                                    <span class="style-card-title">{style.title}</span>
                                    <span class="style-card-tagline">{style.tagline}</span>
                                    <span class="style-card-more">"Saber más →"</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="about-teaser">
                <h2 class="section-title">"Un estudio, no una fábrica"</h2>
                <p>
                    "Plazas limitadas por franja horaria y entrenadores que se saben tu nombre "
                    "y tus marcas. Conócenos antes de decidir."
                </p>
                <div class="teaser-links">
                    <button class="text-link" on:click=move |_| set_view.set(AppView::About)>
                        "Nuestra historia →"
                    </button>
                    <button class="text-link" on:click=move |_| set_view.set(AppView::Trainers)>
                        "El equipo →"
                    </button>
                </div>
            </section>

            <section class="contact-band">
                <h2 class="section-title">"¿Dudas? Escríbenos"</h2>
                <a
                    class="whatsapp-link"
                    href="https://wa.me/34600123123"
                    target="_blank"
                    rel="noopener"
                >
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5">
                        <path d="M12 3a9 9 0 0 0-7.8 13.4L3 21l4.7-1.2A9 9 0 1 0 12 3z"/>
                        <path d="M8.5 9.5c.3 2.5 3.5 5.7 5.9 6l1.6-1.5-2.3-1.4-1 .7c-.8-.4-1.9-1.5-2.3-2.3l.7-1-1.4-2.3z"/>
                    </svg>
                    "Hablar por WhatsApp"
                </a>
            </section>
        </div>
    }
}
