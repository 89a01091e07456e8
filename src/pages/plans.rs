use leptos::*;

use crate::types::AppView;

struct Plan {
    name: &'static str,
    price: &'static str,
    period: &'static str,
    perks: &'static [&'static str],
    featured: bool,
}

const PLANS: &[Plan] = &[
    Plan {
        name: "Esencial",
        price: "39 €",
        period: "/ mes",
        perks: &[
            "2 sesiones en grupo por semana",
            "Valoración inicial",
            "Acceso al portal de cliente",
        ],
        featured: false,
    },
    Plan {
        name: "Progreso",
        price: "59 €",
        period: "/ mes",
        perks: &[
            "3 sesiones en grupo por semana",
            "Rutina personalizada en el portal",
            "Revisión mensual con tu entrenador",
            "Ajustes de plan ilimitados",
        ],
        featured: true,
    },
    Plan {
        name: "Élite",
        price: "99 €",
        period: "/ mes",
        perks: &[
            "2 sesiones 1:1 por semana",
            "Rutina personalizada en el portal",
            "Revisión semanal con tu entrenador",
            "Soporte por WhatsApp",
        ],
        featured: false,
    },
];

#[component]
pub fn Plans(set_view: WriteSignal<AppView>) -> impl IntoView {
    view! {
        <div class="plans">
            <h1 class="page-title">"Planes"</h1>
            <p class="page-lead">
                "Sin matrícula y sin permanencia. Cambia de plan o páralo cuando "
                "lo necesites."
            </p>

            <div class="plan-cards">
                {PLANS
                    .iter()
                    .map(|p| {
                        let card_class = if p.featured {
                            "plan-card featured"
                        } else {
                            "plan-card"
                        };
                        view! {
                            <div class=card_class>
                                {p.featured.then(|| view! {
                                    <span class="plan-flag">"El más elegido"</span>
                                })}
                                <span class="plan-name">{p.name}</span>
                                <div class="plan-price">
                                    <span class="plan-amount">{p.price}</span>
                                    <span class="plan-period">{p.period}</span>
                                </div>
                                <ul class="plan-perks">
                                    {p.perks
                                        .iter()
                                        .map(|perk| view! { <li>{*perk}</li> })
                                        .collect_view()}
                                </ul>
                                <button
                                    class="plan-join"
                                    on:click=move |_| set_view.set(AppView::Register)
                                >
                                    "Apuntarme"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <p class="plans-note">
                "¿No lo ves claro? La primera sesión de valoración es gratis, "
                "vengas del plan que vengas."
            </p>
        </div>
    }
}
