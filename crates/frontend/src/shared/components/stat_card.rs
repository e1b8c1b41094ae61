use crate::shared::icons::icon;
use crate::shared::number_format::format_money;
use leptos::prelude::*;

/// Small summary card: label, icon and a money value.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Value, reactive
    #[prop(into)]
    value: Signal<f64>,
    /// Accent modifier appended as `stat-card--{accent}`
    #[prop(optional)]
    accent: &'static str,
) -> impl IntoView {
    let class = if accent.is_empty() {
        "stat-card".to_string()
    } else {
        format!("stat-card stat-card--{}", accent)
    };

    view! {
        <div class=class>
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__body">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || format_money(value.get())}</div>
            </div>
        </div>
    }
}
