use leptos::prelude::*;

/// Button with variants (primary, danger, ghost) and an optional small size.
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "danger", or "ghost"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Compact size
    #[prop(optional, into)]
    small: MaybeProp<bool>,
    /// Button type attribute
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "danger" => "button--danger",
        "ghost" => "button--ghost",
        _ => "button--primary",
    };

    let size_class = move || {
        if small.get().unwrap_or(false) {
            "button--small"
        } else {
            ""
        }
    };

    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=move || format!("button {} {}", variant_class(), size_class())
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
