//! Ripple Button
//!
//! Button that spawns an expanding circle from the click point.

use std::rc::Rc;

use cardshop_core::effects::Ripple;
use dioxus::prelude::*;

use crate::context::use_shop_config;
use crate::hooks::client_bounds;

#[derive(Clone, PartialEq, Props)]
pub struct RippleButtonProps {
    /// Button content
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Extra classes appended to `btn`
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn RippleButton(props: RippleButtonProps) -> Element {
    let config = use_shop_config();
    let mut button: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let mut ripples: Signal<Vec<(u64, Ripple)>> = use_signal(Vec::new);
    let mut next_id = use_signal(|| 0_u64);

    let full_class = match props.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("btn {}", extra),
        _ => "btn".to_string(),
    };
    let onclick = props.onclick;

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            onmounted: move |evt: MountedEvent| button.set(Some(evt.data())),
            onclick: move |evt: MouseEvent| async move {
                if let Some(handler) = &onclick {
                    handler.call(());
                }

                let Some(element) = button() else {
                    return;
                };
                let Some(bounds) = client_bounds(&element).await else {
                    return;
                };
                let pointer = evt.client_coordinates();
                let ripple = Ripple::in_bounds(bounds, pointer.x, pointer.y);

                let id = next_id();
                next_id.set(id + 1);
                ripples.write().push((id, ripple));

                tokio::time::sleep(config.effects.ripple_duration()).await;
                ripples.write().retain(|(existing, _)| *existing != id);
            },
            {props.children}
            for (id, ripple) in ripples() {
                span { key: "{id}", class: "ripple", style: "{ripple.style()}" }
            }
        }
    }
}
