use yew::prelude::*;
use web_sys::{Element, MouseEvent};

use crate::config::{GET_STARTED_URL, PHONE_DISPLAY, PHONE_HREF};

pub const HOST_ID: &str = "exitIntent";
const BACKDROP_CLASS: &str = "exit-intent-overlay";

#[derive(Properties, PartialEq)]
pub struct ExitIntentOverlayProps {
    pub on_close: Callback<()>,
}

#[function_component(ExitIntentOverlay)]
pub fn exit_intent_overlay(props: &ExitIntentOverlayProps) -> Html {
    let close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    // Clicks inside the modal bubble up here too; only the dimmed area closes.
    let backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            let on_backdrop = e
                .target_dyn_into::<Element>()
                .map(|el| el.class_list().contains(BACKDROP_CLASS))
                .unwrap_or(false);
            if on_backdrop {
                on_close.emit(());
            }
        })
    };

    html! {
        <div class={BACKDROP_CLASS} onclick={backdrop}>
            <div class="exit-intent-modal">
                <button class="exit-intent-close" aria-label="Close" onclick={close_button}>
                    {"×"}
                </button>
                <h3>{"Before you go..."}</h3>
                <p>{"Free consultation. No pressure. Just honest conversation about your fitness goals."}</p>
                <div class="exit-intent-ctas">
                    <a href={GET_STARTED_URL} class="btn btn-primary">{"Get started"}</a>
                    <a href={PHONE_HREF} class="btn btn-secondary">{format!("Call: {}", PHONE_DISPLAY)}</a>
                </div>
            </div>
        </div>
    }
}
