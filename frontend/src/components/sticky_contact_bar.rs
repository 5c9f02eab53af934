use yew::prelude::*;

use crate::config::{GET_STARTED_URL, PHONE_HREF};

pub const HOST_ID: &str = "stickyContactBar";
pub const HOST_CLASS: &str = "sticky-contact-bar";

#[function_component(StickyContactBar)]
pub fn sticky_contact_bar() -> Html {
    html! {
        <>
            <a href={PHONE_HREF} class="sticky-contact-btn">
                <i class="fas fa-phone"></i>
                <span>{"Call Now"}</span>
            </a>
            <a href={GET_STARTED_URL} class="sticky-contact-btn sticky-contact-btn-primary">
                <i class="fas fa-rocket"></i>
                <span>{"Get Started"}</span>
            </a>
        </>
    }
}
