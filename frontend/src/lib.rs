pub mod config;
pub mod dom;
pub mod error;
pub mod state;
pub mod web;

pub mod behaviors {
    pub mod anchor;
    pub mod counter;
    pub mod exit_intent;
    pub mod faq;
    pub mod header;
    pub mod nav;
    pub mod page;
    pub mod parallax;
    pub mod reveal;
    pub mod stats;
    pub mod sticky_bar;
}

pub mod components {
    pub mod exit_intent_overlay;
    pub mod sticky_contact_bar;
}

pub use error::BindError;
pub use state::SiteState;
