use log::warn;
use web_sys::Document;
use yew::html::BaseComponent;
use yew::{AppHandle, Renderer};

use crate::dom::Mount;
use crate::error::{BindError, BindResult};

/// Renders a Yew component into a `<div>` appended to `<body>`, and tears
/// both down again on [`Mount::unmount`].
pub struct YewMount<C: BaseComponent> {
    document: Document,
    host_id: &'static str,
    host_class: Option<&'static str>,
    props: Box<dyn Fn() -> C::Properties>,
    app: Option<AppHandle<C>>,
}

impl<C: BaseComponent> YewMount<C> {
    pub fn new(
        document: Document,
        host_id: &'static str,
        host_class: Option<&'static str>,
        props: impl Fn() -> C::Properties + 'static,
    ) -> Self {
        Self {
            document,
            host_id,
            host_class,
            props: Box::new(props),
            app: None,
        }
    }

    fn try_mount(&mut self) -> BindResult {
        let body = self.document.body().ok_or(BindError::NoBody)?;
        let host = self.document.create_element("div")?;
        host.set_id(self.host_id);
        if let Some(class) = self.host_class {
            host.set_class_name(class);
        }
        body.append_child(&host)?;
        self.app = Some(Renderer::<C>::with_root_and_props(host, (self.props)()).render());
        Ok(())
    }
}

impl<C: BaseComponent> Mount for YewMount<C> {
    /// Looks the host up by id, like the page would.
    fn is_mounted(&self) -> bool {
        self.document.get_element_by_id(self.host_id).is_some()
    }

    fn mount(&mut self) {
        if let Err(err) = self.try_mount() {
            warn!("could not mount #{}: {}", self.host_id, err);
        }
    }

    fn unmount(&mut self) {
        if let Some(app) = self.app.take() {
            app.destroy();
        }
        if let Some(host) = self.document.get_element_by_id(self.host_id) {
            host.remove();
        }
    }
}
