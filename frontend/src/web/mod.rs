//! Browser wiring: resolves the page's elements once and attaches every
//! behavior to its events. Listeners live for the whole page, so their
//! closures are leaked with `forget()`.

pub mod element;
pub mod mount;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::{Interval, Timeout};
use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Date, Reflect};
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, MouseEvent,
    NodeList, ScrollBehavior, ScrollToOptions, Window,
};
use yew::Callback;

use crate::behaviors::counter::CounterAnimation;
use crate::behaviors::exit_intent::{ExitIntent, PointerLeave};
use crate::behaviors::faq::Accordion;
use crate::behaviors::header::HeaderScroll;
use crate::behaviors::nav::NavMenu;
use crate::behaviors::parallax::Parallax;
use crate::behaviors::stats::StatsCounter;
use crate::behaviors::sticky_bar::StickyBar;
use crate::behaviors::{anchor, page, reveal};
use crate::components::exit_intent_overlay::{self, ExitIntentOverlay, ExitIntentOverlayProps};
use crate::components::sticky_contact_bar::{self, StickyContactBar};
use crate::config::{
    COUNTER_TICK_MS, DWELL_TIMER_DELAY_MS, NAV_BREAKPOINT_QUERY, REDUCED_MOTION_QUERY,
    REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, STATS_THRESHOLD,
};
use crate::dom::{Intersection, SessionStore};
use crate::error::{BindError, BindResult};
use crate::state::SiteState;

use element::NoStorage;
use mount::YewMount;

type SharedState = Rc<RefCell<SiteState>>;
type ExitPopup = ExitIntent<YewMount<ExitIntentOverlay>>;

/// Binds every behavior to the current document.
///
/// Only a missing window or document is fatal; a behavior that fails to bind
/// is logged and skipped.
pub fn start() -> BindResult {
    let window = web_sys::window().ok_or(BindError::NoWindow)?;
    let document = window.document().ok_or(BindError::NoDocument)?;
    let state: SharedState = Rc::new(RefCell::new(SiteState::new()));

    page::stamp_year(document.get_element_by_id("year").as_ref(), page::current_year());

    let nav = NavMenu::bind(
        document.get_element_by_id("mobileToggle"),
        document.get_element_by_id("nav"),
    );

    report("navigation", bind_nav(&window, nav.as_ref()));
    report("header", bind_header(&window, &document, &state));
    report("parallax", bind_parallax(&window, &document));
    report("stats", bind_stats(&document, &state));
    report("reveal", bind_reveal(&document));
    report("anchors", bind_anchors(&window, &document, nav));
    report("loaded flag", bind_loaded(&window, &document));
    report("faq", bind_faq(&document));
    report("exit intent", bind_exit_intent(&window, &document, &state));
    report("sticky bar", bind_sticky_bar(&window, &document));

    info!("site behaviors ready");
    Ok(())
}

fn report(behavior: &str, result: BindResult) {
    match result {
        Ok(()) => debug!("{} bound", behavior),
        Err(err) => warn!("{} disabled: {}", behavior, err),
    }
}

fn listen(
    target: &EventTarget,
    event: &str,
    passive: bool,
    handler: impl FnMut(Event) + 'static,
) -> BindResult {
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if passive {
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
    } else {
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    }
    callback.forget();
    Ok(())
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

fn viewport_width(window: &Window) -> Option<f64> {
    window.inner_width().ok().and_then(|v| v.as_f64())
}

fn viewport(window: &Window) -> (f64, f64) {
    let width = viewport_width(window).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

fn intersection_observer(
    threshold: f64,
    root_margin: Option<&str>,
    mut on_entries: impl FnMut(Vec<Intersection<Element>>, &IntersectionObserver) + 'static,
) -> BindResult<IntersectionObserver> {
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let entries: Vec<Intersection<Element>> = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .map(|entry| Intersection {
                target: entry.target(),
                is_intersecting: entry.is_intersecting(),
            })
            .collect();
        on_entries(entries, &observer);
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();
    Ok(observer)
}

fn bind_nav(window: &Window, menu: Option<&NavMenu<Element>>) -> BindResult {
    let Some(menu) = menu else {
        debug!("no #mobileToggle/#nav on this page");
        return Ok(());
    };

    {
        let button = menu.toggle_button().clone();
        let menu = menu.clone();
        listen(&button, "click", false, move |_| menu.toggle())?;
    }

    for link in elements(menu.nav().query_selector_all(".nav-link")?) {
        let menu = menu.clone();
        listen(&link, "click", false, move |_| menu.close())?;
    }

    let Some(query) = window.match_media(NAV_BREAKPOINT_QUERY)? else {
        return Ok(());
    };
    let sync = {
        let menu = menu.clone();
        let query = query.clone();
        move |_: Event| menu.on_breakpoint_change(query.matches())
    };
    // Older Safari only has the deprecated addListener on MediaQueryList.
    if Reflect::has(&query, &JsValue::from_str("addEventListener")).unwrap_or(false) {
        listen(&query, "change", false, sync)?;
    } else {
        let callback = Closure::wrap(Box::new(sync) as Box<dyn FnMut(Event)>);
        query.add_listener_with_opt_callback(Some(callback.as_ref().unchecked_ref()))?;
        callback.forget();
    }
    Ok(())
}

fn bind_header(window: &Window, document: &Document, state: &SharedState) -> BindResult {
    let Some(header) = HeaderScroll::bind(document.query_selector("header")?) else {
        return Ok(());
    };
    let win = window.clone();
    let state = state.clone();
    listen(window, "scroll", true, move |_| {
        header.on_scroll(&mut state.borrow_mut(), scroll_y(&win));
    })
}

fn bind_parallax(window: &Window, document: &Document) -> BindResult {
    let reduced_motion = window
        .match_media(REDUCED_MOTION_QUERY)?
        .map(|query| query.matches())
        .unwrap_or(false);
    let Some(parallax) = Parallax::bind(document.get_element_by_id("parallax"), reduced_motion)
    else {
        return Ok(());
    };
    let win = window.clone();
    listen(window, "mousemove", true, move |event| {
        if let Some(e) = event.dyn_ref::<MouseEvent>() {
            let (width, height) = viewport(&win);
            parallax.on_pointer_move(f64::from(e.client_x()), f64::from(e.client_y()), width, height);
        }
    })
}

fn bind_stats(document: &Document, state: &SharedState) -> BindResult {
    let stats = StatsCounter::new(elements(
        document.query_selector_all(".stat-number[data-target]")?,
    ));
    if stats.is_empty() {
        return Ok(());
    }
    let stats = Rc::new(stats);

    let observer = {
        let stats = stats.clone();
        let state = state.clone();
        intersection_observer(STATS_THRESHOLD, None, move |entries, _| {
            let started = stats.on_intersections(&mut state.borrow_mut(), &entries);
            for (element, animation) in started {
                run_counter(element, animation);
            }
        })?
    };
    stats.observe(&observer);
    Ok(())
}

fn run_counter(element: Element, mut animation: CounterAnimation) {
    let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let handle_clone = handle.clone();
    let interval = Interval::new(COUNTER_TICK_MS, move || {
        if animation.tick_into(&element) {
            // Dropping the interval clears it.
            let finished = handle_clone.borrow_mut().take();
            drop(finished);
        }
    });
    *handle.borrow_mut() = Some(interval);
}

fn bind_reveal(document: &Document) -> BindResult {
    let sections = elements(document.query_selector_all(".reveal")?);
    if sections.is_empty() {
        return Ok(());
    }
    let observer = intersection_observer(
        REVEAL_THRESHOLD,
        Some(REVEAL_ROOT_MARGIN),
        |entries, observer| reveal::on_intersections(observer, &entries),
    )?;
    let watched = reveal::watch(&sections, &observer);
    debug!("watching {} reveal sections", watched);
    Ok(())
}

fn bind_anchors(window: &Window, document: &Document, nav: Option<NavMenu<Element>>) -> BindResult {
    for link in elements(document.query_selector_all("a[href^=\"#\"]")?) {
        let win = window.clone();
        let doc = document.clone();
        let nav = nav.clone();
        let anchor_el = link.clone();
        listen(&link, "click", false, move |event| {
            let Some(href) = anchor_el.get_attribute("href") else {
                return;
            };
            let inline = anchor_el.get_attribute("onclick");
            let Some(selector) = anchor::scroll_selector(&href, inline.as_deref()) else {
                return;
            };
            event.prevent_default();

            let Ok(Some(target)) = doc.query_selector(selector) else {
                return;
            };
            let options = ScrollToOptions::new();
            options.set_top(anchor::scroll_top(
                target.get_bounding_client_rect().top(),
                scroll_y(&win),
            ));
            options.set_behavior(ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&options);

            if let Some(nav) = &nav {
                nav.close_if_open();
            }
        })?;
    }
    Ok(())
}

fn bind_loaded(window: &Window, document: &Document) -> BindResult {
    let body: Element = document.body().ok_or(BindError::NoBody)?.into();
    // The module usually starts after `load` has already fired.
    if document.ready_state() == "complete" {
        page::mark_loaded(&body);
        return Ok(());
    }
    listen(window, "load", false, move |_| page::mark_loaded(&body))
}

fn bind_faq(document: &Document) -> BindResult {
    let pairs: Vec<(Element, Element)> = elements(document.query_selector_all(".faq-question")?)
        .into_iter()
        .filter_map(|question| {
            let item = question.parent_element()?;
            Some((question, item))
        })
        .collect();
    if pairs.is_empty() {
        return Ok(());
    }

    let accordion = Rc::new(Accordion::new(pairs.clone()));
    for (index, (question, _)) in pairs.iter().enumerate() {
        let accordion = accordion.clone();
        listen(question, "click", false, move |_| accordion.click(index))?;
    }
    Ok(())
}

fn bind_exit_intent(window: &Window, document: &Document, state: &SharedState) -> BindResult {
    {
        let state = state.clone();
        Timeout::new(DWELL_TIMER_DELAY_MS, move || {
            state.borrow_mut().start_dwell(Date::now());
        })
        .forget();
    }

    let popup: Rc<RefCell<ExitPopup>> = Rc::new_cyclic(|weak: &Weak<RefCell<ExitPopup>>| {
        let weak = weak.clone();
        let overlay = YewMount::new(
            document.clone(),
            exit_intent_overlay::HOST_ID,
            None,
            move || ExitIntentOverlayProps {
                on_close: dismiss_callback(weak.clone()),
            },
        );
        RefCell::new(ExitIntent::new(overlay))
    });

    let session: Box<dyn SessionStore> = match window.session_storage() {
        Ok(Some(storage)) => Box::new(storage),
        _ => {
            warn!("session storage unavailable, exit intent limited to this page view");
            Box::new(NoStorage)
        }
    };

    let win = window.clone();
    let state = state.clone();
    listen(document, "mouseleave", false, move |event| {
        let Some(e) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let leave = PointerLeave {
            client_y: f64::from(e.client_y()),
            now_ms: Date::now(),
        };
        let path = win.location().pathname().unwrap_or_default();
        popup
            .borrow_mut()
            .on_pointer_leave(&mut state.borrow_mut(), leave, &path, &*session);
    })
}

fn dismiss_callback(popup: Weak<RefCell<ExitPopup>>) -> Callback<()> {
    Callback::from(move |_| {
        let popup = popup.clone();
        // Destroy the overlay app after its own click handler has returned.
        Timeout::new(0, move || {
            if let Some(popup) = popup.upgrade() {
                popup.borrow_mut().dismiss();
            }
        })
        .forget();
    })
}

fn bind_sticky_bar(window: &Window, document: &Document) -> BindResult {
    let width = viewport_width(window);
    let bar = YewMount::<StickyContactBar>::new(
        document.clone(),
        sticky_contact_bar::HOST_ID,
        Some(sticky_contact_bar::HOST_CLASS),
        || (),
    );
    let Some(mut sticky) = StickyBar::bind(width, bar) else {
        debug!("viewport width {:?}, no sticky contact bar", width);
        return Ok(());
    };
    let win = window.clone();
    listen(window, "scroll", true, move |_| sticky.on_scroll(scroll_y(&win)))
}
