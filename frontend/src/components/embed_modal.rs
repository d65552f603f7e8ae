use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement};
use yew::prelude::*;
use yew_hooks::prelude::use_event_with_window;

use crate::state::modal_session::{resolve_title, ModalSession};

type Session = Rc<RefCell<ModalSession<HtmlElement>>>;

const BODY_OPEN_CLASS: &str = "modal-open";

/// Dialog hosting an external page in an iframe. Any
/// `<a data-modal-url="...">` anywhere on the page opens it, so links can be
/// added without wiring them up one by one.
#[function_component(EmbedModal)]
pub fn embed_modal() -> Html {
    let session: Session = use_mut_ref(ModalSession::default);
    let force_update = use_force_update();
    let close_ref = use_node_ref();

    let close = {
        let session = session.clone();
        let force_update = force_update.clone();
        Rc::new(move || {
            let restore = close_session(&session);
            force_update.force_update();
            if let Some(element) = restore {
                let _ = element.focus();
            }
        })
    };

    // Click delegation for modal links.
    {
        let session = session.clone();
        let force_update = force_update.clone();
        use_event_with_window("click", move |e: MouseEvent| {
            let Some(link) = modal_link(&e) else {
                return;
            };
            let Some(url) = link.get_attribute("data-modal-url").filter(|url| !url.is_empty()) else {
                return;
            };
            e.prevent_default();

            let title = resolve_title(
                link.get_attribute("data-modal-title").as_deref(),
                link.text_content().as_deref(),
            );
            let focused = window()
                .and_then(|w| w.document())
                .and_then(|d| d.active_element())
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());

            info!("Opening embed modal: {} ({})", title, url);
            session.borrow_mut().open(url, title, focused);
            force_update.force_update();
        });
    }

    {
        let session = session.clone();
        let close = close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" && session.borrow().is_open() {
                close();
            }
        });
    }

    let is_open = session.borrow().is_open();

    // Page scroll lock and focus entry follow the rendered state.
    {
        let close_ref = close_ref.clone();
        use_effect_with_deps(
            move |is_open: &bool| {
                set_body_open(*is_open);
                if *is_open {
                    if let Some(button) = close_ref.cast::<HtmlElement>() {
                        let _ = button.focus();
                    }
                }
                || ()
            },
            is_open,
        );
    }

    let on_close = {
        let close = close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            close();
        })
    };

    let current = session.borrow();
    let title = current.title().to_string();
    let frame_src = current.frame_src().to_string();
    let new_tab_href = current.url().unwrap_or("#").to_string();
    drop(current);

    html! {
        <div
            id="embedModal"
            class={classes!("modal", is_open.then(|| "is-open"))}
            role="dialog"
            aria-modal="true"
            aria-labelledby="embedModalTitle"
            aria-hidden={(!is_open).to_string()}
        >
            <div class="modal__backdrop" data-modal-close="" onclick={on_close.clone()}></div>
            <div class="modal__dialog" role="document">
                <header class="modal__header">
                    <h2 id="embedModalTitle" class="modal__title">{title.clone()}</h2>
                    <a class="modal__newtab" href={new_tab_href} target="_blank" rel="noopener noreferrer">
                        {"Abrir en otra pestaña"}
                    </a>
                    <button
                        type="button"
                        class="modal__close"
                        data-modal-close=""
                        aria-label="Cerrar"
                        ref={close_ref}
                        onclick={on_close}
                    >
                        {"×"}
                    </button>
                </header>
                <iframe class="modal__frame" src={frame_src} title={title} loading="lazy" allow="fullscreen"></iframe>
            </div>
        </div>
    }
}

/// The nearest `a[data-modal-url]` around the click target, if any.
fn modal_link(e: &MouseEvent) -> Option<Element> {
    let target = e.target()?.dyn_into::<Element>().ok()?;
    target.closest("a[data-modal-url]").ok().flatten()
}

fn close_session(session: &Session) -> Option<HtmlElement> {
    let mut session = session.borrow_mut();
    if !session.is_open() {
        return None;
    }
    debug!("Closing embed modal");
    session.close()
}

fn set_body_open(open: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let classes = body.class_list();
    let _ = if open {
        classes.add_1(BODY_OPEN_CLASS)
    } else {
        classes.remove_1(BODY_OPEN_CLASS)
    };
}
