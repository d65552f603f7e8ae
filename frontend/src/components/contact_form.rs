use js_sys::Array;
use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

use crate::config;
use crate::state::contact::{run_submission, ContactPayload, ContactStatus};

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form_ref = use_node_ref();
    let status = use_state(|| ContactStatus::Idle);

    let onsubmit = {
        let form_ref = form_ref.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            if status.is_pending() {
                return;
            }

            let payload = collect_fields(&form);
            let status = status.clone();
            spawn_local(async move {
                let endpoint = config::contact_endpoint();
                let outcome = run_submission(
                    |shown| status.set(shown.clone()),
                    endpoint.submit(&payload),
                    || form.reset(),
                )
                .await;
                match outcome {
                    ContactStatus::Failed(err) => error!("Contact message failed: {}", err),
                    _ => info!("Contact message sent ({} fields)", payload.len()),
                }
            });
        })
    };

    html! {
        <form id="contactForm" class="contact__form" ref={form_ref} {onsubmit}>
            <label class="field">
                <span>{"Nombre"}</span>
                <input type="text" name="name" autocomplete="name" required=true />
            </label>
            <label class="field">
                <span>{"Correo"}</span>
                <input type="email" name="email" autocomplete="email" required=true />
            </label>
            <label class="field">
                <span>{"Teléfono"}</span>
                <input type="tel" name="phone" autocomplete="tel" />
            </label>
            <label class="field field--wide">
                <span>{"Mensaje"}</span>
                <textarea name="message" rows="4"></textarea>
            </label>
            <button type="submit" class="btn" disabled={status.is_pending()}>{"Enviar"}</button>
            <p id="formStatus" class="contact__status" role="status" aria-live="polite">
                {status.message()}
            </p>
        </form>
    }
}

/// Every named text field of the form, flattened. File inputs are skipped.
fn collect_fields(form: &HtmlFormElement) -> ContactPayload {
    let Ok(data) = FormData::new_with_form(form) else {
        return ContactPayload::default();
    };
    let Ok(Some(entries)) = js_sys::try_iter(&data) else {
        return ContactPayload::default();
    };
    entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let pair = Array::from(&entry);
            Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
        })
        .collect()
}
