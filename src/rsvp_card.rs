use gloo::console::{error, log};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api::{self, LOOKUP_FALLBACK, SUBMIT_FALLBACK};
use crate::config::ApiConfig;
use crate::state::{RequestState, RsvpAction, RsvpState, RsvpStatus};

#[derive(Properties, PartialEq)]
pub struct RsvpCardProps {
    pub api: ApiConfig,
}

#[function_component(RsvpCard)]
pub fn rsvp_card(props: &RsvpCardProps) -> Html {
    let state = use_reducer(RsvpState::default);

    let on_code_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(RsvpAction::EditCode(input.value()));
        })
    };

    // Code lookup
    let on_lookup = {
        let state = state.clone();
        let api = props.api.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(code) = state.lookup_code() else {
                return;
            };
            let epoch = state.epoch;
            state.dispatch(RsvpAction::LookupStarted);

            let state = state.clone();
            let api = api.clone();
            spawn_local(async move {
                match api::validate_code(&api, &code).await {
                    Ok(name) => {
                        log!(format!("Code verified for {name}"));
                        state.dispatch(RsvpAction::LookupSucceeded { epoch, code, name });
                    }
                    Err(e) => {
                        error!("Code lookup failed", e.to_string());
                        state.dispatch(RsvpAction::LookupFailed {
                            epoch,
                            message: e.user_message(LOOKUP_FALLBACK),
                        });
                    }
                }
            });
        })
    };

    let on_status_change = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            state.dispatch(RsvpAction::SelectStatus(RsvpStatus::from_label(&select.value())));
        })
    };

    // RSVP submission
    let on_submit = {
        let state = state.clone();
        let api = props.api.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some((code, status)) = state.submission() else {
                return;
            };
            let epoch = state.epoch;
            state.dispatch(RsvpAction::SubmitStarted);

            let state = state.clone();
            let api = api.clone();
            spawn_local(async move {
                match api::submit_rsvp(&api, &code, status).await {
                    Ok(echo) => {
                        log!(format!("RSVP recorded: {}", status.label()));
                        state.dispatch(RsvpAction::SubmitSucceeded { epoch, echo });
                    }
                    Err(e) => {
                        error!("RSVP submission failed", e.to_string());
                        state.dispatch(RsvpAction::SubmitFailed {
                            epoch,
                            message: e.user_message(SUBMIT_FALLBACK),
                        });
                    }
                }
            });
        })
    };

    let on_reset = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(RsvpAction::Reset))
    };

    let form = if state.shows_status_selector() {
        let greeting = state.greeting().unwrap_or_default();
        let submitting = state.submit == RequestState::Loading;
        let selected = state.selected;
        html! {
          <form class="rsvp-form" onsubmit={on_submit}>
            <div class="greeting">
              <p class="greeting-name">{ greeting }</p>
              <p class="muted small">{ "We're excited to celebrate with you." }</p>
            </div>

            <div class="field">
              <label for="rsvp-status" class="muted small">{ "Select your RSVP" }</label>
              <select id="rsvp-status" required=true onchange={on_status_change}>
                <option value="" disabled=true selected={selected.is_none()}>{ "Choose an option" }</option>
                { for RsvpStatus::ALL.iter().map(|st| html! {
                    <option value={st.label()} selected={selected == Some(*st)}>{ st.label() }</option>
                }) }
              </select>
            </div>

            if let Some(msg) = state.submit_error.clone() {
              <p class="err">{ msg }</p>
            }
            if state.submit == RequestState::Success {
              <p class="ok">{ "Thank you! Your RSVP has been recorded." }</p>
            }

            <div class="btns">
              <button type="submit" class="btn-primary" disabled={!state.can_submit()}>
                { state.submit_button_label() }
              </button>
              <button type="button" class="btn-ghost" onclick={on_reset} disabled={submitting}>
                { "Use a different code" }
              </button>
            </div>
          </form>
        }
    } else {
        let checking = state.lookup == RequestState::Loading;
        html! {
          <form class="rsvp-form" onsubmit={on_lookup}>
            <div class="row">
              <input
                id="rsvp-code"
                value={state.code_input.clone()}
                oninput={on_code_input}
                placeholder="Enter your RSVP code"
                required=true
                disabled={checking}
                autocomplete="off"
              />
              <button type="submit" class="btn-primary" disabled={checking}>
                { state.lookup_button_label() }
              </button>
            </div>
            if let Some(msg) = state.lookup_error.clone() {
              <p class="err">{ msg }</p>
            }
          </form>
        }
    };

    html! {
      <div class="card rsvp-card">
        <h2 class="h2 center">{ "RSVP" }</h2>
        <p class="muted center">{ state.subtitle() }</p>
        { form }
      </div>
    }
}
