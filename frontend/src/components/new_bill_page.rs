use billed_domain::{FileChange, NewBillError, NewBillState};
use shared::{ExpenseType, Route};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlFormElement, HtmlInputElement};
use yew::prelude::*;

use super::vertical_layout::VerticalLayout;
use crate::services::app_context::AppContext;
use crate::services::forms::{fields, read_new_bill_form, read_proof_file, selected_file};

#[derive(Properties, PartialEq)]
pub struct NewBillPageProps {
    pub context: AppContext,
    pub on_navigate: Callback<Route>,
    pub on_logout: Callback<()>,
    /// Emitted once the bill reached the store
    pub on_bill_created: Callback<()>,
}

#[function_component(NewBillPage)]
pub fn new_bill_page(props: &NewBillPageProps) -> Html {
    let service = use_memo((), {
        let context = props.context.clone();
        move |_| context.new_bill_service()
    });
    let page_state = use_state(NewBillState::default);
    let submit_error = use_state(|| Option::<String>::None);

    let service = match &*service {
        Ok(service) => service.clone(),
        Err(e) => {
            log::error!("Failed to set up the new bill form: {}", e);
            return html! {
                <div data-testid="error-message" class="error-message">{e.to_string()}</div>
            };
        }
    };

    let on_file_change = {
        let service = service.clone();
        let page_state = page_state.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = selected_file(&input) else {
                return;
            };

            // Gate on the name first so a rejected file is never read
            let pick = service.select_file(&file.name());
            page_state.set(service.state());
            let Some(pick) = pick else {
                input.set_value("");
                return;
            };

            let service = service.clone();
            let page_state = page_state.clone();
            spawn_local(async move {
                let proof = match read_proof_file(&file).await {
                    Ok(proof) => proof,
                    Err(e) => {
                        log::error!("{}", e);
                        service.abandon_pick(pick);
                        page_state.set(service.state());
                        return;
                    }
                };

                match service.upload_selected(pick, &proof).await {
                    Ok(FileChange::Uploaded(uploaded)) => {
                        log::info!("Proof available at {}", uploaded.file_url);
                    }
                    Ok(_) => {}
                    Err(e) => log::error!("{}", e),
                }
                page_state.set(service.state());
            });
        })
    };

    let on_submit = {
        let service = service.clone();
        let session = props.context.session.clone();
        let submit_error = submit_error.clone();
        let on_bill_created = props.on_bill_created.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let form: HtmlFormElement = e.target_unchecked_into();
            let form = match read_new_bill_form(&form) {
                Ok(form) => form,
                Err(e) => {
                    log::error!("{}", e);
                    return;
                }
            };

            let service = service.clone();
            let session = session.clone();
            let submit_error = submit_error.clone();
            let on_bill_created = on_bill_created.clone();
            spawn_local(async move {
                match service.handle_submit(&session, form).await {
                    Ok(submitted) => {
                        log::info!("Bill {} submitted", submitted.id);
                        on_bill_created.emit(());
                    }
                    Err(NewBillError::Persistence(e)) => {
                        log::warn!("Bill was not saved: {}", e);
                    }
                    Err(e) => {
                        log::error!("Bill submission refused: {}", e);
                        submit_error.set(Some(e.to_string()));
                    }
                }
            });
        })
    };

    let on_close = {
        let service = service.clone();
        Callback::from(move |_: MouseEvent| service.close_bill())
    };

    html! {
        <div class="layout">
            <VerticalLayout
                route={Route::NewBill}
                on_navigate={props.on_navigate.clone()}
                on_logout={props.on_logout.clone()}
            />
            <div class="content">
                <div class="content-header">
                    <div class="content-title">{"Envoyer une note de frais"}</div>
                    <button type="button" class="close" data-testid="close" aria-label="Close" onclick={on_close}>
                        {"×"}
                    </button>
                </div>

                {if let Some(error) = submit_error.as_ref() {
                    html! { <div class="form-message error">{error}</div> }
                } else { html! {} }}

                <form data-testid="form-new-bill" class="form-newbill-container" onsubmit={on_submit}>
                    <div class="col-md-6">
                        <div class="form-group">
                            <label for={fields::EXPENSE_TYPE}>{"Type de dépense"}</label>
                            <select required={true} name={fields::EXPENSE_TYPE} data-testid={fields::EXPENSE_TYPE}>
                                {for ExpenseType::ALL.iter().map(|t| html! {
                                    <option value={t.as_str()}>{t.as_str()}</option>
                                })}
                            </select>
                        </div>
                        <div class="form-group">
                            <label for={fields::EXPENSE_NAME}>{"Nom de la dépense"}</label>
                            <input type="text" name={fields::EXPENSE_NAME} data-testid={fields::EXPENSE_NAME} placeholder="Vol Paris Londres" />
                        </div>
                        <div class="form-group">
                            <label for={fields::DATE}>{"Date"}</label>
                            <input required={true} type="date" name={fields::DATE} data-testid={fields::DATE} />
                        </div>
                        <div class="form-group">
                            <label for={fields::AMOUNT}>{"Montant TTC"}</label>
                            <input required={true} type="number" name={fields::AMOUNT} data-testid={fields::AMOUNT} placeholder="348" />
                        </div>
                        <div class="form-group">
                            <label for={fields::VAT}>{"TVA"}</label>
                            <div class="vat-inputs">
                                <input type="number" name={fields::VAT} data-testid={fields::VAT} placeholder="70" />
                                <input type="number" name={fields::PCT} data-testid={fields::PCT} placeholder="20" />
                                <span>{"%"}</span>
                            </div>
                        </div>
                    </div>
                    <div class="col-md-6">
                        <div class="form-group">
                            <label for={fields::COMMENTARY}>{"Commentaire"}</label>
                            <textarea name={fields::COMMENTARY} data-testid={fields::COMMENTARY} rows="3" />
                        </div>
                        <div class="form-group">
                            <label for={fields::FILE}>{"Justificatif"}</label>
                            <input
                                required={true}
                                type="file"
                                accept=".jpg,.jpeg,.png"
                                name={fields::FILE}
                                data-testid={fields::FILE}
                                onchange={on_file_change}
                            />
                            {if let Some(error) = page_state.proof.error.as_ref() {
                                html! { <p id="bad-format" data-testid="error" class="error-message">{error}</p> }
                            } else { html! {} }}
                            {if let Some(uploaded) = page_state.uploaded.as_ref() {
                                html! { <p class="proof-uploaded">{format!("Justificatif envoyé : {}", uploaded.file_name)}</p> }
                            } else { html! {} }}
                        </div>
                    </div>
                    <div class="col-md-12">
                        <button type="submit" id="btn-send-bill" class="btn btn-primary">{"Envoyer"}</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
