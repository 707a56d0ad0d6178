use billed_domain::{BillsPageState, ProofModal as Proof};
use shared::{FormattedBill, Route};
use yew::prelude::*;

use super::proof_modal::ProofModal;
use super::vertical_layout::VerticalLayout;
use crate::hooks::use_bills::use_bills;
use crate::services::app_context::AppContext;

#[derive(Properties, PartialEq)]
pub struct BillsPageProps {
    pub context: AppContext,
    /// Bumped whenever a bill was created so the list refetches
    pub bills_revision: u32,
    pub on_navigate: Callback<Route>,
    pub on_logout: Callback<()>,
}

#[function_component(BillsPage)]
pub fn bills_page(props: &BillsPageProps) -> Html {
    let service = use_memo((), {
        let context = props.context.clone();
        move |_| context.bills_service()
    });
    let bills = use_bills(&service, props.bills_revision);
    let proof = use_state(|| Option::<Proof>::None);

    let on_new_bill = {
        let service = service.clone();
        Callback::from(move |_: MouseEvent| service.handle_click_new_bill())
    };

    let on_close_proof = {
        let proof = proof.clone();
        Callback::from(move |_| proof.set(None))
    };

    let content = match &bills.state {
        BillsPageState::Loading => html! {
            <div id="loading" class="loading">{"Loading..."}</div>
        },
        BillsPageState::Error(message) => {
            let on_retry = {
                let refresh_bills = bills.refresh_bills.clone();
                Callback::from(move |_: MouseEvent| refresh_bills.emit(()))
            };
            html! {
                <div class="error-page">
                    <div data-testid="error-message" class="error-message">
                        {"Erreur"}
                        <p>{message}</p>
                    </div>
                    <button type="button" class="btn btn-secondary" onclick={on_retry}>{"Réessayer"}</button>
                </div>
            }
        }
        BillsPageState::Loaded(rows) => html! {
            <table id="example" class="table table-striped">
                <thead>
                    <tr>
                        <th>{"Type"}</th>
                        <th>{"Nom"}</th>
                        <th>{"Date"}</th>
                        <th>{"Montant"}</th>
                        <th>{"Statut"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody data-testid="tbody">
                    {for rows.iter().map(|bill| bill_row(bill, &service, &proof))}
                </tbody>
            </table>
        },
    };

    html! {
        <div class="layout">
            <VerticalLayout
                route={Route::Bills}
                on_navigate={props.on_navigate.clone()}
                on_logout={props.on_logout.clone()}
            />
            <div class="content">
                <div class="content-header">
                    <div class="content-title">{"Mes notes de frais"}</div>
                    <button type="button" data-testid="btn-new-bill" class="btn btn-primary" onclick={on_new_bill}>
                        {"Nouvelle note de frais"}
                    </button>
                </div>
                <div id="data-table">
                    {content}
                </div>
            </div>
            <ProofModal proof={(*proof).clone()} on_close={on_close_proof} />
        </div>
    }
}

fn bill_row(
    bill: &FormattedBill,
    service: &billed_domain::BillsService,
    proof: &UseStateHandle<Option<Proof>>,
) -> Html {
    let on_icon_eye = {
        let service = service.clone();
        let proof = proof.clone();
        let bill = bill.clone();
        Callback::from(move |_: MouseEvent| proof.set(Some(service.handle_click_icon_eye(&bill))))
    };

    html! {
        <tr>
            <td>{&bill.bill_type}</td>
            <td>{&bill.name}</td>
            <td>{&bill.formatted_date}</td>
            <td>{&bill.formatted_amount}</td>
            <td>{&bill.status_label}</td>
            <td>
                <div class="icon-actions">
                    <div
                        id="eye"
                        data-testid="icon-eye"
                        data-bill-url={bill.file_url.clone().unwrap_or_default()}
                        onclick={on_icon_eye}
                    >
                        {"👁"}
                    </div>
                </div>
            </td>
        </tr>
    }
}
