use billed_domain::ProofModal as Proof;
use yew::prelude::*;

/// Rendered width of the modal body, in pixels
const MODAL_WIDTH: f64 = 800.0;

#[derive(Properties, PartialEq)]
pub struct ProofModalProps {
    pub proof: Option<Proof>,
    pub on_close: Callback<()>,
}

#[function_component(ProofModal)]
pub fn proof_modal(props: &ProofModalProps) -> Html {
    let Some(proof) = props.proof.as_ref() else {
        return html! {};
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div id="modaleFile" class="modal" onclick={on_modal_click} style={format!("width: {}px", MODAL_WIDTH)}>
                <div class="modal-header">
                    <h5 class="modal-title">{"Justificatif"}</h5>
                    <button type="button" class="close" aria-label="Close" onclick={on_close_click}>
                        {"×"}
                    </button>
                </div>
                <div class="modal-body">
                    {match &proof.file_url {
                        Some(url) => html! {
                            <div class="bill-proof-container">
                                <img
                                    width={Proof::image_width(MODAL_WIDTH).to_string()}
                                    src={url.clone()}
                                    alt={proof.file_name.clone().unwrap_or_else(|| "Bill".to_string())}
                                />
                            </div>
                        },
                        None => html! {
                            <p class="bill-proof-missing">{"Aucun justificatif pour cette note de frais"}</p>
                        },
                    }}
                </div>
            </div>
        </div>
    }
}
