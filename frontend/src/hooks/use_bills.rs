use billed_domain::{BillsPageState, BillsService};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub struct UseBillsResult {
    pub state: BillsPageState,
    pub refresh_bills: Callback<()>,
}

/// Bills page data. Fetches on mount and whenever `bills_revision` changes.
#[hook]
pub fn use_bills(service: &BillsService, bills_revision: u32) -> UseBillsResult {
    let state = use_state(|| BillsPageState::Loading);

    let refresh_bills = {
        let service = service.clone();
        let state = state.clone();

        use_callback((), move |_, _| {
            let service = service.clone();
            let state = state.clone();

            spawn_local(async move {
                state.set(BillsPageState::Loading);
                let result = service.get_bills().await;
                if let Err(e) = &result {
                    gloo::console::error!("Failed to fetch bills:", e.to_string());
                }
                state.set(BillsPageState::from_result(result));
            });
        })
    };

    use_effect_with(bills_revision, {
        let refresh_bills = refresh_bills.clone();
        move |_| {
            refresh_bills.emit(());
            || ()
        }
    });

    UseBillsResult {
        state: (*state).clone(),
        refresh_bills,
    }
}
