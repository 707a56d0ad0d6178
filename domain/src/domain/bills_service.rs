//! Bills listing for the employee bills page.

use log::{info, warn};
use shared::{format_date, Bill, FormattedBill, Route};
use std::rc::Rc;

use crate::domain::navigation::Navigator;
use crate::storage::BillStorage;

#[derive(Debug, thiserror::Error)]
pub enum BillsError {
    #[error("{0}")]
    Fetch(#[source] anyhow::Error),
}

/// What the bills page currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum BillsPageState {
    Loading,
    Error(String),
    Loaded(Vec<FormattedBill>),
}

impl BillsPageState {
    pub fn from_result(result: Result<Vec<FormattedBill>, BillsError>) -> Self {
        match result {
            Ok(bills) => BillsPageState::Loaded(bills),
            Err(e) => BillsPageState::Error(e.to_string()),
        }
    }

    /// Number of eye icons the page renders
    pub fn proof_trigger_count(&self) -> usize {
        match self {
            BillsPageState::Loaded(bills) => bills.len(),
            _ => 0,
        }
    }
}

/// Proof shown in the modal opened by an eye icon
#[derive(Debug, Clone, PartialEq)]
pub struct ProofModal {
    pub file_url: Option<String>,
    pub file_name: Option<String>,
}

impl ProofModal {
    /// Fraction of the modal width given to the proof image
    pub const IMAGE_WIDTH_RATIO: f64 = 0.5;

    pub fn image_width(modal_width: f64) -> u32 {
        (modal_width * Self::IMAGE_WIDTH_RATIO).floor().max(0.0) as u32
    }
}

/// Most recent first. Dates are compared as raw strings, which orders YYYY-MM-DD correctly.
pub fn sort_bills_antichrono(bills: &mut [Bill]) {
    bills.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Format bills for the table. Malformed dates are kept raw.
pub fn format_bills(bills: &[Bill]) -> Vec<FormattedBill> {
    bills
        .iter()
        .map(|bill| {
            let formatted_date = match format_date(&bill.date) {
                Ok(date) => date,
                Err(e) => {
                    warn!("Keeping raw date {:?} for bill {:?}: {}", bill.date, bill.id, e);
                    bill.date.clone()
                }
            };
            FormattedBill::from_bill(bill, formatted_date)
        })
        .collect()
}

/// Controller behind the bills page
#[derive(Clone)]
pub struct BillsService {
    bills: Rc<dyn BillStorage>,
    navigator: Rc<dyn Navigator>,
}

impl BillsService {
    pub fn new(bills: Rc<dyn BillStorage>, navigator: Rc<dyn Navigator>) -> Self {
        Self { bills, navigator }
    }

    /// Fetch every bill, most recent first, formatted for display
    pub async fn get_bills(&self) -> Result<Vec<FormattedBill>, BillsError> {
        let mut bills = self.bills.list_bills().await.map_err(|e| {
            warn!("Failed to fetch bills: {}", e);
            BillsError::Fetch(e)
        })?;
        info!("Fetched {} bills", bills.len());

        sort_bills_antichrono(&mut bills);
        Ok(format_bills(&bills))
    }

    pub fn handle_click_new_bill(&self) {
        self.navigator.navigate(Route::NewBill);
    }

    pub fn handle_click_icon_eye(&self, bill: &FormattedBill) -> ProofModal {
        ProofModal {
            file_url: bill.file_url.clone(),
            file_name: bill.file_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::fixtures::sample_bills;
    use crate::storage::InMemoryBillStore;
    use crate::test_utils::{FailingBillStore, RecordingNavigator};

    fn service_with(bills: Rc<dyn BillStorage>) -> (BillsService, Rc<RecordingNavigator>) {
        let navigator = Rc::new(RecordingNavigator::new(Route::Bills));
        (BillsService::new(bills, navigator.clone()), navigator)
    }

    #[tokio::test]
    async fn test_bills_are_ordered_most_recent_first() {
        let (service, _navigator) =
            service_with(Rc::new(InMemoryBillStore::with_bills(sample_bills())));

        let bills = service.get_bills().await.expect("Failed to get bills");

        let dates: Vec<&str> = bills.iter().map(|b| b.raw_date.as_str()).collect();
        assert_eq!(dates, vec!["2004-04-04", "2003-03-03", "2002-02-02", "2001-01-01"]);
        assert!(dates.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(bills[0].formatted_date, "4 Avr. 04");
    }

    #[tokio::test]
    async fn test_malformed_date_is_displayed_raw() {
        let mut bills = sample_bills();
        bills[0].date = "not a date".to_string();
        let (service, _navigator) = service_with(Rc::new(InMemoryBillStore::with_bills(bills)));

        let formatted = service.get_bills().await.expect("Failed to get bills");

        assert!(formatted.iter().any(|b| b.formatted_date == "not a date"));
        assert_eq!(formatted.len(), 4);
    }

    #[tokio::test]
    async fn test_status_labels() {
        let (service, _navigator) =
            service_with(Rc::new(InMemoryBillStore::with_bills(sample_bills())));

        let bills = service.get_bills().await.unwrap();

        let labels: Vec<&str> = bills.iter().map(|b| b.status_label.as_str()).collect();
        assert_eq!(labels, vec!["En attente", "Accepté", "Refusé", "Refusé"]);
    }

    #[tokio::test]
    async fn test_fetch_failure_becomes_error_state() {
        let (service, _navigator) = service_with(Rc::new(FailingBillStore::new("Erreur 404")));

        let state = BillsPageState::from_result(service.get_bills().await);

        assert_eq!(state, BillsPageState::Error("Erreur 404".to_string()));
        assert_eq!(state.proof_trigger_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_list_has_no_proof_triggers() {
        let (service, _navigator) = service_with(Rc::new(InMemoryBillStore::new()));

        let state = BillsPageState::from_result(service.get_bills().await);

        assert_eq!(state, BillsPageState::Loaded(vec![]));
        assert_eq!(state.proof_trigger_count(), 0);
    }

    #[test]
    fn test_new_bill_button_navigates() {
        let (service, navigator) = service_with(Rc::new(InMemoryBillStore::new()));
        service.handle_click_new_bill();
        assert_eq!(navigator.routes(), vec![Route::NewBill]);
    }

    #[test]
    fn test_icon_eye_opens_proof() {
        let (service, _navigator) = service_with(Rc::new(InMemoryBillStore::new()));
        let bill = &format_bills(&sample_bills())[0];

        let modal = service.handle_click_icon_eye(bill);

        assert_eq!(modal.file_url, bill.file_url);
        assert_eq!(ProofModal::image_width(801.0), 400);
    }
}
