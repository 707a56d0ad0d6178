use billed_domain::storage::fixtures::sample_bills;
use billed_domain::{
    BillStorage, BillsService, FileStorage, InMemoryBillStore, InMemoryFileStorage, NewBillError,
    NewBillService, SessionService,
};
use log::info;
use shared::{NewBillConfig, Route};
use std::rc::Rc;
use yew::Callback;

use super::api::ApiClient;
use super::config::AppConfig;
use super::navigation::HashNavigator;
use super::session::BrowserSessionStore;

/// Collaborators shared by every page
#[derive(Clone)]
pub struct AppContext {
    pub bills: Rc<dyn BillStorage>,
    pub files: Rc<dyn FileStorage>,
    pub session: SessionService,
    pub navigator: Rc<HashNavigator>,
    pub new_bill_config: NewBillConfig,
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.bills, &other.bills)
            && Rc::ptr_eq(&self.files, &other.files)
            && Rc::ptr_eq(&self.navigator, &other.navigator)
    }
}

impl AppContext {
    pub fn new(config: &AppConfig, initial_route: Route, on_navigate: Callback<Route>) -> Self {
        let (bills, files): (Rc<dyn BillStorage>, Rc<dyn FileStorage>) = match &config.store_url {
            Some(url) => {
                info!("Using document store at {}", url);
                let client = Rc::new(ApiClient::with_base_url(url.clone()));
                let bills: Rc<dyn BillStorage> = client.clone();
                let files: Rc<dyn FileStorage> = client;
                (bills, files)
            }
            None => {
                info!("No document store configured, using in-memory demo data");
                let bills: Rc<dyn BillStorage> =
                    Rc::new(InMemoryBillStore::with_bills(sample_bills()));
                let files: Rc<dyn FileStorage> = Rc::new(InMemoryFileStorage::new());
                (bills, files)
            }
        };

        Self {
            bills,
            files,
            session: SessionService::new(Rc::new(BrowserSessionStore)),
            navigator: Rc::new(HashNavigator::new(initial_route, on_navigate)),
            new_bill_config: config.new_bill.clone(),
        }
    }

    pub fn bills_service(&self) -> BillsService {
        BillsService::new(self.bills.clone(), self.navigator.clone())
    }

    pub fn new_bill_service(&self) -> Result<NewBillService, NewBillError> {
        NewBillService::with_config(
            self.bills.clone(),
            self.files.clone(),
            self.navigator.clone(),
            self.new_bill_config.clone(),
        )
    }
}
