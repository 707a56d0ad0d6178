pub mod bills_page;
pub mod login_page;
pub mod new_bill_page;
pub mod proof_modal;
pub mod vertical_layout;

pub use bills_page::BillsPage;
pub use login_page::LoginPage;
pub use new_bill_page::NewBillPage;
