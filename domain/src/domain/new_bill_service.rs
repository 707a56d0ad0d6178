//! New bill domain logic.
//!
//! The new bill page is the only place where Billed creates data. This
//! service owns the whole flow behind it:
//!
//! - **File change**: gate the picked proof on its extension, then delegate
//!   the upload to file storage and keep the resulting URL. Each accepted
//!   pick gets a [`ProofPick`] ticket; an upload finishing after a newer pick
//!   is dropped
//! - **Submit**: turn the raw form values into a [`Bill`], navigate back to
//!   the bills list, then persist the bill
//! - **Close**: navigate back to the bills list
//!
//! The upload and the submission are independent. A form submitted while the
//! upload is still running is persisted without `fileUrl`/`fileName` unless
//! [`NewBillConfig::require_upload_before_submit`] is set.

use log::{debug, error, info, warn};
use shared::{parse_int, Bill, BillStatus, NewBillConfig, NewBillForm, Route, UploadedProof, User};
use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::file_validation::{FileValidator, ProofSelection};
use crate::domain::navigation::Navigator;
use crate::domain::session_service::{SessionError, SessionService};
use crate::storage::{BillStorage, FileStorage, ProofFile};

#[derive(Debug, thiserror::Error)]
pub enum NewBillError {
    #[error("Invalid proof extension list: {0}")]
    InvalidConfig(#[from] regex::Error),
    #[error("Failed to upload proof {file_name}: {source}")]
    Upload {
        file_name: String,
        #[source]
        source: anyhow::Error,
    },
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("The proof upload has not completed yet")]
    UploadPending,
    #[error("Failed to create bill: {0}")]
    Persistence(#[source] anyhow::Error),
}

/// Mutable state of one new bill page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewBillState {
    pub proof: ProofSelection,
    /// Set once an upload resolved; stays in place if a later pick is rejected
    pub uploaded: Option<UploadedProof>,
    /// True while the upload of the latest accepted pick is running
    pub uploading: bool,
    /// Number of picks so far
    pub picks: u64,
}

/// Ticket for an accepted pick, handed back when its upload completes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProofPick(u64);

/// Outcome of a file change
#[derive(Debug, Clone, PartialEq)]
pub enum FileChange {
    Uploaded(UploadedProof),
    Rejected { message: String },
    /// Another file was picked while this one was uploading
    Superseded,
}

/// A bill that reached the store
#[derive(Debug, Clone, PartialEq)]
pub struct SubmittedBill {
    pub id: String,
    pub bill: Bill,
}

/// Controller behind the new bill page. Clones share the same page state.
#[derive(Clone)]
pub struct NewBillService {
    bills: Rc<dyn BillStorage>,
    files: Rc<dyn FileStorage>,
    navigator: Rc<dyn Navigator>,
    validator: FileValidator,
    config: NewBillConfig,
    state: Rc<RefCell<NewBillState>>,
}

impl NewBillService {
    pub fn new(
        bills: Rc<dyn BillStorage>,
        files: Rc<dyn FileStorage>,
        navigator: Rc<dyn Navigator>,
    ) -> Result<Self, NewBillError> {
        Self::with_config(bills, files, navigator, NewBillConfig::default())
    }

    pub fn with_config(
        bills: Rc<dyn BillStorage>,
        files: Rc<dyn FileStorage>,
        navigator: Rc<dyn Navigator>,
        config: NewBillConfig,
    ) -> Result<Self, NewBillError> {
        let validator = FileValidator::new(&config.accepted_extensions)?;
        Ok(Self {
            bills,
            files,
            navigator,
            validator,
            config,
            state: Rc::new(RefCell::new(NewBillState::default())),
        })
    }

    pub fn config(&self) -> &NewBillConfig {
        &self.config
    }

    /// Snapshot of the page state
    pub fn state(&self) -> NewBillState {
        self.state.borrow().clone()
    }

    /// Handle a new pick in the file input: gate it, then upload it.
    pub async fn handle_change_file(&self, file: ProofFile) -> Result<FileChange, NewBillError> {
        match self.select_file(&file.name) {
            Some(pick) => self.upload_selected(pick, &file).await,
            None => Ok(FileChange::Rejected {
                message: self.config.invalid_file_message.clone(),
            }),
        }
    }

    /// Gate a picked file on its name alone.
    ///
    /// A rejected pick clears the selection and shows the error message.
    /// An accepted pick clears any error and returns the ticket to pass to
    /// [`NewBillService::upload_selected`]. Either way the pick supersedes
    /// any upload still running.
    pub fn select_file(&self, file_name: &str) -> Option<ProofPick> {
        let mut state = self.state.borrow_mut();
        state.picks += 1;
        let accepted = self
            .validator
            .apply(&mut state.proof, file_name, &self.config.invalid_file_message);
        state.uploading = accepted;
        accepted.then_some(ProofPick(state.picks))
    }

    /// Upload the file behind `pick` and record it, unless a newer pick came in meanwhile.
    pub async fn upload_selected(
        &self,
        pick: ProofPick,
        file: &ProofFile,
    ) -> Result<FileChange, NewBillError> {
        let result = self.upload_proof(file).await;

        let mut state = self.state.borrow_mut();
        if !Self::is_latest(&state, pick) {
            debug!("Dropping upload of {}, a newer file was picked", file.name);
            return Ok(FileChange::Superseded);
        }
        state.uploading = false;
        let uploaded = result?;
        state.uploaded = Some(uploaded.clone());
        Ok(FileChange::Uploaded(uploaded))
    }

    /// Give up on `pick` without uploading, e.g. when its content could not be read
    pub fn abandon_pick(&self, pick: ProofPick) {
        let mut state = self.state.borrow_mut();
        if Self::is_latest(&state, pick) {
            state.uploading = false;
        }
    }

    fn is_latest(state: &NewBillState, pick: ProofPick) -> bool {
        state.picks == pick.0
    }

    /// Store the proof under `<proof_directory>/<file name>` and resolve its URL.
    /// No validation happens here.
    pub async fn upload_proof(&self, file: &ProofFile) -> Result<UploadedProof, NewBillError> {
        let path = format!("{}/{}", self.config.proof_directory, file.name);
        info!("Uploading proof to {}", path);

        match self.files.put(&path, file).await {
            Ok(file_url) => Ok(UploadedProof {
                file_url,
                file_name: file.name.clone(),
            }),
            Err(e) => {
                error!("Proof upload failed for {}: {}", path, e);
                Err(NewBillError::Upload {
                    file_name: file.name.clone(),
                    source: e,
                })
            }
        }
    }

    /// Assemble the bill record from the form values and the current upload.
    pub fn build_bill(&self, user: &User, form: &NewBillForm) -> Result<Bill, NewBillError> {
        let uploaded = self.state.borrow().uploaded.clone();
        if uploaded.is_none() && self.config.require_upload_before_submit {
            return Err(NewBillError::UploadPending);
        }

        // parseInt(...) || default: zero falls back too
        let pct = match parse_int(&form.pct) {
            Some(pct) if pct != 0 => pct,
            _ => self.config.default_pct,
        };

        Ok(Bill {
            id: None,
            email: user.email.clone().unwrap_or_default(),
            bill_type: form.expense_type.clone(),
            name: form.expense_name.clone(),
            amount: parse_int(&form.amount),
            date: form.date.clone(),
            vat: form.vat.clone(),
            pct,
            commentary: form.commentary.clone(),
            file_url: uploaded.as_ref().map(|u| u.file_url.clone()),
            file_name: uploaded.map(|u| u.file_name),
            status: BillStatus::Pending,
        })
    }

    /// Handle the form submission.
    ///
    /// Navigates to the bills list exactly once, before the bill is
    /// persisted. A persistence failure is returned after navigation.
    pub async fn handle_submit(
        &self,
        session: &SessionService,
        form: NewBillForm,
    ) -> Result<SubmittedBill, NewBillError> {
        let user = session.current_user()?;
        let bill = self.build_bill(&user, &form)?;
        info!("Submitting bill {:?} for {}", bill.name, bill.email);

        self.navigator.navigate(Route::Bills);

        let id = self.create_bill(&bill).await?;
        Ok(SubmittedBill { id, bill })
    }

    /// Add `bill` to the bills collection and show the bills list on success.
    /// Nothing is surfaced to the user on failure.
    pub async fn create_bill(&self, bill: &Bill) -> Result<String, NewBillError> {
        match self.bills.add_bill(bill).await {
            Ok(id) => {
                info!("Bill {} created", id);
                if self.navigator.current_route() != Some(Route::Bills) {
                    self.navigator.navigate(Route::Bills);
                }
                Ok(id)
            }
            Err(e) => {
                warn!("Bill creation failed: {}", e);
                Err(NewBillError::Persistence(e))
            }
        }
    }

    /// Handle a click on the close control
    pub fn close_bill(&self) {
        self.navigator.navigate(Route::Bills);
    }
}
