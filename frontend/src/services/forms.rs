use anyhow::{anyhow, Result};
use billed_domain::ProofFile;
use shared::NewBillForm;
use web_sys::{FormData, HtmlFormElement, HtmlInputElement};

/// Field names of the new bill form
pub mod fields {
    pub const EXPENSE_TYPE: &str = "expense-type";
    pub const EXPENSE_NAME: &str = "expense-name";
    pub const AMOUNT: &str = "amount";
    pub const DATE: &str = "datepicker";
    pub const VAT: &str = "vat";
    pub const PCT: &str = "pct";
    pub const COMMENTARY: &str = "commentary";
    pub const FILE: &str = "file";
}

/// Read the new bill form's values into a [`NewBillForm`]
pub fn read_new_bill_form(form: &HtmlFormElement) -> Result<NewBillForm> {
    let form_data = FormData::new_with_form(form)
        .map_err(|e| anyhow!("Failed to read form data: {:?}", e))?;
    let value = |name: &str| form_data.get(name).as_string().unwrap_or_default();

    Ok(NewBillForm {
        expense_type: value(fields::EXPENSE_TYPE),
        expense_name: value(fields::EXPENSE_NAME),
        amount: value(fields::AMOUNT),
        date: value(fields::DATE),
        vat: value(fields::VAT),
        pct: value(fields::PCT),
        commentary: value(fields::COMMENTARY),
    })
}

/// First file picked in `input`, if any
pub fn selected_file(input: &HtmlInputElement) -> Option<gloo::file::File> {
    input
        .files()
        .and_then(|files| files.get(0))
        .map(gloo::file::File::from)
}

/// Read a picked file into memory for upload
pub async fn read_proof_file(file: &gloo::file::File) -> Result<ProofFile> {
    let bytes = gloo::file::futures::read_as_bytes(file)
        .await
        .map_err(|e| anyhow!("Failed to read {}: {}", file.name(), e))?;
    Ok(ProofFile::new(&file.name(), &file.raw_mime_type(), bytes))
}
