use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Session storage key holding the serialized [`User`]
pub const USER_SESSION_KEY: &str = "user";

/// A submitted expense report line.
///
/// Field names on the wire follow the document store (`type`, `fileUrl`,
/// `fileName`), hence the camelCase rename.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    /// Assigned by the document store, never by the client
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Submitter identity, taken from the session
    #[serde(default)]
    pub email: String,
    /// Expense category, one of [`ExpenseType::ALL`] when created from the form
    #[serde(rename = "type")]
    pub bill_type: String,
    pub name: String,
    /// `None` when the amount field did not hold an integer
    pub amount: Option<i64>,
    /// Free text, expected as YYYY-MM-DD
    pub date: String,
    /// Stored exactly as entered
    pub vat: String,
    pub pct: i64,
    #[serde(default)]
    pub commentary: String,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub status: BillStatus,
}

/// Review state of a bill. Only `Pending` is ever produced client side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    /// Label shown in the bills table
    pub fn label(&self) -> &'static str {
        match self {
            BillStatus::Pending => "En attente",
            BillStatus::Accepted => "Accepté",
            BillStatus::Refused => "Refusé",
        }
    }
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = match self {
            BillStatus::Pending => "pending",
            BillStatus::Accepted => "accepted",
            BillStatus::Refused => "refused",
        };
        write!(f, "{}", raw)
    }
}

/// Fixed list of expense categories offered by the new bill form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseType {
    Transports,
    RestaurantsEtBars,
    HotelEtLogement,
    ServicesEnLigne,
    ItEtElectronique,
    EquipementEtMateriel,
    FournituresDeBureau,
}

impl ExpenseType {
    pub const ALL: [ExpenseType; 7] = [
        ExpenseType::Transports,
        ExpenseType::RestaurantsEtBars,
        ExpenseType::HotelEtLogement,
        ExpenseType::ServicesEnLigne,
        ExpenseType::ItEtElectronique,
        ExpenseType::EquipementEtMateriel,
        ExpenseType::FournituresDeBureau,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseType::Transports => "Transports",
            ExpenseType::RestaurantsEtBars => "Restaurants et bars",
            ExpenseType::HotelEtLogement => "Hôtel et logement",
            ExpenseType::ServicesEnLigne => "Services en ligne",
            ExpenseType::ItEtElectronique => "IT et électronique",
            ExpenseType::EquipementEtMateriel => "Equipement et matériel",
            ExpenseType::FournituresDeBureau => "Fournitures de bureau",
        }
    }

    pub fn from_label(label: &str) -> Option<ExpenseType> {
        ExpenseType::ALL.iter().copied().find(|t| t.as_str() == label)
    }
}

impl fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of account stored in the session record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Employee,
    Admin,
}

/// Logged-in user as persisted under [`USER_SESSION_KEY`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "type")]
    pub user_type: UserType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    pub fn employee(email: &str) -> Self {
        Self {
            user_type: UserType::Employee,
            email: Some(email.to_string()),
        }
    }
}

/// Route keys understood by the navigation function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Bills,
    NewBill,
    Dashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Bills => "#employee/bills",
            Route::NewBill => "#employee/bill/new",
            Route::Dashboard => "#admin/dashboard",
        }
    }

    /// Resolve a location hash or pathname. Anything unknown lands on the login page.
    pub fn from_path(path: &str) -> Route {
        match path.trim() {
            "#employee/bills" => Route::Bills,
            "#employee/bill/new" => Route::NewBill,
            "#admin/dashboard" => Route::Dashboard,
            _ => Route::Login,
        }
    }
}

/// Raw field values of the new bill form, as read from the view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewBillForm {
    pub expense_type: String,
    pub expense_name: String,
    pub amount: String,
    pub date: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

/// Result of a successful proof upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedProof {
    pub file_url: String,
    pub file_name: String,
}

/// Tunables for the new bill flow
#[derive(Debug, Clone, PartialEq)]
pub struct NewBillConfig {
    pub default_pct: i64,
    pub proof_directory: String,
    pub accepted_extensions: Vec<String>,
    pub invalid_file_message: String,
    /// When set, submitting before the proof upload resolved is refused
    pub require_upload_before_submit: bool,
}

impl Default for NewBillConfig {
    fn default() -> Self {
        Self {
            default_pct: 20,
            proof_directory: "justificatifs".to_string(),
            accepted_extensions: vec!["jpg".to_string(), "jpeg".to_string(), "png".to_string()],
            invalid_file_message: "Veuillez sélectionner une image (.jpg, .jpeg ou .png)".to_string(),
            require_upload_before_submit: false,
        }
    }
}

/// A bill prepared for the bills table
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedBill {
    pub id: Option<String>,
    pub bill_type: String,
    pub name: String,
    /// Display date, or the raw value when it could not be parsed
    pub formatted_date: String,
    pub raw_date: String,
    pub formatted_amount: String,
    pub status: BillStatus,
    pub status_label: String,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
}

impl FormattedBill {
    pub fn from_bill(bill: &Bill, formatted_date: String) -> Self {
        let formatted_amount = match bill.amount {
            Some(amount) => format!("{} €", amount),
            None => "-".to_string(),
        };
        Self {
            id: bill.id.clone(),
            bill_type: bill.bill_type.clone(),
            name: bill.name.clone(),
            formatted_date,
            raw_date: bill.date.clone(),
            formatted_amount,
            status: bill.status,
            status_label: bill.status.label().to_string(),
            file_url: bill.file_url.clone(),
            file_name: bill.file_name.clone(),
        }
    }
}

fn short_month_name(month: u32) -> &'static str {
    match month {
        1 => "Janv.",
        2 => "Févr.",
        3 => "Mars",
        4 => "Avr.",
        5 => "Mai",
        6 => "Juin",
        7 => "Juil.",
        8 => "Août",
        9 => "Sept.",
        10 => "Oct.",
        11 => "Nov.",
        12 => "Déc.",
        _ => "",
    }
}

/// Format a YYYY-MM-DD date for the bills table, e.g. "2004-04-04" -> "4 Avr. 04"
pub fn format_date(date_str: &str) -> Result<String, chrono::ParseError> {
    let date = NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")?;
    Ok(format!(
        "{} {} {:02}",
        date.day(),
        short_month_name(date.month()),
        date.year().rem_euclid(100)
    ))
}

/// Integer parsing with browser `parseInt` leniency: leading whitespace, an
/// optional sign, then as many decimal digits as are present ("12abc" -> 12).
/// A `0x` prefix switches to hexadecimal. Returns `None` where `parseInt`
/// would yield NaN, and on i64 overflow.
pub fn parse_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    // A bare "0x" has no digits left and yields None like NaN
    let (radix, digits) = if rest.starts_with("0x") || rest.starts_with("0X") {
        (16, &rest[2..])
    } else {
        (10, rest)
    };

    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let mut value: i64 = 0;
    for c in digits[..end].chars() {
        let digit = c.to_digit(radix)? as i64;
        value = value.checked_mul(radix as i64)?.checked_add(digit)?;
    }
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bill_serializes_with_store_field_names() {
        let bill = Bill {
            id: None,
            email: "a@a".to_string(),
            bill_type: "Transports".to_string(),
            name: "London".to_string(),
            amount: Some(200),
            date: "23-11-2021".to_string(),
            vat: "70".to_string(),
            pct: 10,
            commentary: "Flight ticket to London".to_string(),
            file_url: Some("./london.jpg".to_string()),
            file_name: Some("london.jpg".to_string()),
            status: BillStatus::Pending,
        };

        let json = serde_json::to_value(&bill).unwrap();
        assert_eq!(json["type"], "Transports");
        assert_eq!(json["fileUrl"], "./london.jpg");
        assert_eq!(json["fileName"], "london.jpg");
        assert_eq!(json["status"], "pending");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_bill_deserializes_store_document() {
        let raw = r#"{
            "id": "47qAXb6fIm2zOKkLzMro",
            "vat": "80",
            "fileUrl": "https://example.com/proof.jpg",
            "status": "accepted",
            "type": "Hôtel et logement",
            "commentary": "séminaire billed",
            "name": "encore",
            "fileName": "preview-facture-free-201801-pdf-1.jpg",
            "date": "2004-04-04",
            "amount": 400,
            "email": "a@a",
            "pct": 20
        }"#;

        let bill: Bill = serde_json::from_str(raw).unwrap();
        assert_eq!(bill.id.as_deref(), Some("47qAXb6fIm2zOKkLzMro"));
        assert_eq!(bill.status, BillStatus::Accepted);
        assert_eq!(bill.amount, Some(400));
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2004-04-04").unwrap(), "4 Avr. 04");
        assert_eq!(format_date("2021-11-23").unwrap(), "23 Nov. 21");
        assert_eq!(format_date("2003-03-03").unwrap(), "3 Mars 03");
        assert!(format_date("23-11-2021").is_err());
        assert!(format_date("not a date").is_err());
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("200"), Some(200));
        assert_eq!(parse_int("  42"), Some(42));
        assert_eq!(parse_int("12abc"), Some(12));
        assert_eq!(parse_int("-7"), Some(-7));
        assert_eq!(parse_int("0x1A"), Some(26));
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("-"), None);
    }

    #[test]
    fn test_parse_int_hex_prefix_without_digits() {
        assert_eq!(parse_int("0x"), None);
        assert_eq!(parse_int("0X"), None);
        assert_eq!(parse_int("-0x"), None);
        assert_eq!(parse_int("0xg"), None);
        assert_eq!(parse_int("0xff"), Some(255));
    }

    #[test]
    fn test_route_paths_resolve() {
        for route in [Route::Login, Route::Bills, Route::NewBill, Route::Dashboard] {
            assert_eq!(Route::from_path(route.path()), route);
        }
        assert_eq!(Route::from_path("#unknown"), Route::Login);
        assert_eq!(Route::from_path(""), Route::Login);
    }

    #[test]
    fn test_expense_type_labels() {
        assert_eq!(ExpenseType::from_label("Transports"), Some(ExpenseType::Transports));
        assert_eq!(
            ExpenseType::from_label("Hôtel et logement"),
            Some(ExpenseType::HotelEtLogement)
        );
        assert_eq!(ExpenseType::from_label("Voyage"), None);
    }

    #[test]
    fn test_user_session_record() {
        let user: User = serde_json::from_str(r#"{"type":"Employee"}"#).unwrap();
        assert_eq!(user.user_type, UserType::Employee);
        assert!(user.email.is_none());

        let json = serde_json::to_string(&User::employee("employee@test.tld")).unwrap();
        assert_eq!(json, r#"{"type":"Employee","email":"employee@test.tld"}"#);
    }

    #[test]
    fn test_formatted_bill_amount() {
        let mut bill: Bill = serde_json::from_str(
            r#"{"type":"Transports","name":"x","amount":null,"date":"2004-04-04","vat":"","pct":20,"fileUrl":null,"fileName":null,"status":"refused"}"#,
        )
        .unwrap();
        let formatted = FormattedBill::from_bill(&bill, "4 Avr. 04".to_string());
        assert_eq!(formatted.formatted_amount, "-");
        assert_eq!(formatted.status_label, "Refusé");

        bill.amount = Some(348);
        assert_eq!(FormattedBill::from_bill(&bill, String::new()).formatted_amount, "348 €");
    }
}
