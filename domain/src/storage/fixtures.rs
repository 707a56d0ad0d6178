//! Seed bills for demo mode and tests.

use shared::{Bill, BillStatus};

fn bill(
    id: &str,
    bill_type: &str,
    name: &str,
    amount: i64,
    date: &str,
    status: BillStatus,
    file_name: &str,
) -> Bill {
    Bill {
        id: Some(id.to_string()),
        email: "employee@test.tld".to_string(),
        bill_type: bill_type.to_string(),
        name: name.to_string(),
        amount: Some(amount),
        date: date.to_string(),
        vat: "80".to_string(),
        pct: 20,
        commentary: String::new(),
        file_url: Some(format!("https://storage.billed.test/justificatifs/{}", file_name)),
        file_name: Some(file_name.to_string()),
        status,
    }
}

/// Four bills in non-chronological store order
pub fn sample_bills() -> Vec<Bill> {
    vec![
        bill(
            "47qAXb6fIm2zOKkLzMro",
            "Hôtel et logement",
            "encore",
            400,
            "2004-04-04",
            BillStatus::Pending,
            "preview-facture-free-201801-pdf-1.jpg",
        ),
        bill(
            "BeKy5Mo4jkmdfPGYpTxZ",
            "Transports",
            "test1",
            100,
            "2001-01-01",
            BillStatus::Refused,
            "1592770761.jpeg",
        ),
        bill(
            "UIUZtnPQvnbFnB0ozvJh",
            "Services en ligne",
            "test3",
            300,
            "2003-03-03",
            BillStatus::Accepted,
            "facturefreemobile.jpg",
        ),
        bill(
            "qcCK3SzECmaZAGRrHjaC",
            "Restaurants et bars",
            "test2",
            200,
            "2002-02-02",
            BillStatus::Refused,
            "facture-client-php-exportee.jpg",
        ),
    ]
}
