//! Demo data for the in-memory adapters
//!
//! Three accounts, each with one sub-account and one work item, the files
//! attached to the first two work items, and a small invoice/payment ledger.
//! The tables are referentially consistent.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::{Account, Invoice, Payment, StoredFile, SubAccount, WorkItem};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("demo dates are valid")
}

fn usd(amount: i64) -> Decimal {
    Decimal::new(amount, 0)
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Generate demo accounts
pub fn demo_accounts() -> Vec<Account> {
    vec![
        Account {
            id: "1".to_string(),
            name: "Acme Corporation".to_string(),
            email: "contact@acme.com".to_string(),
            phone: "+1-555-0123".to_string(),
            company: "Acme Corp".to_string(),
            status: "Active".to_string(),
            created_date: date(2024, 1, 15),
            last_activity: date(2024, 12, 20),
        },
        Account {
            id: "2".to_string(),
            name: "Tech Solutions Ltd".to_string(),
            email: "info@techsolutions.com".to_string(),
            phone: "+1-555-0456".to_string(),
            company: "Tech Solutions".to_string(),
            status: "Active".to_string(),
            created_date: date(2024, 2, 10),
            last_activity: date(2024, 12, 19),
        },
        Account {
            id: "3".to_string(),
            name: "Digital Innovations Inc".to_string(),
            email: "hello@digitalinnovations.com".to_string(),
            phone: "+1-555-0789".to_string(),
            company: "Digital Innovations".to_string(),
            status: "Active".to_string(),
            created_date: date(2024, 3, 5),
            last_activity: date(2024, 12, 18),
        },
    ]
}

/// Generate demo sub-accounts, one per account
pub fn demo_sub_accounts() -> Vec<SubAccount> {
    vec![
        SubAccount {
            id: "1".to_string(),
            name: "Jane Customer".to_string(),
            email: "jane@customer.com".to_string(),
            phone: "+1-555-0789".to_string(),
            account_id: "1".to_string(),
            work_item_ids: names(&["1"]),
            total_spent: usd(25_000),
            status: "Active".to_string(),
        },
        SubAccount {
            id: "2".to_string(),
            name: "Bob Customer".to_string(),
            email: "bob@customer.com".to_string(),
            phone: "+1-555-0987".to_string(),
            account_id: "2".to_string(),
            work_item_ids: names(&["2"]),
            total_spent: usd(15_000),
            status: "Active".to_string(),
        },
        SubAccount {
            id: "3".to_string(),
            name: "Alice Johnson".to_string(),
            email: "alice@johnson.com".to_string(),
            phone: "+1-555-0654".to_string(),
            account_id: "3".to_string(),
            work_item_ids: names(&["3"]),
            total_spent: usd(30_000),
            status: "Active".to_string(),
        },
    ]
}

/// Generate demo work items, one per account
pub fn demo_work_items() -> Vec<WorkItem> {
    vec![
        WorkItem {
            id: "1".to_string(),
            title: "Website Redesign".to_string(),
            description: "Complete website redesign with modern UI/UX".to_string(),
            status: "In Progress".to_string(),
            account_id: "1".to_string(),
            account_name: "Acme Corporation".to_string(),
            start_date: date(2024, 11, 1),
            end_date: date(2024, 12, 31),
            progress: 75,
            budget: usd(50_000),
            assigned_to: names(&["John Doe", "Jane Smith"]),
        },
        WorkItem {
            id: "2".to_string(),
            title: "Mobile App Development".to_string(),
            description: "Native mobile app for iOS and Android".to_string(),
            status: "Planning".to_string(),
            account_id: "2".to_string(),
            account_name: "Tech Solutions Ltd".to_string(),
            start_date: date(2024, 12, 15),
            end_date: date(2025, 3, 15),
            progress: 10,
            budget: usd(75_000),
            assigned_to: names(&["Mike Johnson", "Sarah Wilson"]),
        },
        WorkItem {
            id: "3".to_string(),
            title: "E-commerce Platform".to_string(),
            description: "Custom e-commerce solution with payment integration".to_string(),
            status: "Completed".to_string(),
            account_id: "3".to_string(),
            account_name: "Digital Innovations Inc".to_string(),
            start_date: date(2024, 9, 1),
            end_date: date(2024, 11, 30),
            progress: 100,
            budget: usd(80_000),
            assigned_to: names(&["David Brown", "Lisa Davis"]),
        },
    ]
}

/// Generate demo stored files
pub fn demo_files() -> Vec<StoredFile> {
    vec![
        StoredFile {
            id: "1".to_string(),
            filename: "project-wireframes.pdf".to_string(),
            url: "https://placehold.co/400x300?text=Project+Wireframes+PDF+Document".to_string(),
            size: 2_048_576,
            content_type: "application/pdf".to_string(),
            upload_date: date(2024, 12, 15),
            project_id: "1".to_string(),
            category: "Design".to_string(),
            description: Some("Initial wireframes for website redesign".to_string()),
        },
        StoredFile {
            id: "2".to_string(),
            filename: "final-mockups.zip".to_string(),
            url: "https://placehold.co/400x300?text=Final+Mockups+ZIP+Archive".to_string(),
            size: 15_728_640,
            content_type: "application/zip".to_string(),
            upload_date: date(2024, 12, 18),
            project_id: "1".to_string(),
            category: "Design".to_string(),
            description: Some("Final UI mockups and assets".to_string()),
        },
        StoredFile {
            id: "3".to_string(),
            filename: "app-prototype.mp4".to_string(),
            url: "https://placehold.co/400x300?text=App+Prototype+Video+Demo".to_string(),
            size: 52_428_800,
            content_type: "video/mp4".to_string(),
            upload_date: date(2024, 12, 20),
            project_id: "2".to_string(),
            category: "Prototype".to_string(),
            description: Some("Interactive app prototype demonstration".to_string()),
        },
    ]
}

/// Demo payment rows:
/// (id, invoice, amount, day in Dec 2024, method, description, customer)
const DEMO_PAYMENTS: &[(&str, &str, i64, u32, &str, &str, &str)] = &[
    ("1", "INV-001", 15_000, 15, "Bank Transfer", "Payment for Website Redesign - Phase 1", "1"),
    ("2", "INV-002", 10_000, 18, "Credit Card", "Payment for Website Redesign - Phase 2", "1"),
    ("3", "INV-003", 7_500, 20, "PayPal", "Payment for Mobile App Development - Initial", "2"),
];

/// Generate demo payments
pub fn demo_payments() -> Vec<Payment> {
    DEMO_PAYMENTS
        .iter()
        .map(|&(id, invoice, amount, day, method, what, customer)| Payment {
            id: id.to_string(),
            invoice_id: invoice.to_string(),
            amount: usd(amount),
            currency: "USD".to_string(),
            payment_date: date(2024, 12, day),
            payment_method: method.to_string(),
            status: "Completed".to_string(),
            description: what.to_string(),
            customer_id: customer.to_string(),
            // Each demo customer pays for the work item with the same id
            project_id: customer.to_string(),
        })
        .collect()
}

/// Generate demo invoices
pub fn demo_invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            id: "INV-001".to_string(),
            invoice_number: "INV-2024-001".to_string(),
            customer_id: "1".to_string(),
            customer_name: "Jane Customer".to_string(),
            project_id: "1".to_string(),
            amount: usd(25_000),
            currency: "USD".to_string(),
            status: "Paid".to_string(),
            issue_date: date(2024, 12, 1),
            due_date: date(2024, 12, 31),
            paid_amount: usd(25_000),
            balance_amount: usd(0),
        },
        Invoice {
            id: "INV-002".to_string(),
            invoice_number: "INV-2024-002".to_string(),
            customer_id: "2".to_string(),
            customer_name: "Bob Customer".to_string(),
            project_id: "2".to_string(),
            amount: usd(15_000),
            currency: "USD".to_string(),
            status: "Partially Paid".to_string(),
            issue_date: date(2024, 12, 10),
            due_date: date(2025, 1, 10),
            paid_amount: usd(7_500),
            balance_amount: usd(7_500),
        },
        Invoice {
            id: "INV-003".to_string(),
            invoice_number: "INV-2024-003".to_string(),
            customer_id: "1".to_string(),
            customer_name: "Jane Customer".to_string(),
            project_id: "1".to_string(),
            amount: usd(10_000),
            currency: "USD".to_string(),
            status: "Pending".to_string(),
            issue_date: date(2024, 12, 20),
            due_date: date(2025, 1, 20),
            paid_amount: usd(0),
            balance_amount: usd(10_000),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_directory_is_consistent() {
        let accounts = demo_accounts();
        let known = |id: &str| accounts.iter().any(|a| a.id == id);

        assert!(demo_sub_accounts().iter().all(|s| known(&s.account_id)));
        assert!(demo_work_items().iter().all(|w| known(&w.account_id)));
    }

    #[test]
    fn test_demo_payments_reference_invoices() {
        let invoices = demo_invoices();
        for payment in demo_payments() {
            assert!(invoices.iter().any(|i| i.id == payment.invoice_id));
        }
    }
}
