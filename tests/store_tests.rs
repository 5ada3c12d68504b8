use std::fs;
use tempfile::TempDir;

use invoicely::error::Error;
use invoicely::model::{Address, InvoiceItem, InvoiceStatus, Settings};
use invoicely::repo::{
    BusinessRepo, CustomerPatch, CustomerRepo, InvoicePatch, InvoiceRepo, NewCustomer, NewInvoice,
    SettingsRepo,
};
use invoicely::store::JsonStore;
use invoicely::totals::{compute_totals, format_money};
use invoicely::NumberingService;

fn seeded_store() -> (TempDir, JsonStore) {
    let temp = TempDir::new().unwrap();
    let store = JsonStore::init(temp.path().join("data")).unwrap();
    (temp, store)
}

fn sample_address() -> Address {
    Address {
        line1: "456 Client Avenue".to_string(),
        line2: None,
        city: "Los Angeles".to_string(),
        state: Some("CA".to_string()),
        country: "USA".to_string(),
        postal_code: Some("90001".to_string()),
    }
}

fn sample_customer() -> NewCustomer {
    NewCustomer {
        name: "Jane Smith".to_string(),
        company_name: Some("Acme Corp".to_string()),
        address: sample_address(),
        email: "jane@acme.example".to_string(),
        phone: None,
    }
}

fn sample_invoice(store: &JsonStore, number: &str, items: Vec<InvoiceItem>) -> NewInvoice {
    let customer = CustomerRepo::new(store).create(sample_customer()).unwrap();
    let business_info = BusinessRepo::new(store).get().unwrap();
    let totals = compute_totals(&items, 0.0);
    NewInvoice {
        invoice_number: number.to_string(),
        invoice_date: "2026-08-01".parse().unwrap(),
        due_date: "2026-08-31".parse().unwrap(),
        customer_id: customer.id.clone(),
        customer,
        business_info,
        items,
        subtotal: totals.subtotal,
        tax: None,
        total: totals.total,
        status: InvoiceStatus::Draft,
        notes: None,
    }
}

#[test]
fn totals_sum_items_in_order() {
    let items = vec![
        InvoiceItem::new("Consulting", None, 2, 50.0),
        InvoiceItem::new("Support", None, 1, 25.0),
        InvoiceItem::new("Hosting", None, 3, 10.0),
    ];
    let totals = compute_totals(&items, 0.1);

    assert_eq!(totals.subtotal, 155.0);
    assert_eq!(totals.tax, totals.subtotal * 0.1);
    assert_eq!(totals.total, totals.subtotal + totals.tax);
}

#[test]
fn totals_empty_items_are_zero() {
    let totals = compute_totals(&[], 0.25);
    assert_eq!(totals.subtotal, 0.0);
    assert_eq!(totals.tax, 0.0);
    assert_eq!(totals.total, 0.0);
}

#[test]
fn item_amount_is_quantity_times_rate() {
    let item = InvoiceItem::new("Consulting", None, 8, 150.0);
    assert_eq!(item.amount, 1200.0);
}

#[test]
fn format_money_groups_thousands() {
    assert_eq!(format_money(0.0), "$0.00");
    assert_eq!(format_money(1234.5), "$1,234.50");
    assert_eq!(format_money(1234567.891), "$1,234,567.89");
    assert_eq!(format_money(-42.0), "-$42.00");
}

#[test]
fn customer_round_trips_through_store() {
    let (_temp, store) = seeded_store();
    let repo = CustomerRepo::new(&store);

    let created = repo.create(sample_customer()).unwrap();
    let loaded = repo.get(&created.id).unwrap().unwrap();

    assert_eq!(created, loaded);
}

#[test]
fn customer_create_assigns_id_and_timestamps() {
    let (_temp, store) = seeded_store();
    let repo = CustomerRepo::new(&store);

    let a = repo.create(sample_customer()).unwrap();
    let b = repo.create(sample_customer()).unwrap();

    assert!(!a.id.is_empty());
    assert_ne!(a.id, b.id);
    assert_eq!(a.created_at, a.updated_at);
}

#[test]
fn customer_update_applies_only_given_fields() {
    let (_temp, store) = seeded_store();
    let repo = CustomerRepo::new(&store);
    let created = repo.create(sample_customer()).unwrap();

    let patch = CustomerPatch {
        email: Some("jane@newdomain.example".to_string()),
        ..Default::default()
    };
    let updated = repo.update(&created.id, patch).unwrap().unwrap();

    assert_eq!(updated.email, "jane@newdomain.example");
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.address, created.address);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[test]
fn customer_update_replaces_whole_address() {
    let (_temp, store) = seeded_store();
    let repo = CustomerRepo::new(&store);
    let created = repo.create(sample_customer()).unwrap();

    let new_address = Address {
        line1: "789 New Street".to_string(),
        line2: None,
        city: "Portland".to_string(),
        state: None,
        country: "USA".to_string(),
        postal_code: None,
    };
    let patch = CustomerPatch {
        address: Some(new_address.clone()),
        ..Default::default()
    };
    let updated = repo.update(&created.id, patch).unwrap().unwrap();

    assert_eq!(updated.address, new_address);
}

#[test]
fn customer_update_missing_id_skips_write() {
    let (_temp, store) = seeded_store();
    let repo = CustomerRepo::new(&store);
    repo.create(sample_customer()).unwrap();

    let before = fs::read_to_string(store.path("customers.json")).unwrap();
    let result = repo
        .update("customer-missing", CustomerPatch::default())
        .unwrap();
    let after = fs::read_to_string(store.path("customers.json")).unwrap();

    assert!(result.is_none());
    assert_eq!(before, after);
}

#[test]
fn customer_delete_missing_id_skips_write() {
    let (_temp, store) = seeded_store();
    let repo = CustomerRepo::new(&store);
    repo.create(sample_customer()).unwrap();

    let before = fs::read_to_string(store.path("customers.json")).unwrap();
    assert!(!repo.delete("customer-missing").unwrap());
    let after = fs::read_to_string(store.path("customers.json")).unwrap();

    assert_eq!(before, after);
}

#[test]
fn customer_delete_removes_record() {
    let (_temp, store) = seeded_store();
    let repo = CustomerRepo::new(&store);
    let created = repo.create(sample_customer()).unwrap();

    assert!(repo.delete(&created.id).unwrap());
    assert!(repo.get(&created.id).unwrap().is_none());
    assert!(repo.list().unwrap().is_empty());
}

#[test]
fn read_missing_collection_is_an_error() {
    let temp = TempDir::new().unwrap();
    let store = JsonStore::new(temp.path().join("data"));

    let result = CustomerRepo::new(&store).list();
    assert!(matches!(result, Err(Error::ReadStore { .. })));
}

#[test]
fn read_malformed_collection_is_an_error() {
    let (_temp, store) = seeded_store();
    fs::write(store.path("customers.json"), "not json").unwrap();

    let result = CustomerRepo::new(&store).list();
    assert!(matches!(result, Err(Error::ParseStore { .. })));
}

#[test]
fn numbering_allocates_sequential_numbers() {
    let (_temp, store) = seeded_store();
    let numbering = NumberingService::new(&store);

    assert_eq!(numbering.allocate_next().unwrap(), "A00001");
    assert_eq!(numbering.allocate_next().unwrap(), "A00002");
    assert_eq!(numbering.allocate_next().unwrap(), "A00003");

    let settings = SettingsRepo::new(&store).get().unwrap();
    assert_eq!(settings.next_invoice_number, 4);
}

#[test]
fn numbering_zero_pads_to_five_digits() {
    assert_eq!(NumberingService::format(7), "A00007");
    assert_eq!(NumberingService::format(12345), "A12345");
}

#[test]
fn is_unique_scans_existing_invoices() {
    let (_temp, store) = seeded_store();
    let repo = InvoiceRepo::new(&store);
    let numbering = NumberingService::new(&store);

    let items = vec![InvoiceItem::new("Consulting", None, 1, 100.0)];
    let invoice = repo.create(sample_invoice(&store, "A00001", items)).unwrap();

    assert!(!numbering.is_unique("A00001", None).unwrap());
    assert!(numbering.is_unique("A00002", None).unwrap());

    // Self-exclusion when validating an edit to the same invoice
    assert!(numbering.is_unique("A00001", Some(&invoice.id)).unwrap());
}

#[test]
fn is_unique_rejects_empty_number() {
    let (_temp, store) = seeded_store();
    let numbering = NumberingService::new(&store);

    let result = numbering.is_unique("", None);
    assert!(matches!(result, Err(Error::EmptyInvoiceNumber)));
}

#[test]
fn settings_backfills_color_template_without_persisting() {
    let (_temp, store) = seeded_store();

    // A settings document from before the colorTemplate field existed
    fs::write(
        store.path("settings.json"),
        r#"{ "nextInvoiceNumber": 5, "taxRate": 0.08, "currency": "USD" }"#,
    )
    .unwrap();

    let settings = SettingsRepo::new(&store).get().unwrap();
    assert_eq!(settings.color_template, "purple");
    assert_eq!(settings.next_invoice_number, 5);

    // The stored document is untouched until settings are saved explicitly
    let on_disk = fs::read_to_string(store.path("settings.json")).unwrap();
    assert!(!on_disk.contains("colorTemplate"));
}

#[test]
fn settings_round_trip_preserves_fields() {
    let (_temp, store) = seeded_store();
    let repo = SettingsRepo::new(&store);

    let settings = Settings {
        next_invoice_number: 42,
        tax_rate: 0.0825,
        currency: "USD".to_string(),
        color_template: "blue".to_string(),
    };
    repo.update(&settings).unwrap();

    assert_eq!(repo.get().unwrap(), settings);
}

#[test]
fn invoice_patch_recomputes_totals() {
    let (_temp, store) = seeded_store();
    let repo = InvoiceRepo::new(&store);

    let items = vec![InvoiceItem::new("Consulting", None, 2, 50.0)];
    let invoice = repo.create(sample_invoice(&store, "A00001", items)).unwrap();
    assert_eq!(invoice.total, 100.0);

    let patch = InvoicePatch {
        items: Some(vec![InvoiceItem::new("Consulting", None, 4, 50.0)]),
        tax_rate: Some(0.1),
        ..Default::default()
    };
    let updated = repo.update(&invoice.id, patch).unwrap().unwrap();

    assert_eq!(updated.subtotal, 200.0);
    let tax = updated.tax.as_ref().unwrap();
    assert_eq!(tax.rate, 0.1);
    assert_eq!(tax.amount, 20.0);
    assert_eq!(updated.total, 220.0);
    assert_eq!(updated.created_at, invoice.created_at);
}

#[test]
fn invoice_status_update_keeps_totals() {
    let (_temp, store) = seeded_store();
    let repo = InvoiceRepo::new(&store);

    let items = vec![InvoiceItem::new("Consulting", None, 2, 50.0)];
    let invoice = repo.create(sample_invoice(&store, "A00001", items)).unwrap();

    let patch = InvoicePatch {
        status: Some(InvoiceStatus::Paid),
        ..Default::default()
    };
    let updated = repo.update(&invoice.id, patch).unwrap().unwrap();

    assert_eq!(updated.status, InvoiceStatus::Paid);
    assert_eq!(updated.subtotal, invoice.subtotal);
    assert_eq!(updated.total, invoice.total);
}

#[test]
fn invoice_snapshot_survives_customer_deletion() {
    let (_temp, store) = seeded_store();
    let customer_repo = CustomerRepo::new(&store);
    let invoice_repo = InvoiceRepo::new(&store);
    let numbering = NumberingService::new(&store);

    let customer = customer_repo.create(sample_customer()).unwrap();
    let business_info = BusinessRepo::new(&store).get().unwrap();

    let number = numbering.allocate_next().unwrap();
    assert_eq!(number, "A00001");

    let items = vec![
        InvoiceItem::new("Consulting", None, 2, 50.0),
        InvoiceItem::new("Support", None, 1, 25.0),
    ];
    let totals = compute_totals(&items, 0.0);
    assert_eq!(totals.subtotal, 125.0);
    assert_eq!(totals.tax, 0.0);
    assert_eq!(totals.total, 125.0);

    let invoice = invoice_repo
        .create(NewInvoice {
            invoice_number: number,
            invoice_date: "2026-08-25".parse().unwrap(),
            due_date: "2026-09-24".parse().unwrap(),
            customer_id: customer.id.clone(),
            customer: customer.clone(),
            business_info,
            items,
            subtotal: totals.subtotal,
            tax: None,
            total: totals.total,
            status: InvoiceStatus::Draft,
            notes: None,
        })
        .unwrap();

    // Deleting the live customer must not touch the embedded snapshot
    assert!(customer_repo.delete(&customer.id).unwrap());

    let reloaded = invoice_repo.get(&invoice.id).unwrap().unwrap();
    assert_eq!(reloaded.customer.name, "Jane Smith");
    assert_eq!(reloaded.customer.address, sample_address());
    assert_eq!(reloaded.total, 125.0);
}
