use chrono::{Duration, Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tabled::{settings::Style, Table, Tabled};

use invoicely::dashboard::{compute_stats, recent_invoices};
use invoicely::error::{Error, Result};
use invoicely::model::{Address, InvoiceItem, InvoiceStatus, Tax};
use invoicely::repo::{
    BusinessRepo, CustomerPatch, CustomerRepo, InvoicePatch, InvoiceRepo, NewCustomer, NewInvoice,
    SettingsRepo,
};
use invoicely::store::{self, JsonStore};
use invoicely::totals::{compute_totals, format_money};
use invoicely::NumberingService;

#[derive(Parser)]
#[command(name = "invoicely")]
#[command(version, about = "Small business invoicing with a flat-file JSON store", long_about = None)]
struct Cli {
    /// Path to data directory (default: ~/.invoicely or XDG data)
    #[arg(short = 'C', long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory with seed documents
    Init,

    /// Show or update the business profile
    Business {
        #[command(subcommand)]
        command: BusinessCommands,
    },

    /// Manage customers
    Customer {
        #[command(subcommand)]
        command: CustomerCommands,
    },

    /// Manage invoices
    Invoice {
        #[command(subcommand)]
        command: InvoiceCommands,
    },

    /// Allocate and print the next invoice number
    NextNumber,

    /// Check whether an invoice number is still available
    ValidateNumber {
        number: String,

        /// Invoice id to ignore (when validating an edit)
        #[arg(long)]
        exclude_id: Option<String>,
    },

    /// Show or update settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },

    /// Show summary statistics and recent invoices
    Dashboard,
}

#[derive(Subcommand)]
enum BusinessCommands {
    /// Print the business profile
    Show,

    /// Update business profile fields
    Set {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        line1: Option<String>,
        #[arg(long)]
        line2: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        state: Option<String>,
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        postal_code: Option<String>,
    },
}

#[derive(Subcommand)]
enum CustomerCommands {
    /// List customers
    List,

    /// Print one customer
    Show { id: String },

    /// Add a customer
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        line1: String,
        #[arg(long)]
        line2: Option<String>,
        #[arg(long)]
        city: String,
        #[arg(long)]
        state: Option<String>,
        #[arg(long)]
        country: String,
        #[arg(long)]
        postal_code: Option<String>,
    },

    /// Update customer fields (only the given flags change)
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        line1: Option<String>,
        #[arg(long)]
        line2: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        state: Option<String>,
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        postal_code: Option<String>,
    },

    /// Delete a customer (saved invoices keep their snapshot)
    Delete { id: String },
}

#[derive(Subcommand)]
enum InvoiceCommands {
    /// List invoices
    List,

    /// Print one invoice with its line items
    Show { id: String },

    /// Create an invoice
    Create {
        /// Customer id to bill
        #[arg(short, long)]
        customer: String,

        /// Line items in format "name:quantity:rate" (can be repeated)
        #[arg(short, long, value_name = "NAME:QTY:RATE")]
        item: Vec<String>,

        /// Invoice number (default: allocated from the counter)
        #[arg(short, long)]
        number: Option<String>,

        /// Invoice date YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,

        /// Due date YYYY-MM-DD (default: invoice date + 30 days)
        #[arg(long)]
        due: Option<String>,

        /// Tax rate, e.g. 0.0825 (default: from settings)
        #[arg(long)]
        tax_rate: Option<f64>,

        #[arg(long)]
        notes: Option<String>,

        /// Initial status (default: draft)
        #[arg(long)]
        status: Option<String>,
    },

    /// Update invoice fields (only the given flags change)
    Edit {
        id: String,

        /// Replacement line items in format "name:quantity:rate"
        #[arg(short, long, value_name = "NAME:QTY:RATE")]
        item: Vec<String>,

        #[arg(short, long)]
        number: Option<String>,

        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        due: Option<String>,

        #[arg(long)]
        tax_rate: Option<f64>,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long)]
        status: Option<String>,
    },

    /// Set an invoice's status
    SetStatus { id: String, status: String },

    /// Delete an invoice
    Delete { id: String },
}

#[derive(Subcommand)]
enum SettingsCommands {
    /// Print settings
    Show,

    /// Update settings fields
    Set {
        #[arg(long)]
        next_invoice_number: Option<u32>,
        #[arg(long)]
        tax_rate: Option<f64>,
        #[arg(long)]
        currency: Option<String>,
        #[arg(long)]
        color_template: Option<String>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = match cli.data_dir {
        Some(p) => p,
        None => store::data_dir()?,
    };

    match cli.command {
        Commands::Init => cmd_init(&data_dir),
        Commands::Business { command } => match command {
            BusinessCommands::Show => cmd_business_show(&data_dir),
            BusinessCommands::Set {
                name,
                email,
                phone,
                line1,
                line2,
                city,
                state,
                country,
                postal_code,
            } => cmd_business_set(
                &data_dir,
                name,
                email,
                phone,
                [line1, line2, city, state, country, postal_code],
            ),
        },
        Commands::Customer { command } => match command {
            CustomerCommands::List => cmd_customer_list(&data_dir),
            CustomerCommands::Show { id } => cmd_customer_show(&data_dir, &id),
            CustomerCommands::Add {
                name,
                company,
                email,
                phone,
                line1,
                line2,
                city,
                state,
                country,
                postal_code,
            } => cmd_customer_add(
                &data_dir,
                NewCustomer {
                    name,
                    company_name: company,
                    address: Address {
                        line1,
                        line2,
                        city,
                        state,
                        country,
                        postal_code,
                    },
                    email,
                    phone,
                },
            ),
            CustomerCommands::Edit {
                id,
                name,
                company,
                email,
                phone,
                line1,
                line2,
                city,
                state,
                country,
                postal_code,
            } => cmd_customer_edit(
                &data_dir,
                &id,
                name,
                company,
                email,
                phone,
                [line1, line2, city, state, country, postal_code],
            ),
            CustomerCommands::Delete { id } => cmd_customer_delete(&data_dir, &id),
        },
        Commands::Invoice { command } => match command {
            InvoiceCommands::List => cmd_invoice_list(&data_dir),
            InvoiceCommands::Show { id } => cmd_invoice_show(&data_dir, &id),
            InvoiceCommands::Create {
                customer,
                item,
                number,
                date,
                due,
                tax_rate,
                notes,
                status,
            } => cmd_invoice_create(
                &data_dir, &customer, &item, number, date, due, tax_rate, notes, status,
            ),
            InvoiceCommands::Edit {
                id,
                item,
                number,
                date,
                due,
                tax_rate,
                notes,
                status,
            } => cmd_invoice_edit(&data_dir, &id, &item, number, date, due, tax_rate, notes, status),
            InvoiceCommands::SetStatus { id, status } => cmd_invoice_set_status(&data_dir, &id, &status),
            InvoiceCommands::Delete { id } => cmd_invoice_delete(&data_dir, &id),
        },
        Commands::NextNumber => cmd_next_number(&data_dir),
        Commands::ValidateNumber { number, exclude_id } => {
            cmd_validate_number(&data_dir, &number, exclude_id.as_deref())
        }
        Commands::Settings { command } => match command {
            SettingsCommands::Show => cmd_settings_show(&data_dir),
            SettingsCommands::Set {
                next_invoice_number,
                tax_rate,
                currency,
                color_template,
            } => cmd_settings_set(&data_dir, next_invoice_number, tax_rate, currency, color_template),
        },
        Commands::Dashboard => cmd_dashboard(&data_dir),
    }
}

// Table row structs for tabled
#[derive(Tabled)]
struct CustomerRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "COMPANY")]
    company: String,
    #[tabled(rename = "EMAIL")]
    email: String,
}

#[derive(Tabled)]
struct InvoiceRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NUMBER")]
    number: String,
    #[tabled(rename = "DATE")]
    date: String,
    #[tabled(rename = "CUSTOMER")]
    customer: String,
    #[tabled(rename = "TOTAL")]
    total: String,
    #[tabled(rename = "STATUS")]
    status: String,
}

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "QTY")]
    quantity: u32,
    #[tabled(rename = "RATE")]
    rate: String,
    #[tabled(rename = "AMOUNT")]
    amount: String,
}

/// Initialize the data directory with seed documents
fn cmd_init(data_dir: &PathBuf) -> Result<()> {
    let store = JsonStore::init(data_dir)?;

    println!("Initialized invoicely data at: {}", store.dir().display());
    println!();
    println!("Next steps:");
    println!("  1. Set your business details:  invoicely business set --name \"...\"");
    println!("  2. Add a customer:             invoicely customer add --name \"...\" ...");
    println!("  3. Create your first invoice:  invoicely invoice create --customer <id> --item <name>:<qty>:<rate>");

    Ok(())
}

fn open_store(data_dir: &PathBuf) -> Result<JsonStore> {
    JsonStore::open(data_dir)
}

fn cmd_business_show(data_dir: &PathBuf) -> Result<()> {
    let store = open_store(data_dir)?;
    let info = BusinessRepo::new(&store).get()?;

    println!("{}", info.name);
    println!("  Email:   {}", info.email);
    println!("  Phone:   {}", info.phone);
    print_address(&info.address);
    Ok(())
}

fn print_address(address: &Address) {
    println!("  Address: {}", address.line1);
    if let Some(line2) = &address.line2 {
        println!("           {line2}");
    }
    let mut locality = address.city.clone();
    if let Some(state) = &address.state {
        locality.push_str(&format!(", {state}"));
    }
    if let Some(postal) = &address.postal_code {
        locality.push_str(&format!(" {postal}"));
    }
    println!("           {locality}");
    println!("           {}", address.country);
}

#[allow(clippy::too_many_arguments)]
fn cmd_business_set(
    data_dir: &PathBuf,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    address_fields: [Option<String>; 6],
) -> Result<()> {
    let store = open_store(data_dir)?;
    let repo = BusinessRepo::new(&store);
    let mut info = repo.get()?;

    if let Some(name) = name {
        info.name = name;
    }
    if let Some(email) = email {
        info.email = email;
    }
    if let Some(phone) = phone {
        info.phone = phone;
    }
    info.address = overlay_address(info.address, address_fields);

    repo.update(&info)?;
    println!("Updated business profile");
    Ok(())
}

/// Overlay the given address flags on an existing address. The caller always
/// ends up sending a complete address object to the repository.
fn overlay_address(mut address: Address, fields: [Option<String>; 6]) -> Address {
    let [line1, line2, city, state, country, postal_code] = fields;
    if let Some(line1) = line1 {
        address.line1 = line1;
    }
    if let Some(line2) = line2 {
        address.line2 = Some(line2);
    }
    if let Some(city) = city {
        address.city = city;
    }
    if let Some(state) = state {
        address.state = Some(state);
    }
    if let Some(country) = country {
        address.country = country;
    }
    if let Some(postal_code) = postal_code {
        address.postal_code = Some(postal_code);
    }
    address
}

fn cmd_customer_list(data_dir: &PathBuf) -> Result<()> {
    let store = open_store(data_dir)?;
    let customers = CustomerRepo::new(&store).list()?;

    if customers.is_empty() {
        println!("No customers yet. Add one with 'invoicely customer add'.");
        return Ok(());
    }

    let rows: Vec<CustomerRow> = customers
        .iter()
        .map(|c| CustomerRow {
            id: c.id.clone(),
            name: c.name.clone(),
            company: c.company_name.clone().unwrap_or_default(),
            email: c.email.clone(),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");
    Ok(())
}

fn cmd_customer_show(data_dir: &PathBuf, id: &str) -> Result<()> {
    let store = open_store(data_dir)?;
    let customer = CustomerRepo::new(&store)
        .get(id)?
        .ok_or_else(|| Error::CustomerNotFound(id.to_string()))?;

    println!("{} ({})", customer.name, customer.id);
    if let Some(company) = &customer.company_name {
        println!("  Company: {company}");
    }
    println!("  Email:   {}", customer.email);
    if let Some(phone) = &customer.phone {
        println!("  Phone:   {phone}");
    }
    print_address(&customer.address);
    println!("  Created: {}", customer.created_at.to_rfc3339());
    println!("  Updated: {}", customer.updated_at.to_rfc3339());
    Ok(())
}

fn cmd_customer_add(data_dir: &PathBuf, input: NewCustomer) -> Result<()> {
    let store = open_store(data_dir)?;
    let customer = CustomerRepo::new(&store).create(input)?;

    println!("Added customer {}", customer.name);
    println!("  Id: {}", customer.id);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_customer_edit(
    data_dir: &PathBuf,
    id: &str,
    name: Option<String>,
    company: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    address_fields: [Option<String>; 6],
) -> Result<()> {
    let store = open_store(data_dir)?;
    let repo = CustomerRepo::new(&store);

    let existing = repo
        .get(id)?
        .ok_or_else(|| Error::CustomerNotFound(id.to_string()))?;

    // Send a complete address object whenever any address flag is given;
    // the repository replaces nested objects wholesale.
    let address = if address_fields.iter().any(Option::is_some) {
        Some(overlay_address(existing.address, address_fields))
    } else {
        None
    };

    let patch = CustomerPatch {
        name,
        company_name: company,
        address,
        email,
        phone,
    };

    let updated = repo
        .update(id, patch)?
        .ok_or_else(|| Error::CustomerNotFound(id.to_string()))?;

    println!("Updated customer {}", updated.name);
    Ok(())
}

fn cmd_customer_delete(data_dir: &PathBuf, id: &str) -> Result<()> {
    let store = open_store(data_dir)?;
    if !CustomerRepo::new(&store).delete(id)? {
        return Err(Error::CustomerNotFound(id.to_string()));
    }
    println!("Deleted customer {id}");
    Ok(())
}

fn cmd_invoice_list(data_dir: &PathBuf) -> Result<()> {
    let store = open_store(data_dir)?;
    let invoices = InvoiceRepo::new(&store).list()?;

    if invoices.is_empty() {
        println!("No invoices yet. Create one with 'invoicely invoice create'.");
        return Ok(());
    }

    let rows: Vec<InvoiceRow> = invoices
        .iter()
        .map(|i| InvoiceRow {
            id: i.id.clone(),
            number: i.invoice_number.clone(),
            date: i.invoice_date.to_string(),
            customer: i.customer.name.clone(),
            total: format_money(i.total),
            status: i.status.to_string(),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");
    println!();
    println!("Total: {} invoices", invoices.len());
    Ok(())
}

fn cmd_invoice_show(data_dir: &PathBuf, id: &str) -> Result<()> {
    let store = open_store(data_dir)?;
    let invoice = InvoiceRepo::new(&store)
        .get(id)?
        .ok_or_else(|| Error::InvoiceNotFound(id.to_string()))?;

    println!("Invoice {} ({})", invoice.invoice_number, invoice.id);
    println!("  Date:     {}", invoice.invoice_date);
    println!("  Due:      {}", invoice.due_date);
    println!("  Customer: {} ({})", invoice.customer.name, invoice.customer_id);
    println!("  Status:   {}", invoice.status);
    if let Some(notes) = &invoice.notes {
        println!("  Notes:    {notes}");
    }

    let rows: Vec<ItemRow> = invoice
        .items
        .iter()
        .map(|item| ItemRow {
            name: item.name.clone(),
            quantity: item.quantity,
            rate: format_money(item.rate),
            amount: format_money(item.amount),
        })
        .collect();
    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");

    println!("  Subtotal: {}", format_money(invoice.subtotal));
    if let Some(tax) = &invoice.tax {
        println!(
            "  Tax:      {} ({:.2}%)",
            format_money(tax.amount),
            tax.rate * 100.0
        );
    }
    println!("  Total:    {}", format_money(invoice.total));
    Ok(())
}

/// Parse item input like "Consulting:8:150" into an [`InvoiceItem`].
fn parse_item_input(input: &str) -> Result<InvoiceItem> {
    let mut parts = input.rsplitn(3, ':');
    let (Some(rate_str), Some(qty_str), Some(name)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(Error::InvalidItemFormat(input.to_string()));
    };

    if name.is_empty() {
        return Err(Error::InvalidItemFormat(input.to_string()));
    }

    let quantity: u32 = qty_str.parse().map_err(|_| Error::InvalidQuantity {
        item: name.to_string(),
        qty: qty_str.to_string(),
        reason: "must be a whole number".to_string(),
    })?;
    if quantity == 0 {
        return Err(Error::InvalidQuantity {
            item: name.to_string(),
            qty: qty_str.to_string(),
            reason: "must be greater than 0".to_string(),
        });
    }

    let rate: f64 = rate_str.parse().map_err(|_| Error::InvalidRate {
        item: name.to_string(),
        rate: rate_str.to_string(),
        reason: "must be a number".to_string(),
    })?;
    if rate < 0.0 {
        return Err(Error::InvalidRate {
            item: name.to_string(),
            rate: rate_str.to_string(),
            reason: "must not be negative".to_string(),
        });
    }

    Ok(InvoiceItem::new(name, None, quantity, rate))
}

fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| Error::InvalidDate(input.to_string()))
}

#[allow(clippy::too_many_arguments)]
fn cmd_invoice_create(
    data_dir: &PathBuf,
    customer_id: &str,
    items_input: &[String],
    number: Option<String>,
    date: Option<String>,
    due: Option<String>,
    tax_rate: Option<f64>,
    notes: Option<String>,
    status: Option<String>,
) -> Result<()> {
    let store = open_store(data_dir)?;

    if items_input.is_empty() {
        return Err(Error::NoItems);
    }

    let customer = CustomerRepo::new(&store)
        .get(customer_id)?
        .ok_or_else(|| Error::CustomerNotFound(customer_id.to_string()))?;
    let business_info = BusinessRepo::new(&store).get()?;
    let settings = SettingsRepo::new(&store).get()?;

    let items: Vec<InvoiceItem> = items_input
        .iter()
        .map(|input| parse_item_input(input))
        .collect::<Result<_>>()?;

    // A caller-supplied number must pass the uniqueness check; otherwise
    // allocate the next one from the counter.
    let numbering = NumberingService::new(&store);
    let invoice_number = match number {
        Some(n) => {
            if !numbering.is_unique(&n, None)? {
                return Err(Error::DuplicateInvoiceNumber(n));
            }
            n
        }
        None => numbering.allocate_next()?,
    };

    let invoice_date = match date {
        Some(s) => parse_date(&s)?,
        None => Local::now().date_naive(),
    };
    let due_date = match due {
        Some(s) => parse_date(&s)?,
        None => invoice_date + Duration::days(30),
    };

    let rate = tax_rate.unwrap_or(settings.tax_rate);
    let totals = compute_totals(&items, rate);
    let tax = (rate > 0.0).then_some(Tax {
        rate,
        amount: totals.tax,
    });

    let status = match status {
        Some(s) => s.parse::<InvoiceStatus>()?,
        None => InvoiceStatus::Draft,
    };

    let invoice = InvoiceRepo::new(&store).create(NewInvoice {
        invoice_number,
        invoice_date,
        due_date,
        customer_id: customer_id.to_string(),
        customer: customer.clone(),
        business_info,
        items,
        subtotal: totals.subtotal,
        tax,
        total: totals.total,
        status,
        notes,
    })?;

    println!("Created invoice {}", invoice.invoice_number);
    println!("  Id:       {}", invoice.id);
    println!("  Customer: {}", customer.name);
    println!("  Total:    {}", format_money(invoice.total));
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_invoice_edit(
    data_dir: &PathBuf,
    id: &str,
    items_input: &[String],
    number: Option<String>,
    date: Option<String>,
    due: Option<String>,
    tax_rate: Option<f64>,
    notes: Option<String>,
    status: Option<String>,
) -> Result<()> {
    let store = open_store(data_dir)?;

    if let Some(n) = &number {
        let numbering = NumberingService::new(&store);
        if !numbering.is_unique(n, Some(id))? {
            return Err(Error::DuplicateInvoiceNumber(n.clone()));
        }
    }

    let items = if items_input.is_empty() {
        None
    } else {
        Some(
            items_input
                .iter()
                .map(|input| parse_item_input(input))
                .collect::<Result<Vec<_>>>()?,
        )
    };

    let patch = InvoicePatch {
        invoice_number: number,
        invoice_date: date.map(|s| parse_date(&s)).transpose()?,
        due_date: due.map(|s| parse_date(&s)).transpose()?,
        items,
        tax_rate,
        status: status.map(|s| s.parse::<InvoiceStatus>()).transpose()?,
        notes,
    };

    let updated = InvoiceRepo::new(&store)
        .update(id, patch)?
        .ok_or_else(|| Error::InvoiceNotFound(id.to_string()))?;

    println!("Updated invoice {}", updated.invoice_number);
    println!("  Total: {}", format_money(updated.total));
    Ok(())
}

fn cmd_invoice_set_status(data_dir: &PathBuf, id: &str, status: &str) -> Result<()> {
    let store = open_store(data_dir)?;
    let status = status.parse::<InvoiceStatus>()?;

    let patch = InvoicePatch {
        status: Some(status),
        ..Default::default()
    };
    let updated = InvoiceRepo::new(&store)
        .update(id, patch)?
        .ok_or_else(|| Error::InvoiceNotFound(id.to_string()))?;

    println!("Marked {} as {}", updated.invoice_number, updated.status);
    Ok(())
}

fn cmd_invoice_delete(data_dir: &PathBuf, id: &str) -> Result<()> {
    let store = open_store(data_dir)?;
    if !InvoiceRepo::new(&store).delete(id)? {
        return Err(Error::InvoiceNotFound(id.to_string()));
    }
    println!("Deleted invoice {id}");
    Ok(())
}

fn cmd_next_number(data_dir: &PathBuf) -> Result<()> {
    let store = open_store(data_dir)?;
    let number = NumberingService::new(&store).allocate_next()?;
    println!("{number}");
    Ok(())
}

fn cmd_validate_number(data_dir: &PathBuf, number: &str, exclude_id: Option<&str>) -> Result<()> {
    let store = open_store(data_dir)?;
    if NumberingService::new(&store).is_unique(number, exclude_id)? {
        println!("Invoice number '{number}' is available");
    } else {
        println!("Invoice number '{number}' is already taken");
    }
    Ok(())
}

fn cmd_settings_show(data_dir: &PathBuf) -> Result<()> {
    let store = open_store(data_dir)?;
    let settings = SettingsRepo::new(&store).get()?;

    println!("Settings");
    println!("{}", "-".repeat(40));
    println!("Next invoice number: {} ({})", settings.next_invoice_number, NumberingService::format(settings.next_invoice_number));
    println!("Tax rate:            {}", settings.tax_rate);
    println!("Currency:            {}", settings.currency);
    println!("Color template:      {}", settings.color_template);
    Ok(())
}

fn cmd_settings_set(
    data_dir: &PathBuf,
    next_invoice_number: Option<u32>,
    tax_rate: Option<f64>,
    currency: Option<String>,
    color_template: Option<String>,
) -> Result<()> {
    let store = open_store(data_dir)?;
    let repo = SettingsRepo::new(&store);
    let mut settings = repo.get()?;

    if let Some(n) = next_invoice_number {
        settings.next_invoice_number = n;
    }
    if let Some(rate) = tax_rate {
        settings.tax_rate = rate;
    }
    if let Some(currency) = currency {
        settings.currency = currency;
    }
    if let Some(template) = color_template {
        settings.color_template = template;
    }

    repo.update(&settings)?;
    println!("Updated settings");
    Ok(())
}

fn cmd_dashboard(data_dir: &PathBuf) -> Result<()> {
    let store = open_store(data_dir)?;
    let invoices = InvoiceRepo::new(&store).list()?;
    let customers = CustomerRepo::new(&store).list()?;

    let stats = compute_stats(&invoices, &customers);

    println!("Dashboard");
    println!("{}", "-".repeat(40));
    println!("Invoices:  {}", stats.total_invoices);
    println!("Customers: {}", stats.total_customers);
    println!("Revenue:   {}", format_money(stats.total_revenue));
    println!("Pending:   {}", stats.pending_invoices);

    let recent = recent_invoices(&invoices);
    if !recent.is_empty() {
        println!();
        println!("Recent invoices:");
        for invoice in &recent {
            println!(
                "  {} - {} - {}",
                invoice.invoice_number,
                invoice.customer.name,
                format_money(invoice.total)
            );
        }
    }

    Ok(())
}
