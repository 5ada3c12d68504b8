use crate::model::{Customer, Invoice, InvoiceStatus};

/// Aggregate figures for the dashboard view.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_invoices: usize,
    pub total_customers: usize,
    pub total_revenue: f64,
    pub pending_invoices: usize,
}

/// Summarize the loaded collections: counts, revenue across all invoices,
/// and how many invoices are still unpaid.
pub fn compute_stats(invoices: &[Invoice], customers: &[Customer]) -> DashboardStats {
    DashboardStats {
        total_invoices: invoices.len(),
        total_customers: customers.len(),
        total_revenue: invoices.iter().map(|i| i.total).sum(),
        pending_invoices: invoices
            .iter()
            .filter(|i| i.status != InvoiceStatus::Paid)
            .count(),
    }
}

/// The five most recently created invoices, newest first.
pub fn recent_invoices(invoices: &[Invoice]) -> Vec<Invoice> {
    let mut sorted: Vec<Invoice> = invoices.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(5);
    sorted
}
