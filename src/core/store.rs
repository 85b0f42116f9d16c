use super::error::FakturaError;
use super::types::Invoice;

/// Append-only persistence for issued invoices.
pub trait InvoiceStore {
    /// Persist an invoice. Identifiers must be unique within the store.
    fn save(&mut self, invoice: Invoice) -> Result<(), FakturaError>;

    /// All invoices, in the order they were saved.
    fn list(&self) -> &[Invoice];

    fn get(&self, id: &str) -> Option<&Invoice> {
        self.list().iter().find(|inv| inv.id() == id)
    }
}

/// In-memory [`InvoiceStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryInvoiceStore {
    invoices: Vec<Invoice>,
}

impl MemoryInvoiceStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Invoices whose id, client name or client country contains `term`,
    /// ignoring case. An empty term matches everything.
    pub fn search(&self, term: &str) -> Vec<&Invoice> {
        let term = term.to_lowercase();
        self.invoices
            .iter()
            .filter(|inv| {
                inv.client().name.to_lowercase().contains(&term)
                    || inv.id().to_lowercase().contains(&term)
                    || inv.client().country.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Number of stored invoices.
    pub fn len(&self) -> usize {
        self.invoices.len()
    }

    /// True if nothing has been saved yet.
    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty()
    }
}

impl InvoiceStore for MemoryInvoiceStore {
    fn save(&mut self, invoice: Invoice) -> Result<(), FakturaError> {
        if self.get(invoice.id()).is_some() {
            return Err(FakturaError::Store(format!(
                "invoice '{}' already exists",
                invoice.id()
            )));
        }
        self.invoices.push(invoice);
        Ok(())
    }

    fn list(&self) -> &[Invoice] {
        &self.invoices
    }
}
