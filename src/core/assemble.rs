use chrono::NaiveDate;
use tracing::debug;

use super::error::FakturaError;
use super::numbering::InvoiceIdGenerator;
use super::types::*;
use super::validation;

/// Turns a client and its priced lines into an [`Invoice`].
///
/// ```
/// use chrono::NaiveDate;
/// use faktura_vat::core::*;
/// use rust_decimal_macros::dec;
///
/// let client = ClientBuilder::new("Jan Kowalski")
///     .address("ul. Długa 1\n00-001 Warszawa")
///     .country("Polska")
///     .build();
///
/// let mut assembler = InvoiceAssembler::new();
/// let invoice = assembler.assemble(
///     client,
///     vec![
///         Product::placeholder("Spoiler"),
///         Product::priced("Wysyłka", dec!(100), dec!(23), 1),
///     ],
///     NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
/// );
///
/// assert!(invoice.id().starts_with("INV-"));
/// assert_eq!(invoice.products().len(), 1);
/// assert_eq!(invoice.total().gross, dec!(100));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InvoiceAssembler {
    ids: InvoiceIdGenerator,
}

impl InvoiceAssembler {
    /// Assembler with the default `INV-` id generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembler issuing ids from `ids`.
    pub fn with_generator(ids: InvoiceIdGenerator) -> Self {
        Self { ids }
    }

    /// The id generator, e.g. to persist its last issued stamp.
    pub fn generator(&self) -> &InvoiceIdGenerator {
        &self.ids
    }

    /// Assemble an invoice with a freshly generated identifier.
    ///
    /// Performs no validation: run [`validate_draft`](super::validate_draft)
    /// first, or use [`assemble_checked`](Self::assemble_checked).
    pub fn assemble(
        &mut self,
        client: Client,
        products: Vec<Product>,
        date: NaiveDate,
    ) -> Invoice {
        let id = self.ids.next_id();
        assemble_with_id(id, client, products, date)
    }

    /// Validate the draft, then assemble it.
    /// Returns all validation errors (not just the first).
    pub fn assemble_checked(
        &mut self,
        client: Client,
        products: Vec<Product>,
        date: NaiveDate,
    ) -> Result<Invoice, FakturaError> {
        let errors = validation::validate_draft(&client, &products);
        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(FakturaError::Validation(msg));
        }
        Ok(self.assemble(client, products, date))
    }
}

/// Assemble an invoice under a caller-chosen identifier.
///
/// Lines with a zero or negative gross price are dropped; the totals are the
/// sums over the remaining lines.
pub fn assemble_with_id(
    id: impl Into<String>,
    client: Client,
    products: Vec<Product>,
    date: NaiveDate,
) -> Invoice {
    let submitted = products.len();
    let products: Vec<Product> = products.into_iter().filter(Product::is_priced).collect();
    let total = Totals::of(&products);
    let id = id.into();

    debug!(
        invoice_id = %id,
        lines = products.len(),
        dropped = submitted - products.len(),
        gross = %total.gross,
        "assembled invoice"
    );

    Invoice {
        id,
        client,
        products,
        date,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn client() -> Client {
        Client {
            name: "Acme Corp".into(),
            address: "5 Elm St".into(),
            country: "Niemcy".into(),
            tax_id: Some("DE123456789".into()),
        }
    }

    #[test]
    fn zero_priced_lines_are_dropped() {
        let inv = assemble_with_id(
            "INV-000001",
            client(),
            vec![
                Product::placeholder("Spoiler"),
                Product::priced("Wysyłka", dec!(100), dec!(23), 1),
            ],
            date(),
        );
        assert_eq!(inv.products().len(), 1);
        assert_eq!(inv.products()[0].name, "Wysyłka");
        assert_eq!(inv.total().gross, dec!(100));
        assert_eq!(inv.total().net, dec!(81.30));
        assert_eq!(inv.total().vat, dec!(18.70));
    }

    #[test]
    fn negative_lines_do_not_reduce_totals() {
        let mut refund = Product::priced("Rabat", dec!(10), dec!(0), 1);
        refund.gross_price = dec!(-10);
        refund.net_price = dec!(-10);
        let inv = assemble_with_id(
            "INV-000002",
            client(),
            vec![refund, Product::priced("A", dec!(50), dec!(0), 1)],
            date(),
        );
        assert_eq!(inv.total().gross, dec!(50));
    }

    #[test]
    fn totals_sum_all_lines_in_order() {
        let inv = assemble_with_id(
            "INV-000003",
            client(),
            vec![
                Product::priced("A", dec!(119), dec!(19), 2),
                Product::priced("B", dec!(10), dec!(19), 3),
            ],
            date(),
        );
        // A: 100 + 19 per unit; B: 8.40 + 1.60 per unit
        assert_eq!(inv.total().net, dec!(225.20));
        assert_eq!(inv.total().vat, dec!(42.80));
        assert_eq!(inv.total().gross, dec!(268));
        let names: Vec<_> = inv.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn client_snapshot_kept() {
        let inv = assemble_with_id("INV-000004", client(), vec![], date());
        assert_eq!(inv.client(), &client());
        assert_eq!(inv.date(), date());
        assert_eq!(inv.total(), Totals::default());
    }

    #[test]
    fn assembler_issues_distinct_ids() {
        let mut assembler = InvoiceAssembler::new();
        let a = assembler.assemble(client(), vec![], date());
        let b = assembler.assemble(client(), vec![], date());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn checked_assembly_reports_all_problems() {
        let mut assembler = InvoiceAssembler::new();
        let err = assembler
            .assemble_checked(Client::default(), vec![Product::placeholder("X")], date())
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("client name is required"));
        assert!(msg.contains("client country is required"));
        assert!(msg.contains("add at least one product with a price"));
        assert!(assembler.generator().last_issued().is_none());
    }

    #[test]
    fn checked_assembly_passes_valid_draft() {
        let mut assembler = InvoiceAssembler::new();
        let inv = assembler
            .assemble_checked(
                client(),
                vec![Product::priced("A", dec!(119), dec!(19), 1)],
                date(),
            )
            .unwrap();
        assert_eq!(inv.total().net, dec!(100));
    }
}
