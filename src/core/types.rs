use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::vat::{self, LineAmounts};

/// Invoice recipient.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Company or person name.
    pub name: String,
    /// Postal address, one line per `\n`.
    pub address: String,
    /// Country label as used in the rate table (e.g. "Polska"), or empty.
    pub country: String,
    /// Tax identifier (NIP, VAT ID, ...).
    pub tax_id: Option<String>,
}

/// One priced invoice row.
///
/// `net_price`, `vat_amount` and `gross_price` are line totals (already
/// multiplied by `quantity`), not unit prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub quantity: u32,
    /// VAT rate in percent.
    pub vat_rate: Decimal,
    pub net_price: Decimal,
    pub vat_amount: Decimal,
    pub gross_price: Decimal,
}

impl Product {
    /// Price a line from its unit gross price.
    pub fn priced(
        name: impl Into<String>,
        unit_gross: Decimal,
        vat_rate: Decimal,
        quantity: u32,
    ) -> Self {
        let amounts = vat::decompose(unit_gross, vat_rate, quantity);
        Self::from_amounts(name, vat_rate, quantity.max(1), amounts)
    }

    /// An unpriced row: quantity 1, all amounts zero.
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: 1,
            vat_rate: Decimal::ZERO,
            net_price: Decimal::ZERO,
            vat_amount: Decimal::ZERO,
            gross_price: Decimal::ZERO,
        }
    }

    /// Apply a new VAT rate and re-split the current line gross.
    pub fn with_vat_rate(self, vat_rate: Decimal) -> Self {
        Self { vat_rate, ..self }.recalculate()
    }

    /// Re-split the current line gross into net and VAT.
    ///
    /// The line gross is divided back into a unit price first, so a total that
    /// does not divide evenly by the quantity loses the remainder cents.
    pub fn recalculate(self) -> Self {
        let amounts = vat::decompose_line(self.gross_price, self.vat_rate, self.quantity);
        Self::from_amounts(self.name, self.vat_rate, self.quantity.max(1), amounts)
    }

    /// True if the line carries a positive gross amount.
    pub fn is_priced(&self) -> bool {
        self.gross_price > Decimal::ZERO
    }

    fn from_amounts(
        name: impl Into<String>,
        vat_rate: Decimal,
        quantity: u32,
        amounts: LineAmounts,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            vat_rate,
            net_price: amounts.net_price,
            vat_amount: amounts.vat_amount,
            gross_price: amounts.gross_price,
        }
    }
}

/// Invoice totals: field-wise sums over the invoice lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub net: Decimal,
    pub vat: Decimal,
    pub gross: Decimal,
}

impl Totals {
    /// Sum the amounts of the given lines. Sums beyond the `Decimal` range
    /// saturate.
    pub fn of<'a>(products: impl IntoIterator<Item = &'a Product>) -> Self {
        products.into_iter().fold(Self::default(), |acc, p| Self {
            net: acc.net.saturating_add(p.net_price),
            vat: acc.vat.saturating_add(p.vat_amount),
            gross: acc.gross.saturating_add(p.gross_price),
        })
    }
}

/// An issued invoice.
///
/// Fields are read-only once assembled; build one with
/// [`InvoiceAssembler`](super::InvoiceAssembler) or [`assemble_with_id`](super::assemble_with_id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub(crate) id: String,
    pub(crate) client: Client,
    pub(crate) products: Vec<Product>,
    pub(crate) date: NaiveDate,
    pub(crate) total: Totals,
}

impl Invoice {
    /// Invoice identifier, e.g. "INV-482913".
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Snapshot of the client at assembly time.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Lines with a positive gross price, in input order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Issue date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Sums over [`products`](Self::products).
    pub fn total(&self) -> Totals {
        self.total
    }
}

/// Issuer details handed to the document renderer alongside an invoice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SellerDetails {
    pub name: String,
    pub address: String,
    pub tax_id: Option<String>,
    pub bank_account: Option<String>,
}
