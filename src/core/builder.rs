use rust_decimal::Decimal;

use super::types::*;

/// Builder for [`Client`].
///
/// ```
/// use faktura_vat::core::*;
///
/// let client = ClientBuilder::new("Acme Corp")
///     .address_line("5 Elm St")
///     .address_line("10115 Berlin")
///     .country("Niemcy")
///     .tax_id("DE123456789")
///     .build();
///
/// assert_eq!(client.address, "5 Elm St\n10115 Berlin");
/// ```
pub struct ClientBuilder {
    name: String,
    address_lines: Vec<String>,
    country: String,
    tax_id: Option<String>,
}

impl ClientBuilder {
    /// Start a client with the given name and nothing else.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address_lines: Vec::new(),
            country: String::new(),
            tax_id: None,
        }
    }

    /// Replace the address with a (possibly multi-line) block.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address_lines = vec![address.into()];
        self
    }

    /// Append one address line.
    pub fn address_line(mut self, line: impl Into<String>) -> Self {
        self.address_lines.push(line.into());
        self
    }

    /// Set the country label (e.g. "Polska").
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Set the tax identifier (NIP or VAT ID).
    pub fn tax_id(mut self, id: impl Into<String>) -> Self {
        self.tax_id = Some(id.into());
        self
    }

    /// Finish the client, joining address lines with `\n`.
    pub fn build(self) -> Client {
        Client {
            name: self.name,
            address: self.address_lines.join("\n"),
            country: self.country,
            tax_id: self.tax_id,
        }
    }
}

/// Builder for a priced [`Product`] line.
///
/// ```
/// use faktura_vat::core::*;
/// use rust_decimal_macros::dec;
///
/// let line = ProductBuilder::new("Spoiler", dec!(246))
///     .quantity(2)
///     .vat_rate(dec!(23))
///     .build();
///
/// assert_eq!(line.net_price, dec!(400));
/// assert_eq!(line.gross_price, dec!(492));
/// ```
pub struct ProductBuilder {
    name: String,
    unit_gross: Decimal,
    quantity: u32,
    vat_rate: Decimal,
}

impl ProductBuilder {
    /// Start a line from its unit gross price. Defaults: quantity 1, 0% VAT.
    pub fn new(name: impl Into<String>, unit_gross: Decimal) -> Self {
        Self {
            name: name.into(),
            unit_gross,
            quantity: 1,
            vat_rate: Decimal::ZERO,
        }
    }

    /// Set the quantity (0 is treated as 1).
    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Set the VAT rate in percent.
    pub fn vat_rate(mut self, rate: Decimal) -> Self {
        self.vat_rate = rate;
        self
    }

    /// Take the rate configured for `country`, 0% if it has none.
    pub fn vat_rate_for(mut self, country: &str, table: &crate::vat::RateTable) -> Self {
        self.vat_rate = table.resolve(country);
        self
    }

    /// Price the line with [`Product::priced`].
    pub fn build(self) -> Product {
        Product::priced(self.name, self.unit_gross, self.vat_rate, self.quantity)
    }
}
