use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::ValidationError;
use super::types::*;

/// Check that a client carries everything an invoice needs.
/// Returns all validation errors found (not just the first).
pub fn validate_client(client: &Client) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if client.name.trim().is_empty() {
        errors.push(ValidationError::new(
            "client.name",
            "client name is required",
        ));
    }
    if client.address.trim().is_empty() {
        errors.push(ValidationError::new(
            "client.address",
            "client address is required",
        ));
    }
    if client.country.trim().is_empty() {
        errors.push(ValidationError::new(
            "client.country",
            "client country is required",
        ));
    }

    errors
}

/// Check that at least one line has a price and no line amount ran past
/// the representable range.
pub fn validate_products(products: &[Product]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !products.iter().any(Product::is_priced) {
        errors.push(ValidationError::new(
            "products",
            "add at least one product with a price",
        ));
    }
    for (i, line) in products.iter().enumerate() {
        if out_of_range(line) {
            errors.push(ValidationError::new(
                format!("products[{i}]"),
                "price times quantity is too large",
            ));
        }
    }

    errors
}

/// A line whose amounts saturated during decomposition.
fn out_of_range(line: &Product) -> bool {
    [line.net_price, line.vat_amount, line.gross_price]
        .iter()
        .any(|amount| *amount == Decimal::MAX || *amount == Decimal::MIN)
}

/// Preconditions for issuing an invoice from a client and its lines.
pub fn validate_draft(client: &Client, products: &[Product]) -> Vec<ValidationError> {
    let mut errors = validate_client(client);
    errors.extend(validate_products(products));
    errors
}

/// Check invoice arithmetic: every line's gross equals net + VAT within one
/// cent per unit, and the totals equal the line sums.
pub fn validate_arithmetic(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (i, line) in invoice.products().iter().enumerate() {
        // each unit split is rounded independently, so drift scales with quantity
        let tolerance = dec!(0.01) * Decimal::from(line.quantity.max(1));
        if out_of_range(line) {
            errors.push(ValidationError::new(
                format!("products[{i}]"),
                "line amounts are out of range",
            ));
            continue;
        }
        let diff = (line.net_price + line.vat_amount - line.gross_price).abs();
        if diff > tolerance {
            errors.push(ValidationError::new(
                format!("products[{i}]"),
                format!(
                    "gross {} does not match net {} + VAT {}",
                    line.gross_price, line.net_price, line.vat_amount
                ),
            ));
        }
    }

    let expected = Totals::of(invoice.products());
    let total = invoice.total();
    if total.net != expected.net {
        errors.push(ValidationError::new(
            "total.net",
            format!(
                "net total {} does not match sum of lines {}",
                total.net, expected.net
            ),
        ));
    }
    if total.vat != expected.vat {
        errors.push(ValidationError::new(
            "total.vat",
            format!(
                "VAT total {} does not match sum of lines {}",
                total.vat, expected.vat
            ),
        ));
    }
    if total.gross != expected.gross {
        errors.push(ValidationError::new(
            "total.gross",
            format!(
                "gross total {} does not match sum of lines {}",
                total.gross, expected.gross
            ),
        ));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn client() -> Client {
        Client {
            name: "Jan Kowalski".into(),
            address: "ul. Długa 1\n00-001 Warszawa".into(),
            country: "Polska".into(),
            tax_id: None,
        }
    }

    #[test]
    fn complete_client_passes() {
        assert!(validate_client(&client()).is_empty());
    }

    #[test]
    fn blank_fields_reported_individually() {
        let errors = validate_client(&Client {
            name: "  ".into(),
            ..Client::default()
        });
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            ["client.name", "client.address", "client.country"]
        );
    }

    #[test]
    fn unpriced_products_rejected() {
        let products = vec![Product::placeholder("Spoiler"), Product::placeholder("Wysyłka")];
        let errors = validate_products(&products);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "products: add at least one product with a price");
        assert!(validate_products(&[]).len() == 1);
    }

    #[test]
    fn one_priced_product_is_enough() {
        let products = vec![
            Product::placeholder("Spoiler"),
            Product::priced("Wysyłka", dec!(20), dec!(23), 1),
        ];
        assert!(validate_draft(&client(), &products).is_empty());
    }

    #[test]
    fn arithmetic_of_assembled_invoice_is_consistent() {
        let invoice = super::super::assemble_with_id(
            "INV-000001",
            client(),
            vec![
                Product::priced("A", dec!(33.33), dec!(23), 7),
                Product::priced("B", dec!(0.99), dec!(19), 1000),
            ],
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        );
        assert!(validate_arithmetic(&invoice).is_empty());
    }

    #[test]
    fn saturated_line_rejected() {
        let products = vec![
            Product::priced("A", dec!(10), dec!(23), 1),
            Product::priced("B", Decimal::MAX, dec!(23), 3),
        ];
        let errors = validate_draft(&client(), &products);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "products[1]");

        let invoice = super::super::assemble_with_id(
            "INV-000003",
            client(),
            products,
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        );
        assert_eq!(invoice.total().gross, Decimal::MAX);
        let errors = validate_arithmetic(&invoice);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "products[1]");
    }

    #[test]
    fn tampered_totals_detected() {
        let mut invoice = super::super::assemble_with_id(
            "INV-000002",
            client(),
            vec![Product::priced("A", dec!(100), dec!(23), 1)],
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        );
        invoice.total.gross = dec!(99);
        let errors = validate_arithmetic(&invoice);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "total.gross");
    }
}
