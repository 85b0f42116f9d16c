use chrono::NaiveDate;
use faktura_vat::client::parse_client;
use faktura_vat::core::*;
use rust_decimal_macros::dec;

fn main() {
    let settings = Settings::from_json_or_default(
        r#"{ "seller": { "name": "Spoiler Shop", "address": "ul. Krótka 2\n31-000 Kraków" } }"#,
    );

    // Client block as pasted from an e-mail
    let client = parse_client(
        "Acme GmbH\nFriedrichstraße 123\n10115 Berlin\nUSt-IdNr.: DE123456789\nGermany",
    );

    let mut rows = settings.draft_products(&client);
    rows[0].gross_price = dec!(595);
    rows[0] = rows[0].clone().recalculate();
    rows[1].quantity = 1;
    rows[1].gross_price = dec!(23.80);
    rows[1] = rows[1].clone().recalculate();

    let mut assembler = InvoiceAssembler::new();
    let invoice = match assembler.assemble_checked(
        client,
        rows,
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
    ) {
        Ok(invoice) => invoice,
        Err(err) => {
            eprintln!("cannot generate invoice: {err}");
            std::process::exit(1);
        }
    };

    println!("Invoice: {}", invoice.id());
    println!("Date:    {}", invoice.date());
    println!("Seller:  {}", settings.seller.name);
    println!("Buyer:   {} ({})", invoice.client().name, invoice.client().country);
    if let Some(tax_id) = &invoice.client().tax_id {
        println!("Tax ID:  {tax_id}");
    }
    println!("---");
    for line in invoice.products() {
        println!(
            "  {} x {} @ {}% = net {} + VAT {} = {}",
            line.quantity, line.name, line.vat_rate, line.net_price, line.vat_amount, line.gross_price
        );
    }
    println!("---");
    let total = invoice.total();
    println!("Net:    {}", total.net);
    println!("VAT:    {}", total.vat);
    println!("Gross:  {}", total.gross);

    let mut store = MemoryInvoiceStore::new();
    if let Err(err) = store.save(invoice) {
        eprintln!("{err}");
    }
    println!("Stored invoices: {}", store.len());
}
