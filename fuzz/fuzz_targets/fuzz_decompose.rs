#![no_main]

use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

fuzz_target!(|input: (i128, u32, i64, u32, u32)| {
    let (gross_mantissa, gross_scale, rate_mantissa, rate_scale, quantity) = input;
    let Ok(gross) = Decimal::try_from_i128_with_scale(gross_mantissa, gross_scale % 29) else {
        return;
    };
    let rate = Decimal::new(rate_mantissa, rate_scale % 29);

    // Must not panic for any well-typed input.
    let line = faktura_vat::vat::decompose(gross, rate, quantity);
    let product = faktura_vat::core::Product::priced("Fuzz", gross, rate, quantity);
    let _ = faktura_vat::core::Totals::of([&product, &product]);
    let _ = faktura_vat::core::validate_products(&[product]);
    let _ = line;
});
