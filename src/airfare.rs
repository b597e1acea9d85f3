pub const BAG_FEE: u128 = 25;
/// One dollar per this many miles, i.e. $0.10 a mile.
pub const MILES_PER_DOLLAR: u128 = 10;

/// Total fare for a party. Mileage cost is whole dollars: anything short of
/// `MILES_PER_DOLLAR` is dropped before multiplying by travelers.
pub fn calculate_airfare(checked_bags: u32, distance: u32, travelers: u32) -> f64 {
    // u128 holds the product of three u32 maxima
    let per_traveler = u128::from(checked_bags) * BAG_FEE + u128::from(distance) / MILES_PER_DOLLAR;
    (per_traveler * u128::from(travelers)) as f64
}

/// US currency style, e.g. `$1,234.50`.
pub fn format_usd(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u128;
    let dollars = (cents / 100).to_string();
    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, c) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}
