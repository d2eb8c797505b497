/// Formatea un importe como `"USD 1,234.50"`: código de moneda, separador de
/// miles y dos decimales. Sustituto simple de `Intl.NumberFormat`.
pub fn format_currency(amount: f64, currency: &str) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{} {}{}.{:02}", currency, sign, grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_and_pads_cents() {
        assert_eq!(format_currency(1234567.5, "USD"), "USD 1,234,567.50");
        assert_eq!(format_currency(150.0, "EUR"), "EUR 150.00");
        assert_eq!(format_currency(0.0, "USD"), "USD 0.00");
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(format_currency(99.999, "USD"), "USD 100.00");
        assert_eq!(format_currency(0.005, "USD"), "USD 0.01");
    }

    #[test]
    fn negative_amounts_keep_the_sign_inside() {
        assert_eq!(format_currency(-1200.0, "EUR"), "EUR -1,200.00");
    }
}
