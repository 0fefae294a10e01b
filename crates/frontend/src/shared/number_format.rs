//! Форматирование денежных значений

/// Currency prefix used across the inventory tables (South African rand).
pub const CURRENCY_PREFIX: &str = "R";

/// Formats a money value with two decimals and the currency prefix
///
/// # Примеры
///
/// ```
/// use frontend::shared::number_format::format_money;
/// assert_eq!(format_money(10.5), "R10.50");
/// ```
pub fn format_money(value: f64) -> String {
    format!("{}{:.2}", CURRENCY_PREFIX, value)
}
