use evplan::currency::{format_inr, CurrencyFormatter};
use evplan_config::Config;

#[test]
fn rupees_use_indian_grouping() {
    assert_eq!(format_inr(0), "₹0");
    assert_eq!(format_inr(5262), "₹5,262");
    assert_eq!(format_inr(123456), "₹1,23,456");
    assert_eq!(format_inr(12345678), "₹1,23,45,678");
    assert_eq!(format_inr(-2500), "-₹2,500");
}

#[test]
fn other_locales_group_by_thousands() {
    let usd = CurrencyFormatter::new("usd", "en-US");
    assert_eq!(usd.code(), "USD");
    assert_eq!(usd.format(1234567), "$1,234,567");

    let chf = CurrencyFormatter::new("CHF", "de-CH");
    assert_eq!(chf.format(1500), "CHF 1,500");
}

#[test]
fn fractional_amounts_round_half_up() {
    let inr = CurrencyFormatter::default();
    assert_eq!(inr.format_f64(105.24), "₹105");
    assert_eq!(inr.format_f64(105.5), "₹106");
}

#[test]
fn formatter_follows_config() {
    let mut config = Config::default();
    assert_eq!(CurrencyFormatter::from_config(&config), CurrencyFormatter::default());

    config.currency = "EUR".into();
    config.locale = "fr-FR".into();
    assert_eq!(CurrencyFormatter::from_config(&config).format(100000), "€100,000");
}
