//! Receipt

use std::io;

use clap::ValueEnum;
use rusty_money::{Money as CurrencyMoney, iso::Currency};
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    basket::Basket,
    discounts::{AppliedDiscount, total_discount},
    money::Money,
    products::Product,
    service::OfferService,
};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// An amount is too large to express in the currency's minor units.
    #[error("amount {0} cannot be represented in minor units")]
    Unrepresentable(Money),

    /// IO error
    #[error("failed to write receipt: {0}")]
    Io(#[from] io::Error),
}

/// How a receipt is laid out when written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReceiptStyle {
    /// Subtotal, one line per discount, total
    #[default]
    Plain,

    /// A table of basket lines followed by the discounts and totals
    Table,
}

/// Final receipt for a priced basket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Total cost before any discounts
    subtotal: Money,

    /// Discounts in offer declaration order
    discounts: Vec<AppliedDiscount>,

    /// Subtotal less every discount; may be negative
    total: Money,
}

impl Receipt {
    /// Price a basket against the offers held by `service`.
    pub fn new(basket: &Basket, service: &OfferService) -> Self {
        Self::from_parts(basket.subtotal(), service.calculate_discounts(basket))
    }

    /// Build a receipt from a subtotal and the discounts taken off it.
    ///
    /// The total is not clamped, so discounts larger than the subtotal give a
    /// negative total.
    pub fn from_parts(subtotal: Money, discounts: Vec<AppliedDiscount>) -> Self {
        let total = subtotal - total_discount(&discounts);

        Self {
            subtotal,
            discounts,
            total,
        }
    }

    /// Total cost before any discounts
    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    /// Discounts applied, in offer declaration order
    pub fn discounts(&self) -> &[AppliedDiscount] {
        &self.discounts
    }

    /// Total amount to pay
    pub fn total(&self) -> Money {
        self.total
    }

    /// Sum of every applied discount.
    pub fn savings(&self) -> Money {
        self.subtotal - self.total
    }

    /// Write the receipt in the given style.
    ///
    /// Amounts are rounded to the currency's minor units here and nowhere else.
    ///
    /// # Errors
    ///
    /// Returns an error if an amount cannot be formatted or writing fails.
    pub fn write_to(
        &self,
        mut out: impl io::Write,
        basket: &Basket,
        currency: &'static Currency,
        style: ReceiptStyle,
    ) -> Result<(), ReceiptError> {
        match style {
            ReceiptStyle::Plain => self.write_plain(&mut out, currency),
            ReceiptStyle::Table => self.write_table(&mut out, basket, currency),
        }
    }

    fn write_plain(
        &self,
        out: &mut impl io::Write,
        currency: &'static Currency,
    ) -> Result<(), ReceiptError> {
        writeln!(out, "Subtotal: {}", format_money(self.subtotal, currency)?)?;

        if self.discounts.is_empty() {
            writeln!(out, "(No offers available)")?;
        }

        for discount in &self.discounts {
            writeln!(
                out,
                "{}: {}",
                discount.label,
                format_saving(discount.amount, currency)?
            )?;
        }

        writeln!(out, "Total: {}", format_money(self.total, currency)?)?;

        Ok(())
    }

    fn write_table(
        &self,
        out: &mut impl io::Write,
        basket: &Basket,
        currency: &'static Currency,
    ) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["Item", "Unit", "Qty", "Unit Price", "Line Total"]);

        let mut lines: Vec<(&Product, i64)> = basket.lines().collect();
        lines.sort_by(|(a, _), (b, _)| a.name.cmp(&b.name).then_with(|| a.sku.cmp(&b.sku)));

        for (product, quantity) in &lines {
            builder.push_record([
                product.name.clone(),
                product.unit.clone(),
                quantity.to_string(),
                format_money(product.unit_price, currency)?,
                format_money(basket.line_subtotal(product), currency)?,
            ]);
        }

        for discount in &self.discounts {
            builder.push_record([
                discount.label.clone(),
                String::new(),
                String::new(),
                String::new(),
                format!("-{}", format_saving(discount.amount, currency)?),
            ]);
        }

        let mut table = builder.build();
        let mut theme = Theme::from(Style::modern_rounded());
        let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

        theme.remove_horizontal_lines();
        theme.insert_horizontal_line(1, separator);

        if !self.discounts.is_empty() {
            theme.insert_horizontal_line(lines.len() + 1, separator);
        }

        table.with(theme);
        table.modify(Columns::new(2..5), Alignment::right());
        table.modify(Rows::first(), Alignment::center());

        writeln!(out, "{table}")?;
        writeln!(out, " Subtotal: {}", format_money(self.subtotal, currency)?)?;
        writeln!(out, " Savings:  {}", format_money(self.savings(), currency)?)?;
        writeln!(out, " Total:    {}", format_money(self.total, currency)?)?;

        Ok(())
    }
}

/// Format an amount in the currency's own notation (e.g. "£7.20").
///
/// # Errors
///
/// Returns [`ReceiptError::Unrepresentable`] if the amount overflows minor units.
pub fn format_money(money: Money, currency: &'static Currency) -> Result<String, ReceiptError> {
    let minor = to_minor(money, currency)?;

    Ok(CurrencyMoney::from_minor(minor, currency).to_string())
}

/// Format a saving; sterling amounts under a pound are shown in pence ("30p").
///
/// # Errors
///
/// Returns [`ReceiptError::Unrepresentable`] if the amount overflows minor units.
pub fn format_saving(money: Money, currency: &'static Currency) -> Result<String, ReceiptError> {
    let minor = to_minor(money, currency)?;

    if currency.iso_alpha_code == "GBP" && minor.unsigned_abs() < 100 {
        return Ok(format!("{minor}p"));
    }

    Ok(CurrencyMoney::from_minor(minor, currency).to_string())
}

fn to_minor(money: Money, currency: &'static Currency) -> Result<i64, ReceiptError> {
    money
        .to_minor_units(currency.exponent)
        .ok_or(ReceiptError::Unrepresentable(money))
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use rust_decimal::Decimal;
    use rusty_money::iso::GBP;
    use testresult::TestResult;

    use crate::offers::{BuyNGetMOfOtherAtPercent, Offer, PercentageOffSingleProduct};

    use super::*;

    fn apples() -> Product {
        Product::new("apples", "Apples", "bag", Money::from_minor(100))
    }

    fn soup() -> Product {
        Product::new("soup", "Soup", "tin", Money::from_minor(65))
    }

    fn bread() -> Product {
        Product::new("bread", "Bread", "loaf", Money::from_minor(80))
    }

    fn service() -> OfferService {
        OfferService::new([
            Offer::from(PercentageOffSingleProduct::new(
                "Apples 10% off",
                apples(),
                Decimal::TEN,
            )),
            Offer::from(BuyNGetMOfOtherAtPercent::new(
                "Buy 2 Soup get Bread 50% off",
                soup(),
                NonZeroU32::MIN.saturating_add(1),
                bread(),
                1,
                Decimal::new(50, 0),
            )),
        ])
    }

    fn render(receipt: &Receipt, basket: &Basket, style: ReceiptStyle) -> TestResult<String> {
        let mut out = Vec::new();

        receipt.write_to(&mut out, basket, GBP, style)?;

        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn new_combines_subtotal_and_discounts() {
        let basket = Basket::new()
            .add_quantity(&apples(), 3)
            .add_quantity(&soup(), 4)
            .add_quantity(&bread(), 2);

        let receipt = Receipt::new(&basket, &service());

        assert_eq!(receipt.subtotal(), Money::from_minor(720));
        assert_eq!(receipt.discounts().len(), 2);
        assert_eq!(receipt.savings(), Money::from_minor(110));
        assert_eq!(receipt.total(), Money::from_minor(610));
    }

    #[test]
    fn total_is_not_clamped_at_zero() {
        let receipt = Receipt::from_parts(
            Money::from_minor(100),
            vec![AppliedDiscount::new("Too generous", Money::from_minor(150))],
        );

        assert_eq!(receipt.total(), Money::from_minor(-50));
    }

    #[test]
    fn plain_receipt_lists_discounts() -> TestResult {
        let basket = Basket::new().add(&apples()).add(&bread()).add_quantity(&soup(), 2);
        let receipt = Receipt::new(&basket, &service());

        assert_eq!(
            render(&receipt, &basket, ReceiptStyle::Plain)?,
            "Subtotal: £3.10\nApples 10% off: 10p\nBuy 2 Soup get Bread 50% off: 40p\nTotal: £2.60\n"
        );

        Ok(())
    }

    #[test]
    fn plain_receipt_without_discounts() -> TestResult {
        let basket = Basket::new().add(&bread());
        let receipt = Receipt::new(&basket, &service());

        assert_eq!(
            render(&receipt, &basket, ReceiptStyle::Plain)?,
            "Subtotal: £0.80\n(No offers available)\nTotal: £0.80\n"
        );

        Ok(())
    }

    #[test]
    fn table_receipt_includes_lines_and_totals() -> TestResult {
        let basket = Basket::new().add_quantity(&apples(), 3).add(&bread());
        let receipt = Receipt::new(&basket, &service());

        let output = render(&receipt, &basket, ReceiptStyle::Table)?;

        assert!(output.contains("Apples"), "missing apples line: {output}");
        assert!(output.contains("Bread"), "missing bread line: {output}");
        assert!(output.contains("-30p"), "missing discount row: {output}");
        assert!(output.contains(" Total:    £3.50"), "missing total: {output}");

        Ok(())
    }

    #[test]
    fn format_saving_uses_pence_below_a_pound() -> TestResult {
        assert_eq!(format_saving(Money::from_minor(30), GBP)?, "30p");
        assert_eq!(format_saving(Money::new(Decimal::new(65, 3)), GBP)?, "7p");
        assert_eq!(format_saving(Money::from_minor(150), GBP)?, "£1.50");

        Ok(())
    }

    #[test]
    fn format_money_rounds_to_minor_units() -> TestResult {
        assert_eq!(format_money(Money::new(Decimal::new(7195, 3)), GBP)?, "£7.20");
        assert_eq!(format_money(Money::ZERO, GBP)?, "£0.00");

        Ok(())
    }
}
