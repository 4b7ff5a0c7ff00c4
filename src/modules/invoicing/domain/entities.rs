/// Invoice entities and total computation
///
/// `total = sub_total + sub_total * tax / 100`, where `sub_total` is the sum of
/// `price * quantity` over the items. Totals are always derived here, never
/// taken from the caller.
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub description: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl InvoiceItem {
    pub fn new(description: impl Into<String>, price: Decimal, quantity: u32) -> Self {
        Self {
            description: description.into(),
            price,
            quantity,
        }
    }

    /// `None` when `price * quantity` leaves the decimal range
    pub fn line_total(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}

/// Caller input for the invoicing saga
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRequest {
    pub items: Vec<InvoiceItem>,
    /// Percentage applied to the subtotal
    pub tax: Decimal,
}

impl InvoiceRequest {
    /// Every line needs a description, a positive price and a quantity of
    /// at least one; the tax percentage cannot be negative
    pub fn validate(&self) -> AppResult<()> {
        for (index, item) in self.items.iter().enumerate() {
            if item.description.trim().is_empty() {
                return Err(AppError::BadRequest(format!(
                    "Invoice item {} needs a description",
                    index + 1
                )));
            }
            if item.price <= Decimal::ZERO {
                return Err(AppError::BadRequest(format!(
                    "Invoice item {} has a non-positive price ({})",
                    index + 1,
                    item.price
                )));
            }
            if item.quantity == 0 {
                return Err(AppError::BadRequest(format!(
                    "Invoice item {} has a zero quantity",
                    index + 1
                )));
            }
        }
        if self.tax.is_sign_negative() {
            return Err(AppError::BadRequest(format!(
                "Tax percentage cannot be negative ({})",
                self.tax
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvoiceTotals {
    pub sub_total: Decimal,
    pub total: Decimal,
}

impl InvoiceTotals {
    pub fn compute(items: &[InvoiceItem], tax: Decimal) -> AppResult<Self> {
        let mut sub_total = Decimal::ZERO;
        for (index, item) in items.iter().enumerate() {
            sub_total = item
                .line_total()
                .and_then(|line| sub_total.checked_add(line))
                .ok_or_else(|| {
                    AppError::BadRequest(format!(
                        "Invoice item {} is too large to price ({} x {})",
                        index + 1,
                        item.price,
                        item.quantity
                    ))
                })?;
        }

        let total = sub_total
            .checked_mul(tax)
            .and_then(|taxed| taxed.checked_div(Decimal::ONE_HUNDRED))
            .and_then(|tax_amount| sub_total.checked_add(tax_amount))
            .ok_or_else(|| {
                AppError::BadRequest(format!(
                    "Invoice total overflows with tax {}% on subtotal {}",
                    tax, sub_total
                ))
            })?;

        Ok(Self {
            sub_total: sub_total.normalize(),
            total: total.normalize(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: Uuid,
    pub job_id: Uuid,
    pub invoice_number: String,
    pub items: Vec<InvoiceItem>,
    pub sub_total: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Invoice {
    pub fn new(job_id: Uuid, invoice_number: String, request: InvoiceRequest) -> AppResult<Self> {
        let totals = InvoiceTotals::compute(&request.items, request.tax)?;
        Ok(Self {
            id: Uuid::new_v4(),
            job_id,
            invoice_number,
            items: request.items,
            sub_total: totals.sub_total,
            tax: request.tax,
            total: totals.total,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_request_validation() {
        let ok = InvoiceRequest {
            items: vec![InvoiceItem::new("Oil change", dec!(2000), 1)],
            tax: dec!(0),
        };
        assert!(ok.validate().is_ok());

        let zero_quantity = InvoiceRequest {
            items: vec![InvoiceItem::new("Oil change", dec!(2000), 0)],
            tax: dec!(10),
        };
        assert!(matches!(zero_quantity.validate(), Err(AppError::BadRequest(_))));

        let free_item = InvoiceRequest {
            items: vec![InvoiceItem::new("Oil change", dec!(0), 1)],
            tax: dec!(10),
        };
        assert!(free_item.validate().is_err());

        let negative_tax = InvoiceRequest {
            items: vec![InvoiceItem::new("Oil change", dec!(2000), 1)],
            tax: dec!(-5),
        };
        assert!(negative_tax.validate().is_err());
    }

    #[test]
    fn test_totals_with_tax() {
        let items = vec![
            InvoiceItem::new("Oil change", dec!(2000), 1),
            InvoiceItem::new("Filter replacement", dec!(1500), 2),
        ];
        let totals = InvoiceTotals::compute(&items, dec!(10)).unwrap();
        assert_eq!(totals.sub_total, dec!(5000));
        assert_eq!(totals.total, dec!(5500));
    }

    #[test]
    fn test_fractional_tax_is_exact() {
        let items = vec![InvoiceItem::new("Labour", dec!(99.99), 3)];
        let totals = InvoiceTotals::compute(&items, dec!(7.5)).unwrap();
        assert_eq!(totals.sub_total, dec!(299.97));
        assert_eq!(totals.total, dec!(322.46775));
    }

    #[test]
    fn test_empty_items_total_zero() {
        let totals = InvoiceTotals::compute(&[], dec!(10)).unwrap();
        assert_eq!(totals.sub_total, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::ZERO);
    }

    #[test]
    fn test_invoice_keeps_item_order() {
        let request = InvoiceRequest {
            items: vec![
                InvoiceItem::new("b", dec!(1), 1),
                InvoiceItem::new("a", dec!(2), 1),
            ],
            tax: dec!(0),
        };
        let invoice = Invoice::new(Uuid::new_v4(), "INV-1-1000".into(), request).unwrap();
        assert_eq!(invoice.items[0].description, "b");
        assert_eq!(invoice.items[1].description, "a");
        assert_eq!(invoice.total, dec!(3));
    }

    #[test]
    fn test_overflowing_line_names_the_item() {
        let items = vec![
            InvoiceItem::new("Labour", dec!(100), 1),
            InvoiceItem::new("Compressor", Decimal::MAX, 2),
        ];
        let err = InvoiceTotals::compute(&items, dec!(10)).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert!(err.message().starts_with("Invoice item 2 "));
    }

    #[test]
    fn test_overflowing_subtotal_and_tax_are_rejected() {
        let large = dec!(30000000000000000000000000000);
        let items = vec![
            InvoiceItem::new("a", large, 1),
            InvoiceItem::new("b", large, 1),
            InvoiceItem::new("c", large, 1),
        ];
        let err = InvoiceTotals::compute(&items, dec!(0)).unwrap_err();
        assert!(err.message().starts_with("Invoice item 3 "));

        let items = vec![InvoiceItem::new("a", large, 1)];
        let err = InvoiceTotals::compute(&items, dec!(500)).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert!(err.message().contains("tax 500%"));
    }
}
