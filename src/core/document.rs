use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::bill::{BillRecord, required};
use super::bill_type::{BillCategory, BillType};
use super::composer::{BarcodePayload, CanonicalCode, CodeComposer};
use super::error::AfipError;

/// IVA rate applied to every line, in percent.
pub const IVA_RATE: Decimal = dec!(21);

/// Which printed copy of the document this is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CopyLabel {
    #[default]
    Original,
    Duplicado,
    Triplicado,
}

impl CopyLabel {
    /// Header text printed at the top of the copy.
    pub fn header_text(&self) -> &'static str {
        match self {
            Self::Original => "ORIGINAL",
            Self::Duplicado => "DUPLICADO",
            Self::Triplicado => "TRIPLICADO",
        }
    }
}

/// A billed line. Prices are net of IVA.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
}

impl LineItem {
    pub fn new(description: impl Into<String>, quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
        }
    }

    /// Net line amount, rounded to cents.
    pub fn net_amount(&self) -> Decimal {
        (self.quantity * self.unit_price).round_dp(2)
    }
}

/// Document totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub net: Decimal,
    pub iva: Decimal,
    pub gross: Decimal,
}

impl Totals {
    /// Sum line net amounts and apply [`IVA_RATE`] to the total.
    pub fn from_lines(lines: &[LineItem]) -> Self {
        let net: Decimal = lines.iter().map(LineItem::net_amount).sum();
        let iva = (net * IVA_RATE / dec!(100)).round_dp(2);
        Self {
            net,
            iva,
            gross: net + iva,
        }
    }
}

/// Everything the rendering layer needs to print one copy of a bill.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceDocument {
    pub bill_type: BillType,
    pub label: String,
    pub category: BillCategory,
    pub template: String,
    pub header_text: String,
    /// Derived from the document type: only 03 (Nota de Credito A) is a
    /// credit note.
    pub credit_note: bool,
    pub canonical_code: CanonicalCode,
    pub barcode: BarcodePayload,
    pub line_items: Vec<LineItem>,
    pub totals: Totals,
}

impl InvoiceDocument {
    /// Classify the bill and compose its barcode payload.
    ///
    /// Fails without a partial document if either step fails.
    pub fn prepare(
        bill: &BillRecord,
        composer: &CodeComposer,
        copy: CopyLabel,
        line_items: Vec<LineItem>,
    ) -> Result<Self, AfipError> {
        let (canonical_code, barcode) = composer.compose_with_code(bill)?;
        let bill_type = BillType::from_code(required(&bill.cbte_tipo, "cbte_tipo")?)?;
        let category = bill_type.category();
        let totals = Totals::from_lines(&line_items);

        tracing::debug!(
            bill_type = bill_type.code(),
            copy = copy.header_text(),
            lines = line_items.len(),
            "prepared invoice document"
        );

        Ok(Self {
            bill_type,
            label: bill_type.label().to_string(),
            category,
            template: category.template_stem(),
            header_text: copy.header_text().to_string(),
            credit_note: bill_type.is_credit_note(),
            canonical_code,
            barcode,
            line_items,
            totals,
        })
    }
}
