//! AFIP document types (`cbte_tipo`) and their presentation categories.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::AfipError;

/// Fiscal document type, identified by its two-character AFIP code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BillType {
    /// 01 — Factura A.
    FacturaA,
    /// 03 — Nota de Credito A.
    NotaDeCreditoA,
    /// 06 — Factura B.
    FacturaB,
    /// 99 — Remito.
    Remito,
}

/// Presentation category used to select the document variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillCategory {
    A,
    B,
    Remito,
}

impl BillType {
    /// All known document types, in code order.
    pub const ALL: [BillType; 4] = [
        BillType::FacturaA,
        BillType::NotaDeCreditoA,
        BillType::FacturaB,
        BillType::Remito,
    ];

    /// Look up a document type by its `cbte_tipo` code.
    pub fn from_code(code: &str) -> Result<Self, AfipError> {
        match code {
            "01" => Ok(Self::FacturaA),
            "03" => Ok(Self::NotaDeCreditoA),
            "06" => Ok(Self::FacturaB),
            "99" => Ok(Self::Remito),
            other => Err(AfipError::UnknownDocumentType(other.to_string())),
        }
    }

    /// The two-character AFIP code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::FacturaA => "01",
            Self::NotaDeCreditoA => "03",
            Self::FacturaB => "06",
            Self::Remito => "99",
        }
    }

    /// Human-readable label printed on the document.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FacturaA => "Factura A",
            Self::NotaDeCreditoA => "Nota de Credito A",
            Self::FacturaB => "Factura B",
            Self::Remito => "Remito",
        }
    }

    /// Presentation category.
    ///
    /// Kept as its own table rather than derived from [`label`](Self::label).
    /// The two must stay in sync: the label's last word, lowercased, is the
    /// category.
    pub fn category(&self) -> BillCategory {
        match self {
            Self::FacturaA | Self::NotaDeCreditoA => BillCategory::A,
            Self::FacturaB => BillCategory::B,
            Self::Remito => BillCategory::Remito,
        }
    }

    pub fn is_credit_note(&self) -> bool {
        matches!(self, Self::NotaDeCreditoA)
    }
}

impl BillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::Remito => "remito",
        }
    }

    /// Name of the presentation variant for this category, e.g. `factura_a`.
    pub fn template_stem(&self) -> String {
        format!("factura_{}", self.as_str())
    }
}

impl fmt::Display for BillType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for BillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a `cbte_tipo` code into its presentation category.
///
/// Fails with [`AfipError::UnknownDocumentType`] for codes outside the fixed
/// table. Callers must not attempt rendering in that case.
pub fn classify(code: &str) -> Result<BillCategory, AfipError> {
    let bill_type = BillType::from_code(code).inspect_err(|_| {
        tracing::warn!(cbte_tipo = code, "rejected unknown document type");
    })?;
    let category = bill_type.category();
    tracing::debug!(cbte_tipo = code, category = category.as_str(), "classified bill");
    Ok(category)
}

/// Look up the printed label for a `cbte_tipo` code.
pub fn bill_type_label(code: &str) -> Result<&'static str, AfipError> {
    BillType::from_code(code).map(|t| t.label())
}
