// ============================================================================
// Operation Domain Model
// ============================================================================

#[cfg(feature = "serde")]
use crate::numeric::CalcError;
use crate::numeric::RoundingMode;
use bigdecimal::BigDecimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OperationKind {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl OperationKind {
    /// Kind whose application reverses this one.
    pub fn inverse(self) -> OperationKind {
        match self {
            OperationKind::Add => OperationKind::Subtract,
            OperationKind::Subtract => OperationKind::Add,
            OperationKind::Multiply => OperationKind::Divide,
            OperationKind::Divide => OperationKind::Multiply,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            OperationKind::Add => '+',
            OperationKind::Subtract => '-',
            OperationKind::Multiply => '*',
            OperationKind::Divide => '/',
        }
    }
}

/// One applied forward transformation of the running result.
///
/// Operations are immutable once recorded. The same value moves between the
/// history stack and the redo buffer; undo and redo never rebuild it.
///
/// With the `serde` feature, deserialization goes through the same checks as
/// the constructors: only a divide carries a scale and a rounding mode.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "OperationRecord")
)]
pub struct Operation {
    kind: OperationKind,
    operand: BigDecimal,
    scale: Option<u32>,
    rounding_mode: Option<RoundingMode>,
}

impl Operation {
    pub fn add(operand: BigDecimal) -> Self {
        Self::unscaled(OperationKind::Add, operand)
    }

    pub fn subtract(operand: BigDecimal) -> Self {
        Self::unscaled(OperationKind::Subtract, operand)
    }

    pub fn multiply(operand: BigDecimal) -> Self {
        Self::unscaled(OperationKind::Multiply, operand)
    }

    pub fn divide(operand: BigDecimal, scale: u32, rounding_mode: RoundingMode) -> Self {
        Self {
            kind: OperationKind::Divide,
            operand,
            scale: Some(scale),
            rounding_mode: Some(rounding_mode),
        }
    }

    fn unscaled(kind: OperationKind, operand: BigDecimal) -> Self {
        Self {
            kind,
            operand,
            scale: None,
            rounding_mode: None,
        }
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn operand(&self) -> &BigDecimal {
        &self.operand
    }

    /// Fractional digits kept by a divide; `None` for other kinds.
    pub fn scale(&self) -> Option<u32> {
        self.scale
    }

    /// Rounding policy of a divide; `None` for other kinds.
    pub fn rounding_mode(&self) -> Option<RoundingMode> {
        self.rounding_mode
    }
}

/// Wire shape of an [`Operation`], validated on the way in
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct OperationRecord {
    kind: OperationKind,
    operand: BigDecimal,
    scale: Option<u32>,
    rounding_mode: Option<RoundingMode>,
}

#[cfg(feature = "serde")]
impl TryFrom<OperationRecord> for Operation {
    type Error = CalcError;

    fn try_from(record: OperationRecord) -> Result<Self, Self::Error> {
        match (record.kind, record.scale, record.rounding_mode) {
            (OperationKind::Divide, Some(scale), Some(mode)) => {
                Ok(Operation::divide(record.operand, scale, mode))
            },
            (OperationKind::Divide, _, _) => Err(CalcError::MalformedOperation(
                "divide requires scale and rounding_mode".to_string(),
            )),
            (kind, None, None) => Ok(Operation::unscaled(kind, record.operand)),
            (kind, _, _) => Err(CalcError::MalformedOperation(format!(
                "{:?} takes no scale or rounding_mode",
                kind
            ))),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.scale, self.rounding_mode) {
            (Some(scale), Some(mode)) => write!(
                f,
                "{} {} (scale={}, {:?})",
                self.kind.symbol(),
                self.operand,
                scale,
                mode
            ),
            _ => write!(f, "{} {}", self.kind.symbol(), self.operand),
        }
    }
}
