use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Goal {
    pub(crate) id: u32,
    pub(crate) name: String,
    pub(crate) target: Decimal,
    pub(crate) saved: Decimal,
    pub(crate) deadline: String,
}

impl Goal {
    pub(crate) fn new(id: u32, name: String, target: Decimal, deadline: String) -> Self {
        Self {
            id,
            name,
            target,
            saved: Decimal::ZERO,
            deadline,
        }
    }

    /// Percentage of the target saved so far, clamped to `0..=100`.
    pub(crate) fn progress(&self) -> Decimal {
        let hundred = Decimal::ONE_HUNDRED;
        self.saved
            .checked_div(self.target)
            .map(|ratio| ratio * hundred)
            .unwrap_or(Decimal::ZERO)
            .clamp(Decimal::ZERO, hundred)
    }

    pub(crate) fn tier(&self) -> ProgressTier {
        ProgressTier::from_percent(self.progress())
    }
}

/// Display severity for a goal's completion percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProgressTier {
    Danger,
    Warning,
    Success,
}

impl ProgressTier {
    pub(crate) fn from_percent(percent: Decimal) -> Self {
        if percent < Decimal::from(50) {
            Self::Danger
        } else if percent < Decimal::from(80) {
            Self::Warning
        } else {
            Self::Success
        }
    }

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Success => "success",
        }
    }
}

impl std::fmt::Display for ProgressTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
