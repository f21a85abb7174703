/// The fixed spending taxonomy. Order matches categorization rule order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Category {
    FoodAndDrink,
    Transportation,
    Entertainment,
    Education,
    Utilities,
    Other,
}

impl Category {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::FoodAndDrink => "Food & Drink",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Education => "Education",
            Self::Utilities => "Utilities",
            Self::Other => "Other",
        }
    }

    pub(crate) fn all() -> &'static [Category] {
        &[
            Self::FoodAndDrink,
            Self::Transportation,
            Self::Entertainment,
            Self::Education,
            Self::Utilities,
            Self::Other,
        ]
    }

    /// Position in [`Category::all`]; stable across screens, so it doubles
    /// as the chart colour slot.
    pub(crate) fn index(&self) -> usize {
        Self::all().iter().position(|c| c == self).unwrap_or(0)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
