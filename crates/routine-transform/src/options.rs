/// How an empty piece of an ingredient list is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyIngredients {
    /// Keep empty pieces, so an empty cell becomes `[""]`.
    #[default]
    Preserve,
    /// Drop empty pieces, so an empty cell becomes `[]`.
    Drop,
}

/// Options controlling record aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateOptions {
    pub empty_ingredients: EmptyIngredients,
}

impl AggregateOptions {
    /// Reproduce the converter's historical output exactly.
    pub fn literal() -> Self {
        Self::default()
    }

    pub fn drop_empty_ingredients() -> Self {
        Self {
            empty_ingredients: EmptyIngredients::Drop,
        }
    }

    pub fn with_empty_ingredients(mut self, mode: EmptyIngredients) -> Self {
        self.empty_ingredients = mode;
        self
    }
}
