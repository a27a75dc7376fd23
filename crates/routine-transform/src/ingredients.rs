use crate::options::EmptyIngredients;

/// Split a comma-delimited ingredient cell into trimmed names.
///
/// With [`EmptyIngredients::Preserve`] every piece is kept, including empty
/// ones: `""` yields `[""]`.
pub fn split_ingredients(raw: &str, mode: EmptyIngredients) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| mode == EmptyIngredients::Preserve || !name.is_empty())
        .map(str::to_string)
        .collect()
}
