/// Which response contract the generation event is asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdeaContract {
    /// Free text formatted as markdown
    Markdown,
    /// A JSON object with a `meals` list of names
    MealList,
}

#[allow(clippy::derivable_impls)]
impl Default for IdeaContract {
    fn default() -> Self {
        IdeaContract::MealList
    }
}

impl IdeaContract {
    /// `response_type` sent with the generation event
    pub fn response_type(&self) -> &'static str {
        match self {
            IdeaContract::Markdown => "text",
            IdeaContract::MealList => "json",
        }
    }

    /// Whether meals in the result can be selected for an image
    pub fn supports_images(&self) -> bool {
        matches!(self, IdeaContract::MealList)
    }
}

/// Output of an idea request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdeaResult {
    Text(String),
    List(Vec<String>),
}

impl IdeaResult {
    /// An empty result for the given contract
    pub fn empty(contract: IdeaContract) -> Self {
        match contract {
            IdeaContract::Markdown => IdeaResult::Text(String::new()),
            IdeaContract::MealList => IdeaResult::List(Vec::new()),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            IdeaResult::Text(text) => text.trim().is_empty(),
            IdeaResult::List(meals) => meals.is_empty(),
        }
    }

    /// Plain text used for export and share. List results give one meal per line.
    pub fn as_text(&self) -> String {
        match self {
            IdeaResult::Text(text) => text.clone(),
            IdeaResult::List(meals) => meals.join("\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_as_text_one_per_line() {
        let result = IdeaResult::List(vec!["Pasta bake".into(), "Tacos".into()]);
        assert_eq!(result.as_text(), "Pasta bake\nTacos");
    }

    #[test]
    fn test_only_meal_lists_offer_images() {
        assert!(IdeaContract::MealList.supports_images());
        assert!(!IdeaContract::Markdown.supports_images());
    }

    #[test]
    fn test_empty_per_contract() {
        assert_eq!(
            IdeaResult::empty(IdeaContract::Markdown),
            IdeaResult::Text(String::new())
        );
        assert!(IdeaResult::empty(IdeaContract::MealList).is_empty());
    }
}
