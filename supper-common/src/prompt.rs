//! Prompt templates for the generation events

use crate::{IdeaContract, PreferenceSet};

/// Fallback label for diet, cuisines and cooking time
const NO_PREFERENCE: &str = "No preference";
/// Fallback label for the ingredient lists
const NONE: &str = "None";

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}

/// Build the idea prompt. Output depends only on the inputs.
pub fn build_idea_prompt(prefs: &PreferenceSet, contract: IdeaContract) -> String {
    let diet = if prefs.diet.is_none() {
        NO_PREFERENCE
    } else {
        prefs.diet.value()
    };
    let cuisines = if prefs.cuisines.is_empty() {
        NO_PREFERENCE.to_string()
    } else {
        prefs.cuisines.join(", ")
    };
    let time = prefs
        .time_budget
        .map(|m| m.to_string())
        .unwrap_or_else(|| NO_PREFERENCE.to_string());

    let instruction = match contract {
        IdeaContract::Markdown => "Please format the response in markdown.",
        IdeaContract::MealList => {
            "Respond only with a JSON object of the form {\"meals\": [\"Meal name\", ...]} \
             containing the name of each supper idea and nothing else."
        }
    };

    format!(
        "Please provide a few supper ideas based on the following preferences:\n\
         - Dietary preference: {diet}\n\
         - Preferred cuisines: {cuisines}\n\
         - Ingredients to include: {include}\n\
         - Ingredients to exclude: {exclude}\n\
         - Cooking time available: {time} minutes\n\
         \n\
         {instruction}",
        include = or_fallback(&prefs.include, NONE),
        exclude = or_fallback(&prefs.exclude, NONE),
    )
}

/// Build the image prompt for a meal
pub fn build_image_prompt(meal: &str) -> String {
    format!(
        "A realistic, appetising photo of {}, plated and ready to serve for supper.",
        meal.trim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DietaryPreference;

    #[test]
    fn test_empty_preferences_use_fallbacks_everywhere() {
        let prompt = build_idea_prompt(&PreferenceSet::default(), IdeaContract::Markdown);
        assert!(prompt.contains("- Dietary preference: No preference\n"));
        assert!(prompt.contains("- Preferred cuisines: No preference\n"));
        assert!(prompt.contains("- Ingredients to include: None\n"));
        assert!(prompt.contains("- Ingredients to exclude: None\n"));
        assert!(prompt.contains("- Cooking time available: No preference minutes"));
        assert!(prompt.ends_with("Please format the response in markdown."));
    }

    #[test]
    fn test_filled_preferences() {
        let prefs = PreferenceSet {
            diet: DietaryPreference::GlutenFree,
            cuisines: vec!["Italian".into(), "Mexican".into()],
            include: "chicken, broccoli".into(),
            exclude: "nuts".into(),
            time_budget: Some(30),
        };
        let prompt = build_idea_prompt(&prefs, IdeaContract::MealList);
        assert!(prompt.contains("- Dietary preference: Gluten-free\n"));
        assert!(prompt.contains("- Preferred cuisines: Italian, Mexican\n"));
        assert!(prompt.contains("- Ingredients to include: chicken, broccoli\n"));
        assert!(prompt.contains("- Ingredients to exclude: nuts\n"));
        assert!(prompt.contains("- Cooking time available: 30 minutes"));
        assert!(prompt.contains("\"meals\""));
    }

    #[test]
    fn test_whitespace_only_ingredients_are_absent() {
        let prefs = PreferenceSet {
            include: "   ".into(),
            ..Default::default()
        };
        let prompt = build_idea_prompt(&prefs, IdeaContract::Markdown);
        assert!(prompt.contains("- Ingredients to include: None\n"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let prefs = PreferenceSet {
            cuisines: vec!["Thai".into()],
            ..Default::default()
        };
        assert_eq!(
            build_idea_prompt(&prefs, IdeaContract::MealList),
            build_idea_prompt(&prefs, IdeaContract::MealList)
        );
    }

    #[test]
    fn test_image_prompt_embeds_meal() {
        assert!(build_image_prompt(" Pasta bake ").contains("photo of Pasta bake,"));
    }
}
