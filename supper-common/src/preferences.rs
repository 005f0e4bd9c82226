/// Dietary preference offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DietaryPreference {
    None,
    Vegetarian,
    Vegan,
    GlutenFree,
}

#[allow(clippy::derivable_impls)]
impl Default for DietaryPreference {
    fn default() -> Self {
        DietaryPreference::None
    }
}

impl DietaryPreference {
    /// Every option in display order
    pub const ALL: [DietaryPreference; 4] = [
        DietaryPreference::None,
        DietaryPreference::Vegetarian,
        DietaryPreference::Vegan,
        DietaryPreference::GlutenFree,
    ];

    /// Form value. `None` is the empty string, like an unselected `<select>`.
    pub fn value(&self) -> &'static str {
        match self {
            DietaryPreference::None => "",
            DietaryPreference::Vegetarian => "Vegetarian",
            DietaryPreference::Vegan => "Vegan",
            DietaryPreference::GlutenFree => "Gluten-free",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DietaryPreference::None => "No preference",
            other => other.value(),
        }
    }

    /// Unknown values fall back to `None`.
    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|d| d.value() == value)
            .unwrap_or_default()
    }

    pub fn is_none(&self) -> bool {
        matches!(self, DietaryPreference::None)
    }
}

/// The five form fields. An empty field always means "no preference".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceSet {
    pub diet: DietaryPreference,
    pub cuisines: Vec<String>,
    pub include: String,
    pub exclude: String,
    /// Minutes available for cooking
    pub time_budget: Option<u32>,
}

impl PreferenceSet {
    /// Cuisines as shown back in the text input
    pub fn cuisines_display(&self) -> String {
        self.cuisines.join(", ")
    }

    pub fn time_budget_display(&self) -> String {
        self.time_budget.map(|m| m.to_string()).unwrap_or_default()
    }
}

/// Parse the comma-separated cuisine input into a trimmed, ordered list.
///
/// Empty segments are dropped, so `""` and `" , "` both give an empty list.
pub fn parse_cuisines(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse the time budget field. Only positive whole minutes are kept.
pub fn parse_time_budget(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok().filter(|m| *m > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cuisines_empty() {
        assert!(parse_cuisines("").is_empty());
    }

    #[test]
    fn test_parse_cuisines_trims_and_keeps_order() {
        assert_eq!(parse_cuisines("Italian, Mexican"), vec!["Italian", "Mexican"]);
        assert_eq!(
            parse_cuisines("  Thai ,Chinese,  Greek "),
            vec!["Thai", "Chinese", "Greek"]
        );
    }

    #[test]
    fn test_parse_cuisines_drops_blank_segments() {
        assert!(parse_cuisines(" , ,").is_empty());
        assert_eq!(parse_cuisines("Italian,,Mexican,"), vec!["Italian", "Mexican"]);
    }

    #[test]
    fn test_parse_time_budget() {
        assert_eq!(parse_time_budget("30"), Some(30));
        assert_eq!(parse_time_budget(" 45 "), Some(45));
        assert_eq!(parse_time_budget(""), None);
        assert_eq!(parse_time_budget("0"), None);
        assert_eq!(parse_time_budget("-5"), None);
        assert_eq!(parse_time_budget("half an hour"), None);
    }

    #[test]
    fn test_dietary_preference_round_trips_form_value() {
        for diet in DietaryPreference::ALL {
            assert_eq!(DietaryPreference::from_value(diet.value()), diet);
        }
        assert_eq!(
            DietaryPreference::from_value("Carnivore"),
            DietaryPreference::None
        );
    }

    #[test]
    fn test_cuisines_display() {
        let prefs = PreferenceSet {
            cuisines: vec!["Italian".into(), "Mexican".into()],
            ..Default::default()
        };
        assert_eq!(prefs.cuisines_display(), "Italian, Mexican");
    }
}
