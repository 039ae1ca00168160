use serde::Deserialize;

use crate::canvas::Rgb;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub accent_color: Rgb,
    pub base_gradient_start: Rgb,
    pub base_gradient_end: Rgb,
}

impl Theme {
    pub fn named(name: impl Into<String>, accent_color: Rgb) -> Self {
        Self {
            name: name.into(),
            accent_color,
            base_gradient_start: Rgb(30, 58, 138),
            base_gradient_end: Rgb(59, 130, 246),
        }
    }

    /// Fallback theme for tag sets that match nothing.
    pub fn fallback() -> Self {
        Self::named("default", Rgb(139, 92, 246))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThemeRule {
    pub name: String,
    pub tags: Vec<String>,
    pub accent: Rgb,
}

impl ThemeRule {
    pub fn new(name: &str, tags: &[&str], accent: Rgb) -> Self {
        Self {
            name: name.to_string(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            accent,
        }
    }
}

// Declaration order is the tie-break: a tag in several rules always
// resolves to the earliest one.
pub fn builtin_rules() -> Vec<ThemeRule> {
    vec![
        ThemeRule::new(
            "ai_ml",
            &["ai", "ml", "llm", "platform", "agent", "orchestration"],
            Rgb(139, 92, 246),
        ),
        ThemeRule::new(
            "seo_analytics",
            &["seo", "analytics", "metrics", "content", "optimization"],
            Rgb(34, 197, 94),
        ),
        ThemeRule::new(
            "automation",
            &["automation", "api", "integration", "technical", "development"],
            Rgb(249, 115, 22),
        ),
        ThemeRule::new(
            "strategy",
            &["strategy", "business", "enterprise", "consulting"],
            Rgb(6, 182, 212),
        ),
    ]
}

#[derive(Debug, Clone)]
pub struct ThemeDetector {
    rules: Vec<ThemeRule>,
}

impl Default for ThemeDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeDetector {
    pub fn new() -> Self {
        Self::with_rules(builtin_rules())
    }

    pub fn with_rules(rules: Vec<ThemeRule>) -> Self {
        Self { rules }
    }

    /// Built-in rules first, so brand rules only win for unclaimed tags.
    pub fn with_extra_rules(extra: impl IntoIterator<Item = ThemeRule>) -> Self {
        let mut rules = builtin_rules();
        rules.extend(extra);
        Self { rules }
    }

    pub fn rules(&self) -> &[ThemeRule] {
        &self.rules
    }

    /// First rule containing any of the request's tags wins; unmatched
    /// tag sets get the fallback theme.
    pub fn get_theme<S: AsRef<str>>(&self, tags: &[S]) -> Theme {
        let tags_lower: Vec<String> = tags
            .iter()
            .map(|tag| tag.as_ref().to_lowercase())
            .collect();

        for rule in &self.rules {
            for tag in &tags_lower {
                if rule.tags.iter().any(|candidate| candidate == tag) {
                    return Theme::named(rule.name.clone(), rule.accent);
                }
            }
        }

        Theme::fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_each_builtin_theme() {
        let detector = ThemeDetector::new();
        let cases = [
            (vec!["ai"], "ai_ml", Rgb(139, 92, 246)),
            (vec!["seo"], "seo_analytics", Rgb(34, 197, 94)),
            (vec!["automation"], "automation", Rgb(249, 115, 22)),
            (vec!["business"], "strategy", Rgb(6, 182, 212)),
        ];
        for (tags, name, accent) in cases {
            let theme = detector.get_theme(&tags);
            assert_eq!(theme.name, name);
            assert_eq!(theme.accent_color, accent);
        }
    }

    #[test]
    fn unmatched_tags_fall_back_to_default() {
        let detector = ThemeDetector::new();
        let theme = detector.get_theme(&["quantum", "gardening"]);
        assert_eq!(theme.name, "default");
        assert_eq!(theme.accent_color, Rgb(139, 92, 246));
    }

    #[test]
    fn empty_tag_list_falls_back_to_default() {
        let detector = ThemeDetector::new();
        let theme = detector.get_theme::<&str>(&[]);
        assert_eq!(theme.name, "default");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let detector = ThemeDetector::new();
        assert_eq!(detector.get_theme(&["SEO"]).name, "seo_analytics");
        assert_eq!(detector.get_theme(&["Automation"]).name, "automation");
    }

    #[test]
    fn rule_declaration_order_wins_over_tag_order() {
        let detector = ThemeDetector::new();
        // "strategy" is a later rule than "ai_ml", so even listed first
        // it loses to "agent".
        let theme = detector.get_theme(&["strategy", "agent"]);
        assert_eq!(theme.name, "ai_ml");
    }

    #[test]
    fn ambiguous_tag_resolves_to_earliest_rule() {
        // "platform" could plausibly belong to several themes; it is
        // declared under ai_ml and must stay there.
        let detector = ThemeDetector::new();
        assert_eq!(detector.get_theme(&["platform"]).name, "ai_ml");
    }

    #[test]
    fn extra_rules_match_after_builtins() {
        let detector = ThemeDetector::with_extra_rules([ThemeRule::new(
            "customer_service",
            &["customer-service", "support", "cx"],
            Rgb(59, 130, 246),
        )]);
        assert_eq!(detector.get_theme(&["support"]).name, "customer_service");
        // Built-in claim on "ai" is untouched.
        assert_eq!(detector.get_theme(&["ai", "support"]).name, "ai_ml");
    }

    #[test]
    fn fallback_theme_carries_gradient_defaults() {
        let theme = Theme::fallback();
        assert_eq!(theme.base_gradient_start, Rgb(30, 58, 138));
        assert_eq!(theme.base_gradient_end, Rgb(59, 130, 246));
    }
}
