// Lookup scans the request's tags in their given order, so the first
// recognized tag decides.
const SUBTITLE_RULES: &[(&str, &str)] = &[
    ("ai", "AI Intelligence Guide"),
    ("ml", "AI Intelligence Guide"),
    ("llm", "AI Intelligence Guide"),
    ("agent", "Agent Systems Explained"),
    ("orchestration", "Agent Systems Explained"),
    ("seo", "SEO Best Practices"),
    ("optimization", "SEO Best Practices"),
    ("content", "Content Strategy Guide"),
    ("writing", "Content Strategy Guide"),
    ("analytics", "Data-Driven Insights"),
    ("metrics", "Data-Driven Insights"),
    ("automation", "Automation Handbook"),
    ("integration", "Automation Handbook"),
    ("strategy", "Strategic Framework"),
    ("consulting", "Strategic Framework"),
    ("enterprise", "Enterprise Solutions"),
    ("platform", "Enterprise Solutions"),
    ("technical", "Technical Deep Dive"),
    ("development", "Technical Deep Dive"),
    ("customer-service", "Customer Experience Guide"),
];

const DEFAULT_SUBTITLE: &str = "Technical Guide";

/// Years at or after this get appended to the subtitle.
const YEAR_SUFFIX_FROM: i32 = 2024;

#[derive(Debug, Clone, Default)]
pub struct SubtitleGenerator;

impl SubtitleGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate<S: AsRef<str>>(&self, tags: &[S], year: i32) -> String {
        let mut subtitle = DEFAULT_SUBTITLE;
        for tag in tags {
            let tag_lower = tag.as_ref().to_lowercase();
            if let Some((_, template)) = SUBTITLE_RULES
                .iter()
                .find(|(candidate, _)| *candidate == tag_lower)
            {
                subtitle = template;
                break;
            }
        }

        if year >= YEAR_SUFFIX_FROM {
            format!("{subtitle} {year}")
        } else {
            subtitle.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_tag_in_request_order_wins() {
        let subtitles = SubtitleGenerator::new();
        // "strategy" maps later in the table than "ai", but the scan is
        // over request tags, not table rows.
        assert_eq!(
            subtitles.generate(&["strategy", "ai"], 2020),
            "Strategic Framework"
        );
        assert_eq!(
            subtitles.generate(&["ai", "strategy"], 2020),
            "AI Intelligence Guide"
        );
    }

    #[test]
    fn unmapped_tags_use_default() {
        let subtitles = SubtitleGenerator::new();
        assert_eq!(subtitles.generate(&["gardening"], 2020), "Technical Guide");
        assert_eq!(subtitles.generate::<&str>(&[], 2020), "Technical Guide");
    }

    #[test]
    fn recent_year_is_appended() {
        let subtitles = SubtitleGenerator::new();
        assert_eq!(
            subtitles.generate(&["seo"], 2024),
            "SEO Best Practices 2024"
        );
        assert_eq!(subtitles.generate(&["unknown"], 2025), "Technical Guide 2025");
    }

    #[test]
    fn older_year_is_not_appended() {
        let subtitles = SubtitleGenerator::new();
        assert_eq!(subtitles.generate(&["automation"], 2022), "Automation Handbook");
        assert_eq!(subtitles.generate(&["automation"], 2023), "Automation Handbook");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let subtitles = SubtitleGenerator::new();
        assert_eq!(
            subtitles.generate(&["Customer-Service"], 2020),
            "Customer Experience Guide"
        );
    }
}
