//! Post prompt builder: picks an instruction template by post type and fills it in.

use crate::llm_client::prompts::PLAIN_TEXT_INSTRUCTION;
use crate::profile::models::BusinessProfile;

/// System prompt for post generation.
pub const GENERATION_SYSTEM: &str =
    "You're a helpful assistant that writes catchy social media content.";

pub const DEFAULT_TONE: &str = "informative";

/// Kind of post requested. Unrecognized values fall back to `General`.
///
/// The alias groups ("business_tips"/"tip", "industry_insights"/"update") are
/// kept as clients already send either spelling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PostType {
    Promo,
    BusinessTips,
    IndustryInsights,
    Seasonal,
    #[default]
    General,
}

impl PostType {
    /// Case-insensitive parse with alias support.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "promo" => PostType::Promo,
            "business_tips" | "tip" => PostType::BusinessTips,
            "industry_insights" | "update" => PostType::IndustryInsights,
            "seasonal" => PostType::Seasonal,
            _ => PostType::General,
        }
    }

    /// Fills the post-type template. Every field is substituted in one pass,
    /// so braces inside caller text are kept literally.
    fn instruction(self, count: usize, tone: &str, industry: &str, name: &str) -> String {
        match self {
            PostType::Promo => format!(
                "Generate {count} unique social media posts with a {tone} tone \
                 for a promotional campaign for a {industry} business named {name}."
            ),
            PostType::BusinessTips => format!(
                "Generate {count} unique social media posts with a {tone} tone \
                 sharing business tips for a {industry} business named {name}."
            ),
            PostType::IndustryInsights => format!(
                "Generate {count} unique social media posts with a {tone} tone \
                 offering insights about the {industry} industry for a business named {name}."
            ),
            PostType::Seasonal => format!(
                "Generate {count} unique social media posts with a {tone} tone \
                 for seasonal greetings or announcements for a {industry} business named {name}."
            ),
            PostType::General => format!(
                "Generate {count} unique social media posts with a {tone} tone \
                 with general content for a {industry} business named {name}."
            ),
        }
    }
}

/// Style preferences for a batch of posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostPreferences {
    /// Always lower-case.
    pub tone: String,
    pub post_type: PostType,
}

impl Default for PostPreferences {
    fn default() -> Self {
        Self {
            tone: DEFAULT_TONE.to_string(),
            post_type: PostType::General,
        }
    }
}

impl PostPreferences {
    /// Applies defaults for missing or blank values.
    pub fn new(tone: Option<&str>, post_type: Option<&str>) -> Self {
        let tone = tone
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TONE)
            .to_lowercase();
        let post_type = post_type.map(PostType::parse).unwrap_or_default();
        Self { tone, post_type }
    }
}

/// Builds the user instruction for a post-generation call.
pub fn build_prompt(
    profile: &BusinessProfile,
    news: &[String],
    preferences: &PostPreferences,
    count: usize,
) -> String {
    let mut prompt = preferences.post_type.instruction(
        count,
        &preferences.tone,
        profile.industry_or_default(),
        profile.display_name(),
    );

    if !news.is_empty() {
        prompt.push_str(" Also consider the following trending topics: ");
        prompt.push_str(&news.join(", "));
        prompt.push('.');
    }

    prompt.push_str(" Include relevant hashtags. ");
    prompt.push_str(PLAIN_TEXT_INSTRUCTION);
    prompt.push_str(" Number each post or separate posts by newlines.");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sweet_co() -> BusinessProfile {
        BusinessProfile::named(Some("Sweet Co".into()), Some("bakery".into()))
    }

    #[test]
    fn test_promo_prompt_carries_all_parameters() {
        let prefs = PostPreferences::new(Some("fun"), Some("promo"));
        let prompt = build_prompt(&sweet_co(), &[], &prefs, 3);
        assert!(prompt.contains("3"));
        assert!(prompt.contains("fun"));
        assert!(prompt.contains("bakery"));
        assert!(prompt.contains("Sweet Co"));
        assert!(prompt.contains("promotional"));
    }

    #[test]
    fn test_post_type_aliases() {
        assert_eq!(PostType::parse("tip"), PostType::BusinessTips);
        assert_eq!(PostType::parse("Business_Tips"), PostType::BusinessTips);
        assert_eq!(PostType::parse("update"), PostType::IndustryInsights);
        assert_eq!(PostType::parse("INDUSTRY_INSIGHTS"), PostType::IndustryInsights);
        assert_eq!(PostType::parse("Seasonal"), PostType::Seasonal);
        assert_eq!(PostType::parse("PROMO"), PostType::Promo);
        assert_eq!(PostType::parse("meme"), PostType::General);
        assert_eq!(PostType::parse(""), PostType::General);
    }

    #[test]
    fn test_each_post_type_selects_its_template() {
        let profile = sweet_co();
        let cases = [
            ("tip", "sharing business tips"),
            ("update", "offering insights about the bakery industry"),
            ("seasonal", "seasonal greetings or announcements"),
            ("anything", "with general content"),
        ];
        for (post_type, expected) in cases {
            let prefs = PostPreferences::new(None, Some(post_type));
            let prompt = build_prompt(&profile, &[], &prefs, 5);
            assert!(prompt.contains(expected), "{post_type}: {prompt}");
        }
    }

    #[test]
    fn test_news_headlines_are_comma_joined() {
        let news = vec!["Flour prices rise".to_string(), "Sourdough trend".to_string()];
        let prompt = build_prompt(&sweet_co(), &news, &PostPreferences::default(), 2);
        assert!(prompt
            .contains("Also consider the following trending topics: Flour prices rise, Sourdough trend."));
    }

    #[test]
    fn test_no_news_clause_without_headlines() {
        let prompt = build_prompt(&sweet_co(), &[], &PostPreferences::default(), 2);
        assert!(!prompt.contains("trending topics"));
    }

    #[test]
    fn test_formatting_directive_always_present() {
        let prompt = build_prompt(&sweet_co(), &[], &PostPreferences::default(), 2);
        assert!(prompt.contains("Include relevant hashtags."));
        assert!(prompt.contains("Avoid emojis"));
        assert!(prompt.contains("Return plain text only."));
        assert!(prompt.ends_with("Number each post or separate posts by newlines."));
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let prefs = PostPreferences::new(None, None);
        assert_eq!(prefs.tone, "informative");
        assert_eq!(prefs.post_type, PostType::General);

        let prompt = build_prompt(&BusinessProfile::default(), &[], &prefs, 4);
        assert!(prompt.starts_with(
            "Generate 4 unique social media posts with a informative tone with general content \
            for a your industry business named Your Business."
        ));
    }

    #[test]
    fn test_braces_in_caller_text_are_not_expanded() {
        let profile = BusinessProfile::named(Some("Sweet Co".into()), Some("{count} bakery".into()));
        let prefs = PostPreferences::new(Some("{name}-style"), Some("promo"));
        let prompt = build_prompt(&profile, &["{tone} news".to_string()], &prefs, 3);
        assert!(prompt.starts_with(
            "Generate 3 unique social media posts with a {name}-style tone \
            for a promotional campaign for a {count} bakery business named Sweet Co."
        ));
        assert!(prompt.contains("trending topics: {tone} news."));
    }

    #[test]
    fn test_tone_is_lowercased() {
        let prefs = PostPreferences::new(Some("Playful"), Some("promo"));
        assert_eq!(prefs.tone, "playful");
    }
}
