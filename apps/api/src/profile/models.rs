use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_BUSINESS_NAME: &str = "Your Business";
pub const DEFAULT_INDUSTRY: &str = "your industry";

/// Structured description of a business, inferred by the model from its website.
///
/// Every field is optional: the model decides what it can infer. Fields the
/// model returns as lists (services, audience) are flattened to ", "-joined text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfile {
    #[serde(default, deserialize_with = "text_or_list")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "text_or_list")]
    pub industry: Option<String>,
    #[serde(default, deserialize_with = "text_or_list")]
    pub services: Option<String>,
    #[serde(default, deserialize_with = "text_or_list")]
    pub audience: Option<String>,
    #[serde(default, deserialize_with = "text_or_list")]
    pub tone_of_voice: Option<String>,
    #[serde(default, deserialize_with = "text_or_list")]
    pub unique_value_proposition: Option<String>,
}

impl BusinessProfile {
    /// Builds a profile carrying only the fields post generation needs.
    pub fn named(name: Option<String>, industry: Option<String>) -> Self {
        Self {
            name,
            industry,
            ..Self::default()
        }
    }

    pub fn display_name(&self) -> &str {
        non_blank(self.name.as_deref()).unwrap_or(DEFAULT_BUSINESS_NAME)
    }

    pub fn industry_or_default(&self) -> &str {
        non_blank(self.industry.as_deref()).unwrap_or(DEFAULT_INDUSTRY)
    }
}

/// Returns the trimmed value unless it is missing or blank.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrList {
    Text(String),
    List(Vec<serde_json::Value>),
    Other(serde_json::Value),
}

fn text_or_list<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<TextOrList>::deserialize(deserializer)?;
    Ok(match value {
        None => None,
        Some(TextOrList::Text(text)) => Some(text),
        Some(TextOrList::List(items)) => Some(
            items
                .iter()
                .map(|item| match item {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Some(TextOrList::Other(serde_json::Value::Null)) => None,
        Some(TextOrList::Other(other)) => Some(other.to_string()),
    })
}
