use chrono::DateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder shown when an offer's company lookup failed.
pub const UNKNOWN_COMPANY: &str = "Unknown Company";
/// Placeholder shown when an offer has no company reference at all.
pub const NO_COMPANY: &str = "No company";

/// Shown in place of a blank offer name, headline or product name.
pub const UNTITLED: &str = "Untitled";

/// `text`, or [`UNTITLED`] when the backend left it blank.
pub fn or_untitled(text: &str) -> &str {
    if text.trim().is_empty() { UNTITLED } else { text }
}

/// Reads a JSON `null` (or a missing key, with `#[serde(default)]`) as the
/// type's default, so one blank field never sinks a whole list.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Participant {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: Option<i64>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "phoneNumber")]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Offer {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Participant id of the company behind the offer.
    #[serde(default)]
    pub company: Option<i64>,
}

/// An offer with its company reference resolved to a display name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EnrichedOffer {
    #[serde(flatten)]
    pub offer: Offer,
    #[serde(rename = "companyName")]
    pub company_name: String,
}

/// The selected offer and its company, kept side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferDetails {
    pub offer: Offer,
    pub company: Option<Participant>,
}

/// List form of a news article. The body lives in [`ArticleDetail`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewsArticle {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub headline: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl NewsArticle {
    /// Human-readable publication date.
    ///
    /// RFC 3339 timestamps render as `Jan 15, 2025`; anything else the
    /// backend sends is shown verbatim.
    pub fn published_label(&self) -> String {
        match self.created_at.as_deref() {
            Some(raw) => DateTime::parse_from_rfc3339(raw)
                .map(|dt| dt.format("%b %d, %Y").to_string())
                .unwrap_or_else(|_| raw.to_string()),
            None => String::new(),
        }
    }
}

/// Detail form of a news article.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ArticleDetail {
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, rename = "articleText", deserialize_with = "null_as_default")]
    pub article_text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Products of one company, as shown in the products modal.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyProducts {
    pub company_id: i64,
    pub products: Vec<Product>,
}

/// Resolves a relative media path (logo, image) against the backend origin.
///
/// `None` or an empty path means "no image". Absolute URLs pass through.
pub fn media_url(origin: &str, path: Option<&str>) -> Option<String> {
    let path = path.map(str::trim).filter(|p| !p.is_empty())?;
    if path.starts_with("http://") || path.starts_with("https://") {
        return Some(path.to_string());
    }
    let origin = origin.trim_end_matches('/');
    if path.starts_with('/') {
        Some(format!("{origin}{path}"))
    } else {
        Some(format!("{origin}/{path}"))
    }
}
