use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlogStatus {
    Draft,
    Published,
}

impl Default for BlogStatus {
    fn default() -> Self {
        BlogStatus::Draft
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub hero_img: String,
    #[serde(default)]
    pub status: BlogStatus,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDraft {
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub hero_img: String,
    #[serde(default)]
    pub status: BlogStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub excerpt: Option<String>,
    pub body: Option<String>,
    pub categories: Option<Vec<String>>,
    pub hero_img: Option<String>,
    pub status: Option<BlogStatus>,
}

impl BlogPost {
    pub fn apply(&mut self, patch: BlogPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(excerpt) = patch.excerpt {
            self.excerpt = excerpt;
        }
        if let Some(body) = patch.body {
            self.body = body;
        }
        if let Some(categories) = patch.categories {
            self.categories = categories;
        }
        if let Some(hero_img) = patch.hero_img {
            self.hero_img = hero_img;
        }
        if let Some(status) = patch.status {
            if status == BlogStatus::Published && self.published_at.is_none() {
                self.published_at = Some(Utc::now());
            }
            self.status = status;
        }
    }
}

/// Lowercase the title and collapse every non-alphanumeric run into a single
/// dash. Uniqueness against the rest of the collection is the store's job.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_dash = true;
    for ch in title.chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("post");
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_punctuation() {
        assert_eq!(
            slugify("Union vs non-union in heavy civil: cost, safety, and schedule"),
            "union-vs-non-union-in-heavy-civil-cost-safety-and-schedule"
        );
    }

    #[test]
    fn slugify_never_empty() {
        assert_eq!(slugify("!!!"), "post");
    }
}
