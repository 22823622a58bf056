//! Page copy and the literal figures shown on the landing page.
//!
//! Everything here is display-only; the numbers are not computed from anything.

use serde::Deserialize;
use thiserror::Error;

const EMBEDDED: &str = include_str!("../content/soonpad.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("brand name is empty")]
    MissingBrand,
    #[error("progress for {project} is {progress}%, expected 0-100")]
    ProgressOutOfRange { project: String, progress: u8 },
    #[error("rating for {author} is {rating}, expected 1-5")]
    RatingOutOfRange { author: String, rating: u8 },
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SiteContent {
    pub brand: Brand,
    pub nav: Nav,
    pub hero: Hero,
    pub stats: Vec<Stat>,
    pub features: Section<Feature>,
    pub security: Security,
    pub partners: Partners,
    pub testimonials: Section<Testimonial>,
    pub live_projects: Section<LiveProject>,
    pub application: Application,
    pub achievements: Achievements,
    pub newsletter: Newsletter,
    pub footer: Footer,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Brand {
    pub name: String,
    pub logo: String,
    pub tagline: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Nav {
    pub links: Vec<Link>,
    pub connect_wallet: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Hero {
    pub badge_icon: String,
    pub badge: String,
    pub title: String,
    pub subtitle: String,
    pub cta: String,
}

/// A headline figure, e.g. `{ value: "50+", label: "Projects Launched" }`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Section<T> {
    pub title: String,
    pub items: Vec<T>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Security {
    pub icon: String,
    pub title: String,
    pub checks: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Partners {
    pub title: String,
    /// Number of placeholder logo tiles.
    pub slots: u8,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
    #[serde(default = "default_rating")]
    pub rating: u8,
}

fn default_rating() -> u8 {
    5
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LiveProject {
    pub name: String,
    pub launch: String,
    pub raise: String,
    pub token_price: String,
    /// Percent of the raise filled.
    pub progress: u8,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Application {
    pub title: String,
    pub heading: String,
    pub body: String,
    pub cta: Link,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Achievement {
    pub name: String,
    pub percentage: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Achievements {
    pub title: String,
    pub body: String,
    pub projects: Vec<Achievement>,
    pub figures: Vec<Stat>,
    pub cta: Link,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Newsletter {
    pub heading: Vec<String>,
    pub placeholder: String,
    pub button: String,
    pub note: String,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Twitter,
    Github,
    Dribbble,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Social {
    pub kind: SocialKind,
    pub href: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LinkColumn {
    pub title: String,
    pub links: Vec<Link>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Footer {
    pub socials: Vec<Social>,
    pub columns: Vec<LinkColumn>,
    pub copyright: String,
}

impl SiteContent {
    /// Content compiled into the bundle.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.brand.name.trim().is_empty() {
            return Err(ContentError::MissingBrand);
        }
        if let Some(project) = self.live_projects.items.iter().find(|p| p.progress > 100) {
            return Err(ContentError::ProgressOutOfRange {
                project: project.name.clone(),
                progress: project.progress,
            });
        }
        if let Some(t) = self
            .testimonials
            .items
            .iter()
            .find(|t| !(1..=5).contains(&t.rating))
        {
            return Err(ContentError::RatingOutOfRange {
                author: t.author.clone(),
                rating: t.rating,
            });
        }
        Ok(())
    }
}
