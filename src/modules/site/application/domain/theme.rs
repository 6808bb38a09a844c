use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Blocks the public site can render, in whatever order a theme asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SiteSection {
    Hero,
    Experience,
    Projects,
    Skills,
    Education,
    Certifications,
    Achievements,
    Activities,
    Articles,
    Contact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    Modern,
    Retro,
}

impl ThemeName {
    pub const ALL: [ThemeName; 2] = [ThemeName::Modern, ThemeName::Retro];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Modern => "modern",
            ThemeName::Retro => "retro",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown theme '{0}'")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemeName {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CardStyle {
    /// Rounded glass cards over a gradient backdrop.
    Glass,
    /// Boxed profile panels with a header strip.
    Panel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub surface: String,
    pub text: String,
}

/// Everything that differs between the two site themes. Rendering is one
/// code path parameterised by this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDescriptor {
    pub name: ThemeName,
    pub label: String,
    pub palette: Palette,
    pub section_order: Vec<SiteSection>,
    pub card_style: CardStyle,
}

impl ThemeDescriptor {
    pub fn for_theme(name: ThemeName) -> Self {
        match name {
            ThemeName::Modern => Self {
                name,
                label: "Modern gradient".into(),
                palette: Palette {
                    primary: "#6366f1".into(),
                    secondary: "#ec4899".into(),
                    background: "#0f172a".into(),
                    surface: "rgba(255, 255, 255, 0.08)".into(),
                    text: "#f8fafc".into(),
                },
                section_order: vec![
                    SiteSection::Hero,
                    SiteSection::Experience,
                    SiteSection::Projects,
                    SiteSection::Skills,
                    SiteSection::Education,
                    SiteSection::Certifications,
                    SiteSection::Achievements,
                    SiteSection::Activities,
                    SiteSection::Articles,
                    SiteSection::Contact,
                ],
                card_style: CardStyle::Glass,
            },
            ThemeName::Retro => Self {
                name,
                label: "Retro social network".into(),
                palette: Palette {
                    primary: "#3b5998".into(),
                    secondary: "#8b9dc3".into(),
                    background: "#e9ebee".into(),
                    surface: "#ffffff".into(),
                    text: "#1d2129".into(),
                },
                section_order: vec![
                    SiteSection::Hero,
                    SiteSection::Skills,
                    SiteSection::Experience,
                    SiteSection::Education,
                    SiteSection::Projects,
                    SiteSection::Articles,
                    SiteSection::Achievements,
                    SiteSection::Certifications,
                    SiteSection::Activities,
                    SiteSection::Contact,
                ],
                card_style: CardStyle::Panel,
            },
        }
    }

    pub fn all() -> Vec<Self> {
        ThemeName::ALL.into_iter().map(Self::for_theme).collect()
    }
}
