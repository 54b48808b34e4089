use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub focus: &'static str,
    pub bio: &'static str,
    pub skills: &'static [SkillGroup],
    pub contact: ContactLinks,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactLinks {
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceItem {
    pub role: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub description: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationItem {
    pub degree: &'static str,
    pub institution: &'static str,
    pub duration: &'static str,
    pub details: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    /// Individual certificates bundled under a programme, if any.
    pub sub_certificates: &'static [&'static str],
}

/// Background treatment the front end applies to a project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectTheme {
    Tech,
    Calm,
    Creative,
    Dark,
    Colorful,
}

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    /// Key features, one short line each.
    pub highlights: &'static [&'static str],
    pub tags: &'static [&'static str],
    pub image_url: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ProjectTheme>,
}
