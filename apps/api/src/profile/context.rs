//! Renders the site content into the biographical context block the chat
//! assistant is grounded on. Output is deterministic for a given build.

use crate::models::profile::{Certification, EducationItem, ExperienceItem, Profile, Project};
use crate::profile::data::{CERTIFICATIONS, EDUCATION, EXPERIENCE, PROFILE, PROJECTS};

/// Context block for the compiled-in content.
pub fn portfolio_context() -> String {
    render_context(&PROFILE, EXPERIENCE, PROJECTS, EDUCATION, CERTIFICATIONS)
}

pub fn render_context(
    profile: &Profile,
    experience: &[ExperienceItem],
    projects: &[Project],
    education: &[EducationItem],
    certifications: &[Certification],
) -> String {
    let mut out = String::new();

    out.push_str("**Profile:**\n");
    out.push_str(&format!("- Name: {}\n", profile.name));
    out.push_str(&format!("- Role: {}\n", profile.role));
    out.push_str(&format!("- Focus: {}\n", profile.focus));
    out.push_str(&format!("- Bio: {}\n\n", profile.bio));

    out.push_str("**Professional Experience:**\n");
    for (i, item) in experience.iter().enumerate() {
        out.push_str(&format!(
            "{}. **{} at {} ({})**\n",
            i + 1,
            item.role,
            item.company,
            item.duration
        ));
        for line in item.description {
            out.push_str(&format!("   - {line}\n"));
        }
    }
    out.push('\n');

    out.push_str("**Projects:**\n");
    for (i, project) in projects.iter().enumerate() {
        match project.live_url {
            Some(url) => out.push_str(&format!("{}. **{}** (Live: {url})\n", i + 1, project.title)),
            None => out.push_str(&format!("{}. **{}**\n", i + 1, project.title)),
        }
        out.push_str(&format!("   - {}\n", project.description));
        out.push_str(&format!("   - Tech: {}.\n", project.tags.join(", ")));
        out.push_str(&format!("   - Features: {}.\n", project.highlights.join(", ")));
        if let Some(url) = project.source_url {
            out.push_str(&format!("   - Source: {url}\n"));
        }
    }
    out.push('\n');

    out.push_str("**Skills:**\n");
    for group in profile.skills {
        out.push_str(&format!("- {}: {}.\n", group.category, group.items.join(", ")));
    }
    out.push('\n');

    out.push_str("**Education:**\n");
    for item in education {
        out.push_str(&format!(
            "- {}, {} ({}).\n",
            item.degree, item.institution, item.duration
        ));
    }
    if !certifications.is_empty() {
        out.push_str("- Certifications:\n");
        for cert in certifications {
            out.push_str(&format!("  - {} ({}, {})", cert.title, cert.issuer, cert.date));
            if !cert.sub_certificates.is_empty() {
                out.push_str(&format!(
                    " - {} professional certificates",
                    cert.sub_certificates.len()
                ));
            }
            out.push_str(".\n");
        }
    }
    out.push('\n');

    out.push_str("**Contact:**\n");
    out.push_str(&format!("- Email: {}\n", profile.contact.email));
    out.push_str(&format!("- GitHub: {}\n", profile.contact.github));
    out.push_str(&format!("- LinkedIn: {}\n", profile.contact.linkedin));

    out
}
