//! Read-only content routes. Nothing here touches the assistant.

use axum::{extract::Path, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::profile::{Certification, EducationItem, ExperienceItem, Profile, Project};
use crate::profile::data::{CERTIFICATIONS, EDUCATION, EXPERIENCE, PROFILE, PROJECTS};

#[derive(Debug, Serialize)]
pub struct EducationResponse {
    pub education: &'static [EducationItem],
    pub certifications: &'static [Certification],
}

/// GET /api/v1/profile
pub async fn handle_get_profile() -> Json<Profile> {
    Json(PROFILE)
}

/// GET /api/v1/experience
pub async fn handle_get_experience() -> Json<&'static [ExperienceItem]> {
    Json(EXPERIENCE)
}

/// GET /api/v1/education
pub async fn handle_get_education() -> Json<EducationResponse> {
    Json(EducationResponse {
        education: EDUCATION,
        certifications: CERTIFICATIONS,
    })
}

/// GET /api/v1/projects
pub async fn handle_list_projects() -> Json<&'static [Project]> {
    Json(PROJECTS)
}

/// GET /api/v1/projects/:index
///
/// Projects are addressed by position; the carousel walks them in order.
pub async fn handle_get_project(Path(index): Path<usize>) -> Result<Json<Project>, AppError> {
    PROJECTS
        .get(index)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Project {index} not found")))
}
