//! Axum route handlers for the Resume Editor API.

use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::editor::ResumeSnapshot;
use crate::editor::suggestions::suggestion_for;
use crate::errors::{AppError, AppJson};
use crate::models::{ContentPatch, SectionContent, SectionKind, Theme, ThemeUpdate};
use crate::render::form::{describe_kinds, SectionKindDescriptor};
use crate::render::{self, EXPORT_FILE_NAME};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AddSectionRequest {
    #[serde(rename = "type")]
    pub section_type: String,
}

/// Outcome of a drag gesture. `destination` is null when the drop landed outside the list.
#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub source: usize,
    pub destination: Option<usize>,
}

// ────────────────────────────────────────────────────────────────────────────
// Document
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/resume
pub async fn handle_get_resume(
    State(state): State<AppState>,
) -> Result<Json<ResumeSnapshot>, AppError> {
    let snapshot = state.with_editor(|editor| editor.snapshot()).await?;
    Ok(Json(snapshot))
}

/// POST /api/v1/resume/sections
///
/// An unknown type adds nothing and still answers with the current document.
pub async fn handle_add_section(
    State(state): State<AppState>,
    AppJson(request): AppJson<AddSectionRequest>,
) -> Result<Json<ResumeSnapshot>, AppError> {
    let kind = request.section_type.parse::<SectionKind>();
    let snapshot = state
        .with_editor(move |editor| {
            match kind {
                Ok(kind) => {
                    editor.add(kind);
                }
                Err(e) => warn!("Add section ignored: {e}"),
            }
            editor.snapshot()
        })
        .await?;
    Ok(Json(snapshot))
}

/// PUT /api/v1/resume/sections/:id
///
/// Replaces the whole content object. The body must carry exactly the fields of the
/// section's type; an unknown id is a no-op.
pub async fn handle_update_section(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(fields): AppJson<Value>,
) -> Result<Json<ResumeSnapshot>, AppError> {
    let snapshot = state
        .with_editor(move |editor| -> Result<ResumeSnapshot, AppError> {
            let Some(kind) = editor.get(&id).map(|s| s.kind()) else {
                return Ok(editor.snapshot());
            };
            let content = SectionContent::from_fields(kind, fields)
                .map_err(|e| AppError::Validation(format!("Invalid {kind} content: {e}")))?;
            editor.update(&id, content)?;
            Ok(editor.snapshot())
        })
        .await??;
    Ok(Json(snapshot))
}

/// PATCH /api/v1/resume/sections/:id
///
/// Field-level edit: merges the given fields, ignoring names the section type lacks.
pub async fn handle_patch_section(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(patch): AppJson<ContentPatch>,
) -> Result<Json<ResumeSnapshot>, AppError> {
    let snapshot = state
        .with_editor(move |editor| {
            editor.patch(&id, &patch);
            editor.snapshot()
        })
        .await?;
    Ok(Json(snapshot))
}

/// DELETE /api/v1/resume/sections/:id
pub async fn handle_delete_section(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResumeSnapshot>, AppError> {
    let snapshot = state
        .with_editor(move |editor| {
            editor.delete(&id);
            editor.snapshot()
        })
        .await?;
    Ok(Json(snapshot))
}

/// POST /api/v1/resume/sections/:id/suggestion
pub async fn handle_apply_suggestion(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResumeSnapshot>, AppError> {
    let snapshot = state
        .with_editor(move |editor| {
            editor.apply_suggestion(&id);
            editor.snapshot()
        })
        .await?;
    Ok(Json(snapshot))
}

/// POST /api/v1/resume/reorder
pub async fn handle_reorder(
    State(state): State<AppState>,
    AppJson(request): AppJson<ReorderRequest>,
) -> Result<Json<ResumeSnapshot>, AppError> {
    let snapshot = state
        .with_editor(move |editor| {
            editor.reorder(request.source, request.destination);
            editor.snapshot()
        })
        .await?;
    Ok(Json(snapshot))
}

// ────────────────────────────────────────────────────────────────────────────
// Suggestions, theme, form descriptors
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/suggestions/:type
pub async fn handle_get_suggestion(Path(section_type): Path<String>) -> Json<ContentPatch> {
    Json(suggestion_for(&section_type))
}

/// GET /api/v1/theme
pub async fn handle_get_theme(State(state): State<AppState>) -> Result<Json<Theme>, AppError> {
    let theme = state.with_editor(|editor| editor.theme()).await?;
    Ok(Json(theme))
}

/// PUT /api/v1/theme
pub async fn handle_put_theme(
    State(state): State<AppState>,
    AppJson(update): AppJson<ThemeUpdate>,
) -> Result<Json<Theme>, AppError> {
    let theme = state
        .with_editor(move |editor| {
            let mut theme = editor.theme();
            theme.apply(update);
            editor.set_theme(theme);
            theme
        })
        .await?;
    Ok(Json(theme))
}

/// GET /api/v1/section-kinds
pub async fn handle_section_kinds() -> Json<Vec<SectionKindDescriptor>> {
    Json(describe_kinds())
}

// ────────────────────────────────────────────────────────────────────────────
// Preview and export
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/resume/preview
pub async fn handle_preview(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let html = state
        .with_editor(|editor| render::render_html(editor.sections(), &editor.theme()))
        .await?
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Preview template failed: {e}")))?;
    Ok(Html(html))
}

/// GET /api/v1/resume/export
///
/// Snapshots the document under the lock, then renders outside it.
pub async fn handle_export(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let snapshot = state.with_editor(|editor| editor.snapshot()).await?;
    let fonts_dir = state.config.fonts_dir.clone();

    let pdf = tokio::task::spawn_blocking(move || {
        render::export(&snapshot.sections, &snapshot.theme, &fonts_dir)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in PDF export: {e}")))??;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
            ),
        ],
        Bytes::from(pdf),
    ))
}
