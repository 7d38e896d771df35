use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
};

use crate::AppState;
use crate::admin::types::*;

#[cfg(feature = "admin")]
pub async fn delete_note_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Redirect, StatusCode> {
    sqlx::query("DELETE FROM note_types WHERE id = ?")
        .bind(id)
        .execute(state.zone_state.pool.as_ref())
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Redirect::to("/admin/note-types"))
}

#[cfg(feature = "admin")]
pub async fn list_note_types(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let rows =
        sqlx::query_as::<_, NoteType>("SELECT id, name, color FROM note_types ORDER BY name")
            .fetch_all(state.zone_state.pool.as_ref())
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let mut html = String::from("<table>");
    for row in rows {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>",
            row.name, row.color
        ));
    }
    html.push_str("</table>");

    Ok(Html(html))
}

#[cfg(feature = "admin")]
pub async fn create_note_type(
    State(state): State<AppState>,
    Form(form): Form<NoteTypeForm>,
) -> Result<Redirect, StatusCode> {
    if form.name.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    sqlx::query("INSERT INTO note_types (name, color) VALUES (?, ?)")
        .bind(&form.name)
        .bind(&form.color)
        .execute(state.zone_state.pool.as_ref())
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Redirect::to("/admin/note-types"))
}

pub fn format_note_badge(name: &str, color: &str) -> String {
    format!("<span style=\"background: {color}\">{name}</span>")
}
