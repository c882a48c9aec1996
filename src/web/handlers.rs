use super::AppState;
use super::pages;
use crate::error::AttendanceError;
use crate::record_service::RecordService;
use crate::student::normalize_student_id;
use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use log::{error, warn};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebError {
    #[error("Error: No student_id provided")]
    MissingStudentId,

    #[error("Error: Missing form field {0}")]
    MissingField(&'static str),

    #[error("Error: Student {0} not found")]
    StudentNotFound(String),

    #[error("Internal server error")]
    Internal(String),
}

impl From<AttendanceError> for WebError {
    fn from(err: AttendanceError) -> Self {
        match err {
            AttendanceError::StudentNotFound(id) => WebError::StudentNotFound(id),
            other => WebError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = match &self {
            WebError::MissingStudentId | WebError::MissingField(_) => StatusCode::BAD_REQUEST,
            WebError::StudentNotFound(_) => StatusCode::NOT_FOUND,
            WebError::Internal(detail) => {
                error!("Request failed: {}", detail);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}

/// Runs store work off the async executor
async fn run_blocking<T, F>(state: &AppState, work: F) -> Result<T, WebError>
where
    T: Send + 'static,
    F: FnOnce(&RecordService) -> Result<T, AttendanceError> + Send + 'static,
{
    let service = state.service.clone();
    tokio::task::spawn_blocking(move || work(&service))
        .await
        .map_err(|e| WebError::Internal(format!("store task failed: {}", e)))?
        .map_err(WebError::from)
}

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    student_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddRecordQuery {
    student_id: Option<String>,
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddStudentForm {
    student_id: Option<String>,
    student_name: Option<String>,
    course: Option<String>,
}

fn required(value: Option<String>, field: &'static str) -> Result<String, WebError> {
    value.ok_or_else(|| {
        warn!("Form submitted without {}", field);
        WebError::MissingField(field)
    })
}

pub async fn index_handler() -> Html<String> {
    Html(pages::index_page(None))
}

pub async fn search_handler(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, WebError> {
    let student_id = normalize_student_id(&required(form.student_id, "student_id")?);
    let lookup_id = student_id.clone();
    let overview = run_blocking(&state, move |service| service.student_overview(&lookup_id)).await?;

    match overview {
        Some(overview) => Ok(Html(pages::student_page(&overview))),
        None => {
            warn!("Search found no student with ID {}", student_id);
            let message = format!("No student found with ID: {}", student_id);
            Ok(Html(pages::index_page(Some(&message))))
        }
    }
}

pub async fn add_record_handler(
    State(state): State<AppState>,
    Query(query): Query<AddRecordQuery>,
) -> Result<(StatusCode, String), WebError> {
    let student_id = normalize_student_id(query.student_id.as_deref().unwrap_or_default());
    if student_id.is_empty() {
        warn!("Attendance request without student_id");
        return Err(WebError::MissingStudentId);
    }

    let record = run_blocking(&state, move |service| {
        let now = service.now();
        service.record_attendance(&student_id, query.status.as_deref(), now)
    })
    .await?;

    Ok((
        StatusCode::OK,
        format!(
            "Attendance recorded for {} at {}",
            record.student_id, record.time_in
        ),
    ))
}

pub async fn add_student_form_handler() -> Html<String> {
    Html(pages::add_student_page(None))
}

pub async fn add_student_handler(
    State(state): State<AppState>,
    Form(form): Form<AddStudentForm>,
) -> Result<Html<String>, WebError> {
    let student_id = required(form.student_id, "student_id")?;
    let student_name = required(form.student_name, "student_name")?;
    let course = required(form.course, "course")?;

    let message = run_blocking(&state, move |service| {
        match service.add_student(&student_id, &student_name, &course) {
            Ok(student) => Ok(format!(
                "Student {} added successfully!",
                student.student_name
            )),
            Err(AttendanceError::DuplicateStudent(id)) => {
                Ok(format!("Error: Student ID {} already exists.", id))
            }
            Err(other) => Err(other),
        }
    })
    .await?;

    Ok(Html(pages::add_student_page(Some(&message))))
}
