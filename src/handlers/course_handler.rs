use actix_web::{delete, get, web, HttpResponse};
use serde::Deserialize;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::PaginationParams,
        response::{CourseListResponse, CourseResponse, DeleteCourseResponse},
    },
};

#[derive(Debug, Deserialize)]
pub struct CourseListQuery {
    pub user_id: String,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl CourseListQuery {
    fn pagination(&self) -> PaginationParams {
        PaginationParams {
            offset: self.offset,
            limit: self.limit,
        }
    }
}

#[get("/api/courses/{id}")]
async fn get_course(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let course = state.course_service.get_course(&id).await?;
    Ok(HttpResponse::Ok().json(CourseResponse::from(&course)))
}

#[get("/api/courses")]
async fn list_courses(
    state: web::Data<AppState>,
    query: web::Query<CourseListQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let pagination = query.pagination();
    let offset = pagination.offset();
    let limit = pagination.limit();

    let (courses, total) = state
        .course_service
        .list_courses_by_user(&query.user_id, offset, limit)
        .await?;

    Ok(HttpResponse::Ok().json(CourseListResponse {
        courses: courses.iter().map(CourseResponse::from).collect(),
        total,
        offset,
        limit,
    }))
}

#[delete("/api/courses/{id}")]
async fn delete_course(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.course_service.delete_course(&id).await?;
    Ok(HttpResponse::Ok().json(DeleteCourseResponse {
        message: format!("Course '{}' deleted", id),
    }))
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/health/ready")]
async fn health_check_ready(state: web::Data<AppState>) -> HttpResponse {
    let db_health = state.db.health_check().await;

    let status = if db_health.is_ok() { "ready" } else { "not_ready" };

    let response = serde_json::json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "dependencies": {
            "mongodb": if db_health.is_ok() { "ok" } else { "error" }
        }
    });

    if db_health.is_ok() {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

#[get("/health/live")]
async fn health_check_live() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().service(health_check)).await;

        let req = test::TestRequest::get().uri("/health").to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn test_health_check_live() {
        let app = test::init_service(App::new().service(health_check_live)).await;

        let req = test::TestRequest::get().uri("/health/live").to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }
}
