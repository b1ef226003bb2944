use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{BuildCourseRequest, EvaluateAnswerRequest, GenerateOutlineRequest},
        response::{BuildCourseResponse, EvaluateAnswerResponse, OutlineResponse},
    },
};

#[post("/api/generate/outline")]
async fn generate_outline(
    state: web::Data<AppState>,
    request: web::Json<GenerateOutlineRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    log::info!(
        "Outline requested by user '{}' for prompt: {:.80}",
        request.user_id,
        request.prompt
    );

    let lessons = state.course_builder.generate_outline(&request.prompt).await?;
    Ok(HttpResponse::Ok().json(OutlineResponse { lessons }))
}

#[post("/api/generate/full")]
async fn generate_full_course(
    state: web::Data<AppState>,
    request: web::Json<BuildCourseRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let course = state.course_builder.build_course(request).await?;
    Ok(HttpResponse::Created().json(BuildCourseResponse::from_course(&course)))
}

#[post("/api/quiz/evaluate")]
async fn evaluate_answer(
    state: web::Data<AppState>,
    request: web::Json<EvaluateAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let explanation = state
        .llm_service
        .evaluate_quiz_answer(&request.question, &request.options, &request.answer)
        .await?;

    Ok(HttpResponse::Ok().json(EvaluateAnswerResponse { explanation }))
}
