pub mod health;
pub mod resumes;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/resumes",
            post(resumes::handle_create).get(resumes::handle_list),
        )
        .route(
            "/resumes/:id",
            get(resumes::handle_get)
                .patch(resumes::handle_update)
                .delete(resumes::handle_delete),
        )
        .route("/resumes/:id/pdf", get(resumes::handle_pdf))
        .with_state(state)
}
