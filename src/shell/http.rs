use axum::{
    Json, Router,
    extract::State,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::application::command_handlers::apply_settings_handler::ApplyAccountSettings;
use crate::application::errors::ApplicationError;
use crate::core::account_policy::settings::AccountSettings;
use crate::core::ports::SettingsStore;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/admin/account-settings",
            get(get_settings).put(put_settings),
        )
        .with_state(state)
}

#[derive(Deserialize)]
pub struct PutAccountSettingsBody {
    pub registration_mode: String,
    pub verification_mode: String,
}

#[derive(Serialize)]
pub struct AccountSettingsResponse(pub AccountSettings);

pub async fn get_settings(State(state): State<AppState>) -> impl IntoResponse {
    match state.settings_store.load().await {
        Ok(settings) => Json(AccountSettingsResponse(settings)).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

pub async fn put_settings(
    State(state): State<AppState>,
    body: Result<Json<PutAccountSettingsBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = ApplyAccountSettings {
        registration_mode: body.registration_mode,
        verification_mode: body.verification_mode,
    };

    match state.apply_handler.handle(command).await {
        Ok(settings) => (StatusCode::OK, Json(AccountSettingsResponse(settings))).into_response(),
        Err(ApplicationError::InvalidMode(_)) => StatusCode::BAD_REQUEST.into_response(),
        Err(ApplicationError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

#[cfg(test)]
mod account_settings_http_tests {
    use std::sync::Arc;

    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::adapters::in_memory::in_memory_settings_store::InMemorySettingsStore;
    use crate::application::command_handlers::apply_settings_handler::ApplyAccountSettingsHandler;
    use crate::shell::state::AppState;

    use super::router;

    fn make_test_state() -> AppState {
        AppState::in_memory()
    }

    fn make_offline_store_state() -> AppState {
        let mut store = InMemorySettingsStore::new();
        store.toggle_offline();
        let settings_store = Arc::new(store);
        let apply_handler = Arc::new(ApplyAccountSettingsHandler::new(settings_store.clone()));
        AppState {
            settings_store,
            apply_handler,
        }
    }

    fn app(state: AppState) -> Router {
        router(state)
    }

    #[tokio::test]
    async fn it_should_return_200_with_the_host_defaults_on_get() {
        let response = app(make_test_state())
            .oneshot(
                Request::get("/admin/account-settings")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["registration_mode"], "open");
        assert_eq!(json["verification_mode"], "email-link");
        assert_eq!(json["notifications"]["verify_email_on_registration"], true);
    }

    #[tokio::test]
    async fn it_should_return_200_with_the_derived_flags_on_put() {
        let body =
            r#"{"registration_mode":"open","verification_mode":"password-at-registration"}"#;

        let response = app(make_test_state())
            .oneshot(
                Request::put("/admin/account-settings")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["registration_mode"], "open");
        assert_eq!(json["verification_mode"], "password-at-registration");
        assert_eq!(json["notifications"]["verify_email_on_registration"], false);
        assert_eq!(
            json["notifications"]["notify_admin_on_pending_approval"],
            false
        );
        assert_eq!(
            json["notifications"]["notify_user_on_immediate_approval"],
            false
        );
    }

    #[tokio::test]
    async fn it_should_return_400_on_an_unknown_mode_value() {
        let body = r#"{"registration_mode":"invite-only","verification_mode":"email-link"}"#;

        let response = app(make_test_state())
            .oneshot(
                Request::put("/admin/account-settings")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_should_return_422_on_invalid_json() {
        let response = app(make_test_state())
            .oneshot(
                Request::put("/admin/account-settings")
                    .header("content-type", "application/json")
                    .body(Body::from("not-json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_store_is_offline() {
        let body =
            r#"{"registration_mode":"open","verification_mode":"password-at-registration"}"#;

        let response = app(make_offline_store_state())
            .oneshot(
                Request::put("/admin/account-settings")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
