//! Server construction and middleware wiring.

mod config;
mod settings;
mod state_builders;

pub use config::ServerConfig;
pub use settings::ServerSettings;

use state_builders::build_http_state;

use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::cookie::{Key, SameSite, time::Duration};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use backend::Trace;
#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::inbound::http::configure;
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
    session_ttl_hours: i64,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        key,
        cookie_secure,
        same_site,
        session_ttl_hours,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(same_site)
        .session_lifecycle(
            PersistentSession::default().session_ttl(Duration::hours(session_ttl_hours)),
        )
        .build();

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(session)
        .wrap(Trace)
        .configure(configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// Readiness is marked once the listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(config.db_pool.as_ref());
    let ServerConfig {
        key,
        cookie_secure,
        same_site,
        session_ttl_hours,
        bind_addr,
        db_pool: _,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
            same_site,
            session_ttl_hours,
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    //! Tests for server wiring: readiness and the full middleware stack.

    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use backend::domain::TRACE_ID_HEADER;
    use backend::inbound::http::session_config::SessionSettings;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn health_state() -> web::Data<HealthState> {
        web::Data::new(HealthState::new())
    }

    #[fixture]
    fn session_settings() -> SessionSettings {
        SessionSettings {
            key: Key::generate(),
            cookie_secure: false,
            same_site: SameSite::Lax,
        }
    }

    fn deps(health_state: web::Data<HealthState>) -> AppDependencies {
        AppDependencies {
            health_state,
            http_state: build_http_state(None),
            key: Key::generate(),
            cookie_secure: false,
            same_site: SameSite::Lax,
            session_ttl_hours: 2,
        }
    }

    #[rstest]
    #[actix_rt::test]
    async fn create_server_marks_ready(
        health_state: web::Data<HealthState>,
        session_settings: SessionSettings,
    ) {
        assert!(!health_state.is_ready(), "state should start unready");

        let config = ServerConfig::new(
            session_settings,
            2,
            "127.0.0.1:0".parse().expect("loopback address"),
        );
        let _server = create_server(health_state.clone(), config).expect("server should build");

        assert!(health_state.is_ready(), "server creation should mark readiness");
    }

    #[rstest]
    #[actix_rt::test]
    async fn signup_cookie_is_private_http_only_and_persistent(
        health_state: web::Data<HealthState>,
    ) {
        let app = test::init_service(build_app(deps(health_state))).await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/signup")
                .set_json(json!({"username": "ada", "password": "pw"}))
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::CREATED);
        assert!(res.headers().contains_key(TRACE_ID_HEADER));
        let cookie = res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::hours(2)));
        assert!(!cookie.value().contains("user_id"));
    }

    #[rstest]
    #[actix_rt::test]
    async fn probes_are_served_without_a_session(health_state: web::Data<HealthState>) {
        health_state.mark_ready();
        let app = test::init_service(build_app(deps(health_state))).await;

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/health/ready").to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().contains_key(TRACE_ID_HEADER));
    }
}
