use axum::Router;
use dotenvy::dotenv;
use punchout_bridge::{
    config::app_config::AppConfig,
    punchout::{
        build_punchout_router,
        interfaces::rest::resources::{
            health_resource::HealthResource,
            punchout_login_query_resource::PunchoutLoginQueryResource,
        },
    },
};
use tracing_subscriber::{EnvFilter, fmt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        punchout_bridge::punchout::interfaces::rest::controllers::punchout_rest_controller::punchout_login,
        punchout_bridge::punchout::interfaces::rest::controllers::punchout_rest_controller::health
    ),
    components(schemas(PunchoutLoginQueryResource, HealthResource)),
    tags(
        (name = "punchout", description = "Procurement punchout session bridge")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "invalid configuration");
            std::process::exit(1);
        }
    };

    let punchout_router =
        build_punchout_router(&config).expect("failed to build punchout router");

    let app = Router::new()
        .merge(punchout_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    tracing::info!(
        port = config.port,
        environment = config.environment.as_str(),
        storefront = %config.storefront_base_url,
        "punchout bridge listening"
    );
    tracing::info!("Swagger UI available at http://localhost:{}/swagger-ui", config.port);

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
