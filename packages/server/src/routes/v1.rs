use axum::routing::get;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::config::AppConfig;
use crate::handlers;
use crate::state::AppState;

pub fn routes(config: &AppConfig) -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .nest("/clothing", clothing_routes(config))
        .nest("/outfits", outfit_routes())
        .nest("/profile", profile_routes())
        .routes(routes!(
            handlers::preference::get_language,
            handlers::preference::set_language
        ))
        .routes(routes!(handlers::preference::get_translations))
        .route("/media/{*path}", get(handlers::media::serve_media))
}

fn clothing_routes(config: &AppConfig) -> OpenApiRouter<AppState> {
    let crud = OpenApiRouter::new()
        .routes(routes!(
            handlers::clothing::list_clothing,
            handlers::clothing::save_clothing
        ))
        .routes(routes!(handlers::clothing::upgrade_and_save))
        .routes(routes!(handlers::clothing::clothing_options))
        .routes(routes!(handlers::clothing::delete_clothing));

    let upload = OpenApiRouter::new()
        .routes(routes!(handlers::clothing::analyze_clothing))
        .layer(handlers::clothing::image_upload_body_limit(config));

    crud.merge(upload)
}

fn outfit_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::outfit::get_quiz))
        .routes(routes!(
            handlers::outfit::list_recommendations,
            handlers::outfit::create_recommendations
        ))
}

fn profile_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(handlers::profile::get_stats))
}
