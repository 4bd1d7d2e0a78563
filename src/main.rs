use std::path::PathBuf;
use std::sync::Mutex;

use actix_web::{App, HttpServer, middleware, web};

use campops::auth::pin;
use campops::db;
use campops::handlers::{
    assignment_handlers, evaluation_handlers, participant_handlers, photo_handlers,
    ranking_handlers, user_handlers,
};
use campops::models::assignment;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let database_path =
        std::env::var("DATABASE_PATH").unwrap_or_else(|_| "data/campops.db".to_string());
    let photo_dir: PathBuf = std::env::var("PHOTO_DIR")
        .unwrap_or_else(|_| "data/photos".to_string())
        .into();
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

    if let Some(parent) = std::path::Path::new(&database_path).parent() {
        std::fs::create_dir_all(parent).expect("Failed to create data directory");
    }
    std::fs::create_dir_all(&photo_dir).expect("Failed to create photo directory");

    let pool = db::init_pool(&database_path);
    db::run_migrations(&pool);

    // Default super admin, PIN hashed at seed time
    let pin_hash = pin::hash_pin("1408").expect("Failed to hash default PIN");
    db::seed_admin(&pool, "Quân Hoàng", &pin_hash);

    // Load the assignment board once; all mutations go through its mutex.
    let board = {
        let mut conn = pool.get().expect("Failed to get connection for board load");
        assignment::load_board(&mut conn).expect("Failed to load assignment board")
    };
    let board = web::Data::new(Mutex::new(board));
    let photo_store = web::Data::new(photo_handlers::PhotoStore {
        dir: photo_dir.clone(),
    });

    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .app_data(board.clone())
            .app_data(photo_store.clone())
            // Uploaded check-in photos
            .service(actix_files::Files::new("/photos", photo_dir.clone()))
            // Admin users
            .route("/api/users", web::get().to(user_handlers::list))
            .route("/api/users", web::post().to(user_handlers::create))
            .route("/api/users/auth", web::post().to(user_handlers::auth))
            .route("/api/users/{id}", web::put().to(user_handlers::update))
            .route("/api/users/{id}", web::delete().to(user_handlers::delete))
            // Participants & check-in
            .route("/api/participants", web::get().to(participant_handlers::list))
            .route("/api/participants", web::post().to(participant_handlers::create))
            .route("/api/participants/{id}", web::put().to(participant_handlers::update))
            .route("/api/participants/{id}", web::delete().to(participant_handlers::delete))
            .route(
                "/api/participants/{id}/checkin",
                web::put().to(participant_handlers::check_in),
            )
            .route(
                "/api/participants/{id}/reset-checkin",
                web::put().to(participant_handlers::reset_check_in),
            )
            .route("/api/upload-photo", web::post().to(photo_handlers::upload))
            // Evaluations & ranking
            .route(
                "/api/evaluations",
                web::post().to(evaluation_handlers::create),
            )
            .route(
                "/api/evaluations/{participantId}",
                web::get().to(evaluation_handlers::list_for_participant),
            )
            .route(
                "/api/criteria/{role}",
                web::get().to(evaluation_handlers::criteria_for_role),
            )
            .route(
                "/api/rankings/supporters",
                web::get().to(ranking_handlers::supporters),
            )
            // Camp assignments — /board and /reorder BEFORE /{participantId}
            .route(
                "/api/camp-assignments",
                web::get().to(assignment_handlers::list),
            )
            .route(
                "/api/camp-assignments",
                web::post().to(assignment_handlers::upsert),
            )
            .route(
                "/api/camp-assignments/board",
                web::get().to(assignment_handlers::board_view),
            )
            .route(
                "/api/camp-assignments/reorder",
                web::post().to(assignment_handlers::reorder),
            )
            .route(
                "/api/camp-assignments/{participantId}",
                web::delete().to(assignment_handlers::unassign),
            )
    })
    .bind(&bind_addr)?
    .run()
    .await
}
