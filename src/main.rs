pub mod api;
pub mod models;
pub mod routes;

use sqlx::postgres::PgPoolOptions;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
pub struct AppState {
	pub db: sqlx::Pool<sqlx::Postgres>,
}

#[tokio::main]
async fn main() {
	dotenvy::dotenv().expect(".env must exist");

	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| EnvFilter::new("postboard=info,tower_http=info")),
		)
		.init();

	let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must exist");
	let db = PgPoolOptions::new()
		.max_connections(32)
		.connect(&database_url)
		.await
		.expect("Could not connect to database");
	sqlx::migrate!()
		.run(&db)
		.await
		.expect("Unable to run migrations");

	let state = AppState { db };
	let router = api::route(state)
		.layer(TraceLayer::new_for_http())
		.layer(CorsLayer::permissive());

	let bind_addr =
		std::env::var("BIND_ADDR").unwrap_or_else(|_| String::from("0.0.0.0:8000"));
	let listener = tokio::net::TcpListener::bind(&bind_addr)
		.await
		.expect("Unable to bind listener");
	tracing::info!("listening on {bind_addr}");
	axum::serve(listener, router).await.unwrap();
}
