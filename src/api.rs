use crate::models::*;
use crate::routes;
use crate::AppState;
use axum::{
	extract::*,
	http::StatusCode,
	response::*,
	routing::*,
	Router,
};

pub fn route(state: AppState) -> Router {
	Router::new()
		.route(routes::POST_LIST_PATTERN, get(post_list).post(post_create))
		.route(
			routes::POST_DETAIL_PATTERN,
			get(post_detail).put(post_update).delete(post_delete),
		)
		.with_state(state)
}

async fn post_list(State(state): State<AppState>) -> Result<Json<Vec<Post>>, StatusCode> {
	let posts = Post::list(&state.db)
		.await
		.map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
	Ok(Json(posts))
}

async fn post_create(
	State(state): State<AppState>,
	Json(post): Json<CreatePost>,
) -> Result<(StatusCode, Json<Post>), StatusCode> {
	if post.title.trim().is_empty() {
		return Err(StatusCode::BAD_REQUEST);
	}
	let post = Post::create(&post, &state.db)
		.await
		.map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
	Ok((StatusCode::CREATED, Json(post)))
}

// The pk segment keeps Django int converter semantics: a non-integer
// segment is treated as no route match, so these answer 404 before
// touching the database.
async fn post_detail(
	Path(pk): Path<String>,
	State(state): State<AppState>,
) -> Result<Json<Post>, StatusCode> {
	let Some(pk) = routes::parse_pk(&pk) else {
		return Err(StatusCode::NOT_FOUND);
	};
	let post = Post::get(pk, &state.db)
		.await
		.map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
	let Some(post) = post else {
		return Err(StatusCode::NOT_FOUND);
	};
	Ok(Json(post))
}

async fn post_update(
	Path(pk): Path<String>,
	State(state): State<AppState>,
	Json(update): Json<UpdatePost>,
) -> Result<Json<Post>, StatusCode> {
	let Some(pk) = routes::parse_pk(&pk) else {
		return Err(StatusCode::NOT_FOUND);
	};
	if let Some(title) = &update.title {
		if title.trim().is_empty() {
			return Err(StatusCode::BAD_REQUEST);
		}
	}
	let post = Post::update(pk, &update, &state.db)
		.await
		.map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
	let Some(post) = post else {
		return Err(StatusCode::NOT_FOUND);
	};
	Ok(Json(post))
}

async fn post_delete(
	Path(pk): Path<String>,
	State(state): State<AppState>,
) -> Result<StatusCode, StatusCode> {
	let Some(pk) = routes::parse_pk(&pk) else {
		return Err(StatusCode::NOT_FOUND);
	};
	let deleted = Post::delete(pk, &state.db)
		.await
		.map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
	if !deleted {
		return Err(StatusCode::NOT_FOUND);
	}
	Ok(StatusCode::NO_CONTENT)
}
