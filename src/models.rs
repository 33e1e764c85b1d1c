use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Postgres};
use time::PrimitiveDateTime;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
	pub id: i32,
	pub title: String,
	pub content: String,
	pub created_at: PrimitiveDateTime,
	pub updated_at: PrimitiveDateTime,
}

#[derive(Serialize, Deserialize)]
pub struct CreatePost {
	pub title: String,
	pub content: String,
}

#[derive(Serialize, Deserialize)]
pub struct UpdatePost {
	pub title: Option<String>,
	pub content: Option<String>,
}

fn now() -> PrimitiveDateTime {
	let now = time::OffsetDateTime::now_utc();
	PrimitiveDateTime::new(now.date(), now.time())
}

impl Post {
	pub async fn list(db: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
		sqlx::query_as::<Postgres, Self>(
			"SELECT id, title, content, created_at, updated_at FROM posts ORDER BY created_at DESC, id DESC",
		)
		.fetch_all(db)
		.await
	}

	pub async fn get(id: i32, db: &PgPool) -> Result<Option<Self>, sqlx::Error> {
		sqlx::query_as::<Postgres, Self>(
			"SELECT id, title, content, created_at, updated_at FROM posts WHERE id = $1",
		)
		.bind(id)
		.fetch_optional(db)
		.await
	}

	pub async fn create(post: &CreatePost, db: &PgPool) -> Result<Self, sqlx::Error> {
		let time = now();
		sqlx::query_as::<Postgres, Self>(
			"INSERT INTO posts (title, content, created_at, updated_at) VALUES ($1, $2, $3, $3) RETURNING id, title, content, created_at, updated_at",
		)
		.bind(&post.title)
		.bind(&post.content)
		.bind(time)
		.fetch_one(db)
		.await
	}

	// Omitted fields keep their stored value
	pub async fn update(
		id: i32,
		post: &UpdatePost,
		db: &PgPool,
	) -> Result<Option<Self>, sqlx::Error> {
		let time = now();
		sqlx::query_as::<Postgres, Self>(
			"UPDATE posts SET title = COALESCE($2, title), content = COALESCE($3, content), updated_at = $4 WHERE id = $1 RETURNING id, title, content, created_at, updated_at",
		)
		.bind(id)
		.bind(post.title.as_deref())
		.bind(post.content.as_deref())
		.bind(time)
		.fetch_optional(db)
		.await
	}

	pub async fn delete(id: i32, db: &PgPool) -> Result<bool, sqlx::Error> {
		let result = sqlx::query("DELETE FROM posts WHERE id = $1")
			.bind(id)
			.execute(db)
			.await?;
		Ok(result.rows_affected() > 0)
	}
}
