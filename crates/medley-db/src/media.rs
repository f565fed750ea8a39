use chrono::{DateTime, Utc};
use medley_core::models::{Image, MediaType, Video};
use medley_core::AppError;
use sqlx::{FromRow, PgPool, Postgres};
use uuid::Uuid;

/// Database row for the unified media table.
#[derive(Debug, FromRow)]
pub struct MediaRow {
    pub id: Uuid,
    pub owner_id: String,
    pub media_type: MediaType,
    pub content_id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub original_size_bytes: String,
    pub compressed_size_bytes: Option<String>,
    pub duration_seconds: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MediaRow {
    /// Build a Video from this row. Title and compressed size are
    /// CHECK-enforced for video rows; a miss indicates a corrupt row.
    pub fn into_video(self) -> Result<Video, AppError> {
        let title = self
            .title
            .ok_or_else(|| AppError::Internal(format!("Video row {} missing title", self.id)))?;
        let compressed_size_bytes = self.compressed_size_bytes.ok_or_else(|| {
            AppError::Internal(format!("Video row {} missing compressed size", self.id))
        })?;
        Ok(Video {
            id: self.id,
            owner_id: self.owner_id,
            content_id: self.content_id,
            title,
            description: self.description,
            original_size_bytes: self.original_size_bytes,
            compressed_size_bytes,
            duration_seconds: self.duration_seconds.unwrap_or(0.0),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }

    pub fn into_image(self) -> Result<Image, AppError> {
        Ok(Image {
            id: self.id,
            owner_id: self.owner_id,
            content_id: self.content_id,
            title: self.title,
            original_size_bytes: self.original_size_bytes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// New video record; created only after the media service upload succeeded.
#[derive(Debug)]
pub struct NewVideo {
    pub owner_id: String,
    pub content_id: String,
    pub title: String,
    pub description: Option<String>,
    pub original_size_bytes: String,
    pub compressed_size_bytes: String,
    pub duration_seconds: f64,
}

/// New image record.
#[derive(Debug)]
pub struct NewImage {
    pub owner_id: String,
    pub content_id: String,
    pub title: Option<String>,
    pub original_size_bytes: String,
}

/// Unified media repository
///
/// All reads and mutations are scoped by owner. Deletion is a single
/// `DELETE .. RETURNING` statement, so concurrent deletes of the same
/// content id resolve to one winner; the loser observes no row.
#[derive(Clone)]
pub struct MediaRepository {
    pool: PgPool,
}

impl MediaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(skip(self, video), fields(db.table = "media", db.operation = "insert", media_type = "video"))]
    pub async fn create_video(&self, video: NewVideo) -> Result<Video, AppError> {
        let now = Utc::now();
        let row: MediaRow = sqlx::query_as::<Postgres, MediaRow>(
            r#"
            INSERT INTO media (
                id, owner_id, media_type, content_id,
                title, description,
                original_size_bytes, compressed_size_bytes, duration_seconds,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&video.owner_id)
        .bind(MediaType::Video)
        .bind(&video.content_id)
        .bind(&video.title)
        .bind(&video.description)
        .bind(&video.original_size_bytes)
        .bind(&video.compressed_size_bytes)
        .bind(video.duration_seconds)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        row.into_video()
    }

    #[tracing::instrument(skip(self, image), fields(db.table = "media", db.operation = "insert", media_type = "image"))]
    pub async fn create_image(&self, image: NewImage) -> Result<Image, AppError> {
        let now = Utc::now();
        let row: MediaRow = sqlx::query_as::<Postgres, MediaRow>(
            r#"
            INSERT INTO media (
                id, owner_id, media_type, content_id,
                title, original_size_bytes,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&image.owner_id)
        .bind(MediaType::Image)
        .bind(&image.content_id)
        .bind(&image.title)
        .bind(&image.original_size_bytes)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        row.into_image()
    }

    /// All videos owned by `owner_id`, most recent first.
    pub async fn list_videos(&self, owner_id: &str) -> Result<Vec<Video>, AppError> {
        let rows: Vec<MediaRow> = sqlx::query_as::<Postgres, MediaRow>(
            r#"
            SELECT * FROM media
            WHERE owner_id = $1 AND media_type = $2
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id)
        .bind(MediaType::Video)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(MediaRow::into_video).collect()
    }

    /// All images owned by `owner_id`, most recent first.
    pub async fn list_images(&self, owner_id: &str) -> Result<Vec<Image>, AppError> {
        let rows: Vec<MediaRow> = sqlx::query_as::<Postgres, MediaRow>(
            r#"
            SELECT * FROM media
            WHERE owner_id = $1 AND media_type = $2
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id)
        .bind(MediaType::Image)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(MediaRow::into_image).collect()
    }

    #[tracing::instrument(skip(self), fields(db.table = "media", db.operation = "delete", media_type = "video"))]
    pub async fn delete_video(
        &self,
        owner_id: &str,
        content_id: &str,
    ) -> Result<Option<Video>, AppError> {
        let row = self
            .delete_row(owner_id, content_id, MediaType::Video)
            .await?;
        row.map(MediaRow::into_video).transpose()
    }

    #[tracing::instrument(skip(self), fields(db.table = "media", db.operation = "delete", media_type = "image"))]
    pub async fn delete_image(
        &self,
        owner_id: &str,
        content_id: &str,
    ) -> Result<Option<Image>, AppError> {
        let row = self
            .delete_row(owner_id, content_id, MediaType::Image)
            .await?;
        row.map(MediaRow::into_image).transpose()
    }

    /// Atomic owner-scoped removal; returns the removed row, if any.
    async fn delete_row(
        &self,
        owner_id: &str,
        content_id: &str,
        media_type: MediaType,
    ) -> Result<Option<MediaRow>, AppError> {
        let row: Option<MediaRow> = sqlx::query_as::<Postgres, MediaRow>(
            r#"
            DELETE FROM media
            WHERE owner_id = $1 AND content_id = $2 AND media_type = $3
            RETURNING *
            "#,
        )
        .bind(owner_id)
        .bind(content_id)
        .bind(media_type)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video_row() -> MediaRow {
        MediaRow {
            id: Uuid::new_v4(),
            owner_id: "user_1".to_string(),
            media_type: MediaType::Video,
            content_id: "gallery/v1".to_string(),
            title: Some("clip".to_string()),
            description: Some("a clip".to_string()),
            original_size_bytes: "1000".to_string(),
            compressed_size_bytes: Some("500".to_string()),
            duration_seconds: Some(12.5),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_row_into_video() {
        let video = video_row().into_video().unwrap();
        assert_eq!(video.title, "clip");
        assert_eq!(video.compressed_size_bytes, "500");
        assert_eq!(video.duration_seconds, 12.5);
    }

    #[test]
    fn test_row_into_video_defaults_duration() {
        let mut row = video_row();
        row.duration_seconds = None;
        let video = row.into_video().unwrap();
        assert_eq!(video.duration_seconds, 0.0);
    }

    #[test]
    fn test_row_missing_title_is_an_error() {
        let mut row = video_row();
        row.title = None;
        assert!(row.into_video().is_err());
    }

    #[test]
    fn test_row_into_image_title_optional() {
        let mut row = video_row();
        row.media_type = MediaType::Image;
        row.title = None;
        let image = row.into_image().unwrap();
        assert_eq!(image.title, None);
        assert_eq!(image.content_id, "gallery/v1");
    }
}
