//! SeaORM implementation of SongRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

use crate::domain::{DomainError, SongFilter, SongRepository};
use crate::models::song::{self, ActiveModel, Entity as SongEntity};
use crate::schemas::{CreateSongRequest, UpdateSongRequest};

/// SeaORM-based implementation of SongRepository
pub struct SeaOrmSongRepository {
    db: DatabaseConnection,
}

impl SeaOrmSongRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SongRepository for SeaOrmSongRepository {
    async fn find_all(&self) -> Result<Vec<song::Model>, DomainError> {
        Ok(SongEntity::find().all(&self.db).await?)
    }

    async fn create(&self, input: CreateSongRequest) -> Result<song::Model, DomainError> {
        let song = ActiveModel {
            name: Set(input.name),
            url: Set(input.url),
            plays: Set(input.plays.unwrap_or(0)),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        Ok(song.insert(&self.db).await?)
    }

    async fn update(
        &self,
        id: i32,
        input: UpdateSongRequest,
    ) -> Result<Option<song::Model>, DomainError> {
        let Some(existing) = SongEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        // SeaORM refuses an UPDATE with no changed columns, so an empty
        // payload short-circuits to the row as stored.
        if input.name.is_none() && input.url.is_none() {
            return Ok(Some(existing));
        }

        let mut song: ActiveModel = existing.into();
        if let Some(name) = input.name {
            song.name = Set(name);
        }
        if let Some(url) = input.url {
            song.url = Set(url);
        }

        Ok(Some(song.update(&self.db).await?))
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let result = SongEntity::delete_by_id(id).exec(&self.db).await?;

        Ok(result.rows_affected > 0)
    }

    async fn search(&self, filter: SongFilter) -> Result<Vec<song::Model>, DomainError> {
        let mut query = SongEntity::find();

        if let Some(name) = &filter.name
            && !name.is_empty()
        {
            query = query.filter(song::Column::Name.contains(name));
        }

        if let Some(min_plays) = filter.min_plays {
            query = query.filter(song::Column::Plays.gte(min_plays));
        }

        Ok(query.all(&self.db).await?)
    }
}
