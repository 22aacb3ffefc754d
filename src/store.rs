use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, Set, SqlErr,
    TransactionTrait,
};

use crate::{
    entities::movie,
    error::{AppError, AppResult},
    models::{MoviePatch, NewMovie},
};

/// Handle over the movie table. The connection is a pool, so clones are
/// cheap and share the same database.
#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn insert(&self, new: NewMovie) -> AppResult<movie::Model> {
        insert_row(&self.db, new).await
    }

    /// Inserts the whole batch in one transaction: a missing field or
    /// duplicate title anywhere rolls back every element.
    pub async fn insert_many(&self, batch: Vec<NewMovie>) -> AppResult<Vec<movie::Model>> {
        let txn = self.db.begin().await?;

        let mut created = Vec::with_capacity(batch.len());
        for new in batch {
            created.push(insert_row(&txn, new).await?);
        }

        txn.commit().await?;

        Ok(created)
    }

    pub async fn all(&self) -> AppResult<Vec<movie::Model>> {
        Ok(movie::Entity::find().all(&self.db).await?)
    }

    pub async fn find(&self, id: i32) -> AppResult<Option<movie::Model>> {
        Ok(movie::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn update(&self, id: i32, patch: MoviePatch) -> AppResult<movie::Model> {
        let Some(existing) = self.find(id).await? else {
            return Err(AppError::NotFound(id));
        };

        if patch.is_empty() {
            return Ok(existing);
        }

        let new_title = patch.title.clone();

        let mut active: movie::ActiveModel = existing.into();
        if let Some(title) = patch.title {
            active.title = Set(title);
        }
        if let Some(rating) = patch.rating {
            active.rating = Set(rating);
        }
        if let Some(img) = patch.img {
            active.img = Set(img);
        }
        if let Some(description) = patch.description {
            active.description = Set(Some(description));
        }

        active.update(&self.db).await.map_err(|err| match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                AppError::DuplicateTitle(new_title.unwrap_or_default())
            }
            _ => err.into(),
        })
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(id));
        }
        Ok(())
    }
}

async fn insert_row<C>(conn: &C, new: NewMovie) -> AppResult<movie::Model>
where
    C: ConnectionTrait,
{
    let title = new.title.ok_or(AppError::MissingField("title"))?;
    let rating = new.rating.ok_or(AppError::MissingField("rating"))?;
    let img = new.img.ok_or(AppError::MissingField("img"))?;

    let active = movie::ActiveModel {
        title: Set(title.clone()),
        rating: Set(rating),
        img: Set(img),
        description: Set(new.description),
        ..Default::default()
    };

    active.insert(conn).await.map_err(|err| match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::DuplicateTitle(title),
        _ => err.into(),
    })
}
