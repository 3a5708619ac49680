//! Matriculation registry data repository.
//!
//! Handles the pre-issued enrollment codes and their consumption flag. The
//! flag flip is a conditional atomic update so two concurrent signups with
//! the same code cannot both win.

use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::matriculation::Matriculation;

/// Repository providing database operations for the matriculation registry.
pub struct MatriculationRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MatriculationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new registry entry with the `used` flag cleared.
    pub async fn create(&self, code: String) -> Result<Matriculation, DbErr> {
        let entity = entity::prelude::Matriculation::insert(entity::matriculation::ActiveModel {
            code: ActiveValue::Set(code),
            used: ActiveValue::Set(false),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Matriculation::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Matriculation>, DbErr> {
        let entity = entity::prelude::Matriculation::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Matriculation::from_entity))
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<Matriculation>, DbErr> {
        let entity = entity::prelude::Matriculation::find()
            .filter(entity::matriculation::Column::Code.eq(code))
            .one(self.db)
            .await?;

        Ok(entity.map(Matriculation::from_entity))
    }

    /// Gets all registry entries ordered by code.
    pub async fn get_all(&self) -> Result<Vec<Matriculation>, DbErr> {
        let entities = entity::prelude::Matriculation::find()
            .order_by_asc(entity::matriculation::Column::Code)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Matriculation::from_entity).collect())
    }

    /// Rewrites the code of an entry, leaving the `used` flag untouched.
    ///
    /// # Returns
    /// - `Ok(Some(Matriculation))` - The updated entry
    /// - `Ok(None)` - No entry with that id
    /// - `Err(DbErr)` - Database error, including a unique violation on the
    ///   new code
    pub async fn update_code(&self, id: i32, code: String) -> Result<Option<Matriculation>, DbErr> {
        let Some(entity) = entity::prelude::Matriculation::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::matriculation::ActiveModel = entity.into();
        active.code = ActiveValue::Set(code);

        let updated = entity::prelude::Matriculation::update(active)
            .exec(self.db)
            .await?;

        Ok(Some(Matriculation::from_entity(updated)))
    }

    /// Consumes a code: flips `used` from false to true.
    ///
    /// The update is conditioned on the current flag still being false, so
    /// exactly one of several concurrent callers observes `true`.
    ///
    /// # Returns
    /// - `Ok(true)` - This caller consumed the code
    /// - `Ok(false)` - The code was absent or already consumed
    /// - `Err(DbErr)` - Database error during the update
    pub async fn mark_used_if_unused(&self, code: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Matriculation::update_many()
            .col_expr(entity::matriculation::Column::Used, Expr::value(true))
            .filter(entity::matriculation::Column::Code.eq(code))
            .filter(entity::matriculation::Column::Used.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Clears the `used` flag on the given entries.
    ///
    /// Administrative bulk reset for correcting erroneous registrations.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of entries actually reset
    pub async fn mark_unused(&self, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Matriculation::update_many()
            .col_expr(entity::matriculation::Column::Used, Expr::value(false))
            .filter(entity::matriculation::Column::Id.is_in(ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes an entry by id. Callers enforce the used-entry guard first.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Matriculation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
