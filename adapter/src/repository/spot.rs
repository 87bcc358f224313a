use crate::database::{
    model::spot::{PaginatedSpotRow, SpotRow},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{SpotId, UserId},
    list::PaginatedList,
    spot::{
        event::{CreateSpot, DeleteSpot, SpotListOptions, UpdateSpotLocation},
        Spot,
    },
};
use kernel::repository::spot::SpotRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct SpotRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl SpotRepository for SpotRepositoryImpl {
    async fn create(&self, event: CreateSpot) -> AppResult<()> {
        let res = sqlx::query("INSERT INTO parking_spots (location, owned_by) VALUES ($1, $2)")
            .bind(&event.location)
            .bind(event.owned_by)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no parking spot has been created".into(),
            ));
        }
        Ok(())
    }

    async fn find_all(&self, options: SpotListOptions) -> AppResult<PaginatedList<Spot>> {
        let SpotListOptions { limit, offset } = options;
        let rows: Vec<PaginatedSpotRow> = sqlx::query_as(
            r#"
                SELECT
                    COUNT(*) OVER() AS total,
                    s.spot_id,
                    s.location,
                    s.is_available,
                    s.owned_by,
                    u.user_name AS owner_name,
                    s.created_at
                FROM parking_spots AS s
                INNER JOIN users AS u ON s.owned_by = u.user_id
                ORDER BY s.created_at DESC
                LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let total = rows.first().map(|r| r.total).unwrap_or_default();
        let items = rows.into_iter().map(Spot::from).collect();
        Ok(PaginatedList {
            total,
            limit,
            offset,
            items,
        })
    }

    async fn find_by_id(&self, spot_id: SpotId) -> AppResult<Option<Spot>> {
        let row: Option<SpotRow> = sqlx::query_as(
            r#"
                SELECT
                    s.spot_id,
                    s.location,
                    s.is_available,
                    s.owned_by,
                    u.user_name AS owner_name,
                    s.created_at
                FROM parking_spots AS s
                INNER JOIN users AS u ON s.owned_by = u.user_id
                WHERE s.spot_id = $1
            "#,
        )
        .bind(spot_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Spot::from))
    }

    async fn update_location(&self, event: UpdateSpotLocation) -> AppResult<()> {
        self.check_ownership(event.spot_id, event.requested_user)
            .await?;

        let res = sqlx::query(
            r#"
                UPDATE parking_spots
                SET location = $1, updated_at = CURRENT_TIMESTAMP
                WHERE spot_id = $2
            "#,
        )
        .bind(&event.location)
        .bind(event.spot_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no parking spot has been updated".into(),
            ));
        }
        Ok(())
    }

    async fn delete(&self, event: DeleteSpot) -> AppResult<()> {
        self.check_ownership(event.spot_id, event.requested_user)
            .await?;

        // Reservations and reviews go with the spot via the cascading
        // foreign keys.
        let res = sqlx::query("DELETE FROM parking_spots WHERE spot_id = $1")
            .bind(event.spot_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no parking spot has been deleted".into(),
            ));
        }
        Ok(())
    }
}

impl SpotRepositoryImpl {
    async fn check_ownership(&self, spot_id: SpotId, requested_user: UserId) -> AppResult<()> {
        let row: Option<(UserId,)> =
            sqlx::query_as("SELECT owned_by FROM parking_spots WHERE spot_id = $1")
                .bind(spot_id)
                .fetch_optional(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;
        match row {
            None => Err(AppError::EntityNotFound(format!(
                "parking spot {spot_id} not found"
            ))),
            Some((owner,)) if owner != requested_user => Err(AppError::ForbiddenOperation),
            Some(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::user::UserRepositoryImpl;
    use kernel::model::user::event::CreateUser;
    use kernel::repository::user::UserRepository;
    use sqlx::PgPool;

    async fn create_user(pool: &PgPool, name: &str, email: &str) -> UserId {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        repo.create(CreateUser {
            user_name: name.into(),
            email: email.into(),
            password: "passw0rd!".into(),
        })
        .await
        .unwrap()
        .user_id
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn registered_spot_shows_up_in_listing(pool: PgPool) {
        let owner = create_user(&pool, "Olivia Owner", "olivia@example.com").await;
        let repo = SpotRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(CreateSpot::new("12 Harbor Road".into(), owner))
            .await
            .unwrap();

        let list = repo.find_all(SpotListOptions::new(20, 0)).await.unwrap();
        assert_eq!(list.total, 1);
        assert_eq!(list.items.len(), 1);

        let spot_id = list.items[0].spot_id;
        let spot = repo.find_by_id(spot_id).await.unwrap().unwrap();
        assert_eq!(spot.location, "12 Harbor Road");
        assert!(spot.is_available);
        assert_eq!(spot.owner.owner_id, owner);
        assert_eq!(spot.owner.owner_name, "Olivia Owner");
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn only_the_owner_may_edit_or_delete(pool: PgPool) {
        let owner = create_user(&pool, "Olivia Owner", "olivia@example.com").await;
        let other = create_user(&pool, "Kate Keen", "kate@example.com").await;
        let repo = SpotRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(CreateSpot::new("12 Harbor Road".into(), owner))
            .await
            .unwrap();
        let spot_id = repo
            .find_all(SpotListOptions::new(20, 0))
            .await
            .unwrap()
            .items[0]
            .spot_id;

        let err = repo
            .update_location(UpdateSpotLocation::new(spot_id, "99 Elm St".into(), other))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ForbiddenOperation));

        let err = repo
            .delete(DeleteSpot::new(spot_id, other))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ForbiddenOperation));

        repo.update_location(UpdateSpotLocation::new(spot_id, "99 Elm St".into(), owner))
            .await
            .unwrap();
        let spot = repo.find_by_id(spot_id).await.unwrap().unwrap();
        assert_eq!(spot.location, "99 Elm St");

        repo.delete(DeleteSpot::new(spot_id, owner)).await.unwrap();
        assert!(repo.find_by_id(spot_id).await.unwrap().is_none());
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn editing_a_missing_spot_is_not_found(pool: PgPool) {
        let user = create_user(&pool, "Kate Keen", "kate@example.com").await;
        let repo = SpotRepositoryImpl::new(ConnectionPool::new(pool));

        let err = repo
            .update_location(UpdateSpotLocation::new(
                SpotId::new(),
                "99 Elm St".into(),
                user,
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EntityNotFound(_)));
    }
}
