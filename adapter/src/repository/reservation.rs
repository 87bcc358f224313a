use crate::database::{
    model::reservation::ReservationRow, ConnectionPool, PG_DEADLOCK_DETECTED,
    PG_LOCK_NOT_AVAILABLE, PG_SERIALIZATION_FAILURE, PG_UNIQUE_VIOLATION,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{ReservationId, SpotId, UserId},
    reservation::{
        event::{CancelReservation, ReserveSpot},
        Reservation,
    },
};
use kernel::repository::reservation::ReservationRepository;
use shared::error::{AppError, AppResult};
use sqlx::{Postgres, Transaction};

/// Bound on how long a transaction waits for the spot row lock before the
/// attempt is surfaced as retryable.
const SET_LOCK_TIMEOUT_SQL: &str = "SET LOCAL lock_timeout = '5s'";

const RESERVATION_COLUMNS: &str =
    "reservation_id, parking_spot_id, user_id, status, created_at, cancelled_at";

#[derive(new)]
pub struct ReservationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    async fn reserve(&self, event: ReserveSpot) -> AppResult<Reservation> {
        let mut tx = self.db.begin().await?;
        self.set_lock_timeout(&mut tx).await?;

        // Lock the spot row. All reserve/cancel attempts for one spot
        // serialize here, so the reads below stay stable until commit.
        let spot: Option<(bool,)> =
            sqlx::query_as("SELECT is_available FROM parking_spots WHERE spot_id = $1 FOR UPDATE")
                .bind(event.spot_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(map_reservation_error)?;

        let Some((is_available,)) = spot else {
            return Err(AppError::EntityNotFound(format!(
                "parking spot {} not found",
                event.spot_id
            )));
        };
        if !is_available {
            return Err(AppError::ReservationConflict(
                "parking spot is not available".into(),
            ));
        }

        // The flag is a cached projection and may be stale; the active row
        // is the authoritative check.
        let active: Option<(ReservationId,)> = sqlx::query_as(
            "SELECT reservation_id FROM reservations WHERE parking_spot_id = $1 AND status = 'active'",
        )
        .bind(event.spot_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_reservation_error)?;
        if active.is_some() {
            return Err(AppError::ReservationConflict(
                "parking spot is already reserved".into(),
            ));
        }

        let row: ReservationRow = sqlx::query_as(&format!(
            r#"
                INSERT INTO reservations (parking_spot_id, user_id, status)
                VALUES ($1, $2, 'active')
                RETURNING {RESERVATION_COLUMNS}
            "#
        ))
        .bind(event.spot_id)
        .bind(event.requested_user)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_reservation_error)?;

        let res = sqlx::query(
            r#"
                UPDATE parking_spots
                SET is_available = FALSE, updated_at = CURRENT_TIMESTAMP
                WHERE spot_id = $1
            "#,
        )
        .bind(event.spot_id)
        .execute(&mut *tx)
        .await
        .map_err(map_reservation_error)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "availability flag has not been updated".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        row.try_into()
    }

    async fn cancel(&self, event: CancelReservation) -> AppResult<ReservationId> {
        let mut tx = self.db.begin().await?;
        self.set_lock_timeout(&mut tx).await?;

        // Same lock scope as reserve, so a cancel never interleaves with a
        // reserve on the same spot.
        let spot: Option<(SpotId,)> =
            sqlx::query_as("SELECT spot_id FROM parking_spots WHERE spot_id = $1 FOR UPDATE")
                .bind(event.spot_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(map_reservation_error)?;
        if spot.is_none() {
            return Err(AppError::EntityNotFound(format!(
                "parking spot {} not found",
                event.spot_id
            )));
        }

        let active: Option<(ReservationId, UserId)> = sqlx::query_as(
            "SELECT reservation_id, user_id FROM reservations WHERE parking_spot_id = $1 AND status = 'active'",
        )
        .bind(event.spot_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_reservation_error)?;
        let Some((reservation_id, reserved_by)) = active else {
            return Err(AppError::EntityNotFound(
                "no active reservation found for this parking spot".into(),
            ));
        };
        // Ownership check happens before any mutation; a foreign caller
        // leaves the state untouched.
        if reserved_by != event.requested_user {
            return Err(AppError::ForbiddenOperation);
        }

        let res = sqlx::query(
            r#"
                UPDATE reservations
                SET status = 'cancelled', cancelled_at = CURRENT_TIMESTAMP
                WHERE reservation_id = $1
            "#,
        )
        .bind(reservation_id)
        .execute(&mut *tx)
        .await
        .map_err(map_reservation_error)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no reservation has been cancelled".into(),
            ));
        }

        let res = sqlx::query(
            r#"
                UPDATE parking_spots
                SET is_available = TRUE, updated_at = CURRENT_TIMESTAMP
                WHERE spot_id = $1
            "#,
        )
        .bind(event.spot_id)
        .execute(&mut *tx)
        .await
        .map_err(map_reservation_error)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "availability flag has not been restored".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(reservation_id)
    }

    async fn find_active_by_spot_id(&self, spot_id: SpotId) -> AppResult<Option<Reservation>> {
        let row: Option<ReservationRow> = sqlx::query_as(&format!(
            r#"
                SELECT {RESERVATION_COLUMNS}
                FROM reservations
                WHERE parking_spot_id = $1 AND status = 'active'
            "#
        ))
        .bind(spot_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Reservation::try_from).transpose()
    }

    async fn find_history_by_spot_id(&self, spot_id: SpotId) -> AppResult<Vec<Reservation>> {
        let rows: Vec<ReservationRow> = sqlx::query_as(&format!(
            r#"
                SELECT {RESERVATION_COLUMNS}
                FROM reservations
                WHERE parking_spot_id = $1
                ORDER BY CASE WHEN status = 'active' THEN 0 ELSE 1 END, created_at DESC
            "#
        ))
        .bind(spot_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Reservation::try_from).collect()
    }

    async fn find_all_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Reservation>> {
        let rows: Vec<ReservationRow> = sqlx::query_as(&format!(
            r#"
                SELECT {RESERVATION_COLUMNS}
                FROM reservations
                WHERE user_id = $1
                ORDER BY created_at DESC
            "#
        ))
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Reservation::try_from).collect()
    }
}

impl ReservationRepositoryImpl {
    // Bounds lock waits within the current transaction only.
    async fn set_lock_timeout(&self, tx: &mut Transaction<'_, Postgres>) -> AppResult<()> {
        sqlx::query(SET_LOCK_TIMEOUT_SQL)
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }
}

fn map_reservation_error(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db_err) = err {
        match db_err.code().as_deref() {
            Some(PG_LOCK_NOT_AVAILABLE) | Some(PG_SERIALIZATION_FAILURE)
            | Some(PG_DEADLOCK_DETECTED) => return AppError::LockTimeout,
            // Backstop: the partial unique index on active reservations
            // caught a double booking the re-check did not see.
            Some(PG_UNIQUE_VIOLATION) => {
                return AppError::ReservationConflict("parking spot is already reserved".into())
            }
            _ => {}
        }
    }
    AppError::SpecificOperationError(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::user::UserRepositoryImpl;
    use kernel::model::reservation::ReservationStatus;
    use kernel::model::user::event::CreateUser;
    use kernel::repository::user::UserRepository;
    use sqlx::PgPool;
    use std::sync::Arc;

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

    async fn create_spot(pool: &PgPool, owner: UserId) -> SpotId {
        let row: (SpotId,) = sqlx::query_as(
            "INSERT INTO parking_spots (location, owned_by) VALUES ('123 Main St', $1) RETURNING spot_id",
        )
        .bind(owner)
        .fetch_one(pool)
        .await
        .unwrap();
        row.0
    }

    async fn spot_is_available(pool: &PgPool, spot_id: SpotId) -> bool {
        let row: (bool,) =
            sqlx::query_as("SELECT is_available FROM parking_spots WHERE spot_id = $1")
                .bind(spot_id)
                .fetch_one(pool)
                .await
                .unwrap();
        row.0
    }

    async fn active_reservation_count(pool: &PgPool, spot_id: SpotId) -> i64 {
        let row: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM reservations WHERE parking_spot_id = $1 AND status = 'active'",
        )
        .bind(spot_id)
        .fetch_one(pool)
        .await
        .unwrap();
        row.0
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn reserve_books_an_available_spot(pool: PgPool) {
        let owner = create_user(&pool, "Olivia Owner", "olivia@example.com").await;
        let guest = create_user(&pool, "Gary Guest", "gary@example.com").await;
        let spot_id = create_spot(&pool, owner).await;
        let repo = ReservationRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        let reservation = repo
            .reserve(ReserveSpot::new(spot_id, guest))
            .await
            .unwrap();
        assert_eq!(reservation.spot_id, spot_id);
        assert_eq!(reservation.reserved_by, guest);
        assert_eq!(reservation.status, ReservationStatus::Active);
        assert!(reservation.cancelled_at.is_none());

        assert!(!spot_is_available(&pool, spot_id).await);
        assert_eq!(active_reservation_count(&pool, spot_id).await, 1);

        let active = repo
            .find_active_by_spot_id(spot_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(active.reservation_id, reservation.reservation_id);
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn reserving_a_missing_spot_is_not_found(pool: PgPool) {
        let guest = create_user(&pool, "Gary Guest", "gary@example.com").await;
        let repo = ReservationRepositoryImpl::new(ConnectionPool::new(pool));

        let err = repo
            .reserve(ReserveSpot::new(SpotId::new(), guest))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EntityNotFound(_)));
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn repeated_reserve_attempts_conflict_without_mutating_state(pool: PgPool) {
        let owner = create_user(&pool, "Olivia Owner", "olivia@example.com").await;
        let guest = create_user(&pool, "Gary Guest", "gary@example.com").await;
        let other = create_user(&pool, "Kate Keen", "kate@example.com").await;
        let spot_id = create_spot(&pool, owner).await;
        let repo = ReservationRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        repo.reserve(ReserveSpot::new(spot_id, guest))
            .await
            .unwrap();

        for _ in 0..2 {
            let err = repo
                .reserve(ReserveSpot::new(spot_id, other))
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::ReservationConflict(_)));
        }

        assert_eq!(active_reservation_count(&pool, spot_id).await, 1);
        assert!(!spot_is_available(&pool, spot_id).await);
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn cancel_is_restricted_to_the_reservation_holder(pool: PgPool) {
        let owner = create_user(&pool, "Olivia Owner", "olivia@example.com").await;
        let guest = create_user(&pool, "Gary Guest", "gary@example.com").await;
        let other = create_user(&pool, "Kate Keen", "kate@example.com").await;
        let spot_id = create_spot(&pool, owner).await;
        let repo = ReservationRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        repo.reserve(ReserveSpot::new(spot_id, guest))
            .await
            .unwrap();

        let err = repo
            .cancel(CancelReservation::new(spot_id, other))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ForbiddenOperation));

        // the failed attempt must not have touched anything
        assert!(!spot_is_available(&pool, spot_id).await);
        assert_eq!(active_reservation_count(&pool, spot_id).await, 1);
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn cancel_without_an_active_reservation_is_not_found(pool: PgPool) {
        let owner = create_user(&pool, "Olivia Owner", "olivia@example.com").await;
        let guest = create_user(&pool, "Gary Guest", "gary@example.com").await;
        let spot_id = create_spot(&pool, owner).await;
        let repo = ReservationRepositoryImpl::new(ConnectionPool::new(pool));

        let err = repo
            .cancel(CancelReservation::new(spot_id, guest))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EntityNotFound(_)));

        let err = repo
            .cancel(CancelReservation::new(SpotId::new(), guest))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EntityNotFound(_)));
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn reserve_then_cancel_round_trips_and_keeps_history(pool: PgPool) {
        let owner = create_user(&pool, "Olivia Owner", "olivia@example.com").await;
        let guest = create_user(&pool, "Gary Guest", "gary@example.com").await;
        let other = create_user(&pool, "Kate Keen", "kate@example.com").await;
        let spot_id = create_spot(&pool, owner).await;
        let repo = ReservationRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        let reservation = repo
            .reserve(ReserveSpot::new(spot_id, guest))
            .await
            .unwrap();
        let cancelled_id = repo
            .cancel(CancelReservation::new(spot_id, guest))
            .await
            .unwrap();
        assert_eq!(cancelled_id, reservation.reservation_id);

        assert!(spot_is_available(&pool, spot_id).await);
        assert!(repo.find_active_by_spot_id(spot_id).await.unwrap().is_none());

        let history = repo.find_history_by_spot_id(spot_id).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].status, ReservationStatus::Cancelled);
        assert!(history[0].cancelled_at.is_some());

        // the spot is bookable again, and the old row survives
        repo.reserve(ReserveSpot::new(spot_id, other))
            .await
            .unwrap();
        let history = repo.find_history_by_spot_id(spot_id).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].status, ReservationStatus::Active);

        let mine = repo.find_all_by_user_id(guest).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].status, ReservationStatus::Cancelled);
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn concurrent_reserves_admit_exactly_one_winner(pool: PgPool) {
        let owner = create_user(&pool, "Olivia Owner", "olivia@example.com").await;
        let guest = create_user(&pool, "Gary Guest", "gary@example.com").await;
        let other = create_user(&pool, "Kate Keen", "kate@example.com").await;
        let spot_id = create_spot(&pool, owner).await;
        let repo = Arc::new(ReservationRepositoryImpl::new(ConnectionPool::new(
            pool.clone(),
        )));

        let (a, b) = tokio::join!(
            repo.reserve(ReserveSpot::new(spot_id, guest)),
            repo.reserve(ReserveSpot::new(spot_id, other)),
        );

        assert!(a.is_ok() != b.is_ok(), "exactly one attempt must win");
        let loser = if a.is_ok() { b } else { a };
        assert!(matches!(
            loser.unwrap_err(),
            AppError::ReservationConflict(_)
        ));

        assert_eq!(active_reservation_count(&pool, spot_id).await, 1);
        assert!(!spot_is_available(&pool, spot_id).await);
    }
}
