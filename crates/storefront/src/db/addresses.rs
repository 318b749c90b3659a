//! Address repository.
//!
//! The default-address invariant (at most one per user) is enforced here:
//! any write that marks an address default first unsets the user's other
//! defaults, inside one transaction.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use printforge_core::{AddressId, UserId};

use super::RepositoryError;
use crate::models::{Address, NewAddress};

/// Database row for an address.
#[derive(Debug, sqlx::FromRow)]
struct AddressRow {
    id: AddressId,
    user_id: UserId,
    full_name: String,
    address_line1: String,
    address_line2: Option<String>,
    city: String,
    state: String,
    postal_code: String,
    country: String,
    phone: String,
    is_default: bool,
    created_at: DateTime<Utc>,
}

impl From<AddressRow> for Address {
    fn from(row: AddressRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            full_name: row.full_name,
            address_line1: row.address_line1,
            address_line2: row.address_line2,
            city: row.city,
            state: row.state,
            postal_code: row.postal_code,
            country: row.country,
            phone: row.phone,
            is_default: row.is_default,
            created_at: row.created_at,
        }
    }
}

const SELECT_COLUMNS: &str = "id, user_id, full_name, address_line1, address_line2, city, state, \
     postal_code, country, phone, is_default, created_at";

/// Repository for address database operations.
pub struct AddressRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AddressRepository<'a> {
    /// Create a new address repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a user's addresses, default first, then newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, user_id: UserId) -> Result<Vec<Address>, RepositoryError> {
        let rows: Vec<AddressRow> = sqlx::query_as(&format!(
            "SELECT {SELECT_COLUMNS} FROM addresses \
             WHERE user_id = $1 \
             ORDER BY is_default DESC, created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Address::from).collect())
    }

    /// Get one of the user's addresses by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(
        &self,
        user_id: UserId,
        address_id: AddressId,
    ) -> Result<Option<Address>, RepositoryError> {
        let row: Option<AddressRow> = sqlx::query_as(&format!(
            "SELECT {SELECT_COLUMNS} FROM addresses WHERE id = $1 AND user_id = $2"
        ))
        .bind(address_id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Address::from))
    }

    /// Create an address.
    ///
    /// When `is_default` is set, the user's previous defaults are unset in
    /// the same transaction, so the single-default invariant holds at every
    /// commit point.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any statement fails.
    pub async fn create(
        &self,
        user_id: UserId,
        address: &NewAddress,
    ) -> Result<Address, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        if address.is_default {
            sqlx::query("UPDATE addresses SET is_default = FALSE WHERE user_id = $1")
                .bind(user_id)
                .execute(&mut *tx)
                .await?;
        }

        let row: AddressRow = sqlx::query_as(&format!(
            "INSERT INTO addresses \
                 (user_id, full_name, address_line1, address_line2, city, state, \
                  postal_code, country, phone, is_default) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {SELECT_COLUMNS}"
        ))
        .bind(user_id)
        .bind(&address.full_name)
        .bind(&address.address_line1)
        .bind(&address.address_line2)
        .bind(&address.city)
        .bind(&address.state)
        .bind(&address.postal_code)
        .bind(address.country_or_default())
        .bind(&address.phone)
        .bind(address.is_default)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row.into())
    }

    /// Update one of the user's addresses in place.
    ///
    /// Marking the address default unsets the user's other defaults in the
    /// same transaction.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the address does not exist or
    /// belongs to another user.
    pub async fn update(
        &self,
        user_id: UserId,
        address_id: AddressId,
        address: &NewAddress,
    ) -> Result<Address, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        if address.is_default {
            sqlx::query(
                "UPDATE addresses SET is_default = FALSE WHERE user_id = $1 AND id <> $2",
            )
            .bind(user_id)
            .bind(address_id)
            .execute(&mut *tx)
            .await?;
        }

        let row: Option<AddressRow> = sqlx::query_as(&format!(
            "UPDATE addresses SET \
                 full_name = $1, address_line1 = $2, address_line2 = $3, city = $4, \
                 state = $5, postal_code = $6, country = $7, phone = $8, is_default = $9 \
             WHERE id = $10 AND user_id = $11 \
             RETURNING {SELECT_COLUMNS}"
        ))
        .bind(&address.full_name)
        .bind(&address.address_line1)
        .bind(&address.address_line2)
        .bind(&address.city)
        .bind(&address.state)
        .bind(&address.postal_code)
        .bind(address.country_or_default())
        .bind(&address.phone)
        .bind(address.is_default)
        .bind(address_id)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            tx.rollback().await?;
            return Err(RepositoryError::NotFound);
        };

        tx.commit().await?;

        Ok(row.into())
    }

    /// Make an address the user's default, atomically unsetting the rest.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the address does not exist or
    /// belongs to another user.
    pub async fn set_default(
        &self,
        user_id: UserId,
        address_id: AddressId,
    ) -> Result<Address, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE addresses SET is_default = FALSE WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        let row: Option<AddressRow> = sqlx::query_as(&format!(
            "UPDATE addresses SET is_default = TRUE \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {SELECT_COLUMNS}"
        ))
        .bind(address_id)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            tx.rollback().await?;
            return Err(RepositoryError::NotFound);
        };

        tx.commit().await?;

        Ok(row.into())
    }

    /// Delete one of the user's addresses.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the address does not exist or
    /// belongs to another user.
    pub async fn delete(
        &self,
        user_id: UserId,
        address_id: AddressId,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM addresses WHERE id = $1 AND user_id = $2")
            .bind(address_id)
            .bind(user_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
