//! Charges Repository

use jiff_sqlx::{Date as SqlxDate, Timestamp as SqlxTimestamp};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::charges::models::{Charge, ChargeData};

const FIND_ALL_SQL: &str = include_str!("sql/find_all.sql");
const FIND_BY_ID_SQL: &str = include_str!("sql/find_by_id.sql");
const FIND_BY_NAME_LIKE_SQL: &str = include_str!("sql/find_by_name_like.sql");
const INSERT_CHARGE_SQL: &str = include_str!("sql/insert_charge.sql");
const UPDATE_CHARGE_SQL: &str = include_str!("sql/update_charge.sql");
const DELETE_CHARGE_SQL: &str = include_str!("sql/delete_charge.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgChargesRepository;

impl PgChargesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_all(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Charge>, sqlx::Error> {
        query_as::<Postgres, Charge>(FIND_ALL_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_by_id(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        charge_id: i32,
    ) -> Result<Option<Charge>, sqlx::Error> {
        query_as::<Postgres, Charge>(FIND_BY_ID_SQL)
            .bind(charge_id)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn find_by_name_like(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        pattern: &str,
    ) -> Result<Vec<Charge>, sqlx::Error> {
        query_as::<Postgres, Charge>(FIND_BY_NAME_LIKE_SQL)
            .bind(pattern)
            .fetch_all(&mut **tx)
            .await
    }

    /// Insert a new row. The database assigns the id and sets both audit
    /// columns to the same instant.
    pub(crate) async fn insert(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        data: &ChargeData,
    ) -> Result<Charge, sqlx::Error> {
        query_as::<Postgres, Charge>(INSERT_CHARGE_SQL)
            .bind(&data.name)
            .bind(data.amount)
            .bind(SqlxDate::from(data.start_date))
            .bind(data.end_date.map(SqlxDate::from))
            .fetch_one(&mut **tx)
            .await
    }

    /// Update the row with `data.charge_id`, preserving `created_date` and
    /// refreshing `updated_date`. `RowNotFound` when no such row exists.
    pub(crate) async fn update(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        data: &ChargeData,
    ) -> Result<Charge, sqlx::Error> {
        query_as::<Postgres, Charge>(UPDATE_CHARGE_SQL)
            .bind(data.charge_id)
            .bind(&data.name)
            .bind(data.amount)
            .bind(SqlxDate::from(data.start_date))
            .bind(data.end_date.map(SqlxDate::from))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_by_id(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        charge_id: i32,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CHARGE_SQL)
            .bind(charge_id)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for Charge {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            charge_id: row.try_get("charge_id")?,
            name: row.try_get("name")?,
            amount: row.try_get("amount")?,
            start_date: row.try_get::<SqlxDate, _>("start_date")?.to_jiff(),
            end_date: row
                .try_get::<Option<SqlxDate>, _>("end_date")?
                .map(SqlxDate::to_jiff),
            created_date: row.try_get::<SqlxTimestamp, _>("created_date")?.to_jiff(),
            updated_date: row.try_get::<SqlxTimestamp, _>("updated_date")?.to_jiff(),
        })
    }
}
