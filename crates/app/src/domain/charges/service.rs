//! Charges service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::charges::{
        errors::ChargesServiceError,
        models::{Charge, ChargeData, ChargeSearchCondition, UNSAVED_CHARGE_ID, name_like_pattern},
        repository::PgChargesRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgChargesService {
    db: Db,
    repository: PgChargesRepository,
}

impl PgChargesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgChargesRepository::new(),
        }
    }
}

#[async_trait]
impl ChargesService for PgChargesService {
    async fn find_all(&self) -> Result<Vec<Charge>, ChargesServiceError> {
        let mut tx = self.db.begin().await?;

        let charges = self.repository.find_all(&mut tx).await?;

        tx.commit().await?;

        Ok(charges)
    }

    async fn find_by_id(&self, charge_id: i32) -> Result<Option<Charge>, ChargesServiceError> {
        let mut tx = self.db.begin().await?;

        let charge = self.repository.find_by_id(&mut tx, charge_id).await?;

        tx.commit().await?;

        Ok(charge)
    }

    async fn find_by_conditions(
        &self,
        condition: ChargeSearchCondition,
    ) -> Result<Vec<Charge>, ChargesServiceError> {
        let mut tx = self.db.begin().await?;

        let charges = self
            .repository
            .find_by_name_like(&mut tx, &name_like_pattern(&condition))
            .await?;

        tx.commit().await?;

        Ok(charges)
    }

    async fn save(&self, data: ChargeData) -> Result<Charge, ChargesServiceError> {
        let mut tx = self.db.begin().await?;

        let charge = if data.charge_id == UNSAVED_CHARGE_ID {
            self.repository.insert(&mut tx, &data).await?
        } else {
            self.repository.update(&mut tx, &data).await?
        };

        tx.commit().await?;

        Ok(charge)
    }

    async fn delete_by_id(&self, charge_id: i32) -> Result<(), ChargesServiceError> {
        let mut tx = self.db.begin().await?;

        // Deleting an absent id is a silent no-op, matching the store's
        // DELETE semantics.
        let rows_affected = self.repository.delete_by_id(&mut tx, charge_id).await?;

        if rows_affected == 0 {
            tracing::debug!(charge_id, "delete of absent charge id ignored");
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ChargesService: Send + Sync {
    /// Retrieves all charges. Order is unspecified.
    async fn find_all(&self) -> Result<Vec<Charge>, ChargesServiceError>;

    /// Retrieve a single charge, or `None` when no row bears that id.
    async fn find_by_id(&self, charge_id: i32) -> Result<Option<Charge>, ChargesServiceError>;

    /// Retrieve every charge whose name contains the condition's name as a
    /// substring. A blank condition matches all rows.
    async fn find_by_conditions(
        &self,
        condition: ChargeSearchCondition,
    ) -> Result<Vec<Charge>, ChargesServiceError>;

    /// Insert (unset id) or update (assigned id) a charge. The caller has
    /// already run field-level validation; this does not re-validate.
    async fn save(&self, data: ChargeData) -> Result<Charge, ChargesServiceError>;

    /// Delete a charge. Succeeds even when the id is absent.
    async fn delete_by_id(&self, charge_id: i32) -> Result<(), ChargesServiceError>;
}
