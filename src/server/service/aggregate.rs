//! Transactional creation of multi-entity aggregates.
//!
//! Every creation runs in two phases. Resolution looks up each referenced entity by id
//! (failing with `NotFound` before anything is written) or stages the inline
//! definition for insertion. Persistence then opens one transaction and inserts the
//! staged rows in dependency order, each insert using the id generated by the one
//! before it. The transaction is committed only when every insert succeeded; any error
//! rolls it back in full, and dropping the future mid-way rolls it back as well.

use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

use crate::server::{
    data::{
        vehicle::VehicleRepository,
        vehicle_model::VehicleModelRepository,
        yard::YardRepository,
        yard_vehicle::{NewYardVehicle, YardVehicleRepository},
    },
    error::AppError,
    model::{
        reference::Reference,
        vehicle::{CreateVehicleModelParams, CreateVehicleParams, Vehicle},
        yard::{CreateYardParams, Yard},
        yard_vehicle::{CreateYardVehicleParams, YardVehicle},
    },
};

/// Outcome of resolving a reference: an entity that already exists, or a validated
/// definition waiting to be inserted.
enum Staged<E, S> {
    Resolved(E),
    Pending(S),
}

type StagedModel = Staged<entity::vehicle_model::Model, CreateVehicleModelParams>;

/// A vehicle that will be inserted once its model is available.
struct PendingVehicle {
    plate: String,
    user_id: String,
    model: StagedModel,
}

type StagedVehicle = Staged<Vehicle, PendingVehicle>;

/// Creates aggregates atomically.
///
/// Lookups run on the connection itself; every insert runs on the transaction opened
/// for the request.
pub struct AggregateCreationCoordinator<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AggregateCreationCoordinator<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a yard and its address in one transaction.
    ///
    /// # Arguments
    /// - `params` - Validated yard and inline address
    ///
    /// # Returns
    /// - `Ok(Yard)` - Committed yard with its generated address
    /// - `Err(AppError::DbErr)` - An insert failed; nothing was persisted
    pub async fn create_yard(&self, params: CreateYardParams) -> Result<Yard, AppError> {
        let txn = self.db.begin().await?;

        match Self::persist_yard(&txn, params).await {
            Ok(yard) => {
                txn.commit().await?;
                tracing::info!(yard_id = %yard.id, address_id = %yard.address.id, "Created yard");
                Ok(yard)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Rolling back yard creation");
                txn.rollback().await?;
                Err(err.into())
            }
        }
    }

    /// Creates a vehicle linked to an existing model or to a new model created alongside it.
    ///
    /// # Arguments
    /// - `params` - Validated vehicle with its model reference
    ///
    /// # Returns
    /// - `Ok(Vehicle)` - Committed vehicle with its model
    /// - `Err(AppError::NotFound)` - Referenced model does not exist; no transaction opened
    /// - `Err(AppError::DbErr)` - An insert failed; nothing was persisted
    pub async fn create_vehicle(&self, params: CreateVehicleParams) -> Result<Vehicle, AppError> {
        let model = self.resolve_model(params.model).await?;
        let pending = PendingVehicle {
            plate: params.plate,
            user_id: params.user_id,
            model,
        };

        let txn = self.db.begin().await?;

        match Self::persist_vehicle(&txn, pending).await {
            Ok(vehicle) => {
                txn.commit().await?;
                tracing::info!(vehicle_id = %vehicle.id, model_id = %vehicle.model.id, "Created vehicle");
                Ok(vehicle)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Rolling back vehicle creation");
                txn.rollback().await?;
                Err(err.into())
            }
        }
    }

    /// Records a vehicle in a yard, creating the vehicle and its model when given inline.
    ///
    /// # Arguments
    /// - `params` - Validated yard vehicle with its vehicle reference
    ///
    /// # Returns
    /// - `Ok(YardVehicle)` - Committed yard vehicle with its vehicle and model
    /// - `Err(AppError::NotFound)` - The yard, the referenced vehicle, or the referenced
    ///   model does not exist; no transaction opened
    /// - `Err(AppError::DbErr)` - An insert failed; nothing was persisted
    pub async fn create_yard_vehicle(
        &self,
        params: CreateYardVehicleParams,
    ) -> Result<YardVehicle, AppError> {
        if !YardRepository::new(self.db).exists(&params.yard_id).await? {
            return Err(AppError::NotFound("Yard not found".to_string()));
        }

        let vehicle = self.resolve_vehicle(params.vehicle).await?;
        let new = NewYardVehicle {
            yard_id: params.yard_id,
            status: params.status,
            entered_at: params.entered_at,
            left_at: params.left_at,
        };

        let txn = self.db.begin().await?;

        match Self::persist_yard_vehicle(&txn, new, vehicle).await {
            Ok(yard_vehicle) => {
                txn.commit().await?;
                tracing::info!(
                    yard_vehicle_id = %yard_vehicle.id,
                    vehicle_id = %yard_vehicle.vehicle.id,
                    "Created yard vehicle"
                );
                Ok(yard_vehicle)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Rolling back yard vehicle creation");
                txn.rollback().await?;
                Err(err.into())
            }
        }
    }

    async fn resolve_model(
        &self,
        reference: Reference<String, CreateVehicleModelParams>,
    ) -> Result<StagedModel, AppError> {
        match reference {
            Reference::Existing(id) => VehicleModelRepository::new(self.db)
                .get_by_id(&id)
                .await?
                .map(Staged::Resolved)
                .ok_or_else(|| AppError::NotFound(format!("Vehicle model {} not found", id))),
            Reference::New(spec) => Ok(Staged::Pending(spec)),
        }
    }

    async fn resolve_vehicle(
        &self,
        reference: Reference<String, CreateVehicleParams>,
    ) -> Result<StagedVehicle, AppError> {
        match reference {
            Reference::Existing(id) => VehicleRepository::new(self.db)
                .get_by_id(&id)
                .await?
                .map(Staged::Resolved)
                .ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", id))),
            Reference::New(spec) => {
                let model = self.resolve_model(spec.model).await?;
                Ok(Staged::Pending(PendingVehicle {
                    plate: spec.plate,
                    user_id: spec.user_id,
                    model,
                }))
            }
        }
    }

    async fn persist_yard(txn: &DatabaseTransaction, params: CreateYardParams) -> Result<Yard, DbErr> {
        let repo = YardRepository::new(txn);

        let address = repo.create_address(params.address).await?;
        repo.create(params.owner_id, address).await
    }

    async fn persist_vehicle(
        txn: &DatabaseTransaction,
        pending: PendingVehicle,
    ) -> Result<Vehicle, DbErr> {
        let model = match pending.model {
            Staged::Resolved(model) => model,
            Staged::Pending(spec) => VehicleModelRepository::new(txn).create(spec).await?,
        };

        VehicleRepository::new(txn)
            .create(pending.plate, pending.user_id, model)
            .await
    }

    async fn persist_yard_vehicle(
        txn: &DatabaseTransaction,
        new: NewYardVehicle,
        vehicle: StagedVehicle,
    ) -> Result<YardVehicle, DbErr> {
        let vehicle = match vehicle {
            Staged::Resolved(vehicle) => vehicle,
            Staged::Pending(pending) => Self::persist_vehicle(txn, pending).await?,
        };

        YardVehicleRepository::new(txn).create(new, vehicle).await
    }
}
