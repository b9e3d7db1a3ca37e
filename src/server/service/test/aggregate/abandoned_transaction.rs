use super::*;
use crate::server::data::{vehicle::VehicleRepository, vehicle_model::VehicleModelRepository};
use sea_orm::TransactionTrait;

/// Tests that a transaction dropped before commit, as happens when the request future
/// is cancelled between inserts, leaves nothing behind.
///
/// Expected: no model or vehicle rows after the transaction goes out of scope
#[tokio::test]
async fn dropped_transaction_persists_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vehicle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    {
        let txn = db.begin().await?;

        let model = VehicleModelRepository::new(&txn).create(new_model()).await?;
        VehicleRepository::new(&txn)
            .create("ABC1D23".to_string(), "usr_1".to_string(), model)
            .await?;

        assert_eq!(Vehicle::find().count(&txn).await?, 1);
    }

    assert_eq!(VehicleModel::find().count(db).await?, 0);
    assert_eq!(Vehicle::find().count(db).await?, 0);

    Ok(())
}
