pub use sea_orm_migration::prelude::*;

mod m20250513_000001_create_address_table;
mod m20250513_000002_create_yard_table;
mod m20250513_000003_create_vehicle_model_table;
mod m20250513_000004_create_vehicle_table;
mod m20250513_000005_create_yard_vehicle_table;
mod m20250513_000006_create_yard_employee_table;
mod m20250522_000007_create_qr_code_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250513_000001_create_address_table::Migration),
            Box::new(m20250513_000002_create_yard_table::Migration),
            Box::new(m20250513_000003_create_vehicle_model_table::Migration),
            Box::new(m20250513_000004_create_vehicle_table::Migration),
            Box::new(m20250513_000005_create_yard_vehicle_table::Migration),
            Box::new(m20250513_000006_create_yard_employee_table::Migration),
            Box::new(m20250522_000007_create_qr_code_table::Migration),
        ]
    }
}
