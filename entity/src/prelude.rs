pub use super::address::Entity as Address;
pub use super::qr_code::Entity as QrCode;
pub use super::vehicle::Entity as Vehicle;
pub use super::vehicle_model::Entity as VehicleModel;
pub use super::yard::Entity as Yard;
pub use super::yard_employee::Entity as YardEmployee;
pub use super::yard_vehicle::Entity as YardVehicle;
