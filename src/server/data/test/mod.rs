mod employee;
mod vehicle;
mod yard;
mod yard_vehicle;
