/// Service layer: business logic independent of the Discord surface
pub mod history_service;
