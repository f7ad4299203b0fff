pub mod controller;
pub mod routes;
