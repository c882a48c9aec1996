pub mod aggregation;
pub mod attendance;
pub mod cli;
pub mod database;
pub mod database_factory;
pub mod date_provider;
pub mod error;
pub mod record_service;
pub mod report;
pub mod row_factories;
pub mod student;
pub mod web;
