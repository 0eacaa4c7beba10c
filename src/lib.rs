//! Shopping cart for the travel booking pages: line items persisted as one
//! JSON blob in key-value storage, rendered into a badge and a panel, with
//! a simulated checkout.

pub mod coerce;
pub mod config;
pub mod dialog;
pub mod dto;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod views;
pub mod widget;
