//! HTTP API Client

pub mod client;

pub use client::{
    create_donation, create_rotarian, fetch_donations, fetch_rotarians, fetch_stats, API_BASE,
};
