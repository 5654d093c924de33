//! Supabase adapter
//!
//! Implementation of the recipe store over the Supabase REST API.

pub mod client;

pub use client::SupabaseClient;
