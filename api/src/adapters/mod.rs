//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod supabase;

pub use supabase::SupabaseClient;
