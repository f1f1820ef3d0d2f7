pub mod catalog;
pub mod machine_health;
