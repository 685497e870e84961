pub mod action;
pub mod agent;
pub mod policy;
pub mod reactor;
pub mod scheduler;
pub mod telemetry;
pub mod time;
