// AWS CLI Gateway - Library Root
//
// All modules exported here for use by the binary and tests.

pub mod config;
pub mod dispatch;
pub mod exec;
pub mod mcp;
pub mod policy;
pub mod request;
