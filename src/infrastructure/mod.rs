pub mod browser;
pub mod http_gateway;
pub mod verifier;
