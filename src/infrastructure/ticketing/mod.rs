mod fittcore_gateway;
mod http_token_endpoint;

pub use fittcore_gateway::FittcoreGateway;
pub use http_token_endpoint::HttpTokenEndpoint;
