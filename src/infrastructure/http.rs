pub mod orders_rest_client;

pub use orders_rest_client::OrdersRestClient;
