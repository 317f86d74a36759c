pub mod wrapped_client;
