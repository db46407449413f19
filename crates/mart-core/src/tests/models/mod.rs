mod auth;
mod cart;
mod mutation;
mod order;
mod remote_account;
mod role;
mod session;
mod session_properties;
