pub mod chat;
pub mod consult;
pub mod crime;
pub mod dispatch;
pub mod health;
pub mod ipc;
pub mod search;
pub mod shared;
pub mod women;
