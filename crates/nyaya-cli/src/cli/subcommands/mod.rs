mod ipc;

pub use ipc::IpcCommands;
