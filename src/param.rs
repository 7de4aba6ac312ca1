//! Request scoped metadata.
//!
//! Parameters are set by whoever drives the request, typically a server that
//! knows things not present on the wire, such as the remote address. The parser
//! never reads or writes them.

use std::collections::HashMap;

pub const SERVER_SOFTWARE: &str = "Server-Software";
pub const SERVER_ADDRESS: &str = "Server-Address";
pub const SERVER_PORT: &str = "Server-Port";
pub const REMOTE_ADDRESS: &str = "Remote-Address";
pub const PROTOCOL: &str = "Protocol";
pub const APP_PATH: &str = "App-Path";
pub const MOUNT_PATH: &str = "Mount-Path";

/// Opaque string key/value store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    map: HashMap<String, String>,
}

impl Params {
    pub fn new() -> Self {
        Params::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(|v| v.as_str())
    }

    /// Set `key`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.map.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.map.remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
