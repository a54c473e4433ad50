use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RequestWindowMode {
    #[default]
    PARAMS,
    AUTHORIZATION,
    HEADERS,
    BODY,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ResponseWindowMode {
    #[default]
    BODY,
    TREE,
    HEADERS,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    SUCCESS,
    ERROR,
}
