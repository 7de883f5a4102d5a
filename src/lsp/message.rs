//! JSON-RPC 2.0 message types
//!
//! Inbound bodies are classified by the fields they carry:
//! - `id` + `method` → [`Request`]
//! - `method` only → [`Notification`]
//! - `id` + `result`/`error` → [`Response`]
//!
//! The `jsonrpc` version tag is not stored; the codec injects it on write.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::lsp::error::CodecError;

/// Protocol version tag carried by every outbound message
pub const JSONRPC_VERSION: &str = "2.0";

/// Error code sent for any message received before `initialize`
pub const SERVER_NOT_INITIALIZED: i64 = -32002;

/// Error code sent for any message received between `shutdown` and `exit`
pub const SHUTTING_DOWN: i64 = -32700;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    Number(i64),
    String(String),
}

impl From<i64> for RequestId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// `None` for a request sent with `"id": null`; echoed back as `null`
    pub id: Option<RequestId>,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl Notification {
    /// Creates a notification, serializing `params` into its JSON form
    pub fn new(method: impl Into<String>, params: impl Serialize) -> Result<Self, CodecError> {
        Ok(Self {
            method: method.into(),
            params: Some(serde_json::to_value(params).map_err(CodecError::MalformedBody)?),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseError {
    pub code: i64,
    pub message: String,
}

impl ResponseError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Exactly one of a result or an error
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Result(Value),
    Error(ResponseError),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    /// `None` serializes as `null`, used when answering a message without an id
    pub id: Option<RequestId>,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl Response {
    pub fn ok(id: Option<RequestId>, result: Value) -> Self {
        Self {
            id,
            outcome: Outcome::Result(result),
        }
    }

    pub fn error(id: Option<RequestId>, error: ResponseError) -> Self {
        Self {
            id,
            outcome: Outcome::Error(error),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Message {
    Request(Request),
    Notification(Notification),
    Response(Response),
}

impl Message {
    /// The method name, for requests and notifications
    pub fn method(&self) -> Option<&str> {
        match self {
            Message::Request(request) => Some(&request.method),
            Message::Notification(notification) => Some(&notification.method),
            Message::Response(_) => None,
        }
    }

    /// The id, for requests and responses
    pub fn id(&self) -> Option<&RequestId> {
        match self {
            Message::Request(request) => request.id.as_ref(),
            Message::Notification(_) => None,
            Message::Response(response) => response.id.as_ref(),
        }
    }

    pub fn params(&self) -> Option<&Value> {
        match self {
            Message::Request(request) => request.params.as_ref(),
            Message::Notification(notification) => notification.params.as_ref(),
            Message::Response(_) => None,
        }
    }

    /// Serializes the message as a JSON object carrying the version tag
    pub fn to_value(&self) -> Result<Value, CodecError> {
        let mut value = serde_json::to_value(self).map_err(CodecError::MalformedBody)?;
        if let Value::Object(object) = &mut value {
            object.insert(
                "jsonrpc".to_string(),
                Value::String(JSONRPC_VERSION.to_string()),
            );
        }
        Ok(value)
    }

    /// Classifies a decoded JSON body into one of the three message shapes
    pub fn from_value(value: Value) -> Result<Self, CodecError> {
        let Value::Object(mut object) = value else {
            return Err(CodecError::InvalidMessage(
                "message body is not a JSON object".to_string(),
            ));
        };
        object.remove("jsonrpc");

        let has_id = object.contains_key("id");
        let has_method = object.contains_key("method");

        match (has_id, has_method) {
            (true, true) => from_object(object).map(Message::Request),
            (false, true) => from_object(object).map(Message::Notification),
            (true, false) => response_from_object(object).map(Message::Response),
            (false, false) => Err(CodecError::InvalidMessage(
                "message has neither an id nor a method".to_string(),
            )),
        }
    }
}

impl From<Request> for Message {
    fn from(request: Request) -> Self {
        Self::Request(request)
    }
}

impl From<Notification> for Message {
    fn from(notification: Notification) -> Self {
        Self::Notification(notification)
    }
}

impl From<Response> for Message {
    fn from(response: Response) -> Self {
        Self::Response(response)
    }
}

fn from_object<T: DeserializeOwned>(object: Map<String, Value>) -> Result<T, CodecError> {
    serde_json::from_value(Value::Object(object)).map_err(CodecError::MalformedBody)
}

fn response_from_object(mut object: Map<String, Value>) -> Result<Response, CodecError> {
    let id = match object.remove("id") {
        Some(id) => serde_json::from_value(id).map_err(CodecError::MalformedBody)?,
        None => None,
    };

    let outcome = match (object.remove("result"), object.remove("error")) {
        (Some(result), None) => Outcome::Result(result),
        (None, Some(error)) => {
            Outcome::Error(serde_json::from_value(error).map_err(CodecError::MalformedBody)?)
        }
        _ => {
            return Err(CodecError::InvalidMessage(
                "response must carry exactly one of result or error".to_string(),
            ));
        }
    };

    Ok(Response { id, outcome })
}
