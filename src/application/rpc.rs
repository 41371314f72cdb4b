// src/application/rpc.rs
//
// JSON-lines request dispatcher
//
// One request per line:
//   {"id": 1, "method": "getLivestockById", "params": {"id": "..."}}
// One reply per line:
//   {"id": 1, "success": true, "data": {...}}
//   {"id": 1, "success": false, "error_type": "not_found", "message": "...", "details": null}

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::commands::{self, CommandResult};
use crate::application::dto::{
    IdParams, LivestockPayloadDto, NameParams, SuccessResponse, UpdateParams,
};
use crate::application::error_handling::ErrorResponse;
use crate::application::state::AppState;
use crate::error::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct RpcRequest {
    /// Echoed back unchanged in the reply
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct RpcReply {
    pub id: Option<Value>,
    #[serde(flatten)]
    pub body: RpcBody,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RpcBody {
    Success(SuccessResponse<Value>),
    Failure(ErrorResponse),
}

impl RpcReply {
    pub fn is_success(&self) -> bool {
        matches!(self.body, RpcBody::Success(_))
    }
}

/// Parse and dispatch one request line. Never fails: malformed input
/// becomes an `invalid_request` reply.
pub fn handle_line(state: &AppState, line: &str) -> RpcReply {
    match serde_json::from_str::<RpcRequest>(line) {
        Ok(request) => dispatch(state, request),
        Err(e) => {
            log::warn!("Malformed request line: {}", e);
            RpcReply {
                id: None,
                body: RpcBody::Failure(ErrorResponse::invalid_request(format!(
                    "malformed request: {}",
                    e
                ))),
            }
        }
    }
}

pub fn dispatch(state: &AppState, request: RpcRequest) -> RpcReply {
    log::debug!("Dispatching {}", request.method);

    let body = match run(state, &request.method, request.params) {
        Ok(data) => RpcBody::Success(SuccessResponse::new(data)),
        Err(error) => RpcBody::Failure(error),
    };

    RpcReply {
        id: request.id,
        body,
    }
}

fn run(state: &AppState, method: &str, params: Value) -> CommandResult<Value> {
    match method {
        "createLivestock" | "CreateLivestock" => {
            let dto: LivestockPayloadDto = parse_params(method, params)?;
            to_data(commands::create_livestock(state, dto)?)
        }
        "getLivestockById" => {
            let IdParams { id } = parse_params(method, params)?;
            to_data(commands::get_livestock_by_id(state, &id)?)
        }
        "getLivestockByName" => {
            let NameParams { name } = parse_params(method, params)?;
            to_data(commands::get_livestock_by_name(state, &name)?)
        }
        "getAllLivestock" => to_data(commands::get_all_livestock(state)?),
        "updateLivestock" | "updatedLivestock" => {
            let UpdateParams { id, payload } = parse_params(method, params)?;
            to_data(commands::update_livestock(state, &id, payload)?)
        }
        "deleteLivestock" => {
            let IdParams { id } = parse_params(method, params)?;
            to_data(commands::delete_livestock(state, &id)?)
        }
        other => Err(ErrorResponse::invalid_request(format!(
            "unknown method '{}'",
            other
        ))),
    }
}

fn parse_params<T: DeserializeOwned>(method: &str, params: Value) -> CommandResult<T> {
    serde_json::from_value(params).map_err(|e| {
        ErrorResponse::invalid_request(format!("invalid params for {}: {}", method, e))
    })
}

fn to_data<T: Serialize>(data: T) -> CommandResult<Value> {
    serde_json::to_value(data).map_err(|e| ErrorResponse::from_app_error(AppError::Serialization(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error_handling::ErrorType;
    use crate::domain::{Principal, ValidationPolicy};
    use crate::events::EventBus;
    use crate::infrastructure::{StaticIdentity, SystemClock, UuidGenerator};
    use crate::repositories::{InMemoryRecordStore, StoreLivestockRepository};
    use crate::services::LivestockService;
    use serde_json::json;
    use std::sync::Arc;

    fn state() -> AppState {
        let service = LivestockService::new(
            Arc::new(StoreLivestockRepository::new(Arc::new(InMemoryRecordStore::new()))),
            Arc::new(SystemClock::new()),
            Arc::new(StaticIdentity::new(Principal::new("caller-7"))),
            Arc::new(UuidGenerator),
            Arc::new(EventBus::new()),
            ValidationPolicy::Strict,
        );
        AppState::new(Arc::new(service))
    }

    fn bessie() -> Value {
        json!({
            "species": "cattle", "name": "Bessie", "sex": "F", "coatcolour": "brown",
            "brand": "B1", "breed": "Angus", "dob": "2020-01-01", "marking": "none",
            "tagNo": "T1"
        })
    }

    fn call(state: &AppState, method: &str, params: Value) -> Value {
        let line = json!({"id": 1, "method": method, "params": params}).to_string();
        serde_json::to_value(handle_line(state, &line)).unwrap()
    }

    #[test]
    fn test_full_lifecycle_over_rpc() {
        let state = state();

        let created = call(&state, "createLivestock", bessie());
        assert_eq!(created["success"], true);
        assert_eq!(created["id"], 1);
        let id = created["data"]["id"].as_str().unwrap().to_string();
        assert_eq!(created["data"]["owner"], "caller-7");
        assert!(created["data"]["updatedAt"].is_null());

        let fetched = call(&state, "getLivestockById", json!({"id": id}));
        assert_eq!(fetched["data"], created["data"]);

        let by_name = call(&state, "getLivestockByName", json!({"name": "BESSIE"}));
        assert_eq!(by_name["data"].as_array().unwrap().len(), 1);

        let mut renamed = bessie();
        renamed["name"] = json!("Bessie II");
        let updated = call(&state, "updateLivestock", json!({"id": id, "payload": renamed}));
        assert_eq!(updated["data"]["name"], "Bessie II");
        assert_eq!(updated["data"]["createdAt"], created["data"]["createdAt"]);
        let created_at = created["data"]["createdAt"].as_u64().unwrap();
        let updated_at = updated["data"]["updatedAt"].as_u64().unwrap();
        assert!(updated_at >= created_at);

        let all = call(&state, "getAllLivestock", Value::Null);
        assert_eq!(all["data"].as_array().unwrap().len(), 1);

        let deleted = call(&state, "deleteLivestock", json!({"id": id}));
        assert_eq!(deleted["data"], updated["data"]);

        let gone = call(&state, "getLivestockById", json!({"id": id}));
        assert_eq!(gone["success"], false);
        assert_eq!(gone["error_type"], "not_found");
    }

    #[test]
    fn test_original_method_names_are_accepted() {
        let state = state();

        let created = call(&state, "CreateLivestock", bessie());
        let id = created["data"]["id"].clone();

        let updated = call(&state, "updatedLivestock", json!({"id": id, "payload": bessie()}));
        assert_eq!(updated["success"], true);
        assert!(updated["data"]["updatedAt"].is_u64());
    }

    #[test]
    fn test_missing_field_is_a_validation_error() {
        let state = state();

        let reply = call(&state, "createLivestock", json!({"name": "Bessie"}));

        assert_eq!(reply["success"], false);
        assert_eq!(reply["error_type"], "validation");
        assert!(state.livestock_service.list_all_livestock().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_method_and_bad_params() {
        let state = state();

        let unknown = dispatch(
            &state,
            RpcRequest {
                id: Some(json!("abc")),
                method: "dropTable".to_string(),
                params: Value::Null,
            },
        );
        assert!(!unknown.is_success());
        assert_eq!(unknown.id, Some(json!("abc")));
        match unknown.body {
            RpcBody::Failure(error) => assert_eq!(error.error_type, ErrorType::InvalidRequest),
            RpcBody::Success(_) => panic!("unknown method must fail"),
        }

        let bad = call(&state, "getLivestockById", json!({"identifier": "x"}));
        assert_eq!(bad["error_type"], "invalid_request");
    }

    #[test]
    fn test_malformed_line() {
        let state = state();

        let reply = handle_line(&state, "{not json");

        assert!(!reply.is_success());
        assert_eq!(reply.id, None);
    }
}
