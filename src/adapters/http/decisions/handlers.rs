//! HTTP handlers for decision endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{handle_decision_error, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::decision::{
    CompleteDecisionCommand, CompleteDecisionHandler, CreateDecisionCommand,
    CreateDecisionHandler, DeleteDecisionCommand, DeleteDecisionHandler, GetDecisionHandler,
    GetDecisionQuery, ListDecisionsHandler, ListDecisionsQuery, LockDecisionCommand,
    LockDecisionHandler, UpdateDecisionCommand, UpdateDecisionHandler,
};
use crate::domain::decision::DecisionError;
use crate::domain::foundation::{DecisionId, OptionId};

use super::dto::{
    CompleteDecisionRequest, CreateDecisionRequest, DecisionEnvelope, DecisionListEnvelope,
    DecisionResponse, LockDecisionRequest, OptionRequest, UpdateDecisionRequest,
};

// ════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct DecisionHandlers {
    create_handler: Arc<CreateDecisionHandler>,
    get_handler: Arc<GetDecisionHandler>,
    list_handler: Arc<ListDecisionsHandler>,
    update_handler: Arc<UpdateDecisionHandler>,
    lock_handler: Arc<LockDecisionHandler>,
    complete_handler: Arc<CompleteDecisionHandler>,
    delete_handler: Arc<DeleteDecisionHandler>,
}

impl DecisionHandlers {
    pub fn new(
        create_handler: Arc<CreateDecisionHandler>,
        get_handler: Arc<GetDecisionHandler>,
        list_handler: Arc<ListDecisionsHandler>,
        update_handler: Arc<UpdateDecisionHandler>,
        lock_handler: Arc<LockDecisionHandler>,
        complete_handler: Arc<CompleteDecisionHandler>,
        delete_handler: Arc<DeleteDecisionHandler>,
    ) -> Self {
        Self {
            create_handler,
            get_handler,
            list_handler,
            update_handler,
            lock_handler,
            complete_handler,
            delete_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════

/// POST /api/decisions - Record a new decision
pub async fn create_decision(
    State(handlers): State<DecisionHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<CreateDecisionRequest>,
) -> Response {
    let options = match req
        .options
        .into_iter()
        .map(OptionRequest::into_new_option)
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(options) => options,
        Err(e) => return handle_decision_error(e),
    };

    let cmd = CreateDecisionCommand {
        owner_id: user,
        title: req.title,
        context: req.context,
        confidence: req.confidence,
        options,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(decision) => (
            StatusCode::CREATED,
            Json(DecisionEnvelope {
                decision: DecisionResponse::from(&decision),
            }),
        )
            .into_response(),
        Err(e) => handle_decision_error(e),
    }
}

/// GET /api/decisions - List the caller's decisions
pub async fn list_decisions(
    State(handlers): State<DecisionHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers
        .list_handler
        .handle(ListDecisionsQuery { owner_id: user })
        .await
    {
        Ok(decisions) => Json(DecisionListEnvelope {
            decisions: decisions.iter().map(DecisionResponse::from).collect(),
        })
        .into_response(),
        Err(e) => handle_decision_error(e),
    }
}

/// GET /api/decisions/:id - Get one decision
pub async fn get_decision(
    State(handlers): State<DecisionHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let decision_id = match parse_decision_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match handlers
        .get_handler
        .handle(GetDecisionQuery {
            owner_id: user,
            decision_id,
        })
        .await
    {
        Ok(decision) => Json(DecisionEnvelope {
            decision: DecisionResponse::from(&decision),
        })
        .into_response(),
        Err(e) => handle_decision_error(e),
    }
}

/// PATCH /api/decisions/:id - Edit a draft decision
pub async fn update_decision(
    State(handlers): State<DecisionHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    Json(req): Json<UpdateDecisionRequest>,
) -> Response {
    let decision_id = match parse_decision_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let options = match req
        .options
        .map(|opts| {
            opts.into_iter()
                .map(OptionRequest::into_new_option)
                .collect::<Result<Vec<_>, DecisionError>>()
        })
        .transpose()
    {
        Ok(options) => options,
        Err(e) => return handle_decision_error(e),
    };

    let cmd = UpdateDecisionCommand {
        owner_id: user,
        decision_id,
        title: req.title,
        context: req.context,
        confidence: req.confidence,
        options,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(decision) => Json(DecisionEnvelope {
            decision: DecisionResponse::from(&decision),
        })
        .into_response(),
        Err(e) => handle_decision_error(e),
    }
}

/// POST /api/decisions/:id/lock - Lock in a chosen option
pub async fn lock_decision(
    State(handlers): State<DecisionHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    Json(req): Json<LockDecisionRequest>,
) -> Response {
    let decision_id = match parse_decision_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let chosen_option_id = match req.chosen_option_id.parse::<OptionId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid option ID")),
            )
                .into_response()
        }
    };

    let cmd = LockDecisionCommand {
        owner_id: user,
        decision_id,
        chosen_option_id,
    };

    match handlers.lock_handler.handle(cmd).await {
        Ok(decision) => Json(DecisionEnvelope {
            decision: DecisionResponse::from(&decision),
        })
        .into_response(),
        Err(e) => handle_decision_error(e),
    }
}

/// POST /api/decisions/:id/complete - Record the outcome
pub async fn complete_decision(
    State(handlers): State<DecisionHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    Json(req): Json<CompleteDecisionRequest>,
) -> Response {
    let decision_id = match parse_decision_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let cmd = CompleteDecisionCommand {
        owner_id: user,
        decision_id,
        outcome: req.outcome,
        reflection: req.reflection,
    };

    match handlers.complete_handler.handle(cmd).await {
        Ok(decision) => Json(DecisionEnvelope {
            decision: DecisionResponse::from(&decision),
        })
        .into_response(),
        Err(e) => handle_decision_error(e),
    }
}

/// DELETE /api/decisions/:id - Discard a draft
pub async fn delete_decision(
    State(handlers): State<DecisionHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let decision_id = match parse_decision_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match handlers
        .delete_handler
        .handle(DeleteDecisionCommand {
            owner_id: user,
            decision_id,
        })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_decision_error(e),
    }
}

fn parse_decision_id(raw: &str) -> Result<DecisionId, Response> {
    raw.parse::<DecisionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid decision ID")),
        )
            .into_response()
    })
}
