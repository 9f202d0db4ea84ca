//! Vote handlers
//!
//! Endpoints for casting votes on posts and reading their counts.

use axum::{extract::State, Json};
use forum_service::dto::{UserVoteResponse, VoteCountsResponse, VoteRequest, VoteResponse};
use forum_service::ReactionService;

use crate::extractors::{EntityPath, PostIdPath, PostUserPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Cast or change a vote
///
/// POST /posts/{post_id}/vote
pub async fn submit_vote(
    State(state): State<AppState>,
    EntityPath(path): EntityPath<PostIdPath>,
    ValidatedJson(request): ValidatedJson<VoteRequest>,
) -> ApiResult<Json<VoteResponse>> {
    let post_id = path.post_id()?;

    let service = ReactionService::new(state.service_context());
    let response = service
        .submit_reaction(post_id, request.user_id, &request.action)
        .await?;
    Ok(Json(response))
}

/// Get vote counts for a post
///
/// GET /posts/{post_id}/votes
pub async fn get_votes(
    State(state): State<AppState>,
    EntityPath(path): EntityPath<PostIdPath>,
) -> ApiResult<Json<VoteCountsResponse>> {
    let post_id = path.post_id()?;

    let service = ReactionService::new(state.service_context());
    let counts = service.get_aggregate(post_id).await?;
    Ok(Json(counts))
}

/// Get one user's vote on a post
///
/// GET /posts/{post_id}/votes/{user_id}
pub async fn get_user_vote(
    State(state): State<AppState>,
    EntityPath(path): EntityPath<PostUserPath>,
) -> ApiResult<Json<UserVoteResponse>> {
    let post_id = path.post_id()?;
    let user_id = path.user_id()?;

    let service = ReactionService::new(state.service_context());
    let vote = service.get_user_reaction(post_id, user_id).await?;
    Ok(Json(vote))
}
