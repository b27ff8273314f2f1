//! Yip handlers.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, web};
use chrono::Utc;

use yipper_core::domain::Yip;
use yipper_core::ports::YipListing;
use yipper_shared::dto::{
    LikeRequest, NewYipRequest, SearchQuery, UserYipEntry, YipEntry, YipIdEntry, YipList,
};

use crate::extract::BodyParams;
use crate::middleware::error::{
    AppError, AppResult, MISSING_LIKE_PARAMS, MISSING_NEW_YIP_PARAMS,
};
use crate::state::AppState;

/// GET /yipper/yips?search=term
pub async fn list_yips(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let search = present(query.into_inner().search);

    let response = match state.yips.list_posts(search.as_deref()).await? {
        YipListing::Ids(ids) => HttpResponse::Ok().json(YipList {
            yips: ids.into_iter().map(|id| YipIdEntry { id }).collect(),
        }),
        YipListing::Full(yips) => HttpResponse::Ok().json(YipList {
            yips: yips.into_iter().map(yip_entry).collect(),
        }),
    };

    Ok(response)
}

/// GET /yipper/user/{user}
pub async fn user_yips(
    state: web::Data<AppState>,
    user: web::Path<String>,
) -> AppResult<HttpResponse> {
    let yips = state.yips.posts_by_author(&user).await?;

    let entries: Vec<UserYipEntry> = yips
        .into_iter()
        .map(|yip| UserYipEntry {
            name: yip.author,
            yip: yip.body,
            hashtag: yip.hashtag,
            date: yip.created_at,
        })
        .collect();

    Ok(HttpResponse::Ok().json(entries))
}

/// POST /yipper/likes - replies with the new like count as plain text.
pub async fn like_yip(
    state: web::Data<AppState>,
    body: BodyParams<LikeRequest>,
) -> AppResult<HttpResponse> {
    let raw_id = present(body.into_inner().id).ok_or(AppError::MissingParams(MISSING_LIKE_PARAMS))?;

    // Text that is not an integer cannot name a yip.
    let id: i64 = raw_id.trim().parse().map_err(|_| AppError::UnknownId)?;

    let likes = state.yips.like_post(id).await?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(likes.to_string()))
}

/// POST /yipper/new
pub async fn new_yip(
    state: web::Data<AppState>,
    body: BodyParams<NewYipRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let (Some(name), Some(full)) = (present(req.name), present(req.full)) else {
        return Err(AppError::MissingParams(MISSING_NEW_YIP_PARAMS));
    };

    let yip = state.yips.create_post(&name, &full, Utc::now()).await?;

    Ok(HttpResponse::Ok().json(yip_entry(yip)))
}

/// Empty parameters count as absent.
fn present(param: Option<String>) -> Option<String> {
    param.filter(|value| !value.is_empty())
}

fn yip_entry(yip: Yip) -> YipEntry {
    YipEntry {
        id: yip.id,
        name: yip.author,
        yip: yip.body,
        hashtag: yip.hashtag,
        date: yip.created_at,
        likes: yip.likes,
    }
}
