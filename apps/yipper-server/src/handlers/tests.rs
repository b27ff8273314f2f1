use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use serde_json::{Value, json};

use yipper_infra::database::{DatabaseConfig, YipStore, parse_seed};

use super::configure_routes;
use crate::state::AppState;

const SEED: &str = "\
1,Alice,Good morning everyone,sunrise,3,2020-01-01T08:00:00.000Z
2,Mister Fluffers,nap time,cozy,12,2020-01-01T09:00:00.000Z
3,Alice,Lunch was great,food,1,2020-01-01T12:30:00.000Z
";

async fn seeded_state() -> AppState {
    let store = YipStore::connect(&DatabaseConfig::in_memory(), true)
        .await
        .unwrap();
    store.initialize().await.unwrap();
    store.seed(parse_seed(SEED).unwrap()).await.unwrap();
    AppState::new(store, "yipper-test")
}

struct Reply {
    status: StatusCode,
    content_type: String,
    body: String,
}

impl Reply {
    fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

/// A `multipart/form-data` body, as a browser sends `FormData`.
fn multipart(fields: &[(&str, &str)]) -> test::TestRequest {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--XBOUND\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str("--XBOUND--\r\n");

    test::TestRequest::post()
        .insert_header((header::CONTENT_TYPE, "multipart/form-data; boundary=XBOUND"))
        .set_payload(body)
}

async fn send(state: &AppState, req: test::TestRequest) -> Reply {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(configure_routes),
    )
    .await;

    let resp = test::call_service(&app, req.to_request()).await;
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = test::read_body(resp).await;

    Reply {
        status,
        content_type,
        body: String::from_utf8(body.to_vec()).unwrap(),
    }
}

#[actix_web::test]
async fn test_lists_all_yips_newest_first() {
    let state = seeded_state().await;

    let reply = send(&state, test::TestRequest::get().uri("/yipper/yips")).await;

    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply.content_type.starts_with("application/json"));
    let json = reply.json();
    let yips = json["yips"].as_array().unwrap();
    assert_eq!(yips.len(), 3);
    assert_eq!(
        yips[1],
        json!({
            "id": 2,
            "name": "Mister Fluffers",
            "yip": "nap time",
            "hashtag": "cozy",
            "date": "2020-01-01T09:00:00.000Z",
            "likes": 12
        })
    );
    assert_eq!(yips[0]["id"], 3);
}

#[actix_web::test]
async fn test_search_returns_only_ids() {
    let state = seeded_state().await;

    let reply = send(
        &state,
        test::TestRequest::get().uri("/yipper/yips?search=morning"),
    )
    .await;
    assert_eq!(reply.json(), json!({ "yips": [{ "id": 1 }] }));

    let reply = send(
        &state,
        test::TestRequest::get().uri("/yipper/yips?search=zzz-no-match"),
    )
    .await;
    assert_eq!(reply.json(), json!({ "yips": [] }));
}

#[actix_web::test]
async fn test_empty_search_lists_everything() {
    let state = seeded_state().await;

    let reply = send(&state, test::TestRequest::get().uri("/yipper/yips?search=")).await;

    let json = reply.json();
    assert_eq!(json["yips"].as_array().unwrap().len(), 3);
    assert_eq!(json["yips"][0]["name"], "Alice");
}

#[actix_web::test]
async fn test_user_timeline() {
    let state = seeded_state().await;

    let reply = send(&state, test::TestRequest::get().uri("/yipper/user/Alice")).await;
    assert_eq!(
        reply.json(),
        json!([
            {
                "name": "Alice",
                "yip": "Good morning everyone",
                "hashtag": "sunrise",
                "date": "2020-01-01T08:00:00.000Z"
            },
            {
                "name": "Alice",
                "yip": "Lunch was great",
                "hashtag": "food",
                "date": "2020-01-01T12:30:00.000Z"
            }
        ])
    );

    let reply = send(
        &state,
        test::TestRequest::get().uri("/yipper/user/Mister%20Fluffers"),
    )
    .await;
    assert_eq!(reply.json().as_array().unwrap().len(), 1);

    let reply = send(&state, test::TestRequest::get().uri("/yipper/user/NoSuchUser")).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.json(), json!([]));
}

#[actix_web::test]
async fn test_like_replies_with_plain_text_count() {
    let state = seeded_state().await;

    let reply = send(
        &state,
        test::TestRequest::post()
            .uri("/yipper/likes")
            .set_form([("id", "1")]),
    )
    .await;
    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply.content_type.starts_with("text/plain"));
    assert_eq!(reply.body, "4");

    let reply = send(
        &state,
        test::TestRequest::post()
            .uri("/yipper/likes")
            .set_json(json!({ "id": 1 })),
    )
    .await;
    assert_eq!(reply.body, "5");
}

#[actix_web::test]
async fn test_like_accepts_multipart_form_data() {
    let state = seeded_state().await;

    let reply = send(&state, multipart(&[("id", "1")]).uri("/yipper/likes")).await;

    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply.content_type.starts_with("text/plain"));
    assert_eq!(reply.body, "4");

    let reply = send(&state, multipart(&[]).uri("/yipper/likes")).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body, "Missing one or more of the required params");
}

#[actix_web::test]
async fn test_like_with_numeric_zero_id_is_missing() {
    let state = seeded_state().await;

    let reply = send(
        &state,
        test::TestRequest::post()
            .uri("/yipper/likes")
            .set_json(json!({ "id": 0 })),
    )
    .await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body, "Missing one or more of the required params");
}

#[actix_web::test]
async fn test_like_without_id_is_reported_in_band() {
    let state = seeded_state().await;

    let reply = send(&state, test::TestRequest::post().uri("/yipper/likes")).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body, "Missing one or more of the required params");

    let reply = send(
        &state,
        test::TestRequest::post()
            .uri("/yipper/likes")
            .set_form([("id", "")]),
    )
    .await;
    assert_eq!(reply.body, "Missing one or more of the required params");
}

#[actix_web::test]
async fn test_like_unknown_id_is_reported_in_band() {
    let state = seeded_state().await;

    for id in ["9999999", "not-a-number", "1 OR 1=1"] {
        let reply = send(
            &state,
            test::TestRequest::post()
                .uri("/yipper/likes")
                .set_form([("id", id)]),
        )
        .await;
        assert_eq!(reply.status, StatusCode::OK);
        assert!(reply.content_type.starts_with("text/plain"));
        assert_eq!(reply.body, "Yikes. ID does not exist.");
    }
}

#[actix_web::test]
async fn test_new_yip_splits_hashtag() {
    let state = seeded_state().await;

    let reply = send(
        &state,
        test::TestRequest::post()
            .uri("/yipper/new")
            .set_form([("name", "Mister Fluffers"), ("full", "a#b#c")]),
    )
    .await;

    assert_eq!(reply.status, StatusCode::OK);
    let json = reply.json();
    assert_eq!(json["id"], 4);
    assert_eq!(json["name"], "Mister Fluffers");
    assert_eq!(json["yip"], "a");
    assert_eq!(json["hashtag"], "b#c");
    assert_eq!(json["likes"], 0);
    assert!(json["date"].as_str().unwrap().ends_with('Z'));

    let reply = send(&state, test::TestRequest::get().uri("/yipper/yips")).await;
    assert_eq!(reply.json()["yips"][0], json);
}

#[actix_web::test]
async fn test_new_yip_accepts_multipart_form_data() {
    let state = seeded_state().await;

    let reply = send(
        &state,
        multipart(&[("name", "Alice"), ("full", "hi#x")]).uri("/yipper/new"),
    )
    .await;

    assert_eq!(reply.status, StatusCode::OK);
    let json = reply.json();
    assert_eq!(json["id"], 4);
    assert_eq!(json["name"], "Alice");
    assert_eq!(json["yip"], "hi");
    assert_eq!(json["hashtag"], "x");
    assert_eq!(json["likes"], 0);

    let reply = send(&state, multipart(&[("name", "Alice")]).uri("/yipper/new")).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body, "Missing one or more of the required params.");
}

#[actix_web::test]
async fn test_new_yip_missing_params() {
    let state = seeded_state().await;

    let reply = send(
        &state,
        test::TestRequest::post()
            .uri("/yipper/new")
            .set_form([("name", "Alice")]),
    )
    .await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body, "Missing one or more of the required params.");
}

#[actix_web::test]
async fn test_new_yip_from_unknown_user() {
    let state = seeded_state().await;

    let reply = send(
        &state,
        test::TestRequest::post()
            .uri("/yipper/new")
            .set_json(json!({ "name": "Unknown Person", "full": "hello#tag" })),
    )
    .await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body, "Yikes. User does not exist.");
}

#[actix_web::test]
async fn test_malformed_json_is_a_bad_request() {
    let state = seeded_state().await;

    let reply = send(
        &state,
        test::TestRequest::post()
            .uri("/yipper/likes")
            .insert_header(header::ContentType::json())
            .set_payload("{\"id\":"),
    )
    .await;

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.json()["status"], 400);
}

#[actix_web::test]
async fn test_health_check_pings_store() {
    let state = seeded_state().await;

    let reply = send(&state, test::TestRequest::get().uri("/api/health")).await;

    assert_eq!(reply.status, StatusCode::OK);
    let json = reply.json();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "yipper-test");
}
