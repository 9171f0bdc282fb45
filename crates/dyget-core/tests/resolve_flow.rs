//! Integration test: share text through the composed resolver against a mock API.

mod common;

use common::mock_api;
use dyget_core::{ResolutionClient, ResolveError, VideoResolver};

const SHARE_TEXT: &str = "看看这个 https://v.douyin.com/abc123/ 超好看！";

fn resolver_for(endpoint: &str) -> VideoResolver<ResolutionClient> {
    VideoResolver::new(ResolutionClient::new(endpoint, "test-key").unwrap())
}

#[test]
fn legacy_payload_resolves_share_text() {
    let api = mock_api::start(200, r#"{"video_url":"https://cdn.example.com/nowm.mp4"}"#);
    let outcome = resolver_for(&api.endpoint).resolve_outcome(SHARE_TEXT);
    assert!(outcome.success, "{:?}", outcome.error);
    let record = outcome.data.unwrap();
    assert_eq!(record.direct_media_url(), "https://cdn.example.com/nowm.mp4");
    assert_eq!(record.title(), "");
    assert!(api.requests()[0]
        .target()
        .ends_with("share_url=https%3A%2F%2Fv.douyin.com%2Fabc123%2F"));
}

#[test]
fn detail_payload_resolves_all_fields() {
    let api = mock_api::start(
        200,
        r#"{
            "code": 200,
            "router": "/api/v1/douyin/web/fetch_one_video_by_share_url",
            "data": {
                "aweme_detail": {
                    "aweme_id": "7301234567890123456",
                    "desc": "city lights",
                    "share_url": "https://www.iesdouyin.com/share/video/7301234567890123456/",
                    "video": {
                        "play_addr": { "url_list": [], "data_size": 2097152 },
                        "bit_rate": [
                            { "gear_name": "adapt_lowest_720_1", "play_addr": { "url_list": ["https://v5.douyinvod.com/720.mp4"] } }
                        ],
                        "cover": { "url_list": ["https://p9.douyinpic.com/cover.jpeg"] },
                        "duration": 47
                    }
                }
            }
        }"#,
    );
    let record = resolver_for(&api.endpoint).resolve_video(SHARE_TEXT).unwrap();
    assert_eq!(record.id(), "7301234567890123456");
    assert_eq!(record.title(), "city lights");
    assert_eq!(record.direct_media_url(), "https://v5.douyinvod.com/720.mp4");
    assert_eq!(record.cover_image(), "https://p9.douyinpic.com/cover.jpeg");
    assert_eq!(record.display_duration(), "00:47");
    assert_eq!(record.display_size(), "2.00MB");
}

#[test]
fn text_without_link_never_reaches_api() {
    let api = mock_api::start(200, r#"{"video_url":"u"}"#);
    let outcome = resolver_for(&api.endpoint).resolve_outcome("复制这段话打开抖音");
    assert!(!outcome.success);
    assert_eq!(outcome.error.as_deref(), Some("invalid link"));
    assert!(api.requests().is_empty());
}

#[test]
fn link_without_id_never_reaches_api() {
    let api = mock_api::start(200, r#"{"video_url":"u"}"#);
    assert_eq!(
        resolver_for(&api.endpoint)
            .resolve_video("https://www.douyin.com/")
            .unwrap_err(),
        ResolveError::IdentifierNotFound
    );
    assert!(api.requests().is_empty());
}

#[test]
fn payload_without_media_is_incomplete() {
    let api = mock_api::start(200, r#"{"code":200,"data":{"aweme_detail":{"desc":"gone"}}}"#);
    assert_eq!(
        resolver_for(&api.endpoint).resolve_video(SHARE_TEXT).unwrap_err(),
        ResolveError::MappingIncomplete
    );
}

#[tokio::test]
async fn async_resolve_against_mock() {
    let api = mock_api::start(200, r#"{"video_no_watermark_url":"https://cdn.example.com/a.mp4"}"#);
    let outcome = resolver_for(&api.endpoint)
        .resolve_outcome_async(SHARE_TEXT)
        .await;
    assert!(outcome.success);
    assert_eq!(
        outcome.data.unwrap().direct_media_url(),
        "https://cdn.example.com/a.mp4"
    );
    assert_eq!(api.requests().len(), 1);
}
