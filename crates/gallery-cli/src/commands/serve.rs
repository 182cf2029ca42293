//! JSON-lines server over stdin/stdout.
//!
//! Each input line is one request:
//!
//! ```text
//! {"op": "images", "input": {"limit": 1, "after": "1", "titleContains": "sun"}}
//! {"op": "likeImage", "input": {"imageId": "1", "clientMutationId": "abc"}}
//! ```
//!
//! Each output line is either `{"data": ...}` or
//! `{"error": {"kind": ..., "message": ...}}`. One store lives for the
//! whole session, so mutations are visible to later requests.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use gallery_core::{Gallery, LikeImageInput, ListImagesInput};
use gallery_memory::MemoryGallery;

use crate::config::SeedConfig;

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Write the collection back to the seed file after every like
    #[arg(long)]
    pub save: bool,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
enum Op {
    Images,
    LikeImage,
}

#[derive(Debug, Deserialize)]
struct Request {
    op: Op,
    #[serde(default)]
    input: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
enum Response {
    Data(Value),
    Error(ErrorBody),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    kind: &'static str,
    message: String,
}

impl Response {
    fn bad_request(err: impl std::fmt::Display) -> Self {
        Response::Error(ErrorBody {
            kind: "BAD_REQUEST",
            message: err.to_string(),
        })
    }

    fn from_result<T: Serialize>(result: gallery_core::Result<T>) -> Self {
        match result {
            Ok(data) => match serde_json::to_value(data) {
                Ok(value) => Response::Data(value),
                Err(err) => Response::Error(ErrorBody {
                    kind: "INTERNAL",
                    message: err.to_string(),
                }),
            },
            Err(err) => Response::Error(ErrorBody {
                kind: err.kind(),
                message: err.to_string(),
            }),
        }
    }
}

/// Parse an input object, treating a missing `input` as `{}`.
fn parse_input<T: for<'de> Deserialize<'de>>(input: Value) -> serde_json::Result<T> {
    let input = if input.is_null() {
        Value::Object(Default::default())
    } else {
        input
    };
    serde_json::from_value(input)
}

/// Run one request line against a gallery.
async fn dispatch<G: Gallery>(gallery: &G, line: &str) -> (Option<Op>, Response) {
    let request: Request = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(err) => return (None, Response::bad_request(err)),
    };

    let response = match request.op {
        Op::Images => match parse_input::<ListImagesInput>(request.input) {
            Ok(input) => Response::from_result(gallery.list_images(&input).await),
            Err(err) => Response::bad_request(err),
        },
        Op::LikeImage => match parse_input::<LikeImageInput>(request.input) {
            Ok(input) => Response::from_result(gallery.like_image(input).await),
            Err(err) => Response::bad_request(err),
        },
    };

    (Some(request.op), response)
}

/// Answer one raw input line, saving after a successful like when
/// `save_to` is set.
///
/// Returns `None` for blank lines. A save failure is reported as that
/// request's error; the toggle stays applied in memory.
async fn respond(gallery: &MemoryGallery, raw: &[u8], save_to: Option<&Path>) -> Option<Response> {
    let line = match std::str::from_utf8(raw) {
        Ok(line) => line.trim(),
        Err(err) => {
            return Some(Response::bad_request(format!(
                "request is not valid UTF-8: {}",
                err
            )));
        }
    };

    if line.is_empty() {
        return None;
    }

    let (op, response) = dispatch(gallery, line).await;

    if let (Some(path), Some(Op::LikeImage), Response::Data(_)) = (save_to, op, &response) {
        if let Err(err) = gallery.save(path).await {
            return Some(Response::from_result::<()>(Err(err)));
        }
        debug!(path = %path.display(), "Saved collection");
    }

    Some(response)
}

pub async fn run(args: ServeArgs, seed: Option<&Path>) -> Result<()> {
    let config = SeedConfig::resolve(seed)?;
    let gallery = config.open()?;
    let save_to = args.save.then_some(config.save_path.as_path());

    info!(seed = %config.describe(), "Serving on stdin/stdout");

    let mut reader = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .await
            .context("Failed to read request")?;
        if read == 0 {
            break;
        }

        let Some(response) = respond(&gallery, &buf, save_to).await else {
            continue;
        };

        if let Response::Error(body) = &response {
            warn!(kind = body.kind, message = %body.message, "Request failed");
        }

        let mut out = serde_json::to_string(&response)?;
        out.push('\n');
        stdout.write_all(out.as_bytes()).await?;
        stdout.flush().await?;
    }

    debug!("Input closed, shutting down");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_memory::SeedSource;
    use tempfile::TempDir;

    fn gallery() -> MemoryGallery {
        MemoryGallery::from_seed(&SeedSource::Builtin).unwrap()
    }

    async fn call(gallery: &MemoryGallery, line: &str) -> Value {
        let (_, response) = dispatch(gallery, line).await;
        serde_json::to_value(&response).unwrap()
    }

    #[tokio::test]
    async fn images_without_input() {
        let out = call(&gallery(), r#"{"op":"images"}"#).await;
        let info = &out["data"]["pageInfo"];

        assert_eq!(out["data"]["edges"].as_array().unwrap().len(), 2);
        assert_eq!(info["startCursor"], "1");
        assert_eq!(info["endCursor"], "2");
        assert_eq!(info["hasNextPage"], false);
        assert_eq!(info["hasPreviousPage"], false);
    }

    #[tokio::test]
    async fn images_with_paging() {
        let gallery = gallery();

        let out = call(&gallery, r#"{"op":"images","input":{"limit":1}}"#).await;
        assert_eq!(out["data"]["nodes"][0]["id"], "1");
        assert_eq!(out["data"]["pageInfo"]["hasNextPage"], true);

        let out = call(&gallery, r#"{"op":"images","input":{"limit":1,"after":"1"}}"#).await;
        assert_eq!(out["data"]["edges"][0]["cursor"], "2");
        assert_eq!(out["data"]["pageInfo"]["hasNextPage"], false);
        assert_eq!(out["data"]["pageInfo"]["hasPreviousPage"], true);
    }

    #[tokio::test]
    async fn like_then_list_sees_mutation() {
        let gallery = gallery();

        let out = call(
            &gallery,
            r#"{"op":"likeImage","input":{"imageId":"1","clientMutationId":"m1"}}"#,
        )
        .await;
        assert_eq!(out["data"]["clientMutationId"], "m1");
        assert_eq!(out["data"]["image"]["liked"], true);
        assert_eq!(out["data"]["image"]["likesCount"], 11);

        let out = call(&gallery, r#"{"op":"images","input":{"titleContains":"sunset"}}"#).await;
        assert_eq!(out["data"]["nodes"][0]["likesCount"], 11);
    }

    #[tokio::test]
    async fn like_unknown_is_not_found() {
        let out = call(&gallery(), r#"{"op":"likeImage","input":{"imageId":"999"}}"#).await;
        assert_eq!(out["error"]["kind"], "NOT_FOUND");
        assert!(out["error"]["message"].as_str().unwrap().contains("999"));
    }

    #[tokio::test]
    async fn malformed_requests_are_bad_requests() {
        let gallery = gallery();

        for line in [
            "not json",
            r#"{"op":"deleteImage"}"#,
            r#"{"op":"likeImage"}"#,
            r#"{"op":"images","input":{"limit":-1}}"#,
        ] {
            let out = call(&gallery, line).await;
            assert_eq!(out["error"]["kind"], "BAD_REQUEST", "line: {}", line);
        }
    }

    #[tokio::test]
    async fn invalid_utf8_line_is_bad_request() {
        let gallery = gallery();

        let response = respond(&gallery, b"\xff\xfe\n", None).await.unwrap();
        let out = serde_json::to_value(&response).unwrap();
        assert_eq!(out["error"]["kind"], "BAD_REQUEST");

        assert!(respond(&gallery, b"  \n", None).await.is_none());

        let response = respond(&gallery, br#"{"op":"images"}"#, None).await.unwrap();
        assert!(matches!(response, Response::Data(_)));
    }

    #[tokio::test]
    async fn save_failure_is_reported_for_that_request() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seed.json");
        std::fs::create_dir(path.with_extension("tmp")).unwrap();

        let gallery = gallery();
        let line = br#"{"op":"likeImage","input":{"imageId":"1"}}"#;
        let response = respond(&gallery, line, Some(&path)).await.unwrap();
        let out = serde_json::to_value(&response).unwrap();
        assert_eq!(out["error"]["kind"], "STORAGE");

        // Listing needs no save and still succeeds
        let line = br#"{"op":"images"}"#;
        let response = respond(&gallery, line, Some(&path)).await.unwrap();
        assert!(matches!(response, Response::Data(_)));
    }
}
