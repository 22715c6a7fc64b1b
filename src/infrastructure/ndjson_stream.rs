// Chunked NDJSON streaming utilities
use axum::body::Body;
use axum::http::{header, Response, StatusCode};
use axum::response::IntoResponse;
use bytes::{BufMut, Bytes, BytesMut};
use futures::stream::Stream;
use futures::StreamExt;
use serde::Serialize;

pub const NDJSON_CONTENT_TYPE: &str = "application/x-ndjson";

/// Create a chunked response with one JSON document per line
pub fn ndjson_stream<S, T>(stream: S) -> Result<Response<Body>, StatusCode>
where
    S: Stream<Item = T> + Send + 'static,
    T: Serialize + Send + 'static,
{
    let byte_stream = stream.map(|msg| serialize_line(&msg));

    let body = Body::from_stream(byte_stream);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, NDJSON_CONTENT_TYPE)
        .header(header::CACHE_CONTROL, "no-cache")
        .body(body)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Serialize a single message followed by a newline
pub fn serialize_line<T: Serialize>(msg: &T) -> Result<Bytes, serde_json::Error> {
    let json = serde_json::to_vec(msg)?;

    let mut line = BytesMut::with_capacity(json.len() + 1);
    line.put_slice(&json);
    line.put_u8(b'\n');

    Ok(line.freeze())
}

/// Helper to create a streaming response from a receiver, mapping each
/// message into its wire form
pub fn stream_from_receiver<M, T>(mut rx: tokio::sync::mpsc::Receiver<M>) -> impl IntoResponse
where
    M: Into<T> + Send + 'static,
    T: Serialize + Send + 'static,
{
    let stream = async_stream::stream! {
        while let Some(msg) = rx.recv().await {
            let item: T = msg.into();
            yield item;
        }
    };

    match ndjson_stream::<_, T>(stream) {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_line_appends_newline() {
        let line = serialize_line(&json!({"type": "complete"})).unwrap();
        assert_eq!(&line[..], b"{\"type\":\"complete\"}\n");
    }

    #[tokio::test]
    async fn test_stream_body_contains_each_message() {
        let (tx, rx) = tokio::sync::mpsc::channel::<serde_json::Value>(4);
        tx.send(json!({"n": 1})).await.unwrap();
        tx.send(json!({"n": 2})).await.unwrap();
        drop(tx);

        let response = stream_from_receiver::<_, serde_json::Value>(rx).into_response();
        assert_eq!(response.headers()[header::CONTENT_TYPE], NDJSON_CONTENT_TYPE);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"{\"n\":1}\n{\"n\":2}\n");
    }
}
