// Newline-delimited JSON streaming of dashboard events
use crate::domain::dashboard::DashboardEvent;
use axum::body::Body;
use axum::http::{header, Response, StatusCode};
use axum::response::IntoResponse;
use bytes::{BufMut, Bytes, BytesMut};
use tokio::sync::mpsc;

/// Serialize a single event to one line
fn serialize_line(event: &DashboardEvent) -> Result<Bytes, serde_json::Error> {
    let json = serde_json::to_vec(event)?;

    let mut line = BytesMut::with_capacity(json.len() + 1);
    line.put_slice(&json);
    line.put_u8(b'\n');

    Ok(line.freeze())
}

/// Stream events as they arrive; the body ends once every sender is dropped
pub fn stream_from_receiver(mut rx: mpsc::Receiver<DashboardEvent>) -> Response<Body> {
    let stream = async_stream::stream! {
        while let Some(event) = rx.recv().await {
            yield serialize_line(&event);
        }
    };

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/x-ndjson")
        .header(header::CACHE_CONTROL, "no-cache")
        .body(Body::from_stream(stream))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_one_event_per_line() {
        let (tx, rx) = mpsc::channel(4);
        tx.send(DashboardEvent::Alert { message: "a".into() }).await.unwrap();
        tx.send(DashboardEvent::Alert { message: "b".into() }).await.unwrap();
        drop(tx);

        let response = stream_from_receiver(rx);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/x-ndjson"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["type"], "alert");
        assert_eq!(first["message"], "a");
    }
}
