#![allow(dead_code)]

use airport_info::config::ApiConfig;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

pub const JFK_BODY: &str = r#"[{
    "icaoId": "KJFK",
    "iataId": "JFK",
    "faaId": "JFK",
    "name": "NEW YORK/JOHN F KENNEDY INTL",
    "state": "NY",
    "country": "US",
    "source": "FAA",
    "type": "ARP",
    "lat": 40.6398,
    "lon": -73.7787,
    "elev": 4,
    "magdec": "13W",
    "owner": "P",
    "runways": [
        {"id": "04L/22R", "dimension": "12079x200", "surface": "A", "alignment": "31"},
        {"id": "13R/31L", "dimension": "14511x200", "surface": "C", "alignment": "121"},
        {"id": "04R/22L", "dimension": "bogus", "surface": "A", "alignment": "31"}
    ],
    "services": "S",
    "tower": "T",
    "beacon": "B",
    "operations": null,
    "passengers": "62.5",
    "freqs": "LCL/P,119.1;GND/P,121.9;BROKEN",
    "priority": 1
}]"#;

pub fn http_response(status: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    )
}

/// Accepts one connection, answers it with `response` after `delay`, and
/// reports the request line it received.
pub async fn serve_once(response: String, delay: Duration) -> (ApiConfig, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = vec![0u8; 8192];
            let n = socket.read(&mut buf).await.unwrap_or(0);
            let request = String::from_utf8_lossy(&buf[..n]);
            let request_line = request.lines().next().unwrap_or_default().to_string();
            let _ = tx.send(request_line);

            tokio::time::sleep(delay).await;
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    let config = ApiConfig {
        base_url: format!("http://{}/api/data/airport", addr),
        timeout_seconds: 15,
    };
    (config, rx)
}
