//! Shared helpers for integration tests: a throwaway HTTP endpoint and a
//! small doctor directory fixture.

#![allow(dead_code)]

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Five doctors, two of them in-clinic (ids "2" and "5")
pub const DIRECTORY_JSON: &str = r#"[
  {
    "id": "1",
    "name": "Dr. Asha Rao",
    "specialities": [{ "name": "Dentist" }],
    "experience": "13 Years of experience",
    "fees": "₹ 500",
    "clinic": { "video_consult": true, "in_clinic": false },
    "doctor_introduction": "Gentle dentist."
  },
  {
    "id": "2",
    "name": "Dr. Ravi Kumar",
    "specialities": ["General Physician"],
    "experience": "20 Years of experience",
    "fees": "₹ 300",
    "clinic": {
      "video_consult": true,
      "in_clinic": true,
      "name": "City Clinic",
      "address": { "locality": "Baner", "city": "Pune" }
    },
    "doctor_introduction": "Family doctor.",
    "languages": ["English", "Hindi"]
  },
  {
    "id": 3,
    "name": "Dr. Meera Iyer",
    "specialities": [{ "name": "Dermatologist" }, { "name": "Dentist" }],
    "experience": "9 Years of experience",
    "fees": 650
  },
  {
    "id": "4",
    "name": "Dr. Arjun Rao",
    "specialities": [{ "name": "Dentist" }],
    "experience": "4 Years of experience",
    "fees": "₹ 450",
    "clinic": { "video_consult": "yes", "in_clinic": false }
  },
  {
    "id": "5",
    "name": "Dr. Kavya Nair",
    "specialities": [{ "name": "Pediatrician" }],
    "experience": "15 Years of experience",
    "fees": "₹ 300",
    "clinic": { "video_consult": false, "in_clinic": true }
  }
]"#;

/// Serve every request with the same status line and body
///
/// Returns the endpoint URL. The server lives until the test runtime shuts down.
pub async fn serve(status_line: &'static str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub endpoint");
    let addr = listener.local_addr().expect("stub endpoint address");
    let body = body.to_string();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let body = body.clone();
            tokio::spawn(async move {
                // Read the request head; the body of a GET is empty
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                loop {
                    let n = socket.read(&mut buf).await.unwrap_or(0);
                    if n == 0 {
                        break;
                    }
                    request.extend_from_slice(&buf[..n]);
                    if request.windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }

                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{}/doctors.json", addr)
}

/// A URL nothing is listening on
pub async fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{}/doctors.json", addr)
}
