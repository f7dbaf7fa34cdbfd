//! HTTP front end.
//!
//! A tiny_http loop that serves the embedded form page and routes the two
//! JSON endpoints to the pure handlers in [`crate::api`]. A thread is
//! spawned per request to keep responsiveness; handlers share no state.

use crate::api::{self, ErrorResponse};
use serde::Serialize;
use std::io::Read;
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Run the server on `addr` (e.g. `127.0.0.1:3030`). Blocks forever.
pub fn serve(addr: &str) -> std::io::Result<()> {
    let server = Server::http(addr).map_err(|e| {
        std::io::Error::new(std::io::ErrorKind::Other, format!("server bind error: {}", e))
    })?;
    tracing::info!("listening on http://{}", addr);

    for request in server.incoming_requests() {
        std::thread::spawn(move || handle(request));
    }

    Ok(())
}

fn handle(mut request: Request) {
    let url = request.url().to_string();
    let method = request.method().clone();
    let (path, query) = match url.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (url.as_str(), None),
    };
    tracing::debug!(%method, path, "request");

    match (&method, path) {
        (Method::Get, "/") | (Method::Get, "/index.html") => {
            let response = Response::from_string(INDEX_HTML).with_header(
                Header::from_bytes(&b"Content-Type"[..], &b"text/html; charset=utf-8"[..]).unwrap(),
            );
            let _ = request.respond(response);
        }

        (Method::Post, "/api/convert") => {
            let mut body = String::new();
            if request.as_reader().read_to_string(&mut body).is_err() {
                let _ = request.respond(error_response(400, "could not read request body"));
                return;
            }

            let response = match serde_json::from_str::<api::ConvertRequest>(&body) {
                Ok(convert) => match api::handle_convert(&convert) {
                    Ok(ok) => json_response(200, &ok),
                    Err(err) => error_response(err.status(), &err.to_string()),
                },
                Err(err) => error_response(400, &format!("invalid JSON body: {}", err)),
            };
            let _ = request.respond(response);
        }

        (Method::Post, "/api/extract") => {
            let name = match query.and_then(|q| query_param(q, "name")) {
                Some(name) => name,
                None => {
                    let _ = request.respond(error_response(400, "missing `name` query parameter"));
                    return;
                }
            };

            let mut bytes = Vec::new();
            if request.as_reader().read_to_end(&mut bytes).is_err() {
                let _ = request.respond(error_response(400, "could not read request body"));
                return;
            }

            let response = match api::handle_extract(&name, &bytes) {
                Ok(ok) => json_response(200, &ok),
                Err(err) => error_response(err.status(), &err.to_string()),
            };
            let _ = request.respond(response);
        }

        _ => {
            let _ = request.respond(error_response(404, "not found"));
        }
    }
}

type JsonResponse = Response<std::io::Cursor<Vec<u8>>>;

fn json_response<T: Serialize>(status: u16, body: &T) -> JsonResponse {
    let body = serde_json::to_string(body).unwrap_or_else(|_| "{}".to_string());
    Response::from_string(body)
        .with_status_code(StatusCode(status))
        .with_header(
            Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap(),
        )
        .with_header(Header::from_bytes(&b"Access-Control-Allow-Origin"[..], &b"*"[..]).unwrap())
}

fn error_response(status: u16, message: &str) -> JsonResponse {
    json_response(
        status,
        &ErrorResponse {
            error: message.to_string(),
        },
    )
}

/// Find `key` in a query string and percent-decode its value.
fn query_param(query: &str, key: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k == key).then(|| percent_decode(v))
    })
}

/// Decode %XX escapes and `+` as space; invalid escapes pass through as-is.
fn percent_decode(value: &str) -> String {
    let mut out = Vec::with_capacity(value.len());
    let bytes = value.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                if let (Some(hi), Some(lo)) = (
                    bytes.get(i + 1).and_then(|b| (*b as char).to_digit(16)),
                    bytes.get(i + 2).and_then(|b| (*b as char).to_digit(16)),
                ) {
                    out.push((hi * 16 + lo) as u8);
                    i += 3;
                    continue;
                }
                out.push(b'%');
                i += 1;
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}
