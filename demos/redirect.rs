//! Canonical-redirect demo: a hyper server that funnels every request to
//! its canonical URL before answering.
//!
//! Run with:
//!   RUST_LOG=info cargo run --example redirect
//!
//! Try:
//!   curl -i http://localhost:3000/FooBar            # 301 → /foobar/
//!   curl -i http://localhost:3000/foobar/           # 200, already canonical
//!   curl -i http://localhost:3000/logo.png          # 200, extension not whitelisted
//!   curl -i -H 'host: www.demo.test:3000' http://localhost:3000/foo
//!                                                   # 301 → http://demo.test:3000/foo/
//!
//! The primary host is `demo.test`, yet plain `curl http://localhost:3000/…`
//! is never funnelled there: localhost is exempt from host rewriting under
//! any port, so local traffic stays local.

use std::convert::Infallible;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use tokio::net::TcpListener;
use tracing::{error, info};

use canon::{CanonicalUrlOptions, Host, RedirectToCanonicalUrlRule, TrailingSlash, Verdict, adapter};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let rule = Arc::new(RedirectToCanonicalUrlRule::new(CanonicalUrlOptions {
        primary_host: Some(Host::with_port("demo.test", 3000)),
        trailing_slash: TrailingSlash::Add,
        ..CanonicalUrlOptions::default()
    }));

    let listener = TcpListener::bind("127.0.0.1:3000").await.expect("bind");
    info!("demo listening on http://localhost:3000");

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                break;
            }

            res = listener.accept() => {
                let (stream, remote_addr) = match res {
                    Ok(v) => v,
                    Err(e) => {
                        error!("accept error: {e}");
                        continue;
                    }
                };

                let rule = Arc::clone(&rule);
                tokio::spawn(async move {
                    let svc = service_fn(move |req| {
                        let rule = Arc::clone(&rule);
                        async move { handle(rule, req).await }
                    });

                    if let Err(e) = ConnBuilder::new(TokioExecutor::new())
                        .serve_connection(TokioIo::new(stream), svc)
                        .await
                    {
                        error!(peer = %remote_addr, "connection error: {e}");
                    }
                });
            }
        }
    }
}

async fn handle(
    rule: Arc<RedirectToCanonicalUrlRule>,
    req: hyper::Request<Incoming>,
) -> Result<http::Response<Full<Bytes>>, Infallible> {
    let verdict = match adapter::request_url("http", &req) {
        Ok(url) => rule.apply(&url),
        Err(e) => return Ok(plain(http::StatusCode::BAD_REQUEST, &e.to_string())),
    };

    let response = match verdict {
        Verdict::Redirect { status, location } => adapter::redirect_response(status, &location)
            .unwrap_or_else(|_| plain(http::StatusCode::INTERNAL_SERVER_ERROR, "bad location")),
        Verdict::NoAction => plain(http::StatusCode::OK, "hello from the canonical url\n"),
    };

    Ok(response)
}

fn plain(status: http::StatusCode, body: &str) -> http::Response<Full<Bytes>> {
    http::Response::builder()
        .status(status)
        .header("content-type", "text/plain; charset=utf-8")
        .body(Full::new(Bytes::from(body.to_owned())))
        .expect("static response")
}
