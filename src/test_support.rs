use hyper::{
    body,
    header::{CONNECTION, CONTENT_TYPE},
    service::{make_service_fn, service_fn},
    Body, Request, Response, Server,
};
use std::{
    collections::VecDeque,
    convert::Infallible,
    net::{SocketAddr, TcpListener},
    sync::{mpsc, Arc, Mutex},
    thread::{self, JoinHandle},
    time::Duration,
};
use tokio::{runtime::Runtime, sync::oneshot};

type Replies = Arc<Mutex<VecDeque<Reply>>>;
type Seen = Arc<Mutex<Vec<SeenRequest>>>;

#[derive(Debug, Clone)]
pub struct Reply {
    status: u16,
    content_type: &'static str,
    body: String,
    delay: Duration,
}

impl Reply {
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

pub fn reply(status: u16, content_type: &'static str, body: &str) -> Reply {
    Reply {
        status,
        content_type,
        body: body.to_string(),
        delay: Duration::ZERO,
    }
}

#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

pub struct StubServer {
    pub url: String,
    seen: Seen,
    shutdown: Option<oneshot::Sender<()>>,
    join_handle: Option<JoinHandle<()>>,
}

impl StubServer {
    pub fn serve(replies: Vec<Reply>) -> Self {
        let replies: Replies = Arc::new(Mutex::new(replies.into()));
        let seen: Seen = Arc::new(Mutex::new(vec![]));
        let (addr_tx, addr_rx) = mpsc::channel();
        let (shutdown, shutdown_rx) = oneshot::channel::<()>();

        let server_seen = seen.clone();
        let join_handle = thread::spawn(move || {
            Runtime::new().unwrap().block_on(async move {
                let addr = SocketAddr::from(([127, 0, 0, 1], 0));
                let server = Server::bind(&addr).serve(make_service_fn(move |_| {
                    let replies = replies.clone();
                    let seen = server_seen.clone();
                    async move {
                        Ok::<_, Infallible>(service_fn(move |req| {
                            answer(req, replies.clone(), seen.clone())
                        }))
                    }
                }));
                addr_tx.send(server.local_addr()).unwrap();
                server
                    .with_graceful_shutdown(async {
                        shutdown_rx.await.ok();
                    })
                    .await
                    .unwrap();
            })
        });

        let addr = addr_rx.recv().unwrap();
        Self {
            url: format!("http://{}/", addr),
            seen,
            shutdown: Some(shutdown),
            join_handle: Some(join_handle),
        }
    }

    pub fn finish(mut self) -> Vec<SeenRequest> {
        self.stop();
        self.seen.lock().unwrap().clone()
    }

    fn stop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            shutdown.send(()).ok();
        }
        if let Some(handle) = self.join_handle.take() {
            handle
                .join()
                .expect("Couldn't shut down the stub server thread");
        }
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn answer(
    request: Request<Body>,
    replies: Replies,
    seen: Seen,
) -> Result<Response<Body>, Infallible> {
    let (parts, request_body) = request.into_parts();
    let request_body = body::to_bytes(request_body).await.unwrap_or_default();
    seen.lock().unwrap().push(SeenRequest {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        content_type: parts
            .headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from),
        body: String::from_utf8_lossy(&request_body).into_owned(),
    });

    let next = replies.lock().unwrap().pop_front();
    let next = next.unwrap_or_else(|| reply(500, "text/plain", "no reply queued"));
    if !next.delay.is_zero() {
        tokio::time::sleep(next.delay).await;
    }
    Ok(Response::builder()
        .status(next.status)
        .header(CONTENT_TYPE, next.content_type)
        .header(CONNECTION, "close")
        .body(Body::from(next.body))
        .unwrap())
}

/// URL of a port nobody listens on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/", addr)
}
