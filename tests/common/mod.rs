// common/mod.rs - Shared test utilities for catalog endpoint stubs
//
// Each stub is a one-worker actix-web server bound to an ephemeral port.
// It answers every request with a fixed status and body and records what
// it received. Must be called from inside an actix runtime.

#![allow(dead_code)]

use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};

/// What the stub saw for one request
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: String,
    pub body_len: usize,
}

pub struct StubCatalog {
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubCatalog {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Start a stub catalog answering `status` with a JSON `body`
pub fn spawn_catalog(status: u16, body: &'static str) -> anyhow::Result<StubCatalog> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    let status = StatusCode::from_u16(status)?;
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = requests.clone();

    let server = HttpServer::new(move || {
        let recorded = recorded.clone();
        App::new().default_service(web::to(move |req: HttpRequest, payload: web::Bytes| {
            let recorded = recorded.clone();
            async move {
                recorded.lock().unwrap().push(RecordedRequest {
                    method: req.method().to_string(),
                    path: req.path().to_string(),
                    query: req.query_string().to_string(),
                    body_len: payload.len(),
                });
                HttpResponse::build(status)
                    .content_type("application/json")
                    .body(body)
            }
        }))
    })
    .workers(1)
    .listen(listener)?
    .run();

    actix_web::rt::spawn(server);

    Ok(StubCatalog {
        url: format!("http://{}", addr),
        requests,
    })
}

/// An endpoint URL nothing is listening on
pub fn refused_endpoint() -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{}", addr))
}

pub const MENU: &str = r#"[
    {"name":"Boiled Egg","text":"Rich in protein","price":10,"image":"/images/egg.png","type":"Breakfast"},
    {"name":"Ramen","text":"Spicy broth","price":25,"image":"/images/ramen.png","type":"Lunch"},
    {"name":"Grilled Chicken","text":"Smoky","price":45,"image":"/images/chicken.png","type":"Dinner"},
    {"name":"Pancake","text":"Maple syrup","price":12.5,"image":"/images/pancake.png","type":"Breakfast"}
]"#;
