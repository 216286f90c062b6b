//! Live server harness and shared world for trivia behaviour tests.
//!
//! The harness owns a single-threaded Tokio runtime plus a `LocalSet` because
//! Actix uses `spawn_local` internally. Dropping the `WorldFixture` stops the
//! server even if a step panics.

use std::cell::RefCell;
use std::net::TcpListener;
use std::rc::Rc;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::http::Method;
use actix_web::{App, HttpServer, web};
use awc::Client;
use serde_json::Value;
use tokio::runtime::Runtime;
use tokio::task::LocalSet;

use trivia::Trace;
use trivia::domain::TRACE_ID_HEADER;
use trivia::inbound::http::health::HealthState;
use trivia::inbound::http::routes;
use trivia::middleware::cors;
use trivia::test_support::{InMemoryTriviaStore, http_state_for, sample_store};

/// Seed shared by every quiz generator in the behaviour suites.
pub(crate) const QUIZ_SEED: u64 = 11;

pub(crate) struct TriviaWorld {
    pub(crate) runtime: Runtime,
    pub(crate) local: LocalSet,
    pub(crate) base_url: String,
    pub(crate) server: ServerHandle,
    pub(crate) store: Arc<InMemoryTriviaStore>,
    pub(crate) last_status: Option<u16>,
    pub(crate) last_body: Option<Value>,
    pub(crate) last_trace_id: Option<String>,
    pub(crate) seen: Vec<i64>,
}

pub(crate) type SharedWorld = Rc<RefCell<TriviaWorld>>;

pub(crate) struct WorldFixture {
    world: SharedWorld,
}

impl WorldFixture {
    pub(crate) fn world(&self) -> SharedWorld {
        self.world.clone()
    }
}

impl Drop for WorldFixture {
    fn drop(&mut self) {
        shutdown(self.world.clone());
    }
}

fn shutdown(world: SharedWorld) {
    // The future passed to `block_on` must not borrow the world again.
    let ctx = world.borrow();
    let server = ctx.server.clone();
    ctx.local.block_on(&ctx.runtime, async move {
        server.stop(true).await;
    });
}

pub(crate) fn with_world_async<R, F>(world: &SharedWorld, operation: impl FnOnce(String) -> F) -> R
where
    F: std::future::Future<Output = R>,
{
    let ctx = world.borrow();
    let base_url = ctx.base_url.clone();
    ctx.local.block_on(&ctx.runtime, operation(base_url))
}

async fn spawn_server(store: Arc<InMemoryTriviaStore>) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;

    let http_data = web::Data::new(http_state_for(store, QUIZ_SEED));
    let health = HealthState::new();
    health.mark_ready();
    let health_data = web::Data::new(health);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(http_data.clone())
            .app_data(health_data.clone())
            .wrap(cors::headers())
            .wrap(Trace)
            .configure(routes::configure)
            .default_service(web::to(routes::unknown_route))
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .map_err(|err| err.to_string())?
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    Ok((format!("http://{addr}"), handle))
}

fn create_runtime_and_local() -> (Runtime, LocalSet) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    (runtime, LocalSet::new())
}

/// Start a server over the twelve-question sample store.
pub(crate) fn world() -> WorldFixture {
    let (runtime, local) = create_runtime_and_local();
    let store = Arc::new(sample_store());

    let (base_url, server) = local
        .block_on(&runtime, spawn_server(store.clone()))
        .expect("server should start");

    let world = Rc::new(RefCell::new(TriviaWorld {
        runtime,
        local,
        base_url,
        server,
        store,
        last_status: None,
        last_body: None,
        last_trace_id: None,
        seen: Vec::new(),
    }));

    WorldFixture { world }
}

/// Send a request and record status, trace header and JSON body.
///
/// Empty bodies are recorded as `Value::Null`.
pub(crate) fn perform_json_request(
    world: &SharedWorld,
    method: Method,
    path: &str,
    payload: Option<Value>,
) {
    let path = path.to_owned();
    let (status, trace_id, body) = with_world_async(world, |base_url| async move {
        let request = Client::default().request(method, format!("{base_url}{path}"));
        let mut response = match payload {
            Some(payload) => request.send_json(&payload).await.expect("json request"),
            None => request.send().await.expect("request"),
        };
        let status = response.status().as_u16();
        let trace_id = response
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let bytes = response.body().await.expect("body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        (status, trace_id, body)
    });

    let mut ctx = world.borrow_mut();
    ctx.last_status = Some(status);
    ctx.last_trace_id = trace_id;
    ctx.last_body = Some(body);
}

pub(crate) fn last_status(world: &WorldFixture) -> u16 {
    world.world().borrow().last_status.expect("a response was recorded")
}

pub(crate) fn last_body(world: &WorldFixture) -> Value {
    world
        .world()
        .borrow()
        .last_body
        .clone()
        .expect("a response body was recorded")
}
