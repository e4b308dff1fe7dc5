//! An in-process DynamoDB stand-in speaking awsJson1_0 over hyper.
//!
//! Every request must carry a valid SigV4 signature for [`ACCESS_KEY`].
//! Tables live in memory, keyed by the attributes named in the table's
//! key schema. Only the actions the tests drive are routed; anything else
//! answers `UnknownOperationException`.

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::thread::JoinHandle;

use bytes::Bytes;
use http::request::Parts;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as HttpConnBuilder;
use parking_lot::Mutex;
use serde_json::{Map, Value, json};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::{debug, warn};

/// Access key the stub accepts.
pub const ACCESS_KEY: &str = "AKIDINTEGRATION";
/// Secret paired with [`ACCESS_KEY`].
pub const SECRET_KEY: &str = "integration-secret";

const TARGET_PREFIX: &str = "DynamoDB_20120810.";
const ERROR_NAMESPACE: &str = "com.amazonaws.dynamodb.v20120810#";
const DEFAULT_PAGE_SIZE: usize = 100;

#[derive(Debug, Default)]
struct Table {
    description: Map<String, Value>,
    key_names: Vec<String>,
    items: BTreeMap<String, Value>,
}

impl Table {
    /// Sort position of an item or key; `None` when a key attribute is missing.
    fn position(&self, attributes: &Map<String, Value>) -> Option<String> {
        self.key_names
            .iter()
            .map(|name| attributes.get(name).map(Value::to_string))
            .collect::<Option<Vec<_>>>()
            .map(|parts| parts.join("|"))
    }

    fn key_of(&self, item: &Map<String, Value>) -> Value {
        let key: Map<String, Value> = self
            .key_names
            .iter()
            .filter_map(|name| item.get(name).map(|v| (name.clone(), v.clone())))
            .collect();
        Value::Object(key)
    }

    fn describe(&self) -> Value {
        let mut description = self.description.clone();
        description.insert("ItemCount".to_owned(), json!(self.items.len()));
        Value::Object(description)
    }
}

#[derive(Debug, Default)]
struct State {
    tables: BTreeMap<String, Table>,
    throttle_remaining: u32,
    targets: Vec<String>,
    rejected: usize,
    served: u64,
}

struct Outcome {
    status: StatusCode,
    body: Option<Value>,
}

impl Outcome {
    fn ok(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body: Some(body),
        }
    }

    fn empty() -> Self {
        Self {
            status: StatusCode::OK,
            body: None,
        }
    }

    fn error(code: &str, message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: Some(json!({
                "__type": format!("{ERROR_NAMESPACE}{code}"),
                "message": message.into(),
            })),
        }
    }

    fn table_not_found(name: &str) -> Self {
        Self::error(
            "ResourceNotFoundException",
            format!("Requested resource not found: Table: {name} not found"),
        )
    }
}

/// A stub server bound to an ephemeral port on its own thread and runtime,
/// so both async and blocking clients can talk to it.
#[derive(Debug)]
pub struct StubServer {
    addr: SocketAddr,
    state: Arc<Mutex<State>>,
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl StubServer {
    /// Bind and start serving.
    #[must_use]
    pub fn start() -> Self {
        let listener =
            std::net::TcpListener::bind("127.0.0.1:0").expect("failed to bind stub listener");
        listener
            .set_nonblocking(true)
            .expect("failed to make stub listener non-blocking");
        let addr = listener.local_addr().expect("stub listener has no address");

        let state = Arc::new(Mutex::new(State::default()));
        let (shutdown, shutdown_rx) = oneshot::channel();
        let thread = {
            let state = Arc::clone(&state);
            std::thread::spawn(move || {
                let runtime = tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                    .expect("failed to build stub runtime");
                runtime.block_on(serve(listener, state, shutdown_rx));
            })
        };

        Self {
            addr,
            state,
            shutdown: Some(shutdown),
            thread: Some(thread),
        }
    }

    /// `http://127.0.0.1:<port>`.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Answer the next `n` signed requests with a throttling error.
    pub fn throttle_next(&self, n: u32) {
        self.state.lock().throttle_remaining = n;
    }

    /// Actions received with a valid signature, in arrival order.
    #[must_use]
    pub fn targets(&self) -> Vec<String> {
        self.state.lock().targets.clone()
    }

    /// Requests turned away for a bad or missing signature.
    #[must_use]
    pub fn rejected_signatures(&self) -> usize {
        self.state.lock().rejected
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

async fn serve(
    listener: std::net::TcpListener,
    state: Arc<Mutex<State>>,
    mut shutdown: oneshot::Receiver<()>,
) {
    let listener = match TcpListener::from_std(listener) {
        Ok(listener) => listener,
        Err(e) => {
            warn!(error = %e, "stub listener unusable");
            return;
        }
    };
    let http = HttpConnBuilder::new(TokioExecutor::new());

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                let (stream, peer_addr) = match accepted {
                    Ok(conn) => conn,
                    Err(e) => {
                        warn!(error = %e, "failed to accept connection");
                        continue;
                    }
                };

                let state = Arc::clone(&state);
                let svc = service_fn(move |req| handle(Arc::clone(&state), req));
                let conn = http.serve_connection(TokioIo::new(stream), svc).into_owned();
                tokio::spawn(async move {
                    if let Err(e) = conn.await {
                        debug!(peer_addr = %peer_addr, error = %e, "stub connection closed");
                    }
                });
            }
            _ = &mut shutdown => break,
        }
    }
}

async fn handle(
    state: Arc<Mutex<State>>,
    req: Request<Incoming>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let (parts, body) = req.into_parts();
    let outcome = match body.collect().await {
        Ok(collected) => dispatch(&state, &parts, &collected.to_bytes()),
        Err(e) => Outcome::error("SerializationException", e.to_string()),
    };
    Ok(frame(&state, outcome))
}

fn frame(state: &Mutex<State>, outcome: Outcome) -> Response<Full<Bytes>> {
    let request_id = {
        let mut state = state.lock();
        state.served += 1;
        format!("STUB-{:04}", state.served)
    };
    let body = outcome
        .body
        .map(|v| Bytes::from(v.to_string()))
        .unwrap_or_default();

    let mut response = Response::new(Full::new(body.clone()));
    *response.status_mut() = outcome.status;
    let headers = response.headers_mut();
    headers.insert(
        http::header::CONTENT_TYPE,
        http::HeaderValue::from_static("application/x-amz-json-1.0"),
    );
    if let Ok(value) = http::HeaderValue::from_str(&request_id) {
        headers.insert("x-amzn-requestid", value);
    }
    headers.insert(
        "x-amz-crc32",
        http::HeaderValue::from(crc32fast::hash(&body)),
    );
    response
}

fn dispatch(state: &Mutex<State>, parts: &Parts, body: &[u8]) -> Outcome {
    if let Err(e) = dynamite_auth::verify_request(parts, body, |key| {
        (key == ACCESS_KEY).then(|| SECRET_KEY.to_owned())
    }) {
        state.lock().rejected += 1;
        return Outcome::error("InvalidSignatureException", e.to_string());
    }

    let Some(operation) = parts
        .headers
        .get("x-amz-target")
        .and_then(|v| v.to_str().ok())
        .and_then(|t| t.strip_prefix(TARGET_PREFIX))
    else {
        return Outcome::error("UnknownOperationException", "missing x-amz-target");
    };
    let input: Value = if body.is_empty() {
        json!({})
    } else {
        match serde_json::from_slice(body) {
            Ok(v) => v,
            Err(e) => return Outcome::error("SerializationException", e.to_string()),
        }
    };

    let mut state = state.lock();
    state.targets.push(operation.to_owned());
    if state.throttle_remaining > 0 {
        state.throttle_remaining -= 1;
        return Outcome::error(
            "ProvisionedThroughputExceededException",
            "The level of configured provisioned throughput for the table was exceeded.",
        );
    }

    match operation {
        "CreateTable" => create_table(&mut state, &input),
        "DescribeTable" => describe_table(&state, &input),
        "DeleteTable" => delete_table(&mut state, &input),
        "ListTables" => list_tables(&state, &input),
        "PutItem" => put_item(&mut state, &input),
        "GetItem" => get_item(&state, &input),
        "DeleteItem" => delete_item(&mut state, &input),
        "Scan" => scan(&state, &input),
        "DescribeLimits" => Outcome::ok(json!({
            "AccountMaxReadCapacityUnits": 80_000,
            "AccountMaxWriteCapacityUnits": 80_000,
            "TableMaxReadCapacityUnits": 40_000,
            "TableMaxWriteCapacityUnits": 40_000,
        })),
        "TagResource" | "UntagResource" => Outcome::empty(),
        other => Outcome::error(
            "UnknownOperationException",
            format!("unknown operation {other}"),
        ),
    }
}

fn table_name(input: &Value) -> &str {
    input["TableName"].as_str().unwrap_or_default()
}

fn object(value: &Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap_or_default()
}

fn wants_old_values(input: &Value) -> bool {
    input["ReturnValues"].as_str() == Some("ALL_OLD")
}

fn page_limit(input: &Value) -> usize {
    input["Limit"]
        .as_u64()
        .and_then(|n| usize::try_from(n).ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_PAGE_SIZE)
}

fn create_table(state: &mut State, input: &Value) -> Outcome {
    let name = table_name(input).to_owned();
    if name.is_empty() {
        return Outcome::error("ValidationException", "TableName is required");
    }
    if state.tables.contains_key(&name) {
        return Outcome::error(
            "ResourceInUseException",
            format!("Table already exists: {name}"),
        );
    }

    let key_schema = input["KeySchema"].as_array().cloned().unwrap_or_default();
    let mut key_names: Vec<(String, String)> = key_schema
        .iter()
        .filter_map(|k| {
            Some((
                k["KeyType"].as_str()?.to_owned(),
                k["AttributeName"].as_str()?.to_owned(),
            ))
        })
        .collect();
    if key_names.is_empty() {
        return Outcome::error("ValidationException", "KeySchema is required");
    }
    // HASH sorts before RANGE.
    key_names.sort();

    let mut description = Map::new();
    description.insert("TableName".to_owned(), json!(name));
    description.insert("TableStatus".to_owned(), json!("ACTIVE"));
    description.insert("KeySchema".to_owned(), json!(key_schema));
    description.insert(
        "AttributeDefinitions".to_owned(),
        input["AttributeDefinitions"].clone(),
    );
    description.insert(
        "TableArn".to_owned(),
        json!(format!("arn:aws:dynamodb:us-east-1:000000000000:table/{name}")),
    );
    description.insert("CreationDateTime".to_owned(), json!(1_700_000_000.0));

    let table = Table {
        description,
        key_names: key_names.into_iter().map(|(_, n)| n).collect(),
        items: BTreeMap::new(),
    };
    let reply = json!({ "TableDescription": table.describe() });
    state.tables.insert(name, table);
    Outcome::ok(reply)
}

fn describe_table(state: &State, input: &Value) -> Outcome {
    let name = table_name(input);
    match state.tables.get(name) {
        Some(table) => Outcome::ok(json!({ "Table": table.describe() })),
        None => Outcome::table_not_found(name),
    }
}

fn delete_table(state: &mut State, input: &Value) -> Outcome {
    let name = table_name(input);
    match state.tables.remove(name) {
        Some(table) => {
            let mut description = table.describe();
            description["TableStatus"] = json!("DELETING");
            Outcome::ok(json!({ "TableDescription": description }))
        }
        None => Outcome::table_not_found(name),
    }
}

fn list_tables(state: &State, input: &Value) -> Outcome {
    let start = input["ExclusiveStartTableName"].as_str();
    let limit = page_limit(input);
    let remaining: Vec<&String> = state
        .tables
        .keys()
        .filter(|name| start.is_none_or(|s| name.as_str() > s))
        .collect();

    let page: Vec<&String> = remaining.iter().take(limit).copied().collect();
    let mut reply = json!({ "TableNames": page });
    if remaining.len() > limit {
        if let Some(last) = page.last() {
            reply["LastEvaluatedTableName"] = json!(last);
        }
    }
    Outcome::ok(reply)
}

fn put_item(state: &mut State, input: &Value) -> Outcome {
    let name = table_name(input);
    let Some(table) = state.tables.get_mut(name) else {
        return Outcome::table_not_found(name);
    };
    let item = object(&input["Item"]);
    let Some(position) = table.position(&item) else {
        return Outcome::error(
            "ValidationException",
            "One of the required keys was not given a value",
        );
    };

    let old = table.items.insert(position, Value::Object(item));
    match old {
        Some(old) if wants_old_values(input) => Outcome::ok(json!({ "Attributes": old })),
        _ => Outcome::ok(json!({})),
    }
}

fn get_item(state: &State, input: &Value) -> Outcome {
    let name = table_name(input);
    let Some(table) = state.tables.get(name) else {
        return Outcome::table_not_found(name);
    };
    let Some(position) = table.position(&object(&input["Key"])) else {
        return Outcome::error(
            "ValidationException",
            "The provided key element does not match the schema",
        );
    };

    match table.items.get(&position) {
        Some(item) => Outcome::ok(json!({ "Item": item })),
        None => Outcome::ok(json!({})),
    }
}

fn delete_item(state: &mut State, input: &Value) -> Outcome {
    let name = table_name(input);
    let Some(table) = state.tables.get_mut(name) else {
        return Outcome::table_not_found(name);
    };
    let Some(position) = table.position(&object(&input["Key"])) else {
        return Outcome::error(
            "ValidationException",
            "The provided key element does not match the schema",
        );
    };

    match table.items.remove(&position) {
        Some(old) if wants_old_values(input) => Outcome::ok(json!({ "Attributes": old })),
        _ => Outcome::ok(json!({})),
    }
}

fn scan(state: &State, input: &Value) -> Outcome {
    let name = table_name(input);
    let Some(table) = state.tables.get(name) else {
        return Outcome::table_not_found(name);
    };
    let start = input["ExclusiveStartKey"]
        .as_object()
        .and_then(|key| table.position(key));
    let limit = page_limit(input);

    let remaining: Vec<(&String, &Value)> = table
        .items
        .iter()
        .filter(|(position, _)| start.as_ref().is_none_or(|s| position.as_str() > s.as_str()))
        .collect();
    let page: Vec<&Value> = remaining.iter().take(limit).map(|(_, item)| *item).collect();

    let mut reply = json!({
        "Items": page,
        "Count": page.len(),
        "ScannedCount": page.len(),
    });
    if remaining.len() > limit {
        if let Some(last) = page.last() {
            reply["LastEvaluatedKey"] = table.key_of(&object(last));
        }
    }
    Outcome::ok(reply)
}
