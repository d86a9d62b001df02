//! # Mock Framework
//!
//! Utilities for testing code that talks to a [`ResourceClient`] without running a real
//! [`ResourceActor`](crate::ResourceActor).
//!
//! A [`MockClient`] hands out an ordinary `ResourceClient<T>` whose requests are answered
//! from a queue of scripted expectations:
//!
//! ```ignore
//! let mut mock = MockClient::<Pet>::new();
//! mock.expect_get(id).return_err(FrameworkError::NotFound(id.to_string()));
//! mock.expect_list().return_ok(vec![]);
//!
//! let client = mock.client();
//! // exercise code that uses `client`...
//! mock.verify(); // every expectation consumed, no unexpected requests
//! ```
//!
//! Requests are matched strictly in order. A request whose kind (or id) differs from the
//! next expectation is recorded as a failure, its responder is dropped (the caller sees
//! [`FrameworkError::ActorDropped`]) and [`MockClient::verify`] panics later.

use crate::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

/// Kind of request an expectation stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Create,
    Get,
    Update,
    Delete,
    List,
}

enum Reply<T: ActorEntity> {
    Entity(Result<T, FrameworkError>),
    Unit(Result<(), FrameworkError>),
    Entities(Result<Vec<T>, FrameworkError>),
}

enum Responder<T: ActorEntity> {
    Entity(oneshot::Sender<Result<T, FrameworkError>>),
    Unit(oneshot::Sender<Result<(), FrameworkError>>),
    Entities(oneshot::Sender<Result<Vec<T>, FrameworkError>>),
}

struct Expectation<T: ActorEntity> {
    op: Op,
    id: Option<T::Id>,
    reply: Reply<T>,
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    failures: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let failures = Arc::new(Mutex::new(Vec::new()));

        let queue = expectations.clone();
        let failed = failures.clone();
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let (op, id, responder) = split(request);
                let next = queue.lock().unwrap().pop_front();

                let Some(expectation) = next else {
                    failed
                        .lock()
                        .unwrap()
                        .push(format!("unexpected {op:?} request (id {id:?})"));
                    continue;
                };

                if expectation.op != op {
                    failed.lock().unwrap().push(format!(
                        "expected {:?} request, got {op:?}",
                        expectation.op
                    ));
                    continue;
                }
                if expectation.id.is_some() && expectation.id != id {
                    failed.lock().unwrap().push(format!(
                        "{op:?} expected id {:?}, got {id:?}",
                        expectation.id
                    ));
                    continue;
                }

                match (responder, expectation.reply) {
                    (Responder::Entity(tx), Reply::Entity(r)) => {
                        let _ = tx.send(r);
                    }
                    (Responder::Unit(tx), Reply::Unit(r)) => {
                        let _ = tx.send(r);
                    }
                    (Responder::Entities(tx), Reply::Entities(r)) => {
                        let _ = tx.send(r);
                    }
                    _ => failed
                        .lock()
                        .unwrap()
                        .push(format!("{op:?} reply has the wrong shape")),
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            failures,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `create` request.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(Op::Create, None, Reply::Entity)
    }

    /// Expects a `get` request for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(Op::Get, Some(id), Reply::Entity)
    }

    /// Expects an `update` request for `id`.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(Op::Update, Some(id), Reply::Entity)
    }

    /// Expects a `delete` request for `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(Op::Delete, Some(id), Reply::Unit)
    }

    /// Expects a `list` request.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(Op::List, None, Reply::Entities)
    }

    /// Panics unless every expectation was consumed and no request was rejected.
    pub fn verify(&self) {
        let failures = self.failures.lock().unwrap();
        if !failures.is_empty() {
            panic!("Mock received unexpected requests: {failures:?}");
        }
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }

    fn builder<R>(
        &self,
        op: Op,
        id: Option<T::Id>,
        wrap: fn(Result<R, FrameworkError>) -> Reply<T>,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            op,
            id,
            wrap,
            expectations: self.expectations.clone(),
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder returned by the `expect_*` methods. Finish it with `return_ok` or `return_err`.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    op: Op,
    id: Option<T::Id>,
    wrap: fn(Result<R, FrameworkError>) -> Reply<T>,
    expectations: Queue<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = Expectation {
            op: self.op,
            id: self.id,
            reply: (self.wrap)(response),
        };
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

fn split<T: ActorEntity>(request: ResourceRequest<T>) -> (Op, Option<T::Id>, Responder<T>) {
    match request {
        ResourceRequest::Create { respond_to, .. } => (Op::Create, None, Responder::Entity(respond_to)),
        ResourceRequest::Get { id, respond_to } => (Op::Get, Some(id), Responder::Entity(respond_to)),
        ResourceRequest::Update { id, respond_to, .. } => {
            (Op::Update, Some(id), Responder::Entity(respond_to))
        }
        ResourceRequest::Delete { id, respond_to } => (Op::Delete, Some(id), Responder::Unit(respond_to)),
        ResourceRequest::List { respond_to, .. } => (Op::List, None, Responder::Entities(respond_to)),
    }
}
