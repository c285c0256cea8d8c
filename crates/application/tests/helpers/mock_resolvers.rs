use async_trait::async_trait;
use ferrous_resolver_application::ports::{BootstrapResolver, NameserverClient, QueryOutcome};
use ferrous_resolver_domain::{
    DnsMessage, DnsQuery, DomainError, DomainName, RecordSet, RecordType,
};
use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::{Arc, Mutex};

/// Nameserver network scripted per (server address, question).
///
/// Unscripted questions time out, as an unresponsive server would.
#[derive(Clone, Default)]
pub struct MockNameserverClient {
    responses: Arc<Mutex<HashMap<(IpAddr, DnsQuery), DnsMessage>>>,
    sent: Arc<Mutex<Vec<(SocketAddr, DnsQuery)>>>,
}

impl MockNameserverClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, server: IpAddr, response: DnsMessage) {
        self.responses
            .lock()
            .unwrap()
            .insert((server, response.query.clone()), response);
    }

    pub fn query_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn sent(&self) -> Vec<(SocketAddr, DnsQuery)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn servers_for(&self, query: &DnsQuery) -> Vec<IpAddr> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, sent)| sent == query)
            .map(|(server, _)| server.ip())
            .collect()
    }
}

#[async_trait]
impl NameserverClient for MockNameserverClient {
    async fn query(&self, server: SocketAddr, query: &DnsQuery) -> QueryOutcome {
        self.sent.lock().unwrap().push((server, query.clone()));
        let scripted = self
            .responses
            .lock()
            .unwrap()
            .get(&(server.ip(), query.clone()))
            .cloned();
        match scripted {
            Some(response) => QueryOutcome::from_response(response),
            None => QueryOutcome::Timeout,
        }
    }
}

#[derive(Clone, Default)]
pub struct MockBootstrapResolver {
    answers: Arc<Mutex<HashMap<(DomainName, RecordType), RecordSet>>>,
    should_fail: Arc<Mutex<bool>>,
}

impl MockBootstrapResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_answer(&self, set: RecordSet) {
        self.answers
            .lock()
            .unwrap()
            .insert((set.name.clone(), set.record_type), set);
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.lock().unwrap() = should_fail;
    }
}

#[async_trait]
impl BootstrapResolver for MockBootstrapResolver {
    async fn lookup(
        &self,
        name: &DomainName,
        record_type: RecordType,
    ) -> Result<RecordSet, DomainError> {
        if *self.should_fail.lock().unwrap() {
            return Err(DomainError::TransportAllServersUnreachable);
        }
        self.answers
            .lock()
            .unwrap()
            .get(&(name.clone(), record_type))
            .cloned()
            .ok_or_else(|| DomainError::InvalidDnsResponse(format!("no answer for {}", name)))
    }
}
