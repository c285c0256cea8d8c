use ferrous_resolver_application::services::ResolverCache;
use ferrous_resolver_domain::{
    DnsMessage, DnsQuery, DomainName, RecordData, RecordSet, RecordType, ResponseCode,
};
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

pub const ROOT_SERVER: &str = "a.root-servers.net";
pub const ROOT_IP: Ipv4Addr = Ipv4Addr::new(198, 41, 0, 4);
pub const GTLD_SERVER: &str = "a.gtld-servers.net";
pub const GTLD_IP: Ipv4Addr = Ipv4Addr::new(192, 5, 6, 30);
pub const EXAMPLE_SERVER: &str = "ns1.example.com";
pub const EXAMPLE_IP: Ipv4Addr = Ipv4Addr::new(192, 0, 2, 53);

pub fn name(s: &str) -> DomainName {
    DomainName::from_str(s).unwrap()
}

pub fn query(domain: &str, record_type: RecordType) -> DnsQuery {
    DnsQuery::new(name(domain), record_type)
}

pub fn ip(addr: Ipv4Addr) -> IpAddr {
    IpAddr::V4(addr)
}

pub fn ns_set(zone: &str, servers: &[&str]) -> RecordSet {
    RecordSet::with_records(
        name(zone),
        RecordType::NS,
        172800,
        servers.iter().map(|s| RecordData::Ns(name(s))).collect(),
    )
}

pub fn a_set(owner: &str, addresses: &[Ipv4Addr]) -> RecordSet {
    RecordSet::with_records(
        name(owner),
        RecordType::A,
        3600,
        addresses.iter().map(|a| RecordData::A(*a)).collect(),
    )
}

pub fn cname_set(owner: &str, target: &str) -> RecordSet {
    RecordSet::with_records(
        name(owner),
        RecordType::CNAME,
        300,
        vec![RecordData::Cname(name(target))],
    )
}

/// Non-authoritative referral carrying one NS set and its glue.
pub fn referral(q: &DnsQuery, zone: &str, servers: &[(&str, Ipv4Addr)]) -> DnsMessage {
    let mut message = DnsMessage::new(q.clone(), ResponseCode::NoError);
    let names: Vec<&str> = servers.iter().map(|(server, _)| *server).collect();
    message.authority.push(ns_set(zone, &names));
    for (server, address) in servers {
        message.additional.push(a_set(server, &[*address]));
    }
    message
}

/// Referral without any glue addresses.
pub fn glueless_referral(q: &DnsQuery, zone: &str, servers: &[&str]) -> DnsMessage {
    let mut message = DnsMessage::new(q.clone(), ResponseCode::NoError);
    message.authority.push(ns_set(zone, servers));
    message
}

pub fn answer(q: &DnsQuery, addresses: &[Ipv4Addr]) -> DnsMessage {
    let mut message = DnsMessage::new(q.clone(), ResponseCode::NoError);
    message.authoritative = true;
    message
        .answers
        .push(a_set(&q.name.to_string(), addresses));
    message
}

pub fn cname_answer(q: &DnsQuery, target: &str) -> DnsMessage {
    let mut message = DnsMessage::new(q.clone(), ResponseCode::NoError);
    message.authoritative = true;
    message
        .answers
        .push(cname_set(&q.name.to_string(), target));
    message
}

pub fn nxdomain(q: &DnsQuery, zone: &str) -> DnsMessage {
    let mut message = DnsMessage::new(q.clone(), ResponseCode::NXDomain);
    message.authoritative = true;
    message.authority.push(RecordSet::with_records(
        name(zone),
        RecordType::SOA,
        900,
        vec![RecordData::Other(format!(
            "ns.{} hostmaster.{} 1 1800 900 604800 86400",
            zone, zone
        ))],
    ));
    message
}

/// Root hints as bootstrap would leave them.
pub fn seed_root(cache: &ResolverCache) {
    cache.insert_delegation(DomainName::root(), RecordType::NS, ns_set(".", &[ROOT_SERVER]));
    cache.insert_delegation(name(ROOT_SERVER), RecordType::A, a_set(ROOT_SERVER, &[ROOT_IP]));
}
